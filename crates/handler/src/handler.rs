//! The article pipeline and its response mapping.
//!
//! Pipeline: parse id -> fetch draft -> link keyword -> update draft -> publish.
//! Each network step is retried on its own; the first step to exhaust its
//! retries aborts the rest.

use crate::event::{InvocationEvent, InvocationResponse};
use draftlink_api::{ArticlesApi, RetryPolicy};
use draftlink_core::error::DraftlinkResult;
use draftlink_core::{process_article, ArticleId, LinkRule};

/// Built once and reused across invocations.
///
/// ```ignore
/// let handler = Handler::new(RestClient::new(&base_url, &token, DEFAULT_TIMEOUT)?);
/// let response = handler.handle(&event).await;
/// ```
#[derive(Debug)]
pub struct Handler<A> {
    api: A,
    retry: RetryPolicy,
    rule: LinkRule,
}

impl<A: ArticlesApi> Handler<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            retry: RetryPolicy::default(),
            rule: LinkRule::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_link_rule(mut self, rule: LinkRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn link_rule(&self) -> &LinkRule {
        &self.rule
    }

    /// Handle one invocation. Never fails: every outcome becomes a response.
    pub async fn handle(&self, event: &InvocationEvent) -> InvocationResponse {
        tracing::debug!(body = ?event.body, "received event");

        let article_id = match event.article_id() {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "rejecting request");
                return InvocationResponse::bad_request(&e);
            }
        };

        match self.process(&article_id).await {
            Ok(()) => {
                tracing::info!(%article_id, "article processed and published");
                InvocationResponse::ok(&article_id)
            }
            Err(e) => {
                tracing::error!(%article_id, error = %e, "error processing article");
                InvocationResponse::server_error(&e)
            }
        }
    }

    /// Fetch, rewrite, store, and publish one article.
    pub async fn process(&self, article_id: &ArticleId) -> DraftlinkResult<()> {
        let api = &self.api;

        let draft = self
            .retry
            .execute(|| api.get_draft_revision(article_id))
            .await?;
        tracing::debug!(%article_id, "fetched draft revision");

        let processed = process_article(&draft, &self.rule);

        self.retry
            .execute(|| api.update_draft_revision(article_id, &processed))
            .await?;
        tracing::debug!(%article_id, "updated draft revision");

        self.retry
            .execute(|| api.publish_document(article_id))
            .await?;

        Ok(())
    }
}
