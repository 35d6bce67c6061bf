//! Everything needed to build a [`Handler`] against the live content API.

use crate::handler::Handler;
use draftlink_api::rest::DEFAULT_TIMEOUT;
use draftlink_api::{RestClient, RetryPolicy};
use draftlink_core::error::DraftlinkResult;
use draftlink_core::LinkRule;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Root of the content API; `/v1/article` is appended.
    pub base_url: String,
    pub token: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub link_rule: LinkRule,
}

impl HandlerConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
            link_rule: LinkRule::default(),
        }
    }

    pub fn build(self) -> DraftlinkResult<Handler<RestClient>> {
        let client = RestClient::new(&self.base_url, &self.token, self.timeout)?;

        tracing::info!(
            max_retries = self.retry.max_retries(),
            base_delay_ms = self.retry.base_delay().as_millis() as u64,
            keyword = %self.link_rule.keyword,
            "handler initialized"
        );

        Ok(Handler::new(client)
            .with_retry_policy(self.retry)
            .with_link_rule(self.link_rule))
    }
}
