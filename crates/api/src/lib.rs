//! Content API abstraction, REST client, and retry executor for draftlink.

pub mod rest;
pub mod retry;

use async_trait::async_trait;
use draftlink_core::error::DraftlinkResult;
use draftlink_core::ArticleId;
use serde_json::Value;
use std::sync::Arc;

pub use rest::RestClient;
pub use retry::{with_backoff, JitterSource, RetryPolicy};

/// Abstraction over the article revision endpoints of the content API.
///
/// Every method is a single request; retrying is the caller's concern.
#[async_trait]
pub trait ArticlesApi: Send + Sync {
    /// Fetch the current draft revision as raw JSON.
    async fn get_draft_revision(&self, id: &ArticleId) -> DraftlinkResult<Value>;

    /// Replace the draft revision.
    async fn update_draft_revision(&self, id: &ArticleId, draft: &Value) -> DraftlinkResult<()>;

    /// Promote the draft revision to published.
    async fn publish_document(&self, id: &ArticleId) -> DraftlinkResult<()>;
}

#[async_trait]
impl<T: ArticlesApi + ?Sized> ArticlesApi for Arc<T> {
    async fn get_draft_revision(&self, id: &ArticleId) -> DraftlinkResult<Value> {
        (**self).get_draft_revision(id).await
    }

    async fn update_draft_revision(&self, id: &ArticleId, draft: &Value) -> DraftlinkResult<()> {
        (**self).update_draft_revision(id, draft).await
    }

    async fn publish_document(&self, id: &ArticleId) -> DraftlinkResult<()> {
        (**self).publish_document(id).await
    }
}
