//! REST client for the article revision endpoints, backed by reqwest.

use crate::ArticlesApi;
use async_trait::async_trait;
use draftlink_core::error::{DraftlinkError, DraftlinkResult};
use draftlink_core::ArticleId;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

const ACTION_GET_DRAFT: &str = "get draft revision";
const ACTION_UPDATE_DRAFT: &str = "update draft revision";
const ACTION_PUBLISH: &str = "publish document";

/// Talks to `{base_url}/v1/article` with a bearer token.
///
/// ```ignore
/// let client = RestClient::new("https://api.example.com", &token, DEFAULT_TIMEOUT)?;
/// let draft = client.get_draft_revision(&id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    article_url: String,
}

impl RestClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> DraftlinkResult<Self> {
        if base_url.is_empty() {
            return Err(DraftlinkError::InvalidInput(
                "API base URL must not be empty".into(),
            ));
        }
        url::Url::parse(base_url).map_err(|e| {
            DraftlinkError::InvalidInput(format!("invalid API base URL {base_url}: {e}"))
        })?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| DraftlinkError::InvalidInput(format!("invalid API token: {e}")))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| DraftlinkError::Transport(e.to_string()))?;

        let article_url = format!("{}/v1/article", base_url.trim_end_matches('/'));
        tracing::info!(article_url, timeout_ms = timeout.as_millis() as u64, "api client ready");

        Ok(Self {
            client,
            article_url,
        })
    }

    fn revision_url(&self, id: &ArticleId, revision: &str) -> String {
        format!("{}/{}/revision/{}", self.article_url, id, revision)
    }
}

#[async_trait]
impl ArticlesApi for RestClient {
    async fn get_draft_revision(&self, id: &ArticleId) -> DraftlinkResult<Value> {
        let url = self.revision_url(id, "draft");
        tracing::debug!(url, "fetching draft revision");

        let resp = self.client.get(&url).send().await.map_err(transport)?;
        let resp = ensure_ok(resp, ACTION_GET_DRAFT)?;

        resp.json::<Value>()
            .await
            .map_err(|e| DraftlinkError::Decode(e.to_string()))
    }

    async fn update_draft_revision(&self, id: &ArticleId, draft: &Value) -> DraftlinkResult<()> {
        let url = self.revision_url(id, "draft");
        let body = json!({
            "document_id": id,
            "draftRevision": draft,
        });
        tracing::debug!(url, "updating draft revision");

        let resp = self.client.put(&url).json(&body).send().await.map_err(transport)?;
        ensure_ok(resp, ACTION_UPDATE_DRAFT).map(drop)
    }

    async fn publish_document(&self, id: &ArticleId) -> DraftlinkResult<()> {
        let url = self.revision_url(id, "published");
        let body = json!({
            "type": "story",
            "id": id,
        });
        tracing::debug!(url, "publishing document");

        let resp = self.client.post(&url).json(&body).send().await.map_err(transport)?;
        ensure_ok(resp, ACTION_PUBLISH).map(drop)
    }
}

/// Only `200 OK` counts as success; every other status is an error.
fn ensure_ok(resp: Response, action: &'static str) -> DraftlinkResult<Response> {
    let status = resp.status();
    if status != StatusCode::OK {
        tracing::warn!(action, status = status.as_u16(), "unexpected status");
        return Err(DraftlinkError::UnexpectedStatus {
            action,
            status: status.as_u16(),
        });
    }
    Ok(resp)
}

fn transport(e: reqwest::Error) -> DraftlinkError {
    DraftlinkError::Transport(e.to_string())
}
