//! API-Gateway-shaped request and response envelopes.

use draftlink_core::error::{DraftlinkError, DraftlinkResult};
use draftlink_core::ArticleId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const MSG_SUCCESS: &str = "Article processed and published successfully";
pub const MSG_FAILURE: &str = "Error processing article";

/// Inbound event. Only `body` is read; other gateway fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationEvent {
    #[serde(default)]
    pub body: Option<String>,
}

impl InvocationEvent {
    /// Event whose body is the serialized `body` value.
    pub fn with_body(body: &Value) -> Self {
        Self {
            body: Some(body.to_string()),
        }
    }

    /// Extract `articleId` from the JSON body.
    ///
    /// A missing body, a body that is not JSON, and an `articleId` that is
    /// absent, empty, or not a string all count as missing.
    pub fn article_id(&self) -> DraftlinkResult<ArticleId> {
        let missing = || DraftlinkError::MissingParameter(ArticleId::FIELD);

        let body = self.body.as_deref().ok_or_else(missing)?;
        let parsed: Value = serde_json::from_str(body).map_err(|e| {
            tracing::warn!(error = %e, "request body is not valid JSON");
            missing()
        })?;

        let id = parsed
            .get(ArticleId::FIELD)
            .and_then(Value::as_str)
            .ok_or_else(missing)?;
        ArticleId::new(id)
    }
}

/// Outbound response: status, headers, and a JSON-encoded body string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuccessBody<'a> {
    message: &'static str,
    article_id: &'a ArticleId,
    timestamp: String,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl InvocationResponse {
    fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to encode response body");
            String::from("{}")
        });
        let headers = BTreeMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        Self {
            status_code,
            headers,
            body,
        }
    }

    /// 200 with the processed article id and an RFC 3339 timestamp.
    pub fn ok(article_id: &ArticleId) -> Self {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        Self::json(
            200,
            &SuccessBody {
                message: MSG_SUCCESS,
                article_id,
                timestamp,
            },
        )
    }

    /// 400 carrying the validation error as the message.
    pub fn bad_request(err: &DraftlinkError) -> Self {
        Self::json(
            400,
            &ErrorBody {
                message: err.to_string(),
                error: None,
            },
        )
    }

    /// 500 carrying the failure message under `error`.
    pub fn server_error(err: &DraftlinkError) -> Self {
        Self::json(
            500,
            &ErrorBody {
                message: MSG_FAILURE.to_string(),
                error: Some(err.to_string()),
            },
        )
    }

    /// Parse `body` back into JSON.
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}
