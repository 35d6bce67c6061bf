//! Centralized error types for the draftlink workspace.

use thiserror::Error;

/// Top-level error enum. Variants map to the stage that failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DraftlinkError {
    /// A required request field was absent or empty.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The content API answered with something other than `200 OK`.
    #[error("Failed to {action}. Status code: {status}")]
    UnexpectedStatus { action: &'static str, status: u16 },

    /// Connection, timeout, or other transport-level failure.
    #[error("{0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type DraftlinkResult<T> = Result<T, DraftlinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_action_and_code() {
        let err = DraftlinkError::UnexpectedStatus {
            action: "get draft revision",
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Failed to get draft revision. Status code: 404"
        );
    }

    #[test]
    fn missing_parameter_message() {
        let err = DraftlinkError::MissingParameter("articleId");
        assert_eq!(err.to_string(), "Missing required parameter: articleId");
    }

    #[test]
    fn transport_message_is_passed_through() {
        let err = DraftlinkError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }
}
