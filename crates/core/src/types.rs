//! Domain types for draftlink.

use crate::error::{DraftlinkError, DraftlinkResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Article identity
// ---------------------------------------------------------------------------

/// Identifier of an article in the content API.
///
/// Never empty. Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArticleId(String);

impl ArticleId {
    pub const FIELD: &'static str = "articleId";

    pub fn new(id: impl Into<String>) -> DraftlinkResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DraftlinkError::MissingParameter(Self::FIELD));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ArticleId {
    type Error = DraftlinkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ArticleId> for String {
    fn from(id: ArticleId) -> Self {
        id.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Link rule
// ---------------------------------------------------------------------------

pub const DEFAULT_KEYWORD: &str = "Google";
pub const DEFAULT_HREF: &str = "https://www.google.com/";

/// Keyword to look for in text elements and the URL it links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRule {
    pub keyword: String,
    pub href: String,
}

impl LinkRule {
    pub fn new(keyword: impl Into<String>, href: impl Into<String>) -> DraftlinkResult<Self> {
        let keyword = keyword.into();
        if keyword.is_empty() {
            return Err(DraftlinkError::InvalidInput(
                "link keyword must not be empty".into(),
            ));
        }
        Ok(Self {
            keyword,
            href: href.into(),
        })
    }

    /// The anchor element every keyword occurrence is replaced with.
    pub fn anchor(&self) -> String {
        format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            self.href, self.keyword
        )
    }
}

impl Default for LinkRule {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
            href: DEFAULT_HREF.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_article_id_is_missing() {
        let err = ArticleId::new("").unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: articleId");
    }

    #[test]
    fn article_id_deserializes_from_string() {
        let id: ArticleId = serde_json::from_str(r#""45bd40bc""#).unwrap();
        assert_eq!(id.as_str(), "45bd40bc");
        assert!(serde_json::from_str::<ArticleId>(r#""""#).is_err());
    }

    #[test]
    fn default_rule_anchor() {
        assert_eq!(
            LinkRule::default().anchor(),
            r#"<a href="https://www.google.com/" target="_blank">Google</a>"#
        );
    }

    #[test]
    fn empty_keyword_rejected() {
        assert!(LinkRule::new("", "https://example.com/").is_err());
    }
}
