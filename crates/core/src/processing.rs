//! Keyword-to-hyperlink substitution over draft revisions.
//!
//! A draft revision is free-form JSON. Only `content_elements` is
//! interpreted: every element with `"type": "text"` and a non-empty string
//! `content` has each keyword occurrence wrapped in an anchor. Everything
//! else passes through untouched.

use crate::types::LinkRule;
use serde_json::Value;

const CONTENT_ELEMENTS: &str = "content_elements";

/// Replace every occurrence of the rule's keyword in `content`.
pub fn replace_keyword(content: &str, rule: &LinkRule) -> String {
    content.replace(&rule.keyword, &rule.anchor())
}

/// Returns a rewritten copy of `article`. The input is never modified.
pub fn process_article(article: &Value, rule: &LinkRule) -> Value {
    let mut processed = article.clone();

    let Some(elements) = processed
        .get_mut(CONTENT_ELEMENTS)
        .and_then(Value::as_array_mut)
    else {
        return processed;
    };

    let anchor = rule.anchor();
    for element in elements.iter_mut() {
        let Some(obj) = element.as_object_mut() else {
            continue;
        };
        if obj.get("type").and_then(Value::as_str) != Some("text") {
            continue;
        }
        if let Some(Value::String(content)) = obj.get_mut("content") {
            if !content.is_empty() {
                *content = content.replace(&rule.keyword, &anchor);
            }
        }
    }

    processed
}
