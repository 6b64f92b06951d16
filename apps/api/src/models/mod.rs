pub mod property;
pub mod story;

use serde::{Deserialize, Serialize};

/// Any piece of marketing copy the auditor can read.
///
/// Both fields are optional; absent text is treated as empty.
pub trait ContentItem {
    fn title(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;

    /// `title + " " + description`, lowercased.
    fn audit_text(&self) -> String {
        format!(
            "{} {}",
            self.title().unwrap_or_default(),
            self.description().unwrap_or_default()
        )
        .to_lowercase()
    }
}

/// Bare title/description pair, used for ad-hoc audit payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSnippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ContentSnippet {
    #[cfg(test)]
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
        }
    }
}

impl ContentItem for ContentSnippet {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_text_joins_and_lowercases() {
        let s = ContentSnippet::new("Family Home", "Great SCHOOLS");
        assert_eq!(s.audit_text(), "family home great schools");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let s = ContentSnippet::default();
        assert_eq!(s.audit_text(), " ");

        let s: ContentSnippet = serde_json::from_str(r#"{"description":"East Texas"}"#).unwrap();
        assert_eq!(s.audit_text(), " east texas");
    }
}
