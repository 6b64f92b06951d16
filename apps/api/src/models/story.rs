use serde::{Deserialize, Serialize};

use crate::models::ContentItem;

/// A success story or testimonial snippet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuccessStory {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl SuccessStory {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            name: None,
            location: None,
        }
    }
}

impl ContentItem for SuccessStory {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
