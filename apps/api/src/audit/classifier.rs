//! Keyword classifier. Assigns each content item to exactly one category.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//! investor → veteran → family → community, with `community` as the default arm.
//! Matching is a plain case-insensitive substring test with no word boundaries,
//! so `base` matches inside `database`.

use crate::audit::category::{AuditorConfig, Category};
use crate::models::ContentItem;

/// Evaluation order for the keyword rules.
pub const PRIORITY: [Category; 4] = [
    Category::Investor,
    Category::Veteran,
    Category::Family,
    Category::Community,
];

/// Category assigned when no rule matches.
pub const FALLBACK: Category = Category::Community;

/// Classifies already-combined text. `text` must be lowercased.
pub fn classify_text(text: &str, config: &AuditorConfig) -> Category {
    PRIORITY
        .into_iter()
        .find(|&category| matches_any(text, config.keywords(category)))
        .unwrap_or(FALLBACK)
}

pub fn classify_item<T: ContentItem>(item: &T, config: &AuditorConfig) -> Category {
    classify_text(&item.audit_text(), config)
}

/// Returns the first keyword of `category` found in `text`, if any.
pub fn first_match<'a>(text: &str, config: &'a AuditorConfig, category: Category) -> Option<&'a str> {
    config
        .keywords(category)
        .iter()
        .find(|kw| text.contains(kw.as_str()))
        .map(String::as_str)
}

fn matches_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| text.contains(kw.as_str()))
}
