//! Content balance auditor.
//!
//! Classifies listings and stories into audience categories, compares the resulting
//! mix against target shares and produces recommendations. The auditor is a pure
//! function of its input and its immutable `AuditorConfig`; `AppState` shares one
//! instance behind an `Arc`.

pub mod category;
pub mod classifier;
pub mod compliance;
pub mod handlers;
pub mod recommendations;
pub mod scoring;

use serde::{Deserialize, Serialize};

use crate::audit::category::{AuditorConfig, Category, CategoryCounts};
use crate::audit::compliance::{check_compliance, format_ratio, ComplianceReport};
use crate::audit::recommendations::build_recommendations;
use crate::audit::scoring::{distribution, dominant_category};
use crate::models::ContentItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub scores: CategoryCounts,
    pub percentages: CategoryCounts,
    pub dominant_category: Category,
    pub recommendations: Vec<String>,
    pub formatted_ratio: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContentAuditor {
    config: AuditorConfig,
}

impl ContentAuditor {
    pub fn new(config: AuditorConfig) -> Self {
        Self { config }
    }

    pub fn classify<T: ContentItem>(&self, item: &T) -> Category {
        classifier::classify_item(item, &self.config)
    }

    /// Audits `first` and `second` as one combined collection.
    pub fn audit<A, B>(&self, first: &[A], second: &[B]) -> AuditResult
    where
        A: ContentItem,
        B: ContentItem,
    {
        let dist = distribution(first, second, &self.config);
        AuditResult {
            dominant_category: dominant_category(&dist.percentages),
            recommendations: build_recommendations(&dist.percentages, &self.config),
            formatted_ratio: format_ratio(&dist.percentages),
            scores: dist.scores,
            percentages: dist.percentages,
        }
    }

    pub fn compliance(&self, result: &AuditResult) -> ComplianceReport {
        check_compliance(&result.percentages, &self.config)
    }
}

/// Audits with the default keyword sets and targets.
pub fn audit_content_balance<A, B>(first: &[A], second: &[B]) -> AuditResult
where
    A: ContentItem,
    B: ContentItem,
{
    ContentAuditor::default().audit(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::PropertyListing;
    use crate::models::story::SuccessStory;
    use crate::models::ContentSnippet;

    fn snippet(title: &str, description: &str) -> ContentSnippet {
        ContentSnippet::new(title, description)
    }

    fn none() -> Vec<ContentSnippet> {
        vec![]
    }

    #[test]
    fn test_scores_cover_every_item() {
        let properties = vec![
            PropertyListing {
                title: "Family Home".to_string(),
                description: "Great schools".to_string(),
                ..Default::default()
            },
            PropertyListing::default(),
        ];
        let stories = vec![
            SuccessStory::new("Veteran Housing", "priority for veterans"),
            SuccessStory::default(),
            SuccessStory::new("Investor", "ROI"),
        ];
        let result = audit_content_balance(&properties, &stories);
        assert_eq!(result.scores.total() as usize, properties.len() + stories.len());
        assert!(result.percentages.iter().all(|(_, v)| v <= 100));
    }

    #[test]
    fn test_empty_collections_are_all_zero() {
        let result = audit_content_balance(&none(), &none());
        assert_eq!(result.scores, CategoryCounts::default());
        assert_eq!(result.percentages, CategoryCounts::default());
        assert_eq!(result.dominant_category, Category::Family);
        assert_eq!(result.formatted_ratio, "Fam:0% | Com:0% | Inv:0% | Vet:0%");
    }

    #[test]
    fn test_veteran_only_content() {
        let items = vec![
            snippet("Veteran Haven", "Exclusive units for HUD-VASH heroes"),
            snippet("Military Base", "Serving those who served"),
            snippet("Veteran Housing", "Priority for veterans"),
        ];
        let result = audit_content_balance(&items, &none());

        assert_eq!(result.scores.veteran, 3);
        assert_eq!(result.percentages.veteran, 100);
        assert_eq!(result.dominant_category, Category::Veteran);
        assert!(
            result.recommendations.iter().any(|r| {
                let r = r.to_lowercase();
                r.contains("veteran") && (r.contains("high") || r.contains("reduce"))
            }),
            "{:?}",
            result.recommendations
        );
    }

    #[test]
    fn test_mixed_content_is_family_dominant() {
        let properties = vec![
            snippet("Family Home", "Great schools, safe for kids"),
            snippet("Family Home", "Great schools, safe for kids"),
        ];
        let stories = vec![
            snippet("Local Revitalization", "Improving East Texas streets"),
            snippet("Investment", "Cash flow asset"),
        ];
        let result = audit_content_balance(&properties, &stories);

        assert_eq!(result.dominant_category, Category::Family);
        assert_eq!(result.percentages.family, 50);
        assert!(result.percentages.veteran < 10);
        assert_eq!(result.scores.community, 1);
        assert_eq!(result.scores.investor, 1);
        assert!(result.recommendations.is_empty(), "{:?}", result.recommendations);
    }

    #[test]
    fn test_investor_keywords_are_detected() {
        let items = vec![snippet(
            "Duplex Opportunity",
            "Perfect for BRRRR strategy. Cash flow positive. ROI potential is high",
        )];
        let result = audit_content_balance(&none(), &items);

        assert_eq!(result.scores.investor, 1);
        assert!(result.percentages.investor > 0);
        assert_eq!(result.dominant_category, Category::Investor);
    }

    #[test]
    fn test_regional_mention_is_community() {
        let auditor = ContentAuditor::default();
        let item = snippet("Our Roots", "Proudly serving East Texas");
        assert_eq!(auditor.classify(&item), Category::Community);
    }

    #[test]
    fn test_priority_and_fallback() {
        let auditor = ContentAuditor::default();
        assert_eq!(
            auditor.classify(&snippet("Starter Home", "Strong ROI near a great school")),
            Category::Investor
        );
        assert_eq!(
            auditor.classify(&snippet("Lorem ipsum dolor", "")),
            Category::Community
        );
    }

    #[test]
    fn test_compliance_tracks_recommendations() {
        let auditor = ContentAuditor::default();
        let items = vec![snippet("Veteran Haven", "HUD-VASH")];
        let result = auditor.audit(&items, &none());
        let report = auditor.compliance(&result);
        assert!(!report.passed);
        assert_eq!(report.failures().count(), result.recommendations.len());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = audit_content_balance(&none(), &none());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["dominantCategory"], "family");
        assert!(json["formattedRatio"].is_string());
        assert_eq!(json["scores"]["veteran"], 0);
    }
}
