use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::audit::category::{AuditorConfig, Category, CategoryCounts};
use crate::audit::classifier::{classify_text, first_match};
use crate::models::ContentItem;

/// Category tallies with their rounded percentage shares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub scores: CategoryCounts,
    pub percentages: CategoryCounts,
}

/// Classifies every item of `first` then `second` in one pass and tallies the results.
pub fn tally<A, B>(first: &[A], second: &[B], config: &AuditorConfig) -> CategoryCounts
where
    A: ContentItem,
    B: ContentItem,
{
    let mut scores = CategoryCounts::default();
    let texts = first
        .iter()
        .map(|item| item.audit_text())
        .chain(second.iter().map(|item| item.audit_text()));

    for text in texts {
        let category = classify_text(&text, config);
        debug!(
            %category,
            keyword = first_match(&text, config, category).unwrap_or("<fallback>"),
            "classified content item"
        );
        *scores.get_mut(category) += 1;
    }
    scores
}

/// `round(100 * score / total)` per category; all zero when `total == 0`.
///
/// Rounding is half away from zero and the sum may drift from 100 by a point or two.
pub fn to_percentages(scores: &CategoryCounts) -> CategoryCounts {
    let total = scores.total();
    if total == 0 {
        return CategoryCounts::default();
    }
    let pct = |v: u32| ((v as f64 / total as f64) * 100.0).round() as u32;
    CategoryCounts {
        family: pct(scores.family),
        community: pct(scores.community),
        investor: pct(scores.investor),
        veteran: pct(scores.veteran),
    }
}

/// Category with the highest share. Ties go to whichever comes first in declared order,
/// so an all-zero distribution resolves to `family`.
pub fn dominant_category(percentages: &CategoryCounts) -> Category {
    let mut best = Category::ALL[0];
    let mut best_value = percentages.get(best);
    for (category, value) in percentages.iter().skip(1) {
        if value > best_value {
            best = category;
            best_value = value;
        }
    }
    best
}

pub fn distribution<A, B>(first: &[A], second: &[B], config: &AuditorConfig) -> Distribution
where
    A: ContentItem,
    B: ContentItem,
{
    let scores = tally(first, second, config);
    let percentages = to_percentages(&scores);
    Distribution {
        scores,
        percentages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentSnippet;

    fn counts(family: u32, community: u32, investor: u32, veteran: u32) -> CategoryCounts {
        CategoryCounts {
            family,
            community,
            investor,
            veteran,
        }
    }

    #[test]
    fn test_tally_covers_both_collections() {
        let a = vec![
            ContentSnippet::new("Family Home", "Great schools"),
            ContentSnippet::new("Lorem", "ipsum"),
        ];
        let b = vec![ContentSnippet::new("Investment", "Cash flow asset")];
        let scores = tally(&a, &b, &AuditorConfig::default());
        assert_eq!(scores.total(), 3);
        assert_eq!(scores, counts(1, 1, 1, 0));
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let empty: Vec<ContentSnippet> = vec![];
        let d = distribution(&empty, &empty, &AuditorConfig::default());
        assert_eq!(d.scores, CategoryCounts::default());
        assert_eq!(d.percentages, CategoryCounts::default());
    }

    #[test]
    fn test_percentages_of_four_items() {
        assert_eq!(to_percentages(&counts(2, 1, 1, 0)), counts(50, 25, 25, 0));
    }

    #[test]
    fn test_percentages_rounding_drift_is_not_corrected() {
        // 1/3 each → 33 + 33 + 33 = 99
        let p = to_percentages(&counts(1, 1, 1, 0));
        assert_eq!(p, counts(33, 33, 33, 0));
        assert!((98..=102).contains(&p.total()));
    }

    #[test]
    fn test_percentages_within_bounds() {
        let p = to_percentages(&counts(0, 0, 0, 7));
        assert_eq!(p.veteran, 100);
        assert!(p.iter().all(|(_, v)| v <= 100));
    }

    #[test]
    fn test_dominant_picks_highest() {
        assert_eq!(dominant_category(&counts(10, 20, 60, 10)), Category::Investor);
        assert_eq!(dominant_category(&counts(0, 0, 0, 100)), Category::Veteran);
    }

    #[test]
    fn test_dominant_tie_goes_to_declared_order() {
        assert_eq!(dominant_category(&counts(0, 0, 0, 0)), Category::Family);
        assert_eq!(dominant_category(&counts(0, 40, 40, 20)), Category::Community);
    }
}
