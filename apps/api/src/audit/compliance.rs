//! Pass/fail view over an audit, used by the CLI exit status and the audit endpoints.

use serde::{Deserialize, Serialize};

use crate::audit::category::{AuditorConfig, Category, CategoryCounts};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub category: Category,
    pub actual: u32,
    pub target: u32,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub checks: Vec<ComplianceCheck>,
    pub passed: bool,
}

impl ComplianceReport {
    pub fn failures(&self) -> impl Iterator<Item = &ComplianceCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// A category fails exactly when it would produce a recommendation.
pub fn check_compliance(percentages: &CategoryCounts, config: &AuditorConfig) -> ComplianceReport {
    let checks: Vec<ComplianceCheck> = Category::ALL
        .into_iter()
        .map(|category| {
            let actual = percentages.get(category);
            let target = config.target(category);
            let passed = match category {
                Category::Veteran => actual <= config.veteran_ceiling,
                _ => actual.abs_diff(target) <= config.tolerance,
            };
            ComplianceCheck {
                category,
                actual,
                target,
                passed,
            }
        })
        .collect();

    let passed = checks.iter().all(|c| c.passed);
    ComplianceReport { checks, passed }
}

/// `Fam:40% | Com:30% | Inv:20% | Vet:10%`
pub fn format_ratio(percentages: &CategoryCounts) -> String {
    format!(
        "Fam:{}% | Com:{}% | Inv:{}% | Vet:{}%",
        percentages.family, percentages.community, percentages.investor, percentages.veteran
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::recommendations::build_recommendations;

    fn pct(family: u32, community: u32, investor: u32, veteran: u32) -> CategoryCounts {
        CategoryCounts {
            family,
            community,
            investor,
            veteran,
        }
    }

    #[test]
    fn test_on_target_passes() {
        let report = check_compliance(&pct(40, 30, 20, 10), &AuditorConfig::default());
        assert!(report.passed);
        assert_eq!(report.checks.len(), 4);
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_zero_veteran_passes() {
        let report = check_compliance(&pct(45, 35, 20, 0), &AuditorConfig::default());
        assert!(report.passed);
    }

    #[test]
    fn test_failures_match_recommendations() {
        let config = AuditorConfig::default();
        for p in [
            pct(0, 0, 0, 100),
            pct(50, 25, 25, 0),
            pct(70, 10, 10, 10),
            pct(20, 20, 20, 40),
        ] {
            let report = check_compliance(&p, &config);
            let recs = build_recommendations(&p, &config);
            assert_eq!(report.failures().count(), recs.len(), "{p:?}");
            assert_eq!(report.passed, recs.is_empty());
        }
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(
            format_ratio(&pct(50, 25, 25, 0)),
            "Fam:50% | Com:25% | Inv:25% | Vet:0%"
        );
    }
}
