use crate::audit::category::{AuditorConfig, Category, CategoryCounts};

/// Builds the ordered recommendation list (family, community, investor, veteran).
///
/// Family, community and investor use a symmetric tolerance band around their target.
/// Veteran only warns when it exceeds the ceiling; a low veteran share never warns.
pub fn build_recommendations(percentages: &CategoryCounts, config: &AuditorConfig) -> Vec<String> {
    let mut tips = Vec::new();

    for category in [Category::Family, Category::Community, Category::Investor] {
        let actual = percentages.get(category);
        let target = config.target(category);
        if actual.abs_diff(target) > config.tolerance {
            let advice = if actual < target {
                under_target_tip(category)
            } else {
                over_target_tip(category)
            };
            tips.push(format!(
                "{} content is at {actual}% (Target: {target}%). {advice}",
                category.label()
            ));
        }
    }

    let veteran = percentages.veteran;
    if veteran > config.veteran_ceiling {
        tips.push(format!(
            "Veteran content is high ({veteran}%, ceiling {}%). Reduce veteran focus so it doesn't overshadow the primary Family mission.",
            config.veteran_ceiling
        ));
    }

    tips
}

fn under_target_tip(category: Category) -> &'static str {
    match category {
        Category::Family => "Highlight school districts, safety, and family amenities more.",
        Category::Community => {
            "Highlight \"East Texas\", \"Tyler\", or specific neighborhoods more."
        }
        Category::Investor => "Highlight terms like \"Asset\", \"ROI\", and \"Cash Flow\" more.",
        Category::Veteran => "Highlight HUD-VASH and veteran programs more.",
    }
}

fn over_target_tip(category: Category) -> &'static str {
    match category {
        Category::Family => {
            "Reduce focus on family messaging; make sure investors and single residents are not alienated."
        }
        Category::Community => {
            "Reduce focus on regional copy; make sure specific property features stay clear."
        }
        Category::Investor => "Reduce focus on financial jargon; emphasize the mission.",
        Category::Veteran => "Reduce focus on veteran-specific content.",
    }
}
