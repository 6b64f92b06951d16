//! Audience categories, their keyword sets and target share of the content mix.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Family,
    Community,
    Investor,
    Veteran,
}

impl Category {
    /// Declared order. Used for reporting and for the dominant-category tie-break.
    pub const ALL: [Category; 4] = [
        Category::Family,
        Category::Community,
        Category::Investor,
        Category::Veteran,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Family => "family",
            Category::Community => "community",
            Category::Investor => "investor",
            Category::Veteran => "veteran",
        }
    }

    /// Capitalized label used in recommendation text and story labels.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Family => "Family",
            Category::Community => "Community",
            Category::Investor => "Investor",
            Category::Veteran => "Veteran",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One integer per category. Serializes as a `{family, community, investor, veteran}` map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub family: u32,
    pub community: u32,
    pub investor: u32,
    pub veteran: u32,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Family => self.family,
            Category::Community => self.community,
            Category::Investor => self.investor,
            Category::Veteran => self.veteran,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Family => &mut self.family,
            Category::Community => &mut self.community,
            Category::Investor => &mut self.investor,
            Category::Veteran => &mut self.veteran,
        }
    }

    /// Values in declared category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, v)| v).sum()
    }
}

const INVESTOR_KEYWORDS: &[&str] = &[
    "cash offer",
    "cash flow",
    "as-is",
    "investor",
    "asset",
    "roi",
    "yield",
    "capital",
    "acquisition",
    "liquidity",
    "market value",
    "brrr",
    "equity",
    "turnkey",
    "portfolio",
];

const VETERAN_KEYWORDS: &[&str] = &[
    "vash",
    "hud-vash",
    "veteran",
    "military",
    "deployed",
    "service member",
    "hero",
    "base",
    "voucher",
    "sacrifice",
];

const FAMILY_KEYWORDS: &[&str] = &[
    "school",
    "family",
    "children",
    "kids",
    "backyard",
    "playground",
    "district",
    "safe",
    "bedroom",
    "stability",
    "dignity",
    "future",
    "spacious",
];

const COMMUNITY_KEYWORDS: &[&str] = &[
    "east texas",
    "tyler",
    "longview",
    "marshall",
    "smith county",
    "revitalization",
    "neighborhood",
    "community",
    "local",
    "impact",
    "affordable",
    "standard",
    "housing",
    "economy",
    "development",
    "historic",
];

/// Immutable auditor configuration: keyword sets, targets and tolerances.
///
/// Keywords are stored lowercased. Targets are assumed to sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditorConfig {
    pub family_keywords: Vec<String>,
    pub community_keywords: Vec<String>,
    pub investor_keywords: Vec<String>,
    pub veteran_keywords: Vec<String>,
    pub targets: CategoryCounts,
    /// Symmetric band for family, community and investor, in percentage points.
    pub tolerance: u32,
    /// Veteran share above this triggers a warning. There is no lower bound.
    pub veteran_ceiling: u32,
}

impl Default for AuditorConfig {
    fn default() -> Self {
        Self {
            family_keywords: lowercase_all(FAMILY_KEYWORDS),
            community_keywords: lowercase_all(COMMUNITY_KEYWORDS),
            investor_keywords: lowercase_all(INVESTOR_KEYWORDS),
            veteran_keywords: lowercase_all(VETERAN_KEYWORDS),
            targets: CategoryCounts {
                family: 40,
                community: 30,
                investor: 20,
                veteran: 10,
            },
            tolerance: 10,
            veteran_ceiling: 15,
        }
    }
}

impl AuditorConfig {
    pub fn keywords(&self, category: Category) -> &[String] {
        match category {
            Category::Family => &self.family_keywords,
            Category::Community => &self.community_keywords,
            Category::Investor => &self.investor_keywords,
            Category::Veteran => &self.veteran_keywords,
        }
    }

    pub fn target(&self, category: Category) -> u32 {
        self.targets.get(category)
    }
}

fn lowercase_all(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
