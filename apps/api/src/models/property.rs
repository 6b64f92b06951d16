use serde::{Deserialize, Serialize};

use crate::models::ContentItem;

/// A rental listing as served to the listings pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyListing {
    pub id: String,
    pub title: String,
    pub address: String,
    pub price: u32,
    pub beds: u32,
    pub baths: f32,
    pub sqft: u32,
    pub badges: Vec<String>,
    pub description: String,
    pub amenities: Vec<String>,
    pub school_district: String,
    pub neighborhood: String,
    pub availability_date: String,
}

impl ContentItem for PropertyListing {
    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
}
