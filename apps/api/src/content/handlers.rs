//! Axum route handlers for listings and success stories.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::audit::category::Category;
use crate::errors::AppError;
use crate::models::property::PropertyListing;
use crate::models::story::SuccessStory;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PropertyListResponse {
    pub properties: Vec<PropertyListing>,
    pub count: usize,
}

/// A story tagged with the audience it speaks to.
#[derive(Debug, Serialize)]
pub struct LabeledStory {
    #[serde(flatten)]
    pub story: SuccessStory,
    pub category: Category,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct StoryListResponse {
    pub stories: Vec<LabeledStory>,
}

/// GET /api/v1/properties
pub async fn handle_list_properties(
    State(state): State<AppState>,
) -> Result<Json<PropertyListResponse>, AppError> {
    let properties = state.content.properties().await?;
    Ok(Json(PropertyListResponse {
        count: properties.len(),
        properties,
    }))
}

/// GET /api/v1/properties/:id
pub async fn handle_get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PropertyListing>, AppError> {
    state
        .content
        .property(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Property {id} not found")))
}

/// GET /api/v1/stories
///
/// Each story carries its classified category and a "<Category> Success Story" label.
pub async fn handle_list_stories(
    State(state): State<AppState>,
) -> Result<Json<StoryListResponse>, AppError> {
    let stories = state
        .content
        .stories()
        .await?
        .into_iter()
        .map(|story| {
            let category = state.auditor.classify(&story);
            LabeledStory {
                label: format!("{} Success Story", category.label()),
                category,
                story,
            }
        })
        .collect();
    Ok(Json(StoryListResponse { stories }))
}
