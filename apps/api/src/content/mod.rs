//! Content sources: where listings and success stories come from.
//!
//! `AppState` holds an `Arc<dyn ContentSource>`, chosen at startup from config:
//! the built-in seed content, or a JSON file when `CONTENT_DATA_PATH` is set.

pub mod handlers;
pub mod seed;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::property::PropertyListing;
use crate::models::story::SuccessStory;

/// On-disk shape of a content file. Either list may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentBundle {
    #[serde(default)]
    pub properties: Vec<PropertyListing>,
    #[serde(default)]
    pub stories: Vec<SuccessStory>,
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn properties(&self) -> Result<Vec<PropertyListing>, AppError>;

    async fn stories(&self) -> Result<Vec<SuccessStory>, AppError>;

    async fn property(&self, id: &str) -> Result<Option<PropertyListing>, AppError> {
        Ok(self.properties().await?.into_iter().find(|p| p.id == id))
    }

    /// Listings and stories from a single read of the source.
    async fn bundle(&self) -> Result<ContentBundle, AppError> {
        Ok(ContentBundle {
            properties: self.properties().await?,
            stories: self.stories().await?,
        })
    }

    /// Short label for logs.
    fn describe(&self) -> String;
}

// ────────────────────────────────────────────────────────────────────────────
// SeedContentSource
// ────────────────────────────────────────────────────────────────────────────

/// Serves an in-memory bundle. Defaults to the built-in listings and stories.
pub struct SeedContentSource {
    bundle: ContentBundle,
}

impl SeedContentSource {
    pub fn new(bundle: ContentBundle) -> Self {
        Self { bundle }
    }
}

impl Default for SeedContentSource {
    fn default() -> Self {
        Self::new(ContentBundle {
            properties: seed::seed_properties(),
            stories: seed::seed_stories(),
        })
    }
}

#[async_trait]
impl ContentSource for SeedContentSource {
    async fn properties(&self) -> Result<Vec<PropertyListing>, AppError> {
        Ok(self.bundle.properties.clone())
    }

    async fn stories(&self) -> Result<Vec<SuccessStory>, AppError> {
        Ok(self.bundle.stories.clone())
    }

    async fn bundle(&self) -> Result<ContentBundle, AppError> {
        Ok(self.bundle.clone())
    }

    fn describe(&self) -> String {
        format!(
            "seed ({} properties, {} stories)",
            self.bundle.properties.len(),
            self.bundle.stories.len()
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JsonFileContentSource
// ────────────────────────────────────────────────────────────────────────────

/// Reads a `ContentBundle` JSON file on every call, so edits show up without a restart.
pub struct JsonFileContentSource {
    path: PathBuf,
}

impl JsonFileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<ContentBundle, AppError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::ContentSource(format!("failed to read {}: {e}", self.path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::ContentSource(format!("invalid content file {}: {e}", self.path.display()))
        })
    }
}

#[async_trait]
impl ContentSource for JsonFileContentSource {
    async fn properties(&self) -> Result<Vec<PropertyListing>, AppError> {
        Ok(self.load().await?.properties)
    }

    async fn stories(&self) -> Result<Vec<SuccessStory>, AppError> {
        Ok(self.load().await?.stories)
    }

    async fn bundle(&self) -> Result<ContentBundle, AppError> {
        self.load().await
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Picks the file source when a path is configured, otherwise the seed content.
pub fn source_from_path(path: Option<&Path>) -> Arc<dyn ContentSource> {
    let source: Arc<dyn ContentSource> = match path {
        Some(p) => Arc::new(JsonFileContentSource::new(p)),
        None => Arc::new(SeedContentSource::default()),
    };
    info!("Content source: {}", source.describe());
    source
}
