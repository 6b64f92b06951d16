use std::sync::Arc;

use crate::audit::category::AuditorConfig;
use crate::audit::ContentAuditor;
use crate::config::Config;
use crate::content::{source_from_path, ContentSource};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Listings and stories. Seed content by default, a JSON file when `CONTENT_DATA_PATH` is set.
    pub content: Arc<dyn ContentSource>,
    /// Immutable keyword sets and targets; shared without locking.
    pub auditor: Arc<ContentAuditor>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let content = source_from_path(config.content_data_path.as_deref());
        Self {
            config,
            content,
            auditor: Arc::new(ContentAuditor::new(AuditorConfig::default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_config_keeps_config_and_selects_source() {
        let state = AppState::from_config(Config {
            port: 9090,
            rust_log: "debug".to_string(),
            content_data_path: Some(PathBuf::from("/tmp/listings.json")),
        });
        assert_eq!(state.config.port, 9090);
        assert_eq!(state.content.describe(), "file /tmp/listings.json");
    }
}
