pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::audit::handlers as audit;
use crate::content::handlers as content;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Listings
        .route("/api/v1/properties", get(content::handle_list_properties))
        .route("/api/v1/properties/:id", get(content::handle_get_property))
        .route("/api/v1/stories", get(content::handle_list_stories))
        // Content balance audit
        .route(
            "/api/v1/audit",
            get(audit::handle_audit_source).post(audit::handle_audit_payload),
        )
        .route("/api/v1/audit/classify", post(audit::handle_classify))
        .with_state(state)
}
