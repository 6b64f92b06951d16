//! Axum route handlers for the Audit API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::audit::category::Category;
use crate::audit::compliance::ComplianceReport;
use crate::audit::AuditResult;
use crate::errors::AppError;
use crate::models::ContentSnippet;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct AuditRequest {
    #[serde(default)]
    pub properties: Vec<ContentSnippet>,
    #[serde(default)]
    pub stories: Vec<ContentSnippet>,
}

#[derive(Debug, Serialize)]
pub struct AuditResponse {
    pub audit: AuditResult,
    pub compliance: ComplianceReport,
    pub items_audited: usize,
    pub audited_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub items: Vec<ContentSnippet>,
}

#[derive(Debug, Serialize)]
pub struct ClassifiedItem {
    #[serde(flatten)]
    pub item: ContentSnippet,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub results: Vec<ClassifiedItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/audit
///
/// Audits the configured source's listings and stories.
pub async fn handle_audit_source(
    State(state): State<AppState>,
) -> Result<Json<AuditResponse>, AppError> {
    let bundle = state.content.bundle().await?;

    let audit = state.auditor.audit(&bundle.properties, &bundle.stories);
    Ok(Json(respond(
        &state,
        audit,
        bundle.properties.len() + bundle.stories.len(),
    )))
}

/// POST /api/v1/audit
///
/// Audits ad-hoc copy supplied in the body. Both lists are optional.
pub async fn handle_audit_payload(
    State(state): State<AppState>,
    Json(request): Json<AuditRequest>,
) -> Result<Json<AuditResponse>, AppError> {
    let audit = state.auditor.audit(&request.properties, &request.stories);
    Ok(Json(respond(
        &state,
        audit,
        request.properties.len() + request.stories.len(),
    )))
}

/// POST /api/v1/audit/classify
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    if request.items.is_empty() {
        return Err(AppError::Validation("items cannot be empty".to_string()));
    }

    let results = request
        .items
        .into_iter()
        .map(|item| ClassifiedItem {
            category: state.auditor.classify(&item),
            item,
        })
        .collect();

    Ok(Json(ClassifyResponse { results }))
}

fn respond(state: &AppState, audit: AuditResult, items_audited: usize) -> AuditResponse {
    let compliance = state.auditor.compliance(&audit);
    info!(
        items = items_audited,
        dominant = %audit.dominant_category,
        ratio = %audit.formatted_ratio,
        passed = compliance.passed,
        "content audit complete"
    );
    AuditResponse {
        audit,
        compliance,
        items_audited,
        audited_at: Utc::now(),
    }
}
