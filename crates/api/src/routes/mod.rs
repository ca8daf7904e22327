pub mod ai;
pub mod audit;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ai/campaign-suggestion                 generate suggestions (POST)
/// /ai/campaign-suggestion/export-pdf      render suggestions to PDF (POST)
/// /ai/creative-idea                       generate creative ideas (POST)
/// /ai/creative-idea/export-pdf            render ideas to PDF (POST)
/// /ai/history/{campaign_id}               snapshot history (GET)
/// /ai/suggestions/{id}/feedback           accept/reject feedback (POST)
///
/// /admin/audit-logs                       query audit trail (GET, admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ai", ai::router())
        .nest("/admin/audit-logs", audit::router())
}
