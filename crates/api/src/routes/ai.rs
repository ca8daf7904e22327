//! Route definitions for the AI suggestion pipeline.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// AI routes mounted at `/ai`.
///
/// All routes require an authenticated user (enforced by handler
/// extractors).
///
/// ```text
/// POST /campaign-suggestion              -> campaign_suggestion
/// POST /campaign-suggestion/export-pdf   -> export_campaign_suggestion_pdf
/// POST /creative-idea                    -> creative_idea
/// POST /creative-idea/export-pdf         -> export_creative_idea_pdf
/// GET  /history/{campaign_id}            -> suggestion_history
/// POST /suggestions/{id}/feedback        -> suggestion_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/campaign-suggestion", post(ai::campaign_suggestion))
        .route(
            "/campaign-suggestion/export-pdf",
            post(ai::export_campaign_suggestion_pdf),
        )
        .route("/creative-idea", post(ai::creative_idea))
        .route(
            "/creative-idea/export-pdf",
            post(ai::export_creative_idea_pdf),
        )
        .route("/history/{campaign_id}", get(ai::suggestion_history))
        .route("/suggestions/{id}/feedback", post(ai::suggestion_feedback))
}
