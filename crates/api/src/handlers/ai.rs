//! Handlers for the AI suggestion endpoints.
//!
//! Every inbound request writes exactly one audit log entry with the
//! final status code and elapsed latency, on success and on every
//! failure branch alike. The write itself is best-effort: a failed
//! audit insert is logged and never changes the HTTP outcome.

use std::time::Instant;

use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use adforge_core::audit::routes as audit_routes;
use adforge_core::error::CoreError;
use adforge_core::suggestion::SuggestionResponse;
use adforge_core::types::DbId;
use adforge_db::models::audit::CreateAuditLog;
use adforge_db::repositories::{AuditLogRepo, SuggestionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::pdf;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::suggestion::{
    run_campaign_suggestion, run_creative_idea, CampaignSuggestionRequest, CreativeIdeaRequest,
};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for the export-pdf endpoints: a previously-obtained
/// response plus the campaign labels the document header needs.
#[derive(Debug, Deserialize)]
pub struct ExportPdfRequest {
    pub campaign_title: String,
    pub client_name: String,
    pub response: SuggestionResponse,
}

/// Request body for the snapshot feedback endpoint.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub accepted: bool,
}

// ---------------------------------------------------------------------------
// Audit helper
// ---------------------------------------------------------------------------

/// Record one audit row for a finished request on a spawned task.
fn record_audit(
    state: &AppState,
    route: &'static str,
    user_id: DbId,
    campaign_id: Option<DbId>,
    started: Instant,
    status: StatusCode,
) {
    let pool = state.pool.clone();
    let entry = CreateAuditLog {
        user_id: Some(user_id),
        route: route.to_string(),
        campaign_id,
        latency_ms: started.elapsed().as_millis() as i64,
        status_code: status.as_u16() as i32,
    };

    tokio::spawn(async move {
        if let Err(err) = AuditLogRepo::append(&pool, &entry).await {
            tracing::warn!(error = %err, route = %entry.route, "failed to write audit log entry");
        }
    });
}

fn status_of<T>(result: &AppResult<T>) -> StatusCode {
    match result {
        Ok(_) => StatusCode::OK,
        Err(err) => err.status(),
    }
}

/// Unpack a JSON request body. Extractor rejections (malformed JSON,
/// missing or mistyped fields) still get their audit row before the
/// client error is returned.
fn unpack_json<T>(
    state: &AppState,
    route: &'static str,
    user_id: DbId,
    started: Instant,
    body: Result<Json<T>, JsonRejection>,
) -> AppResult<T> {
    match body {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            let err = AppError::BadRequest(rejection.body_text());
            record_audit(state, route, user_id, None, started, err.status());
            Err(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Suggestion endpoints
// ---------------------------------------------------------------------------

/// POST /ai/campaign-suggestion
pub async fn campaign_suggestion(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<CampaignSuggestionRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let started = Instant::now();
    let req = unpack_json(
        &state,
        audit_routes::CAMPAIGN_SUGGESTION,
        user.user_id,
        started,
        body,
    )?;
    let result = run_campaign_suggestion(&state, user.user_id, &req).await;

    record_audit(
        &state,
        audit_routes::CAMPAIGN_SUGGESTION,
        user.user_id,
        Some(req.campaign_id),
        started,
        status_of(&result),
    );

    result.map(|data| Json(DataResponse { data }))
}

/// POST /ai/creative-idea
pub async fn creative_idea(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<CreativeIdeaRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let started = Instant::now();
    let req = unpack_json(
        &state,
        audit_routes::CREATIVE_IDEA,
        user.user_id,
        started,
        body,
    )?;
    let result = run_creative_idea(&state, user.user_id, &req).await;

    record_audit(
        &state,
        audit_routes::CREATIVE_IDEA,
        user.user_id,
        Some(req.campaign_id),
        started,
        status_of(&result),
    );

    result.map(|data| Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// PDF export endpoints
// ---------------------------------------------------------------------------

/// Render an already-obtained response to PDF. Never touches the
/// generation adapter.
fn export_pdf(
    state: &AppState,
    route: &'static str,
    kind_slug: &str,
    user: &AuthUser,
    req: &ExportPdfRequest,
    started: Instant,
) -> AppResult<Response> {
    let today = Utc::now().date_naive();

    let document = pdf::SuggestionDocument {
        campaign_title: &req.campaign_title,
        client_name: &req.client_name,
        response: &req.response,
    };

    let result = pdf::render_suggestion(&document, today)
        .map_err(|e| AppError::InternalError(format!("PDF rendering failed: {e}")));

    record_audit(
        state,
        route,
        user.user_id,
        Some(req.response.campaign_id),
        started,
        status_of(&result),
    );

    let bytes = result?;
    let filename = pdf::export_filename(kind_slug, req.response.campaign_id, today);

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/pdf")
        .header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(bytes))
        .unwrap())
}

/// POST /ai/campaign-suggestion/export-pdf
pub async fn export_campaign_suggestion_pdf(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<ExportPdfRequest>, JsonRejection>,
) -> AppResult<Response> {
    let started = Instant::now();
    let req = unpack_json(
        &state,
        audit_routes::CAMPAIGN_SUGGESTION_PDF,
        user.user_id,
        started,
        body,
    )?;
    export_pdf(
        &state,
        audit_routes::CAMPAIGN_SUGGESTION_PDF,
        "campaign-suggestion",
        &user,
        &req,
        started,
    )
}

/// POST /ai/creative-idea/export-pdf
pub async fn export_creative_idea_pdf(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<ExportPdfRequest>, JsonRejection>,
) -> AppResult<Response> {
    let started = Instant::now();
    let req = unpack_json(
        &state,
        audit_routes::CREATIVE_IDEA_PDF,
        user.user_id,
        started,
        body,
    )?;
    export_pdf(
        &state,
        audit_routes::CREATIVE_IDEA_PDF,
        "creative-idea",
        &user,
        &req,
        started,
    )
}

// ---------------------------------------------------------------------------
// Snapshot history & feedback
// ---------------------------------------------------------------------------

/// GET /ai/history/{campaign_id}
pub async fn suggestion_history(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(campaign_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let snapshots = SuggestionRepo::list_for_campaign(&state.pool, campaign_id, 50).await?;
    Ok(Json(DataResponse { data: snapshots }))
}

/// POST /ai/suggestions/{id}/feedback
pub async fn suggestion_feedback(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(req): Json<FeedbackRequest>,
) -> AppResult<impl IntoResponse> {
    let snapshot = SuggestionRepo::set_accepted(&state.pool, id, req.accepted)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "suggestion",
            id,
        })?;

    Ok(Json(DataResponse { data: snapshot }))
}
