//! Handlers for the AI audit trail. Admin only.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use adforge_db::models::audit::{AuditLogPage, AuditQuery};
use adforge_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/audit-logs
///
/// Query AI pipeline audit logs with filters and pagination.
pub async fn query_audit_logs(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<AuditQuery>,
) -> AppResult<impl IntoResponse> {
    let items = AuditLogRepo::query(&state.pool, &params).await?;
    let total = AuditLogRepo::count(&state.pool, &params).await?;

    Ok(Json(DataResponse {
        data: AuditLogPage { items, total },
    }))
}
