//! Route definitions for the AI audit trail.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Audit routes mounted at `/admin/audit-logs`.
///
/// All routes require the `admin` role (enforced by handler extractors).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(audit::query_audit_logs))
}
