//! AI audit log entity models and DTOs.
//!
//! One row per pipeline invocation, success or failure, recording route,
//! latency, and outcome. Rows are immutable once created (no
//! `updated_at`) and are never updated or deleted by the pipeline.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use adforge_core::types::{DbId, Timestamp};

/// A single audit log entry. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLogEntry {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub route: String,
    pub campaign_id: Option<DbId>,
    pub latency_ms: i64,
    pub status_code: i32,
    pub created_at: Timestamp,
}

/// DTO for inserting a new audit log entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub user_id: Option<DbId>,
    pub route: String,
    pub campaign_id: Option<DbId>,
    pub latency_ms: i64,
    pub status_code: i32,
}

/// Filter parameters for querying audit logs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditQuery {
    pub user_id: Option<DbId>,
    pub route: Option<String>,
    pub campaign_id: Option<DbId>,
    pub status_code: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Paginated response for audit log queries.
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogPage {
    pub items: Vec<AuditLogEntry>,
    pub total: i64,
}
