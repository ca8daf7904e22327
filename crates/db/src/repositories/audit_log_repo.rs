//! Repository for the `ai_audit_logs` table.

use sqlx::PgPool;

use crate::models::audit::{AuditLogEntry, AuditQuery, CreateAuditLog};

const COLUMNS: &str = "id, user_id, route, campaign_id, latency_ms, status_code, created_at";

const INSERT_COLUMNS: &str = "user_id, route, campaign_id, latency_ms, status_code";

/// Provides append and query operations for AI audit logs.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Insert a new audit log entry, returning the created row.
    pub async fn append(
        pool: &PgPool,
        entry: &CreateAuditLog,
    ) -> Result<AuditLogEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO ai_audit_logs ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLogEntry>(&query)
            .bind(entry.user_id)
            .bind(&entry.route)
            .bind(entry.campaign_id)
            .bind(entry.latency_ms)
            .bind(entry.status_code)
            .fetch_one(pool)
            .await
    }

    /// Query audit logs with filtering and pagination, newest first.
    pub async fn query(
        pool: &PgPool,
        params: &AuditQuery,
    ) -> Result<Vec<AuditLogEntry>, sqlx::Error> {
        let limit = params.limit.unwrap_or(50).min(500);
        let offset = params.offset.unwrap_or(0);

        let query = format!(
            "SELECT {COLUMNS} FROM ai_audit_logs \
             WHERE ($1::BIGINT IS NULL OR user_id = $1) \
               AND ($2::TEXT IS NULL OR route = $2) \
               AND ($3::BIGINT IS NULL OR campaign_id = $3) \
               AND ($4::INT IS NULL OR status_code = $4) \
             ORDER BY created_at DESC \
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, AuditLogEntry>(&query)
            .bind(params.user_id)
            .bind(&params.route)
            .bind(params.campaign_id)
            .bind(params.status_code)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count audit logs matching the given filter.
    pub async fn count(pool: &PgPool, params: &AuditQuery) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM ai_audit_logs \
             WHERE ($1::BIGINT IS NULL OR user_id = $1) \
               AND ($2::TEXT IS NULL OR route = $2) \
               AND ($3::BIGINT IS NULL OR campaign_id = $3) \
               AND ($4::INT IS NULL OR status_code = $4)",
        )
        .bind(params.user_id)
        .bind(&params.route)
        .bind(params.campaign_id)
        .bind(params.status_code)
        .fetch_one(pool)
        .await
    }
}
