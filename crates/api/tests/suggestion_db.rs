//! Database-backed integration tests for the suggestion pipeline.
//!
//! These use `#[sqlx::test]`, which provisions a throwaway database per
//! test from `DATABASE_URL` and applies the migrations, matching how
//! the rest of the suite treats the pool as caller-supplied.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{bearer_token, body_json, post_json};
use serde_json::json;
use sqlx::PgPool;

use adforge_core::audit::routes as audit_routes;
use adforge_db::models::audit::{AuditLogEntry, AuditQuery};
use adforge_db::repositories::{AuditLogRepo, SuggestionRepo};

const MISSING_CAMPAIGN_ID: i64 = 424242;

async fn seed_user(pool: &PgPool, id: i64, role: &str) {
    sqlx::query("INSERT INTO users (id, email, display_name, role) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(format!("user{id}@adforge.test"))
        .bind("Test User")
        .bind(role)
        .execute(pool)
        .await
        .unwrap();
}

/// The audit insert runs on a spawned task; poll briefly for it.
async fn wait_for_audit_rows(pool: &PgPool, filter: &AuditQuery) -> Vec<AuditLogEntry> {
    for _ in 0..40 {
        let entries = AuditLogRepo::query(pool, filter).await.unwrap();
        if !entries.is_empty() {
            return entries;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    Vec::new()
}

// ---------------------------------------------------------------------------
// Test: unknown campaign -> 404, one audit row, no snapshot
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_campaign_writes_one_404_audit_row_and_no_snapshot(pool: PgPool) {
    seed_user(&pool, 3, "staff").await;

    let app = common::build_test_app_with_pool(pool.clone());
    let token = bearer_token(3, "staff");

    let response = post_json(
        app,
        "/api/v1/ai/campaign-suggestion",
        Some(&token),
        &json!({ "campaign_id": MISSING_CAMPAIGN_ID }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");

    let filter = AuditQuery {
        campaign_id: Some(MISSING_CAMPAIGN_ID),
        ..Default::default()
    };
    let entries = wait_for_audit_rows(&pool, &filter).await;

    assert_eq!(entries.len(), 1, "exactly one audit row per request");
    assert_eq!(entries[0].status_code, 404);
    assert_eq!(entries[0].route, audit_routes::CAMPAIGN_SUGGESTION);
    assert_eq!(entries[0].user_id, Some(3));

    let snapshots = SuggestionRepo::list_for_campaign(&pool, MISSING_CAMPAIGN_ID, 10)
        .await
        .unwrap();
    assert!(snapshots.is_empty(), "failed requests leave no snapshot");
}
