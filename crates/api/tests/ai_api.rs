//! Integration tests for the AI suggestion endpoints.
//!
//! These cover auth enforcement and the PDF export path, neither of
//! which requires a live database.

mod common;

use axum::http::StatusCode;
use common::{assert_error_envelope, bearer_token, body_bytes, get_auth, post_json, post_raw};
use serde_json::json;

fn export_request() -> serde_json::Value {
    json!({
        "campaign_title": "Summer Splash",
        "client_name": "Acme Beverages",
        "response": {
            "campaign_id": 7,
            "analysis_type": "performance",
            "content": "A strong start to the season.",
            "suggestions": ["Increase weekend spend"],
            "ideas": [],
            "performance_analysis": {
                "summary": "On track",
                "budget_utilization": 25.0,
                "advert_completion_rate": 50,
                "strengths": ["pacing"],
                "weaknesses": ["reach"],
                "recommendations": ["shift spend"]
            },
            "generated_at": "2026-07-15T12:00:00Z"
        }
    })
}

// ---------------------------------------------------------------------------
// Auth enforcement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn campaign_suggestion_without_token_returns_401() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/ai/campaign-suggestion",
        None,
        &json!({ "campaign_id": 1 }),
    )
    .await;

    assert_error_envelope(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[tokio::test]
async fn malformed_bearer_token_returns_401() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/ai/creative-idea",
        Some("not.a.token"),
        &json!({ "campaign_id": 1, "request_type": "creative", "brief": "spring launch" }),
    )
    .await;

    assert_error_envelope(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[tokio::test]
async fn malformed_json_body_returns_enveloped_400() {
    let app = common::build_test_app();
    let token = bearer_token(3, "staff");
    let response = post_raw(
        app,
        "/api/v1/ai/campaign-suggestion",
        Some(&token),
        "{\"campaign_id\": ",
    )
    .await;

    assert_error_envelope(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

#[tokio::test]
async fn mistyped_campaign_id_returns_enveloped_400() {
    let app = common::build_test_app();
    let token = bearer_token(3, "staff");
    let response = post_raw(
        app,
        "/api/v1/ai/creative-idea",
        Some(&token),
        r#"{"campaign_id": "seven", "request_type": "creative"}"#,
    )
    .await;

    assert_error_envelope(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

#[tokio::test]
async fn audit_logs_require_admin_role() {
    let app = common::build_test_app();
    let token = bearer_token(3, "staff");
    let response = get_auth(app, "/api/v1/admin/audit-logs", &token).await;

    assert_error_envelope(response, StatusCode::FORBIDDEN, "FORBIDDEN").await;
}

#[tokio::test]
async fn audit_logs_without_token_returns_401() {
    let app = common::build_test_app();
    let response = common::get(app, "/api/v1/admin/audit-logs").await;

    assert_error_envelope(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

// ---------------------------------------------------------------------------
// PDF export
// ---------------------------------------------------------------------------

#[tokio::test]
async fn export_pdf_returns_pdf_attachment() {
    let app = common::build_test_app();
    let token = bearer_token(3, "staff");
    let response = post_json(
        app,
        "/api/v1/ai/campaign-suggestion/export-pdf",
        Some(&token),
        &export_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/pdf")
    );

    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"campaign-suggestion-7-"));
    assert!(disposition.ends_with(".pdf\""));

    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn export_pdf_without_token_returns_401() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/ai/creative-idea/export-pdf",
        None,
        &export_request(),
    )
    .await;

    assert_error_envelope(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}
