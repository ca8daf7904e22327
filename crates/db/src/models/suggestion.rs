//! Suggestion snapshot entity models and DTOs.
//!
//! A snapshot records one successful pipeline response together with the
//! prompt context that produced it. `accepted` is reserved for human
//! feedback; the pipeline itself never sets it.

use serde::Serialize;
use sqlx::FromRow;

use adforge_core::types::{DbId, Timestamp};

/// A stored suggestion snapshot.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SuggestionSnapshot {
    pub id: DbId,
    pub campaign_id: Option<DbId>,
    pub author_user_id: Option<DbId>,
    pub kind: String,
    pub prompt_snapshot: serde_json::Value,
    pub result: serde_json::Value,
    pub accepted: Option<bool>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new suggestion snapshot.
#[derive(Debug, Clone)]
pub struct CreateSuggestionSnapshot {
    pub campaign_id: Option<DbId>,
    pub author_user_id: Option<DbId>,
    pub kind: String,
    pub prompt_snapshot: serde_json::Value,
    pub result: serde_json::Value,
}
