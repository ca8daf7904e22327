//! Concept note entity model.

use serde::Serialize;
use sqlx::FromRow;

use adforge_core::types::{DbId, Timestamp};

/// A freeform creative-idea record authored by staff, optionally
/// referenced as context for idea generation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ConceptNote {
    pub id: DbId,
    pub campaign_id: Option<DbId>,
    pub author_user_id: Option<DbId>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
