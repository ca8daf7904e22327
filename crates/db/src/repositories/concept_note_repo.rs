//! Read-only repository for the `concept_notes` table.

use sqlx::PgPool;

use adforge_core::types::DbId;

use crate::models::concept_note::ConceptNote;

const COLUMNS: &str =
    "id, campaign_id, author_user_id, title, content, tags, created_at, updated_at";

/// Provides read access to concept notes.
pub struct ConceptNoteRepo;

impl ConceptNoteRepo {
    /// Find a concept note by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ConceptNote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM concept_notes WHERE id = $1");
        sqlx::query_as::<_, ConceptNote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
