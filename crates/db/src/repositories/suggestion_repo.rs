//! Repository for the `ai_suggestions` snapshot table.

use sqlx::PgPool;

use adforge_core::types::DbId;

use crate::models::suggestion::{CreateSuggestionSnapshot, SuggestionSnapshot};

const COLUMNS: &str = "\
    id, campaign_id, author_user_id, kind, prompt_snapshot, result, \
    accepted, created_at";

const INSERT_COLUMNS: &str = "campaign_id, author_user_id, kind, prompt_snapshot, result";

/// Provides append, list, and feedback operations for suggestion
/// snapshots.
pub struct SuggestionRepo;

impl SuggestionRepo {
    /// Insert a new snapshot, returning the created row.
    pub async fn append(
        pool: &PgPool,
        snapshot: &CreateSuggestionSnapshot,
    ) -> Result<SuggestionSnapshot, sqlx::Error> {
        let query = format!(
            "INSERT INTO ai_suggestions ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuggestionSnapshot>(&query)
            .bind(snapshot.campaign_id)
            .bind(snapshot.author_user_id)
            .bind(&snapshot.kind)
            .bind(&snapshot.prompt_snapshot)
            .bind(&snapshot.result)
            .fetch_one(pool)
            .await
    }

    /// List snapshots for a campaign, newest first.
    pub async fn list_for_campaign(
        pool: &PgPool,
        campaign_id: DbId,
        limit: i64,
    ) -> Result<Vec<SuggestionSnapshot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ai_suggestions \
             WHERE campaign_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, SuggestionSnapshot>(&query)
            .bind(campaign_id)
            .bind(limit.min(200))
            .fetch_all(pool)
            .await
    }

    /// Record human feedback on a snapshot. Returns the updated row, or
    /// `None` if the snapshot does not exist.
    pub async fn set_accepted(
        pool: &PgPool,
        id: DbId,
        accepted: bool,
    ) -> Result<Option<SuggestionSnapshot>, sqlx::Error> {
        let query = format!(
            "UPDATE ai_suggestions SET accepted = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuggestionSnapshot>(&query)
            .bind(id)
            .bind(accepted)
            .fetch_optional(pool)
            .await
    }
}
