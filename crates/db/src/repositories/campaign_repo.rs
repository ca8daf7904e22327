//! Read-only repository for the `campaigns`, `adverts`, and
//! `budget_lines` tables.

use sqlx::PgPool;

use adforge_core::types::DbId;

use crate::models::campaign::{Advert, BudgetLine, Campaign, CampaignWithContext};

const CAMPAIGN_COLUMNS: &str = "\
    c.id, c.client_id, cl.name AS client_name, c.title, c.status, \
    c.description, c.estimated_budget, c.actual_cost, c.start_date, \
    c.end_date, c.created_at, c.updated_at";

const ADVERT_COLUMNS: &str = "id, campaign_id, title, status, cost";

const BUDGET_LINE_COLUMNS: &str =
    "id, campaign_id, advert_id, description, planned_amount, actual_amount";

/// Provides read access to campaigns and their context rows.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Find a campaign by ID, joined with its client name.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns c \
             JOIN clients cl ON cl.id = c.client_id \
             WHERE c.id = $1"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a campaign together with its adverts and budget lines.
    ///
    /// Returns `Ok(None)` when the campaign does not exist; the caller
    /// maps that to not-found semantics before any prompt is built.
    pub async fn find_with_context(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CampaignWithContext>, sqlx::Error> {
        let Some(campaign) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let adverts_query =
            format!("SELECT {ADVERT_COLUMNS} FROM adverts WHERE campaign_id = $1 ORDER BY id");
        let adverts = sqlx::query_as::<_, Advert>(&adverts_query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        let lines_query = format!(
            "SELECT {BUDGET_LINE_COLUMNS} FROM budget_lines WHERE campaign_id = $1 ORDER BY id"
        );
        let budget_lines = sqlx::query_as::<_, BudgetLine>(&lines_query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(CampaignWithContext {
            campaign,
            adverts,
            budget_lines,
        }))
    }
}
