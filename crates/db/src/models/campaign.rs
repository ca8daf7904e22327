//! Campaign entity models read by the suggestion pipeline.
//!
//! The pipeline only ever *reads* campaign data; campaign CRUD lives in
//! a separate surface. `CampaignWithContext` is the loaded aggregate the
//! orchestrator turns into a prompt context.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use adforge_core::types::{DbId, Timestamp};

/// A campaign row joined with its client's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    pub client_id: DbId,
    pub client_name: String,
    pub title: String,
    pub status: String,
    pub description: Option<String>,
    pub estimated_budget: f64,
    pub actual_cost: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An advert row, reduced to what prompt building needs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Advert {
    pub id: DbId,
    pub campaign_id: DbId,
    pub title: String,
    pub status: String,
    pub cost: f64,
}

/// A budget line row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BudgetLine {
    pub id: DbId,
    pub campaign_id: DbId,
    pub advert_id: Option<DbId>,
    pub description: String,
    pub planned_amount: f64,
    pub actual_amount: f64,
}

/// A campaign together with its adverts and budget lines.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignWithContext {
    pub campaign: Campaign,
    pub adverts: Vec<Advert>,
    pub budget_lines: Vec<BudgetLine>,
}

impl CampaignWithContext {
    /// Number of adverts in a completed status.
    pub fn completed_advert_count(&self) -> usize {
        self.adverts.iter().filter(|a| a.status == "completed").count()
    }
}
