//! Prompt context: a derived, read-only snapshot of campaign fields.
//!
//! Never persisted as its own entity; it exists to render the prompt
//! string and is duplicated into the suggestion snapshot's prompt JSON
//! for traceability.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::DbId;

/// Snapshot of an optional concept note referenced as creative context.
#[derive(Debug, Clone, Serialize)]
pub struct ConceptNoteContext {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Read-only snapshot of the campaign fields the prompt builder needs.
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    pub campaign_id: DbId,
    pub title: String,
    pub client_name: String,
    pub status: String,
    pub description: String,
    pub estimated_budget: f64,
    pub actual_cost: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub advert_count: usize,
    pub completed_advert_count: usize,
    pub budget_line_count: usize,
    /// Actual cost as a percentage of estimated budget, one decimal place.
    pub budget_utilization: f64,
    /// Completed adverts as an integer percentage of all adverts.
    pub advert_completion_rate: i32,
    pub concept_note: Option<ConceptNoteContext>,
}

/// Actual cost as a percentage of estimated budget, rounded to one
/// decimal place. Returns `0.0` when no budget is set.
pub fn budget_utilization(estimated_budget: f64, actual_cost: f64) -> f64 {
    if estimated_budget <= 0.0 {
        return 0.0;
    }
    (actual_cost / estimated_budget * 1000.0).round() / 10.0
}

/// Completed adverts as an integer percentage of all adverts.
/// Returns `0` for campaigns with no adverts.
pub fn advert_completion_rate(advert_count: usize, completed_count: usize) -> i32 {
    if advert_count == 0 {
        return 0;
    }
    ((completed_count as f64 / advert_count as f64) * 100.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilization_quarter_spent() {
        assert_eq!(budget_utilization(1000.0, 250.0), 25.0);
    }

    #[test]
    fn utilization_rounds_to_one_decimal() {
        assert_eq!(budget_utilization(3.0, 1.0), 33.3);
    }

    #[test]
    fn utilization_zero_budget_is_zero() {
        assert_eq!(budget_utilization(0.0, 500.0), 0.0);
    }

    #[test]
    fn utilization_can_exceed_hundred() {
        assert_eq!(budget_utilization(100.0, 150.0), 150.0);
    }

    #[test]
    fn completion_rate_no_adverts_is_zero() {
        assert_eq!(advert_completion_rate(0, 0), 0);
    }

    #[test]
    fn completion_rate_half_done() {
        assert_eq!(advert_completion_rate(4, 2), 50);
    }

    #[test]
    fn completion_rate_rounds() {
        assert_eq!(advert_completion_rate(3, 2), 67);
    }
}
