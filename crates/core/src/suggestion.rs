//! Suggestion request and response DTOs.
//!
//! These are the typed shapes exchanged with API clients. Every optional
//! field in [`SuggestionResponse`] is defaulted before serialization
//! (empty string / empty list, never null) because the generation
//! provider's output is untrusted and may omit fields.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Request enums
// ---------------------------------------------------------------------------

/// Kind of campaign analysis requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    Performance,
    Ideas,
    Optimization,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Performance => "performance",
            AnalysisType::Ideas => "ideas",
            AnalysisType::Optimization => "optimization",
        }
    }
}

/// Kind of creative-idea request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Creative,
    Concept,
    Tagline,
    Visual,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Creative => "creative",
            RequestType::Concept => "concept",
            RequestType::Tagline => "tagline",
            RequestType::Visual => "visual",
        }
    }
}

/// Tone requested for creative output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Professional,
    Casual,
    Humorous,
    Emotional,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Humorous => "humorous",
            Tone::Emotional => "emotional",
        }
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A single generated idea.
///
/// `priority` is passed through from the provider unvalidated; values
/// outside 1..3 are accepted as-is (known-loose contract, preserved
/// deliberately).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: i32,
    pub tags: Vec<String>,
    pub rationale: Option<String>,
}

/// Quantitative + qualitative performance breakdown.
///
/// `budget_utilization` and `advert_completion_rate` are always computed
/// locally from campaign rows, never taken from the provider's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub summary: String,
    pub budget_utilization: f64,
    pub advert_completion_rate: i32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Structured output of one suggestion pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub campaign_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_type: Option<AnalysisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
    pub content: String,
    pub suggestions: Vec<String>,
    pub ideas: Vec<Idea>,
    pub performance_analysis: Option<PerformanceAnalysis>,
    pub generated_at: Timestamp,
}
