//! Audit route-name constants.
//!
//! Lives in `core` (zero internal deps) so both the API layer and any
//! future tooling reading the audit trail agree on route labels.

/// Known route labels for audit log entries.
pub mod routes {
    pub const CAMPAIGN_SUGGESTION: &str = "ai/campaign-suggestion";
    pub const CREATIVE_IDEA: &str = "ai/creative-idea";
    pub const CAMPAIGN_SUGGESTION_PDF: &str = "ai/campaign-suggestion/export-pdf";
    pub const CREATIVE_IDEA_PDF: &str = "ai/creative-idea/export-pdf";
}

/// Suggestion snapshot kinds, matching the audit route they came from.
pub mod suggestion_kinds {
    pub const CAMPAIGN_SUGGESTION: &str = "campaign_suggestion";
    pub const CREATIVE_IDEA: &str = "creative_idea";
}
