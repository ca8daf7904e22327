//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod audit_log_repo;
pub mod campaign_repo;
pub mod concept_note_repo;
pub mod suggestion_repo;

pub use audit_log_repo::AuditLogRepo;
pub use campaign_repo::CampaignRepo;
pub use concept_note_repo::ConceptNoteRepo;
pub use suggestion_repo::SuggestionRepo;
