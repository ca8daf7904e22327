use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The generation provider returned text that could not be parsed as
    /// JSON even after truncation repair. Carries a bounded excerpt of
    /// the offending output for operator diagnosis.
    #[error("Unparseable AI output: {excerpt}")]
    Unparseable { excerpt: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
