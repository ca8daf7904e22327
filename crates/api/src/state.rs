use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: adforge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Generation adapter for the configured provider.
    pub llm: Arc<adforge_llm::LlmClient>,
}
