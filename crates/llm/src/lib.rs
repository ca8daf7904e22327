//! External text-generation adapter.
//!
//! Wraps the two supported provider wire shapes (chat-completion and
//! single-prompt generate-content) behind one [`client::LlmClient`],
//! with a mock mode that lets the rest of the pipeline run without live
//! credentials.

pub mod client;
pub mod config;
pub mod mock;
pub mod wire;

pub use client::{GenerationError, LlmClient, PromptKind};
pub use config::{LlmConfig, ProviderKind};
