//! Domain types and pure pipeline logic for the adforge backend.
//!
//! This crate has no database or HTTP dependencies so the suggestion
//! pipeline's prompt construction, JSON repair, and response mapping can
//! be unit tested in isolation and reused by any future worker or CLI
//! tooling.

pub mod audit;
pub mod context;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod repair;
pub mod suggestion;
pub mod types;
