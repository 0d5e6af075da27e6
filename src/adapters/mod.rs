//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - API: local token API client (assets endpoint)
//! - CLI: command-line argument parsing

pub mod api;
pub mod cli;

pub use api::AssetsClient;
pub use cli::CliApp;
