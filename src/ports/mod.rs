//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - Asset data (the backend's assets endpoint)

pub mod asset_source;
pub mod mocks;

pub use asset_source::{AssetSource, AssetSourceError};
pub use mocks::MockAssetSource;
