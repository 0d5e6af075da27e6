//! Domain Layer - Core report logic for pricewatch
//!
//! This module contains pure domain types and logic with no external dependencies.
//! All external interactions happen through the ports layer.

pub mod asset;
pub mod report;

pub use asset::{AssetRecord, Price, ReportRow};
pub use report::{render, sort_by_stability, AllowList, DEFAULT_SYMBOLS};
