//! Pricewatch - Stable-First Token Price Reporter
//!
//! Fetches the asset list from the local token API, orders stablecoins first,
//! and prints a price line for every allow-listed symbol.
//!
//! # Modules
//!
//! - `domain`: Core report logic (AssetRecord, ReportRow, AllowList, ordering)
//! - `ports`: Trait abstractions (AssetSource)
//! - `adapters`: External implementations (assets API client, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: The PriceReporter use case

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
