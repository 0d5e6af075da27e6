//! Token API Client
//!
//! Talks to the local token API backend over HTTP.

pub mod client;

pub use client::{AssetsApiError, AssetsClient};
