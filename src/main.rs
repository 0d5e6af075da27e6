//! Pricewatch - Stable-First Token Price Reporter
//!
//! Fetches the asset list from the local token API, orders stablecoins first,
//! and prints a price line for every allow-listed symbol.

mod adapters;
mod application;
mod config;
mod domain;
mod ports;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::adapters::api::AssetsClient;
use crate::adapters::cli::CliApp;
use crate::application::PriceReporter;
use crate::config::{load_config, Config};
use crate::domain::AllowList;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug)?;

    // Built-in defaults reproduce the original hardcoded URL and symbol list
    let mut config = match &app.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(api_url) = app.api_url {
        config.api.base_url = api_url;
    }
    if !app.symbols.is_empty() {
        config.report.symbols = app.symbols;
    }
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        api = %config.api.base_url,
        symbols = config.report.symbols.len(),
        "starting price report"
    );

    let client = AssetsClient::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("Failed to create assets client")?;

    let allow_list = AllowList::new(config.report.symbols);
    let reporter = PriceReporter::new(client, allow_list);

    // A failed fetch or decode is logged inside run(); the process still
    // exits 0 either way.
    reporter.run().await;

    Ok(())
}

fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}
