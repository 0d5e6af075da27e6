//! CLI Argument Parsing
//!
//! Flag definitions for the pricewatch binary. There is a single behavior
//! (fetch, sort, print), so the surface is flags only - no subcommands.

use clap::Parser;
use std::path::PathBuf;

/// Pricewatch - stable-first token price reporter
#[derive(Parser, Debug)]
#[command(
    name = "pricewatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Stable-first token price reporter for the local assets API",
    long_about = "Fetches the asset list from the local token API, orders stablecoins \
                  first, and prints a price line for every allow-listed symbol."
)]
pub struct CliApp {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the assets API base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Report only these symbols (repeatable; replaces the configured allow-list)
    #[arg(short = 's', long = "symbol", value_name = "SYMBOL")]
    pub symbols: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
