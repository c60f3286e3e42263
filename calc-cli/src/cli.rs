//! CLI parser and config loading.

use anyhow::Result;
use calc_api::AppConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "Arithmetic responder: serve /ask, ask once, or chat", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (bind address from CALC_BIND_ADDR; --bind overrides).
    Serve {
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Answer a single utterance and exit.
    Ask { text: String },
    /// Interactive session answered in-process.
    Console,
    /// Interactive session that sends each line to the /ask endpoint (CALC_API_URL; --url overrides).
    Chat {
        #[arg(short, long)]
        url: Option<String>,
    },
}

/// Load AppConfig from environment; given values override CALC_BIND_ADDR / CALC_API_URL.
pub fn load_config(bind: Option<String>, url: Option<String>) -> Result<AppConfig> {
    let config = AppConfig::load()?.with_overrides(bind, url);
    config.validate()?;
    Ok(config)
}
