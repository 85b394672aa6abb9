//! # Boston Startup Tracker CLI
//!
//! Command-line client for the tracker API. Tokens from `tracker login` are
//! kept in a local storage file and attached to every later call.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod state;
mod telemetry;

use cli::Cli;
use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::from_env().with_overrides(cli.base_url, cli.storage);
    telemetry::init_telemetry(config.json_logs);

    let state = AppState::new(&config)?;
    let output = commands::run(&state.api, cli.command).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
