//! Command-line interface for tictac_server.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe game server
#[derive(Parser, Debug, Default)]
#[command(name = "tictac_server")]
#[command(about = "In-memory tic-tac-toe game server with a REST API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Tracing filter used when RUST_LOG is unset (overrides config file)
    #[arg(long)]
    pub log_filter: Option<String>,
}
