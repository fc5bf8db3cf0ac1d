use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "clinic")]
#[command(about = "Clinic administration CLI for patients and appointments")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend origin (overrides config.toml and CLINIC_API_BASE_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
