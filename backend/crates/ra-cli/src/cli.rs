use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "read-aloud")]
#[command(about = "Read Aloud installation identity, billing and settings")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Billing service base URL (overrides config and RA_SERVICE_URL)
    #[arg(long, global = true)]
    pub(crate) service_url: Option<String>,

    /// Key-value store file (defaults to storage.path in the config directory)
    #[arg(long, global = true)]
    pub(crate) store: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
