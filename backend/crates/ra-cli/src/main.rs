//! read-aloud - Read Aloud billing and settings CLI
//!
//! # Examples
//!
//! ```bash
//! # Show (and create on first use) the installation id
//! read-aloud installation-id
//!
//! # Query the balance against a local service
//! read-aloud --service-url http://127.0.0.1:8080 balance --pretty
//!
//! # Redeem a coupon
//! read-aloud redeem SAVE10
//! ```

use ra_cli::{Cli, CliResult, execute, logger};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{Level, log_enabled};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let result = match load_config() {
        Ok(config) => execute(cli, &config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration, then start logging.
fn load_config() -> CliResult<ra_config::Config> {
    let config = ra_config::Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;

    if log_enabled!(Level::Debug) {
        config.log_summary();
    }

    Ok(config)
}
