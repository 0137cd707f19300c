//! ra-cli library
//!
//! Exposes argument parsing and command execution so the binary stays thin and
//! tests can drive commands against a temp store.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod settings_commands;

#[cfg(test)]
mod tests;

pub use app::execute;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
