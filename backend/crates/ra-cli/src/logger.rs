use crate::{CliError, CliResult};

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use humantime::Rfc3339Timestamp;
use log::debug;
use ra_config::LogLevel;

/// Install the global fern logger.
///
/// Logs go to `log_file` when given, otherwise to stderr (stdout carries
/// command output). `colored` only affects stderr.
pub fn initialize(log_level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> CliResult<()> {
    let target = match log_file.as_deref() {
        Some(path) => file_dispatch(path)?,
        None => stderr_dispatch(colored),
    };

    Dispatch::new()
        .level(log_level.filter())
        .chain(target)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    debug!("Logger initialized: level={}", log_level.filter());
    Ok(())
}

fn file_dispatch(path: &Path) -> CliResult<Dispatch> {
    let file = fern::log_file(path).map_err(|e| CliError::Logger {
        message: format!("Failed to open log file {}: {}", path.display(), e),
    })?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}]",
                timestamp(),
                record.level(),
                message,
                record.target()
            ))
        })
        .chain(file))
}

fn stderr_dispatch(colored: bool) -> Dispatch {
    let colors = colored.then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    Dispatch::new()
        .format(move |out, message, record| match &colors {
            Some(colors) => out.finish(format_args!(
                "[{} - {}] {}",
                timestamp(),
                colors.color(record.level()),
                message
            )),
            None => out.finish(format_args!(
                "[{} - {}] {}",
                timestamp(),
                record.level(),
                message
            )),
        })
        .chain(std::io::stderr())
}

fn timestamp() -> Rfc3339Timestamp {
    humantime::format_rfc3339_seconds(SystemTime::now())
}
