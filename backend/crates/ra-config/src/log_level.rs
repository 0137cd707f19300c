use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

/// Log verbosity read from configuration.
///
/// Any string is accepted. Names that are not a `log` level fall back to `info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct LogLevel(pub LevelFilter);

impl LogLevel {
    pub fn parse(name: &str) -> Self {
        Self(name.trim().parse().unwrap_or(DEFAULT_LOG_LEVEL))
    }

    pub fn filter(self) -> LevelFilter {
        self.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self(DEFAULT_LOG_LEVEL)
    }
}

impl From<String> for LogLevel {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
