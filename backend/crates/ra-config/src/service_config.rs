use crate::{ConfigError, ConfigErrorResult, DEFAULT_SERVICE_URL};

use serde::Deserialize;

/// Remote billing service settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL every billing and uninstall path is appended to
    pub url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_SERVICE_URL),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url.trim();

        if url.is_empty() {
            return Err(ConfigError::service("service.url must not be empty"));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::service(format!(
                "service.url must start with http:// or https://, got {}",
                self.url
            )));
        }

        Ok(())
    }
}
