use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ra_config::ConfigError),

    #[error(transparent)]
    Billing(#[from] ra_billing::BillingError),

    #[error("Store error: {0}")]
    Store(#[from] ra_core::StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
