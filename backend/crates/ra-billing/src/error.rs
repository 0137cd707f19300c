use std::panic::Location;

use error_location::ErrorLocation;
use ra_core::StoreError;
use thiserror::Error;

/// Errors surfaced by identity resolution and billing calls.
#[derive(Error, Debug)]
pub enum BillingError {
    /// Non-200 response. Displays as the raw response body.
    #[error("{body}")]
    Remote {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed response: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid coupon code '{code}': {reason} {location}")]
    InvalidCouponCode {
        code: String,
        reason: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid service URL '{url}': {message} {location}")]
    InvalidBaseUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl BillingError {
    /// Create a Remote error from a non-200 response
    #[track_caller]
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        BillingError::Remote {
            status,
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        BillingError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        BillingError::MalformedResponse {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn invalid_coupon_code(code: impl Into<String>, reason: &'static str) -> Self {
        BillingError::InvalidCouponCode {
            code: code.into(),
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_base_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        BillingError::InvalidBaseUrl {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Raw body of a non-200 response, if this is one.
    pub fn remote_body(&self) -> Option<&str> {
        match self {
            BillingError::Remote { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BillingError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        BillingError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for BillingError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        BillingError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, BillingError>;
