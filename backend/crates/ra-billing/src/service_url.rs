use crate::{BillingError, BillingResult};

use std::fmt;

use reqwest::Url;

/// Parsed base URL of the billing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrl {
    base: Url,
}

impl ServiceUrl {
    /// Parse `base`, which must be an absolute http(s) URL. A trailing `/` is ignored.
    pub fn parse(base: &str) -> BillingResult<Self> {
        let trimmed = base.trim().trim_end_matches('/');
        let url = Url::parse(trimmed)
            .map_err(|e| BillingError::invalid_base_url(base, e.to_string()))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(BillingError::invalid_base_url(
                base,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if url.cannot_be_a_base() {
            return Err(BillingError::invalid_base_url(base, "cannot be a base URL"));
        }

        Ok(Self { base: url })
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    pub fn join(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }

    pub fn as_str(&self) -> &str {
        self.base.as_str()
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str())
    }
}
