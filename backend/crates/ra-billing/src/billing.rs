use crate::{
    BillingError, BillingResult, HttpTransport, InstallationIdentityManager, ReqwestTransport,
    ServiceUrl,
};

use std::sync::Arc;

use log::info;
use ra_core::{KeyValueStore, UninstallRegistrar};
use serde_json::Value;

const BILLING_PATH: [&str; 2] = ["read-aloud", "billing"];

/// Client for the remote billing service.
pub struct BillingClient {
    identity: Arc<InstallationIdentityManager>,
    transport: Arc<dyn HttpTransport>,
    service_url: ServiceUrl,
}

impl BillingClient {
    pub fn new(
        identity: Arc<InstallationIdentityManager>,
        transport: Arc<dyn HttpTransport>,
        service_url: ServiceUrl,
    ) -> Self {
        Self {
            identity,
            transport,
            service_url,
        }
    }

    /// Wire a client over `store` and `registrar` using the reqwest transport.
    ///
    /// # Arguments
    /// * `service_url` - Base URL (e.g., "https://support.lsdsoftware.com")
    pub fn connect(
        service_url: &str,
        store: Arc<dyn KeyValueStore>,
        registrar: Arc<dyn UninstallRegistrar>,
    ) -> BillingResult<Self> {
        let service_url = ServiceUrl::parse(service_url)?;
        let identity = Arc::new(InstallationIdentityManager::new(
            store,
            registrar,
            service_url.clone(),
        ));
        Ok(Self::new(
            identity,
            Arc::new(ReqwestTransport::new()),
            service_url,
        ))
    }

    pub fn identity(&self) -> &InstallationIdentityManager {
        &self.identity
    }

    /// Current balance, decoded from JSON and passed through uninterpreted.
    pub async fn get_balance(&self) -> BillingResult<Value> {
        let id = self.identity.get_installation_id().await?;
        let url = self.endpoint(&["get-balance", id.as_str()]);
        let text = self.transport.get(&url).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Redeems `coupon_code` against this installation. Returns the raw response text.
    pub async fn redeem_coupon(&self, coupon_code: &str) -> BillingResult<String> {
        self.coupon_operation("redeem-coupon", coupon_code).await
    }

    /// Removes `coupon_code` from this installation. Returns the raw response text.
    pub async fn remove_coupon(&self, coupon_code: &str) -> BillingResult<String> {
        self.coupon_operation("remove-coupon", coupon_code).await
    }

    async fn coupon_operation(&self, operation: &str, coupon_code: &str) -> BillingResult<String> {
        validate_coupon_code(coupon_code)?;

        let id = self.identity.get_installation_id().await?;
        let url = self.endpoint(&[operation, id.as_str(), coupon_code]);
        info!("Billing {operation} for installation {id}");
        self.transport.get(&url).await
    }

    fn endpoint(&self, segments: &[&str]) -> String {
        let mut path = BILLING_PATH.to_vec();
        path.extend_from_slice(segments);
        self.service_url.join(&path)
    }
}

/// Rejects codes that cannot stand as a single URL path segment.
pub fn validate_coupon_code(code: &str) -> BillingResult<()> {
    if code.is_empty() {
        return Err(BillingError::invalid_coupon_code(code, "must not be empty"));
    }

    if code.chars().any(|c| matches!(c, '/' | '\\' | '?' | '#')) {
        return Err(BillingError::invalid_coupon_code(
            code,
            "must not contain '/', '\\', '?' or '#'",
        ));
    }

    if code.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(BillingError::invalid_coupon_code(
            code,
            "must not contain whitespace or control characters",
        ));
    }

    if code == "." || code == ".." {
        return Err(BillingError::invalid_coupon_code(
            code,
            "must not be a relative path segment",
        ));
    }

    Ok(())
}
