pub mod installation_id;

use crate::{BillingResult, ServiceUrl, identity::installation_id::InstallationId};

use std::sync::Arc;

use log::{info, warn};
use ra_core::{KeyValueStore, UninstallRegistrar, get_string, set_state};
use serde_json::Value;
use tokio::sync::Mutex;

/// Store key holding the installation identity.
pub const INSTALLATION_ID_KEY: &str = "installationId";

const UNINSTALL_PATH: [&str; 3] = ["read-aloud", "billing", "uninstall"];

/// Lazily creates and persists the installation identity.
///
/// Resolution runs under one async mutex so concurrent first callers share a
/// single creation instead of each writing a different id. Nothing is cached
/// between calls: every call re-reads the store.
pub struct InstallationIdentityManager {
    store: Arc<dyn KeyValueStore>,
    registrar: Arc<dyn UninstallRegistrar>,
    service_url: ServiceUrl,
    resolve_lock: Mutex<()>,
}

impl InstallationIdentityManager {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        registrar: Arc<dyn UninstallRegistrar>,
        service_url: ServiceUrl,
    ) -> Self {
        Self {
            store,
            registrar,
            service_url,
            resolve_lock: Mutex::new(()),
        }
    }

    /// Returns the stored identity, creating and persisting one if absent.
    ///
    /// Only a newly created identity triggers uninstall URL registration.
    pub async fn get_installation_id(&self) -> BillingResult<InstallationId> {
        let _guard = self.resolve_lock.lock().await;

        if let Some(existing) = get_string(self.store.as_ref(), INSTALLATION_ID_KEY).await?
            && !existing.is_empty()
        {
            return Ok(InstallationId::from(existing));
        }

        let id = InstallationId::generate();
        set_state(
            self.store.as_ref(),
            INSTALLATION_ID_KEY,
            Value::String(id.to_string()),
        )
        .await?;
        info!("Created installation id {id}");

        self.register_uninstall_url(&id).await;

        Ok(id)
    }

    /// `<service>/read-aloud/billing/uninstall/<id>`
    pub fn uninstall_url(&self, id: &InstallationId) -> String {
        let mut segments = UNINSTALL_PATH.to_vec();
        segments.push(id.as_str());
        self.service_url.join(&segments)
    }

    async fn register_uninstall_url(&self, id: &InstallationId) {
        let url = self.uninstall_url(id);
        if let Err(e) = self.registrar.register_uninstall_url(&url).await {
            warn!("Failed to register uninstall URL {url}: {e}");
        }
    }
}
