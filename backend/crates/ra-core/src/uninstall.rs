use crate::{KeyValueStore, StoreResult, set_state};

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use serde_json::Value;
use tokio::sync::Mutex;

/// Store key written by [`StoreUninstallRegistrar`].
pub const UNINSTALL_URL_KEY: &str = "uninstallUrl";

/// Host hook that visits a URL when the extension is uninstalled.
#[async_trait]
pub trait UninstallRegistrar: Send + Sync {
    async fn register_uninstall_url(&self, url: &str) -> StoreResult<()>;
}

/// Keeps every registered URL in memory.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    urls: Mutex<Vec<String>>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn registered(&self) -> Vec<String> {
        self.urls.lock().await.clone()
    }
}

#[async_trait]
impl UninstallRegistrar for RecordingRegistrar {
    async fn register_uninstall_url(&self, url: &str) -> StoreResult<()> {
        self.urls.lock().await.push(url.to_string());
        Ok(())
    }
}

/// Records the uninstall URL in the store for hosts without a native hook.
pub struct StoreUninstallRegistrar {
    store: Arc<dyn KeyValueStore>,
}

impl StoreUninstallRegistrar {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UninstallRegistrar for StoreUninstallRegistrar {
    async fn register_uninstall_url(&self, url: &str) -> StoreResult<()> {
        info!("Registering uninstall URL {url}");
        set_state(
            self.store.as_ref(),
            UNINSTALL_URL_KEY,
            Value::String(url.to_string()),
        )
        .await
    }
}
