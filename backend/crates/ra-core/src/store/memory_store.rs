use crate::{KeyValueStore, StoreResult, store::select};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

/// In-process store. Never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<Map<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`.
    pub fn with_items(items: Map<String, Value>) -> Self {
        Self {
            data: Mutex::new(items),
        }
    }

    /// Copy of the whole store contents.
    pub async fn snapshot(&self) -> Map<String, Value> {
        self.data.lock().await.clone()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> StoreResult<Map<String, Value>> {
        let data = self.data.lock().await;
        Ok(select(&data, keys))
    }

    async fn set(&self, items: Map<String, Value>) -> StoreResult<()> {
        self.data.lock().await.extend(items);
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> StoreResult<()> {
        let mut data = self.data.lock().await;
        for key in keys {
            data.remove(*key);
        }
        Ok(())
    }
}
