pub mod json_file_store;
pub mod memory_store;

use crate::StoreResult;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Persistent string-keyed store, the async counterpart of `chrome.storage.local`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the requested keys that are present. Absent keys are omitted.
    async fn get(&self, keys: &[&str]) -> StoreResult<Map<String, Value>>;

    /// Merges `items` into the store.
    async fn set(&self, items: Map<String, Value>) -> StoreResult<()>;

    /// Deletes `keys`. Keys that are not present are ignored.
    async fn remove(&self, keys: &[&str]) -> StoreResult<()>;
}

/// Copies the requested keys out of `data`.
pub(crate) fn select(data: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .filter_map(|key| data.get(*key).map(|v| ((*key).to_string(), v.clone())))
        .collect()
}
