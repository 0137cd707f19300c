//! Single-key accessors over a [`KeyValueStore`].

use crate::{KeyValueStore, StoreError, StoreResult};

use serde_json::{Map, Value};

/// Reads the value stored under `key`, if any.
pub async fn get_state(store: &dyn KeyValueStore, key: &str) -> StoreResult<Option<Value>> {
    let mut items = store.get(&[key]).await?;
    Ok(items.remove(key))
}

/// Writes `value` under `key`.
pub async fn set_state(store: &dyn KeyValueStore, key: &str, value: Value) -> StoreResult<()> {
    let mut items = Map::new();
    items.insert(key.to_string(), value);
    store.set(items).await
}

/// Reads a string stored under `key`.
///
/// Fails with [`StoreError::TypeMismatch`] if the key holds a non-string value.
pub async fn get_string(store: &dyn KeyValueStore, key: &str) -> StoreResult<Option<String>> {
    match get_state(store, key).await? {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(StoreError::type_mismatch(key, "a string")),
    }
}
