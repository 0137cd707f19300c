use crate::{KeyValueStore, StoreError, StoreResult, store::select};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use serde_json::{Map, Value};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Store persisted as a single JSON object file.
///
/// Every mutation rewrites the whole file using an atomic write:
/// 1. Writes to a temp file next to the target
/// 2. Syncs to disk (fsync)
/// 3. Renames over the target
///
/// A missing file reads as an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No store file at {:?}, starting empty", self.path);
                return Ok(Map::new());
            }
            Err(e) => return Err(StoreError::io(self.path.clone(), e)),
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(StoreError::corrupted(
                self.path.clone(),
                format!("expected a JSON object, found {}", json_type_name(&other)),
            )),
            Err(e) => Err(StoreError::corrupted(self.path.clone(), e.to_string())),
        }
    }

    async fn save(&self, data: &Map<String, Value>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(data)?;
        let temp_path = self.temp_path();

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::io(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .await
                .map_err(|e| StoreError::io(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StoreError::io(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::atomic_rename(temp_path, self.path.clone(), e));
        }

        debug!("Saved store ({} keys) to {:?}", data.len(), self.path);
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("store.json"));
        self.path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, keys: &[&str]) -> StoreResult<Map<String, Value>> {
        let _guard = self.lock.lock().await;
        let data = self.load().await?;
        Ok(select(&data, keys))
    }

    async fn set(&self, items: Map<String, Value>) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        data.extend(items);
        self.save(&data).await
    }

    async fn remove(&self, keys: &[&str]) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        let before = data.len();
        for key in keys {
            data.remove(*key);
        }
        if data.len() == before {
            return Ok(());
        }
        info!("Removed {} key(s) from {:?}", before - data.len(), self.path);
        self.save(&data).await
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
