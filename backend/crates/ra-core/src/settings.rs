//! Speech settings persisted in the key-value store.

use crate::{KeyValueStore, StoreError, StoreResult};

use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_RATE: f64 = 1.0;
pub const DEFAULT_PITCH: f64 = 1.0;
pub const DEFAULT_VOLUME: f64 = 1.0;
pub const DEFAULT_SHOW_HIGHLIGHTING: u8 = 0;

/// Store keys owned by the settings.
pub const SETTINGS_KEYS: [&str; 5] = ["voiceName", "rate", "pitch", "volume", "showHighlighting"];

/// Effective settings, with defaults filled in for anything not stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub voice_name: Option<String>,
    pub rate: f64,
    pub pitch: f64,
    pub volume: f64,
    pub show_highlighting: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            voice_name: None,
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
            volume: DEFAULT_VOLUME,
            show_highlighting: DEFAULT_SHOW_HIGHLIGHTING,
        }
    }
}

/// Partial settings. `None` fields are left untouched in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_highlighting: Option<u8>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Reads the stored settings, merged over the defaults.
///
/// A key holding a value of the wrong type fails with [`StoreError::TypeMismatch`].
pub async fn get_settings(store: &dyn KeyValueStore) -> StoreResult<Settings> {
    let mut items = store.get(&SETTINGS_KEYS).await?;
    let defaults = Settings::default();

    Ok(Settings {
        voice_name: take_field(&mut items, "voiceName", "a string")?,
        rate: take_field(&mut items, "rate", "a number")?.unwrap_or(defaults.rate),
        pitch: take_field(&mut items, "pitch", "a number")?.unwrap_or(defaults.pitch),
        volume: take_field(&mut items, "volume", "a number")?.unwrap_or(defaults.volume),
        show_highlighting: take_field(&mut items, "showHighlighting", "an integer 0-255")?
            .unwrap_or(defaults.show_highlighting),
    })
}

// Null counts as unset.
fn take_field<T: DeserializeOwned>(
    items: &mut Map<String, Value>,
    key: &str,
    expected: &'static str,
) -> StoreResult<Option<T>> {
    match items.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|_| StoreError::type_mismatch(key, expected)),
    }
}

/// Writes the fields present in `update`.
pub async fn update_settings(store: &dyn KeyValueStore, update: &SettingsUpdate) -> StoreResult<()> {
    if update.is_empty() {
        return Ok(());
    }

    let items = match serde_json::to_value(update)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    info!("Updating settings: {:?}", items.keys().collect::<Vec<_>>());
    store.set(items).await
}

/// Removes every stored setting so reads fall back to the defaults.
pub async fn clear_settings(store: &dyn KeyValueStore) -> StoreResult<()> {
    info!("Clearing settings");
    store.remove(&SETTINGS_KEYS).await
}
