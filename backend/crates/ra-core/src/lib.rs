//! Platform capabilities shared by the Read Aloud support layer.
//!
//! The host platform (browser storage, uninstall hook) is modelled as injected
//! async traits so the billing subsystem can run against an in-memory fake or a
//! JSON file on disk.

pub mod error;
pub mod settings;
pub mod state;
pub mod store;
pub mod uninstall;
pub mod voice;

#[cfg(test)]
mod tests;

pub use error::{Result as StoreResult, StoreError};
pub use settings::{Settings, SettingsUpdate, clear_settings, get_settings, update_settings};
pub use state::{get_state, get_string, set_state};
pub use store::{KeyValueStore, json_file_store::JsonFileStore, memory_store::MemoryStore};
pub use uninstall::{RecordingRegistrar, StoreUninstallRegistrar, UninstallRegistrar};
pub use voice::{ParsedLang, VoiceKind, parse_lang};
