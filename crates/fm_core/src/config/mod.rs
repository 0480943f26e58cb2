//! User settings for File Merger.
//!
//! This module provides:
//! - The flat JSON-backed settings record with documented defaults
//! - A store with load/save/backup/restore/export/import persistence
//! - Atomic file writes (write to temp, then rename)
//! - Dynamic field access by key with sentinel failures
//!
//! # Example
//!
//! ```no_run
//! use fm_core::config::{SettingValue, SettingsStore};
//!
//! // Load the settings file, or start from defaults
//! let mut store = SettingsStore::open("settings.json");
//!
//! // Read and edit settings
//! println!("Quality: {}", store.settings().image_default_quality);
//! store.set("image_default_quality", SettingValue::Int(85)).unwrap();
//!
//! // Persist
//! store.save().unwrap();
//! ```

mod settings;
mod store;
mod value;

pub use settings::{SettingGroup, UserSettings, SETTINGS_VERSION};
pub use store::{SettingsError, SettingsResult, SettingsStore};
pub use value::{SettingValue, SETTING_KEYS};
