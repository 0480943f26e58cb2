//! Settings store: loading, saving, backups, and dynamic access.
//!
//! Key behaviors:
//! - Atomic writes (write to temp file, then rename) for every persist path
//! - Load failures fall back to defaults instead of reaching the caller
//! - Restore/import replace the record only after a full successful parse
//! - Unknown keys in dynamic access are reported, never panicked on

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::merge::{timestamp_slug, SharedMergeDefaults};

use super::settings::{now_timestamp, UserSettings};
use super::value::{self, SettingValue};

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Settings I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown setting key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Owns the settings record and its persistence.
///
/// One store exists per run, constructed by the entry point with the
/// settings file path and handed to the menu.
pub struct SettingsStore {
    /// Path to the settings file.
    settings_path: PathBuf,
    /// Current settings loaded in memory.
    settings: UserSettings,
}

impl SettingsStore {
    /// Create a store with default settings, without touching the disk.
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            settings: UserSettings::default(),
        }
    }

    /// Create a store and load the settings file, falling back to defaults
    /// when the file is missing or unreadable.
    pub fn open(settings_path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(settings_path);
        store.load_or_default();
        store
    }

    /// Get the settings file path.
    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Get a mutable reference to the current settings.
    ///
    /// Note: changes made here are only in memory until `save()` is called.
    pub fn settings_mut(&mut self) -> &mut UserSettings {
        &mut self.settings
    }

    /// Load the settings file, erroring when it is missing or malformed.
    pub fn load(&mut self) -> SettingsResult<()> {
        if !self.settings_path.exists() {
            return Err(SettingsError::NotFound(self.settings_path.clone()));
        }
        let content = fs::read_to_string(&self.settings_path)?;
        self.settings = serde_json::from_str(&content)?;
        Ok(())
    }

    /// Load the settings file, degrading to defaults on any failure.
    ///
    /// A missing file is the normal first-run case; a malformed one is
    /// logged and discarded. Callers never see an error, only a record.
    pub fn load_or_default(&mut self) {
        match self.load() {
            Ok(()) => info!("Settings loaded from {}", self.settings_path.display()),
            Err(SettingsError::NotFound(_)) => {
                info!("No settings file, using defaults");
                self.settings = UserSettings::default();
            }
            Err(e) => {
                warn!("Failed to load settings ({e}), using defaults");
                self.settings = UserSettings::default();
            }
        }
    }

    /// Save the current settings atomically, stamping `last_modified`.
    ///
    /// On failure the previous on-disk file is left unchanged.
    pub fn save(&mut self) -> SettingsResult<()> {
        self.settings.last_modified = now_timestamp();
        let json = self.to_json()?;
        atomic_write(&self.settings_path, &json)?;
        info!("Settings saved to {}", self.settings_path.display());
        Ok(())
    }

    /// Replace the in-memory record with a fresh default instance.
    ///
    /// No disk effect until `save()` is called.
    pub fn reset_to_defaults(&mut self) {
        self.settings = UserSettings::default();
        info!("Settings reset to defaults");
    }

    /// Write a timestamp-named copy of the current record beside the
    /// settings file and return its path.
    pub fn backup(&self) -> SettingsResult<PathBuf> {
        let backup_path = self
            .backup_dir()
            .join(format!("settings_backup_{}.json", timestamp_slug()));
        let json = self.to_json()?;
        atomic_write(&backup_path, &json)?;
        info!("Settings backed up to {}", backup_path.display());
        Ok(backup_path)
    }

    /// Replace the record with the contents of a backup file.
    ///
    /// A partial or corrupt file leaves the current record untouched.
    pub fn restore(&mut self, backup_path: &Path) -> SettingsResult<()> {
        self.settings = read_record(backup_path)?;
        info!("Settings restored from {}", backup_path.display());
        Ok(())
    }

    /// Export the current record to a caller-chosen path.
    pub fn export(&self, export_path: &Path) -> SettingsResult<()> {
        let json = self.to_json()?;
        atomic_write(export_path, &json)?;
        info!("Settings exported to {}", export_path.display());
        Ok(())
    }

    /// Replace the record with the contents of a caller-chosen file.
    ///
    /// Same contract as `restore`: all or nothing.
    pub fn import(&mut self, import_path: &Path) -> SettingsResult<()> {
        self.settings = read_record(import_path)?;
        info!("Settings imported from {}", import_path.display());
        Ok(())
    }

    /// Read a field by key. Returns `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<SettingValue> {
        value::get_value(&self.settings, key)
    }

    /// Write a field by key.
    ///
    /// Unknown keys and ill-typed values error out with the record left
    /// untouched; numeric range is not checked here.
    pub fn set(&mut self, key: &str, value: SettingValue) -> SettingsResult<()> {
        match value::set_value(&mut self.settings, key, value) {
            Ok(()) => {
                debug!("Setting updated: {key}");
                Ok(())
            }
            Err(e) => {
                warn!("Rejected setting update for {key}: {e}");
                Err(e)
            }
        }
    }

    /// Delete the oldest timestamped backups beyond `keep`, returning how
    /// many files were removed.
    pub fn prune_backups(&self, keep: usize) -> SettingsResult<usize> {
        let dir = self.backup_dir();
        let mut backups: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with("settings_backup_") && name.ends_with(".json") {
                backups.push(path);
            }
        }
        if backups.len() <= keep {
            return Ok(0);
        }

        // The timestamp naming scheme sorts chronologically.
        backups.sort();
        let stale = backups.len() - keep;
        for path in &backups[..stale] {
            fs::remove_file(path)?;
            debug!("Pruned old backup {}", path.display());
        }
        info!("Pruned {stale} old settings backup(s)");
        Ok(stale)
    }

    /// Copy the merge-relevant subset of the record into the shared
    /// defaults consumed by the merge engines.
    pub fn apply_to_merge_defaults(&self, defaults: &SharedMergeDefaults) {
        let s = &self.settings;
        let mut d = defaults.write();
        d.image_layout = s.image_default_layout;
        d.image_spacing = s.image_default_spacing;
        d.image_quality = s.image_default_quality;
        d.text_encoding = s.text_default_encoding.clone();
        d.text_separator = s.text_default_separator;
        d.text_add_line_numbers = s.text_add_line_numbers;
        d.text_add_timestamps = s.text_add_timestamps;
        d.text_strip_whitespace = s.text_strip_whitespace;
        d.output_use_timestamp = s.output_use_timestamp;
        d.output_auto_overwrite = s.output_auto_overwrite;
        d.output_create_backup = s.output_create_backup;
        info!("User settings applied to merge defaults");
    }

    /// Directory where backups live: beside the settings file.
    fn backup_dir(&self) -> PathBuf {
        self.settings_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn to_json(&self) -> SettingsResult<String> {
        let mut json = serde_json::to_string_pretty(&self.settings)?;
        json.push('\n');
        Ok(json)
    }
}

/// Read and fully parse a settings record from a file.
fn read_record(path: &Path) -> SettingsResult<UserSettings> {
    if !path.exists() {
        return Err(SettingsError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write content to a file atomically: temp file in the same directory,
/// flush to disk, then rename over the target.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::SettingGroup;
    use crate::merge::shared_defaults;
    use crate::models::ImageLayout;
    use chrono::DateTime;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> SettingsStore {
        SettingsStore::new(dir.join("settings.json"))
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.load_or_default();
        assert_eq!(store.settings(), &UserSettings::default());
    }

    #[test]
    fn corrupt_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let store = SettingsStore::open(&path);
        assert_eq!(store.settings(), &UserSettings::default());
    }

    #[test]
    fn alien_shape_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"not": "valid shape"}"#).unwrap();

        let store = SettingsStore::open(&path);
        assert_eq!(store.settings(), &UserSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.settings_mut().image_default_quality = 80;
        store.settings_mut().image_default_layout = ImageLayout::Grid;
        let before_save = store.settings().last_modified.clone();
        store.save().unwrap();

        let reloaded = SettingsStore::open(store.path());
        assert_eq!(reloaded.settings(), store.settings());
        assert_eq!(reloaded.settings().image_default_quality, 80);

        let old = DateTime::parse_from_rfc3339(&before_save).unwrap();
        let new = DateTime::parse_from_rfc3339(&reloaded.settings().last_modified).unwrap();
        assert!(new >= old);
    }

    #[test]
    fn save_writes_pretty_json_and_no_temp_file() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.save().unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("{\n  \""));
        assert!(content.contains("\"image_default_layout\": \"vertical\""));
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn backup_is_timestamp_named_and_beside_settings() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        let backup = store.backup().unwrap();

        assert_eq!(backup.parent().unwrap(), dir.path());
        let name = backup.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("settings_backup_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn backup_then_restore_is_identity() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        let backup = store.backup().unwrap();
        let before = store.settings().clone();

        store.restore(&backup).unwrap();
        assert_eq!(store.settings(), &before);
    }

    #[test]
    fn restore_reverts_later_mutations() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        let backup = store.backup().unwrap();

        store.settings_mut().image_default_quality = 42;
        store.settings_mut().ui_color_output = false;
        store.restore(&backup).unwrap();

        assert_eq!(store.settings().image_default_quality, 95);
        assert!(store.settings().ui_color_output);
    }

    #[test]
    fn restore_from_corrupt_file_leaves_record_untouched() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"image_default_quality": "#).unwrap();

        let mut store = store_in(dir.path());
        store.settings_mut().image_default_quality = 42;
        assert!(store.restore(&bad).is_err());
        assert_eq!(store.settings().image_default_quality, 42);
    }

    #[test]
    fn restore_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        let err = store.restore(&dir.path().join("nope.json"));
        assert!(matches!(err, Err(SettingsError::NotFound(_))));
    }

    #[test]
    fn export_import_round_trips() {
        let dir = tempdir().unwrap();
        let preset = dir.path().join("preset.json");

        let mut store = store_in(dir.path());
        store.settings_mut().performance_max_workers = 8;
        store.export(&preset).unwrap();

        let mut other = store_in(dir.path());
        other.import(&preset).unwrap();
        assert_eq!(other.settings().performance_max_workers, 8);
    }

    #[test]
    fn unknown_key_get_and_set_are_sentinels() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        let before = store.settings().clone();

        assert_eq!(store.get("nonexistent_field"), None);
        assert_eq!(
            store
                .get("nonexistent_field")
                .unwrap_or(SettingValue::Int(42)),
            SettingValue::Int(42)
        );
        assert!(matches!(
            store.set("nonexistent_field", SettingValue::Int(1)),
            Err(SettingsError::UnknownKey(_))
        ));
        assert_eq!(store.settings(), &before);
    }

    #[test]
    fn quality_range_scenario() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());

        store
            .set("image_default_quality", SettingValue::Int(150))
            .unwrap();
        let issues = store.settings().validate();
        assert_eq!(
            issues.get(&SettingGroup::Image).map(Vec::as_slice),
            Some(&["Quality must be between 1-100".to_string()][..])
        );

        store
            .set("image_default_quality", SettingValue::Int(95))
            .unwrap();
        assert!(store.settings().validate().is_empty());
    }

    #[test]
    fn reset_is_always_valid() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.settings_mut().image_default_quality = 150;
        store.reset_to_defaults();
        assert!(store.settings().validate().is_empty());
    }

    #[test]
    fn prune_keeps_newest_backups() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        for stamp in [
            "20240101_000001",
            "20240102_000002",
            "20240103_000003",
            "20240104_000004",
        ] {
            fs::write(
                dir.path().join(format!("settings_backup_{stamp}.json")),
                "{}",
            )
            .unwrap();
        }

        let removed = store.prune_backups(2).unwrap();
        assert_eq!(removed, 2);
        assert!(!dir
            .path()
            .join("settings_backup_20240101_000001.json")
            .exists());
        assert!(dir
            .path()
            .join("settings_backup_20240104_000004.json")
            .exists());
    }

    #[test]
    fn prune_under_limit_removes_nothing() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        let backup = store.backup().unwrap();
        assert_eq!(store.prune_backups(5).unwrap(), 0);
        assert!(backup.exists());
    }

    #[test]
    fn apply_copies_merge_relevant_fields() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.settings_mut().image_default_layout = ImageLayout::Horizontal;
        store.settings_mut().text_default_encoding = "latin-1".to_string();
        store.settings_mut().output_auto_overwrite = true;

        let defaults = shared_defaults();
        store.apply_to_merge_defaults(&defaults);

        let d = defaults.read();
        assert_eq!(d.image_layout, ImageLayout::Horizontal);
        assert_eq!(d.text_encoding, "latin-1");
        assert!(d.output_auto_overwrite);
    }
}
