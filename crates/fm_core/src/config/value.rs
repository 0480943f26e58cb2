//! Dynamic access to settings fields by key name.
//!
//! The menu edits fields it only knows by their string key, so this module
//! maps every field-name token to a typed accessor through one closed match.
//! Unknown keys and ill-typed values are reported, never panicked on.
//! Range checking is deliberately absent here; see `UserSettings::validate`.

use crate::models::{
    ImageFilter, ImageLayout, LogLevel, ResizeMode, SeparatorStyle, WatermarkPosition,
};

use super::settings::UserSettings;
use super::store::SettingsError;

/// A settings value in transit between the menu and the record.
///
/// Enum-typed fields travel as their wire token (`Text`).
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{v}"),
            SettingValue::Int(v) => write!(f, "{v}"),
            SettingValue::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        SettingValue::Int(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::Text(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::Text(v)
    }
}

/// Every addressable field-name token, in record order.
pub const SETTING_KEYS: &[&str] = &[
    "image_default_layout",
    "image_default_spacing",
    "image_default_quality",
    "image_default_resize_mode",
    "image_default_filter",
    "image_add_watermark",
    "image_watermark_text",
    "image_watermark_position",
    "image_watermark_opacity",
    "text_default_separator",
    "text_default_encoding",
    "text_add_line_numbers",
    "text_add_timestamps",
    "text_strip_whitespace",
    "text_markdown_export",
    "output_use_timestamp",
    "output_auto_overwrite",
    "output_create_backup",
    "output_default_directory",
    "ui_show_file_size",
    "ui_show_statistics",
    "ui_confirm_before_process",
    "ui_clear_screen",
    "ui_color_output",
    "performance_max_workers",
    "performance_chunk_size",
    "performance_enable_cache",
    "performance_cache_size_mb",
    "advanced_debug_mode",
    "advanced_log_level",
    "advanced_backup_count",
    "advanced_auto_cleanup",
    "last_modified",
    "version",
];

fn type_mismatch(key: &str, expected: &str, got: &SettingValue) -> SettingsError {
    SettingsError::InvalidValue {
        key: key.to_string(),
        reason: format!("expected {expected}, got {got:?}"),
    }
}

fn bad_token(key: &str, token: &str) -> SettingsError {
    SettingsError::InvalidValue {
        key: key.to_string(),
        reason: format!("unrecognized token {token:?}"),
    }
}

macro_rules! expect {
    ($key:expr, $value:expr, Bool) => {
        match $value {
            SettingValue::Bool(v) => v,
            other => return Err(type_mismatch($key, "bool", &other)),
        }
    };
    ($key:expr, $value:expr, Int) => {
        match $value {
            SettingValue::Int(v) => v,
            other => return Err(type_mismatch($key, "integer", &other)),
        }
    };
    ($key:expr, $value:expr, Text) => {
        match $value {
            SettingValue::Text(v) => v,
            other => return Err(type_mismatch($key, "text", &other)),
        }
    };
}

/// Read a field by key. Returns `None` for unknown keys.
pub fn get_value(settings: &UserSettings, key: &str) -> Option<SettingValue> {
    let value = match key {
        "image_default_layout" => settings.image_default_layout.token().into(),
        "image_default_spacing" => settings.image_default_spacing.into(),
        "image_default_quality" => settings.image_default_quality.into(),
        "image_default_resize_mode" => settings.image_default_resize_mode.token().into(),
        "image_default_filter" => settings.image_default_filter.token().into(),
        "image_add_watermark" => settings.image_add_watermark.into(),
        "image_watermark_text" => settings.image_watermark_text.clone().into(),
        "image_watermark_position" => settings.image_watermark_position.token().into(),
        "image_watermark_opacity" => settings.image_watermark_opacity.into(),
        "text_default_separator" => settings.text_default_separator.token().into(),
        "text_default_encoding" => settings.text_default_encoding.clone().into(),
        "text_add_line_numbers" => settings.text_add_line_numbers.into(),
        "text_add_timestamps" => settings.text_add_timestamps.into(),
        "text_strip_whitespace" => settings.text_strip_whitespace.into(),
        "text_markdown_export" => settings.text_markdown_export.into(),
        "output_use_timestamp" => settings.output_use_timestamp.into(),
        "output_auto_overwrite" => settings.output_auto_overwrite.into(),
        "output_create_backup" => settings.output_create_backup.into(),
        "output_default_directory" => settings.output_default_directory.clone().into(),
        "ui_show_file_size" => settings.ui_show_file_size.into(),
        "ui_show_statistics" => settings.ui_show_statistics.into(),
        "ui_confirm_before_process" => settings.ui_confirm_before_process.into(),
        "ui_clear_screen" => settings.ui_clear_screen.into(),
        "ui_color_output" => settings.ui_color_output.into(),
        "performance_max_workers" => settings.performance_max_workers.into(),
        "performance_chunk_size" => settings.performance_chunk_size.into(),
        "performance_enable_cache" => settings.performance_enable_cache.into(),
        "performance_cache_size_mb" => settings.performance_cache_size_mb.into(),
        "advanced_debug_mode" => settings.advanced_debug_mode.into(),
        "advanced_log_level" => settings.advanced_log_level.token().into(),
        "advanced_backup_count" => settings.advanced_backup_count.into(),
        "advanced_auto_cleanup" => settings.advanced_auto_cleanup.into(),
        "last_modified" => settings.last_modified.clone().into(),
        "version" => settings.version.clone().into(),
        _ => return None,
    };
    Some(value)
}

/// Write a field by key.
///
/// Errors with `UnknownKey` when the key names no field, and with
/// `InvalidValue` on a type mismatch or an unparseable enum token. The
/// record is untouched on error.
pub fn set_value(
    settings: &mut UserSettings,
    key: &str,
    value: SettingValue,
) -> Result<(), SettingsError> {
    match key {
        "image_default_layout" => {
            let token = expect!(key, value, Text);
            settings.image_default_layout =
                ImageLayout::from_token(&token).ok_or_else(|| bad_token(key, &token))?;
        }
        "image_default_spacing" => settings.image_default_spacing = expect!(key, value, Int),
        "image_default_quality" => settings.image_default_quality = expect!(key, value, Int),
        "image_default_resize_mode" => {
            let token = expect!(key, value, Text);
            settings.image_default_resize_mode =
                ResizeMode::from_token(&token).ok_or_else(|| bad_token(key, &token))?;
        }
        "image_default_filter" => {
            let token = expect!(key, value, Text);
            settings.image_default_filter =
                ImageFilter::from_token(&token).ok_or_else(|| bad_token(key, &token))?;
        }
        "image_add_watermark" => settings.image_add_watermark = expect!(key, value, Bool),
        "image_watermark_text" => settings.image_watermark_text = expect!(key, value, Text),
        "image_watermark_position" => {
            let token = expect!(key, value, Text);
            settings.image_watermark_position =
                WatermarkPosition::from_token(&token).ok_or_else(|| bad_token(key, &token))?;
        }
        "image_watermark_opacity" => settings.image_watermark_opacity = expect!(key, value, Int),
        "text_default_separator" => {
            let token = expect!(key, value, Text);
            settings.text_default_separator =
                SeparatorStyle::from_token(&token).ok_or_else(|| bad_token(key, &token))?;
        }
        "text_default_encoding" => settings.text_default_encoding = expect!(key, value, Text),
        "text_add_line_numbers" => settings.text_add_line_numbers = expect!(key, value, Bool),
        "text_add_timestamps" => settings.text_add_timestamps = expect!(key, value, Bool),
        "text_strip_whitespace" => settings.text_strip_whitespace = expect!(key, value, Bool),
        "text_markdown_export" => settings.text_markdown_export = expect!(key, value, Bool),
        "output_use_timestamp" => settings.output_use_timestamp = expect!(key, value, Bool),
        "output_auto_overwrite" => settings.output_auto_overwrite = expect!(key, value, Bool),
        "output_create_backup" => settings.output_create_backup = expect!(key, value, Bool),
        "output_default_directory" => {
            settings.output_default_directory = expect!(key, value, Text)
        }
        "ui_show_file_size" => settings.ui_show_file_size = expect!(key, value, Bool),
        "ui_show_statistics" => settings.ui_show_statistics = expect!(key, value, Bool),
        "ui_confirm_before_process" => {
            settings.ui_confirm_before_process = expect!(key, value, Bool)
        }
        "ui_clear_screen" => settings.ui_clear_screen = expect!(key, value, Bool),
        "ui_color_output" => settings.ui_color_output = expect!(key, value, Bool),
        "performance_max_workers" => settings.performance_max_workers = expect!(key, value, Int),
        "performance_chunk_size" => settings.performance_chunk_size = expect!(key, value, Int),
        "performance_enable_cache" => {
            settings.performance_enable_cache = expect!(key, value, Bool)
        }
        "performance_cache_size_mb" => {
            settings.performance_cache_size_mb = expect!(key, value, Int)
        }
        "advanced_debug_mode" => settings.advanced_debug_mode = expect!(key, value, Bool),
        "advanced_log_level" => {
            let token = expect!(key, value, Text);
            settings.advanced_log_level =
                LogLevel::from_token(&token).ok_or_else(|| bad_token(key, &token))?;
        }
        "advanced_backup_count" => settings.advanced_backup_count = expect!(key, value, Int),
        "advanced_auto_cleanup" => settings.advanced_auto_cleanup = expect!(key, value, Bool),
        "last_modified" => settings.last_modified = expect!(key, value, Text),
        "version" => settings.version = expect!(key, value, Text),
        _ => return Err(SettingsError::UnknownKey(key.to_string())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_readable() {
        let settings = UserSettings::default();
        for key in SETTING_KEYS {
            assert!(get_value(&settings, key).is_some(), "unreadable key {key}");
        }
    }

    #[test]
    fn unknown_key_reads_none() {
        assert_eq!(get_value(&UserSettings::default(), "nonexistent_field"), None);
    }

    #[test]
    fn unknown_key_write_is_rejected_without_mutation() {
        let mut settings = UserSettings::default();
        let before = settings.clone();
        let err = set_value(&mut settings, "nonexistent_field", SettingValue::Int(1));
        assert!(matches!(err, Err(SettingsError::UnknownKey(_))));
        assert_eq!(settings, before);
    }

    #[test]
    fn enum_fields_travel_as_tokens() {
        let mut settings = UserSettings::default();
        set_value(
            &mut settings,
            "image_default_layout",
            SettingValue::from("grid"),
        )
        .unwrap();
        assert_eq!(settings.image_default_layout, ImageLayout::Grid);
        assert_eq!(
            get_value(&settings, "image_default_layout"),
            Some(SettingValue::from("grid"))
        );
    }

    #[test]
    fn bad_enum_token_is_invalid_value() {
        let mut settings = UserSettings::default();
        let err = set_value(
            &mut settings,
            "image_default_layout",
            SettingValue::from("diagonal"),
        );
        assert!(matches!(err, Err(SettingsError::InvalidValue { .. })));
        assert_eq!(settings.image_default_layout, ImageLayout::Vertical);
    }

    #[test]
    fn type_mismatch_is_invalid_value() {
        let mut settings = UserSettings::default();
        let err = set_value(
            &mut settings,
            "image_default_quality",
            SettingValue::Bool(true),
        );
        assert!(matches!(err, Err(SettingsError::InvalidValue { .. })));
        assert_eq!(settings.image_default_quality, 95);
    }

    #[test]
    fn out_of_range_int_is_accepted_at_write_time() {
        let mut settings = UserSettings::default();
        set_value(
            &mut settings,
            "image_default_quality",
            SettingValue::Int(150),
        )
        .unwrap();
        assert_eq!(settings.image_default_quality, 150);
    }
}
