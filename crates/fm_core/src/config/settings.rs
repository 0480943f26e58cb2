//! The user settings record.
//!
//! One flat struct whose field names are exactly the keys of the JSON
//! settings file. Missing keys fill from per-field defaults; unknown keys
//! make the whole document fail to parse, so a file with an alien shape is
//! rejected rather than half-loaded.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::models::{
    ImageFilter, ImageLayout, LogLevel, ResizeMode, SeparatorStyle, WatermarkPosition,
};

/// Schema tag written into every settings file.
pub const SETTINGS_VERSION: &str = "2.0.0";

/// User preferences, persisted field-for-field as a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSettings {
    // Image settings
    #[serde(default)]
    pub image_default_layout: ImageLayout,
    #[serde(default = "default_spacing")]
    pub image_default_spacing: i64,
    #[serde(default = "default_quality")]
    pub image_default_quality: i64,
    #[serde(default)]
    pub image_default_resize_mode: ResizeMode,
    #[serde(default)]
    pub image_default_filter: ImageFilter,
    #[serde(default)]
    pub image_add_watermark: bool,
    #[serde(default = "default_watermark_text")]
    pub image_watermark_text: String,
    #[serde(default)]
    pub image_watermark_position: WatermarkPosition,
    #[serde(default = "default_watermark_opacity")]
    pub image_watermark_opacity: i64,

    // Text settings
    #[serde(default)]
    pub text_default_separator: SeparatorStyle,
    #[serde(default = "default_encoding")]
    pub text_default_encoding: String,
    #[serde(default)]
    pub text_add_line_numbers: bool,
    #[serde(default)]
    pub text_add_timestamps: bool,
    #[serde(default)]
    pub text_strip_whitespace: bool,
    #[serde(default)]
    pub text_markdown_export: bool,

    // Output settings
    #[serde(default = "default_true")]
    pub output_use_timestamp: bool,
    #[serde(default)]
    pub output_auto_overwrite: bool,
    #[serde(default = "default_true")]
    pub output_create_backup: bool,
    #[serde(default = "default_output_directory")]
    pub output_default_directory: String,

    // UI settings
    #[serde(default = "default_true")]
    pub ui_show_file_size: bool,
    #[serde(default = "default_true")]
    pub ui_show_statistics: bool,
    #[serde(default = "default_true")]
    pub ui_confirm_before_process: bool,
    #[serde(default)]
    pub ui_clear_screen: bool,
    #[serde(default = "default_true")]
    pub ui_color_output: bool,

    // Performance settings
    #[serde(default = "default_max_workers")]
    pub performance_max_workers: i64,
    #[serde(default = "default_chunk_size")]
    pub performance_chunk_size: i64,
    #[serde(default = "default_true")]
    pub performance_enable_cache: bool,
    #[serde(default = "default_cache_size_mb")]
    pub performance_cache_size_mb: i64,

    // Advanced settings
    #[serde(default)]
    pub advanced_debug_mode: bool,
    #[serde(default)]
    pub advanced_log_level: LogLevel,
    #[serde(default = "default_backup_count")]
    pub advanced_backup_count: i64,
    #[serde(default = "default_true")]
    pub advanced_auto_cleanup: bool,

    // Metadata
    #[serde(default = "now_timestamp")]
    pub last_modified: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_true() -> bool {
    true
}

fn default_spacing() -> i64 {
    10
}

fn default_quality() -> i64 {
    95
}

fn default_watermark_text() -> String {
    "© 2024".to_string()
}

fn default_watermark_opacity() -> i64 {
    128
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

fn default_output_directory() -> String {
    "output".to_string()
}

fn default_max_workers() -> i64 {
    4
}

fn default_chunk_size() -> i64 {
    8192
}

fn default_cache_size_mb() -> i64 {
    128
}

fn default_backup_count() -> i64 {
    5
}

fn default_version() -> String {
    SETTINGS_VERSION.to_string()
}

/// Current local time as an ISO-8601 string.
pub(crate) fn now_timestamp() -> String {
    Local::now().to_rfc3339()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            image_default_layout: ImageLayout::Vertical,
            image_default_spacing: default_spacing(),
            image_default_quality: default_quality(),
            image_default_resize_mode: ResizeMode::None,
            image_default_filter: ImageFilter::None,
            image_add_watermark: false,
            image_watermark_text: default_watermark_text(),
            image_watermark_position: WatermarkPosition::BottomRight,
            image_watermark_opacity: default_watermark_opacity(),
            text_default_separator: SeparatorStyle::Simple,
            text_default_encoding: default_encoding(),
            text_add_line_numbers: false,
            text_add_timestamps: false,
            text_strip_whitespace: false,
            text_markdown_export: false,
            output_use_timestamp: true,
            output_auto_overwrite: false,
            output_create_backup: true,
            output_default_directory: default_output_directory(),
            ui_show_file_size: true,
            ui_show_statistics: true,
            ui_confirm_before_process: true,
            ui_clear_screen: false,
            ui_color_output: true,
            performance_max_workers: default_max_workers(),
            performance_chunk_size: default_chunk_size(),
            performance_enable_cache: true,
            performance_cache_size_mb: default_cache_size_mb(),
            advanced_debug_mode: false,
            advanced_log_level: LogLevel::Info,
            advanced_backup_count: default_backup_count(),
            advanced_auto_cleanup: true,
            last_modified: now_timestamp(),
            version: default_version(),
        }
    }
}

/// Logical settings group, used to bucket validation problems and to lay
/// out the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingGroup {
    Image,
    Text,
    Output,
    Ui,
    Performance,
    Advanced,
    Metadata,
}

impl SettingGroup {
    /// Lowercase group name, matching the field-name prefix.
    pub fn name(&self) -> &'static str {
        match self {
            SettingGroup::Image => "image",
            SettingGroup::Text => "text",
            SettingGroup::Output => "output",
            SettingGroup::Ui => "ui",
            SettingGroup::Performance => "performance",
            SettingGroup::Advanced => "advanced",
            SettingGroup::Metadata => "metadata",
        }
    }
}

impl std::fmt::Display for SettingGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl UserSettings {
    /// Non-mutating range check over the numeric fields.
    ///
    /// Dynamic assignment deliberately skips range validation, so values
    /// like a quality of 150 can exist in memory; this pass is how they are
    /// surfaced. Returns an empty map iff nothing is wrong.
    pub fn validate(&self) -> BTreeMap<SettingGroup, Vec<String>> {
        let mut issues: BTreeMap<SettingGroup, Vec<String>> = BTreeMap::new();

        if self.image_default_quality < 1 || self.image_default_quality > 100 {
            issues
                .entry(SettingGroup::Image)
                .or_default()
                .push("Quality must be between 1-100".to_string());
        }
        if self.image_default_spacing < 0 {
            issues
                .entry(SettingGroup::Image)
                .or_default()
                .push("Spacing cannot be negative".to_string());
        }
        if self.image_watermark_opacity < 0 || self.image_watermark_opacity > 255 {
            issues
                .entry(SettingGroup::Image)
                .or_default()
                .push("Watermark opacity must be between 0-255".to_string());
        }
        if self.performance_max_workers < 1 {
            issues
                .entry(SettingGroup::Performance)
                .or_default()
                .push("Max workers must be at least 1".to_string());
        }
        if self.performance_cache_size_mb < 0 {
            issues
                .entry(SettingGroup::Performance)
                .or_default()
                .push("Cache size cannot be negative".to_string());
        }

        issues
    }

    /// Render every field, grouped, for display.
    pub fn summary(&self) -> String {
        fn yes_no(value: bool) -> &'static str {
            if value {
                "Yes"
            } else {
                "No"
            }
        }

        let mut out = String::new();
        let _ = writeln!(out, "CURRENT SETTINGS");
        let _ = writeln!(out, "================");
        let _ = writeln!(out);
        let _ = writeln!(out, "Image");
        let _ = writeln!(out, "  Layout:              {}", self.image_default_layout);
        let _ = writeln!(out, "  Spacing:             {}px", self.image_default_spacing);
        let _ = writeln!(out, "  Quality:             {}%", self.image_default_quality);
        let _ = writeln!(out, "  Resize mode:         {}", self.image_default_resize_mode);
        let _ = writeln!(out, "  Default filter:      {}", self.image_default_filter);
        let _ = writeln!(
            out,
            "  Watermark:           {}",
            if self.image_add_watermark { "Enabled" } else { "Disabled" }
        );
        let _ = writeln!(out, "  Watermark text:      {}", self.image_watermark_text);
        let _ = writeln!(out, "  Watermark position:  {}", self.image_watermark_position);
        let _ = writeln!(
            out,
            "  Watermark opacity:   {}/255",
            self.image_watermark_opacity
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Text");
        let _ = writeln!(out, "  Separator style:     {}", self.text_default_separator);
        let _ = writeln!(out, "  Encoding:            {}", self.text_default_encoding);
        let _ = writeln!(out, "  Line numbers:        {}", yes_no(self.text_add_line_numbers));
        let _ = writeln!(out, "  Timestamps:          {}", yes_no(self.text_add_timestamps));
        let _ = writeln!(out, "  Strip whitespace:    {}", yes_no(self.text_strip_whitespace));
        let _ = writeln!(out, "  Markdown export:     {}", yes_no(self.text_markdown_export));
        let _ = writeln!(out);
        let _ = writeln!(out, "Output");
        let _ = writeln!(out, "  Use timestamp:       {}", yes_no(self.output_use_timestamp));
        let _ = writeln!(out, "  Auto overwrite:      {}", yes_no(self.output_auto_overwrite));
        let _ = writeln!(out, "  Create backup:       {}", yes_no(self.output_create_backup));
        let _ = writeln!(out, "  Output directory:    {}", self.output_default_directory);
        let _ = writeln!(out);
        let _ = writeln!(out, "UI");
        let _ = writeln!(out, "  Show file size:      {}", yes_no(self.ui_show_file_size));
        let _ = writeln!(out, "  Show statistics:     {}", yes_no(self.ui_show_statistics));
        let _ = writeln!(
            out,
            "  Confirm processing:  {}",
            yes_no(self.ui_confirm_before_process)
        );
        let _ = writeln!(out, "  Clear screen:        {}", yes_no(self.ui_clear_screen));
        let _ = writeln!(out, "  Color output:        {}", yes_no(self.ui_color_output));
        let _ = writeln!(out);
        let _ = writeln!(out, "Performance");
        let _ = writeln!(out, "  Max workers:         {}", self.performance_max_workers);
        let _ = writeln!(
            out,
            "  Chunk size:          {} bytes",
            self.performance_chunk_size
        );
        let _ = writeln!(out, "  Enable cache:        {}", yes_no(self.performance_enable_cache));
        let _ = writeln!(
            out,
            "  Cache size:          {} MB",
            self.performance_cache_size_mb
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Advanced");
        let _ = writeln!(out, "  Debug mode:          {}", yes_no(self.advanced_debug_mode));
        let _ = writeln!(out, "  Log level:           {}", self.advanced_log_level);
        let _ = writeln!(out, "  Backup count:        {}", self.advanced_backup_count);
        let _ = writeln!(out, "  Auto cleanup:        {}", yes_no(self.advanced_auto_cleanup));
        let _ = writeln!(out);
        let _ = writeln!(out, "Metadata");
        let _ = writeln!(out, "  Last modified:       {}", self.last_modified);
        let _ = writeln!(out, "  Version:             {}", self.version);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let s = UserSettings::default();
        assert_eq!(s.image_default_layout, ImageLayout::Vertical);
        assert_eq!(s.image_default_spacing, 10);
        assert_eq!(s.image_default_quality, 95);
        assert_eq!(s.image_watermark_text, "© 2024");
        assert_eq!(s.image_watermark_opacity, 128);
        assert_eq!(s.text_default_encoding, "utf-8");
        assert_eq!(s.output_default_directory, "output");
        assert_eq!(s.performance_max_workers, 4);
        assert_eq!(s.performance_chunk_size, 8192);
        assert_eq!(s.advanced_log_level, LogLevel::Info);
        assert_eq!(s.advanced_backup_count, 5);
        assert_eq!(s.version, "2.0.0");
    }

    #[test]
    fn defaults_are_always_valid() {
        assert!(UserSettings::default().validate().is_empty());
    }

    #[test]
    fn json_round_trip() {
        let settings = UserSettings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed: UserSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = r#"{"image_default_quality": 80}"#;
        let parsed: UserSettings = serde_json::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.image_default_quality, 80);
        // Defaults applied for missing
        assert_eq!(parsed.image_default_layout, ImageLayout::Vertical);
        assert_eq!(parsed.performance_max_workers, 4);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let alien = r#"{"not": "valid shape"}"#;
        assert!(serde_json::from_str::<UserSettings>(alien).is_err());
    }

    #[test]
    fn out_of_range_quality_reported_under_image() {
        let mut s = UserSettings::default();
        s.image_default_quality = 150;
        let issues = s.validate();
        assert_eq!(
            issues.get(&SettingGroup::Image).map(Vec::as_slice),
            Some(&["Quality must be between 1-100".to_string()][..])
        );
    }

    #[test]
    fn negative_values_reported() {
        let mut s = UserSettings::default();
        s.image_default_spacing = -1;
        s.performance_cache_size_mb = -10;
        s.performance_max_workers = 0;
        let issues = s.validate();
        assert!(issues[&SettingGroup::Image]
            .contains(&"Spacing cannot be negative".to_string()));
        assert!(issues[&SettingGroup::Performance]
            .contains(&"Max workers must be at least 1".to_string()));
        assert!(issues[&SettingGroup::Performance]
            .contains(&"Cache size cannot be negative".to_string()));
    }

    #[test]
    fn summary_lists_every_group() {
        let text = UserSettings::default().summary();
        for heading in ["Image", "Text", "Output", "UI", "Performance", "Advanced", "Metadata"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("Layout:              vertical"));
        assert!(text.contains("Version:             2.0.0"));
    }
}
