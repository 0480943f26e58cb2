//! Shared defaults consumed by the merge engines.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use parking_lot::RwLock;

use crate::models::{ImageLayout, SeparatorStyle};

/// Timestamp slug used in backup and output filenames.
pub fn timestamp_slug() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Defaults the merge engines fall back to when a job does not override
/// them. Mirrors the user-tunable subset of the settings record.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeDefaults {
    pub image_layout: ImageLayout,
    pub image_spacing: i64,
    pub image_quality: i64,
    pub text_encoding: String,
    pub text_separator: SeparatorStyle,
    pub text_add_line_numbers: bool,
    pub text_add_timestamps: bool,
    pub text_strip_whitespace: bool,
    pub output_use_timestamp: bool,
    pub output_auto_overwrite: bool,
    pub output_create_backup: bool,
}

impl Default for MergeDefaults {
    fn default() -> Self {
        Self {
            image_layout: ImageLayout::Vertical,
            image_spacing: 10,
            image_quality: 95,
            text_encoding: "utf-8".to_string(),
            text_separator: SeparatorStyle::Simple,
            text_add_line_numbers: false,
            text_add_timestamps: false,
            text_strip_whitespace: false,
            output_use_timestamp: true,
            output_auto_overwrite: false,
            output_create_backup: true,
        }
    }
}

/// Handle to the process-wide merge defaults.
///
/// Constructed once at the application entry point and passed explicitly;
/// there is no hidden global.
pub type SharedMergeDefaults = Arc<RwLock<MergeDefaults>>;

/// Create a fresh shared defaults object.
pub fn shared_defaults() -> SharedMergeDefaults {
    Arc::new(RwLock::new(MergeDefaults::default()))
}

/// Build an output path inside `dir`, optionally tagging the filename with
/// the current timestamp: `merged.png` becomes `merged_20240131_093000.png`.
pub fn output_path_for(dir: &Path, filename: &str, use_timestamp: bool) -> PathBuf {
    if !use_timestamp {
        return dir.join(filename);
    }
    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (filename, None),
    };
    let tagged = match ext {
        Some(ext) => format!("{stem}_{}.{ext}", timestamp_slug()),
        None => format!("{stem}_{}", timestamp_slug()),
    };
    dir.join(tagged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untimestamped_path_is_plain_join() {
        let path = output_path_for(Path::new("output"), "merged.png", false);
        assert_eq!(path, PathBuf::from("output/merged.png"));
    }

    #[test]
    fn timestamp_goes_before_extension() {
        let path = output_path_for(Path::new("output"), "merged.png", true);
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("merged_"));
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), "merged_YYYYMMDD_HHMMSS.png".len());
    }

    #[test]
    fn extensionless_filename_is_tagged_at_end() {
        let path = output_path_for(Path::new("out"), "merged", true);
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("merged_"));
        assert!(!name.contains('.'));
    }
}
