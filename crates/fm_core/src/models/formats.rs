//! File format taxonomy.
//!
//! Routes an input file to the merge engine that can handle it, based on
//! its extension.

use std::path::Path;

/// Merge engine category for a supported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// Raster/vector images, merged by the image compositor.
    Image,
    /// Plain-text formats, merged by the text merger.
    Text,
    /// Document formats (PDF and office files).
    Document,
}

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tiff", "tif", "webp", "ico", "svg",
];

const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "csv", "json", "xml", "log", "ini", "yaml", "yml",
];

const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "odt"];

/// Determine the merge category for a path, if its extension is supported.
///
/// Extension matching is case-insensitive.
pub fn category_of(path: &Path) -> Option<FileCategory> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileCategory::Image)
    } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileCategory::Text)
    } else if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileCategory::Document)
    } else {
        None
    }
}

/// Check whether a path has a supported extension.
pub fn is_supported(path: &Path) -> bool {
    category_of(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn categorizes_by_extension() {
        assert_eq!(
            category_of(&PathBuf::from("photo.PNG")),
            Some(FileCategory::Image)
        );
        assert_eq!(
            category_of(&PathBuf::from("notes.md")),
            Some(FileCategory::Text)
        );
        assert_eq!(
            category_of(&PathBuf::from("report.pdf")),
            Some(FileCategory::Document)
        );
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        assert_eq!(category_of(&PathBuf::from("movie.mkv")), None);
        assert!(!is_supported(&PathBuf::from("movie.mkv")));
        assert!(!is_supported(&PathBuf::from("no_extension")));
    }
}
