//! Core enums used throughout the application.
//!
//! Every enum here is stored in the settings file by its wire token, so the
//! serde renames are part of the on-disk format and must not change.

use serde::{Deserialize, Serialize};

/// Arrangement of source images in the merged output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLayout {
    /// Stack images top to bottom.
    #[default]
    Vertical,
    /// Place images side by side.
    Horizontal,
    /// Arrange images in a grid.
    Grid,
    /// Caller-supplied arrangement.
    Custom,
}

impl ImageLayout {
    /// Wire token as stored in the settings file.
    pub fn token(&self) -> &'static str {
        match self {
            ImageLayout::Vertical => "vertical",
            ImageLayout::Horizontal => "horizontal",
            ImageLayout::Grid => "grid",
            ImageLayout::Custom => "custom",
        }
    }

    /// Parse a wire token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "vertical" => Some(Self::Vertical),
            "horizontal" => Some(Self::Horizontal),
            "grid" => Some(Self::Grid),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Get all available layouts.
    pub fn all() -> &'static [ImageLayout] {
        &[Self::Vertical, Self::Horizontal, Self::Grid, Self::Custom]
    }
}

impl std::fmt::Display for ImageLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// How source images are resized before composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Fit inside the target dimension, preserving aspect.
    Fit,
    /// Fill the target dimension and crop overflow.
    Fill,
    /// Stretch to the target dimension.
    Stretch,
    /// Keep original dimensions.
    #[default]
    None,
}

impl ResizeMode {
    /// Wire token as stored in the settings file.
    pub fn token(&self) -> &'static str {
        match self {
            ResizeMode::Fit => "fit",
            ResizeMode::Fill => "fill",
            ResizeMode::Stretch => "stretch",
            ResizeMode::None => "none",
        }
    }

    /// Parse a wire token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "fit" => Some(Self::Fit),
            "fill" => Some(Self::Fill),
            "stretch" => Some(Self::Stretch),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Get all available modes.
    pub fn all() -> &'static [ResizeMode] {
        &[Self::Fit, Self::Fill, Self::Stretch, Self::None]
    }
}

impl std::fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Filter applied to source images before composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFilter {
    /// No filter.
    #[default]
    None,
    Grayscale,
    Sepia,
    Blur,
    Sharpen,
    /// Edge enhancement.
    Edge,
}

impl ImageFilter {
    /// Wire token as stored in the settings file.
    pub fn token(&self) -> &'static str {
        match self {
            ImageFilter::None => "none",
            ImageFilter::Grayscale => "grayscale",
            ImageFilter::Sepia => "sepia",
            ImageFilter::Blur => "blur",
            ImageFilter::Sharpen => "sharpen",
            ImageFilter::Edge => "edge",
        }
    }

    /// Parse a wire token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "none" => Some(Self::None),
            "grayscale" => Some(Self::Grayscale),
            "sepia" => Some(Self::Sepia),
            "blur" => Some(Self::Blur),
            "sharpen" => Some(Self::Sharpen),
            "edge" => Some(Self::Edge),
            _ => None,
        }
    }

    /// Get all available filters.
    pub fn all() -> &'static [ImageFilter] {
        &[
            Self::None,
            Self::Grayscale,
            Self::Sepia,
            Self::Blur,
            Self::Sharpen,
            Self::Edge,
        ]
    }
}

impl std::fmt::Display for ImageFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Corner (or center) where the watermark is blended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatermarkPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Center,
}

impl WatermarkPosition {
    /// Wire token as stored in the settings file.
    pub fn token(&self) -> &'static str {
        match self {
            WatermarkPosition::TopLeft => "top-left",
            WatermarkPosition::TopRight => "top-right",
            WatermarkPosition::BottomLeft => "bottom-left",
            WatermarkPosition::BottomRight => "bottom-right",
            WatermarkPosition::Center => "center",
        }
    }

    /// Parse a wire token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "top-left" => Some(Self::TopLeft),
            "top-right" => Some(Self::TopRight),
            "bottom-left" => Some(Self::BottomLeft),
            "bottom-right" => Some(Self::BottomRight),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    /// Get all available positions.
    pub fn all() -> &'static [WatermarkPosition] {
        &[
            Self::TopLeft,
            Self::TopRight,
            Self::BottomLeft,
            Self::BottomRight,
            Self::Center,
        ]
    }
}

impl std::fmt::Display for WatermarkPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Separator rendered between files in a merged text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorStyle {
    /// `=== filename ===`
    #[default]
    Simple,
    /// Box-drawn banner.
    Fancy,
    /// `--- filename ---`
    Minimal,
    /// Bare filename.
    None,
}

impl SeparatorStyle {
    /// Wire token as stored in the settings file.
    pub fn token(&self) -> &'static str {
        match self {
            SeparatorStyle::Simple => "simple",
            SeparatorStyle::Fancy => "fancy",
            SeparatorStyle::Minimal => "minimal",
            SeparatorStyle::None => "none",
        }
    }

    /// Parse a wire token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "simple" => Some(Self::Simple),
            "fancy" => Some(Self::Fancy),
            "minimal" => Some(Self::Minimal),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Get all available styles.
    pub fn all() -> &'static [SeparatorStyle] {
        &[Self::Simple, Self::Fancy, Self::Minimal, Self::None]
    }

    /// Render the separator banner for a filename.
    pub fn banner(&self, filename: &str) -> String {
        match self {
            SeparatorStyle::Simple => format!("=== {filename} ==="),
            SeparatorStyle::Fancy => format!(
                "╔══════════════════════════════════════╗\n║ {filename}\n╚══════════════════════════════════════╝"
            ),
            SeparatorStyle::Minimal => format!("--- {filename} ---"),
            SeparatorStyle::None => filename.to_string(),
        }
    }
}

impl std::fmt::Display for SeparatorStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Log level persisted in user settings.
///
/// The wire tokens are uppercase, matching what older settings files contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Wire token as stored in the settings file.
    pub fn token(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Parse a wire token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Get all defined levels.
    pub fn all() -> &'static [LogLevel] {
        &[
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_serializes_lowercase() {
        let json = serde_json::to_string(&ImageLayout::Vertical).unwrap();
        assert_eq!(json, "\"vertical\"");
    }

    #[test]
    fn watermark_position_serializes_kebab_case() {
        let json = serde_json::to_string(&WatermarkPosition::BottomRight).unwrap();
        assert_eq!(json, "\"bottom-right\"");
        let pos: WatermarkPosition = serde_json::from_str("\"top-left\"").unwrap();
        assert_eq!(pos, WatermarkPosition::TopLeft);
    }

    #[test]
    fn log_level_serializes_uppercase() {
        let json = serde_json::to_string(&LogLevel::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
    }

    #[test]
    fn from_token_round_trips() {
        for filter in ImageFilter::all() {
            assert_eq!(ImageFilter::from_token(filter.token()), Some(*filter));
        }
        assert_eq!(ImageFilter::from_token("solarize"), None);
    }

    #[test]
    fn separator_banners() {
        assert_eq!(SeparatorStyle::Simple.banner("a.txt"), "=== a.txt ===");
        assert_eq!(SeparatorStyle::Minimal.banner("a.txt"), "--- a.txt ---");
        assert_eq!(SeparatorStyle::None.banner("a.txt"), "a.txt");
        assert!(SeparatorStyle::Fancy.banner("a.txt").contains("║ a.txt"));
    }
}
