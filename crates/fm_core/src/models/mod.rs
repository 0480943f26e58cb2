//! Data models for File Merger.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - Enums for merge layouts, filters, separators, log levels
//! - File format taxonomy (which extensions belong to which merge engine)

mod enums;
mod formats;

// Re-export all public types
pub use enums::{
    ImageFilter, ImageLayout, LogLevel, ResizeMode, SeparatorStyle, WatermarkPosition,
};
pub use formats::{category_of, is_supported, FileCategory};
