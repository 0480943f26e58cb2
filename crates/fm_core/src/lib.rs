//! FM Core - Backend logic for File Merger
//!
//! This crate contains all business logic with zero UI dependencies.
//! It can be used by the terminal application or embedded elsewhere.

pub mod config;
pub mod logging;
pub mod merge;
pub mod models;

/// Application display name.
pub const APP_NAME: &str = "File Merger";

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
