//! Merge-engine collaboration layer.
//!
//! The compositor and text merger read their defaults from one shared
//! [`MergeDefaults`] object with process lifetime. It is created at startup,
//! handed to whoever needs it, and written by
//! `SettingsStore::apply_to_merge_defaults`.

mod defaults;

pub use defaults::{
    output_path_for, shared_defaults, timestamp_slug, MergeDefaults, SharedMergeDefaults,
};
