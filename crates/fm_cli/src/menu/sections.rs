//! Per-group settings editors.
//!
//! Each editor shows the group's current values, then walks its fields.
//! Enum fields are gated through `prompt_choice`, numeric fields through
//! the bounds the merge engines can actually handle; a rejected answer
//! always leaves the previous value in place.

use fm_core::config::SettingsStore;

use super::input::{prompt_bool, prompt_choice, prompt_int, prompt_text};

pub fn edit_image(store: &mut SettingsStore) {
    println!("\n-- Image processing settings --\n");
    let s = store.settings_mut();

    s.image_default_layout = prompt_choice("Default layout", s.image_default_layout);
    s.image_default_spacing = prompt_int("Spacing (px)", s.image_default_spacing, 0, i64::MAX);
    s.image_default_quality = prompt_int("JPEG quality", s.image_default_quality, 1, 100);
    s.image_default_resize_mode = prompt_choice("Resize mode", s.image_default_resize_mode);
    s.image_default_filter = prompt_choice("Default filter", s.image_default_filter);

    s.image_add_watermark = prompt_bool("Add watermark by default?", s.image_add_watermark);
    if s.image_add_watermark {
        s.image_watermark_text = prompt_text("Watermark text", &s.image_watermark_text);
        s.image_watermark_position =
            prompt_choice("Watermark position", s.image_watermark_position);
        s.image_watermark_opacity =
            prompt_int("Watermark opacity", s.image_watermark_opacity, 0, 255);
    }
}

pub fn edit_text(store: &mut SettingsStore) {
    println!("\n-- Text processing settings --\n");
    let s = store.settings_mut();

    s.text_default_separator = prompt_choice("Separator style", s.text_default_separator);
    println!("Common encodings: utf-8, latin-1, ascii, cp1252");
    s.text_default_encoding = prompt_text("Encoding", &s.text_default_encoding);
    s.text_add_line_numbers = prompt_bool("Add line numbers by default?", s.text_add_line_numbers);
    s.text_add_timestamps = prompt_bool("Add timestamps by default?", s.text_add_timestamps);
    s.text_strip_whitespace = prompt_bool("Strip whitespace by default?", s.text_strip_whitespace);
    s.text_markdown_export = prompt_bool("Export as Markdown by default?", s.text_markdown_export);
}

pub fn edit_output(store: &mut SettingsStore) {
    println!("\n-- Output settings --\n");
    let s = store.settings_mut();

    s.output_use_timestamp = prompt_bool("Add timestamp to filenames?", s.output_use_timestamp);
    s.output_auto_overwrite = prompt_bool("Auto overwrite existing files?", s.output_auto_overwrite);
    s.output_create_backup =
        prompt_bool("Create backup before overwriting?", s.output_create_backup);
    s.output_default_directory = prompt_text("Output directory", &s.output_default_directory);
}

pub fn edit_ui(store: &mut SettingsStore) {
    println!("\n-- User interface settings --\n");
    let s = store.settings_mut();

    s.ui_show_file_size = prompt_bool("Show file sizes in file list?", s.ui_show_file_size);
    s.ui_show_statistics = prompt_bool("Show statistics after processing?", s.ui_show_statistics);
    s.ui_confirm_before_process = prompt_bool(
        "Require confirmation before processing?",
        s.ui_confirm_before_process,
    );
    s.ui_clear_screen = prompt_bool("Clear screen between operations?", s.ui_clear_screen);
    s.ui_color_output = prompt_bool("Use colored output?", s.ui_color_output);
}

pub fn edit_performance(store: &mut SettingsStore) {
    println!("\n-- Performance settings --\n");
    println!("Warning: incorrect values may affect performance.");
    let s = store.settings_mut();

    s.performance_max_workers = prompt_int("Max workers", s.performance_max_workers, 1, 16);
    s.performance_chunk_size =
        prompt_int("Chunk size (bytes)", s.performance_chunk_size, 1, i64::MAX);
    s.performance_enable_cache = prompt_bool("Enable caching?", s.performance_enable_cache);
    s.performance_cache_size_mb =
        prompt_int("Cache size (MB)", s.performance_cache_size_mb, 0, i64::MAX);
}

pub fn edit_advanced(store: &mut SettingsStore) {
    println!("\n-- Advanced settings --\n");
    println!("Warning: advanced settings for experienced users.");
    let s = store.settings_mut();

    s.advanced_debug_mode = prompt_bool("Enable debug mode?", s.advanced_debug_mode);
    s.advanced_log_level = prompt_choice("Log level", s.advanced_log_level);
    s.advanced_backup_count =
        prompt_int("Backup files to keep", s.advanced_backup_count, 0, i64::MAX);
    s.advanced_auto_cleanup = prompt_bool("Auto cleanup old backups?", s.advanced_auto_cleanup);
}
