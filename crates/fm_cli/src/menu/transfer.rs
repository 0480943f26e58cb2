//! Import/export/backup/restore submenu.

use std::path::PathBuf;

use fm_core::config::SettingsStore;

use super::input::{prompt_bool, read_line};

/// Outcome the main loop needs to know about.
pub struct TransferOutcome {
    /// The in-memory record was replaced (import or restore succeeded).
    pub record_replaced: bool,
}

pub fn run(store: &mut SettingsStore) -> TransferOutcome {
    println!("\n-- Import/export settings --\n");
    println!("  1. Export settings");
    println!("  2. Import settings");
    println!("  3. Backup settings");
    println!("  4. Restore from backup");
    println!("  0. Back\n");

    let mut outcome = TransferOutcome {
        record_replaced: false,
    };
    let Some(choice) = read_line("Select option (0-4): ") else {
        return outcome;
    };

    match choice.as_str() {
        "1" => export(store),
        "2" => outcome.record_replaced = import(store),
        "3" => backup(store),
        "4" => outcome.record_replaced = restore(store),
        _ => {}
    }
    outcome
}

fn export(store: &SettingsStore) {
    let Some(path) = read_line("Export to (path/filename.json): ") else {
        return;
    };
    if path.is_empty() {
        println!("Export cancelled.");
        return;
    }
    let mut path = PathBuf::from(path);
    if path.extension().is_none() {
        path.set_extension("json");
    }

    match store.export(&path) {
        Ok(()) => println!("Settings exported to {}", path.display()),
        Err(e) => println!("Export failed: {e}"),
    }
}

fn import(store: &mut SettingsStore) -> bool {
    let Some(path) = read_line("Import from (path/filename.json): ") else {
        return false;
    };
    if path.is_empty() {
        println!("Import cancelled.");
        return false;
    }
    if !prompt_bool("This will overwrite current settings. Continue?", false) {
        return false;
    }

    match store.import(&PathBuf::from(path)) {
        Ok(()) => {
            println!("Settings imported.");
            true
        }
        Err(e) => {
            println!("Import failed: {e}");
            false
        }
    }
}

fn backup(store: &SettingsStore) {
    match store.backup() {
        Ok(path) => println!("Backup created: {}", path.display()),
        Err(e) => println!("Backup failed: {e}"),
    }
}

fn restore(store: &mut SettingsStore) -> bool {
    let Some(path) = read_line("Backup file path: ") else {
        return false;
    };
    if path.is_empty() {
        println!("Restore cancelled.");
        return false;
    }

    match store.restore(&PathBuf::from(path)) {
        Ok(()) => {
            println!("Settings restored.");
            true
        }
        Err(e) => {
            println!("Restore failed: {e}");
            false
        }
    }
}
