//! Interactive settings menu.
//!
//! Edits the store's record field-by-field and drives its persistence
//! operations. Every store failure is reported and the loop continues;
//! nothing here can take the process down.

mod input;
mod sections;
mod transfer;

use fm_core::config::SettingsStore;
use fm_core::merge::SharedMergeDefaults;

use input::read_line;

pub struct SettingsMenu {
    store: SettingsStore,
    merge_defaults: SharedMergeDefaults,
    modified: bool,
}

impl SettingsMenu {
    pub fn new(store: SettingsStore, merge_defaults: SharedMergeDefaults) -> Self {
        Self {
            store,
            merge_defaults,
            modified: false,
        }
    }

    pub fn run(&mut self) {
        loop {
            self.print_main_menu();

            let Some(choice) = read_line("Select option (0-9): ") else {
                // stdin closed; discard pending edits and leave
                return;
            };

            match choice.as_str() {
                "0" => {
                    if self.exit_settings() {
                        return;
                    }
                }
                "1" => self.edit_section(sections::edit_image),
                "2" => self.edit_section(sections::edit_text),
                "3" => self.edit_section(sections::edit_output),
                "4" => self.edit_section(sections::edit_ui),
                "5" => self.edit_section(sections::edit_performance),
                "6" => self.edit_section(sections::edit_advanced),
                "7" => self.view_all(),
                "8" => self.reset(),
                "9" => {
                    let outcome = transfer::run(&mut self.store);
                    if outcome.record_replaced {
                        self.modified = true;
                    }
                }
                _ => println!("Invalid option."),
            }
        }
    }

    fn print_main_menu(&self) {
        println!("\n===== {} settings =====\n", fm_core::APP_NAME);
        println!("  1. Image processing settings");
        println!("  2. Text processing settings");
        println!("  3. Output settings");
        println!("  4. UI settings");
        println!("  5. Performance settings");
        println!("  6. Advanced settings");
        println!();
        println!("  7. View all settings");
        println!("  8. Reset to defaults");
        println!("  9. Import/export settings");
        println!("  0. Save & exit\n");

        if self.modified {
            println!("You have unsaved changes.\n");
        }
    }

    /// Run a section editor and track whether it actually changed anything.
    fn edit_section(&mut self, edit: fn(&mut SettingsStore)) {
        let before = self.store.settings().clone();
        edit(&mut self.store);
        if self.store.settings() != &before {
            self.modified = true;
        }
    }

    fn view_all(&self) {
        if self.store.settings().ui_clear_screen {
            print!("\x1b[2J\x1b[H");
        }
        print!("{}", self.store.settings().summary());

        let issues = self.store.settings().validate();
        if !issues.is_empty() {
            println!("\nVALIDATION WARNINGS:");
            for (group, problems) in &issues {
                println!("  {group}:");
                for problem in problems {
                    println!("    - {problem}");
                }
            }
        }
    }

    fn reset(&mut self) {
        println!("\nThis will reset ALL settings to default values.");
        let Some(confirm) = read_line("Type 'RESET' to confirm: ") else {
            return;
        };
        if confirm != "RESET" {
            println!("Reset cancelled.");
            return;
        }

        // Keep an escape hatch before wiping the record
        match self.store.backup() {
            Ok(path) => println!("Current settings backed up to {}", path.display()),
            Err(e) => println!("Backup failed: {e}"),
        }

        self.store.reset_to_defaults();
        self.modified = true;
        println!("Settings reset to defaults.");
    }

    /// Returns true when the menu should terminate.
    fn exit_settings(&mut self) -> bool {
        if !self.modified {
            return true;
        }

        println!("\nYou have unsaved changes.\n");
        println!("  1. Save and exit");
        println!("  2. Exit without saving");
        println!("  3. Cancel\n");

        let Some(choice) = read_line("Select option (1-3): ") else {
            return true;
        };

        match choice.as_str() {
            "1" => self.save_and_apply(),
            "2" => {
                let Some(confirm) = read_line("Discard all changes? (y/n): ") else {
                    return true;
                };
                input::parse_bool(&confirm).unwrap_or(false)
            }
            _ => false,
        }
    }

    fn save_and_apply(&mut self) -> bool {
        if let Err(e) = self.store.save() {
            println!("Failed to save settings: {e}");
            return false;
        }

        self.store.apply_to_merge_defaults(&self.merge_defaults);

        if self.store.settings().advanced_auto_cleanup {
            let keep = self.store.settings().advanced_backup_count.max(0) as usize;
            if let Err(e) = self.store.prune_backups(keep) {
                println!("Backup cleanup failed: {e}");
            }
        }

        println!("Settings saved and applied.");
        true
    }
}
