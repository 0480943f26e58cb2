//! File Merger terminal entry point.

mod menu;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use directories::ProjectDirs;

use fm_core::config::SettingsStore;
use fm_core::logging::init_tracing;
use fm_core::merge::shared_defaults;
use fm_core::models::LogLevel;

#[derive(Parser)]
#[command(name = "file-merger")]
#[command(about = "Combine images and text files into one output")]
#[command(version)]
struct Cli {
    /// Override the settings file location
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the current settings and exit
    #[arg(long)]
    summary: bool,

    /// Check the current settings and exit non-zero on problems
    #[arg(long)]
    validate: bool,
}

/// Default settings path: the platform config directory, with a plain
/// `settings.json` beside the binary as a fallback.
fn default_settings_path() -> PathBuf {
    ProjectDirs::from("", "", "file-merger")
        .map(|dirs| dirs.config_dir().join("settings.json"))
        .unwrap_or_else(|| PathBuf::from("settings.json"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings_path = cli.config.unwrap_or_else(default_settings_path);
    let store = SettingsStore::open(&settings_path);

    // Debug mode forces verbose logging regardless of the stored level.
    let level = if store.settings().advanced_debug_mode {
        LogLevel::Debug
    } else {
        store.settings().advanced_log_level
    };
    init_tracing(level);
    tracing::debug!("Using settings file {}", store.path().display());

    if cli.summary {
        print!("{}", store.settings().summary());
        return ExitCode::SUCCESS;
    }

    if cli.validate {
        let issues = store.settings().validate();
        if issues.is_empty() {
            println!("Settings are valid.");
            return ExitCode::SUCCESS;
        }
        for (group, problems) in &issues {
            for problem in problems {
                println!("{group}: {problem}");
            }
        }
        return ExitCode::FAILURE;
    }

    let merge_defaults = shared_defaults();
    store.apply_to_merge_defaults(&merge_defaults);

    let mut menu = menu::SettingsMenu::new(store, merge_defaults);
    menu.run();
    ExitCode::SUCCESS
}
