//! Onboarding CLI commands
//!
//! Implements the `onboard` subcommands on top of the JSON file store.

use std::io::{self, Write};

use clap::ValueEnum;

use super::interactive::{PromptSession, SessionEnd};
use crate::config::{OnboardPaths, Settings};
use crate::dashboard::Dashboard;
use crate::display::format_dashboard;
use crate::error::{OnboardError, OnboardResult};
use crate::models::{OnboardingData, Theme};
use crate::storage::{JsonFileStore, OnboardingStore, DEFAULT_STEP};
use crate::wizard::{Notification, OnboardingWizard, Step, SystemClock, WizardTiming};

/// Output format for `onboard show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Open the onboarding store under the data directory
pub fn open_store(paths: &OnboardPaths) -> OnboardResult<OnboardingStore<JsonFileStore>> {
    paths.ensure_directories()?;
    Ok(OnboardingStore::new(JsonFileStore::new(paths.store_file())))
}

fn open_wizard(
    paths: &OnboardPaths,
    settings: &Settings,
) -> OnboardResult<OnboardingWizard<JsonFileStore, SystemClock>> {
    Ok(OnboardingWizard::restore(
        open_store(paths)?,
        SystemClock,
        WizardTiming::from(settings),
    ))
}

/// Run the interactive wizard, or show the dashboard if already onboarded
pub fn handle_start(paths: &OnboardPaths, settings: &Settings) -> OnboardResult<()> {
    if let Some(data) = open_store(paths)?.completed() {
        println!("Onboarding is already complete.");
        print_dashboard(data, settings)?;
        println!();
        println!("Run 'onboard restart' to start over.");
        return Ok(());
    }

    let mut wizard = open_wizard(paths, settings)?;

    println!();
    println!("===========================================");
    println!("  Welcome to OnboardFlow!");
    println!("===========================================");

    let stdin = io::stdin();
    let mut session = PromptSession::new(stdin.lock(), io::stdout());
    match session.run(&mut wizard)? {
        SessionEnd::Completed(data) => {
            println!();
            print_dashboard(data, settings)?;
        }
        SessionEnd::SavedAndExited => {
            println!("Run 'onboard start' to continue where you left off.");
        }
        SessionEnd::Quit => {
            println!(
                "Onboarding paused at step {} of {}.",
                wizard.current_step().number(),
                Step::ALL.len()
            );
        }
    }
    Ok(())
}

/// Print where the user is in onboarding
pub fn handle_status(paths: &OnboardPaths) -> OnboardResult<()> {
    let store = open_store(paths)?;

    if let Some(data) = store.completed() {
        let completed_at = data
            .completed_at
            .map(|at| at.to_rfc3339())
            .unwrap_or_default();
        println!("Onboarding: complete ({})", completed_at);
    } else if store.load().is_empty() && store.load_progress() == DEFAULT_STEP {
        println!("Onboarding: not started");
    } else {
        let step = Step::clamped(store.load_progress());
        println!(
            "Onboarding: in progress, step {} of {} ({})",
            step.number(),
            Step::ALL.len(),
            step
        );
    }
    println!("Data file: {}", paths.store_file().display());
    Ok(())
}

/// Dump the stored onboarding record
pub fn handle_show(paths: &OnboardPaths, format: OutputFormat) -> OnboardResult<()> {
    let record = open_store(paths)?.load();
    if record.is_empty() {
        println!("No onboarding data saved.");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &record)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut out, &record)
                .map_err(|e| OnboardError::Storage(format!("Failed to write YAML: {}", e)))?;
        }
    }
    Ok(())
}

/// Render the dashboard for a completed record
pub fn handle_dashboard(paths: &OnboardPaths, settings: &Settings) -> OnboardResult<()> {
    match open_store(paths)?.completed() {
        Some(data) => print_dashboard(data, settings),
        None => {
            println!("Onboarding is not complete yet. Run 'onboard start' first.");
            Ok(())
        }
    }
}

/// Clear saved answers and progress
pub fn handle_restart(paths: &OnboardPaths, settings: &Settings) -> OnboardResult<()> {
    let mut wizard = open_wizard(paths, settings)?;
    let mut notes: Vec<Notification> = Vec::new();
    wizard.restart(&mut notes);
    for note in notes {
        println!("{}", note);
    }
    Ok(())
}

/// Show, set or toggle the stored theme
pub fn handle_theme(
    paths: &OnboardPaths,
    theme: Option<String>,
    toggle: bool,
) -> OnboardResult<()> {
    let mut store = open_store(paths)?;
    let theme = match theme {
        Some(raw) => Theme::parse(&raw).ok_or_else(|| {
            OnboardError::Validation(format!(
                "Invalid theme: '{}'. Valid themes: light, dark",
                raw
            ))
        })?,
        None if toggle => store.load_theme().unwrap_or_default().toggled(),
        None => {
            println!("{}", store.load_theme().unwrap_or_default());
            return Ok(());
        }
    };

    if !store.save_theme(theme) {
        return Err(OnboardError::Storage("Failed to save theme".into()));
    }
    println!("Theme set to {}", theme);
    Ok(())
}

/// Print paths and settings
pub fn handle_config(paths: &OnboardPaths, settings: &Settings) -> OnboardResult<()> {
    println!("OnboardFlow Configuration");
    println!("=========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Data file:      {}", paths.store_file().display());
    println!();
    println!("Settings:");
    println!("  Submit delay:  {} ms", settings.submit_delay_ms);
    println!("  Hand-off delay: {} ms", settings.handoff_delay_ms);
    println!("  Stats delay:   {} ms", settings.stats_delay_ms);
    println!("  Log level:     {}", settings.log_level);
    Ok(())
}

fn print_dashboard(data: OnboardingData, settings: &Settings) -> OnboardResult<()> {
    println!("Loading your dashboard...");
    let dashboard = Dashboard::load(data, &SystemClock, settings.stats_delay())?;
    println!();
    print!("{}", format_dashboard(&dashboard));
    Ok(())
}
