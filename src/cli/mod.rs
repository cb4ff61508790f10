//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the wizard and store.

pub mod interactive;
pub mod onboarding;

pub use interactive::{PromptSession, SessionEnd};
pub use onboarding::{
    handle_config, handle_dashboard, handle_restart, handle_show, handle_start, handle_status,
    handle_theme, open_store, OutputFormat,
};
