//! User settings for OnboardFlow
//!
//! Holds the simulated latencies of the wizard and dashboard, and the default
//! log filter used by the binary.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::OnboardPaths;
use crate::error::OnboardError;

/// User settings for OnboardFlow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Simulated latency of the final submission
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Pause between a successful submission and handing off to the dashboard
    #[serde(default = "default_handoff_delay_ms")]
    pub handoff_delay_ms: u64,

    /// Simulated latency of loading dashboard stats
    #[serde(default = "default_stats_delay_ms")]
    pub stats_delay_ms: u64,

    /// Default log filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_submit_delay_ms() -> u64 {
    2000
}

fn default_handoff_delay_ms() -> u64 {
    1000
}

fn default_stats_delay_ms() -> u64 {
    1500
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            submit_delay_ms: default_submit_delay_ms(),
            handoff_delay_ms: default_handoff_delay_ms(),
            stats_delay_ms: default_stats_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn handoff_delay(&self) -> Duration {
        Duration::from_millis(self.handoff_delay_ms)
    }

    pub fn stats_delay(&self) -> Duration {
        Duration::from_millis(self.stats_delay_ms)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OnboardPaths) -> Result<Self, OnboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| OnboardError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                OnboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OnboardPaths) -> Result<(), OnboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| OnboardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| OnboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
