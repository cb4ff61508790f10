//! Custom error types for OnboardFlow
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::wizard::Step;

/// The main error type for OnboardFlow operations
#[derive(Error, Debug)]
pub enum OnboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A field value could not be accepted
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A wizard transition was attempted from a state that does not allow it
    #[error("Cannot {action} from {step}: {reason}")]
    InvalidTransition {
        action: &'static str,
        step: Step,
        reason: String,
    },

    /// The completion step of a submission failed
    #[error("Submission failed: {0}")]
    Submission(String),
}

impl OnboardError {
    /// Create an invalid-transition error
    pub fn transition(action: &'static str, step: Step, reason: impl Into<String>) -> Self {
        Self::InvalidTransition {
            action,
            step,
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error was raised by the wizard refusing a transition
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

impl From<std::io::Error> for OnboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OnboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for OnboardFlow operations
pub type OnboardResult<T> = Result<T, OnboardError>;
