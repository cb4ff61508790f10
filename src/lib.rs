//! OnboardFlow - Terminal onboarding wizard
//!
//! This library provides the core of a three-step onboarding flow: field
//! validation, resumable progress persisted through a pluggable key-value
//! store, the wizard state machine, and the mock dashboard shown once
//! onboarding is complete.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Onboarding record and dashboard data models
//! - `validation`: Per-step field validators
//! - `storage`: Key-value backends and the onboarding store
//! - `wizard`: Step definitions and the wizard state machine
//! - `dashboard`: Stats projection and dashboard view model
//! - `display`: Plain-text rendering
//! - `cli`: Command handlers and the interactive prompt session
//!
//! # Example
//!
//! ```rust
//! use onboardflow::storage::{MemoryStore, OnboardingStore};
//! use onboardflow::wizard::{Field, ManualClock, OnboardingWizard, Step, WizardTiming};
//!
//! let clock = ManualClock::default();
//! let store = OnboardingStore::new(MemoryStore::new());
//! let mut wizard = OnboardingWizard::restore(store, &clock, WizardTiming::default());
//!
//! wizard.set_field(Field::Name, "Jane Doe").unwrap();
//! wizard.set_field(Field::Email, "jane@co.com").unwrap();
//! assert_eq!(wizard.next().unwrap(), Step::BusinessInfo);
//! ```

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;
pub mod validation;
pub mod wizard;

pub use error::{OnboardError, OnboardResult};
