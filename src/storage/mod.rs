//! Storage layer for OnboardFlow
//!
//! A small key-value capability ([`KeyValueStore`]) with in-memory and JSON
//! file backends, and the namespaced onboarding store built on top of it.

pub mod file_io;
pub mod file_store;
pub mod kv;
pub mod onboarding;

pub use file_io::{read_json, write_json_atomic};
pub use file_store::JsonFileStore;
pub use kv::{KeyValueStore, MemoryStore, StorageKey};
pub use onboarding::{OnboardingStore, DEFAULT_STEP};
