//! Key-value storage capability
//!
//! The onboarding store only needs `get`, `set` and `remove` over string
//! values, so that is all a backend has to provide.

use std::collections::HashMap;

use crate::error::OnboardResult;

/// Fixed logical keys used by OnboardFlow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// JSON-serialized onboarding record (possibly partial)
    OnboardingData,
    /// Current step index as a decimal string
    OnboardingProgress,
    /// Selected color theme
    UserTheme,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnboardingData => "onboarding_data",
            Self::OnboardingProgress => "onboarding_progress",
            Self::UserTheme => "user_theme",
        }
    }
}

/// A string key-value storage area
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> OnboardResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> OnboardResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> OnboardResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> OnboardResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> OnboardResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> OnboardResult<()> {
        (**self).remove(key)
    }
}

/// Process-local storage area
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used to seed a store with an existing value
    pub fn with_entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> OnboardResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> OnboardResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> OnboardResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
