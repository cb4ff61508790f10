//! Onboarding store
//!
//! Namespaced persistence of onboarding answers, step progress and the theme
//! slot. Storage failures never reach the caller: reads fall back to empty
//! defaults and writes report success as a flag, logging what went wrong.

use log::{debug, error, warn};

use super::kv::{KeyValueStore, StorageKey};
use crate::error::OnboardResult;
use crate::models::{OnboardingData, PartialOnboardingData, Theme};

/// Step assumed when no usable progress is stored
pub const DEFAULT_STEP: i64 = 1;

/// Onboarding persistence over an injected key-value backend
#[derive(Debug, Clone)]
pub struct OnboardingStore<S> {
    backend: S,
}

impl<S: KeyValueStore> OnboardingStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    /// Merge `partial` over the stored record and persist the result
    ///
    /// Returns `false` if the record could not be written.
    pub fn save(&mut self, partial: PartialOnboardingData) -> bool {
        match self.try_save(partial) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save onboarding data: {}", e);
                false
            }
        }
    }

    fn try_save(&mut self, partial: PartialOnboardingData) -> OnboardResult<()> {
        let mut record = self.load();
        record.merge(partial);
        let json = serde_json::to_string(&record)?;
        self.backend
            .set(StorageKey::OnboardingData.as_str(), &json)
    }

    /// The stored record, or an empty one if absent or unreadable
    pub fn load(&self) -> PartialOnboardingData {
        match self.try_load() {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to load onboarding data: {}", e);
                PartialOnboardingData::default()
            }
        }
    }

    fn try_load(&self) -> OnboardResult<PartialOnboardingData> {
        match self.backend.get(StorageKey::OnboardingData.as_str())? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(PartialOnboardingData::default()),
        }
    }

    pub fn save_progress(&mut self, step: i64) {
        if let Err(e) = self
            .backend
            .set(StorageKey::OnboardingProgress.as_str(), &step.to_string())
        {
            error!("Failed to save onboarding progress: {}", e);
        }
    }

    /// The stored step index, or [`DEFAULT_STEP`] if absent or unparseable
    ///
    /// Parsing is strict: the whole (trimmed) value must be an integer, so
    /// `"2abc"` reads as the default rather than 2. The value is returned as
    /// stored; range checking is up to the caller.
    pub fn load_progress(&self) -> i64 {
        match self.backend.get(StorageKey::OnboardingProgress.as_str()) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                debug!("Ignoring unparseable onboarding progress {:?}", raw);
                DEFAULT_STEP
            }),
            Ok(None) => DEFAULT_STEP,
            Err(e) => {
                warn!("Failed to get onboarding progress: {}", e);
                DEFAULT_STEP
            }
        }
    }

    /// Remove the onboarding record and progress; the theme slot is kept
    pub fn clear(&mut self) {
        for key in [StorageKey::OnboardingData, StorageKey::OnboardingProgress] {
            if let Err(e) = self.backend.remove(key.as_str()) {
                error!("Failed to clear {}: {}", key.as_str(), e);
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed().is_some()
    }

    /// The stored record if onboarding was submitted
    pub fn completed(&self) -> Option<OnboardingData> {
        self.load().to_complete()
    }

    pub fn save_theme(&mut self, theme: Theme) -> bool {
        match self
            .backend
            .set(StorageKey::UserTheme.as_str(), theme.as_str())
        {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save theme: {}", e);
                false
            }
        }
    }

    /// The stored theme; unknown values read as unset
    pub fn load_theme(&self) -> Option<Theme> {
        match self.backend.get(StorageKey::UserTheme.as_str()) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(e) => {
                warn!("Failed to get theme: {}", e);
                None
            }
        }
    }
}
