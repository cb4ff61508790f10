//! Onboarding wizard state machine
//!
//! Holds the draft answers and the current step, gates forward moves on the
//! current step's validator, persists progress on every step change, and runs
//! the final submission through the injected clock.

use std::time::Duration;

use log::{debug, info, warn};

use super::clock::Clock;
use super::notify::{
    Notification, Notifier, RESTARTED_MESSAGE, SAVED_MESSAGE, SUBMITTED_MESSAGE,
    SUBMIT_FAILED_MESSAGE,
};
use super::step::{Field, OnboardingDraft, Step, StepForm};
use crate::config::Settings;
use crate::error::{OnboardError, OnboardResult};
use crate::models::{OnboardingData, PartialOnboardingData};
use crate::storage::{KeyValueStore, OnboardingStore};
use crate::validation::ValidationErrors;

/// Where the wizard is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// A step's form is shown and editable
    Editing(Step),
    /// The final record was saved and the completion wait is in flight
    Submitting,
    /// The record was handed to the completion handler
    Completed,
}

/// Simulated latencies of the submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardTiming {
    /// Wait before the submission is considered accepted
    pub submit_delay: Duration,
    /// Wait between acceptance and calling the completion handler
    pub handoff_delay: Duration,
}

impl From<&Settings> for WizardTiming {
    fn from(settings: &Settings) -> Self {
        Self {
            submit_delay: settings.submit_delay(),
            handoff_delay: settings.handoff_delay(),
        }
    }
}

/// A submission that has been saved but not yet completed
#[derive(Debug, Clone)]
#[must_use = "a pending submission does nothing until passed to finish_submit"]
pub struct PendingSubmission {
    generation: u64,
    data: OnboardingData,
}

/// How a submission ended, when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The completion handler received the record
    Completed,
    /// The wizard was restarted or moved on since the submission began
    Ignored,
}

/// The onboarding wizard
pub struct OnboardingWizard<S, C> {
    store: OnboardingStore<S>,
    clock: C,
    timing: WizardTiming,
    state: WizardState,
    step: Step,
    draft: OnboardingDraft,
    is_valid: bool,
    errors: ValidationErrors,
    submit_error: Option<String>,
    generation: u64,
}

impl<S: KeyValueStore, C: Clock> OnboardingWizard<S, C> {
    /// Start the wizard where the stored progress left off
    ///
    /// Out-of-range progress is clamped to the nearest step.
    pub fn restore(store: OnboardingStore<S>, clock: C, timing: WizardTiming) -> Self {
        let saved = store.load();
        let raw_step = store.load_progress();
        let step = Step::clamped(raw_step);
        if step.number() != raw_step {
            warn!(
                "Stored onboarding progress {} is out of range, resuming at step {}",
                raw_step,
                step.number()
            );
        }

        let mut wizard = Self {
            store,
            clock,
            timing,
            state: WizardState::Editing(step),
            step,
            draft: OnboardingDraft::from_saved(saved),
            is_valid: false,
            errors: ValidationErrors::new(),
            submit_error: None,
            generation: 0,
        };
        wizard.enter_step(step);
        wizard
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Step shown last; stays on the final step while submitting
    pub fn current_step(&self) -> Step {
        self.step
    }

    /// (current step number, total steps)
    pub fn progress(&self) -> (usize, usize) {
        (self.step.number() as usize, Step::ALL.len())
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Field errors of the current step
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Message of the last failed submission, cleared by the next attempt
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == WizardState::Submitting
    }

    pub fn draft(&self) -> &OnboardingDraft {
        &self.draft
    }

    pub fn form(&self) -> StepForm<'_> {
        self.draft.form(self.step)
    }

    pub fn store(&self) -> &OnboardingStore<S> {
        &self.store
    }

    pub fn into_store(self) -> OnboardingStore<S> {
        self.store
    }

    /// Identifies the current run; bumped by [`Self::restart`]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Change one field of the current step and re-validate it
    pub fn set_field(&mut self, field: Field, value: &str) -> OnboardResult<()> {
        let step = self.editing_step("edit")?;
        if field.step() != step {
            return Err(OnboardError::Validation(format!(
                "{} is not part of the {} step",
                field, step
            )));
        }
        self.draft.set(field, value)?;
        self.validate();
        Ok(())
    }

    /// Re-run the current step's validator
    pub fn validate(&mut self) -> bool {
        let form = self.draft.form(self.step);
        self.errors = form.validate();
        self.is_valid = form.is_valid();
        self.is_valid
    }

    /// Advance to the next step
    pub fn next(&mut self) -> OnboardResult<Step> {
        let step = self.editing_step("advance")?;
        if !self.is_valid {
            return Err(OnboardError::transition(
                "advance",
                step,
                self.invalid_reason(),
            ));
        }
        let next = step
            .next()
            .ok_or_else(|| OnboardError::transition("advance", step, "already on the last step"))?;
        self.enter_step(next);
        Ok(next)
    }

    /// Return to the previous step
    pub fn back(&mut self) -> OnboardResult<Step> {
        let step = self.editing_step("go back")?;
        let previous = step
            .previous()
            .ok_or_else(|| OnboardError::transition("go back", step, "already on the first step"))?;
        self.enter_step(previous);
        Ok(previous)
    }

    /// Persist the answers of this step and the ones before it
    ///
    /// Validity is not required and the step does not change. Returns whether
    /// the answers were written.
    pub fn save_and_exit<N: Notifier>(&mut self, notifier: &mut N) -> bool {
        let saved = self.store.save(self.draft.up_to(self.step));
        debug!("Saved onboarding draft up to step {}", self.step.number());
        notifier.notify(Notification::info(SAVED_MESSAGE));
        saved
    }

    /// Save the complete record and enter [`WizardState::Submitting`]
    pub fn begin_submit(&mut self) -> OnboardResult<PendingSubmission> {
        let step = self.editing_step("submit")?;
        if !step.is_last() {
            return Err(OnboardError::transition(
                "submit",
                step,
                "submission is only possible from the last step",
            ));
        }
        if !self.is_valid {
            return Err(OnboardError::transition("submit", step, self.invalid_reason()));
        }

        let data = self.draft.complete(self.clock.now());
        self.store.save(PartialOnboardingData::from(data.clone()));
        self.state = WizardState::Submitting;
        self.submit_error = None;
        info!("Submitting onboarding for {}", data.personal_info.email);

        Ok(PendingSubmission {
            generation: self.generation,
            data,
        })
    }

    /// Wait out the submission and hand the record to `on_complete`
    ///
    /// A submission from an earlier run, or one that is no longer in flight,
    /// is ignored. If the wait fails the wizard returns to the last step so
    /// the user can retry.
    pub fn finish_submit<N, F>(
        &mut self,
        pending: PendingSubmission,
        notifier: &mut N,
        on_complete: F,
    ) -> OnboardResult<SubmitOutcome>
    where
        N: Notifier,
        F: FnOnce(OnboardingData),
    {
        if pending.generation != self.generation || self.state != WizardState::Submitting {
            debug!(
                "Ignoring stale submission from run {} (current run {})",
                pending.generation, self.generation
            );
            return Ok(SubmitOutcome::Ignored);
        }

        if let Err(e) = self.clock.sleep(self.timing.submit_delay) {
            warn!("Onboarding submission failed: {}", e);
            self.state = WizardState::Editing(self.step);
            self.submit_error = Some(SUBMIT_FAILED_MESSAGE.to_string());
            notifier.notify(Notification::error(SUBMIT_FAILED_MESSAGE));
            return Err(OnboardError::Submission(e.to_string()));
        }

        notifier.notify(Notification::success(SUBMITTED_MESSAGE));
        self.state = WizardState::Completed;

        if let Err(e) = self.clock.sleep(self.timing.handoff_delay) {
            debug!("Hand-off wait cut short: {}", e);
        }
        on_complete(pending.data);
        Ok(SubmitOutcome::Completed)
    }

    /// [`Self::begin_submit`] followed by [`Self::finish_submit`]
    pub fn submit<N, F>(&mut self, notifier: &mut N, on_complete: F) -> OnboardResult<SubmitOutcome>
    where
        N: Notifier,
        F: FnOnce(OnboardingData),
    {
        let pending = self.begin_submit()?;
        self.finish_submit(pending, notifier, on_complete)
    }

    /// Forget all answers and start over from the first step
    pub fn restart<N: Notifier>(&mut self, notifier: &mut N) {
        self.store.clear();
        self.generation += 1;
        self.draft = OnboardingDraft::default();
        self.submit_error = None;
        self.enter_step(Step::FIRST);
        notifier.notify(Notification::info(RESTARTED_MESSAGE));
    }

    fn enter_step(&mut self, step: Step) {
        self.step = step;
        self.state = WizardState::Editing(step);
        self.store.save_progress(step.number());
        self.is_valid = false;
        self.validate();
    }

    fn editing_step(&self, action: &'static str) -> OnboardResult<Step> {
        match self.state {
            WizardState::Editing(step) => Ok(step),
            WizardState::Submitting => Err(OnboardError::transition(
                action,
                self.step,
                "a submission is in progress",
            )),
            WizardState::Completed => Err(OnboardError::transition(
                action,
                self.step,
                "onboarding is already complete",
            )),
        }
    }

    fn invalid_reason(&self) -> String {
        if self.errors.is_empty() {
            "step is not complete".to_string()
        } else {
            self.errors.to_string()
        }
    }
}
