//! Onboarding wizard
//!
//! Three steps (personal info, business info, preferences) driven by
//! [`OnboardingWizard`], with progress persisted through the onboarding store.

pub mod clock;
pub mod machine;
pub mod notify;
pub mod step;

pub use clock::{Clock, ManualClock, SystemClock};
pub use machine::{OnboardingWizard, PendingSubmission, SubmitOutcome, WizardState, WizardTiming};
pub use notify::{Notification, NotificationKind, Notifier};
pub use step::{Field, FieldKind, OnboardingDraft, Step, StepForm};
