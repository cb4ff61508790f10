//! Time source for the wizard
//!
//! Timestamps and simulated latency both go through [`Clock`], so a test can
//! run a whole submission without waiting and can make the wait fail.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::{OnboardError, OnboardResult};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Block for `duration`; an error aborts whatever was waiting
    fn sleep(&self, duration: Duration) -> OnboardResult<()>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) -> OnboardResult<()> {
        (**self).sleep(duration)
    }
}

/// Wall clock with real sleeps
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) -> OnboardResult<()> {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
        Ok(())
    }
}

/// Clock that never waits
///
/// Each sleep advances `now` by the requested duration and is recorded.
/// [`ManualClock::fail_next_sleep`] makes the next sleep return an error.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
    sleeps: RefCell<Vec<Duration>>,
    fail_next: Cell<bool>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
            sleeps: RefCell::new(Vec::new()),
            fail_next: Cell::new(false),
        }
    }

    pub fn fail_next_sleep(&self) {
        self.fail_next.set(true);
    }

    /// Durations slept so far, in order
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) -> OnboardResult<()> {
        if self.fail_next.replace(false) {
            return Err(OnboardError::Submission("simulated network failure".into()));
        }
        self.sleeps.borrow_mut().push(duration);
        let step = chrono::Duration::from_std(duration)
            .map_err(|e| OnboardError::Config(format!("Delay out of range: {}", e)))?;
        self.now.set(self.now.get() + step);
        Ok(())
    }
}
