//! Clock abstraction for resolving "today".
//!
//! Presets and the `is_today` flag both depend on the current day. The engine
//! reads it through this trait so tests can pin the date instead of depending on
//! the system clock.

use chrono::{Local, NaiveDate};

/// Source of the current calendar day
pub trait Clock {
    /// The current day, already truncated to the start of the day
    fn today(&self) -> NaiveDate;
}

/// Real clock reading the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
