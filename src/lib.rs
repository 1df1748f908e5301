//! Calendar grid and range-selection engine for date-range picker widgets.
//!
//! The engine owns everything a picker needs besides drawing: the selected range,
//! which endpoint the next click sets, the month grid to display and the bound
//! string value shared with a host form.
//!
//! ```
//! use chrono::NaiveDate;
//! use date_range_picker::{CalendarRangeEngine, Endpoint, FixedClock, PickerOptions, Preset};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let options = PickerOptions { date_separator: '_', ..PickerOptions::default() };
//! let mut picker = CalendarRangeEngine::with_clock(options, FixedClock(today));
//!
//! picker.apply_preset(Preset::LastMonth);
//! assert_eq!(picker.serialize(), "01/02/2024_29/02/2024");
//!
//! picker.toggle_endpoint(Endpoint::To);
//! picker.select_date(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()).unwrap();
//! assert_eq!(picker.serialize(), "01/02/2024_10/02/2024");
//! ```

mod binding;
mod clock;
mod consts;
mod engine;
mod grid;
mod options;
mod pattern;
mod prelude;
mod preset;
mod range;
mod selection;
mod types;

#[cfg(test)]
mod test_utils;

pub use binding::{ChangeCallback, TouchedCallback, ValueAccessor};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use engine::{CalendarRangeEngine, ClickTarget};
pub use grid::{DayCell, leading_filler_count, render_month};
pub use options::{PickerOptions, PresetNames};
pub use pattern::DatePattern;
pub use preset::{ResolvedPreset, resolve_preset};
pub use range::{DateRange, RangeError, ValueFormat};
pub use selection::{Endpoint, SelectionState, TransitionError};
pub use types::{Preset, Theme, WeekdayIndex};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Expected one '{separator}' between two dates, found {found}")]
    SeparatorCount { separator: char, found: usize },
    #[display(fmt = "Invalid date {input:?} for pattern {pattern}: {reason}")]
    InvalidDate {
        input:   String,
        pattern: String,
        reason:  String,
    },
    #[display(fmt = "Unsupported token {token:?} in date pattern {pattern:?}")]
    UnsupportedToken { token: String, pattern: String },
    #[display(fmt = "Invalid weekday: {} (must be {}-{})", "_0", SUNDAY, SATURDAY)]
    InvalidWeekday(u8),
    #[display(fmt = "Unknown preset: {_0}")]
    UnknownPreset(String),
    #[display(fmt = "Unknown theme: {_0}")]
    UnknownTheme(String),
}

impl std::error::Error for ParseError {}
