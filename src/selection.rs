//! Range selection state machine.
//!
//! The popup is either closed or open on one endpoint. Clicking a day while open
//! moves that endpoint and hands the popup over to the other one, so a user can
//! click start, end, start, ... without reopening. A click that would put the
//! start after the end is rejected and leaves the state as it was.
//!
//! Transitions consume the state and return the next one; the engine swaps the
//! whole value in, so the start <= end invariant is only ever checked in
//! [`DateRange`].

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::range::{DateRange, RangeError};

/// One of the two selection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    #[display(fmt = "from")]
    From,
    #[display(fmt = "to")]
    To,
}

impl Endpoint {
    /// The endpoint picked after this one
    pub const fn other(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::From,
        }
    }
}

/// A selection step that was not applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// No endpoint is open.
    #[error("Cannot select {date}: no endpoint is open")]
    Closed { date: NaiveDate },

    /// Start would move past the end.
    #[error("Cannot start range on {date}: it is after the end ({end})")]
    AfterEnd { date: NaiveDate, end: NaiveDate },

    /// End would move before the start.
    #[error("Cannot end range on {date}: it is before the start ({start})")]
    BeforeStart { date: NaiveDate, start: NaiveDate },

    /// Clicked cell index is not in the rendered grid.
    #[error("No day cell at index {index} (grid has {len} cells)")]
    NoSuchCell { index: usize, len: usize },

    /// Clicked cell is padding from the previous month.
    #[error("Day cell {date} is outside the displayed month")]
    FillerCell { date: NaiveDate },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionState {
    displayed_month: NaiveDate,
    range:           DateRange,
    open:            Option<Endpoint>,
}

impl SelectionState {
    /// A closed selection showing `displayed_month`
    pub const fn new(displayed_month: NaiveDate, range: DateRange) -> Self {
        Self {
            displayed_month,
            range,
            open: None,
        }
    }

    /// Anchor date; only its month matters
    pub const fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Endpoint the next day click will set, `None` while closed
    pub const fn open_endpoint(&self) -> Option<Endpoint> {
        self.open
    }

    pub const fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Opens `which`, switches to it from the other endpoint, or closes when it is
    /// already open.
    #[must_use]
    pub fn toggled(self, which: Endpoint) -> Self {
        let open = match self.open {
            Some(current) if current == which => None,
            _ => Some(which),
        };
        Self { open, ..self }
    }

    #[must_use]
    pub const fn closed(self) -> Self {
        Self { open: None, ..self }
    }

    /// Same selection with a different range, closed.
    #[must_use]
    pub const fn with_range(self, range: DateRange) -> Self {
        Self {
            range,
            open: None,
            ..self
        }
    }

    /// Applies a day click.
    ///
    /// # Errors
    /// Returns a `TransitionError` describing why the click was ignored: nothing is
    /// open, or the date would invert the range.
    pub fn selected(self, date: NaiveDate) -> Result<Self, TransitionError> {
        let Some(endpoint) = self.open else {
            return Err(TransitionError::Closed { date });
        };

        let range = match endpoint {
            Endpoint::From => self.range.with_start(date),
            Endpoint::To => self.range.with_end(date),
        }
        .map_err(|err| match (endpoint, err) {
            (Endpoint::From, RangeError::InvalidRange { end, .. }) => TransitionError::AfterEnd { date, end },
            (_, _) => TransitionError::BeforeStart {
                date,
                start: self.range.start(),
            },
        })?;

        Ok(Self {
            range,
            open: Some(endpoint.other()),
            ..self
        })
    }

    /// Shifts the displayed month by `delta` months, backwards when negative.
    /// Returns `None` past the representable dates.
    #[must_use]
    pub fn navigated(self, delta: i32) -> Option<Self> {
        let months = Months::new(delta.unsigned_abs());
        let displayed_month = if delta < 0 {
            self.displayed_month.checked_sub_months(months)?
        } else {
            self.displayed_month.checked_add_months(months)?
        };
        Some(Self {
            displayed_month,
            ..self
        })
    }
}
