use chrono::NaiveDate;

use crate::{ParseError, pattern::DatePattern, prelude::*};

/// An inclusive range between two calendar dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Checks if the range contains a given date, both endpoints included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Moves the start, keeping the end.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `start` is after the current end.
    pub fn with_start(self, start: NaiveDate) -> Result<Self, RangeError> {
        Self::new(start, self.end)
    }

    /// Moves the end, keeping the start.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `end` is before the current start.
    pub fn with_end(self, end: NaiveDate) -> Result<Self, RangeError> {
        Self::new(self.start, end)
    }
}

/// How a range is written to and read from the bound string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFormat {
    input:     DatePattern,
    output:    DatePattern,
    separator: char,
}

impl ValueFormat {
    pub const fn new(input: DatePattern, output: DatePattern, separator: char) -> Self {
        Self {
            input,
            output,
            separator,
        }
    }

    /// Writes both endpoints with the output pattern, joined by the separator.
    pub fn format(&self, range: &DateRange) -> String {
        format!(
            "{}{}{}",
            self.output.format(range.start),
            self.separator,
            self.output.format(range.end)
        )
    }

    /// Reads a range written as `<start><separator><end>`.
    ///
    /// The separator may also occur inside each date (`DD/MM/YYYY` joined by `/`).
    /// Both dates then carry the same number of occurrences, so the split happens at
    /// the middle one and an even total count can never be split into two dates.
    ///
    /// Each part is read with the input pattern, falling back to the output pattern
    /// so that values this crate wrote itself always read back.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` for a malformed value and
    /// `RangeError::InvalidRange` when the start date is after the end date.
    pub fn parse(&self, value: &str) -> Result<DateRange, RangeError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let positions: Vec<usize> = trimmed.match_indices(self.separator).map(|(i, _)| i).collect();
        if positions.len().is_multiple_of(2) {
            return Err(ParseError::SeparatorCount {
                separator: self.separator,
                found:     positions.len(),
            }
            .into());
        }

        let pos = positions[positions.len() / 2];
        let start = self.parse_date(&trimmed[..pos])?;
        let end = self.parse_date(&trimmed[pos + self.separator.len_utf8()..])?;

        DateRange::new(start, end)
    }

    fn parse_date(&self, part: &str) -> Result<NaiveDate, ParseError> {
        self.input.parse(part).or_else(|err| {
            if self.output == self.input {
                return Err(err);
            }
            // report the input pattern's failure, it is the configured one
            self.output.parse(part).map_err(|_| err)
        })
    }
}
