//! Calendar grid generation.
//!
//! A grid is one month of day cells, preceded by filler cells from the previous
//! month so the first row starts on the configured first weekday. The grid is a
//! pure function of the displayed month, the selected range, the first weekday and
//! today's date.

use chrono::{Datelike, Days, NaiveDate};

use crate::range::DateRange;
use crate::types::{WeekdayIndex, end_of_month, is_last_of_month, start_of_month};

/// One cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub date:                  NaiveDate,
    /// Day of month, 1-based
    pub day:                   u32,
    pub weekday:               WeekdayIndex,
    pub is_today:              bool,
    pub is_first_of_month:     bool,
    pub is_last_of_month:      bool,
    /// False for filler cells, which should not be interactive
    pub is_in_displayed_month: bool,
    pub is_range_start:        bool,
    pub is_range_end:          bool,
    /// Inclusive of both endpoints
    pub is_within_range:       bool,
}

impl DayCell {
    fn filler(date: NaiveDate) -> Self {
        Self {
            date,
            day: date.day(),
            weekday: WeekdayIndex::of(date),
            is_today: false,
            is_first_of_month: false,
            is_last_of_month: false,
            is_in_displayed_month: false,
            is_range_start: false,
            is_range_end: false,
            is_within_range: false,
        }
    }

    fn in_month(date: NaiveDate, range: &DateRange, today: NaiveDate) -> Self {
        Self {
            date,
            day: date.day(),
            weekday: WeekdayIndex::of(date),
            is_today: date == today,
            is_first_of_month: date.day() == 1,
            is_last_of_month: is_last_of_month(date),
            is_in_displayed_month: true,
            is_range_start: date == range.start(),
            is_range_end: date == range.end(),
            is_within_range: range.contains(date),
        }
    }
}

/// Number of filler cells before the 1st of the month
pub fn leading_filler_count(first_of_month: NaiveDate, start_of_week: WeekdayIndex) -> u8 {
    WeekdayIndex::of(first_of_month).days_since(start_of_week)
}

/// Builds the grid for the month containing `displayed_month`.
///
/// Returns an empty grid only when the month sits at the very edge of the
/// representable date range and the filler days cannot be computed.
pub fn render_month(
    displayed_month: NaiveDate,
    range: &DateRange,
    start_of_week: WeekdayIndex,
    today: NaiveDate,
) -> Vec<DayCell> {
    let (Some(first), Some(last)) = (start_of_month(displayed_month), end_of_month(displayed_month)) else {
        return Vec::new();
    };
    let fillers = leading_filler_count(first, start_of_week);

    let Some(grid_start) = first.checked_sub_days(Days::new(u64::from(fillers))) else {
        return Vec::new();
    };

    let leading = grid_start.iter_days().take(usize::from(fillers)).map(DayCell::filler);
    let month = first
        .iter_days()
        .take_while(|&date| date <= last)
        .map(|date| DayCell::in_month(date, range, today));

    leading.chain(month).collect()
}
