use chrono::{Days, Months, NaiveDate};

use crate::range::DateRange;
use crate::types::{
    Preset, WeekdayIndex, end_of_month, end_of_week, end_of_year, start_of_month, start_of_week,
    start_of_year,
};

/// Outcome of resolving a preset: the range and the month to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPreset {
    pub displayed_month: NaiveDate,
    pub range:           DateRange,
}

/// Resolves a preset against `today`.
///
/// "This week/month/year" end on today and keep today's month on screen. Every
/// other preset covers a closed period and shows the month its range starts in.
///
/// Returns `None` only when the period falls outside the representable dates.
pub fn resolve_preset(preset: Preset, today: NaiveDate, week_start: WeekdayIndex) -> Option<ResolvedPreset> {
    let (start, end) = match preset {
        Preset::Today => (today, today),
        Preset::Yesterday => {
            let yesterday = today.pred_opt()?;
            (yesterday, yesterday)
        }
        Preset::ThisWeek => (start_of_week(today, week_start)?, today),
        Preset::LastWeek => {
            let last_week = today.checked_sub_days(Days::new(7))?;
            (start_of_week(last_week, week_start)?, end_of_week(last_week, week_start)?)
        }
        Preset::ThisMonth => (start_of_month(today)?, today),
        Preset::LastMonth => {
            let last_month = start_of_month(today)?.checked_sub_months(Months::new(1))?;
            (last_month, end_of_month(last_month)?)
        }
        Preset::ThisYear => (start_of_year(today)?, today),
        Preset::LastYear => {
            let last_year = start_of_year(today)?.checked_sub_months(Months::new(12))?;
            (last_year, end_of_year(last_year)?)
        }
    };

    let range = DateRange::new(start, end).ok()?;
    let displayed_month = if preset.is_to_date() { today } else { start };

    Some(ResolvedPreset {
        displayed_month,
        range,
    })
}
