use chrono::NaiveDate;

use crate::{CalendarRangeEngine, FixedClock, PickerOptions};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
}

/// Engine pinned to `today` with the given separator and first weekday
pub fn engine_on(today: NaiveDate, separator: char, start_of_week: u8) -> CalendarRangeEngine<FixedClock> {
    let options = PickerOptions {
        date_separator: separator,
        start_of_week: start_of_week.try_into().expect("test weekday must be valid"),
        ..PickerOptions::default()
    };
    CalendarRangeEngine::with_clock(options, FixedClock(today))
}

/// Routes `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
