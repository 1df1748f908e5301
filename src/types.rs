use crate::ParseError;
use crate::consts::{DAYS_IN_WEEK, JANUARY, MIN_DAY, MONTHS_IN_YEAR, SATURDAY, SUNDAY};
use crate::prelude::*;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A weekday index guaranteed to be in the range `SUNDAY..=SATURDAY` (0..=6).
/// Used both for cell weekdays and for the configured first grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekdayIndex(u8);

impl WeekdayIndex {
    pub const SUNDAY: Self = Self(SUNDAY);
    pub const MONDAY: Self = Self(1);

    /// Creates a new `WeekdayIndex`, validating that it's <= `SATURDAY`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidWeekday` if the value is > `SATURDAY`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value > SATURDAY {
            return Err(ParseError::InvalidWeekday(value));
        }
        Ok(Self(value))
    }

    /// Weekday of a calendar date
    pub fn of(date: NaiveDate) -> Self {
        Self(match date.weekday() {
            Weekday::Sun => 0,
            Weekday::Mon => 1,
            Weekday::Tue => 2,
            Weekday::Wed => 3,
            Weekday::Thu => 4,
            Weekday::Fri => 5,
            Weekday::Sat => 6,
        })
    }

    /// Returns the index as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Columns between `start` and this weekday, counting forward.
    /// This is the column this weekday occupies in a grid whose first column is `start`.
    pub const fn days_since(self, start: Self) -> u8 {
        (self.0 + DAYS_IN_WEEK - start.0) % DAYS_IN_WEEK
    }
}

impl Default for WeekdayIndex {
    fn default() -> Self {
        Self::SUNDAY
    }
}

impl TryFrom<u8> for WeekdayIndex {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekdayIndex> for u8 {
    fn from(weekday: WeekdayIndex) -> Self {
        weekday.0
    }
}

/// A named shortcut that sets both range endpoints relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Preset {
    #[display(fmt = "td")]
    #[serde(rename = "td")]
    Today,
    #[display(fmt = "ld")]
    #[serde(rename = "ld")]
    Yesterday,
    #[display(fmt = "tw")]
    #[serde(rename = "tw")]
    ThisWeek,
    #[display(fmt = "lw")]
    #[serde(rename = "lw")]
    LastWeek,
    #[default]
    #[display(fmt = "tm")]
    #[serde(rename = "tm")]
    ThisMonth,
    #[display(fmt = "lm")]
    #[serde(rename = "lm")]
    LastMonth,
    #[display(fmt = "ty")]
    #[serde(rename = "ty")]
    ThisYear,
    #[display(fmt = "ly")]
    #[serde(rename = "ly")]
    LastYear,
}

impl Preset {
    /// Every preset, in the order a preset menu lists them
    pub const ALL: [Self; 8] = [
        Self::Today,
        Self::Yesterday,
        Self::ThisWeek,
        Self::LastWeek,
        Self::ThisMonth,
        Self::LastMonth,
        Self::ThisYear,
        Self::LastYear,
    ];

    /// "This week/month/year" presets run up to today rather than the period end.
    pub const fn is_to_date(self) -> bool {
        matches!(self, Self::ThisWeek | Self::ThisMonth | Self::ThisYear)
    }
}

impl FromStr for Preset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.to_string() == s.trim())
            .ok_or_else(|| ParseError::UnknownPreset(s.to_owned()))
    }
}

/// Color theme tag. Carried for the rendering layer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    #[display(fmt = "default")]
    Default,
    #[display(fmt = "green")]
    Green,
    #[display(fmt = "teal")]
    Teal,
    #[display(fmt = "cyan")]
    Cyan,
    #[display(fmt = "grape")]
    Grape,
    #[display(fmt = "red")]
    Red,
    #[display(fmt = "gray")]
    Gray,
    #[display(fmt = "orange")]
    Orange,
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "default" => Ok(Self::Default),
            "green" => Ok(Self::Green),
            "teal" => Ok(Self::Teal),
            "cyan" => Ok(Self::Cyan),
            "grape" => Ok(Self::Grape),
            "red" => Ok(Self::Red),
            "gray" => Ok(Self::Gray),
            "orange" => Ok(Self::Orange),
            other => Err(ParseError::UnknownTheme(other.to_owned())),
        }
    }
}

// Helper functions

pub fn start_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(MIN_DAY)
}

/// Day before the first of the next month. `None` at the end of chrono's range.
pub fn end_of_month(date: NaiveDate) -> Option<NaiveDate> {
    start_of_month(date)?.checked_add_months(Months::new(1))?.pred_opt()
}

pub fn is_last_of_month(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.day() == MIN_DAY)
}

pub fn start_of_year(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), JANUARY, MIN_DAY)
}

pub fn end_of_year(date: NaiveDate) -> Option<NaiveDate> {
    start_of_year(date)?.checked_add_months(Months::new(MONTHS_IN_YEAR))?.pred_opt()
}

/// First day of the week containing `date`, for weeks beginning on `start`.
pub fn start_of_week(date: NaiveDate, start: WeekdayIndex) -> Option<NaiveDate> {
    let offset = WeekdayIndex::of(date).days_since(start);
    date.checked_sub_days(Days::new(u64::from(offset)))
}

/// Last day of the week containing `date`, for weeks beginning on `start`.
pub fn end_of_week(date: NaiveDate, start: WeekdayIndex) -> Option<NaiveDate> {
    start_of_week(date, start)?.checked_add_days(Days::new(u64::from(DAYS_IN_WEEK - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_weekday_new_valid() {
        assert!(WeekdayIndex::new(0).is_ok());
        assert!(WeekdayIndex::new(3).is_ok());
        assert!(WeekdayIndex::new(6).is_ok());
    }

    #[test]
    fn test_weekday_new_invalid() {
        let result = WeekdayIndex::new(7);
        assert!(matches!(result, Err(ParseError::InvalidWeekday(7))));
    }

    #[test]
    fn test_weekday_of_date() {
        // 2024-03-15 was a Friday
        assert_eq!(WeekdayIndex::of(date(2024, 3, 15)).get(), 5);
        // 2024-03-17 was a Sunday
        assert_eq!(WeekdayIndex::of(date(2024, 3, 17)).get(), 0);
    }

    #[test]
    fn test_days_since() {
        let wednesday = WeekdayIndex::new(3).unwrap();
        assert_eq!(wednesday.days_since(WeekdayIndex::SUNDAY), 3);
        assert_eq!(wednesday.days_since(WeekdayIndex::MONDAY), 2);
        assert_eq!(WeekdayIndex::SUNDAY.days_since(WeekdayIndex::MONDAY), 6);
        assert_eq!(wednesday.days_since(wednesday), 0);
    }

    #[test]
    fn test_weekday_serde_validation() {
        let parsed: WeekdayIndex = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, WeekdayIndex::MONDAY);

        let result: Result<WeekdayIndex, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }

    #[test]
    fn test_preset_tags() {
        for preset in Preset::ALL {
            let tag = preset.to_string();
            assert_eq!(tag.parse::<Preset>().unwrap(), preset);

            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{tag}\""));
        }
        assert!(matches!("xx".parse::<Preset>(), Err(ParseError::UnknownPreset(_))));
    }

    #[test]
    fn test_preset_is_to_date() {
        let to_date: Vec<Preset> = Preset::ALL.into_iter().filter(|p| p.is_to_date()).collect();
        assert_eq!(to_date, vec![Preset::ThisWeek, Preset::ThisMonth, Preset::ThisYear]);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("grape".parse::<Theme>().unwrap(), Theme::Grape);
        assert_eq!(Theme::default().to_string(), "default");
        assert!("purple".parse::<Theme>().is_err());
    }

    #[test]
    fn test_weekday_of_every_day() {
        // 2024-03-17 was a Sunday
        for offset in 0..7u8 {
            let day = date(2024, 3, 17) + Days::new(u64::from(offset));
            assert_eq!(WeekdayIndex::of(day).get(), offset);
        }
    }

    #[test]
    fn test_end_of_month_lengths() {
        struct TestCase {
            date:     NaiveDate,
            expected: NaiveDate,
        }

        let cases = [
            TestCase {
                date:     date(2024, 2, 10),
                expected: date(2024, 2, 29),
            },
            TestCase {
                date:     date(2023, 2, 10),
                expected: date(2023, 2, 28),
            },
            TestCase {
                date:     date(1900, 2, 1),
                expected: date(1900, 2, 28),
            },
            TestCase {
                date:     date(2000, 2, 1),
                expected: date(2000, 2, 29),
            },
            TestCase {
                date:     date(2024, 4, 30),
                expected: date(2024, 4, 30),
            },
            TestCase {
                date:     date(2024, 12, 1),
                expected: date(2024, 12, 31),
            },
        ];

        for case in &cases {
            assert_eq!(end_of_month(case.date), Some(case.expected), "{}", case.date);
            assert!(is_last_of_month(case.expected), "{}", case.expected);
        }
        assert_eq!(end_of_month(NaiveDate::MAX), None);
        assert!(is_last_of_month(NaiveDate::MAX));
    }

    #[test]
    fn test_period_boundaries() {
        let d = date(2024, 2, 14);
        assert_eq!(start_of_month(d), Some(date(2024, 2, 1)));
        assert_eq!(end_of_month(d), Some(date(2024, 2, 29)));
        assert_eq!(start_of_year(d), Some(date(2024, 1, 1)));
        assert_eq!(end_of_year(d), Some(date(2024, 12, 31)));
        assert!(is_last_of_month(date(2024, 2, 29)));
        assert!(!is_last_of_month(date(2023, 2, 27)));
    }

    #[test]
    fn test_week_boundaries() {
        struct TestCase {
            start:       u8,
            expected:    (NaiveDate, NaiveDate),
            description: &'static str,
        }

        // 2024-03-15 is a Friday
        let friday = date(2024, 3, 15);
        let cases = [
            TestCase {
                start:       0,
                expected:    (date(2024, 3, 10), date(2024, 3, 16)),
                description: "Sunday-first week",
            },
            TestCase {
                start:       1,
                expected:    (date(2024, 3, 11), date(2024, 3, 17)),
                description: "Monday-first week",
            },
            TestCase {
                start:       5,
                expected:    (friday, date(2024, 3, 21)),
                description: "week starting on the same weekday",
            },
            TestCase {
                start:       6,
                expected:    (date(2024, 3, 9), friday),
                description: "Saturday-first week",
            },
        ];

        for case in &cases {
            let start = WeekdayIndex::new(case.start).unwrap();
            let actual = (
                start_of_week(friday, start).unwrap(),
                end_of_week(friday, start).unwrap(),
            );
            assert_eq!(actual, case.expected, "{}", case.description);
        }
    }
}
