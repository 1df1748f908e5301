//! Picker configuration.
//!
//! Options are supplied once when the engine is built. Every field has a default,
//! so hosts may deserialize a partial configuration. Date patterns are compiled
//! while deserializing, so an unsupported pattern is rejected up front:
//!
//! ```
//! use date_range_picker::{PickerOptions, Preset};
//!
//! let options: PickerOptions =
//!     serde_json::from_str(r#"{ "range": "tw", "dateSeparator": "_" }"#).unwrap();
//! assert_eq!(options.range, Preset::ThisWeek);
//! assert_eq!(options.output_format.to_string(), "DD/MM/YYYY");
//!
//! assert!(serde_json::from_str::<PickerOptions>(r#"{ "outputFormat": "Do MMM" }"#).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DATE_SEPARATOR, DEFAULT_DAY_NAMES};
use crate::pattern::DatePattern;
use crate::range::ValueFormat;
use crate::selection::Endpoint;
use crate::types::{Preset, Theme, WeekdayIndex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerOptions {
    pub theme:          Theme,
    /// Preset applied at initialization
    pub range:          Preset,
    /// Column headers in grid order, first column first
    pub day_names:      Vec<String>,
    pub preset_names:   PresetNames,
    /// Pattern used to read the bound value
    pub date_format:    DatePattern,
    /// Pattern used to write the bound value
    pub output_format:  DatePattern,
    pub start_of_week:  WeekdayIndex,
    pub date_separator: char,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            theme:          Theme::default(),
            range:          Preset::default(),
            day_names:      DEFAULT_DAY_NAMES.iter().map(|&name| name.to_owned()).collect(),
            preset_names:   PresetNames::default(),
            date_format:    DatePattern::default_input(),
            output_format:  DatePattern::default_output(),
            start_of_week:  WeekdayIndex::default(),
            date_separator: DEFAULT_DATE_SEPARATOR,
        }
    }
}

impl PickerOptions {
    /// The patterns and separator that shape the bound value
    pub fn value_format(&self) -> ValueFormat {
        ValueFormat::new(
            self.date_format.clone(),
            self.output_format.clone(),
            self.date_separator,
        )
    }
}

/// Display labels for the preset menu and the two endpoint buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresetNames {
    pub this_day:   String,
    pub last_day:   String,
    pub this_week:  String,
    pub last_week:  String,
    pub this_month: String,
    pub last_month: String,
    pub this_year:  String,
    pub last_year:  String,
    pub from:       String,
    pub to:         String,
}

impl Default for PresetNames {
    fn default() -> Self {
        Self {
            this_day:   "Today".to_owned(),
            last_day:   "Yesterday".to_owned(),
            this_week:  "This Week".to_owned(),
            last_week:  "Last Week".to_owned(),
            this_month: "This Month".to_owned(),
            last_month: "Last Month".to_owned(),
            this_year:  "This Year".to_owned(),
            last_year:  "Last Year".to_owned(),
            from:       "Start".to_owned(),
            to:         "End".to_owned(),
        }
    }
}

impl PresetNames {
    pub fn preset(&self, preset: Preset) -> &str {
        match preset {
            Preset::Today => &self.this_day,
            Preset::Yesterday => &self.last_day,
            Preset::ThisWeek => &self.this_week,
            Preset::LastWeek => &self.last_week,
            Preset::ThisMonth => &self.this_month,
            Preset::LastMonth => &self.last_month,
            Preset::ThisYear => &self.this_year,
            Preset::LastYear => &self.last_year,
        }
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::From => &self.from,
            Endpoint::To => &self.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PickerOptions::default();
        assert_eq!(options.theme, Theme::Default);
        assert_eq!(options.range, Preset::ThisMonth);
        assert_eq!(options.day_names, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(options.date_format.to_string(), "yMd");
        assert_eq!(options.output_format.to_string(), "DD/MM/YYYY");
        assert_eq!(options.start_of_week, WeekdayIndex::SUNDAY);
        assert_eq!(options.date_separator, '-');
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "theme": "teal",
            "range": "tw",
            "dayNames": ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            "presetNames": {
                "thisDay": "Heute",
                "lastDay": "Gestern",
                "thisWeek": "Diese Woche",
                "lastWeek": "Letzte Woche",
                "thisMonth": "Dieser Monat",
                "lastMonth": "Letzter Monat",
                "thisYear": "Dieses Jahr",
                "lastYear": "Letztes Jahr",
                "from": "Von",
                "to": "Bis"
            },
            "dateFormat": "yMd",
            "outputFormat": "DD.MM.YYYY",
            "startOfWeek": 1,
            "dateSeparator": "_"
        }"#;

        let options: PickerOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.theme, Theme::Teal);
        assert_eq!(options.range, Preset::ThisWeek);
        assert_eq!(options.day_names[0], "Mo");
        assert_eq!(options.preset_names.preset(Preset::LastYear), "Letztes Jahr");
        assert_eq!(options.preset_names.endpoint(Endpoint::To), "Bis");
        assert_eq!(options.output_format.to_string(), "DD.MM.YYYY");
        assert_eq!(options.start_of_week, WeekdayIndex::MONDAY);
        assert_eq!(options.date_separator, '_');
    }

    #[test]
    fn test_deserialize_partial_keeps_defaults() {
        let options: PickerOptions =
            serde_json::from_str(r#"{ "presetNames": { "from": "From" } }"#).unwrap();
        assert_eq!(options.preset_names.from, "From");
        assert_eq!(options.preset_names.to, "End");
        assert_eq!(options.range, Preset::ThisMonth);
    }

    #[test]
    fn test_named_month_output() {
        let options: PickerOptions =
            serde_json::from_str(r#"{ "outputFormat": "MMM D, YYYY", "dateSeparator": "~" }"#).unwrap();
        let range = crate::range::DateRange::new(
            crate::test_utils::date(2024, 3, 1),
            crate::test_utils::date(2024, 3, 15),
        )
        .unwrap();
        assert_eq!(options.value_format().format(&range), "Mar 1, 2024~Mar 15, 2024");
    }

    #[test]
    fn test_deserialize_rejects_bad_values() {
        assert!(serde_json::from_str::<PickerOptions>(r#"{ "startOfWeek": 7 }"#).is_err());
        assert!(serde_json::from_str::<PickerOptions>(r#"{ "range": "nw" }"#).is_err());
        assert!(serde_json::from_str::<PickerOptions>(r#"{ "theme": "pink" }"#).is_err());
        assert!(serde_json::from_str::<PickerOptions>(r#"{ "dateFormat": "YYYY-MM-DD HH:mm" }"#).is_err());
        assert!(serde_json::from_str::<PickerOptions>(r#"{ "outputFormat": "MMMM Do YYYY" }"#).is_err());
    }

    #[test]
    fn test_preset_labels() {
        let names = PresetNames::default();
        let labels: Vec<&str> = Preset::ALL.into_iter().map(|p| names.preset(p)).collect();
        assert_eq!(
            labels,
            vec![
                "Today",
                "Yesterday",
                "This Week",
                "Last Week",
                "This Month",
                "Last Month",
                "This Year",
                "Last Year"
            ]
        );
        assert_eq!(names.endpoint(Endpoint::From), "Start");
    }
}
