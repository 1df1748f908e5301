/// Number of columns in a calendar row
pub const DAYS_IN_WEEK: u8 = 7;

/// Weekday index of Sunday (indices run Sunday = 0 through Saturday = 6)
pub const SUNDAY: u8 = 0;
/// Weekday index of Saturday, the largest valid weekday index
pub const SATURDAY: u8 = 6;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Months added to the first of January to reach the next year
pub const MONTHS_IN_YEAR: u32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;

/// Default pattern used to parse a bound value
pub const DEFAULT_DATE_FORMAT: &str = "yMd";
/// Default pattern used to write a bound value
pub const DEFAULT_OUTPUT_FORMAT: &str = "DD/MM/YYYY";
/// Default character joining the two dates of a bound value
pub const DEFAULT_DATE_SEPARATOR: char = '-';

/// Default column headers, first column first
pub const DEFAULT_DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
