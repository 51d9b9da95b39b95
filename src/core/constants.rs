//! A collection of constants.

/// Days in one calendar row
pub const DAYS_PER_WEEK: usize = 7;
/// Every day label is right-aligned in two columns
pub const DAY_WIDTH: usize = 2;
/// `"WK │ "` / `"12 │ "` in front of each row
pub const WEEK_COLUMN_WIDTH: usize = 5;
/// One space on each side of a cell's content
pub const CELL_PADDING: usize = 2;

/// Default number of cells per grid row
pub const DEFAULT_COLUMNS: usize = 3;

/// Header label of the week-number column
pub const WEEK_LABEL: &str = "WK";

/// Indexed by `Weekday::num_days_from_monday()`.
pub const WEEKDAY_ABBR: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
