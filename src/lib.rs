//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

use chrono::NaiveDate;

pub use crate::core::{
    calendar::{Calendar, WeekStart},
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder},
    cursor::{DateCursor, Day, calendar_week_number},
    error::{CalError, ConfigError},
    offset::{Offset, Unit},
    range::DisplayRange,
    width::string_width,
};

pub use render::{Cell, Grid};

/// Render the calendar selected by `config` as seen on `today`, as one text
/// block without a trailing newline.
pub fn render_calendar(config: &Config, today: NaiveDate) -> Result<String, CalError> {
    render::render(config, today)
}
