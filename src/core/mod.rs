//! Aggregates the date logic layer.

pub mod calendar;
pub mod color;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod offset;
pub mod range;
pub mod width;

// re-export frequently-used items for convenience
pub use calendar::{Calendar, Week, WeekStart};
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder};
pub use cursor::{DateCursor, Day, calendar_week_number};
pub use error::{CalError, ConfigError};
pub use offset::{Offset, Unit};
pub use range::DisplayRange;
pub use width::string_width;
