use std::{io::IsTerminal, path::PathBuf};

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::core::{color::AnsiCode, offset::Offset};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "tcal",
    about = "Tiny boxed terminal calendar with week numbers"
)]
pub struct Cli {
    /// Year to show (the whole year unless MONTH is given)
    #[arg(value_name = "YEAR")]
    pub year: Option<i32>,

    /// Month to show, 1-12
    #[arg(value_name = "MONTH", value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Months per grid row (fits the terminal if omitted)
    #[arg(short, long)]
    pub col: Option<usize>,

    /// Weeks start on Monday
    #[arg(short = 'm', long = "mon", conflicts_with = "sun")]
    pub mon: bool,
    /// Weeks start on Sunday
    #[arg(short = 's', long = "sun")]
    pub sun: bool,

    /// Show the week-number column
    #[arg(long, conflicts_with = "no_wk")]
    pub wk: bool,
    /// Hide the week-number column
    #[arg(long)]
    pub no_wk: bool,

    /// Extend the range backwards, e.g. `2w` or `1m`
    #[arg(short, long, value_name = "OFFSET")]
    pub before: Option<Offset>,
    /// Extend the range forwards, e.g. `2w` or `1m`
    #[arg(short, long, value_name = "OFFSET")]
    pub after: Option<Offset>,

    /// One continuous stream of weeks instead of month boxes
    #[arg(long)]
    pub cont: bool,

    /// Pretend today is this date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// When to emit colour escapes
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Title colour (name or `#RRGGBB`)
    #[arg(long)]
    pub title_color: Option<AnsiCode>,
    /// Colour of today's date (name or `#RRGGBB`)
    #[arg(long)]
    pub today_color: Option<AnsiCode>,

    /// Read settings from this rc file instead of the default locations
    #[arg(long, value_name = "FILE", conflicts_with = "no_rc")]
    pub rc: Option<PathBuf>,
    /// Ignore rc files
    #[arg(long)]
    pub no_rc: bool,

    /// Show available colour names / hex syntax and exit
    #[arg(long)]
    pub list_colors: bool,

    /// Emit range and timing diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    /// Colour when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => std::io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}
