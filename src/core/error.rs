//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// Faults in user-supplied settings (builder, offsets, rc file).
#[derive(Debug)]
pub enum ConfigError {
    InvalidColumns(usize),
    InvalidMonth(u32),
    InvalidOffset(String),
    Rc { line: usize, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidColumns(n) => write!(f, "column count must be ≥1, got {n}"),
            ConfigError::InvalidMonth(m) => write!(f, "month must be 1–12, got {m}"),
            ConfigError::InvalidOffset(s) => {
                write!(f, "invalid offset `{s}` (expected e.g. `2w` or `3m`)")
            }
            ConfigError::Rc { line, message } => write!(f, "rc file line {line}: {message}"),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum CalError {
    Io(io::Error),
    Config(ConfigError),
    InvalidDate { year: i32, month: u32, day: u32 },
    DateOutOfRange,
    MalformedRowLength(usize),
}

impl fmt::Display for CalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalError::Io(e) => write!(f, "{e}"),
            CalError::Config(e) => write!(f, "{e}"),
            CalError::InvalidDate { year, month, day } => {
                write!(f, "invalid date {year:04}-{month:02}-{day:02}")
            }
            CalError::DateOutOfRange => write!(f, "date arithmetic out of supported range"),
            CalError::MalformedRowLength(n) => {
                write!(f, "calendar row needs exactly 7 day labels, got {n}")
            }
        }
    }
}
impl Error for CalError {}

// automatic conversions
impl From<io::Error> for CalError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for CalError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
