//! "Before"/"after" extensions of the display range (`2w`, `3m`).

use std::{fmt, str::FromStr};

use crate::core::error::ConfigError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unit {
    Week,
    Month,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Offset {
    pub unit: Unit,
    pub value: u32,
}

impl Offset {
    #[inline]
    #[must_use]
    pub const fn weeks(value: u32) -> Self {
        Self {
            unit: Unit::Week,
            value,
        }
    }
    #[inline]
    #[must_use]
    pub const fn months(value: u32) -> Self {
        Self {
            unit: Unit::Month,
            value,
        }
    }
}

/// `<count><unit>`, unit `w`/`W` or `m`/`M`.  Anything else is rejected here so
/// the range code only ever sees the two known units.
impl FromStr for Offset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::InvalidOffset(s.to_owned());
        let t = s.trim();
        let split = t.char_indices().last().map_or(0, |(i, _)| i);
        let (digits, unit) = t.split_at(split);
        let unit = match unit {
            "w" | "W" => Unit::Week,
            "m" | "M" => Unit::Month,
            _ => return Err(bad()),
        };
        let value = lexical_core::parse::<u32>(digits.as_bytes()).map_err(|_| bad())?;
        Ok(Self { unit, value })
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            Unit::Week => 'w',
            Unit::Month => 'm',
        };
        write!(f, "{}{unit}", self.value)
    }
}
