//! SGR colour codes for titles and today's date.

use std::{error::Error, fmt, str::FromStr};

#[derive(Debug, Eq, PartialEq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

/// Names accepted by [`AnsiCode::from_name`] and the SGR parameter each maps to.
const NAMED: [(&str, &str); 10] = [
    ("black", "30"),
    ("red", "31"),
    ("green", "32"),
    ("yellow", "33"),
    ("blue", "34"),
    ("magenta", "35"),
    ("cyan", "36"),
    ("white", "37"),
    ("bold", "1"),
    ("reverse", "7"),
];

/// One SGR attribute: a fixed parameter or a 24-bit foreground.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnsiCode {
    Sgr(&'static str),
    Rgb(u8, u8, u8),
}

impl AnsiCode {
    /// Swaps foreground and background; the default today marker.
    #[inline]
    #[must_use]
    pub const fn reverse() -> Self {
        Self::Sgr("7")
    }

    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self::Sgr("0")
    }

    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Colour name (case-insensitive, `inverse` aliases `reverse`) or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let name = s.trim().to_ascii_lowercase();
        let name = if name == "inverse" { "reverse" } else { name.as_str() };
        NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map_or_else(|| Self::from_hex(s), |&(_, code)| Ok(Self::Sgr(code)))
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }
}

impl FromStr for AnsiCode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sgr(p) => write!(f, "\x1b[{p}m"),
            Self::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
        }
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

/// Every accepted colour name paired with its code, in listing order.
pub fn named_colors() -> impl Iterator<Item = (&'static str, AnsiCode)> {
    NAMED.iter().map(|&(name, code)| (name, AnsiCode::Sgr(code)))
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl Error for ColorError {}
