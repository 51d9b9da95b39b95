//! Terminal size plumbing + cell geometry.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{CELL_PADDING, DAY_WIDTH, DAYS_PER_WEEK, WEEK_COLUMN_WIDTH};

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Content width of a month cell, without its padding.
#[inline]
#[must_use]
pub const fn internal_width(week_numbers: bool) -> usize {
    let days = DAYS_PER_WEEK * DAY_WIDTH + (DAYS_PER_WEEK - 1);
    if week_numbers {
        days + WEEK_COLUMN_WIDTH
    } else {
        days
    }
}

/// Full cell width as laid out in the grid.
#[inline]
#[must_use]
pub const fn cell_width(week_numbers: bool) -> usize {
    internal_width(week_numbers) + CELL_PADDING
}

/// How many cells of `cell_w` fit next to each other in `term_w` columns,
/// counting one border glyph per cell plus the closing one.  At least 1,
/// at most `cap`.
#[inline]
#[must_use]
pub fn fitting_columns(Width(term_w): Width, cell_w: usize, cap: usize) -> usize {
    (usize::from(term_w).saturating_sub(1) / (cell_w + 1)).clamp(1, cap.max(1))
}
