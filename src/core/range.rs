//! Which dates end up on screen.

use chrono::{Datelike, NaiveDate};

use crate::core::{
    config::Config,
    cursor::{DateCursor, Day},
    error::CalError,
    offset::{Offset, Unit},
};

/// Inclusive start/end of what gets rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DisplayRange {
    pub start: DateCursor,
    pub end: DateCursor,
}

impl DisplayRange {
    /// * year + month: that month
    /// * year only: the whole year
    /// * month only: that month of today's year
    /// * neither: today
    ///
    /// then `before` pulls the start back and `after` pushes the end forward.
    /// Fails unless both ends resolve to dates chrono can represent.
    pub fn resolve(cfg: &Config, today: NaiveDate) -> Result<Self, CalError> {
        let (start, end) = match (cfg.year, cfg.month) {
            (Some(y), Some(m)) => (
                DateCursor::new(y, m, Day::Fixed(1))?,
                DateCursor::new(y, m, Day::LastOfMonth)?,
            ),
            (Some(y), None) => (
                DateCursor::new(y, 1, Day::Fixed(1))?,
                DateCursor::new(y, 12, Day::Fixed(31))?,
            ),
            (None, Some(m)) => (
                DateCursor::new(today.year(), m, Day::Fixed(1))?,
                DateCursor::new(today.year(), m, Day::LastOfMonth)?,
            ),
            (None, None) => (DateCursor::from_date(today), DateCursor::from_date(today)),
        };

        let start = match cfg.before {
            Some(Offset {
                unit: Unit::Week,
                value,
            }) => start.sub_days(u64::from(value) * 7)?,
            Some(Offset {
                unit: Unit::Month,
                value,
            }) => start.move_back_months(value),
            None => start,
        };
        let end = match cfg.after {
            Some(Offset {
                unit: Unit::Week,
                value,
            }) => end.add_days(u64::from(value) * 7)?,
            Some(Offset {
                unit: Unit::Month,
                value,
            }) => end.move_forward_months(value),
            None => end,
        };

        // months() walks start..=end, so both ends must be real dates first
        start.to_date()?;
        end.to_date()?;
        Ok(Self { start, end })
    }

    /// Unified month numbers from the start month to the end month.
    #[must_use]
    pub fn months(&self) -> std::ops::RangeInclusive<i64> {
        self.start.unified_month_number()..=self.end.unified_month_number()
    }
}
