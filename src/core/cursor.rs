//! Month/week-granular calendar position.
//!
//! A [`DateCursor`] is a `(year, month, day)` triple where the day may be the
//! deferred [`Day::LastOfMonth`].  Month moves work on the *unified month
//! number* (`year * 12 + month - 1`) so they never touch day-of-month rules;
//! the concrete day is only resolved by [`DateCursor::to_date`].

use chrono::{Datelike, Days, NaiveDate};

use crate::core::{calendar::Calendar, error::CalError};

/// Day part of a cursor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Day {
    Fixed(u32),
    /// Resolved lazily to 28–31 depending on year and month.
    LastOfMonth,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateCursor {
    year: i32,
    month: u32,
    day: Day,
}

impl DateCursor {
    /// Fails when `month` is outside `1..=12`.  A fixed day is only checked on
    /// [`to_date`](Self::to_date).
    pub fn new(year: i32, month: u32, day: Day) -> Result<Self, CalError> {
        if !(1..=12).contains(&month) {
            return Err(CalError::InvalidDate {
                year,
                month,
                day: match day {
                    Day::Fixed(d) => d,
                    Day::LastOfMonth => 0,
                },
            });
        }
        Ok(Self { year, month, day })
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: Day::Fixed(date.day()),
        }
    }

    /// Inverse of [`unified_month_number`](Self::unified_month_number).  Years
    /// past `i32` saturate; such a cursor fails on [`to_date`](Self::to_date).
    #[must_use]
    pub fn from_unified_month(umn: i64, day: Day) -> Self {
        let year = i32::try_from(umn.div_euclid(12))
            .unwrap_or(if umn < 0 { i32::MIN } else { i32::MAX });
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let month = umn.rem_euclid(12) as u32 + 1;
        Self { year, month, day }
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }
    #[inline]
    #[must_use]
    pub const fn day(&self) -> Day {
        self.day
    }

    #[inline]
    #[must_use]
    pub fn unified_month_number(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Concrete date.  Never clamps: `Fixed(30)` in February is an error.
    pub fn to_date(&self) -> Result<NaiveDate, CalError> {
        let day = match self.day {
            Day::Fixed(d) => d,
            Day::LastOfMonth => last_day_of_month(self.year, self.month)?,
        };
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or(CalError::InvalidDate {
            year: self.year,
            month: self.month,
            day,
        })
    }

    pub fn add_days(self, n: u64) -> Result<Self, CalError> {
        let date = self
            .to_date()?
            .checked_add_days(Days::new(n))
            .ok_or(CalError::DateOutOfRange)?;
        Ok(Self::from_date(date))
    }

    pub fn sub_days(self, n: u64) -> Result<Self, CalError> {
        let date = self
            .to_date()?
            .checked_sub_days(Days::new(n))
            .ok_or(CalError::DateOutOfRange)?;
        Ok(Self::from_date(date))
    }

    /// `n` months earlier, at the start of that month.
    #[must_use]
    pub fn move_back_months(self, n: u32) -> Self {
        Self::from_unified_month(self.unified_month_number() - i64::from(n), Day::Fixed(1))
    }

    /// `n` months later, at the end of that month.
    #[must_use]
    pub fn move_forward_months(self, n: u32) -> Self {
        Self::from_unified_month(self.unified_month_number() + i64::from(n), Day::LastOfMonth)
    }

    /// Back to the nearest first-day-of-week on or before the cursor.
    pub fn move_to_week_start(self, cal: &Calendar) -> Result<Self, CalError> {
        Ok(Self::from_date(cal.week_start_of(self.to_date()?)?))
    }
}

/// Sequential week counter: week 1 is the first row of January of
/// `reference`'s year under `cal`'s week start.  Not an ISO week number.
pub fn calendar_week_number(cal: &Calendar, reference: NaiveDate) -> Result<u32, CalError> {
    let jan_first = NaiveDate::from_ymd_opt(reference.year(), 1, 1).ok_or(CalError::InvalidDate {
        year: reference.year(),
        month: 1,
        day: 1,
    })?;
    let anchor = cal.week_start_of(jan_first)?;
    let weeks = (reference - anchor).num_days() / 7 + 1;
    u32::try_from(weeks).map_err(|_| CalError::DateOutOfRange)
}

fn last_day_of_month(year: i32, month: u32) -> Result<u32, CalError> {
    let next = if month == 12 {
        year.checked_add(1).map(|y| (y, 1))
    } else {
        Some((year, month + 1))
    };
    next.and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1))
        .and_then(|first| first.pred_opt())
        .map(|d| d.day())
        .ok_or(CalError::InvalidDate {
            year,
            month,
            day: 1,
        })
}
