//! Week layout service: weekday order and month date grids.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::core::{constants::DAYS_PER_WEEK, error::CalError};

/// First column of every calendar row.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WeekStart {
    Monday,
    #[default]
    Sunday,
}

impl WeekStart {
    #[inline]
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Sunday => Weekday::Sun,
        }
    }
}

/// One calendar row, always seven consecutive dates.
pub type Week = [NaiveDate; DAYS_PER_WEEK];

/// Calendar arithmetic under a fixed first day of week.
#[derive(Clone, Copy, Debug)]
pub struct Calendar {
    start: WeekStart,
}

impl Calendar {
    #[inline]
    #[must_use]
    pub const fn new(start: WeekStart) -> Self {
        Self { start }
    }

    /// The seven weekdays in column order.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> {
        std::iter::successors(Some(self.start.weekday()), |wd| Some(wd.succ())).take(DAYS_PER_WEEK)
    }

    /// Column of `wd` within a row (0 = first day of week).
    #[inline]
    #[must_use]
    pub fn column_of(&self, wd: Weekday) -> u32 {
        match self.start {
            WeekStart::Monday => wd.num_days_from_monday(),
            WeekStart::Sunday => wd.num_days_from_sunday(),
        }
    }

    /// First date of the row containing `date`.
    pub fn week_start_of(&self, date: NaiveDate) -> Result<NaiveDate, CalError> {
        date.checked_sub_days(Days::new(u64::from(self.column_of(date.weekday()))))
            .ok_or(CalError::DateOutOfRange)
    }

    /// Every full week that touches `year`-`month`, the first one starting on
    /// or before the 1st and the last one ending on or after the last day.
    pub fn month_weeks(&self, year: i32, month: u32) -> Result<Vec<Week>, CalError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalError::InvalidDate {
            year,
            month,
            day: 1,
        })?;
        let mut cursor = self.week_start_of(first)?;
        let mut weeks = Vec::with_capacity(6);

        loop {
            let week = week_from(cursor)?;
            weeks.push(week);
            cursor = week[DAYS_PER_WEEK - 1]
                .succ_opt()
                .ok_or(CalError::DateOutOfRange)?;
            if cursor.year() != year || cursor.month() != month {
                break;
            }
        }
        Ok(weeks)
    }
}

/// Seven consecutive dates starting at `start`.
pub fn week_from(start: NaiveDate) -> Result<Week, CalError> {
    let mut week = [start; DAYS_PER_WEEK];
    for (offset, slot) in (0u64..).zip(week.iter_mut()) {
        *slot = start
            .checked_add_days(Days::new(offset))
            .ok_or(CalError::DateOutOfRange)?;
    }
    Ok(week)
}
