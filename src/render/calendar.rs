//! Config + today → cells → grid text.

use chrono::{Datelike, NaiveDate};

use crate::core::{
    calendar::{Calendar, Week, week_from},
    color::colorize,
    config::Config,
    constants::{DAYS_PER_WEEK, MONTH_NAMES, WEEKDAY_ABBR},
    cursor::{DateCursor, Day, calendar_week_number},
    error::CalError,
    range::DisplayRange,
};

use super::{cell::Cell, grid::Grid};

/// Render the calendar selected by `cfg` as seen on `today`.
pub fn render(cfg: &Config, today: NaiveDate) -> Result<String, CalError> {
    let mut grid = Grid::new(cfg.columns);
    for cell in build_cells(cfg, today)? {
        grid.append(cell);
    }
    Ok(grid.render())
}

/// One cell per displayed month, or a single cell holding every week of the
/// range in continuous mode.
pub fn build_cells(cfg: &Config, today: NaiveDate) -> Result<Vec<Cell<'_>>, CalError> {
    let cal = Calendar::new(cfg.week_start);
    let range = DisplayRange::resolve(cfg, today)?;

    if cfg.continuous {
        return Ok(vec![continuous_cell(cfg, &cal, &range, today)?]);
    }
    range
        .months()
        .map(|umn| {
            let month = DateCursor::from_unified_month(umn, Day::Fixed(1));
            month_cell(cfg, &cal, month.year(), month.month(), today)
        })
        .collect()
}

/// `"Mo Tu We Th Fr Sa Su"` in the calendar's column order.
#[must_use]
pub fn weekday_header(cal: &Calendar) -> String {
    cal.weekdays()
        .map(|wd| WEEKDAY_ABBR[wd.num_days_from_monday() as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

fn month_cell<'a>(
    cfg: &'a Config,
    cal: &Calendar,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<Cell<'a>, CalError> {
    let mut cell = Cell::new(cfg);
    cell.set_title(format!("{} {year}", MONTH_NAMES[month as usize - 1]));
    cell.set_weekday_line(weekday_header(cal));

    for week in cal.month_weeks(year, month)? {
        let days = week
            .iter()
            .map(|d| {
                if d.month() == month {
                    day_label(cfg, *d, today)
                } else {
                    " ".repeat(2)
                }
            })
            .collect();
        cell.append_row(week_number(cal, &week)?, days)?;
    }
    Ok(cell)
}

fn continuous_cell<'a>(
    cfg: &'a Config,
    cal: &Calendar,
    range: &DisplayRange,
    today: NaiveDate,
) -> Result<Cell<'a>, CalError> {
    let mut cursor = range.start.move_to_week_start(cal)?.to_date()?;
    let end = range.end.to_date()?;

    // titled by the requested range, not the padded first row
    let mut cell = Cell::new(cfg);
    cell.set_title(if range.start.year() == end.year() {
        end.year().to_string()
    } else {
        format!("{} - {}", range.start.year(), end.year())
    });
    cell.set_weekday_line(weekday_header(cal));

    while cursor <= end {
        let week = week_from(cursor)?;
        let days = week.iter().map(|d| day_label(cfg, *d, today)).collect();
        cell.append_row(week_number(cal, &week)?, days)?;
        cursor = week[DAYS_PER_WEEK - 1]
            .succ_opt()
            .ok_or(CalError::DateOutOfRange)?;
    }
    Ok(cell)
}

/// A row is counted in the year its last day falls in, so the row holding
/// New Year's Day is always week 1.
fn week_number(cal: &Calendar, week: &Week) -> Result<u32, CalError> {
    calendar_week_number(cal, week[DAYS_PER_WEEK - 1])
}

fn day_label(cfg: &Config, date: NaiveDate, today: NaiveDate) -> String {
    let label = format!("{:>2}", date.day());
    match &cfg.today_color {
        Some(c) if date == today => colorize(c, &label),
        _ => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnsiCode, WeekStart, offset::Offset};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn header_order() {
        assert_eq!(
            weekday_header(&Calendar::new(WeekStart::Sunday)),
            "Su Mo Tu We Th Fr Sa"
        );
        assert_eq!(
            weekday_header(&Calendar::new(WeekStart::Monday)),
            "Mo Tu We Th Fr Sa Su"
        );
    }

    #[test]
    fn one_cell_per_month() {
        let cfg = Config::builder().year(2020).build().unwrap();
        let cells = build_cells(&cfg, d(2000, 1, 1)).unwrap();
        assert_eq!(cells.len(), 12);
        assert!(cells[0].lines()[0].contains("January 2020"));
        assert!(cells[11].lines()[0].contains("December 2020"));
    }

    #[test]
    fn days_outside_month_are_blank() {
        let cfg = Config::builder()
            .week_start(WeekStart::Sunday)
            .year(2020)
            .month(3)
            .build()
            .unwrap();
        let cells = build_cells(&cfg, d(2000, 1, 1)).unwrap();
        let lines = cells[0].lines();
        assert_eq!(lines[3], " 10 │  1  2  3  4  5  6  7 ");
        assert_eq!(lines[7], " 14 │ 29 30 31             ");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn today_is_highlighted() {
        let cfg = Config::builder()
            .today_color(AnsiCode::reverse())
            .week_numbers(false)
            .build()
            .unwrap();
        let cells = build_cells(&cfg, d(2020, 3, 4)).unwrap();
        let lines = cells[0].lines();
        assert!(lines.iter().any(|l| l.contains("\x1b[7m 4\x1b[0m")));
        assert_eq!(lines.iter().filter(|l| l.contains("\x1b[7m")).count(), 1);
    }

    #[test]
    fn continuous_starts_at_week_start() {
        let cfg = Config::builder()
            .week_start(WeekStart::Monday)
            .continuous(true)
            .after(Offset::weeks(1))
            .build()
            .unwrap();
        // Wednesday
        let cells = build_cells(&cfg, d(2020, 3, 4)).unwrap();
        assert_eq!(cells.len(), 1);
        let lines = cells[0].lines();
        assert!(lines[0].contains("2020"));
        assert_eq!(
            &lines[3..],
            [" 10 │  2  3  4  5  6  7  8 ", " 11 │  9 10 11 12 13 14 15 "]
        );
    }

    #[test]
    fn continuous_title_spans_years() {
        let cfg = Config::builder()
            .continuous(true)
            .year(2019)
            .month(12)
            .after(Offset::weeks(2))
            .build()
            .unwrap();
        let cells = build_cells(&cfg, d(2000, 1, 1)).unwrap();
        assert!(cells[0].lines()[0].contains("2019 - 2020"));
    }

    #[test]
    fn continuous_title_ignores_leading_partial_week() {
        // 1 Jan 2021 is a Friday, so the first row starts in December 2020
        let cfg = Config::builder()
            .week_start(WeekStart::Sunday)
            .continuous(true)
            .year(2021)
            .build()
            .unwrap();
        let lines = build_cells(&cfg, d(2000, 1, 1)).unwrap()[0].lines();
        assert_eq!(lines[0].trim(), "2021");
        assert!(lines[3].contains("27 28 29 30 31  1  2"));
    }

    #[test]
    fn render_joins_cells_into_grid() {
        let cfg = Config::builder()
            .columns(2)
            .year(2020)
            .month(1)
            .after(Offset::months(2))
            .build()
            .unwrap();
        let out = render(&cfg, d(2000, 1, 1)).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains("January 2020") && lines[1].contains("February 2020"));
        assert!(out.contains("March 2020"));
        // 3 months in 2 columns → 2 grid rows
        assert_eq!(lines.iter().filter(|l| l.starts_with('├')).count(), 1);
    }
}
