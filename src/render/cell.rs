//! One boxed block of the grid: a month, or the whole continuous stream.
//!
//! ```text
//!  ┌───────────────────────────┐
//!  │       December 2019       │   title, centred by display width
//!  │ ───────────────────────── │   separator
//!  │ WK │ Mo Tu We Th Fr Sa Su │   weekday header
//!  │ 48 │                    1 │   rows
//!  │    │                      │   padding up to the row's height
//! ```

use crate::core::{
    config::Config,
    constants::{DAY_WIDTH, DAYS_PER_WEEK, WEEK_LABEL},
    error::CalError,
    geometry::{cell_width, internal_width},
    width::string_width,
};

use super::grid::H;

const WEEK_SEPARATOR: &str = " │ ";

pub struct Cell<'a> {
    cfg: &'a Config,
    title: Option<String>,
    weekday_line: String,
    week_label: String,
    rows: Vec<(u32, String)>,
    height: usize,
}

impl<'a> Cell<'a> {
    /// Untitled cell; renders as nothing until a title is set.
    #[must_use]
    pub fn new(cfg: &'a Config) -> Self {
        Self {
            cfg,
            title: None,
            weekday_line: String::new(),
            week_label: WEEK_LABEL.to_owned(),
            rows: Vec::new(),
            height: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &'a Config {
        self.cfg
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_weekday_line(&mut self, line: impl Into<String>) {
        self.weekday_line = line.into();
    }

    pub fn set_week_label(&mut self, label: impl Into<String>) {
        self.week_label = label.into();
    }

    /// Add one calendar row.  `days` are pre-formatted two-column labels.
    pub fn append_row(&mut self, week: u32, days: Vec<String>) -> Result<(), CalError> {
        if days.len() != DAYS_PER_WEEK {
            return Err(CalError::MalformedRowLength(days.len()));
        }
        self.rows.push((week, days.join(" ")));
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        cell_width(self.cfg.week_numbers)
    }

    /// Data rows shown, including padding rows forced via [`set_height`](Self::set_height).
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height.max(self.rows.len())
    }

    /// Pads with blank rows up to `h`; never hides rows.
    #[inline]
    pub fn set_height(&mut self, h: usize) {
        self.height = h;
    }

    fn week_prefix(&self, label: &str) -> String {
        if self.cfg.week_numbers {
            format!("{label:>2}{WEEK_SEPARATOR}")
        } else {
            String::new()
        }
    }

    /// Rendered text lines, each exactly [`width`](Self::width) columns wide
    /// (ignoring colour escapes).
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let Some(title) = &self.title else {
            return Vec::new();
        };
        let inner = internal_width(self.cfg.week_numbers);
        let mut out = Vec::with_capacity(3 + self.height());

        let pad_total = inner.saturating_sub(string_width(title));
        let left = pad_total / 2;
        out.push(padded(&format!(
            "{}{}{}",
            " ".repeat(left),
            self.cfg.color_title(title),
            " ".repeat(pad_total - left)
        )));

        out.push(padded(&H.repeat(inner)));

        out.push(padded(&format!(
            "{}{}",
            self.week_prefix(&self.week_label),
            self.weekday_line
        )));

        for (week, days) in &self.rows {
            out.push(padded(&format!(
                "{}{days}",
                self.week_prefix(&week.to_string())
            )));
        }

        let blank_days = " ".repeat(DAYS_PER_WEEK * DAY_WIDTH + DAYS_PER_WEEK - 1);
        for _ in self.rows.len()..self.height() {
            out.push(padded(&format!("{}{blank_days}", self.week_prefix(""))));
        }
        out
    }
}

#[inline]
fn padded(s: &str) -> String {
    format!(" {s} ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::AnsiCode;

    fn days(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| format!("{s:>2}")).collect()
    }

    fn week() -> Vec<String> {
        days(&["1", "2", "3", "4", "5", "6", "7"])
    }

    #[test]
    fn rejects_wrong_row_length() {
        let cfg = Config::default();
        let mut cell = Cell::new(&cfg);
        assert!(matches!(
            cell.append_row(1, days(&["1", "2"])),
            Err(CalError::MalformedRowLength(2))
        ));
        assert!(matches!(
            cell.append_row(1, Vec::new()),
            Err(CalError::MalformedRowLength(0))
        ));
        assert_eq!(cell.height(), 0);
    }

    #[test]
    fn width_depends_on_week_column() {
        let with = Config::default();
        let without = Config::builder().week_numbers(false).build().unwrap();
        assert_eq!(Cell::new(&with).width(), 27);
        assert_eq!(Cell::new(&without).width(), 22);
    }

    #[test]
    fn untitled_cell_renders_nothing() {
        let cfg = Config::default();
        let mut cell = Cell::new(&cfg);
        cell.append_row(1, week()).unwrap();
        assert!(cell.lines().is_empty());
    }

    #[test]
    fn layout_of_a_titled_cell() {
        let cfg = Config::default();
        let mut cell = Cell::new(&cfg);
        cell.set_title("March 2020");
        cell.set_weekday_line("Su Mo Tu We Th Fr Sa");
        cell.append_row(10, week()).unwrap();

        let lines = cell.lines();
        assert_eq!(lines.len(), 4);
        // 25 inner - 10 title = 15 → 7 left, 8 right
        assert_eq!(lines[0], format!(" {}March 2020{} ", " ".repeat(7), " ".repeat(8)));
        assert_eq!(lines[1], format!(" {} ", "─".repeat(25)));
        assert_eq!(lines[2], " WK │ Su Mo Tu We Th Fr Sa ");
        assert_eq!(lines[3], " 10 │  1  2  3  4  5  6  7 ");
        for l in &lines {
            assert_eq!(string_width(l), cell.width());
        }
    }

    #[test]
    fn wide_title_is_centred_by_display_width() {
        let cfg = Config::builder().week_numbers(false).build().unwrap();
        let mut cell = Cell::new(&cfg);
        cell.set_title("2020年 三月");
        let title = &cell.lines()[0];
        // 20 inner - 11 columns = 9 → 4 left, 5 right
        assert_eq!(title.as_str(), "     2020年 三月      ");
        assert_eq!(string_width(title), 22);
    }

    #[test]
    fn title_colour_does_not_shift_padding() {
        let cfg = Config::builder()
            .week_numbers(false)
            .title_color(AnsiCode::from_name("red").unwrap())
            .build()
            .unwrap();
        let mut cell = Cell::new(&cfg);
        cell.set_title("May 2020");
        assert_eq!(
            cell.lines()[0],
            format!(" {}\x1b[31mMay 2020\x1b[0m{} ", " ".repeat(6), " ".repeat(6))
        );
    }

    #[test]
    fn forced_height_adds_blank_rows() {
        let cfg = Config::default();
        let mut cell = Cell::new(&cfg);
        cell.set_title("x");
        for wk in 1..=5 {
            cell.append_row(wk, week()).unwrap();
        }
        assert_eq!(cell.height(), 5);
        cell.set_height(7);
        assert_eq!(cell.height(), 7);

        let lines = cell.lines();
        let data = &lines[3..];
        assert_eq!(data.len(), 7);
        let blank = format!(" {} ", "   │ ".to_owned() + &" ".repeat(20));
        assert_eq!(data[5], blank);
        assert_eq!(data[6], blank);
        assert_eq!(string_width(&data[6]), 27);
        assert_ne!(data[4], blank);
    }

    #[test]
    fn height_never_hides_rows() {
        let cfg = Config::default();
        let mut cell = Cell::new(&cfg);
        cell.set_title("x");
        cell.append_row(1, week()).unwrap();
        cell.append_row(2, week()).unwrap();
        cell.set_height(1);
        assert_eq!(cell.height(), 2);
        assert_eq!(cell.lines().len(), 5);
    }

    #[test]
    fn week_column_can_be_disabled() {
        let cfg = Config::builder().week_numbers(false).build().unwrap();
        let mut cell = Cell::new(&cfg);
        cell.set_title("x");
        cell.set_weekday_line("Mo Tu We Th Fr Sa Su");
        cell.append_row(9, week()).unwrap();
        cell.set_height(2);
        let lines = cell.lines();
        assert_eq!(lines[2], " Mo Tu We Th Fr Sa Su ");
        assert_eq!(lines[3], "  1  2  3  4  5  6  7 ");
        assert_eq!(lines[4], " ".repeat(22));
    }

    #[test]
    fn custom_week_label() {
        let cfg = Config::default();
        let mut cell = Cell::new(&cfg);
        cell.set_title("März 2020");
        cell.set_weekday_line("Mo Di Mi Do Fr Sa So");
        cell.set_week_label("KW");
        cell.append_row(10, week()).unwrap();
        let lines = cell.lines();
        assert_eq!(lines[2], " KW │ Mo Di Mi Do Fr Sa So ");
        assert_eq!(lines[3], " 10 │  1  2  3  4  5  6  7 ");
    }
}
