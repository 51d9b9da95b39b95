//! Run-time configuration object + fluent builder.

use crate::core::{
    calendar::WeekStart,
    color::{AnsiCode, colorize},
    constants::DEFAULT_COLUMNS,
    error::ConfigError,
    offset::Offset,
};

/// Immutable parameters handed to the range resolver and the renderer.
#[derive(Debug, Clone)]
pub struct Config {
    pub week_start: WeekStart,
    pub columns: usize,
    pub week_numbers: bool,
    pub title_color: Option<AnsiCode>,
    pub today_color: Option<AnsiCode>,
    pub before: Option<Offset>,
    pub after: Option<Offset>,
    pub continuous: bool,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Title text as printed; colour is applied after width-based centring.
    #[must_use]
    pub fn color_title(&self, title: &str) -> String {
        match &self.title_color {
            Some(c) => colorize(c, title),
            None => title.to_owned(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            columns: DEFAULT_COLUMNS,
            week_numbers: true,
            title_color: None,
            today_color: None,
            before: None,
            after: None,
            continuous: false,
            year: None,
            month: None,
        }
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    cfg: Config,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn week_start(mut self, s: WeekStart) -> Self {
        self.cfg.week_start = s;
        self
    }
    #[inline]
    #[must_use]
    pub fn columns(mut self, n: usize) -> Self {
        self.cfg.columns = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn week_numbers(mut self, on: bool) -> Self {
        self.cfg.week_numbers = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn title_color<C: Into<Option<AnsiCode>>>(mut self, c: C) -> Self {
        self.cfg.title_color = c.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn today_color<C: Into<Option<AnsiCode>>>(mut self, c: C) -> Self {
        self.cfg.today_color = c.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn before(mut self, o: Offset) -> Self {
        self.cfg.before = Some(o);
        self
    }
    #[inline]
    #[must_use]
    pub fn before_opt(mut self, o: Option<Offset>) -> Self {
        if o.is_some() {
            self.cfg.before = o;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn after(mut self, o: Offset) -> Self {
        self.cfg.after = Some(o);
        self
    }
    #[inline]
    #[must_use]
    pub fn after_opt(mut self, o: Option<Offset>) -> Self {
        if o.is_some() {
            self.cfg.after = o;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn continuous(mut self, on: bool) -> Self {
        self.cfg.continuous = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn year(mut self, y: i32) -> Self {
        self.cfg.year = Some(y);
        self
    }
    #[inline]
    #[must_use]
    pub fn month(mut self, m: u32) -> Self {
        self.cfg.month = Some(m);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let cfg = self.cfg;
        if cfg.columns == 0 {
            return Err(ConfigError::InvalidColumns(cfg.columns));
        }
        if let Some(m) = cfg.month.filter(|m| !(1..=12).contains(m)) {
            return Err(ConfigError::InvalidMonth(m));
        }
        Ok(cfg)
    }
}
