//! `key = value` settings file.
//!
//! ```text
//! # ~/.config/tcal/tcalrc
//! col = 4
//! start_monday = yes
//! after = 1m
//! color_title = cyan
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::BaseDirs;

use crate::core::{
    color::AnsiCode,
    error::{CalError, ConfigError},
    offset::Offset,
};

/// Every key is optional; command-line flags win over whatever is set here.
#[derive(Debug, Default, PartialEq)]
pub struct RcSettings {
    pub col: Option<usize>,
    pub start_monday: Option<bool>,
    pub wk: Option<bool>,
    pub cont: Option<bool>,
    pub before: Option<Offset>,
    pub after: Option<Offset>,
    pub color_title: Option<AnsiCode>,
    pub color_today: Option<AnsiCode>,
}

/// `$XDG_CONFIG_HOME/tcal/tcalrc`, then `~/.tcalrc`; the first that exists.
#[must_use]
pub fn default_rc_path() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    [
        dirs.config_dir().join("tcal").join("tcalrc"),
        dirs.home_dir().join(".tcalrc"),
    ]
    .into_iter()
    .find(|p| p.is_file())
}

pub fn read_rc(path: &Path) -> Result<RcSettings, CalError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_rc(&text)?)
}

pub fn parse_rc(text: &str) -> Result<RcSettings, ConfigError> {
    let mut rc = RcSettings::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fail = |message: String| ConfigError::Rc {
            line: line_no,
            message,
        };
        let Some((key, value)) = line.split_once('=') else {
            return Err(fail(format!("expected `key = value`, got `{line}`")));
        };
        let (key, value) = (key.trim(), value.trim());

        match key {
            "col" => {
                let n = lexical_core::parse::<usize>(value.as_bytes())
                    .map_err(|_| fail(format!("`col` must be a number, got `{value}`")))?;
                rc.col = Some(n);
            }
            "start_monday" => rc.start_monday = Some(bool_value(key, value).map_err(fail)?),
            "wk" => rc.wk = Some(bool_value(key, value).map_err(fail)?),
            "cont" => rc.cont = Some(bool_value(key, value).map_err(fail)?),
            "before" => rc.before = Some(offset_value(value).map_err(fail)?),
            "after" => rc.after = Some(offset_value(value).map_err(fail)?),
            "color_title" => {
                rc.color_title = Some(
                    AnsiCode::from_name(value).map_err(|e| fail(format!("color_title: {e}")))?,
                );
            }
            "color_today" => {
                rc.color_today = Some(
                    AnsiCode::from_name(value).map_err(|e| fail(format!("color_today: {e}")))?,
                );
            }
            _ => return Err(fail(format!("unknown key `{key}`"))),
        }
    }
    Ok(rc)
}

fn bool_value(key: &str, value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(format!("`{key}` must be yes/no, got `{value}`")),
    }
}

fn offset_value(value: &str) -> Result<Offset, String> {
    value.parse().map_err(|e: ConfigError| e.to_string())
}
