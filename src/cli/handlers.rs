use std::time::Instant;

use chrono::Local;
use terminal_size::Width;

use crate::{
    core::{
        calendar::WeekStart,
        color::{AnsiCode, colorize, named_colors},
        config::Config,
        constants::DEFAULT_COLUMNS,
        error::CalError,
        geometry::{cell_width, fitting_columns, terminal_geometry},
        range::DisplayRange,
    },
    render,
};

use super::{
    parse::Cli,
    rc::{RcSettings, default_rc_path, read_rc},
};

pub fn calendar(cli: &Cli) -> Result<(), CalError> {
    let t_setup = Instant::now();
    let rc = load_rc(cli)?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let (term_w, _) = terminal_geometry();
    let cfg = build_config(cli, &rc, term_w, cli.color.enabled())?;
    let dur_setup = t_setup.elapsed().as_micros();

    if cli.debug {
        let range = DisplayRange::resolve(&cfg, today)?;
        eprintln!(
            "today {today}   range {} .. {}   ({} month(s), cont = {})",
            range.start.to_date()?,
            range.end.to_date()?,
            range.months().count(),
            cfg.continuous,
        );
    }

    let t_render = Instant::now();
    let out = render::render(&cfg, today)?;
    let dur_render = t_render.elapsed().as_micros();
    println!("{out}");

    if cli.debug {
        eprintln!("setup {dur_setup} µs   render {dur_render} µs");
    }
    Ok(())
}

fn load_rc(cli: &Cli) -> Result<RcSettings, CalError> {
    if cli.no_rc {
        return Ok(RcSettings::default());
    }
    match cli.rc.clone().or_else(default_rc_path) {
        Some(path) => {
            if cli.debug {
                eprintln!("rc file: {}", path.display());
            }
            read_rc(&path)
        }
        None => Ok(RcSettings::default()),
    }
}

/// Merge rc settings and flags (flags win) into a validated [`Config`].
fn build_config(
    cli: &Cli,
    rc: &RcSettings,
    term_w: Width,
    color: bool,
) -> Result<Config, CalError> {
    let week_numbers = if cli.no_wk {
        false
    } else {
        cli.wk || rc.wk.unwrap_or(true)
    };
    let week_start = if cli.mon || (!cli.sun && rc.start_monday == Some(true)) {
        WeekStart::Monday
    } else {
        WeekStart::Sunday
    };
    let columns = cli.col.or(rc.col).unwrap_or_else(|| {
        fitting_columns(term_w, cell_width(week_numbers), DEFAULT_COLUMNS)
    });

    let mut b = Config::builder()
        .week_start(week_start)
        .columns(columns)
        .week_numbers(week_numbers)
        .continuous(cli.cont || rc.cont.unwrap_or(false))
        .before_opt(rc.before)
        .before_opt(cli.before)
        .after_opt(rc.after)
        .after_opt(cli.after);

    if color {
        b = b
            .title_color(cli.title_color.or(rc.color_title))
            .today_color(
                cli.today_color
                    .or(rc.color_today)
                    .unwrap_or_else(AnsiCode::reverse),
            );
    }
    if let Some(y) = cli.year {
        b = b.year(y);
    }
    if let Some(m) = cli.month {
        b = b.month(m);
    }
    Ok(b.build()?)
}

/// Pretty-print available colour names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, code) in named_colors() {
        println!("{}", colorize(&code, name));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}
