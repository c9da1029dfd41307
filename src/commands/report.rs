//! Report generation command.
//!
//! Maps the flag surface onto a window selection, runs the engine and
//! renders the totals plus the four consolidated views. Precedence, first
//! match wins: `--last-entry` (bypasses the pipeline), `--from`/`--to`,
//! `--current-week`, `--previous-week`, today.

use crate::db::entries::Entries;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::report::{generate, parse_week_start, resolve_window, ReportConfig, WindowSelection};
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Inclusive start date in YYYY-MM-DD format
    #[arg(long, requires = "to")]
    from: Option<String>,
    /// Inclusive end date in YYYY-MM-DD format
    #[arg(long, requires = "from")]
    to: Option<String>,
    /// Report on the current week's entries
    #[arg(long)]
    current_week: bool,
    /// Report on the previous week's entries
    #[arg(long)]
    previous_week: bool,
    /// Display the last entry's information
    #[arg(long)]
    last_entry: bool,
    /// Report all durations in their unrounded form
    #[arg(long)]
    no_rounding: bool,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let round_to_minutes = if args.no_rounding { 0 } else { config.round_to_minutes };
    let report_config = ReportConfig {
        round_to_minutes,
        week_start: parse_week_start(&config.week_start)?,
    };

    let mut entries = Entries::new()?;

    if args.last_entry {
        match entries.fetch_last()? {
            Some(entry) => View::last_entry(&entry),
            None => msg_print!(Message::NoEntriesRecorded),
        }
        return Ok(());
    }

    let selection = if let (Some(from), Some(to)) = (args.from.clone(), args.to.clone()) {
        WindowSelection::Range { from, to }
    } else if args.current_week {
        WindowSelection::CurrentWeek
    } else if args.previous_week {
        WindowSelection::PreviousWeek
    } else {
        WindowSelection::Today
    };

    let window = resolve_window(&selection, Local::now(), report_config.week_start)?;
    let report = generate(&mut entries, &report_config, window)?;

    msg_print!(Message::ReportWindowHeader {
        start: report.window.start.format("%Y-%m-%d %H:%M:%S").to_string(),
        start_week: report.window.start.date().iso_week().week(),
        end: report.window.end.format("%Y-%m-%d %H:%M:%S").to_string(),
        end_week: report.window.end.date().iso_week().week(),
    });

    View::totals(&report.totals, round_to_minutes);
    View::by_project(&report.by_project, round_to_minutes);
    View::by_task(&report.by_task, round_to_minutes);
    View::by_entry(&report.by_entry, round_to_minutes);
    View::by_day(&report.by_day, round_to_minutes);

    Ok(())
}
