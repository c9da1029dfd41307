//! Report orchestration: window selection and the derive/consolidate
//! pipeline.
//!
//! A report invocation runs strictly forward: select the window, fetch the
//! distinct events, derive durations, fetch the full join rows, consolidate
//! into the four views plus totals. Any failure aborts the invocation; a
//! partial report is never produced. All tunables arrive in an explicit
//! [`ReportConfig`] value, there is no ambient state.

use crate::db::entries::Entries;
use crate::libs::consolidate::{self, DayView, EntryView, ProjectView, TaskView, Totals};
use crate::libs::error::ReportError;
use crate::libs::intervals::derive_durations;
use crate::msg_debug;
use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Resolved report settings, passed into every component that needs them.
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    /// Rounding granularity in minutes; zero disables rounding.
    pub round_to_minutes: i64,
    /// First day of the reporting week.
    pub week_start: Weekday,
}

/// How the caller asked for the reporting window to be chosen. The
/// last-entry shortcut bypasses the pipeline entirely and has no window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowSelection {
    Today,
    CurrentWeek,
    PreviousWeek,
    Range { from: String, to: String },
}

/// Inclusive local-time window bounds, day-granular at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// The consolidated report handed to the renderer.
#[derive(Debug, Clone)]
pub struct Report {
    pub window: ReportWindow,
    pub totals: Totals,
    pub by_project: Vec<ProjectView>,
    pub by_task: Vec<TaskView>,
    pub by_entry: Vec<EntryView>,
    pub by_day: Vec<DayView>,
}

/// Resolves a configured week-start day name.
pub fn parse_week_start(name: &str) -> Result<Weekday, ReportError> {
    match name.to_lowercase().as_str() {
        "sunday" => Ok(Weekday::Sun),
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        _ => Err(ReportError::InvalidWeekday(name.to_string())),
    }
}

/// The most recent `week_start` day on or before `date`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().days_since(week_start)))
}

fn day_window(from: NaiveDate, to: NaiveDate) -> ReportWindow {
    ReportWindow {
        start: from.and_time(NaiveTime::MIN),
        end: to.and_hms_opt(23, 59, 59).unwrap(),
    }
}

/// Maps a window selection to concrete bounds.
///
/// Explicit range dates are `YYYY-MM-DD`; anything else fails the
/// invocation with a `TimeParse` error before any store access.
pub fn resolve_window(selection: &WindowSelection, now: DateTime<Local>, week_start: Weekday) -> Result<ReportWindow, ReportError> {
    let today = now.date_naive();
    match selection {
        WindowSelection::Today => Ok(day_window(today, today)),
        WindowSelection::CurrentWeek => {
            let start = start_of_week(today, week_start);
            Ok(day_window(start, start + Duration::days(6)))
        }
        WindowSelection::PreviousWeek => {
            let start = start_of_week(today - Duration::days(7), week_start);
            Ok(day_window(start, start + Duration::days(6)))
        }
        WindowSelection::Range { from, to } => {
            let from = NaiveDate::parse_from_str(from, "%Y-%m-%d").map_err(|_| ReportError::TimeParse(from.clone()))?;
            let to = NaiveDate::parse_from_str(to, "%Y-%m-%d").map_err(|_| ReportError::TimeParse(to.clone()))?;
            Ok(day_window(from, to))
        }
    }
}

/// Runs the full pipeline for one window and returns the consolidated
/// report.
pub fn generate(entries: &mut Entries, config: &ReportConfig, window: ReportWindow) -> Result<Report> {
    let distinct = entries.distinct_in_window(&window)?;
    if distinct.is_empty() {
        return Err(ReportError::EmptyWindow.into());
    }
    msg_debug!(format!("{} distinct entries in window", distinct.len()));

    let durations = derive_durations(&distinct)?;

    let uids: Vec<i64> = distinct.iter().map(|event| event.uid).collect();
    let rows = entries.rows_for_uids(&uids)?;
    msg_debug!(format!("{} joined rows fetched", rows.len()));

    let granularity = config.round_to_minutes;
    Ok(Report {
        totals: consolidate::totals(&rows, &durations, granularity),
        by_project: consolidate::by_project(&rows, &durations, granularity),
        by_task: consolidate::by_task(&rows, &durations, granularity),
        by_entry: consolidate::by_entry(&rows, &durations, granularity)?,
        by_day: consolidate::by_day(&rows, &durations, granularity)?,
        window,
    })
}
