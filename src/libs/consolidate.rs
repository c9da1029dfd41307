//! Consolidation passes over derived durations.
//!
//! Four independent views are folded from the same `(durations, rows)`
//! pair: by entry, by project, by task and by day, plus the work/break
//! totals. Every pass skips day-marker rows, rounds each event's raw
//! duration before summing, and counts an event's duration at most once
//! per group even though the entry/property join yields one row per
//! property. Grouping uses `BTreeMap` throughout so row order is a stable,
//! documented contract (entry uid, project string, task string, date then
//! project) rather than incidental map order.

use crate::db::entries::EntryRow;
use crate::libs::entry::{Entry, EntryKind, TASK};
use crate::libs::error::ReportError;
use crate::libs::intervals::EventDuration;
use crate::libs::rounding::round_seconds;
use chrono::{DateTime, Duration};
use std::collections::{BTreeMap, HashMap};

/// One row of the by-entry view.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub uid: i64,
    /// Rounded duration in seconds.
    pub seconds: i64,
    pub date: String,
    /// Clock range, e.g. "8:30am to 9:45am".
    pub span: String,
    pub project: String,
    pub tasks: String,
    pub note: String,
}

/// One row of the by-project view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectView {
    pub seconds: i64,
    pub project: String,
    pub tasks: String,
}

/// One row of the by-task view.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub seconds: i64,
    pub task: String,
    pub projects: String,
}

/// One row of the by-day view: a (date, project) cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub date: String,
    pub seconds: i64,
    pub project: String,
    pub tasks: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub work_seconds: i64,
    pub break_seconds: i64,
}

fn raw_duration(durations: &HashMap<i64, EventDuration>, uid: i64) -> i64 {
    durations.get(&uid).map(|d| d.seconds).unwrap_or(0)
}

fn parse_row_instant(raw: &str) -> Result<DateTime<chrono::FixedOffset>, ReportError> {
    DateTime::parse_from_rfc3339(raw).map_err(|_| ReportError::TimeParse(raw.to_string()))
}

/// One row per entry, ordered by ascending uid.
///
/// The clock range runs from `timestamp - raw duration` to `timestamp`;
/// the displayed duration is the rounded one.
pub fn by_entry(rows: &[EntryRow], durations: &HashMap<i64, EventDuration>, round_to_minutes: i64) -> Result<Vec<EntryView>, ReportError> {
    let mut consolidated: BTreeMap<i64, Entry> = BTreeMap::new();
    for row in rows {
        let entry = consolidated.entry(row.uid).or_insert_with(|| {
            let mut entry = Entry::new(row.uid, &row.project, row.note.as_deref().unwrap_or(""), &row.entry_datetime);
            entry.duration = raw_duration(durations, row.uid);
            entry
        });
        if let (Some(name), Some(value)) = (&row.name, &row.value) {
            entry.add_property(name, value);
        }
    }

    let mut views = Vec::with_capacity(consolidated.len());
    for entry in consolidated.into_values() {
        if entry.kind() == EntryKind::DayMarker {
            continue;
        }
        let end = parse_row_instant(&entry.timestamp)?;
        let start = end - Duration::seconds(entry.duration);
        views.push(EntryView {
            uid: entry.uid,
            seconds: round_seconds(entry.duration, round_to_minutes),
            date: end.format("%Y-%m-%d").to_string(),
            span: format!("{} to {}", start.format("%-I:%M%P"), end.format("%-I:%M%P")),
            project: entry.project.clone(),
            tasks: entry.tasks_as_string(),
            note: entry.note.clone(),
        });
    }
    Ok(views)
}

/// Grouped by project (case-insensitive), ordered by project string.
pub fn by_project(rows: &[EntryRow], durations: &HashMap<i64, EventDuration>, round_to_minutes: i64) -> Vec<ProjectView> {
    let mut groups: BTreeMap<String, Entry> = BTreeMap::new();
    for row in rows {
        if EntryKind::of(&row.project) == EntryKind::DayMarker {
            continue;
        }
        let key = row.project.to_lowercase();
        match groups.get_mut(&key) {
            Some(group) => {
                if let (Some(name), Some(value)) = (&row.name, &row.value) {
                    group.add_property(name, value);
                }
                // One duration contribution per distinct uid; the uid field
                // doubles as the last-seen marker.
                if group.uid != row.uid {
                    group.uid = row.uid;
                    group.duration += round_seconds(raw_duration(durations, row.uid), round_to_minutes);
                }
            }
            None => {
                let mut group = Entry::new(row.uid, &row.project, row.note.as_deref().unwrap_or(""), &row.entry_datetime);
                group.duration = round_seconds(raw_duration(durations, row.uid), round_to_minutes);
                if let (Some(name), Some(value)) = (&row.name, &row.value) {
                    group.add_property(name, value);
                }
                groups.insert(key, group);
            }
        }
    }

    groups
        .into_values()
        .map(|group| ProjectView {
            seconds: group.duration,
            project: group.project.clone(),
            tasks: group.tasks_as_string(),
        })
        .collect()
}

struct TaskGroup {
    seconds: i64,
    last_uid: i64,
    projects: Vec<String>,
}

/// Grouped by task value, ordered by task string.
///
/// An entry with several tasks contributes its full duration to each of
/// them; tasks are never fractionally split. Each group also collects the
/// distinct projects the task was logged under, in first-seen order.
pub fn by_task(rows: &[EntryRow], durations: &HashMap<i64, EventDuration>, round_to_minutes: i64) -> Vec<TaskView> {
    let mut groups: BTreeMap<String, TaskGroup> = BTreeMap::new();
    for row in rows {
        if EntryKind::of(&row.project) == EntryKind::DayMarker {
            continue;
        }
        let (name, value) = match (&row.name, &row.value) {
            (Some(name), Some(value)) => (name, value),
            _ => continue,
        };
        if !name.eq_ignore_ascii_case(TASK) {
            continue;
        }
        match groups.get_mut(value.as_str()) {
            Some(group) => {
                if group.last_uid != row.uid {
                    group.last_uid = row.uid;
                    group.seconds += round_seconds(raw_duration(durations, row.uid), round_to_minutes);
                }
                if !group.projects.contains(&row.project) {
                    group.projects.push(row.project.clone());
                }
            }
            None => {
                groups.insert(
                    value.clone(),
                    TaskGroup {
                        seconds: round_seconds(raw_duration(durations, row.uid), round_to_minutes),
                        last_uid: row.uid,
                        projects: vec![row.project.clone()],
                    },
                );
            }
        }
    }

    groups
        .into_iter()
        .map(|(task, group)| TaskView {
            seconds: group.seconds,
            task,
            projects: group.projects.join(", "),
        })
        .collect()
}

/// Two-level grouping: calendar date, then project within the date.
pub fn by_day(rows: &[EntryRow], durations: &HashMap<i64, EventDuration>, round_to_minutes: i64) -> Result<Vec<DayView>, ReportError> {
    let mut days: BTreeMap<String, BTreeMap<String, Entry>> = BTreeMap::new();
    for row in rows {
        if EntryKind::of(&row.project) == EntryKind::DayMarker {
            continue;
        }
        let date = parse_row_instant(&row.entry_datetime)?.format("%Y-%m-%d").to_string();
        let projects = days.entry(date).or_default();
        match projects.get_mut(&row.project) {
            Some(group) => {
                if let (Some(name), Some(value)) = (&row.name, &row.value) {
                    group.add_property(name, value);
                }
                if group.uid != row.uid {
                    group.uid = row.uid;
                    group.duration += round_seconds(raw_duration(durations, row.uid), round_to_minutes);
                }
            }
            None => {
                let mut group = Entry::new(row.uid, &row.project, row.note.as_deref().unwrap_or(""), &row.entry_datetime);
                group.duration = round_seconds(raw_duration(durations, row.uid), round_to_minutes);
                if let (Some(name), Some(value)) = (&row.name, &row.value) {
                    group.add_property(name, value);
                }
                projects.insert(row.project.clone(), group);
            }
        }
    }

    let mut views = Vec::new();
    for (date, projects) in days {
        for (project, group) in projects {
            views.push(DayView {
                date: date.clone(),
                seconds: group.duration,
                project,
                tasks: group.tasks_as_string(),
            });
        }
    }
    Ok(views)
}

/// Work and break totals: one rounded contribution per entry, day markers
/// skipped, breaks bucketed separately from work.
pub fn totals(rows: &[EntryRow], durations: &HashMap<i64, EventDuration>, round_to_minutes: i64) -> Totals {
    let mut totals = Totals::default();
    let mut last_uid = None;
    for row in rows {
        if last_uid == Some(row.uid) {
            continue;
        }
        last_uid = Some(row.uid);
        let rounded = round_seconds(raw_duration(durations, row.uid), round_to_minutes);
        match EntryKind::of(&row.project) {
            EntryKind::DayMarker => {}
            EntryKind::Break => totals.break_seconds += rounded,
            EntryKind::Work => totals.work_seconds += rounded,
        }
    }
    totals
}
