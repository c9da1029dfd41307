//! Entry and property models shared by the commands and the report engine.
//!
//! An entry is one "I switched activity now" record: a project, an optional
//! note, a timestamp, and a set of name/value properties (tasks, urls).
//! Two reserved project values carry report-time meaning and are classified
//! once into an [`EntryKind`] instead of being string-compared at every use
//! site: `***hello` marks the start of a tracked day and `***break` marks
//! idle time.

use crate::libs::error::ReportError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone};

pub const HELLO: &str = "***hello";
pub const BREAK: &str = "***break";
pub const TASK: &str = "task";
pub const URL: &str = "url";
pub const TASK_DELIMITER: char = '+';

/// Uid placeholder for entries that have not been written to the store yet.
pub const UNKNOWN_UID: i64 = -1;

/// Report-time classification of an entry, derived from its project value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular project entry; counts toward working time.
    Work,
    /// A `***break` entry; reported separately from working time.
    Break,
    /// A `***hello` day-start marker; anchors the first interval of a day
    /// and is excluded from every report view.
    DayMarker,
}

impl EntryKind {
    pub fn of(project: &str) -> Self {
        if project.eq_ignore_ascii_case(HELLO) {
            EntryKind::DayMarker
        } else if project.eq_ignore_ascii_case(BREAK) {
            EntryKind::Break
        } else {
            EntryKind::Work
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub uid: i64,
    pub project: String,
    pub note: String,
    /// RFC 3339 timestamp string exactly as stored.
    pub timestamp: String,
    /// Derived gap to the predecessor entry, in seconds. Zero until the
    /// interval derivation has run.
    pub duration: i64,
    pub properties: Vec<Property>,
}

impl Entry {
    pub fn new(uid: i64, project: &str, note: &str, timestamp: &str) -> Self {
        Entry {
            uid,
            project: project.to_string(),
            note: note.to_string(),
            timestamp: timestamp.to_string(),
            duration: 0,
            properties: Vec::new(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        EntryKind::of(&self.project)
    }

    /// Attaches a property, deduplicated by exact `(name, value)` match.
    pub fn add_property(&mut self, name: &str, value: &str) {
        let exists = self.properties.iter().any(|p| p.name == name && p.value == value);
        if !exists {
            self.properties.push(Property {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    /// Comma-joined list of this entry's `task` property values.
    pub fn tasks_as_string(&self) -> String {
        self.properties
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(TASK))
            .map(|p| p.value.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One-line description used in prompts and the last-entry display.
    pub fn summary(&self) -> String {
        match self.kind() {
            EntryKind::Break => format!("Break Time Date[{}]", self.timestamp),
            EntryKind::DayMarker => format!("Start of day Date[{}]", self.timestamp),
            EntryKind::Work => {
                let mut result = format!("Project[{}] Task[{}]", self.project, self.tasks_as_string());
                if !self.note.is_empty() {
                    result.push_str(&format!(" Note[{}]", self.note));
                }
                result.push_str(&format!(" Date[{}]", self.timestamp));
                result
            }
        }
    }
}

/// Splits a `project+task[+task...]` argument into its pieces.
///
/// At least one task is required; a bare project is malformed.
pub fn split_project_task(input: &str) -> Option<(String, Vec<String>)> {
    let mut pieces = input.split(TASK_DELIMITER);
    let project = pieces.next()?.to_string();
    let tasks: Vec<String> = pieces.map(str::to_string).collect();
    if project.is_empty() || tasks.is_empty() || tasks.iter().any(String::is_empty) {
        return None;
    }
    Some((project, tasks))
}

/// Serializes an instant the way the store expects it: RFC 3339 with the
/// local offset and whole seconds.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Parses a user-supplied date/time in the accepted forms: RFC 3339,
/// `YYYY-MM-DD HH:MM[:SS]`, a bare `YYYY-MM-DD` (midnight), or a bare
/// `HH:MM` (today).
pub fn parse_timestamp(input: &str, now: DateTime<Local>) -> Result<DateTime<Local>, ReportError> {
    let input = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Local));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return local_from_naive(naive, input);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return local_from_naive(date.and_time(NaiveTime::MIN), input);
    }
    if let Ok(time) = NaiveTime::parse_from_str(input, "%H:%M") {
        return local_from_naive(now.date_naive().and_time(time), input);
    }
    Err(ReportError::TimeParse(input.to_string()))
}

fn local_from_naive(naive: NaiveDateTime, input: &str) -> Result<DateTime<Local>, ReportError> {
    // An ambiguous or nonexistent local time (DST transition) is rejected
    // rather than silently resolved.
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| ReportError::TimeParse(input.to_string()))
}
