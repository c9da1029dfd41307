//! Repository for the entry/property table pair.
//!
//! `entry` holds one row per recorded activity switch; `property` holds its
//! name/value pairs (tasks, urls) with a cascading foreign key. Timestamps
//! are stored as RFC 3339 text with the local offset, so the window queries
//! compare local times lexicographically — the same storage model the data
//! originated with.

use super::db::Db;
use crate::libs::entry::Entry;
use crate::libs::intervals::DistinctEvent;
use crate::libs::report::ReportWindow;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const STORE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const SCHEMA_ENTRY: &str = "CREATE TABLE IF NOT EXISTS entry (
    uid INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    project TEXT(128) NOT NULL,
    note TEXT(128),
    entry_datetime TEXT NOT NULL
);";
const SCHEMA_PROPERTY: &str = "CREATE TABLE IF NOT EXISTS property (
    entry_uid INTEGER NOT NULL,
    name TEXT(128) NOT NULL,
    value TEXT(128) NOT NULL,
    CONSTRAINT property_FK FOREIGN KEY (entry_uid) REFERENCES entry(uid) ON DELETE CASCADE
);";
const INSERT_ENTRY: &str = "INSERT INTO entry (project, note, entry_datetime) VALUES (?1, ?2, ?3)";
const INSERT_PROPERTY: &str = "INSERT INTO property (entry_uid, name, value) VALUES (?1, ?2, ?3)";
const SELECT_DISTINCT_IN_WINDOW: &str = "SELECT DISTINCT e.uid, e.project, e.entry_datetime FROM entry e \
    WHERE e.entry_datetime BETWEEN ?1 AND ?2 ORDER BY e.entry_datetime, e.uid";
const SELECT_ROWS_FOR_UIDS: &str = "SELECT e.uid, e.project, e.note, e.entry_datetime, p.name, p.value FROM entry e \
    LEFT OUTER JOIN property p ON p.entry_uid = e.uid WHERE e.uid IN ({}) ORDER BY e.entry_datetime, e.uid";
const SELECT_ROWS_FOR_WINDOW: &str = "SELECT e.uid, e.project, e.note, e.entry_datetime, p.name, p.value FROM entry e \
    LEFT OUTER JOIN property p ON p.entry_uid = e.uid WHERE e.entry_datetime BETWEEN ?1 AND ?2 ORDER BY e.entry_datetime, e.uid";
const SELECT_LAST_UID: &str = "SELECT uid FROM entry ORDER BY entry_datetime DESC LIMIT 1";
const SELECT_FIRST_UID: &str = "SELECT uid FROM entry ORDER BY entry_datetime LIMIT 1";
const SELECT_COUNT: &str = "SELECT COUNT(*) FROM entry";
const UPDATE_ENTRY: &str = "UPDATE entry SET project = ?1, note = ?2, entry_datetime = ?3 WHERE uid = ?4";
const DELETE_ALL: &str = "DELETE FROM entry";
const DELETE_OTHER_YEARS: &str = "DELETE FROM entry WHERE strftime('%Y', entry_datetime) != ?1";

/// One row of the entry/property join. An entry with no properties yields a
/// single row with null property fields.
#[derive(Debug, Clone)]
pub struct EntryRow {
    pub uid: i64,
    pub project: String,
    pub note: Option<String>,
    pub entry_datetime: String,
    pub name: Option<String>,
    pub value: Option<String>,
}

pub struct Entries {
    pub conn: Connection,
}

impl Entries {
    pub fn new() -> Result<Entries> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_ENTRY, [])?;
        db.conn.execute(SCHEMA_PROPERTY, [])?;

        Ok(Entries { conn: db.conn })
    }

    /// Writes an entry and its properties in one transaction and returns
    /// the assigned uid.
    pub fn insert(&mut self, entry: &Entry) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(INSERT_ENTRY, params![entry.project, entry.note, entry.timestamp])?;
        let uid = tx.last_insert_rowid();
        for property in &entry.properties {
            tx.execute(INSERT_PROPERTY, params![uid, property.name, property.value])?;
        }
        tx.commit()?;

        Ok(uid)
    }

    /// Distinct `(uid, project, timestamp)` tuples in the window, ascending
    /// by timestamp with uid as the tiebreaker.
    pub fn distinct_in_window(&mut self, window: &ReportWindow) -> Result<Vec<DistinctEvent>> {
        let start = window.start.format(STORE_DATETIME_FORMAT).to_string();
        let end = window.end.format(STORE_DATETIME_FORMAT).to_string();

        let mut stmt = self.conn.prepare(SELECT_DISTINCT_IN_WINDOW)?;
        let events = stmt
            .query_map(params![start, end], |row| {
                Ok(DistinctEvent {
                    uid: row.get(0)?,
                    project: row.get(1)?,
                    timestamp: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(events)
    }

    /// Full entry+property rows for a set of uids, one row per property.
    pub fn rows_for_uids(&mut self, uids: &[i64]) -> Result<Vec<EntryRow>> {
        if uids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = uids.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
        let sql = SELECT_ROWS_FOR_UIDS.replace("{}", &placeholders);

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(uids.iter()), Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// All entries recorded on a calendar day, with properties assembled.
    pub fn fetch_day(&mut self, date: NaiveDate) -> Result<Vec<Entry>> {
        let start = format!("{}T00:00:00", date.format("%Y-%m-%d"));
        let end = format!("{}T23:59:59", date.format("%Y-%m-%d"));

        let mut stmt = self.conn.prepare(SELECT_ROWS_FOR_WINDOW)?;
        let rows = stmt
            .query_map(params![start, end], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Self::assemble(&rows))
    }

    pub fn fetch_last(&mut self) -> Result<Option<Entry>> {
        let uid: Option<i64> = self.conn.query_row(SELECT_LAST_UID, [], |row| row.get(0)).optional()?;
        match uid {
            Some(uid) => self.fetch_by_uid(uid),
            None => Ok(None),
        }
    }

    pub fn fetch_first(&mut self) -> Result<Option<Entry>> {
        let uid: Option<i64> = self.conn.query_row(SELECT_FIRST_UID, [], |row| row.get(0)).optional()?;
        match uid {
            Some(uid) => self.fetch_by_uid(uid),
            None => Ok(None),
        }
    }

    pub fn fetch_by_uid(&mut self, uid: i64) -> Result<Option<Entry>> {
        let rows = self.rows_for_uids(&[uid])?;
        Ok(Self::assemble(&rows).into_iter().next())
    }

    pub fn count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(SELECT_COUNT, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Updates project, note and timestamp of one entry. Properties are
    /// left untouched.
    pub fn update(&mut self, uid: i64, project: &str, note: &str, entry_datetime: &str) -> Result<()> {
        self.conn.execute(UPDATE_ENTRY, params![project, note, entry_datetime, uid])?;
        Ok(())
    }

    pub fn purge_all(&mut self) -> Result<()> {
        self.conn.execute(DELETE_ALL, [])?;
        Ok(())
    }

    /// Deletes every entry recorded outside the given year.
    pub fn purge_other_years(&mut self, year: i32) -> Result<()> {
        self.conn.execute(DELETE_OTHER_YEARS, params![format!("{:04}", year)])?;
        Ok(())
    }

    fn map_row(row: &Row) -> rusqlite::Result<EntryRow> {
        Ok(EntryRow {
            uid: row.get(0)?,
            project: row.get(1)?,
            note: row.get(2)?,
            entry_datetime: row.get(3)?,
            name: row.get(4)?,
            value: row.get(5)?,
        })
    }

    /// Folds ordered join rows into entries with their properties attached.
    fn assemble(rows: &[EntryRow]) -> Vec<Entry> {
        let mut entries: Vec<Entry> = Vec::new();
        for row in rows {
            if entries.last().map(|e| e.uid) != Some(row.uid) {
                entries.push(Entry::new(row.uid, &row.project, row.note.as_deref().unwrap_or(""), &row.entry_datetime));
            }
            if let (Some(name), Some(value), Some(entry)) = (&row.name, &row.value, entries.last_mut()) {
                entry.add_property(name, value);
            }
        }
        entries
    }
}
