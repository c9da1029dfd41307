//! Terminal rendering of report views.
//!
//! The engine produces plain row sets; this is the only module that turns
//! them into tables. Durations are rendered here with the formatter so
//! every view and total goes through the same human formatting.

use crate::libs::config::Favorite;
use crate::libs::consolidate::{DayView, EntryView, ProjectView, TaskView, Totals};
use crate::libs::entry::{Entry, EntryKind};
use crate::libs::formatter::{to_hms, to_human};
use crate::libs::messages::Message;
use crate::msg_print;
use prettytable::{row, Table};

pub struct View {}

impl View {
    fn section(title: &str) {
        println!("\n--------------------  {}  --------------------\n", title);
    }

    pub fn totals(totals: &Totals, round_to_minutes: i64) {
        println!();
        msg_print!(Message::TotalWorkTime(
            to_human(totals.work_seconds, round_to_minutes),
            to_hms(totals.work_seconds)
        ));
        msg_print!(Message::TotalBreakTime(to_human(totals.break_seconds, round_to_minutes)));
    }

    pub fn by_project(views: &[ProjectView], round_to_minutes: i64) {
        Self::section("By Project");
        let mut table = Table::new();
        table.add_row(row!["Duration", "Project", "Task(s)"]);
        for view in views {
            table.add_row(row![to_human(view.seconds, round_to_minutes), view.project, view.tasks]);
        }
        table.printstd();
    }

    pub fn by_task(views: &[TaskView], round_to_minutes: i64) {
        Self::section("By Task");
        let mut table = Table::new();
        table.add_row(row!["Duration", "Task", "Project(s)"]);
        for view in views {
            table.add_row(row![to_human(view.seconds, round_to_minutes), view.task, view.projects]);
        }
        table.printstd();
    }

    pub fn by_entry(views: &[EntryView], round_to_minutes: i64) {
        Self::section("By Entry");
        let mut table = Table::new();
        table.add_row(row!["Duration", "Date", "Start-End", "Project", "Task(s)", "Note"]);
        for view in views {
            table.add_row(row![
                to_human(view.seconds, round_to_minutes),
                view.date,
                view.span,
                view.project,
                view.tasks,
                view.note
            ]);
        }
        table.printstd();
    }

    pub fn by_day(views: &[DayView], round_to_minutes: i64) {
        Self::section("By Day");
        let mut table = Table::new();
        table.add_row(row!["Date", "Duration", "Project", "Task(s)"]);
        for view in views {
            table.add_row(row![view.date, to_human(view.seconds, round_to_minutes), view.project, view.tasks]);
        }
        table.printstd();
    }

    pub fn last_entry(entry: &Entry) {
        println!("DateTime: {}", entry.timestamp);
        println!(" Project: {}", entry.project);
        if entry.kind() == EntryKind::Work {
            println!("   Tasks: {}", entry.tasks_as_string());
            if !entry.note.is_empty() {
                println!("    Note: {}", entry.note);
            }
        }
    }

    /// Old-versus-new comparison shown before an amend is committed.
    pub fn amend_preview(entry: &Entry, project: &str, note: &str, timestamp: &str) {
        let mut table = Table::new();
        table.add_row(row!["", "Old", "New"]);
        table.add_row(row!["Project", entry.project, project]);
        table.add_row(row!["Note", entry.note, note]);
        table.add_row(row!["Datetime", entry.timestamp, timestamp]);
        table.printstd();
    }

    pub fn favorites(favorites: &[Favorite]) {
        let mut table = Table::new();
        table.add_row(row!["Index", "Favorite", "Url"]);
        for (index, favorite) in favorites.iter().enumerate() {
            table.add_row(row![index, favorite.favorite, favorite.url.as_deref().unwrap_or("")]);
        }
        table.printstd();
    }

    pub fn statistics(first: &Entry, last: &Entry, count: i64, total_duration: &str) {
        let mut table = Table::new();
        table.add_row(row!["Statistic", "Value"]);
        table.add_row(row!["First Entry", first.summary()]);
        table.add_row(row!["Last Entry", last.summary()]);
        table.add_row(row!["Total Records", count]);
        table.add_row(row!["Total Duration", total_duration]);
        table.printstd();
    }
}
