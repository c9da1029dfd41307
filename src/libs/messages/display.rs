//! Display implementation for ttrack application messages.
//!
//! All user-facing text lives in this one match so wording stays consistent
//! and every message variant has exactly one rendering.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::PromptWeekStart => "Day of week your reporting week starts on".to_string(),
            Message::PromptRoundToMinutes => "Round durations to this many minutes (0 disables rounding)".to_string(),

            // === ENTRY MESSAGES ===
            Message::EntryAdded(summary) => format!("Adding {}.", summary),
            Message::DayMarkerRecorded(timestamp) => format!("Day started at {}.", timestamp),
            Message::BreakRecorded(timestamp) => format!("Break recorded at {}.", timestamp),
            Message::MalformedProjectTask => "Malformed project+task.  Expected 'project+task[+task...]'.".to_string(),
            Message::FavoriteNotFound(index) => format!("Favorite [{}] not found in the configuration", index),
            Message::NoFavoritesConfigured => "No favorites found in the configuration".to_string(),
            Message::NoEntriesRecorded => "No entries have been recorded yet".to_string(),

            // === STRETCH MESSAGES ===
            Message::ConfirmStretch(summary, time) => format!("Would you like to stretch {} to {}?", summary, time),
            Message::EntryStretched => "Last entry was stretched.".to_string(),
            Message::EntryNotStretched => "Last entry was NOT stretched.".to_string(),

            // === AMEND MESSAGES ===
            Message::AmendingEntry(summary) => format!("Amending {}", summary),
            Message::SelectEntryToAmend => "Select the entry you would like to amend".to_string(),
            Message::PromptAmendProject => "Project".to_string(),
            Message::PromptAmendNote => "Note".to_string(),
            Message::PromptAmendDatetime => "Date/time".to_string(),
            Message::ConfirmAmend => "Commit these changes?".to_string(),
            Message::EntryAmended => "Entry amended.".to_string(),
            Message::EntryNotAmended => "Entry not amended.".to_string(),
            Message::NoEntriesForToday => "No entries recorded for today".to_string(),
            Message::InvalidTimestampInput(input) => format!("'{}' is not a recognized date/time", input),

            // === REPORT MESSAGES ===
            Message::ReportWindowHeader {
                start,
                start_week,
                end,
                end_week,
            } => format!("Report from {} (week {}) to {} (week {})", start, start_week, end, end_week),
            Message::TotalWorkTime(human, hms) => format!("Total Working Time: {} ({})", human, hms),
            Message::TotalBreakTime(human) => format!("  Total Break Time: {}", human),

            // === PURGE MESSAGES ===
            Message::ConfirmPurgeAll => "Are you sure you want to purge ALL the entries from your database?".to_string(),
            Message::ConfirmPurgeAllTwice => "WARNING: Are you REALLY sure you want to purge ALL the entries from your database?".to_string(),
            Message::ConfirmPurgeAllFinal => "LAST WARNING: Are you REALLY REALLY sure you want to purge ALL the entries from your database?".to_string(),
            Message::AllEntriesPurged => "All entries purged.".to_string(),
            Message::ConfirmPurgeOtherYears(year) => format!("Are you sure you want to purge all entries outside {} from the database?", year),
            Message::OtherYearsPurged(year) => format!("All entries outside {} have been purged.", year),
            Message::NothingPurged => "Nothing purged.".to_string(),

            // === SHOW MESSAGES ===
            Message::FavoritesHeader => "Favorites found in the configuration:".to_string(),
            Message::NoStatisticsAvailable => "No entries to compute statistics from".to_string(),
        };
        write!(f, "{}", message)
    }
}
