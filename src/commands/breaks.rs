//! Records break time.
//!
//! Break entries are kept out of the working-time total and reported in a
//! separate bucket.

use crate::db::entries::Entries;
use crate::libs::entry::{self, Entry, BREAK, UNKNOWN_UID};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct BreakArgs {
    /// Record at this date/time instead of now
    #[arg(long)]
    at: Option<String>,
    /// A note associated with this entry
    #[arg(long)]
    note: Option<String>,
}

pub fn cmd(args: BreakArgs) -> Result<()> {
    let now = Local::now();
    let break_time = match &args.at {
        Some(at) => entry::parse_timestamp(at, now)?,
        None => now,
    };

    let stamp = entry::format_timestamp(&break_time);
    let entry = Entry::new(UNKNOWN_UID, BREAK, args.note.as_deref().unwrap_or(""), &stamp);
    Entries::new()?.insert(&entry)?;
    msg_print!(Message::BreakRecorded(stamp));
    Ok(())
}
