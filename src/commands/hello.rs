//! Marks the start of a tracking day.
//!
//! The marker itself never appears in reports; it only anchors the first
//! interval of the day so the first real entry gets a defined duration.

use crate::db::entries::Entries;
use crate::libs::entry::{self, Entry, HELLO, UNKNOWN_UID};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct HelloArgs {
    /// Record at this date/time instead of now
    #[arg(long)]
    at: Option<String>,
}

pub fn cmd(args: HelloArgs) -> Result<()> {
    let now = Local::now();
    let hello_time = match &args.at {
        Some(at) => entry::parse_timestamp(at, now)?,
        None => now,
    };

    let stamp = entry::format_timestamp(&hello_time);
    let marker = Entry::new(UNKNOWN_UID, HELLO, "", &stamp);
    Entries::new()?.insert(&marker)?;
    msg_print!(Message::DayMarkerRecorded(stamp));
    Ok(())
}
