//! Stretches the latest entry to now (or a supplied time).
//!
//! Useful when an activity simply continued: instead of adding a new entry,
//! the last one's timestamp moves forward so the next gap computation
//! attributes the elapsed time to it.

use crate::db::entries::Entries;
use crate::libs::entry;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct StretchArgs {
    /// Stretch to this date/time instead of now
    #[arg(long)]
    at: Option<String>,
}

pub fn cmd(args: StretchArgs) -> Result<()> {
    let now = Local::now();
    let stretch_time = match &args.at {
        Some(at) => entry::parse_timestamp(at, now)?,
        None => now,
    };

    let mut entries = Entries::new()?;
    let last = match entries.fetch_last()? {
        Some(entry) => entry,
        None => {
            msg_print!(Message::NoEntriesRecorded);
            return Ok(());
        }
    };

    let stamp = entry::format_timestamp(&stretch_time);
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmStretch(last.summary(), stamp.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        entries.update(last.uid, &last.project, &last.note, &stamp)?;
        msg_print!(Message::EntryStretched);
    } else {
        msg_print!(Message::EntryNotStretched);
    }
    Ok(())
}
