//! Interactive amendment of an entry.
//!
//! By default the last entry is amended; `--today` offers a pick list of
//! today's entries instead. Only project, note and timestamp can change —
//! properties are never touched by an amend. Nothing is written until the
//! old-versus-new preview is confirmed.

use crate::db::entries::Entries;
use crate::libs::entry::{self, Entry};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct AmendArgs {
    /// Choose from all of today's entries instead of the last one
    #[arg(long)]
    today: bool,
}

pub fn cmd(args: AmendArgs) -> Result<()> {
    let mut entries = Entries::new()?;
    let theme = ColorfulTheme::default();

    let target = if args.today {
        let today_entries = entries.fetch_day(Local::now().date_naive())?;
        if today_entries.is_empty() {
            msg_print!(Message::NoEntriesForToday);
            return Ok(());
        }
        let items: Vec<String> = today_entries.iter().map(Entry::summary).collect();
        let index = Select::with_theme(&theme)
            .with_prompt(Message::SelectEntryToAmend.to_string())
            .items(&items)
            .default(0)
            .interact()?;
        today_entries[index].clone()
    } else {
        match entries.fetch_last()? {
            Some(entry) => entry,
            None => {
                msg_print!(Message::NoEntriesRecorded);
                return Ok(());
            }
        }
    };

    msg_print!(Message::AmendingEntry(target.summary()), true);

    let project: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptAmendProject.to_string())
        .default(target.project.clone())
        .interact_text()?;
    let note: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptAmendNote.to_string())
        .allow_empty(true)
        .default(target.note.clone())
        .interact_text()?;
    let timestamp_input: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptAmendDatetime.to_string())
        .default(target.timestamp.clone())
        .interact_text()?;

    let timestamp = entry::parse_timestamp(&timestamp_input, Local::now())
        .map_err(|_| msg_error_anyhow!(Message::InvalidTimestampInput(timestamp_input.clone())))?;
    let stamp = entry::format_timestamp(&timestamp);

    println!();
    View::amend_preview(&target, &project, &note, &stamp);

    let confirmed = Confirm::with_theme(&theme)
        .with_prompt(Message::ConfirmAmend.to_string())
        .default(false)
        .interact()?;

    if confirmed {
        entries.update(target.uid, &project, &note, &stamp)?;
        msg_print!(Message::EntryAmended);
    } else {
        msg_print!(Message::EntryNotAmended);
    }
    Ok(())
}
