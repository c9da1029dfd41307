//! Bulk deletion of entries.
//!
//! The database grows without bound as entries are added; purging keeps it
//! manageable. `--all` asks three times before wiping everything;
//! `--previous-years` keeps only the current year. Property rows go with
//! their entries via the cascade.

use crate::db::entries::Entries;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct PurgeArgs {
    /// Purge ALL entries.  Use with extreme caution!
    #[arg(long)]
    all: bool,
    /// Purge every year's entries except the current year's
    #[arg(long)]
    previous_years: bool,
}

pub fn cmd(args: PurgeArgs) -> Result<()> {
    let mut entries = Entries::new()?;
    let theme = ColorfulTheme::default();

    if args.all {
        let confirmations = [
            Message::ConfirmPurgeAll,
            Message::ConfirmPurgeAllTwice,
            Message::ConfirmPurgeAllFinal,
        ];
        let mut confirmed = true;
        for message in confirmations {
            if !Confirm::with_theme(&theme).with_prompt(message.to_string()).default(false).interact()? {
                confirmed = false;
                break;
            }
        }
        if confirmed {
            entries.purge_all()?;
            msg_print!(Message::AllEntriesPurged);
        } else {
            msg_print!(Message::NothingPurged);
        }
    }

    if args.previous_years {
        let year = Local::now().year();
        let confirmed = Confirm::with_theme(&theme)
            .with_prompt(Message::ConfirmPurgeOtherYears(year).to_string())
            .default(false)
            .interact()?;
        if confirmed {
            entries.purge_other_years(year)?;
            msg_print!(Message::OtherYearsPurged(year));
        } else {
            msg_print!(Message::NothingPurged);
        }
    }

    Ok(())
}
