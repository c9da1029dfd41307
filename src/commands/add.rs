//! Records a completed activity: project, task(s), optional note.
//!
//! The argument takes the `project+task[+task...]` form; alternatively
//! `--favorite N` pulls a preconfigured combination (and its optional url)
//! from the configuration.

use crate::db::entries::Entries;
use crate::libs::config::Config;
use crate::libs::entry::{self, Entry, UNKNOWN_UID};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Project and task(s), e.g. 'general+training'
    project_task: Option<String>,
    /// Record at this date/time instead of now
    #[arg(long)]
    at: Option<String>,
    /// A note associated with this entry
    #[arg(long)]
    note: Option<String>,
    /// Use the favorite with this index from the configuration
    #[arg(long)]
    favorite: Option<usize>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let now = Local::now();
    let add_time = match &args.at {
        Some(at) => entry::parse_timestamp(at, now)?,
        None => now,
    };

    let (project_task, url) = match (&args.project_task, args.favorite) {
        (Some(project_task), _) => (project_task.clone(), None),
        (None, Some(index)) => {
            let config = Config::read()?;
            match config.favorites.get(index) {
                Some(favorite) => (favorite.favorite.clone(), favorite.url.clone()),
                None => msg_bail_anyhow!(Message::FavoriteNotFound(index)),
            }
        }
        (None, None) => msg_bail_anyhow!(Message::MalformedProjectTask),
    };

    let (project, tasks) = match entry::split_project_task(&project_task) {
        Some(parsed) => parsed,
        None => msg_bail_anyhow!(Message::MalformedProjectTask),
    };

    let mut new_entry = Entry::new(
        UNKNOWN_UID,
        &project,
        args.note.as_deref().unwrap_or(""),
        &entry::format_timestamp(&add_time),
    );
    for task in &tasks {
        new_entry.add_property(entry::TASK, task);
    }
    if let Some(url) = &url {
        new_entry.add_property(entry::URL, url);
    }

    msg_print!(Message::EntryAdded(new_entry.summary()));
    Entries::new()?.insert(&new_entry)?;
    Ok(())
}
