//! Shows configuration favorites and database statistics.

use crate::db::entries::Entries;
use crate::libs::config::Config;
use crate::libs::entry::Entry;
use crate::libs::error::ReportError;
use crate::libs::formatter::to_human;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::DateTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Show favorites
    #[arg(long)]
    favorites: bool,
    /// Show statistics
    #[arg(long)]
    statistics: bool,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    if args.favorites {
        show_favorites()?;
    }
    if args.statistics {
        show_statistics()?;
    }
    Ok(())
}

fn show_favorites() -> Result<()> {
    let config = Config::read()?;
    if config.favorites.is_empty() {
        msg_print!(Message::NoFavoritesConfigured);
        return Ok(());
    }
    msg_print!(Message::FavoritesHeader);
    View::favorites(&config.favorites);
    Ok(())
}

fn show_statistics() -> Result<()> {
    let config = Config::read()?;
    let mut entries = Entries::new()?;

    let (first, last) = match (entries.fetch_first()?, entries.fetch_last()?) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            msg_print!(Message::NoStatisticsAvailable);
            return Ok(());
        }
    };
    let count = entries.count()?;
    let span = span_seconds(&first, &last)?;

    View::statistics(&first, &last, count, &to_human(span, config.round_to_minutes));
    Ok(())
}

fn span_seconds(first: &Entry, last: &Entry) -> Result<i64> {
    let first_ts = DateTime::parse_from_rfc3339(&first.timestamp).map_err(|_| ReportError::TimeParse(first.timestamp.clone()))?;
    let last_ts = DateTime::parse_from_rfc3339(&last.timestamp).map_err(|_| ReportError::TimeParse(last.timestamp.clone()))?;
    Ok((last_ts - first_ts).num_seconds().abs())
}
