//! Application configuration management.
//!
//! Settings live in a JSON file in the platform data directory resolved by
//! [`DataStorage`]. Reading falls back to defaults when no file exists yet,
//! so every command works on a fresh machine; `ttrack init` runs the
//! interactive wizard and persists the result.
//!
//! Three settings matter to reporting: the rounding granularity in minutes,
//! the day the reporting week starts on, and the list of favorites (reusable
//! `project+task` shortcuts, optionally carrying a url property).

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::report::parse_week_start;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A reusable project+task shortcut selectable with `add --favorite N`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Favorite {
    /// The `project+task[+task...]` string recorded when this favorite is used.
    pub favorite: String,
    /// Optional url attached to entries created from this favorite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Day of week the reporting week starts on, as an English day name.
    #[serde(default = "default_week_start")]
    pub week_start: String,
    /// Rounding granularity in minutes; zero disables rounding.
    #[serde(default = "default_round_to_minutes")]
    pub round_to_minutes: i64,
    #[serde(default)]
    pub favorites: Vec<Favorite>,
}

fn default_week_start() -> String {
    "Sunday".to_string()
}

fn default_round_to_minutes() -> i64 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Config {
            week_start: default_week_start(),
            round_to_minutes: default_round_to_minutes(),
            favorites: Vec::new(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive configuration wizard. Favorites are edited by hand in
    /// the config file; the wizard only covers the reporting settings.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        let theme = ColorfulTheme::default();

        let week_start: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptWeekStart.to_string())
            .default(current.week_start.clone())
            .validate_with(|input: &String| parse_week_start(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;

        let round_to_minutes: i64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptRoundToMinutes.to_string())
            .default(current.round_to_minutes)
            .interact_text()?;

        Ok(Config {
            week_start,
            round_to_minutes,
            favorites: current.favorites,
        })
    }
}
