//! # ttrack - project and task time tracking
//!
//! A command-line utility for tracking the time you spend on projects and
//! the tasks associated with them. You record discrete "I switched activity
//! now" entries; how long each activity lasted is derived afterwards from
//! the gap between consecutive entries.
//!
//! ## Features
//!
//! - **Entry Recording**: Add completed project+task entries, day-start
//!   markers and breaks, with optional notes and timestamps
//! - **Duration Reports**: Consolidated views by day, project, task and
//!   entry, with configurable rounding and work/break totals
//! - **Amendment**: Interactively fix the project, note or timestamp of a
//!   recorded entry
//! - **Favorites**: Reusable project+task shortcuts from the configuration
//! - **Maintenance**: Statistics and bulk purge of old entries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ttrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
