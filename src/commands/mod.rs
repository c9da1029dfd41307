pub mod add;
pub mod amend;
pub mod breaks;
pub mod hello;
pub mod init;
pub mod purge;
pub mod report;
pub mod show;
pub mod stretch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a completed project+task entry")]
    Add(add::AddArgs),
    #[command(about = "Mark the start of a tracking day")]
    Hello(hello::HelloArgs),
    #[command(name = "break", about = "Record break time")]
    Break(breaks::BreakArgs),
    #[command(about = "Stretch the latest entry to now")]
    Stretch(stretch::StretchArgs),
    #[command(about = "Amend an entry")]
    Amend(amend::AmendArgs),
    #[command(about = "Generate a report")]
    Report(report::ReportArgs),
    #[command(about = "Show various information")]
    Show(show::ShowArgs),
    #[command(about = "Purge entries from the database")]
    Purge(purge::PurgeArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Hello(args) => hello::cmd(args),
            Commands::Break(args) => breaks::cmd(args),
            Commands::Stretch(args) => stretch::cmd(args),
            Commands::Amend(args) => amend::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Purge(args) => purge::cmd(args),
        }
    }
}
