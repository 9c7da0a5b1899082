mod commands;
mod greeting;
mod render;
mod utils;

use agendir_core::account::Account;
use agendir_core::agenda::CalendarSelection;
use agendir_core::agendir::Agendir;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agendir")]
#[command(about = "View your account's agenda, filtered by calendar and grouped by department")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the agenda
    Show {
        /// Only show this calendar (by id, or "all")
        #[arg(short, long)]
        calendar: Option<String>,

        /// Partition the agenda into department sections
        #[arg(short = 'd', long)]
        by_department: bool,
    },
    /// List the calendars in the current snapshot
    Calendars,
    /// Set the default calendar shown by `show` ("all" clears it)
    Select {
        /// Calendar id, or "all"
        calendar: String,
    },
    /// Fetch a fresh account snapshot from a source
    Refresh {
        /// Source to fetch from (e.g. "google")
        #[arg(short, long)]
        source: Option<String>,
    },
    /// Write a sample account snapshot
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let agendir = Agendir::load()?;

    match cli.command {
        Commands::Show {
            calendar,
            by_department,
        } => {
            let account = require_snapshot(&agendir)?;
            let selection = match calendar.as_deref() {
                Some(arg) => CalendarSelection::from_arg(Some(arg)),
                None => agendir.default_selection(),
            };
            let grouped = by_department || agendir.group_by_department();
            commands::show::run(&account, &selection, grouped)
        }
        Commands::Calendars => {
            let account = require_snapshot(&agendir)?;
            commands::calendars::run(&agendir, &account)
        }
        Commands::Select { calendar } => commands::select::run(agendir, &calendar),
        Commands::Refresh { source } => commands::refresh::run(&agendir, source.as_deref()).await,
        Commands::Seed => commands::seed::run(&agendir),
    }
}

fn require_snapshot(agendir: &Agendir) -> Result<Account> {
    let store = agendir.snapshot();

    if !store.exists() {
        anyhow::bail!(
            "No account snapshot found.\n\n\
            Fetch one from a source with:\n  \
            agendir refresh --source <name>\n\n\
            Or try the tool with sample data:\n  \
            agendir seed"
        );
    }

    Ok(store.load()?)
}
