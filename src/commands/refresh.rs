use agendir_core::agendir::Agendir;
use agendir_core::source::Source;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::utils::tui::create_spinner;

pub async fn run(agendir: &Agendir, source: Option<&str>) -> Result<()> {
    let source = match source {
        Some(name) => Source::from_name(name),
        None => agendir.default_source().ok_or_else(|| {
            anyhow::anyhow!(
                "No source given. Pass one with --source or set `source` in the config file"
            )
        })?,
    };

    let store = agendir.snapshot();

    let spinner = create_spinner(format!("Fetching account from {}", source.name()));
    let result = source.fetch_account().await;
    spinner.finish_and_clear();

    match result {
        Ok(account) => {
            store.save(&account)?;
            println!(
                "Fetched {} calendars, {} events",
                account.calendars.len(),
                account.event_count()
            );
            Ok(())
        }
        Err(e) => {
            println!("{}", e.to_string().red());

            // The old snapshot stays in place; keep working from it
            if store.exists() {
                println!("{}", "Keeping the previous snapshot".dimmed());
                Ok(())
            } else {
                Err(e.into())
            }
        }
    }
}
