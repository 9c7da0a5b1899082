use agendir_core::account::Account;
use agendir_core::agenda::CalendarSelection;
use agendir_core::agendir::Agendir;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(agendir: &Agendir, account: &Account) -> Result<()> {
    if account.calendars.is_empty() {
        println!("{}", "No calendars in the current snapshot".dimmed());
        return Ok(());
    }

    let default = agendir.default_selection();

    for calendar in &account.calendars {
        let count = calendar.events.len();
        let events = format!("{} {}", count, if count == 1 { "event" } else { "events" });

        let is_default =
            matches!(&default, CalendarSelection::Calendar(id) if *id == calendar.id);
        let marker = if is_default { " default" } else { "" };

        println!(
            "{} {}{}",
            calendar.render(),
            events.dimmed(),
            marker.green()
        );
    }

    Ok(())
}
