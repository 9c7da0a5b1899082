use agendir_core::agendir::Agendir;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(mut agendir: Agendir, calendar: &str) -> Result<()> {
    // An id the snapshot doesn't know is allowed (it yields an empty
    // agenda), but worth flagging
    if calendar != "all" {
        let store = agendir.snapshot();
        if store.exists() && store.load()?.calendar(calendar).is_none() {
            println!(
                "{}",
                format!(
                    "Calendar '{}' is not in the current snapshot; the agenda will be empty until it appears",
                    calendar
                )
                .yellow()
            );
        }
    }

    agendir.set_default_calendar(calendar)?;

    if calendar == "all" {
        println!("Showing all calendars by default");
    } else {
        println!("Showing calendar '{}' by default", calendar);
    }

    Ok(())
}
