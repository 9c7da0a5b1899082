use agendir_core::agendir::Agendir;
use agendir_core::sample::sample_account;
use anyhow::Result;

pub fn run(agendir: &Agendir) -> Result<()> {
    let account = sample_account();
    agendir.snapshot().save(&account)?;

    println!(
        "Wrote a sample account ({} calendars, {} events) to {}",
        account.calendars.len(),
        account.event_count(),
        agendir.data_path().display()
    );

    Ok(())
}
