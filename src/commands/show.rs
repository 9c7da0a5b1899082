use agendir_core::account::Account;
use agendir_core::agenda::{Agenda, AgendaItem, CalendarSelection, Section, build_agenda, select_events};
use anyhow::Result;
use chrono::Timelike;
use owo_colors::OwoColorize;

use crate::greeting::greeting;
use crate::render::{Render, format_date_label};

pub fn run(account: &Account, selection: &CalendarSelection, by_department: bool) -> Result<()> {
    let items = select_events(account, selection);
    let agenda = build_agenda(items, by_department);

    println!("{}", greeting(chrono::Local::now().hour()).bold());
    println!();

    if agenda.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    match agenda {
        Agenda::Flat(items) => print_by_day(&items),
        Agenda::Sectioned(sections) => print_sections(&sections),
    }

    Ok(())
}

/// Flat mode: print items under day labels.
fn print_by_day(items: &[AgendaItem]) {
    let mut current_date: Option<String> = None;

    for item in items {
        let date_label = format_date_label(&item.event.date);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        println!("  {}", item.render());
    }
}

/// Grouped mode: one header per department section.
fn print_sections(sections: &[Section]) {
    for (i, section) in sections.iter().enumerate() {
        println!("{}", section.label.bold());

        for item in &section.items {
            println!("  {}", item.render());
        }

        // Add spacing between sections (but not after the last one)
        if i < sections.len() - 1 {
            println!();
        }
    }
}
