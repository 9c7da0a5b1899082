//! TUI rendering for agendir types.
//!
//! This module provides an extension trait that adds colored terminal
//! rendering to agendir-core types using owo_colors.

use agendir_core::account::Calendar;
use agendir_core::agenda::AgendaItem;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for AgendaItem<'_> {
    fn render(&self) -> String {
        let time = format_time(&self.event.date);
        let cal_tag = format!("[{}]", self.calendar.id);
        format!("{} {} {}", time, self.event.summary, cal_tag.dimmed())
    }
}

impl Render for Calendar {
    fn render(&self) -> String {
        let color_tag = format!("({})", self.color);
        format!("{} {}", self.id, color_tag.dimmed())
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: &DateTime<Utc>) -> String {
    let today = Utc::now().date_naive();
    let date = date.date_naive();

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Format the time column of an event (e.g. "15:00")
pub fn format_time(date: &DateTime<Utc>) -> String {
    format!("{:>5}", date.format("%H:%M"))
}
