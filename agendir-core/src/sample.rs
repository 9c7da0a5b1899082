//! Sample account data.
//!
//! Seeds a usable snapshot before any source binary is installed, so the
//! agenda can be explored right after install.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::account::{Account, Calendar, Event};

pub fn sample_account() -> Account {
    let now = Utc::now();

    let event = |summary: &str, offset_hours: i64, department: Option<&str>| Event {
        id: Uuid::new_v4().to_string(),
        summary: summary.to_string(),
        date: now + Duration::hours(offset_hours),
        department: department.map(String::from),
    };

    Account {
        calendars: vec![
            Calendar {
                id: "work".to_string(),
                color: "blue".to_string(),
                events: vec![
                    event("Sprint planning", 2, Some("Engineering")),
                    event("All-hands", 5, None),
                    event("Design review", 26, Some("Design")),
                    event("Code review rotation", 2, Some("Engineering")),
                    event("Quarterly numbers", 49, Some("Finance")),
                ],
            },
            Calendar {
                id: "personal".to_string(),
                color: "green".to_string(),
                events: vec![event("Gym", 8, None), event("Dentist", 30, None)],
            },
        ],
    }
}
