//! Account snapshot types.
//!
//! These types mirror the account data delivered by source binaries: an
//! account owns calendars, each calendar owns its events. The agenda
//! pipeline treats a snapshot as immutable; a refresh replaces it
//! wholesale rather than patching it in place.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's account: the top-level owner of calendars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub calendars: Vec<Calendar>,
}

impl Account {
    pub fn calendar(&self, id: &str) -> Option<&Calendar> {
        self.calendars.iter().find(|c| c.id == id)
    }

    /// Total number of events across all calendars.
    pub fn event_count(&self) -> usize {
        self.calendars.iter().map(|c| c.events.len()).sum()
    }
}

/// A color-labeled container of events. The id is the calendar's
/// identity for filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    pub id: String,
    pub color: String,
    pub events: Vec<Event>,
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A dated item belonging to exactly one calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub summary: String,
    /// Start instant, pre-normalized to UTC by the source.
    pub date: DateTime<Utc>,
    /// Absent is a valid state, distinct from any specific label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}
