//! The agenda aggregation pipeline.
//!
//! Two pure steps: `select_events` narrows an account snapshot down to
//! the (calendar, event) pairs matching the active calendar selection,
//! and `build_agenda` orders them chronologically, optionally partitioned
//! into department sections. Both are recomputed from scratch whenever
//! the snapshot or the view selection changes; neither holds state.

use std::collections::HashMap;
use std::fmt;

use crate::account::{Account, Calendar, Event};

/// Section label for events that carry no department.
pub const NO_DEPARTMENT_LABEL: &str = "No Department";

/// Which calendars feed the agenda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarSelection {
    /// Every calendar in the account.
    All,
    /// Only the calendar with this id. An id matching no calendar yields
    /// an empty agenda, not an error.
    Calendar(String),
}

impl CalendarSelection {
    /// Parse a view argument: absent or the "all" sentinel selects every
    /// calendar.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("all") => CalendarSelection::All,
            Some(id) => CalendarSelection::Calendar(id.to_string()),
        }
    }

    pub fn matches(&self, calendar: &Calendar) -> bool {
        match self {
            CalendarSelection::All => true,
            CalendarSelection::Calendar(id) => calendar.id == *id,
        }
    }
}

impl fmt::Display for CalendarSelection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalendarSelection::All => write!(f, "all"),
            CalendarSelection::Calendar(id) => write!(f, "{}", id),
        }
    }
}

/// A (calendar, event) pair borrowed from the account snapshot for one
/// compute cycle. Carries no identity of its own; the event id is the
/// stable key.
#[derive(Debug, Clone, Copy)]
pub struct AgendaItem<'a> {
    pub calendar: &'a Calendar,
    pub event: &'a Event,
}

impl<'a> AgendaItem<'a> {
    /// Stable key for incremental rendering.
    pub fn key(&self) -> &'a str {
        &self.event.id
    }

    fn section_label(&self) -> &'a str {
        self.event
            .department
            .as_deref()
            .unwrap_or(NO_DEPARTMENT_LABEL)
    }
}

/// A department label paired with the agenda items assigned to it.
#[derive(Debug)]
pub struct Section<'a> {
    pub label: String,
    pub items: Vec<AgendaItem<'a>>,
}

/// Render-ready pipeline output.
#[derive(Debug)]
pub enum Agenda<'a> {
    Flat(Vec<AgendaItem<'a>>),
    Sectioned(Vec<Section<'a>>),
}

impl Agenda<'_> {
    /// Total number of items, across sections in sectioned mode.
    pub fn len(&self) -> usize {
        match self {
            Agenda::Flat(items) => items.len(),
            Agenda::Sectioned(sections) => sections.iter().map(|s| s.items.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filter the account's events down to the active selection, in
/// calendar-then-event input order.
pub fn select_events<'a>(
    account: &'a Account,
    selection: &CalendarSelection,
) -> Vec<AgendaItem<'a>> {
    account
        .calendars
        .iter()
        .filter(|calendar| selection.matches(calendar))
        .flat_map(|calendar| {
            calendar
                .events
                .iter()
                .map(move |event| AgendaItem { calendar, event })
        })
        .collect()
}

/// Order items chronologically and, if requested, partition them into
/// department sections.
pub fn build_agenda(mut items: Vec<AgendaItem<'_>>, group_by_department: bool) -> Agenda<'_> {
    // Stable: items sharing a date keep their input order
    items.sort_by(|a, b| a.event.date.cmp(&b.event.date));

    if !group_by_department {
        return Agenda::Flat(items);
    }

    // Sections appear in first-seen order of the sorted stream. Insertion
    // order is tracked explicitly (ordered Vec + label lookup), never via
    // map iteration order.
    let mut sections: Vec<Section> = Vec::new();
    let mut index_by_label: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let index = *index_by_label.entry(item.section_label()).or_insert_with(|| {
            sections.push(Section {
                label: item.section_label().to_string(),
                items: Vec::new(),
            });
            sections.len() - 1
        });
        sections[index].items.push(item);
    }

    Agenda::Sectioned(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: &str, hour: u32, department: Option<&str>) -> Event {
        Event {
            id: id.to_string(),
            summary: format!("Event {}", id),
            date: Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0).unwrap(),
            department: department.map(String::from),
        }
    }

    fn calendar(id: &str, events: Vec<Event>) -> Calendar {
        Calendar {
            id: id.to_string(),
            color: "blue".to_string(),
            events,
        }
    }

    fn item_ids<'a>(items: &[AgendaItem<'a>]) -> Vec<&'a str> {
        items.iter().map(|i| i.key()).collect()
    }

    #[test]
    fn test_select_all_includes_every_calendar_in_input_order() {
        let account = Account {
            calendars: vec![
                calendar("cal-a", vec![event("1", 9, None), event("2", 8, None)]),
                calendar("cal-b", vec![event("3", 7, None)]),
            ],
        };

        let items = select_events(&account, &CalendarSelection::All);

        // Calendar-then-event input order, no re-sorting at this stage
        assert_eq!(item_ids(&items), vec!["1", "2", "3"]);
        assert_eq!(items[2].calendar.id, "cal-b");
    }

    #[test]
    fn test_select_by_id_contains_exactly_that_calendars_events() {
        let account = Account {
            calendars: vec![
                calendar("cal-a", vec![event("1", 9, None)]),
                calendar("cal-b", vec![event("2", 8, None), event("3", 7, None)]),
            ],
        };

        let selection = CalendarSelection::Calendar("cal-b".to_string());
        let items = select_events(&account, &selection);

        assert_eq!(item_ids(&items), vec!["2", "3"]);
        assert!(items.iter().all(|i| i.calendar.id == "cal-b"));
    }

    #[test]
    fn test_select_unknown_id_yields_empty() {
        let account = Account {
            calendars: vec![calendar("cal-a", vec![event("1", 9, None)])],
        };

        let selection = CalendarSelection::Calendar("cal-b".to_string());
        let items = select_events(&account, &selection);

        assert!(items.is_empty(), "Unknown calendar id is not an error");
    }

    #[test]
    fn test_select_preserves_multiplicity() {
        // De-duplication is out of scope: a duplicated source event passes
        // through as-is
        let account = Account {
            calendars: vec![calendar(
                "cal-a",
                vec![event("1", 9, None), event("1", 9, None)],
            )],
        };

        let items = select_events(&account, &CalendarSelection::All);
        assert_eq!(item_ids(&items), vec!["1", "1"]);
    }

    #[test]
    fn test_flat_agenda_sorts_chronologically() {
        let account = Account {
            calendars: vec![calendar(
                "cal-a",
                vec![event("1", 9, None), event("2", 8, Some("Eng"))],
            )],
        };

        let items = select_events(&account, &CalendarSelection::All);
        let agenda = build_agenda(items, false);

        match agenda {
            Agenda::Flat(items) => assert_eq!(item_ids(&items), vec!["2", "1"]),
            other => panic!("Expected flat agenda, got {:?}", other),
        }
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let account = Account {
            calendars: vec![calendar(
                "cal-a",
                vec![event("e3", 10, None), event("e4", 10, None)],
            )],
        };

        let items = select_events(&account, &CalendarSelection::All);
        let agenda = build_agenda(items, false);

        match agenda {
            Agenda::Flat(items) => assert_eq!(
                item_ids(&items),
                vec!["e3", "e4"],
                "Identical timestamps must keep their pre-sort order"
            ),
            other => panic!("Expected flat agenda, got {:?}", other),
        }
    }

    #[test]
    fn test_resorting_sorted_items_is_a_noop() {
        let account = Account {
            calendars: vec![calendar(
                "cal-a",
                vec![
                    event("1", 9, None),
                    event("2", 8, None),
                    event("3", 8, None),
                ],
            )],
        };

        let once = match build_agenda(select_events(&account, &CalendarSelection::All), false) {
            Agenda::Flat(items) => items,
            other => panic!("Expected flat agenda, got {:?}", other),
        };
        let expected: Vec<&str> = item_ids(&once);

        let twice = match build_agenda(once, false) {
            Agenda::Flat(items) => items,
            other => panic!("Expected flat agenda, got {:?}", other),
        };

        assert_eq!(item_ids(&twice), expected);
    }

    #[test]
    fn test_sections_appear_in_first_seen_order() {
        // Scenario: 08:00 Eng sorts before 09:00 no-department, so the Eng
        // section comes first even though the no-department event was
        // listed first in the source
        let account = Account {
            calendars: vec![calendar(
                "cal-a",
                vec![event("1", 9, None), event("2", 8, Some("Eng"))],
            )],
        };

        let items = select_events(&account, &CalendarSelection::All);
        let sections = match build_agenda(items, true) {
            Agenda::Sectioned(sections) => sections,
            other => panic!("Expected sectioned agenda, got {:?}", other),
        };

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].label, "Eng");
        assert_eq!(item_ids(&sections[0].items), vec!["2"]);
        assert_eq!(sections[1].label, NO_DEPARTMENT_LABEL);
        assert_eq!(item_ids(&sections[1].items), vec!["1"]);
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let account = Account {
            calendars: vec![calendar(
                "cal-a",
                vec![
                    event("1", 1, Some("Eng")),
                    event("2", 2, None),
                    event("3", 3, Some("Sales")),
                    event("4", 4, Some("Eng")),
                    event("5", 5, None),
                ],
            )],
        };

        let items = select_events(&account, &CalendarSelection::All);
        let total = items.len();
        let agenda = build_agenda(items, true);

        assert_eq!(agenda.len(), total, "No item may be dropped or duplicated");

        let sections = match agenda {
            Agenda::Sectioned(sections) => sections,
            other => panic!("Expected sectioned agenda, got {:?}", other),
        };

        let labels: Vec<&str> = sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Eng", NO_DEPARTMENT_LABEL, "Sales"]);

        let mut seen: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.key()))
            .collect();
        seen.sort();
        assert_eq!(seen, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_missing_department_routes_to_fallback() {
        let account = Account {
            calendars: vec![calendar("cal-a", vec![event("1", 9, None)])],
        };

        let items = select_events(&account, &CalendarSelection::All);
        let sections = match build_agenda(items, true) {
            Agenda::Sectioned(sections) => sections,
            other => panic!("Expected sectioned agenda, got {:?}", other),
        };

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, NO_DEPARTMENT_LABEL);
    }

    #[test]
    fn test_sections_inherit_chronological_order() {
        let account = Account {
            calendars: vec![calendar(
                "cal-a",
                vec![
                    event("late", 11, Some("Eng")),
                    event("early", 8, Some("Eng")),
                    event("mid", 9, Some("Eng")),
                ],
            )],
        };

        let items = select_events(&account, &CalendarSelection::All);
        let sections = match build_agenda(items, true) {
            Agenda::Sectioned(sections) => sections,
            other => panic!("Expected sectioned agenda, got {:?}", other),
        };

        assert_eq!(item_ids(&sections[0].items), vec!["early", "mid", "late"]);
    }

    #[test]
    fn test_department_literally_named_no_department_merges_with_fallback() {
        // Known limitation: a real department named like the fallback label
        // is indistinguishable from it
        let account = Account {
            calendars: vec![calendar(
                "cal-a",
                vec![
                    event("1", 8, Some(NO_DEPARTMENT_LABEL)),
                    event("2", 9, None),
                ],
            )],
        };

        let items = select_events(&account, &CalendarSelection::All);
        let sections = match build_agenda(items, true) {
            Agenda::Sectioned(sections) => sections,
            other => panic!("Expected sectioned agenda, got {:?}", other),
        };

        assert_eq!(sections.len(), 1);
        assert_eq!(item_ids(&sections[0].items), vec!["1", "2"]);
    }

    #[test]
    fn test_selection_from_arg() {
        assert_eq!(CalendarSelection::from_arg(None), CalendarSelection::All);
        assert_eq!(
            CalendarSelection::from_arg(Some("all")),
            CalendarSelection::All
        );
        assert_eq!(
            CalendarSelection::from_arg(Some("work")),
            CalendarSelection::Calendar("work".to_string())
        );
    }

    #[test]
    fn test_agenda_len_and_is_empty() {
        let account = Account { calendars: vec![] };

        let agenda = build_agenda(select_events(&account, &CalendarSelection::All), true);
        assert!(agenda.is_empty());
        assert_eq!(agenda.len(), 0);
    }
}
