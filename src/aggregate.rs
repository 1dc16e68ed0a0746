use std::collections::{HashMap, HashSet};

use crate::types::{Counters, Event};

/// Selects the events whose check and entity labels satisfy both
/// selectors. Pure and order-preserving; an empty selector places no
/// constraint on its dimension.
pub fn filter_events(
    events: Vec<Event>,
    check_selector: &HashMap<String, String>,
    entity_selector: &HashMap<String, String>,
) -> Vec<Event> {
    events
        .into_iter()
        .filter(|event| {
            crate::selector::matches(check_selector, &event.check.metadata.labels)
                && crate::selector::matches(entity_selector, &event.entity.metadata.labels)
        })
        .collect()
}

/// Tallies the filtered events in a single pass. Distinct entities and
/// checks are counted by name only, ignoring label content.
pub fn tally(events: &[Event]) -> Counters {
    let mut counters = Counters::default();

    let mut entities: HashSet<&str> = HashSet::new();
    let mut checks: HashSet<&str> = HashSet::new();

    for event in events {
        entities.insert(&event.entity.metadata.name);
        checks.insert(&event.check.metadata.name);

        match event.check.status {
            0 => counters.ok += 1,
            1 => counters.warning += 1,
            2 => counters.critical += 1,
            // Forward-compatible with status codes not known to this plugin.
            _ => counters.unknown += 1,
        }

        counters.total += 1;
    }

    counters.entities = entities.len();
    counters.checks = checks.len();

    counters
}
