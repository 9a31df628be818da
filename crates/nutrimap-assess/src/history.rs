//! Latest/previous visit resolution per child.
//!
//! The store guarantees no ordering, so the resolver derives its own:
//! a visit is newer than another when it has a date and the other does not,
//! when its ISO date string compares greater (ISO dates sort
//! lexicographically in chronological order), or — dates equal — when its
//! id is greater. The scan is a single linear pass and the outcome is the
//! same for any input order.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use nutrimap_core::models::Visit;

/// The most recent visit for one child, plus the one before it.
#[derive(Debug, Clone, Copy)]
pub struct VisitHistory<'a> {
    pub latest: &'a Visit,
    pub previous: Option<&'a Visit>,
}

fn newer_than(a: &Visit, b: &Visit) -> bool {
    match (&a.visit_date, &b.visit_date) {
        (Some(_), None) => true,
        (Some(a_date), Some(b_date)) => match a_date.cmp(b_date) {
            Ordering::Greater => true,
            Ordering::Equal => a.id > b.id,
            Ordering::Less => false,
        },
        (None, _) => false,
    }
}

/// Resolve latest and previous visit for every child in one pass.
///
/// State is local to each child's map entry, so a partial visit set for one
/// child never affects another's resolution.
pub fn latest_per_child(visits: &[Visit]) -> HashMap<i64, VisitHistory<'_>> {
    let mut histories: HashMap<i64, VisitHistory<'_>> = HashMap::new();

    for visit in visits {
        match histories.entry(visit.child_id) {
            Entry::Vacant(entry) => {
                entry.insert(VisitHistory {
                    latest: visit,
                    previous: None,
                });
            }
            Entry::Occupied(mut entry) => {
                let history = entry.get_mut();
                if newer_than(visit, history.latest) {
                    history.previous = Some(history.latest);
                    history.latest = visit;
                } else if history.previous.is_none_or(|prev| newer_than(visit, prev)) {
                    history.previous = Some(visit);
                }
            }
        }
    }

    histories
}

/// Latest/previous for a single child out of a mixed visit collection.
pub fn history_for_child(visits: &[Visit], child_id: i64) -> Option<VisitHistory<'_>> {
    let mut histories = latest_per_child(visits);
    histories.remove(&child_id)
}
