//! Standard break insertion.
//!
//! For each day and each configured [`BreakCategory`], candidate windows
//! are tried in priority order. Within a window, atomic slots are tried in
//! chronological order. A slot qualifies when it lies entirely inside the
//! window and overlaps no session and no break already placed that day.
//! The first qualifying slot ends the search for that category; a
//! category with no qualifying slot simply yields no break that day.

use tracing::debug;

use super::{is_unclaimed, SessionsByDay};
use crate::config::BreakCategory;
use crate::models::{Session, SyntheticEntry, TimeSlot};

/// Finds the break slot for one category on one day.
///
/// `claimed` holds slots already taken by other synthetic entries that day.
pub fn find_break_slot(
    windows: &[TimeSlot],
    slots: &[TimeSlot],
    sessions: &[&Session],
    claimed: &[TimeSlot],
) -> Option<TimeSlot> {
    windows.iter().find_map(|window| {
        slots
            .iter()
            .copied()
            .find(|slot| window.encloses(slot) && is_unclaimed(slot, sessions, claimed))
    })
}

/// Places standard breaks into a batch's days.
#[derive(Debug, Clone)]
pub struct BreakInserter<'a> {
    categories: &'a [BreakCategory],
}

impl<'a> BreakInserter<'a> {
    /// Creates an inserter over the given categories, processed in order.
    pub fn new(categories: &'a [BreakCategory]) -> Self {
        Self { categories }
    }

    /// Emits at most one break per category per day.
    ///
    /// Entries come out day-major, then in category order.
    pub fn insert(
        &self,
        batch: &str,
        slots: &[TimeSlot],
        by_day: &SessionsByDay<'_>,
    ) -> Vec<SyntheticEntry> {
        let mut entries = Vec::new();

        for (&day, sessions) in by_day {
            let mut claimed: Vec<TimeSlot> = Vec::new();

            for category in self.categories {
                match find_break_slot(&category.windows, slots, sessions, &claimed) {
                    Some(slot) => {
                        claimed.push(slot);
                        entries.push(SyntheticEntry::break_entry(
                            batch,
                            day,
                            slot,
                            category.course.as_str(),
                            category.label.as_str(),
                        ));
                    }
                    None => {
                        debug!(batch, %day, category = %category.name, "no free slot for break");
                    }
                }
            }
        }

        entries
    }
}
