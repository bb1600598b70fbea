//! Time-slot synthesis and classification.
//!
//! Turns a batch's irregular class intervals into a shared column axis and
//! fills the unclaimed parts of each day.
//!
//! # Pipeline
//!
//! 1. [`SlotSynthesizer`]: every distinct session boundary of the batch,
//!    sorted, paired into consecutive atomic slots; short fragments dropped.
//! 2. [`BreakInserter`]: per day and per break category, the first
//!    candidate window holding a free atomic slot yields one break.
//! 3. [`GapFinder`]: remaining free atomic slots that are long enough
//!    become free periods.
//!
//! All three stages are deterministic: days are visited in weekday order,
//! slots in chronological order, candidate windows in configured order.
//!
//! # Complexity
//! O(d * s * n) where d = days, s = atomic slots, n = sessions per day.

mod breaks;
mod gaps;
mod slots;

pub use breaks::{find_break_slot, BreakInserter};
pub use gaps::GapFinder;
pub use slots::SlotSynthesizer;

use std::collections::BTreeMap;

use crate::models::{Day, Session, TimeSlot};

/// A batch's sessions keyed by day, days in weekday order.
pub type SessionsByDay<'a> = BTreeMap<Day, Vec<&'a Session>>;

/// Groups sessions by day, keeping input order within each day.
pub fn group_by_day(sessions: &[Session]) -> SessionsByDay<'_> {
    let mut by_day: SessionsByDay<'_> = BTreeMap::new();
    for session in sessions {
        by_day.entry(session.day).or_default().push(session);
    }
    by_day
}

/// Whether `slot` overlaps neither a session nor an already claimed slot.
pub(crate) fn is_unclaimed(slot: &TimeSlot, sessions: &[&Session], claimed: &[TimeSlot]) -> bool {
    !sessions.iter().any(|s| s.slot.overlaps(slot)) && !claimed.iter().any(|c| c.overlaps(slot))
}
