//! Atomic slot synthesis.
//!
//! # Algorithm
//!
//! 1. Collect every session start and end across all days of the batch
//!    (one shared axis, since all day rows share one column header).
//! 2. Sort and deduplicate.
//! 3. Pair consecutive points into candidate slots.
//! 4. Drop candidates shorter than the minimum.
//!
//! The result is ordered, overlap-free, and gap-free except where a short
//! fragment was dropped.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::DEFAULT_MIN_SLOT_MINUTES;
use crate::models::{Session, TimePoint, TimeSlot};

/// Builds a batch's atomic slot partition.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Day, Session, TimeSlot};
/// use u_timetable::synthesis::SlotSynthesizer;
///
/// let sessions = vec![
///     Session::new("B", Day::Monday, TimeSlot::parse("09:00-10:30").unwrap(), "CS101"),
///     Session::new("B", Day::Tuesday, TimeSlot::parse("10:00-11:00").unwrap(), "CS102"),
/// ];
/// let slots = SlotSynthesizer::new().synthesize(&sessions);
/// let rendered: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
/// assert_eq!(rendered, ["09:00-10:00", "10:00-10:30", "10:30-11:00"]);
/// ```
#[derive(Debug, Clone)]
pub struct SlotSynthesizer {
    min_slot_minutes: i64,
}

impl SlotSynthesizer {
    /// Creates a synthesizer with the default 15-minute minimum.
    pub fn new() -> Self {
        Self {
            min_slot_minutes: DEFAULT_MIN_SLOT_MINUTES,
        }
    }

    /// Sets the minimum slot length (minutes).
    pub fn with_min_slot_minutes(mut self, minutes: i64) -> Self {
        self.min_slot_minutes = minutes;
        self
    }

    /// Sorted, deduplicated session boundaries.
    pub fn boundaries(sessions: &[Session]) -> Vec<TimePoint> {
        sessions
            .iter()
            .flat_map(|s| [s.slot.start(), s.slot.end()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Computes the atomic slots. Empty input gives an empty partition.
    pub fn synthesize(&self, sessions: &[Session]) -> Vec<TimeSlot> {
        let points = Self::boundaries(sessions);

        let mut dropped = 0usize;
        let slots: Vec<TimeSlot> = points
            .windows(2)
            .filter_map(|pair| TimeSlot::new(pair[0], pair[1]).ok())
            .filter(|slot| {
                let keep = slot.duration_minutes() >= self.min_slot_minutes;
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();

        debug!(
            boundaries = points.len(),
            slots = slots.len(),
            dropped,
            "synthesized atomic slots"
        );
        slots
    }
}

impl Default for SlotSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
