//! Free-period detection.

use super::{is_unclaimed, SessionsByDay};
use crate::config::DEFAULT_MIN_FREE_MINUTES;
use crate::models::{SyntheticEntry, TimeSlot};

/// Marks long-enough unclaimed atomic slots as free periods.
///
/// A slot is unclaimed on a day when it overlaps no session and no entry
/// already emitted for that day (breaks included). Each (day, slot) pair is
/// emitted at most once even if `existing` already carries free periods.
#[derive(Debug, Clone)]
pub struct GapFinder {
    min_free_minutes: i64,
}

impl GapFinder {
    /// Creates a finder with the default 20-minute minimum.
    pub fn new() -> Self {
        Self {
            min_free_minutes: DEFAULT_MIN_FREE_MINUTES,
        }
    }

    /// Sets the minimum free-period length (minutes).
    pub fn with_min_free_minutes(mut self, minutes: i64) -> Self {
        self.min_free_minutes = minutes;
        self
    }

    /// Emits free periods, day-major then chronological.
    ///
    /// `existing` holds synthetic entries already placed for the batch.
    pub fn find(
        &self,
        batch: &str,
        slots: &[TimeSlot],
        by_day: &SessionsByDay<'_>,
        existing: &[SyntheticEntry],
    ) -> Vec<SyntheticEntry> {
        let mut entries = Vec::new();

        for (&day, sessions) in by_day {
            let claimed: Vec<TimeSlot> = existing
                .iter()
                .filter(|e| e.day == day)
                .map(|e| e.slot)
                .collect();

            for &slot in slots {
                if slot.duration_minutes() < self.min_free_minutes {
                    continue;
                }
                if !is_unclaimed(&slot, sessions, &claimed) {
                    continue;
                }
                if entries
                    .iter()
                    .any(|e: &SyntheticEntry| e.day == day && e.slot == slot)
                {
                    continue;
                }
                entries.push(SyntheticEntry::free_period(batch, day, slot));
            }
        }

        entries
    }
}

impl Default for GapFinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BreakCategory;
    use crate::models::{Day, Session};
    use crate::synthesis::{group_by_day, BreakInserter, SlotSynthesizer};

    fn slot(s: &str) -> TimeSlot {
        TimeSlot::parse(s).unwrap()
    }

    fn session(day: Day, time: &str) -> Session {
        Session::new("B1", day, slot(time), "C")
    }

    #[test]
    fn test_free_periods_between_classes() {
        let sessions = vec![
            session(Day::Monday, "09:00-10:00"),
            session(Day::Monday, "11:00-12:00"),
            session(Day::Tuesday, "10:00-11:00"),
        ];
        let slots = SlotSynthesizer::new().synthesize(&sessions);
        let by_day = group_by_day(&sessions);

        let free = GapFinder::new().find("B1", &slots, &by_day, &[]);
        let rendered: Vec<String> = free.iter().map(|e| format!("{} {}", e.day, e.slot)).collect();
        assert_eq!(
            rendered,
            [
                "Monday 10:00-11:00",
                "Tuesday 09:00-10:00",
                "Tuesday 11:00-12:00",
            ]
        );
        assert!(free.iter().all(|e| e.label == "Free Period" && e.course == "Free"));
    }

    #[test]
    fn test_short_gaps_not_free() {
        // 10:45-11:00 is a valid atomic slot (15 min) but below the free minimum.
        let sessions = vec![
            session(Day::Monday, "09:00-10:45"),
            session(Day::Monday, "11:00-12:00"),
            session(Day::Tuesday, "10:45-11:00"),
        ];
        let slots = SlotSynthesizer::new().synthesize(&sessions);
        let by_day = group_by_day(&sessions);

        let free = GapFinder::new().find("B1", &slots, &by_day, &[]);
        assert!(free.iter().all(|e| e.day != Day::Monday));
        assert!(free.iter().all(|e| e.slot.duration_minutes() >= 20));
    }

    #[test]
    fn test_breaks_are_not_free() {
        let sessions = vec![
            session(Day::Monday, "11:00-12:15"),
            session(Day::Monday, "13:15-14:00"),
        ];
        let slots = SlotSynthesizer::new().synthesize(&sessions);
        let by_day = group_by_day(&sessions);
        let categories = vec![BreakCategory::lunch()];

        let breaks = BreakInserter::new(&categories).insert("B1", &slots, &by_day);
        assert_eq!(breaks.len(), 1);
        assert_eq!(breaks[0].slot, slot("12:15-13:15"));

        let free = GapFinder::new().find("B1", &slots, &by_day, &breaks);
        assert!(free.is_empty());

        let without_breaks = GapFinder::new().find("B1", &slots, &by_day, &[]);
        assert_eq!(without_breaks.len(), 1);
    }

    #[test]
    fn test_existing_free_periods_not_duplicated() {
        let sessions = vec![
            session(Day::Monday, "09:00-10:00"),
            session(Day::Monday, "11:00-12:00"),
        ];
        let slots = SlotSynthesizer::new().synthesize(&sessions);
        let by_day = group_by_day(&sessions);
        let finder = GapFinder::new();

        let first = finder.find("B1", &slots, &by_day, &[]);
        assert_eq!(first.len(), 1);

        let second = finder.find("B1", &slots, &by_day, &first);
        assert!(second.is_empty());
    }

    #[test]
    fn test_fully_booked_day_has_no_free_periods() {
        let sessions = vec![session(Day::Monday, "09:00-17:00")];
        let slots = SlotSynthesizer::new().synthesize(&sessions);
        let by_day = group_by_day(&sessions);

        assert!(GapFinder::new().find("B1", &slots, &by_day, &[]).is_empty());
    }

    #[test]
    fn test_custom_minimum() {
        let sessions = vec![
            session(Day::Monday, "09:00-10:00"),
            session(Day::Monday, "10:30-11:00"),
        ];
        let slots = SlotSynthesizer::new().synthesize(&sessions);
        let by_day = group_by_day(&sessions);

        let strict = GapFinder::new().with_min_free_minutes(45);
        assert!(strict.find("B1", &slots, &by_day, &[]).is_empty());
        assert_eq!(GapFinder::new().find("B1", &slots, &by_day, &[]).len(), 1);
    }
}
