//! Batch grid model and assembly.
//!
//! A [`BatchGrid`] is the complete output for one batch: the column axis
//! and every record (classes, breaks, free periods) that a renderer lays
//! out as rows = days, columns = slots.
//!
//! # Record order
//! Records are day-major. Within a day, classes keep their input order and
//! come before breaks, which come before free periods. Cell lookups return
//! the first matching record in this order.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::error::RecordError;
use crate::models::{Day, GridEntry, Session, SyntheticEntry, SyntheticKind, TimeSlot};
use crate::validation::ValidationError;

/// A batch's weekly grid.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchGrid {
    batch: String,
    days: Vec<Day>,
    axis: Vec<TimeSlot>,
    entries: Vec<GridEntry>,
    skipped: Vec<RecordError>,
    issues: Vec<ValidationError>,
}

impl BatchGrid {
    /// Creates an empty grid for a batch.
    pub fn new(batch: impl Into<String>, days: Vec<Day>) -> Self {
        Self {
            batch: batch.into(),
            days,
            ..Self::default()
        }
    }

    pub(crate) fn with_skipped(mut self, skipped: Vec<RecordError>) -> Self {
        self.skipped = skipped;
        self
    }

    pub(crate) fn with_issues(mut self, issues: Vec<ValidationError>) -> Self {
        self.issues = issues;
        self
    }

    /// Batch key.
    pub fn batch(&self) -> &str {
        &self.batch
    }

    /// Batch key with underscores shown as spaces (`CSE_A_2023` → `CSE A 2023`).
    pub fn display_name(&self) -> String {
        self.batch.replace('_', " ")
    }

    /// Rendered days (grid rows), in configured order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Column axis: every distinct slot in the records, by start then end.
    pub fn axis(&self) -> &[TimeSlot] {
        &self.axis
    }

    /// All records in record order.
    pub fn entries(&self) -> &[GridEntry] {
        &self.entries
    }

    /// Input records skipped while building this batch.
    pub fn skipped_records(&self) -> &[RecordError] {
        &self.skipped
    }

    /// Data-quality issues detected in this batch.
    pub fn issues(&self) -> &[ValidationError] {
        &self.issues
    }

    /// Whether the grid has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First record at `(day, slot)`, if any.
    pub fn cell(&self, day: Day, slot: TimeSlot) -> Option<&GridEntry> {
        self.entries
            .iter()
            .find(|e| e.day() == day && e.slot() == slot)
    }

    /// One cell per axis slot for a day.
    pub fn row(&self, day: Day) -> Vec<Option<&GridEntry>> {
        self.axis.iter().map(|&slot| self.cell(day, slot)).collect()
    }

    /// Rows for every rendered day.
    pub fn rows(&self) -> Vec<(Day, Vec<Option<&GridEntry>>)> {
        self.days.iter().map(|&day| (day, self.row(day))).collect()
    }

    /// All records on a day, in record order.
    pub fn entries_for_day(&self, day: Day) -> Vec<&GridEntry> {
        self.entries.iter().filter(|e| e.day() == day).collect()
    }

    /// Class sessions.
    pub fn classes(&self) -> impl Iterator<Item = &Session> {
        self.entries.iter().filter_map(|e| match e {
            GridEntry::Class(s) => Some(s),
            GridEntry::Synthetic(_) => None,
        })
    }

    /// Inserted breaks.
    pub fn breaks(&self) -> impl Iterator<Item = &SyntheticEntry> {
        self.synthetic(SyntheticKind::Break)
    }

    /// Free periods.
    pub fn free_periods(&self) -> impl Iterator<Item = &SyntheticEntry> {
        self.synthetic(SyntheticKind::FreePeriod)
    }

    fn synthetic(&self, kind: SyntheticKind) -> impl Iterator<Item = &SyntheticEntry> {
        self.entries.iter().filter_map(move |e| match e {
            GridEntry::Synthetic(s) if s.kind == kind => Some(s),
            _ => None,
        })
    }

    /// Distinct class course codes in first-seen order.
    pub fn courses(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for session in self.classes() {
            if !seen.contains(&session.course.as_str()) {
                seen.push(&session.course);
            }
        }
        seen
    }

    /// The batch's home room: most frequent room among its classes.
    ///
    /// Ties go to the lexicographically smallest room. `None` without classes.
    pub fn primary_room(&self) -> Option<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for session in self.classes() {
            *counts.entry(session.room.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .max_by(|(ra, ca), (rb, cb)| ca.cmp(cb).then_with(|| rb.cmp(ra)))
            .map(|(room, _)| room)
    }

    /// Days that carry records but are not rendered.
    pub fn unrendered_days(&self) -> Vec<Day> {
        self.entries
            .iter()
            .map(GridEntry::day)
            .filter(|d| !self.days.contains(d))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Merges sessions and synthetic entries into a [`BatchGrid`].
#[derive(Debug, Clone)]
pub struct GridAssembler {
    days: Vec<Day>,
}

impl GridAssembler {
    /// Creates an assembler for the given rendered day set.
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    /// Derives the column axis from records.
    ///
    /// Built from the data rather than the atomic partition, so a class not
    /// aligned to atomic boundaries still gets its own column.
    pub fn axis_of(entries: &[GridEntry]) -> Vec<TimeSlot> {
        entries
            .iter()
            .map(GridEntry::slot)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Builds the grid.
    pub fn assemble(
        &self,
        batch: &str,
        sessions: &[Session],
        breaks: Vec<SyntheticEntry>,
        free_periods: Vec<SyntheticEntry>,
    ) -> BatchGrid {
        let mut entries: Vec<GridEntry> = sessions
            .iter()
            .cloned()
            .map(GridEntry::from)
            .chain(breaks.into_iter().map(GridEntry::from))
            .chain(free_periods.into_iter().map(GridEntry::from))
            .collect();
        // stable: keeps classes, breaks, free periods in that order per day
        entries.sort_by_key(GridEntry::day);

        BatchGrid {
            batch: batch.to_string(),
            days: self.days.clone(),
            axis: Self::axis_of(&entries),
            entries,
            skipped: Vec::new(),
            issues: Vec::new(),
        }
    }
}
