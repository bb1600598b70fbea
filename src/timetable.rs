//! Batch partitioning and the per-batch grid pipeline.
//!
//! # Algorithm
//!
//! 1. Partition input records by batch key; process keys in sorted order,
//!    skipping excluded keys.
//! 2. Parse each batch's records into sessions. Malformed records are
//!    skipped with a warning and reported on the batch's grid.
//! 3. Run the four sequential stages: synthesize slots, insert breaks,
//!    find free periods, assemble the grid.
//! 4. Validate the merged entries and apply the conflict policy.
//!
//! Batches share no state: a batch rejected under
//! [`ConflictPolicy::Reject`] does not affect any other batch.
//!
//! # Complexity
//! O(b * d * s * n) for b batches, d days, s atomic slots, n sessions per day.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::{ConflictPolicy, TimetableConfig};
use crate::error::{GridError, RecordError};
use crate::grid::{BatchGrid, GridAssembler};
use crate::models::{Session, SessionRecord};
use crate::synthesis::{group_by_day, BreakInserter, GapFinder, SlotSynthesizer};
use crate::validation::validate_entries;

/// Grids for every processed batch of a run.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    grids: Vec<BatchGrid>,
    failures: Vec<GridError>,
}

impl Timetable {
    /// Successfully built grids, in batch key order.
    pub fn grids(&self) -> &[BatchGrid] {
        &self.grids
    }

    /// Batches that were rejected.
    pub fn failures(&self) -> &[GridError] {
        &self.failures
    }

    /// Grid of a batch, if it was built.
    pub fn grid(&self, batch: &str) -> Option<&BatchGrid> {
        self.grids.iter().find(|g| g.batch() == batch)
    }

    /// Batch keys with a grid.
    pub fn batches(&self) -> Vec<&str> {
        self.grids.iter().map(BatchGrid::batch).collect()
    }

    /// Whether every processed batch produced a grid.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parses records into sessions, collecting the ones that fail.
///
/// Each item pairs a record with its position in the caller's input.
pub fn parse_records<'a>(
    records: impl IntoIterator<Item = (usize, &'a SessionRecord)>,
) -> (Vec<Session>, Vec<RecordError>) {
    let mut sessions = Vec::new();
    let mut skipped = Vec::new();

    for (index, record) in records {
        match Session::try_from(record) {
            Ok(session) => sessions.push(session),
            Err(error) => {
                warn!(index, batch = %record.batch, %error, "skipping malformed record");
                skipped.push(RecordError {
                    index,
                    batch: record.batch.clone(),
                    error,
                });
            }
        }
    }

    (sessions, skipped)
}

/// Builds batch grids from session records.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Day, SessionRecord, TimeSlot};
/// use u_timetable::timetable::TimetableBuilder;
///
/// let records = vec![
///     SessionRecord::new("CSE_A_2023", "Monday", "09:00-10:30", "CS101"),
///     SessionRecord::new("CSE_A_2023", "Monday", "11:00-12:30", "CS102"),
///     SessionRecord::new("CSE_A_2023", "Tuesday", "10:45-11:00", "CS103"),
/// ];
///
/// let timetable = TimetableBuilder::new().build(&records);
/// let grid = timetable.grid("CSE_A_2023").unwrap();
///
/// let tea = TimeSlot::parse("10:30-10:45").unwrap();
/// assert_eq!(grid.cell(Day::Monday, tea).unwrap().label(), Some("Morning Break"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableBuilder {
    config: TimetableConfig,
}

impl TimetableBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: TimetableConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Builds grids for every batch in `records`.
    pub fn build(&self, records: &[SessionRecord]) -> Timetable {
        let mut partitions: BTreeMap<&str, Vec<(usize, &SessionRecord)>> = BTreeMap::new();
        for (index, record) in records.iter().enumerate() {
            partitions
                .entry(record.batch.as_str())
                .or_default()
                .push((index, record));
        }

        let mut timetable = Timetable::default();
        for (batch, rows) in partitions {
            if self.config.is_excluded(batch) {
                debug!(batch, records = rows.len(), "skipping excluded batch");
                continue;
            }

            let (sessions, skipped) = parse_records(rows);
            match self.build_batch(batch, &sessions) {
                Ok(grid) => timetable.grids.push(grid.with_skipped(skipped)),
                Err(err) => {
                    warn!(batch, error = %err, "batch rejected");
                    timetable.failures.push(err);
                }
            }
        }

        timetable
    }

    /// Runs the pipeline for one batch's parsed sessions.
    ///
    /// A batch without sessions yields an empty grid.
    pub fn build_batch(&self, batch: &str, sessions: &[Session]) -> Result<BatchGrid, GridError> {
        let config = &self.config;

        if sessions.is_empty() {
            debug!(batch, "batch has no parsable sessions");
            return Ok(BatchGrid::new(batch, config.days.clone()));
        }

        let slots = SlotSynthesizer::new()
            .with_min_slot_minutes(config.min_slot_minutes)
            .synthesize(sessions);
        let by_day = group_by_day(sessions);

        let breaks = BreakInserter::new(&config.break_categories).insert(batch, &slots, &by_day);
        let free_periods = GapFinder::new()
            .with_min_free_minutes(config.min_free_minutes)
            .find(batch, &slots, &by_day, &breaks);

        debug!(
            batch,
            sessions = sessions.len(),
            slots = slots.len(),
            breaks = breaks.len(),
            free_periods = free_periods.len(),
            "assembling batch grid"
        );

        let grid = GridAssembler::new(config.days.clone()).assemble(
            batch,
            sessions,
            breaks,
            free_periods,
        );

        match validate_entries(grid.entries(), &config.days) {
            Ok(()) => Ok(grid),
            Err(issues) => {
                for issue in &issues {
                    warn!(batch, kind = ?issue.kind, day = %issue.day, "{}", issue.message);
                }
                match config.conflict_policy {
                    ConflictPolicy::FirstWins => Ok(grid.with_issues(issues)),
                    ConflictPolicy::Reject => Err(GridError::Rejected {
                        batch: batch.to_string(),
                        issues,
                    }),
                }
            }
        }
    }
}
