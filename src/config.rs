//! Pipeline configuration.
//!
//! [`TimetableConfig`] carries every tunable of the pipeline. The defaults
//! reproduce the standard institute day: 15-minute atomic slots, 20-minute
//! free periods, morning/lunch/afternoon breaks, Monday to Saturday.
//!
//! The whole struct deserializes with per-field defaults, so a partial
//! JSON document overrides only what it names:
//!
//! ```
//! use u_timetable::config::TimetableConfig;
//!
//! let config: TimetableConfig =
//!     serde_json::from_str(r#"{ "min_free_minutes": 30 }"#).unwrap();
//! assert_eq!(config.min_free_minutes, 30);
//! assert_eq!(config.min_slot_minutes, 15);
//! assert_eq!(config.break_categories.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Day, TimePoint, TimeSlot};

/// Minimum atomic slot length (minutes).
pub const DEFAULT_MIN_SLOT_MINUTES: i64 = 15;

/// Minimum free-period length (minutes).
pub const DEFAULT_MIN_FREE_MINUTES: i64 = 20;

/// Pseudo-batch key that collects cross-batch rows and is never rendered.
pub const ALL_BATCHES_KEY: &str = "ALL";

/// A family of interchangeable break windows.
///
/// Windows are tried in order; the first one holding a free atomic slot
/// wins for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakCategory {
    /// Category identifier (`"morning"`, `"lunch"`, ...).
    pub name: String,
    /// Course sentinel written into emitted entries.
    pub course: String,
    /// Display label written into emitted entries.
    pub label: String,
    /// Candidate windows in priority order.
    pub windows: Vec<TimeSlot>,
}

impl BreakCategory {
    /// Creates a category with no windows.
    pub fn new(
        name: impl Into<String>,
        course: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            course: course.into(),
            label: label.into(),
            windows: Vec::new(),
        }
    }

    /// Appends a candidate window (lowest priority so far).
    pub fn with_window(mut self, window: TimeSlot) -> Self {
        self.windows.push(window);
        self
    }

    /// Morning break: 10:30-10:45, then 10:45-11:00.
    pub fn morning() -> Self {
        Self {
            windows: windows(&[(10, 30, 10, 45), (10, 45, 11, 0)]),
            ..Self::new("morning", "Break", "Morning Break")
        }
    }

    /// Lunch break: 12:15-13:15, then 13:00-14:00.
    pub fn lunch() -> Self {
        Self {
            windows: windows(&[(12, 15, 13, 15), (13, 0, 14, 0)]),
            ..Self::new("lunch", "Lunch", "Lunch Break")
        }
    }

    /// Afternoon break: 15:45-16:15, then 16:00-16:15.
    pub fn afternoon() -> Self {
        Self {
            windows: windows(&[(15, 45, 16, 15), (16, 0, 16, 15)]),
            ..Self::new("afternoon", "Break", "Afternoon Break")
        }
    }

    /// Morning, lunch, afternoon.
    pub fn standard() -> Vec<Self> {
        vec![Self::morning(), Self::lunch(), Self::afternoon()]
    }
}

fn windows(bounds: &[(u32, u32, u32, u32)]) -> Vec<TimeSlot> {
    bounds
        .iter()
        .filter_map(|&(sh, sm, eh, em)| {
            TimeSlot::new(TimePoint::from_hm(sh, sm)?, TimePoint::from_hm(eh, em)?).ok()
        })
        .collect()
}

/// What to do when two entries claim the same part of a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Keep every entry; cell lookups return the first in record order.
    /// Issues are logged and attached to the grid.
    #[default]
    FirstWins,
    /// Fail the batch with [`GridError::Rejected`](crate::error::GridError::Rejected)
    /// on any issue, unrendered days included.
    Reject,
}

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Atomic slots shorter than this are discarded (minutes).
    pub min_slot_minutes: i64,
    /// Free periods shorter than this are not emitted (minutes).
    pub min_free_minutes: i64,
    /// Break categories, processed in order.
    pub break_categories: Vec<BreakCategory>,
    /// Days rendered as grid rows.
    pub days: Vec<Day>,
    /// Batch keys skipped entirely.
    pub excluded_batches: Vec<String>,
    /// Conflict handling.
    pub conflict_policy: ConflictPolicy,
}

impl TimetableConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            min_slot_minutes: DEFAULT_MIN_SLOT_MINUTES,
            min_free_minutes: DEFAULT_MIN_FREE_MINUTES,
            break_categories: BreakCategory::standard(),
            days: Day::ALL.to_vec(),
            excluded_batches: vec![ALL_BATCHES_KEY.to_string()],
            conflict_policy: ConflictPolicy::default(),
        }
    }

    /// Sets the minimum atomic slot length.
    pub fn with_min_slot_minutes(mut self, minutes: i64) -> Self {
        self.min_slot_minutes = minutes;
        self
    }

    /// Sets the minimum free-period length.
    pub fn with_min_free_minutes(mut self, minutes: i64) -> Self {
        self.min_free_minutes = minutes;
        self
    }

    /// Replaces the break categories.
    pub fn with_break_categories(mut self, categories: Vec<BreakCategory>) -> Self {
        self.break_categories = categories;
        self
    }

    /// Replaces the rendered day set.
    pub fn with_days(mut self, days: Vec<Day>) -> Self {
        self.days = days;
        self
    }

    /// Replaces the excluded batch keys.
    pub fn with_excluded_batches(mut self, batches: Vec<String>) -> Self {
        self.excluded_batches = batches;
        self
    }

    /// Sets the conflict policy.
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Whether a batch key is skipped.
    pub fn is_excluded(&self, batch: &str) -> bool {
        self.excluded_batches.iter().any(|b| b == batch)
    }
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self::new()
    }
}
