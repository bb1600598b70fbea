//! Grid entries: real sessions and derived fillers.
//!
//! Synthetic entries mirror the shape of a [`Session`] so a renderer can
//! treat every cell uniformly. Their room and faculty are always `"N/A"`
//! and their session type is always `"BREAK"`, free periods included.

use serde::{Deserialize, Serialize};

use super::{Day, Session, TimeSlot};

/// Session type shared by every synthetic entry.
pub const SYNTHETIC_TYPE: &str = "BREAK";

/// Room and faculty placeholder for synthetic entries.
pub const NOT_APPLICABLE: &str = "N/A";

/// Course sentinel for free periods.
pub const FREE_COURSE: &str = "Free";

/// Label for free periods.
pub const FREE_LABEL: &str = "Free Period";

/// What a synthetic entry stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntheticKind {
    /// A standard break inserted from a configured break category.
    Break,
    /// A residual gap with no class.
    FreePeriod,
}

/// A derived, non-input grid entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticEntry {
    /// Day of the week.
    pub day: Day,
    /// Time range.
    pub slot: TimeSlot,
    /// Batch key.
    pub batch: String,
    /// Break or free period.
    pub kind: SyntheticKind,
    /// Course sentinel (`"Break"`, `"Lunch"`, `"Free"`).
    pub course: String,
    /// Display label (`"Morning Break"`, `"Free Period"`, ...).
    pub label: String,
}

impl SyntheticEntry {
    /// Creates a break entry.
    pub fn break_entry(
        batch: impl Into<String>,
        day: Day,
        slot: TimeSlot,
        course: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            day,
            slot,
            batch: batch.into(),
            kind: SyntheticKind::Break,
            course: course.into(),
            label: label.into(),
        }
    }

    /// Creates a free-period entry.
    pub fn free_period(batch: impl Into<String>, day: Day, slot: TimeSlot) -> Self {
        Self {
            day,
            slot,
            batch: batch.into(),
            kind: SyntheticKind::FreePeriod,
            course: FREE_COURSE.to_string(),
            label: FREE_LABEL.to_string(),
        }
    }
}

/// One record of a batch grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum GridEntry {
    /// A scheduled class from the input.
    Class(Session),
    /// A break or free period derived by the pipeline.
    Synthetic(SyntheticEntry),
}

impl GridEntry {
    /// Day of the week.
    pub fn day(&self) -> Day {
        match self {
            Self::Class(s) => s.day,
            Self::Synthetic(e) => e.day,
        }
    }

    /// Time range.
    pub fn slot(&self) -> TimeSlot {
        match self {
            Self::Class(s) => s.slot,
            Self::Synthetic(e) => e.slot,
        }
    }

    /// Batch key.
    pub fn batch(&self) -> &str {
        match self {
            Self::Class(s) => &s.batch,
            Self::Synthetic(e) => &e.batch,
        }
    }

    /// Course code or synthetic sentinel.
    pub fn course(&self) -> &str {
        match self {
            Self::Class(s) => &s.course,
            Self::Synthetic(e) => &e.course,
        }
    }

    /// Room code, `"N/A"` for synthetic entries.
    pub fn room(&self) -> &str {
        match self {
            Self::Class(s) => &s.room,
            Self::Synthetic(_) => NOT_APPLICABLE,
        }
    }

    /// Faculty, `"N/A"` for synthetic entries.
    pub fn faculty(&self) -> &str {
        match self {
            Self::Class(s) => &s.faculty,
            Self::Synthetic(_) => NOT_APPLICABLE,
        }
    }

    /// Session type, `"BREAK"` for synthetic entries.
    pub fn session_type(&self) -> &str {
        match self {
            Self::Class(s) => &s.session_type,
            Self::Synthetic(_) => SYNTHETIC_TYPE,
        }
    }

    /// Display label of a synthetic entry.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Class(_) => None,
            Self::Synthetic(e) => Some(&e.label),
        }
    }

    /// Whether this entry was derived rather than read from input.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic(_))
    }

    /// The synthetic kind, if any.
    pub fn synthetic_kind(&self) -> Option<SyntheticKind> {
        match self {
            Self::Class(_) => None,
            Self::Synthetic(e) => Some(e.kind),
        }
    }
}

impl From<Session> for GridEntry {
    fn from(session: Session) -> Self {
        Self::Class(session)
    }
}

impl From<SyntheticEntry> for GridEntry {
    fn from(entry: SyntheticEntry) -> Self {
        Self::Synthetic(entry)
    }
}
