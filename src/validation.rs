//! Data-quality checks for a batch's merged entries.
//!
//! The pipeline assumes sessions of one batch never overlap on a day and
//! that every day with sessions is rendered. These checks make violations
//! visible instead of letting the grid's first-match lookup hide them.
//! Detects:
//! - Two entries with the identical (day, slot)
//! - Two entries on a day whose slots overlap without being identical
//! - Entries on a day outside the rendered day set

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::models::{Day, GridEntry};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Day the issue occurs on.
    pub day: Day,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// Two entries occupy exactly the same cell.
    DuplicateCell,
    /// Two entries overlap in time on the same day.
    OverlappingEntries,
    /// Entries exist for a day that is not rendered.
    UnrenderedDay,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, day: Day, message: impl Into<String>) -> Self {
        Self {
            kind,
            day,
            message: message.into(),
        }
    }
}

/// Validates a batch's merged entries against the rendered day set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues,
/// ordered by day.
pub fn validate_entries(entries: &[GridEntry], days: &[Day]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut by_day: BTreeMap<Day, Vec<&GridEntry>> = BTreeMap::new();
    for entry in entries {
        by_day.entry(entry.day()).or_default().push(entry);
    }

    for (&day, day_entries) in &by_day {
        if !days.contains(&day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnrenderedDay,
                day,
                format!(
                    "{} entries on {day} will not be rendered",
                    day_entries.len()
                ),
            ));
        }

        for (i, a) in day_entries.iter().enumerate() {
            for b in &day_entries[i + 1..] {
                let (sa, sb) = (a.slot(), b.slot());
                if sa == sb {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateCell,
                        day,
                        format!(
                            "'{}' and '{}' both occupy {day} {sa}",
                            a.course(),
                            b.course()
                        ),
                    ));
                } else if sa.overlaps(&sb) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::OverlappingEntries,
                        day,
                        format!(
                            "'{}' at {sa} overlaps '{}' at {sb} on {day}",
                            a.course(),
                            b.course()
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, SyntheticEntry, TimeSlot};

    fn class(day: Day, time: &str, course: &str) -> GridEntry {
        Session::new("B1", day, TimeSlot::parse(time).unwrap(), course).into()
    }

    fn weekdays() -> Vec<Day> {
        Day::ALL[..5].to_vec()
    }

    #[test]
    fn test_valid_entries() {
        let entries = vec![
            class(Day::Monday, "09:00-10:30", "CS101"),
            class(Day::Monday, "10:30-12:00", "CS102"),
            class(Day::Tuesday, "09:00-10:30", "CS101"),
        ];
        assert!(validate_entries(&entries, &weekdays()).is_ok());
    }

    #[test]
    fn test_duplicate_cell() {
        let entries = vec![
            class(Day::Monday, "09:00-10:30", "CS101"),
            SyntheticEntry::free_period("B1", Day::Monday, TimeSlot::parse("09:00-10:30").unwrap())
                .into(),
        ];
        let errors = validate_entries(&entries, &weekdays()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateCell);
        assert!(errors[0].message.contains("CS101"));
        assert!(errors[0].message.contains("Free"));
    }

    #[test]
    fn test_overlapping_entries() {
        let entries = vec![
            class(Day::Wednesday, "09:00-10:30", "CS101"),
            class(Day::Wednesday, "10:00-11:00", "MA101"),
        ];
        let errors = validate_entries(&entries, &weekdays()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OverlappingEntries && e.day == Day::Wednesday));
    }

    #[test]
    fn test_touching_entries_are_fine() {
        let entries = vec![
            class(Day::Friday, "09:00-10:00", "A"),
            class(Day::Friday, "10:00-11:00", "B"),
        ];
        assert!(validate_entries(&entries, &weekdays()).is_ok());
    }

    #[test]
    fn test_unrendered_day() {
        let entries = vec![
            class(Day::Monday, "09:00-10:00", "A"),
            class(Day::Saturday, "09:00-10:00", "B"),
        ];
        let errors = validate_entries(&entries, &weekdays()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::UnrenderedDay);
        assert_eq!(errors[0].day, Day::Saturday);

        assert!(validate_entries(&entries, &Day::ALL).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let entries = vec![
            class(Day::Saturday, "09:00-10:00", "A"),
            class(Day::Saturday, "09:00-10:00", "B"),
            class(Day::Saturday, "09:30-10:30", "C"),
        ];
        let errors = validate_entries(&entries, &weekdays()).unwrap_err();
        // unrendered day + A/B duplicate + A/C and B/C overlaps
        assert_eq!(errors.len(), 4);
    }
}
