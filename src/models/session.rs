//! Class session models.
//!
//! A [`SessionRecord`] is one row of the external tabular input, with every
//! field still a string. A [`Session`] is the parsed, immutable fact the
//! pipeline works on. Conversion fails only on the day or time columns;
//! free-text fields are carried through untouched.

use serde::{Deserialize, Serialize};

use super::{Day, TimeSlot};
use crate::error::ParseError;

/// One raw row of scheduled-class input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionRecord {
    /// Day name, e.g. `"Monday"`.
    pub day: String,
    /// Time range, `"HH:MM-HH:MM"`.
    pub time: String,
    /// Room code.
    pub room: String,
    /// Batch key, e.g. `"CSE_A_2023"`.
    pub batch: String,
    /// Course code.
    pub course: String,
    /// Session type (`"LEC"`, `"LAB"`, `"TUT"`, ...).
    #[serde(rename = "Type")]
    pub session_type: String,
    /// Faculty name.
    pub faculty: String,
}

impl SessionRecord {
    /// Creates a record with the scheduling columns set and empty text fields.
    pub fn new(
        batch: impl Into<String>,
        day: impl Into<String>,
        time: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
            batch: batch.into(),
            course: course.into(),
            ..Self::default()
        }
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the session type.
    pub fn with_type(mut self, session_type: impl Into<String>) -> Self {
        self.session_type = session_type.into();
        self
    }

    /// Sets the faculty.
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = faculty.into();
        self
    }
}

/// A scheduled class occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Day of the week.
    pub day: Day,
    /// Time range.
    pub slot: TimeSlot,
    /// Room code.
    pub room: String,
    /// Batch key.
    pub batch: String,
    /// Course code.
    pub course: String,
    /// Session type.
    pub session_type: String,
    /// Faculty name.
    pub faculty: String,
}

impl Session {
    /// Creates a session with empty room, type, and faculty.
    pub fn new(batch: impl Into<String>, day: Day, slot: TimeSlot, course: impl Into<String>) -> Self {
        Self {
            day,
            slot,
            room: String::new(),
            batch: batch.into(),
            course: course.into(),
            session_type: String::new(),
            faculty: String::new(),
        }
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the session type.
    pub fn with_type(mut self, session_type: impl Into<String>) -> Self {
        self.session_type = session_type.into();
        self
    }

    /// Sets the faculty.
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = faculty.into();
        self
    }
}

impl TryFrom<&SessionRecord> for Session {
    type Error = ParseError;

    fn try_from(record: &SessionRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            day: Day::parse(&record.day)?,
            slot: TimeSlot::parse(&record.time)?,
            room: record.room.clone(),
            batch: record.batch.clone(),
            course: record.course.clone(),
            session_type: record.session_type.clone(),
            faculty: record.faculty.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_record() {
        let record = SessionRecord::new("CSE_A_2023", "Monday", "09:00-10:30", "CS101")
            .with_room("C-101")
            .with_type("LEC")
            .with_faculty("Dr. Rao");

        let session = Session::try_from(&record).unwrap();
        assert_eq!(session.day, Day::Monday);
        assert_eq!(session.slot.to_string(), "09:00-10:30");
        assert_eq!(session.room, "C-101");
        assert_eq!(session.batch, "CSE_A_2023");
        assert_eq!(session.course, "CS101");
        assert_eq!(session.session_type, "LEC");
        assert_eq!(session.faculty, "Dr. Rao");
    }

    #[test]
    fn test_session_from_bad_record() {
        let bad_time = SessionRecord::new("B", "Monday", "9-10", "CS101");
        assert!(matches!(
            Session::try_from(&bad_time),
            Err(ParseError::InvalidRange(_))
        ));

        let bad_day = SessionRecord::new("B", "Funday", "09:00-10:00", "CS101");
        assert!(matches!(
            Session::try_from(&bad_day),
            Err(ParseError::UnknownDay(_))
        ));
    }

    #[test]
    fn test_record_deserializes_tabular_columns() {
        let json = r#"{
            "Day": "Tuesday",
            "Time": "11:00-12:30",
            "Room": "L-2",
            "Batch": "ECE_B_2024",
            "Course": "EC201",
            "Type": "LAB",
            "Faculty": "Dr. Iyer"
        }"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.session_type, "LAB");
        assert_eq!(record.batch, "ECE_B_2024");

        let session = Session::try_from(&record).unwrap();
        assert_eq!(session.day, Day::Tuesday);
    }
}
