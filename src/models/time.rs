//! Time-of-day points and slots.
//!
//! # Time Model
//! A [`TimePoint`] is a wall-clock time with minute precision and no date
//! or timezone. A [`TimeSlot`] is a half-open interval `[start, end)`
//! between two points of the same day, with `start < end` guaranteed by
//! construction.
//!
//! Both serialize as their display strings (`"10:30"`, `"10:30-10:45"`),
//! which is also the format of the tabular input.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

const TIME_FORMAT: &str = "%H:%M";

/// A time of day, exact to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimePoint(NaiveTime);

impl TimePoint {
    /// Creates a time point from hour and minute.
    ///
    /// Returns `None` outside `00:00..=23:59`.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parses a `HH:MM` string. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
            .map(Self)
            .map_err(|_| ParseError::InvalidTime(trimmed.to_string()))
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Signed number of minutes from `earlier` to `self`.
    pub fn minutes_since(&self, earlier: TimePoint) -> i64 {
        self.0.signed_duration_since(earlier.0).num_minutes()
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl FromStr for TimePoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimePoint {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TimePoint> for String {
    fn from(t: TimePoint) -> Self {
        t.to_string()
    }
}

/// A time interval `[start, end)` within one day.
///
/// Ordered by start, then end.
///
/// # Examples
///
/// ```
/// use u_timetable::models::TimeSlot;
///
/// let lecture = TimeSlot::parse("09:00-10:30").unwrap();
/// let tea = TimeSlot::parse("10:30-10:45").unwrap();
/// assert_eq!(lecture.duration_minutes(), 90);
/// assert!(!lecture.overlaps(&tea)); // touching endpoints do not overlap
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    start: TimePoint,
    end: TimePoint,
}

impl TimeSlot {
    /// Creates a slot. Fails with [`ParseError::EmptyRange`] unless `start < end`.
    pub fn new(start: TimePoint, end: TimePoint) -> Result<Self, ParseError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(ParseError::EmptyRange(format!("{start}-{end}")))
        }
    }

    /// Parses a `HH:MM-HH:MM` string.
    ///
    /// Fails unless the string holds exactly two well-formed times and the
    /// second is after the first.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let trimmed = s.trim();
        let invalid = || ParseError::InvalidRange(trimmed.to_string());

        let mut parts = trimmed.split('-');
        let (start, end) = match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => (start, end),
            _ => return Err(invalid()),
        };
        let start = TimePoint::parse(start).map_err(|_| invalid())?;
        let end = TimePoint::parse(end).map_err(|_| invalid())?;

        Self::new(start, end)
    }

    /// Slot start (inclusive).
    #[inline]
    pub fn start(&self) -> TimePoint {
        self.start
    }

    /// Slot end (exclusive).
    #[inline]
    pub fn end(&self) -> TimePoint {
        self.end
    }

    /// Length in minutes. Always positive.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes_since(self.start)
    }

    /// Whether two slots share more than a boundary point.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether `other` lies entirely within this slot.
    pub fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for TimeSlot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(s: &str) -> TimeSlot {
        TimeSlot::parse(s).unwrap()
    }

    #[test]
    fn test_parse_time() {
        let t = TimePoint::parse("10:45").unwrap();
        assert_eq!(t.hour(), 10);
        assert_eq!(t.minute(), 45);
        assert_eq!(t.to_string(), "10:45");
        assert_eq!(TimePoint::parse(" 08:05 ").unwrap().to_string(), "08:05");
    }

    #[test]
    fn test_parse_time_malformed() {
        for bad in ["", "10", "10:", "25:00", "10:60", "ten:30", "10:30:00"] {
            assert!(
                matches!(TimePoint::parse(bad), Err(ParseError::InvalidTime(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_time_ordering() {
        let a = TimePoint::from_hm(9, 0).unwrap();
        let b = TimePoint::from_hm(13, 15).unwrap();
        assert!(a < b);
        assert_eq!(b.minutes_since(a), 255);
        assert_eq!(a.minutes_since(b), -255);
        assert!(TimePoint::from_hm(24, 0).is_none());
    }

    #[test]
    fn test_parse_slot() {
        let s = slot("09:00-10:30");
        assert_eq!(s.start(), TimePoint::from_hm(9, 0).unwrap());
        assert_eq!(s.end(), TimePoint::from_hm(10, 30).unwrap());
        assert_eq!(s.duration_minutes(), 90);
        assert_eq!(s.to_string(), "09:00-10:30");
    }

    #[test]
    fn test_parse_slot_malformed() {
        assert!(matches!(
            TimeSlot::parse("09:00"),
            Err(ParseError::InvalidRange(_))
        ));
        assert!(matches!(
            TimeSlot::parse("09:00-10:00-11:00"),
            Err(ParseError::InvalidRange(_))
        ));
        assert!(matches!(
            TimeSlot::parse("09:00-1O:00"),
            Err(ParseError::InvalidRange(_))
        ));
        assert!(matches!(
            TimeSlot::parse("10:00-09:00"),
            Err(ParseError::EmptyRange(_))
        ));
        assert!(matches!(
            TimeSlot::parse("10:00-10:00"),
            Err(ParseError::EmptyRange(_))
        ));
    }

    #[test]
    fn test_slot_overlap_half_open() {
        let a = slot("09:00-10:30");
        let b = slot("10:00-11:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let touching = slot("10:30-10:45");
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));

        let inner = slot("09:30-09:45");
        assert!(a.overlaps(&inner));
    }

    #[test]
    fn test_slot_encloses() {
        let window = slot("12:15-13:15");
        assert!(window.encloses(&slot("12:15-13:15")));
        assert!(window.encloses(&slot("12:30-13:00")));
        assert!(!window.encloses(&slot("12:00-12:30")));
        assert!(!window.encloses(&slot("13:00-13:30")));
    }

    #[test]
    fn test_slot_ordering() {
        let mut slots = vec![slot("11:00-12:30"), slot("09:00-10:30"), slot("09:00-09:45")];
        slots.sort();
        let rendered: Vec<String> = slots.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["09:00-09:45", "09:00-10:30", "11:00-12:30"]);
    }

    #[test]
    fn test_slot_serde_as_string() {
        let s = slot("13:00-14:00");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"13:00-14:00\"");

        let back: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);

        assert!(serde_json::from_str::<TimeSlot>("\"14:00-13:00\"").is_err());
    }
}
