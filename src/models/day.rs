//! Teaching days.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A teaching day of the week.
///
/// Ordered Monday first. Parses full English names (case-insensitive)
/// and the three-letter short forms used in grid row headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All teaching days, Monday first.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Row header label (`MON`..`SAT`).
    pub fn short_name(&self) -> &'static str {
        match self {
            Day::Monday => "MON",
            Day::Tuesday => "TUE",
            Day::Wednesday => "WED",
            Day::Thursday => "THU",
            Day::Friday => "FRI",
            Day::Saturday => "SAT",
        }
    }

    /// Parses a full or short day name.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| {
                trimmed.eq_ignore_ascii_case(d.name()) || trimmed.eq_ignore_ascii_case(d.short_name())
            })
            .ok_or_else(|| ParseError::UnknownDay(trimmed.to_string()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
