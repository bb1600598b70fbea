//! Timetable domain models.
//!
//! Plain data types shared by every pipeline stage: wall-clock times and
//! slots, teaching days, input sessions, and the entries that populate a
//! batch grid.
//!
//! | Type | Role |
//! |------|------|
//! | [`TimePoint`] | `HH:MM` time of day |
//! | [`TimeSlot`] | half-open `[start, end)` interval |
//! | [`SessionRecord`] | raw input row |
//! | [`Session`] | parsed scheduled class |
//! | [`SyntheticEntry`] | derived break or free period |
//! | [`GridEntry`] | either of the above, as stored in a grid |

mod day;
mod entry;
mod session;
mod time;

pub use day::Day;
pub use entry::{
    GridEntry, SyntheticEntry, SyntheticKind, FREE_COURSE, FREE_LABEL, NOT_APPLICABLE,
    SYNTHETIC_TYPE,
};
pub use session::{Session, SessionRecord};
pub use time::{TimePoint, TimeSlot};
