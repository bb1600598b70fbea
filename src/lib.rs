//! Weekly timetable grids for academic batches.
//!
//! Consolidates an already-fixed list of class sessions into one grid per
//! batch: rows are days, columns are the batch's time slots, and every
//! cell is a class, a standard break, a free period, or empty.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimePoint`, `TimeSlot`, `Day`,
//!   `SessionRecord`, `Session`, `SyntheticEntry`, `GridEntry`
//! - **`config`**: Pipeline tunables — slot minimums, break windows, day set
//! - **`synthesis`**: Atomic slot synthesis, break insertion, gap finding
//! - **`grid`**: Grid assembly, cell lookup, course colour allocation
//! - **`validation`**: Overlap and unrendered-day checks
//! - **`timetable`**: Batch partitioning and the per-batch pipeline
//!
//! # Architecture
//!
//! Data flows strictly forward and each batch is independent:
//!
//! ```text
//! records → sessions → atomic slots → breaks → free periods → grid
//! ```
//!
//! Reading tabular files, course metadata lookup, and rendering are left
//! to the caller. The crate defines no file format of its own.

pub mod config;
pub mod error;
pub mod grid;
pub mod models;
pub mod synthesis;
pub mod timetable;
pub mod validation;
