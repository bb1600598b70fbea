//! Grid assembly and renderer support.
//!
//! [`GridAssembler`] merges a batch's classes with the synthesized breaks
//! and free periods into a [`BatchGrid`]: a day-major record set plus the
//! chronologically ordered column axis. [`ColorRegistry`] is a small
//! deterministic allocator a renderer can use to colour class cells.
//!
//! The grid is conceptually a sparse map `(day, slot) → entry`. Lookups
//! that find nothing render as empty cells.

mod assembler;
mod palette;

pub use assembler::{BatchGrid, GridAssembler};
pub use palette::{ColorRegistry, BREAK_COLOR, DEFAULT_PALETTE};
