//! Course colour allocation.
//!
//! Colours are hex RGB strings without `#`. Each course gets the next
//! palette colour the first time it is seen; the palette wraps around when
//! exhausted. The registry is an explicit per-run value, so two runs over
//! the same input assign the same colours.

use std::collections::HashMap;

use super::BatchGrid;
use crate::models::GridEntry;

/// Default course palette.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "FFCCFF", "CCFFCC", "9999FF", "FFFF99", "FF9999", "99FFFF", "FFCC99", "CC99FF",
];

/// Fill colour for breaks and free periods.
pub const BREAK_COLOR: &str = "DDDDDD";

/// First-seen colour allocator.
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    palette: Vec<String>,
    assigned: HashMap<String, usize>,
}

impl ColorRegistry {
    /// Creates a registry over [`DEFAULT_PALETTE`].
    pub fn new() -> Self {
        Self::with_palette(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }

    /// Creates a registry over a custom palette.
    ///
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn with_palette(palette: Vec<String>) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
        } else {
            palette
        };
        Self {
            palette,
            assigned: HashMap::new(),
        }
    }

    /// Colour of a course, assigning the next one if unseen.
    pub fn color_for(&mut self, course: &str) -> &str {
        let next = self.assigned.len();
        let index = *self.assigned.entry(course.to_string()).or_insert(next);
        &self.palette[index % self.palette.len()]
    }

    /// Colour already assigned to a course.
    pub fn get(&self, course: &str) -> Option<&str> {
        self.assigned
            .get(course)
            .map(|&i| self.palette[i % self.palette.len()].as_str())
    }

    /// Fill colour of a grid cell. Synthetic entries get [`BREAK_COLOR`].
    pub fn color_for_entry(&mut self, entry: &GridEntry) -> &str {
        match entry {
            GridEntry::Class(session) => self.color_for(&session.course),
            GridEntry::Synthetic(_) => BREAK_COLOR,
        }
    }

    /// Assigns colours to every class cell of a grid, row-major.
    pub fn assign_grid(&mut self, grid: &BatchGrid) {
        for (_, cells) in grid.rows() {
            for entry in cells.into_iter().flatten() {
                self.color_for_entry(entry);
            }
        }
    }

    /// Number of courses with a colour.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Whether no course has a colour yet.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridAssembler;
    use crate::models::{Day, Session, SyntheticEntry, TimeSlot};

    #[test]
    fn test_first_seen_order() {
        let mut reg = ColorRegistry::new();
        assert_eq!(reg.color_for("CS101"), "FFCCFF");
        assert_eq!(reg.color_for("CS102"), "CCFFCC");
        assert_eq!(reg.color_for("CS101"), "FFCCFF");
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("CS102"), Some("CCFFCC"));
        assert_eq!(reg.get("MA101"), None);
    }

    #[test]
    fn test_palette_wraps() {
        let mut reg = ColorRegistry::with_palette(vec!["AAAAAA".into(), "BBBBBB".into()]);
        assert_eq!(reg.color_for("A"), "AAAAAA");
        assert_eq!(reg.color_for("B"), "BBBBBB");
        assert_eq!(reg.color_for("C"), "AAAAAA");
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let mut reg = ColorRegistry::with_palette(Vec::new());
        assert_eq!(reg.color_for("A"), DEFAULT_PALETTE[0]);
    }

    #[test]
    fn test_synthetic_cells_are_grey() {
        let mut reg = ColorRegistry::new();
        let free: GridEntry =
            SyntheticEntry::free_period("B", Day::Monday, TimeSlot::parse("12:00-13:00").unwrap()).into();
        assert_eq!(reg.color_for_entry(&free), BREAK_COLOR);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_assign_grid_row_major() {
        let slot = |s: &str| TimeSlot::parse(s).unwrap();
        // Input order lists MA101 first, but CS101 is the first cell on Monday.
        let sessions = vec![
            Session::new("B", Day::Tuesday, slot("09:00-10:00"), "MA101"),
            Session::new("B", Day::Monday, slot("10:00-11:00"), "PH101"),
            Session::new("B", Day::Monday, slot("09:00-10:00"), "CS101"),
        ];
        let grid = GridAssembler::new(Day::ALL.to_vec()).assemble("B", &sessions, vec![], vec![]);

        let mut reg = ColorRegistry::new();
        reg.assign_grid(&grid);
        assert_eq!(reg.get("CS101"), Some(DEFAULT_PALETTE[0]));
        assert_eq!(reg.get("PH101"), Some(DEFAULT_PALETTE[1]));
        assert_eq!(reg.get("MA101"), Some(DEFAULT_PALETTE[2]));
    }
}
