//! Layout text parsing
//!
//! A layout is a block of lines, one character per cell:
//!
//! ```text
//! S.##
//! ....
//! #.##
//! #..G
//! ```
//!
//! `#` is a wall, `.` an open cell, `S` the start, `G` the goal.  Blank
//! leading/trailing lines are ignored; every remaining line must have the
//! same width, and exactly one `S` and one `G` must appear.

use std::fmt;

use super::{Coord, Grid};

/// The built-in demo maze shown when no layout file is given.
pub const DEMO_LAYOUT: &str = "\
S.##
....
#.##
#..G
";

/// Errors produced while parsing a layout or constructing a [`Grid`].
///
/// All of these are fatal for the run; none can occur once a grid has been
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout contained no cells at all.
    EmptyLayout,

    /// A line's width differed from the first line's.
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A character other than `#`, `.`, `S`, `G`.
    UnknownCell { ch: char, coord: Coord },

    /// No `S` cell in the layout.
    MissingStart,

    /// No `G` cell in the layout.
    MissingGoal,

    /// More than one `S` or `G`.
    DuplicateMarker { ch: char, coord: Coord },

    /// A blocked-cell coordinate outside the stated dimensions
    /// (explicit-list construction only).
    CellOutOfBounds { coord: Coord },

    /// Start or goal outside the bounds.
    EndpointOutOfBounds { name: &'static str, coord: Coord },

    /// Start or goal on a blocked cell.
    EndpointBlocked { name: &'static str, coord: Coord },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptyLayout => write!(f, "layout has no cells"),
            LayoutError::RaggedRow { row, expected, got } => write!(
                f,
                "row {} is {} cells wide, expected {}",
                row, got, expected
            ),
            LayoutError::UnknownCell { ch, coord } => {
                write!(f, "unknown cell character {:?} at {}", ch, coord)
            }
            LayoutError::MissingStart => write!(f, "layout has no start cell 'S'"),
            LayoutError::MissingGoal => write!(f, "layout has no goal cell 'G'"),
            LayoutError::DuplicateMarker { ch, coord } => {
                write!(f, "duplicate {:?} marker at {}", ch, coord)
            }
            LayoutError::CellOutOfBounds { coord } => {
                write!(f, "blocked cell {} is outside the grid", coord)
            }
            LayoutError::EndpointOutOfBounds { name, coord } => {
                write!(f, "{} {} is outside the grid", name, coord)
            }
            LayoutError::EndpointBlocked { name, coord } => {
                write!(f, "{} {} is a blocked cell", name, coord)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl Grid {
    /// Parse a layout string into a grid.
    pub fn parse(text: &str) -> Result<Grid, LayoutError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let lines: &[&str] = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(LayoutError::EmptyLayout),
        };

        let cols = lines[0].chars().count();
        if cols == 0 {
            return Err(LayoutError::EmptyLayout);
        }

        let mut blocked = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: cols,
                    got: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let coord = Coord::new(row, col);
                match ch {
                    '.' => {}
                    '#' => blocked.push(coord),
                    'S' => {
                        if start.replace(coord).is_some() {
                            return Err(LayoutError::DuplicateMarker { ch, coord });
                        }
                    }
                    'G' => {
                        if goal.replace(coord).is_some() {
                            return Err(LayoutError::DuplicateMarker { ch, coord });
                        }
                    }
                    _ => return Err(LayoutError::UnknownCell { ch, coord }),
                }
            }
        }

        let start = start.ok_or(LayoutError::MissingStart)?;
        let goal = goal.ok_or(LayoutError::MissingGoal)?;

        Grid::new(lines.len(), cols, &blocked, start, goal)
    }
}
