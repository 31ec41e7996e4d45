//! The immutable maze model
//!
//! This module provides the grid the search runs over:
//! - [`Coord`]: a (row, column) pair
//! - [`Direction`]: the four cardinal moves, with the fixed exploration
//!   order [`Direction::ORDER`]
//! - [`Grid`]: a rectangular field of passable/blocked cells with a start
//!   and a goal
//!
//! The grid is built once (from a layout string or an explicit blocked list)
//! and never mutated afterwards.  All queries are total: out-of-bounds
//! coordinates answer `false`/empty rather than panicking.

mod layout;

pub use layout::{LayoutError, DEMO_LAYOUT};

use std::fmt;

/// A cell coordinate: row 0 is the top row, column 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// The adjacent coordinate one cell in `dir`, or `None` when the move
    /// would leave the top or left edge.  The bottom and right edges are
    /// bounded by [`Grid::in_bounds`] instead.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        match dir {
            Direction::Right => Some(Coord::new(self.row, self.col + 1)),
            Direction::Down => Some(Coord::new(self.row + 1, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|c| Coord::new(self.row, c)),
            Direction::Up => self.row.checked_sub(1).map(|r| Coord::new(r, self.col)),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cardinal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// Fixed exploration priority.  The order determines which of several
    /// valid paths the search discovers first, so it is part of the
    /// engine's observable behavior and must not change.
    pub const ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
}

/// A rectangular maze: passable/blocked cells plus a start and a goal.
///
/// Invariants enforced at construction: dimensions are non-zero, and the
/// start and goal are distinct-or-equal passable cells inside the bounds.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    passable: Vec<bool>, // row-major
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Build a grid from explicit dimensions and a blocked-cell list.
    pub fn new(
        rows: usize,
        cols: usize,
        blocked: &[Coord],
        start: Coord,
        goal: Coord,
    ) -> Result<Grid, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::EmptyLayout);
        }

        let mut passable = vec![true; rows * cols];
        for &c in blocked {
            if c.row >= rows || c.col >= cols {
                return Err(LayoutError::CellOutOfBounds { coord: c });
            }
            passable[c.row * cols + c.col] = false;
        }

        let grid = Grid {
            rows,
            cols,
            passable,
            start,
            goal,
        };
        grid.check_endpoint("start", start)?;
        grid.check_endpoint("goal", goal)?;
        Ok(grid)
    }

    fn check_endpoint(&self, name: &'static str, c: Coord) -> Result<(), LayoutError> {
        if !self.in_bounds(c) {
            return Err(LayoutError::EndpointOutOfBounds { name, coord: c });
        }
        if !self.is_passable(c) {
            return Err(LayoutError::EndpointBlocked { name, coord: c });
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn in_bounds(&self, c: Coord) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    /// Whether `c` is an in-bounds, non-blocked cell.  Out-of-bounds
    /// coordinates are simply not passable; this never panics.
    pub fn is_passable(&self, c: Coord) -> bool {
        self.in_bounds(c) && self.passable[c.row * self.cols + c.col]
    }

    /// The in-bounds cardinal neighbors of `c`, in the fixed
    /// right/down/left/up priority order.  Blocked cells are included;
    /// passability is the caller's check.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ORDER
            .iter()
            .filter_map(move |&dir| c.step(dir))
            .filter(|&n| self.in_bounds(n))
    }
}
