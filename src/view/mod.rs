//! Pure render model
//!
//! [`MazeView`] projects a prefix of the recorded step sequence onto
//! per-cell display states.  It is membership-driven and idempotent:
//! applying the same step twice leaves the view unchanged, and a view
//! rebuilt from any step prefix via [`MazeView::replay`] equals one that
//! applied those steps incrementally.  That replay property is what lets
//! the UI step backward through the animation.
//!
//! The view knows nothing about walls or endpoints; the maze pane reads
//! those from the [`Grid`](crate::grid::Grid) directly.

use crate::grid::{Coord, Grid};
use crate::search::{Step, StepKind};

/// Display state of one cell, as driven by the steps seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    /// Never entered (or the view was rebuilt past its activity).
    Untouched,

    /// Currently on the candidate path.
    OnPath,

    /// On the path but flagged as a dead end, about to be undone.
    DeadEnd,

    /// Entered once, then backtracked out of.
    Abandoned,
}

#[derive(Debug, Clone)]
pub struct MazeView {
    rows: usize,
    cols: usize,
    marks: Vec<CellMark>,
    path: Vec<Coord>,
    head: Option<Coord>,
    solved: bool,
    exhausted: bool,
}

impl MazeView {
    /// An empty view sized for `grid`, with no steps applied.
    pub fn new(grid: &Grid) -> Self {
        MazeView {
            rows: grid.rows(),
            cols: grid.cols(),
            marks: vec![CellMark::Untouched; grid.rows() * grid.cols()],
            path: Vec::new(),
            head: None,
            solved: false,
            exhausted: false,
        }
    }

    /// A view with exactly the given step prefix applied.
    pub fn replay(grid: &Grid, steps: &[Step]) -> Self {
        let mut view = MazeView::new(grid);
        for &step in steps {
            view.apply(step);
        }
        view
    }

    /// Apply one step.  Out-of-bounds coordinates are ignored.
    pub fn apply(&mut self, step: Step) {
        match step.kind {
            StepKind::Advance => {
                self.set_mark(step.coord, CellMark::OnPath);
                if self.path.last() != Some(&step.coord) {
                    self.path.push(step.coord);
                }
                self.head = Some(step.coord);
            }
            StepKind::DeadEnd => {
                self.set_mark(step.coord, CellMark::DeadEnd);
                self.head = Some(step.coord);
            }
            StepKind::Backtrack => {
                self.set_mark(step.coord, CellMark::Abandoned);
                if self.path.last() == Some(&step.coord) {
                    self.path.pop();
                }
                self.head = self.path.last().copied();
            }
            StepKind::GoalReached => {
                self.solved = true;
                self.head = Some(step.coord);
            }
            StepKind::Exhausted => {
                self.exhausted = true;
                self.head = None;
            }
        }
    }

    fn set_mark(&mut self, c: Coord, mark: CellMark) {
        if c.row < self.rows && c.col < self.cols {
            self.marks[c.row * self.cols + c.col] = mark;
        }
    }

    pub fn mark(&self, c: Coord) -> CellMark {
        if c.row < self.rows && c.col < self.cols {
            self.marks[c.row * self.cols + c.col]
        } else {
            CellMark::Untouched
        }
    }

    /// The exploration head: the cell the most recent activity concerns.
    pub fn head(&self) -> Option<Coord> {
        self.head
    }

    /// The current candidate path, start first.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn exhausted(&self) -> bool {
        self.exhausted
    }
}
