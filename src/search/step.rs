//! Step records emitted by the search

use std::fmt;

use crate::grid::Coord;

/// What a single search decision did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// The search entered a cell and added it to the candidate path.
    Advance,

    /// Every neighbor of the cell was rejected; it is about to be undone.
    DeadEnd,

    /// The cell was removed from the candidate path.
    Backtrack,

    /// The cell just entered is the goal.  Terminal.
    GoalReached,

    /// The start cell itself was backtracked: no path exists.  Terminal.
    Exhausted,
}

impl StepKind {
    /// Terminal kinds end the run; nothing follows them.
    pub fn is_terminal(self) -> bool {
        matches!(self, StepKind::GoalReached | StepKind::Exhausted)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Advance => "advance",
            StepKind::DeadEnd => "dead end",
            StepKind::Backtrack => "backtrack",
            StepKind::GoalReached => "goal reached",
            StepKind::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// One recorded search decision.
///
/// Steps are produced in strict chronological order (`seq` starts at 0 and
/// increments by 1) and never change after creation.  An [`Exhausted`]
/// step carries the start coordinate, since the start frame's failure is
/// what ends the search.
///
/// [`Exhausted`]: StepKind::Exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub seq: usize,
    pub kind: StepKind,
    pub coord: Coord,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}  {:<12} {}", self.seq, self.kind.to_string(), self.coord)
    }
}
