//! The path-search engine
//!
//! A depth-first backtracking search from the grid's start toward its goal,
//! recorded as an ordered sequence of immutable [`Step`]s:
//!
//! - [`step`] — the [`Step`] record and its [`StepKind`]s
//! - [`visit`] — [`VisitSet`], the stack-discipline membership set whose
//!   contents always equal the current candidate path prefix
//! - [`walker`] — [`Walker`], the engine itself, a lazy iterator over steps,
//!   and [`Trace`], one fully collected run
//!
//! The engine is deterministic: the same grid always yields the same step
//! sequence, because neighbors are explored in the fixed
//! [`Direction::ORDER`](crate::grid::Direction::ORDER) priority and a cell
//! on the current path is never re-entered.

mod step;
mod visit;
mod walker;

pub use step::{Step, StepKind};
pub use visit::VisitSet;
pub use walker::{Outcome, Trace, Walker};
