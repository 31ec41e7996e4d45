//! The candidate-path membership set
//!
//! [`VisitSet`] pairs an `FxHashSet` for O(1) membership checks with an
//! ordered stack of the same coordinates.  Entry and exit are strictly
//! stack-shaped: the search enters a cell when it advances and leaves the
//! most recently entered cell when it backtracks, so the set's contents are
//! always exactly the current candidate path from the start, in order.

use rustc_hash::FxHashSet;

use crate::grid::Coord;

#[derive(Debug, Default)]
pub struct VisitSet {
    members: FxHashSet<Coord>,
    order: Vec<Coord>,
}

impl VisitSet {
    pub fn new() -> Self {
        VisitSet::default()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.members.contains(&c)
    }

    /// Add `c` to the path.  `c` must not already be a member.
    pub fn enter(&mut self, c: Coord) {
        debug_assert!(!self.members.contains(&c));
        self.members.insert(c);
        self.order.push(c);
    }

    /// Remove and return the most recently entered coordinate.
    pub fn leave(&mut self) -> Option<Coord> {
        let c = self.order.pop()?;
        self.members.remove(&c);
        Some(c)
    }

    /// The current candidate path, start first.
    pub fn path(&self) -> &[Coord] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
