//! The search engine
//!
//! [`Walker`] performs the depth-first backtracking search as an explicit
//! stack machine and yields [`Step`]s lazily through [`Iterator`].  One
//! machine turn makes one search decision and may queue up to three steps
//! (a dead end queues the dead-end and backtrack records together, and
//! popping the start frame additionally queues the terminal exhausted
//! record), so `next()` drains an internal queue before turning the machine
//! again.
//!
//! Rejected entries — out of bounds, blocked, or already on the path —
//! produce no step at all; the frame simply tries its next neighbor.

use std::collections::VecDeque;

use crate::grid::{Coord, Direction, Grid};

use super::{Step, StepKind, VisitSet};

/// One suspended recursion frame: a cell on the path and the index of the
/// next neighbor direction it has yet to try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    coord: Coord,
    next_dir: usize,
}

/// A lazy depth-first backtracking search over a borrowed [`Grid`].
///
/// Finite and not restartable once consumed; a fresh `Walker` restarts
/// cleanly from the same grid with an identical step sequence.
#[derive(Debug)]
pub struct Walker<'a> {
    grid: &'a Grid,
    frames: Vec<Frame>,
    visited: VisitSet,
    queued: VecDeque<Step>,
    seq: usize,
    started: bool,
    finished: bool,
}

impl<'a> Walker<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Walker {
            grid,
            frames: Vec::new(),
            visited: VisitSet::new(),
            queued: VecDeque::new(),
            seq: 0,
            started: false,
            finished: false,
        }
    }

    /// The current candidate path.  After a goal-reached step this is the
    /// full solution path, start first; after exhaustion it is empty.
    pub fn path(&self) -> &[Coord] {
        self.visited.path()
    }

    fn emit(&mut self, kind: StepKind, coord: Coord) {
        self.queued.push_back(Step {
            seq: self.seq,
            kind,
            coord,
        });
        self.seq += 1;
    }

    /// Whether the search may advance into `c`.
    fn enterable(&self, c: Coord) -> bool {
        self.grid.is_passable(c) && !self.visited.contains(c)
    }

    /// Enter `c`: record the advance and either finish at the goal or push
    /// a frame for it.
    fn advance_into(&mut self, c: Coord) {
        self.visited.enter(c);
        self.emit(StepKind::Advance, c);
        if c == self.grid.goal() {
            self.emit(StepKind::GoalReached, c);
            self.finished = true;
        } else {
            self.frames.push(Frame {
                coord: c,
                next_dir: 0,
            });
        }
    }

    /// Make one search decision, queueing the step(s) it produces.
    fn turn(&mut self) {
        if !self.started {
            self.started = true;
            let start = self.grid.start();
            // Grid construction guarantees a passable start; an
            // unenterable one still degrades to a clean exhaustion.
            if self.enterable(start) {
                self.advance_into(start);
            } else {
                self.emit(StepKind::Exhausted, start);
                self.finished = true;
            }
            return;
        }

        let top = self.frames.len() - 1;
        let coord = self.frames[top].coord;
        let mut dir = self.frames[top].next_dir;

        let mut chosen = None;
        while dir < Direction::ORDER.len() {
            let candidate = coord.step(Direction::ORDER[dir]);
            dir += 1;
            if let Some(n) = candidate {
                if self.enterable(n) {
                    chosen = Some(n);
                    break;
                }
            }
        }
        self.frames[top].next_dir = dir;

        match chosen {
            Some(n) => self.advance_into(n),
            None => {
                // Every neighbor rejected: undo this cell and report
                // failure to the parent frame.
                self.frames.pop();
                self.emit(StepKind::DeadEnd, coord);
                self.visited.leave();
                self.emit(StepKind::Backtrack, coord);
                if self.frames.is_empty() {
                    self.emit(StepKind::Exhausted, self.grid.start());
                    self.finished = true;
                }
            }
        }
    }
}

impl Iterator for Walker<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(step) = self.queued.pop_front() {
                return Some(step);
            }
            if self.finished {
                return None;
            }
            self.turn();
        }
    }
}

/// How a collected run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A path to the goal was found.
    Solved,

    /// Every branch from the start was explored without reaching the goal.
    Exhausted,
}

/// One fully collected search run: the step sequence, its outcome, and the
/// solution path (empty when exhausted).
#[derive(Debug, Clone)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub outcome: Outcome,
    pub path: Vec<Coord>,
}

impl Trace {
    /// Run the search to completion over `grid`.
    pub fn run(grid: &Grid) -> Trace {
        let mut walker = Walker::new(grid);
        let steps: Vec<Step> = walker.by_ref().collect();
        let outcome = match steps.last() {
            Some(step) if step.kind == StepKind::GoalReached => Outcome::Solved,
            _ => Outcome::Exhausted,
        };
        Trace {
            path: walker.path().to_vec(),
            steps,
            outcome,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
