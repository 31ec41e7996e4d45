//! The animation driver
//!
//! [`Player`] re-delivers a recorded step sequence at a human-watchable
//! cadence.  It owns a cursor into the steps and a small state machine:
//!
//! ```text
//! Idle → Playing → { Completed, Aborted }
//! ```
//!
//! `Completed` is reached after the terminal step (or the last recorded
//! step) is delivered; `Aborted` on an explicit [`Player::abort`].  Either
//! terminal state re-arms on the next [`Player::start`].  Delivery is
//! strictly in order, one step per [`Player::poll`], and pacing is driven
//! by the caller's clock: after an abort no further step is ever delivered,
//! with no timer left behind to fire late.

use std::time::{Duration, Instant};

use crate::search::{Step, StepKind};

/// Driver lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Playing,
    Completed,
    Aborted,
}

/// Per-step delivery gaps.  Advances linger so the viewer can follow the
/// head of the path; backtracks unwind faster.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub advance: Duration,
    pub backtrack: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            advance: Duration::from_millis(250),
            backtrack: Duration::from_millis(120),
        }
    }
}

impl Pacing {
    /// The gap to wait after delivering a step of `kind`.
    fn gap_after(&self, kind: StepKind) -> Duration {
        match kind {
            StepKind::DeadEnd | StepKind::Backtrack => self.backtrack,
            _ => self.advance,
        }
    }
}

/// Paced, cancellable delivery of one recorded search run.
#[derive(Debug)]
pub struct Player {
    steps: Vec<Step>,
    cursor: usize,
    state: PlayerState,
    pacing: Pacing,
    next_due: Option<Instant>,
}

impl Player {
    pub fn new(steps: Vec<Step>, pacing: Pacing) -> Self {
        Player {
            steps,
            cursor: 0,
            state: PlayerState::Idle,
            pacing,
            next_due: None,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps delivered so far; equivalently the cursor position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Run request.  A terminal state re-arms first: from `Completed` or
    /// `Aborted` the run restarts from the beginning.  From `Idle`
    /// delivery continues at the cursor, so manual stepping can hand over
    /// to timed playback.  The first step is due immediately.
    pub fn start(&mut self, now: Instant) {
        match self.state {
            PlayerState::Playing => return,
            PlayerState::Completed | PlayerState::Aborted => self.cursor = 0,
            PlayerState::Idle => {}
        }
        if self.at_end() {
            self.state = PlayerState::Completed;
            return;
        }
        self.state = PlayerState::Playing;
        self.next_due = Some(now);
    }

    /// Cooperative cancellation: stop delivering and drop the pending
    /// timer.  A no-op unless currently playing.
    pub fn abort(&mut self) {
        if self.state == PlayerState::Playing {
            self.state = PlayerState::Aborted;
            self.next_due = None;
        }
    }

    /// Back to step 0, `Idle`.
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.state = PlayerState::Idle;
        self.next_due = None;
    }

    /// Deliver the next step if one is due at `now`.  Returns `None` when
    /// not playing, when the gap after the previous step has not yet
    /// elapsed, or after the run has completed.
    pub fn poll(&mut self, now: Instant) -> Option<Step> {
        if self.state != PlayerState::Playing {
            return None;
        }
        let due = self.next_due?;
        if now < due {
            return None;
        }
        Some(self.deliver(Some(now)))
    }

    /// Deliver the next step immediately, ignoring pacing.  Used for
    /// manual stepping while not playing.
    pub fn step_once(&mut self) -> Option<Step> {
        if self.state == PlayerState::Playing || self.at_end() {
            return None;
        }
        Some(self.deliver(None))
    }

    /// Move the cursor back one step without delivering anything; the
    /// caller re-derives its display from the shorter prefix.
    pub fn back_once(&mut self) -> bool {
        if self.state == PlayerState::Playing || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        if self.state == PlayerState::Completed {
            self.state = PlayerState::Idle;
        }
        true
    }

    fn deliver(&mut self, now: Option<Instant>) -> Step {
        let step = self.steps[self.cursor];
        self.cursor += 1;
        if step.kind.is_terminal() || self.at_end() {
            self.state = PlayerState::Completed;
            self.next_due = None;
        } else {
            self.next_due = now.map(|t| t + self.pacing.gap_after(step.kind));
        }
        step
    }
}
