//! # Introduction
//!
//! mazetty runs a depth-first backtracking search over a small binary grid
//! and records every search decision as an immutable [`search::Step`].  The
//! recorded step sequence is then animated — or scrubbed back and forth —
//! through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Layout → Grid → Walker → Steps → Player → TUI
//! ```
//!
//! 1. [`grid`] — the immutable maze model: bounds, passability, start/goal,
//!    and cardinal neighbors in a fixed priority order.
//! 2. [`search`] — the engine: [`search::Walker`] lazily yields one
//!    [`search::Step`] per decision (advance, dead end, backtrack, goal
//!    reached, search exhausted), deterministically for a given grid.
//! 3. [`playback`] — the animation driver: [`playback::Player`] re-delivers
//!    recorded steps at a human-watchable cadence, with clean cancellation.
//! 4. [`view`] — the pure render model: applies steps to per-cell display
//!    states; rebuildable from any step prefix, which is what makes
//!    backward stepping possible.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod grid;
pub mod playback;
pub mod search;
pub mod ui;
pub mod view;
