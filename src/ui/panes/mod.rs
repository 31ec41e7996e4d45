//! TUI pane rendering modules
//!
//! Stateless render functions for each visible pane:
//!
//! - [`maze`]: the grid itself, colored by search activity
//! - [`trace`]: the scrolling log of delivered steps
//! - [`status`]: status bar with keybindings and playback state

pub mod maze;
pub mod status;
pub mod trace;

pub use maze::render_maze_pane;
pub use status::render_status_bar;
pub use trace::render_trace_pane;
