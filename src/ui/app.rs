//! Main TUI application state and logic

use crate::grid::Grid;
use crate::playback::{Pacing, Player, PlayerState};
use crate::search::{StepKind, Trace};
use crate::view::MazeView;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Maze,
    Trace,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Maze => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Maze,
        }
    }
}

/// The main application state
pub struct App {
    /// The maze being solved
    grid: Grid,

    /// The playback driver over the recorded run
    player: Player,

    /// Render model for the delivered step prefix
    view: MazeView,

    /// Currently focused pane
    focused_pane: FocusedPane,

    /// Trace pane scroll offset (`usize::MAX` pins to the bottom)
    trace_scroll: usize,

    /// Whether the app should quit
    should_quit: bool,

    /// Status message to display
    status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app over a grid and its recorded search run.
    pub fn new(grid: Grid, trace: Trace, pacing: Pacing) -> Self {
        let view = MazeView::new(&grid);
        App {
            grid,
            player: Player::new(trace.steps, pacing),
            view,
            focused_pane: FocusedPane::Maze,
            trace_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready! Press space to run."),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Timed playback: deliver the next step when it is due
            if let Some(step) = self.player.poll(Instant::now()) {
                self.view.apply(step);
                self.trace_scroll = usize::MAX;
                self.on_step_status(step.kind);
            }

            // Use poll with timeout so playback keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, single-line status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        super::panes::render_maze_pane(
            frame,
            columns[0],
            &self.grid,
            &self.view,
            self.focused_pane == FocusedPane::Maze,
        );

        super::panes::render_trace_pane(
            frame,
            columns[1],
            &self.player.steps()[..self.player.position()],
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.player.position(),
            self.player.total(),
            self.player.state(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Char(' ') => {
                // Toggle playback (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.play_or_stop();
                }
            }
            KeyCode::Right => {
                self.step_forward(1);
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).map(|d| d as usize).unwrap_or(1);
                self.step_forward(n);
            }
            KeyCode::Left => {
                self.step_backward();
            }
            KeyCode::Enter => {
                // Jump to the end of the run
                self.player.abort();
                while let Some(step) = self.player.step_once() {
                    self.view.apply(step);
                }
                self.trace_scroll = usize::MAX;
                self.status_message = String::from("Jumped to end");
            }
            KeyCode::Backspace | KeyCode::Char('r') => {
                self.player.abort();
                self.player.rewind();
                self.view = MazeView::new(&self.grid);
                self.trace_scroll = usize::MAX;
                self.status_message = String::from("Rewound to start");
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Trace {
                    self.trace_scroll = self.trace_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Trace {
                    self.trace_scroll = self.trace_scroll.saturating_add(1);
                }
            }
            _ => {}
        }
    }

    fn play_or_stop(&mut self) {
        match self.player.state() {
            PlayerState::Playing => {
                self.player.abort();
                self.status_message = String::from("Stopped");
            }
            PlayerState::Completed | PlayerState::Aborted => {
                // A fresh run request restarts from the beginning
                self.view = MazeView::new(&self.grid);
                self.trace_scroll = usize::MAX;
                self.player.start(Instant::now());
                self.status_message = String::from("Playing...");
            }
            PlayerState::Idle => {
                self.player.start(Instant::now());
                self.status_message = String::from("Playing...");
            }
        }
    }

    /// Deliver up to `n` steps immediately (manual stepping)
    fn step_forward(&mut self, n: usize) {
        if self.player.state() == PlayerState::Playing {
            return;
        }
        let mut stepped = 0;
        for _ in 0..n {
            match self.player.step_once() {
                Some(step) => {
                    self.view.apply(step);
                    stepped += 1;
                    self.on_step_status(step.kind);
                }
                None => break,
            }
        }
        if stepped > 0 {
            self.trace_scroll = usize::MAX;
            if !self.player.at_end() {
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
        } else {
            self.status_message = String::from("Already at the end");
        }
    }

    /// Move one step back by replaying the shorter prefix
    fn step_backward(&mut self) {
        if self.player.back_once() {
            let prefix = &self.player.steps()[..self.player.position()];
            self.view = MazeView::replay(&self.grid, prefix);
            self.trace_scroll = usize::MAX;
            self.status_message = String::from("Stepped back");
        } else {
            self.status_message = String::from("Already at the start");
        }
    }

    fn on_step_status(&mut self, kind: StepKind) {
        match kind {
            StepKind::GoalReached => {
                self.status_message =
                    format!("Goal reached: path is {} cells long", self.view.path().len());
            }
            StepKind::Exhausted => {
                self.status_message = String::from("Search exhausted: no path exists");
            }
            _ => {
                if self.player.state() == PlayerState::Playing {
                    self.status_message = String::from("Playing...");
                }
            }
        }
    }
}
