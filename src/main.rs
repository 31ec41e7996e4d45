// mazetty: Animated Backtracking Maze Solver for the Terminal

mod grid;
mod playback;
mod search;
mod ui;
mod view;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use grid::{Grid, DEMO_LAYOUT};
use playback::Pacing;
use search::{Outcome, Trace};
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let layout = match args.get(1).map(String::as_str) {
        None => DEMO_LAYOUT.to_string(),
        Some("-h") | Some("--help") => {
            let program_name = args.first().map(|s| s.as_str()).unwrap_or("mazetty");
            eprintln!("Usage: {} [maze file]", program_name);
            eprintln!();
            eprintln!("With no argument the built-in demo maze is used.");
            eprintln!();
            eprintln!("Maze files are plain text, one character per cell:");
            eprintln!("  #  wall");
            eprintln!("  .  open cell");
            eprintln!("  S  start (exactly one)");
            eprintln!("  G  goal (exactly one)");
            return Ok(());
        }
        Some(path) => {
            if !Path::new(path).exists() {
                eprintln!("Error: File '{}' not found", path);
                eprintln!(
                    "Usage: {} [maze file]",
                    args.first().map(|s| s.as_str()).unwrap_or("mazetty")
                );
                std::process::exit(1);
            }
            fs::read_to_string(path)?
        }
    };

    // Build the grid
    let grid = match Grid::parse(&layout) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Layout error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!(
        "Loaded a {}x{} maze, start {} goal {}.",
        grid.rows(),
        grid.cols(),
        grid.start(),
        grid.goal()
    );

    // Run the search to build the step history
    eprintln!("Searching...");
    let trace = Trace::run(&grid);
    match trace.outcome {
        Outcome::Solved => eprintln!(
            "Found a {}-cell path in {} steps.",
            trace.path.len(),
            trace.len()
        ),
        Outcome::Exhausted => eprintln!("No path exists ({} steps explored).", trace.len()),
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(grid, trace, Pacing::default());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
