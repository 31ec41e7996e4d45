//! Maze pane rendering

use crate::grid::{Coord, Grid};
use crate::ui::theme::DEFAULT_THEME;
use crate::view::{CellMark, MazeView};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the maze pane.  Each cell is two columns wide; walls come from
/// the grid, every other color from the view's per-cell marks.
pub fn render_maze_pane(
    frame: &mut Frame,
    area: Rect,
    grid: &Grid,
    view: &MazeView,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Maze ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let mut lines: Vec<Line> = Vec::with_capacity(grid.rows());
    for row in 0..grid.rows() {
        let mut spans: Vec<Span> = Vec::with_capacity(grid.cols());
        for col in 0..grid.cols() {
            spans.push(cell_span(grid, view, Coord::new(row, col)));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn cell_span(grid: &Grid, view: &MazeView, c: Coord) -> Span<'static> {
    if !grid.is_passable(c) {
        return Span::styled("██", Style::default().fg(DEFAULT_THEME.wall));
    }

    let is_head = view.head() == Some(c);
    let mark = view.mark(c);

    let bg = if is_head {
        Some(DEFAULT_THEME.head)
    } else {
        match mark {
            CellMark::OnPath if view.solved() => Some(DEFAULT_THEME.success),
            CellMark::OnPath => Some(DEFAULT_THEME.path),
            CellMark::DeadEnd => Some(DEFAULT_THEME.dead_end),
            CellMark::Abandoned => Some(DEFAULT_THEME.abandoned),
            CellMark::Untouched => None,
        }
    };

    let marker = if c == grid.start() {
        "S "
    } else if c == grid.goal() {
        "G "
    } else {
        "  "
    };

    let mut style = Style::default();
    if let Some(bg) = bg {
        style = style.bg(bg).fg(DEFAULT_THEME.open).add_modifier(Modifier::BOLD);
    } else if marker != "  " {
        style = style
            .fg(DEFAULT_THEME.endpoint)
            .add_modifier(Modifier::BOLD);
    }

    Span::styled(marker.to_string(), style)
}
