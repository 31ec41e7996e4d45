//! Step trace pane rendering

use crate::search::{Step, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the trace pane: one line per delivered step, newest at the
/// bottom.  `scroll_offset` is clamped to the content; `usize::MAX` pins
/// the view to the end.
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Trace ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if steps.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let all_items: Vec<ListItem> = steps
        .iter()
        .map(|step| {
            ListItem::new(step.to_string()).style(Style::default().fg(kind_color(step.kind)))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

fn kind_color(kind: StepKind) -> ratatui::style::Color {
    match kind {
        StepKind::Advance => DEFAULT_THEME.primary,
        StepKind::DeadEnd => DEFAULT_THEME.error,
        StepKind::Backtrack => DEFAULT_THEME.comment,
        StepKind::GoalReached => DEFAULT_THEME.success,
        StepKind::Exhausted => DEFAULT_THEME.secondary,
    }
}
