//! Text field for the pending reminder title

use crate::ui::panes::common::border_style;
use crate::ui::theme::{Backdrop, DEFAULT_THEME};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the draft input. The terminal cursor is placed after the text
/// while the field is active.
pub fn render_input_line(
    frame: &mut Frame,
    area: Rect,
    draft: &str,
    is_active: bool,
    backdrop: Backdrop,
) {
    let block = Block::default()
        .title(" New Task ")
        .borders(Borders::ALL)
        .border_style(border_style(is_active, backdrop.muted));

    let paragraph = if draft.is_empty() {
        Paragraph::new("Type a reminder, Enter to add")
            .style(Style::default().bg(backdrop.bg).fg(DEFAULT_THEME.comment))
    } else {
        Paragraph::new(draft).style(Style::default().bg(backdrop.bg).fg(backdrop.fg))
    };
    frame.render_widget(paragraph.block(block), area);

    if is_active {
        let inner_width = area.width.saturating_sub(2);
        let text_width = Line::from(draft).width() as u16;
        let x = area.x + 1 + text_width.min(inner_width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}
