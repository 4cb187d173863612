//! Large emoji header for the active category

use crate::ui::theme::Backdrop;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the selected category's emoji above its title
pub fn render_header(frame: &mut Frame, area: Rect, emoji: &str, title: &str, backdrop: Backdrop) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            emoji.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(backdrop.muted),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(backdrop.bg).fg(backdrop.fg))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
