//! Segmented control listing every category

use crate::board::{Category, CategoryRegistry};
use crate::ui::theme::{Backdrop, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the category picker with the active category highlighted
pub fn render_category_tabs(
    frame: &mut Frame,
    area: Rect,
    registry: &CategoryRegistry,
    selected: Category,
    backdrop: Backdrop,
) {
    let titles: Vec<Line> = registry
        .iter()
        .map(|(_, info)| Line::from(format!(" {} ", tab_label(&info.title))))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(backdrop.muted)),
        )
        .select(selected.index())
        .style(Style::default().bg(backdrop.bg).fg(backdrop.fg))
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.selection_bg)
                .fg(DEFAULT_THEME.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}

// An emptied title still needs a visible segment
fn tab_label(title: &str) -> &str {
    if title.is_empty() {
        "·"
    } else {
        title
    }
}
