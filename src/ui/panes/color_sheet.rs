//! Background colour chooser

use crate::board::BackgroundColor;
use crate::ui::panes::common::centered_rect;
use crate::ui::theme::{Backdrop, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Render the list of background options with a swatch per entry
pub fn render_color_sheet(frame: &mut Frame, area: Rect, cursor: usize, current: BackgroundColor) {
    let height = BackgroundColor::ALL.len() as u16 + 2;
    let sheet = centered_rect(34, height, area);
    frame.render_widget(Clear, sheet);

    let items: Vec<ListItem> = BackgroundColor::ALL
        .into_iter()
        .map(|color| {
            let swatch = Backdrop::from(color);
            let check = if color == current { " ✓" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled("   ", Style::default().bg(swatch.bg)),
                Span::raw(format!(" {}{}", color.name(), check)),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(" Choose Background Color ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let list = List::new(items)
        .block(block)
        .style(
            Style::default()
                .bg(DEFAULT_THEME.panel_bg)
                .fg(DEFAULT_THEME.panel_fg),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, sheet, &mut state);
}
