//! Reminder list for the active category

use crate::board::Reminder;
use crate::ui::theme::{Backdrop, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Render the reminders, highlighting the cursor row and marking rows
/// queued for deletion
pub fn render_reminder_list(
    frame: &mut Frame,
    area: Rect,
    reminders: &[Reminder],
    cursor: usize,
    marked: &FxHashSet<usize>,
    backdrop: Backdrop,
) {
    let block = Block::default()
        .title(format!(" Reminders ({}) ", reminders.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(backdrop.muted));

    if reminders.is_empty() {
        let paragraph = Paragraph::new("(nothing here yet)")
            .block(block)
            .style(Style::default().bg(backdrop.bg).fg(backdrop.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = reminders
        .iter()
        .enumerate()
        .map(|(i, reminder)| {
            let (marker, style) = if marked.contains(&i) {
                (
                    "✗ ",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("• ", Style::default().fg(backdrop.fg))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(reminder.title.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(Style::default().bg(backdrop.bg))
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.selection_bg)
                .fg(DEFAULT_THEME.selection_fg),
        );

    let mut state = ListState::default().with_selected(Some(cursor.min(reminders.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}
