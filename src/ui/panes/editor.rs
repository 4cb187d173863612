//! "Edit Lists" sheet: title and emoji fields for every category

use crate::board::CategoryRegistry;
use crate::ui::app::{EditorCursor, EditorField};
use crate::ui::panes::common::centered_rect;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE_COLUMN: u16 = 24;

/// Render the category editor as a modal over `area`
pub fn render_category_editor(
    frame: &mut Frame,
    area: Rect,
    registry: &CategoryRegistry,
    cursor: EditorCursor,
) {
    let sheet = centered_rect(48, 10, area);
    frame.render_widget(Clear, sheet);

    let panel = Style::default()
        .bg(DEFAULT_THEME.panel_bg)
        .fg(DEFAULT_THEME.panel_fg);
    let active = Style::default()
        .bg(DEFAULT_THEME.selection_bg)
        .fg(DEFAULT_THEME.selection_fg)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{:<width$}", "List Name", width = TITLE_COLUMN as usize),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled("Emoji", Style::default().fg(DEFAULT_THEME.comment)),
    ])];

    for (row, (_, info)) in registry.iter().enumerate() {
        let on_row = row == cursor.row;
        let title_style = if on_row && cursor.field == EditorField::Title {
            active
        } else {
            panel
        };
        let emoji_style = if on_row && cursor.field == EditorField::Emoji {
            active
        } else {
            panel
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", info.title, width = TITLE_COLUMN as usize - 1),
                title_style,
            ),
            Span::styled(" ", panel),
            Span::styled(format!("{} ", info.emoji), emoji_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ row · Tab field · Enter/Esc done",
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    let block = Block::default()
        .title(" Edit Lists ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));
    frame.render_widget(Paragraph::new(lines).block(block).style(panel), sheet);

    // Cursor sits after the text of the focused field
    if let Some((_, info)) = registry.iter().nth(cursor.row) {
        let (offset, text) = match cursor.field {
            EditorField::Title => (0, info.title.as_str()),
            EditorField::Emoji => (TITLE_COLUMN, info.emoji.as_str()),
        };
        let x = sheet.x + 1 + offset + Line::from(text).width() as u16;
        let y = sheet.y + 2 + cursor.row as u16;
        if x < sheet.right().saturating_sub(1) && y < sheet.bottom().saturating_sub(1) {
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}
