//! Status bar rendering with keybindings and mode indicator

use crate::board::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `marked` is the number of reminders queued for a batch delete.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    mode: Mode,
    choosing_color: bool,
    marked: usize,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let (badge, badge_bg) = if choosing_color {
        (" COLOR ", DEFAULT_THEME.accent)
    } else {
        match mode {
            Mode::Normal => (" LIST ", DEFAULT_THEME.primary),
            Mode::EditingCategories => (" EDIT ", DEFAULT_THEME.accent),
        }
    };

    let mut left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.panel_bg)
                .fg(DEFAULT_THEME.panel_fg),
        ),
    ];
    if marked > 0 {
        left_spans.push(Span::styled(
            format!(" {} marked ", marked),
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.panel_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.panel_bg)
        .fg(DEFAULT_THEME.panel_fg);

    let bindings: &[(&str, &str)] = match (mode, choosing_color) {
        (_, true) => &[("↑/↓", "pick"), ("↵", "choose"), ("esc", "cancel")],
        (Mode::EditingCategories, false) => {
            &[("↑/↓", "row"), ("tab", "field"), ("↵/esc", "done")]
        }
        (Mode::Normal, false) => &[
            ("↵", "add"),
            ("tab", "list"),
            ("^x", "mark"),
            ("del", "delete"),
            ("^e", "edit lists"),
            ("^b", "color"),
            ("esc", "quit"),
        ],
    };

    let mut right_spans = Vec::new();
    for (key, desc) in bindings {
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.panel_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
