//! Main TUI application state and logic

use crate::board::{BackgroundColor, Board, BoardEvent, Category, Mode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::io;
use std::sync::mpsc::{self, Receiver};

use super::panes;
use super::theme::Backdrop;

/// Which text field of the category editor receives typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Emoji,
}

impl EditorField {
    pub fn toggle(self) -> Self {
        match self {
            EditorField::Title => EditorField::Emoji,
            EditorField::Emoji => EditorField::Title,
        }
    }
}

/// Focused row and field in the category editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorCursor {
    pub row: usize,
    pub field: EditorField,
}

impl EditorCursor {
    pub fn category(self) -> Category {
        Category::ALL[self.row.min(Category::ALL.len() - 1)]
    }
}

/// The main application state
pub struct App {
    /// The board being displayed
    pub board: Board,

    /// Highlighted row in the reminder list
    pub list_cursor: usize,

    /// Rows of the current list queued for a batch delete
    pub marked: FxHashSet<usize>,

    /// Category editor focus (only meaningful in `Mode::EditingCategories`)
    pub editor: EditorCursor,

    /// Highlighted option while the colour sheet is open
    pub color_sheet: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Board change notifications, drained before each frame
    events: Receiver<BoardEvent>,
}

impl App {
    /// Create a new app around `board` and subscribe to its changes
    pub fn new(mut board: Board) -> Self {
        let (tx, rx) = mpsc::channel();
        board.subscribe(move |event| {
            // Receiver lives as long as the App that owns the board
            let _ = tx.send(event.clone());
        });

        App {
            board,
            list_cursor: 0,
            marked: FxHashSet::default(),
            editor: EditorCursor::default(),
            color_sheet: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            events: rx,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.process_board_events();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        log::info!("leaving board with {} reminder(s)", self.board.total());
        Ok(())
    }

    /// Apply pending board notifications to view state
    pub fn process_board_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                BoardEvent::ReminderAdded { category, .. } => {
                    if category == self.board.selected() {
                        self.list_cursor = self.board.len(category).saturating_sub(1);
                    }
                    self.status_message = format!("Added to {}", self.board.title_for(category));
                }
                BoardEvent::RemindersDeleted { category, ids } => {
                    self.marked.clear();
                    self.list_cursor = self
                        .list_cursor
                        .min(self.board.len(category).saturating_sub(1));
                    self.status_message = format!("Deleted {} reminder(s)", ids.len());
                }
                BoardEvent::SelectionChanged { to, .. } => {
                    self.marked.clear();
                    self.list_cursor = 0;
                    self.status_message = format!("Showing {}", self.board.title_for(to));
                }
                BoardEvent::CategoryRenamed { .. } | BoardEvent::EmojiChanged { .. } => {
                    self.status_message = "Editing lists".to_string();
                }
                BoardEvent::BackgroundChanged(color) => {
                    self.status_message = format!("Background: {}", color);
                }
                BoardEvent::ModeChanged(Mode::EditingCategories) => {
                    self.status_message = "Editing lists".to_string();
                }
                BoardEvent::ModeChanged(Mode::Normal) => {
                    self.status_message = "Ready!".to_string();
                }
                BoardEvent::DraftChanged => {}
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let backdrop = Backdrop::from(self.board.background());

        // Fill the whole screen with the chosen background
        frame.render_widget(
            Block::default().style(Style::default().bg(backdrop.bg).fg(backdrop.fg)),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // emoji + title
                Constraint::Length(3), // category tabs
                Constraint::Length(3), // input
                Constraint::Min(0),    // reminders
                Constraint::Length(1), // status bar
            ])
            .split(size);

        let selected = self.board.selected();
        let is_normal = self.board.mode() == Mode::Normal && self.color_sheet.is_none();

        panes::render_header(
            frame,
            chunks[0],
            self.board.current_emoji(),
            self.board.current_title(),
            backdrop,
        );

        panes::render_category_tabs(
            frame,
            chunks[1],
            self.board.categories(),
            selected,
            backdrop,
        );

        panes::render_input_line(frame, chunks[2], self.board.draft(), is_normal, backdrop);

        panes::render_reminder_list(
            frame,
            chunks[3],
            self.board.current_list(),
            self.list_cursor,
            &self.marked,
            backdrop,
        );

        panes::render_status_bar(
            frame,
            chunks[4],
            &self.status_message,
            self.board.mode(),
            self.color_sheet.is_some(),
            self.marked.len(),
        );

        if self.board.mode() == Mode::EditingCategories {
            panes::render_category_editor(frame, size, self.board.categories(), self.editor);
        }

        if let Some(cursor) = self.color_sheet {
            panes::render_color_sheet(frame, size, cursor, self.board.background());
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.color_sheet.is_some() {
            self.handle_color_sheet_key(key);
        } else {
            match self.board.mode() {
                Mode::Normal => self.handle_normal_key(key),
                Mode::EditingCategories => self.handle_editor_key(key),
            }
        }
        self.process_board_events();
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('e') if ctrl => {
                self.editor = EditorCursor {
                    row: self.board.selected().index(),
                    field: EditorField::Title,
                };
                self.board.open_category_editor();
            }
            KeyCode::Char('b') if ctrl => {
                self.color_sheet = Some(self.board.background().index());
                self.status_message = "Choose a background".to_string();
            }
            KeyCode::Char('x') if ctrl => {
                self.toggle_mark();
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.board.push_draft_char(c);
            }
            KeyCode::Backspace => {
                self.board.pop_draft_char();
            }
            KeyCode::Enter => {
                // Blank drafts are dropped without a message
                self.board.submit_draft();
            }
            KeyCode::Tab => {
                let next = self.board.selected().next();
                self.board.select(next);
            }
            KeyCode::BackTab => {
                let prev = self.board.selected().prev();
                self.board.select(prev);
            }
            KeyCode::Up => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let last = self.board.current_list().len().saturating_sub(1);
                self.list_cursor = (self.list_cursor + 1).min(last);
            }
            KeyCode::Delete => {
                self.delete_marked_or_highlighted();
            }
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let category = self.editor.category();
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.board.close_category_editor();
            }
            KeyCode::Up => {
                self.editor.row = self.editor.row.saturating_sub(1);
            }
            KeyCode::Down => {
                self.editor.row = (self.editor.row + 1).min(Category::ALL.len() - 1);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.editor.field = self.editor.field.toggle();
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                let mut text = self.editor_text(category);
                text.push(c);
                self.set_editor_text(category, text);
            }
            KeyCode::Backspace => {
                let mut text = self.editor_text(category);
                if text.pop().is_some() {
                    self.set_editor_text(category, text);
                }
            }
            _ => {}
        }
    }

    fn handle_color_sheet_key(&mut self, key: KeyEvent) {
        let Some(cursor) = self.color_sheet else {
            return;
        };
        let last = BackgroundColor::ALL.len() - 1;
        match key.code {
            KeyCode::Up => {
                self.color_sheet = Some(cursor.saturating_sub(1));
            }
            KeyCode::Down => {
                self.color_sheet = Some((cursor + 1).min(last));
            }
            KeyCode::Enter => {
                self.color_sheet = None;
                self.board.set_background(BackgroundColor::ALL[cursor.min(last)]);
            }
            KeyCode::Esc => {
                self.color_sheet = None;
                self.status_message = "Ready!".to_string();
            }
            _ => {}
        }
    }

    fn editor_text(&self, category: Category) -> String {
        match self.editor.field {
            EditorField::Title => self.board.title_for(category).to_string(),
            EditorField::Emoji => self.board.emoji_for(category).to_string(),
        }
    }

    fn set_editor_text(&mut self, category: Category, text: String) {
        match self.editor.field {
            EditorField::Title => self.board.rename_category(category, text),
            EditorField::Emoji => self.board.set_emoji(category, text),
        }
    }

    fn toggle_mark(&mut self) {
        if self.board.current_list().is_empty() {
            return;
        }
        if !self.marked.remove(&self.list_cursor) {
            self.marked.insert(self.list_cursor);
        }
    }

    /// Delete every marked row in one batch, or the highlighted row when
    /// nothing is marked
    fn delete_marked_or_highlighted(&mut self) {
        if self.board.current_list().is_empty() {
            return;
        }
        let positions: Vec<usize> = if self.marked.is_empty() {
            vec![self.list_cursor]
        } else {
            self.marked.iter().copied().collect()
        };
        let selected = self.board.selected();
        self.board.delete_reminders(selected, positions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn titles(app: &App) -> Vec<String> {
        app.board
            .current_list()
            .iter()
            .map(|r| r.title.clone())
            .collect()
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_enter_adds_to_selected_category() {
        let mut app = App::new(Board::new());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.board.selected(), Category::Work);

        type_text(&mut app, "Finish report");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter); // blank draft is ignored
        type_text(&mut app, "Email client");
        press(&mut app, KeyCode::Enter);

        assert_eq!(titles(&app), vec!["Finish report", "Email client"]);
        assert_eq!(app.board.draft(), "");
        assert_eq!(app.list_cursor, 1);
        assert_eq!(app.status_message, "Added to Work");
    }

    #[test]
    fn test_delete_removes_highlighted_row() {
        let mut app = App::new(Board::new());
        type_text(&mut app, "A");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "B");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Delete);
        assert_eq!(titles(&app), vec!["B"]);
        assert_eq!(app.status_message, "Deleted 1 reminder(s)");
    }

    #[test]
    fn test_marked_rows_are_deleted_together() {
        let mut app = App::new(Board::new());
        for title in ["A", "B", "C"] {
            type_text(&mut app, title);
            press(&mut app, KeyCode::Enter);
        }
        ctrl(&mut app, 'x'); // C
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        ctrl(&mut app, 'x'); // A
        assert_eq!(app.marked.len(), 2);

        press(&mut app, KeyCode::Delete);
        assert_eq!(titles(&app), vec!["B"]);
        assert!(app.marked.is_empty());
    }

    #[test]
    fn test_switching_category_resets_view_state() {
        let mut app = App::new(Board::new());
        type_text(&mut app, "Homework");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'x');
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.board.selected(), Category::Miscellaneous);
        assert!(app.marked.is_empty());
        assert_eq!(app.list_cursor, 0);
        assert!(app.board.current_list().is_empty());
    }

    #[test]
    fn test_editor_edits_title_and_emoji_in_place() {
        let mut app = App::new(Board::new());
        press(&mut app, KeyCode::Tab); // Work
        ctrl(&mut app, 'e');
        assert_eq!(app.board.mode(), Mode::EditingCategories);
        assert_eq!(app.editor.row, Category::Work.index());

        for _ in 0.."Work".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Job");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "🧰");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.board.mode(), Mode::Normal);
        assert_eq!(app.board.title_for(Category::Work), "Job");
        assert_eq!(app.board.current_emoji(), "🧰");
    }

    #[test]
    fn test_typing_in_editor_does_not_touch_draft() {
        let mut app = App::new(Board::new());
        ctrl(&mut app, 'e');
        type_text(&mut app, "xyz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.board.draft(), "");
        assert_eq!(app.board.title_for(Category::School), "Schoolxyz");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_editor_ignores_alt_chords() {
        let mut app = App::new(Board::new());
        ctrl(&mut app, 'e');
        app.handle_key_event(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::ALT));
        assert_eq!(app.board.title_for(Category::School), "School");
        assert_eq!(app.board.mode(), Mode::EditingCategories);
    }

    #[test]
    fn test_color_sheet_choose_and_cancel() {
        let mut app = App::new(Board::new());
        ctrl(&mut app, 'b');
        assert_eq!(app.color_sheet, Some(0));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.background(), BackgroundColor::Blue);
        assert!(app.color_sheet.is_none());

        ctrl(&mut app, 'b');
        assert_eq!(app.color_sheet, Some(2));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.board.background(), BackgroundColor::Blue);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_escape_quits_from_normal_mode() {
        let mut app = App::new(Board::new());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_reminders_of_selected_category() {
        let mut board = Board::new();
        board.add_reminder(Category::Home, "Water plants");
        board.add_reminder(Category::School, "Read chapter 3");
        board.select(Category::Home);
        let mut app = App::new(board);

        let text = screen_text(&mut app);
        assert!(text.contains("Water plants"));
        assert!(!text.contains("Read chapter 3"));
        assert!(text.contains("Miscellaneous"));
    }

    #[test]
    fn test_render_overlays() {
        let mut app = App::new(Board::new());
        ctrl(&mut app, 'e');
        assert!(screen_text(&mut app).contains("Edit Lists"));
        press(&mut app, KeyCode::Enter);

        ctrl(&mut app, 'b');
        let text = screen_text(&mut app);
        assert!(text.contains("Choose Background Color"));
        assert!(text.contains("Orange"));
    }
}
