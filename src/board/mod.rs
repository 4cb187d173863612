//! In-memory reminder board
//!
//! [`Board`] owns everything the screen shows: the category registry, one
//! ordered [`ReminderList`] per [`Category`], the active selection, the
//! pending input draft, the category-editor flag and the background colour.
//!
//! Every category always has a list (possibly empty). Lists are keyed by the
//! category identity, never by its editable emoji or title.
//!
//! All mutation is synchronous. Observers registered with
//! [`Board::subscribe`] are called after each change with a [`BoardEvent`].

pub mod background;
pub mod category;
pub mod errors;
pub mod events;
pub mod reminder;

pub use background::BackgroundColor;
pub use category::{Category, CategoryInfo, CategoryRegistry};
pub use errors::BoardError;
pub use events::{BoardEvent, SubscriptionId};
pub use reminder::{Reminder, ReminderId, ReminderList};

use events::Subscribers;
use rustc_hash::FxHashMap;

static EMPTY_LIST: ReminderList = ReminderList::new();

/// Screen state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// List visible, input enabled
    #[default]
    Normal,
    /// Category editor open over the list
    EditingCategories,
}

/// The complete board state
#[derive(Debug)]
pub struct Board {
    categories: CategoryRegistry,
    lists: FxHashMap<Category, ReminderList>,
    selected: Category,
    draft: String,
    mode: Mode,
    background: BackgroundColor,
    subscribers: Subscribers,
}

impl Board {
    /// Fresh board: default categories, empty lists, School selected,
    /// white background
    pub fn new() -> Self {
        let lists = Category::ALL
            .into_iter()
            .map(|c| (c, ReminderList::new()))
            .collect();
        Board {
            categories: CategoryRegistry::new(),
            lists,
            selected: Category::School,
            draft: String::new(),
            mode: Mode::Normal,
            background: BackgroundColor::default(),
            subscribers: Subscribers::default(),
        }
    }

    // ---- observers ----

    /// Register a change callback; called synchronously after each mutation
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&BoardEvent) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    fn emit(&mut self, event: BoardEvent) {
        self.subscribers.notify(&event);
    }

    // ---- category registry ----

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn rename_category(&mut self, id: Category, new_title: impl Into<String>) {
        self.categories.rename(id, new_title);
        self.emit(BoardEvent::CategoryRenamed { category: id });
    }

    pub fn set_emoji(&mut self, id: Category, new_emoji: impl Into<String>) {
        self.categories.set_emoji(id, new_emoji);
        self.emit(BoardEvent::EmojiChanged { category: id });
    }

    pub fn emoji_for(&self, id: Category) -> &str {
        self.categories.emoji_for(id)
    }

    pub fn title_for(&self, id: Category) -> &str {
        self.categories.title_for(id)
    }

    // ---- reminder lists ----

    /// Append `title` to `category`. Blank titles are ignored and yield `None`.
    pub fn add_reminder(&mut self, category: Category, title: &str) -> Option<ReminderId> {
        let id = self.lists.entry(category).or_default().push(title);
        match id {
            Some(id) => {
                log::debug!("added reminder {} to {:?}", id, category);
                self.emit(BoardEvent::ReminderAdded { category, id });
            }
            None => log::trace!("ignored blank reminder for {:?}", category),
        }
        id
    }

    /// Remove the given positions of `category`'s list in one batch.
    ///
    /// Positions refer to the list as it was before the call.
    pub fn delete_reminders<I>(&mut self, category: Category, indices: I) -> Vec<Reminder>
    where
        I: IntoIterator<Item = usize>,
    {
        let removed = self
            .lists
            .entry(category)
            .or_default()
            .remove_positions(indices);
        if !removed.is_empty() {
            log::debug!("deleted {} reminder(s) from {:?}", removed.len(), category);
            let ids = removed.iter().map(|r| r.id).collect();
            self.emit(BoardEvent::RemindersDeleted { category, ids });
        }
        removed
    }

    pub fn list(&self, category: Category) -> &ReminderList {
        self.lists.get(&category).unwrap_or(&EMPTY_LIST)
    }

    pub fn len(&self, category: Category) -> usize {
        self.list(category).len()
    }

    /// Reminders across every category
    pub fn total(&self) -> usize {
        self.lists.values().map(ReminderList::len).sum()
    }

    // ---- selection ----

    pub fn select(&mut self, category: Category) {
        if self.selected == category {
            return;
        }
        let from = self.selected;
        self.selected = category;
        log::debug!("selected {:?}", category);
        self.emit(BoardEvent::SelectionChanged { from, to: category });
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn current_list(&self) -> &[Reminder] {
        self.list(self.selected).as_slice()
    }

    pub fn current_emoji(&self) -> &str {
        self.categories.emoji_for(self.selected)
    }

    pub fn current_title(&self) -> &str {
        self.categories.title_for(self.selected)
    }

    // ---- pending input ----

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.emit(BoardEvent::DraftChanged);
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.draft.push(c);
        self.emit(BoardEvent::DraftChanged);
    }

    pub fn pop_draft_char(&mut self) {
        if self.draft.pop().is_some() {
            self.emit(BoardEvent::DraftChanged);
        }
    }

    /// Add the draft to the selected category. The draft is cleared only when
    /// the reminder was actually added; a blank draft stays in the field.
    pub fn submit_draft(&mut self) -> Option<ReminderId> {
        let draft = std::mem::take(&mut self.draft);
        let id = self.add_reminder(self.selected, &draft);
        if id.is_some() {
            self.emit(BoardEvent::DraftChanged);
        } else {
            self.draft = draft;
        }
        id
    }

    // ---- mode ----

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn open_category_editor(&mut self) {
        self.set_mode(Mode::EditingCategories);
    }

    pub fn close_category_editor(&mut self) {
        self.set_mode(Mode::Normal);
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            log::debug!("mode -> {:?}", mode);
            self.emit(BoardEvent::ModeChanged(mode));
        }
    }

    // ---- background ----

    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    pub fn set_background(&mut self, color: BackgroundColor) {
        self.background = color;
        log::debug!("background -> {}", color);
        self.emit(BoardEvent::BackgroundChanged(color));
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(board: &mut Board) -> (SubscriptionId, Rc<RefCell<Vec<BoardEvent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = board.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        (id, seen)
    }

    #[test]
    fn test_every_category_has_a_list() {
        let board = Board::new();
        for c in Category::ALL {
            assert!(board.list(c).is_empty());
        }
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn test_submit_draft_clears_only_on_success() {
        let mut board = Board::new();
        board.set_draft("   ");
        assert!(board.submit_draft().is_none());
        assert_eq!(board.draft(), "   ");

        board.set_draft("Pack lunch");
        assert!(board.submit_draft().is_some());
        assert_eq!(board.draft(), "");
        assert_eq!(board.current_list()[0].title, "Pack lunch");
    }

    #[test]
    fn test_observers_see_mutations_in_order() {
        let mut board = Board::new();
        let (_, seen) = recorder(&mut board);

        board.select(Category::Home);
        let id = board.add_reminder(Category::Home, "Water plants").unwrap();
        board.add_reminder(Category::Home, "");
        board.delete_reminders(Category::Home, [0]);
        board.rename_category(Category::Home, "House");
        board.set_emoji(Category::Home, "🏡");
        board.set_background(BackgroundColor::Gray);

        let events = seen.borrow();
        assert_eq!(
            *events,
            vec![
                BoardEvent::SelectionChanged {
                    from: Category::School,
                    to: Category::Home
                },
                BoardEvent::ReminderAdded {
                    category: Category::Home,
                    id
                },
                BoardEvent::RemindersDeleted {
                    category: Category::Home,
                    ids: vec![id]
                },
                BoardEvent::CategoryRenamed {
                    category: Category::Home
                },
                BoardEvent::EmojiChanged {
                    category: Category::Home
                },
                BoardEvent::BackgroundChanged(BackgroundColor::Gray),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut board = Board::new();
        let (id, seen) = recorder(&mut board);
        assert!(board.unsubscribe(id));
        assert!(!board.unsubscribe(id));
        board.set_background(BackgroundColor::Pink);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_editor_mode_transitions() {
        let mut board = Board::new();
        let (_, seen) = recorder(&mut board);
        board.open_category_editor();
        board.open_category_editor();
        assert_eq!(board.mode(), Mode::EditingCategories);
        board.close_category_editor();
        assert_eq!(board.mode(), Mode::Normal);
        assert_eq!(
            *seen.borrow(),
            vec![
                BoardEvent::ModeChanged(Mode::EditingCategories),
                BoardEvent::ModeChanged(Mode::Normal)
            ]
        );
    }

    #[test]
    fn test_selecting_current_category_is_silent() {
        let mut board = Board::new();
        let (_, seen) = recorder(&mut board);
        board.select(Category::School);
        assert!(seen.borrow().is_empty());
    }
}
