//! Change notifications for observers of the board
//!
//! Rendering adapters register a callback with [`Board::subscribe`] and are
//! called synchronously after every mutation, in registration order.
//!
//! [`Board::subscribe`]: super::Board::subscribe

use super::background::BackgroundColor;
use super::category::Category;
use super::reminder::ReminderId;
use super::Mode;
use std::fmt;

/// What changed on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    ReminderAdded {
        category: Category,
        id: ReminderId,
    },
    RemindersDeleted {
        category: Category,
        ids: Vec<ReminderId>,
    },
    SelectionChanged {
        from: Category,
        to: Category,
    },
    CategoryRenamed {
        category: Category,
    },
    EmojiChanged {
        category: Category,
    },
    BackgroundChanged(BackgroundColor),
    ModeChanged(Mode),
    DraftChanged,
}

/// Handle returned by [`Board::subscribe`](super::Board::subscribe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&BoardEvent)>;

/// Ordered callback list
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sid, _)| *sid != id);
        self.callbacks.len() != before
    }

    pub(crate) fn notify(&mut self, event: &BoardEvent) {
        log::trace!("board event: {:?}", event);
        for (_, callback) in self.callbacks.iter_mut() {
            callback(event);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
