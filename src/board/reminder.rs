//! Reminder entries and the ordered per-category list

use rustc_hash::FxHashSet;
use std::fmt;
use uuid::Uuid;

/// Generated unique identity of a reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReminderId(Uuid);

impl ReminderId {
    pub fn new() -> Self {
        ReminderId(Uuid::new_v4())
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user-entered text item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: String,
}

/// Ordered reminders for one category (insertion order = display order)
#[derive(Debug, Clone, Default)]
pub struct ReminderList {
    items: Vec<Reminder>,
}

impl ReminderList {
    pub const fn new() -> Self {
        ReminderList { items: Vec::new() }
    }

    /// Append a reminder. Returns `None` and leaves the list untouched when
    /// the title is empty or whitespace-only.
    /// The title is stored exactly as given.
    pub fn push(&mut self, title: &str) -> Option<ReminderId> {
        if title.trim().is_empty() {
            return None;
        }
        let id = ReminderId::new();
        self.items.push(Reminder {
            id,
            title: title.to_string(),
        });
        Some(id)
    }

    /// Remove every position in `indices` at once.
    ///
    /// Positions refer to the ordering before the call. Duplicates count once
    /// and out-of-range positions are skipped. Removed reminders are returned
    /// in their original order.
    pub fn remove_positions<I>(&mut self, indices: I) -> Vec<Reminder>
    where
        I: IntoIterator<Item = usize>,
    {
        let doomed: FxHashSet<usize> = indices.into_iter().collect();
        if doomed.is_empty() {
            return Vec::new();
        }

        let len = self.items.len();
        for index in doomed.iter().filter(|&&i| i >= len) {
            log::debug!("skipping out-of-range delete position {} (len {})", index, len);
        }

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .enumerate()
            .partition(|(i, _)| doomed.contains(i));
        self.items = kept.into_iter().map(|(_, r)| r).collect();
        removed.into_iter().map(|(_, r)| r).collect()
    }

    pub fn position(&self, id: ReminderId) -> Option<usize> {
        self.items.iter().position(|r| r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reminder> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Reminder] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReminderList {
    type Item = &'a Reminder;
    type IntoIter = std::slice::Iter<'a, Reminder>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &ReminderList) -> Vec<&str> {
        list.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_push_ignores_blank_titles() {
        let mut list = ReminderList::new();
        assert!(list.push("").is_none());
        assert!(list.push("  \t ").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_assigns_distinct_ids() {
        let mut list = ReminderList::new();
        let a = list.push("Read chapter 3").unwrap();
        let b = list.push("Read chapter 3").unwrap();
        assert_ne!(a, b);
        assert_eq!(list.position(b), Some(1));
    }

    #[test]
    fn test_push_keeps_surrounding_whitespace() {
        let mut list = ReminderList::new();
        list.push(" indented ");
        assert_eq!(titles(&list), vec![" indented "]);
    }

    #[test]
    fn test_remove_positions_is_simultaneous() {
        let mut list = ReminderList::new();
        list.push("A");
        list.push("B");
        list.push("C");
        let removed = list.remove_positions([0, 2]);
        assert_eq!(titles(&list), vec!["B"]);
        assert_eq!(
            removed.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            vec!["A", "C"]
        );
    }

    #[test]
    fn test_remove_positions_skips_out_of_range_and_duplicates() {
        let mut list = ReminderList::new();
        list.push("A");
        list.push("B");
        let removed = list.remove_positions([1, 1, 7]);
        assert_eq!(removed.len(), 1);
        assert_eq!(titles(&list), vec!["A"]);
    }
}
