//! Category identities and their editable display metadata
//!
//! A [`Category`] is one of four fixed groupings. Its identity never changes;
//! only the title and emoji held in the [`CategoryRegistry`] can be edited.

use super::errors::BoardError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of reminder groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    School,
    Work,
    Home,
    Miscellaneous,
}

impl Category {
    /// All categories in segmented-control order
    pub const ALL: [Category; 4] = [
        Category::School,
        Category::Work,
        Category::Home,
        Category::Miscellaneous,
    ];

    pub fn default_title(self) -> &'static str {
        match self {
            Category::School => "School",
            Category::Work => "Work",
            Category::Home => "Home",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    pub fn default_emoji(self) -> &'static str {
        match self {
            Category::School => "🏫",
            Category::Work => "💼",
            Category::Home => "🏠",
            Category::Miscellaneous => "🔍",
        }
    }

    /// Position within [`Category::ALL`]
    pub fn index(self) -> usize {
        match self {
            Category::School => 0,
            Category::Work => 1,
            Category::Home => 2,
            Category::Miscellaneous => 3,
        }
    }

    /// Next category, wrapping around (left to right)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_title())
    }
}

impl FromStr for Category {
    type Err = BoardError;

    /// Accepts the default name (any case), `misc`, or the default emoji.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("misc") {
            return Ok(Category::Miscellaneous);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.default_title().eq_ignore_ascii_case(wanted) || c.default_emoji() == wanted)
            .ok_or_else(|| BoardError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Display metadata for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub title: String,
    pub emoji: String,
}

impl CategoryInfo {
    fn defaults(category: Category) -> Self {
        CategoryInfo {
            title: category.default_title().to_string(),
            emoji: category.default_emoji().to_string(),
        }
    }
}

/// Editable title/emoji for every [`Category`].
///
/// Titles and emoji are free text: empty strings and duplicates across
/// categories are accepted and stored as given.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    entries: FxHashMap<Category, CategoryInfo>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        let entries = Category::ALL
            .into_iter()
            .map(|c| (c, CategoryInfo::defaults(c)))
            .collect();
        CategoryRegistry { entries }
    }

    pub fn rename(&mut self, id: Category, new_title: impl Into<String>) {
        let title = new_title.into();
        log::debug!("renaming category {:?} to {:?}", id, title);
        self.entries
            .entry(id)
            .or_insert_with(|| CategoryInfo::defaults(id))
            .title = title;
    }

    pub fn set_emoji(&mut self, id: Category, new_emoji: impl Into<String>) {
        let emoji = new_emoji.into();
        log::debug!("setting emoji of {:?} to {:?}", id, emoji);
        self.entries
            .entry(id)
            .or_insert_with(|| CategoryInfo::defaults(id))
            .emoji = emoji;
    }

    /// Current emoji, or an empty string for an unknown identity
    pub fn emoji_for(&self, id: Category) -> &str {
        self.entries.get(&id).map(|i| i.emoji.as_str()).unwrap_or("")
    }

    pub fn title_for(&self, id: Category) -> &str {
        self.entries.get(&id).map(|i| i.title.as_str()).unwrap_or("")
    }

    /// Entries in segmented-control order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryInfo)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(move |c| self.entries.get(&c).map(|info| (c, info)))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_set() {
        let registry = CategoryRegistry::new();
        assert_eq!(registry.title_for(Category::Work), "Work");
        assert_eq!(registry.emoji_for(Category::Home), "🏠");
        assert_eq!(registry.iter().count(), 4);
    }

    #[test]
    fn test_rename_allows_empty_and_duplicate_titles() {
        let mut registry = CategoryRegistry::new();
        registry.rename(Category::School, "");
        registry.rename(Category::Home, "Work");
        assert_eq!(registry.title_for(Category::School), "");
        assert_eq!(registry.title_for(Category::Home), "Work");
        assert_eq!(registry.title_for(Category::Work), "Work");
    }

    #[test]
    fn test_set_emoji_only_touches_one_category() {
        let mut registry = CategoryRegistry::new();
        registry.set_emoji(Category::Miscellaneous, "🧺");
        assert_eq!(registry.emoji_for(Category::Miscellaneous), "🧺");
        assert_eq!(registry.emoji_for(Category::School), "🏫");
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Category::Miscellaneous.next(), Category::School);
        assert_eq!(Category::School.prev(), Category::Miscellaneous);
        assert_eq!(Category::Work.next(), Category::Home);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("work".parse::<Category>().unwrap(), Category::Work);
        assert_eq!("MISC".parse::<Category>().unwrap(), Category::Miscellaneous);
        assert_eq!("🏫".parse::<Category>().unwrap(), Category::School);
        assert!("garden".parse::<Category>().is_err());
    }
}
