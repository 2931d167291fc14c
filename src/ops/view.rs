use indexmap::{IndexMap, IndexSet};

use crate::model::item::Item;

/// Which items the list shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Build from a selector value; the empty string means no filter.
    pub fn from_selection(value: &str) -> Self {
        if value.is_empty() {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// The selected category, or `None` for all
    pub fn category(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Category(c) => Some(c),
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => item.category == *c,
        }
    }

    /// Label for the selector and status line
    pub fn label(&self) -> &str {
        self.category().unwrap_or("All")
    }
}

/// Items whose category equals `selected`, or every item when `selected` is
/// `None` or empty. Entries are copied out of `items`.
pub fn filter(items: &IndexMap<String, Item>, selected: Option<&str>) -> IndexMap<String, Item> {
    let filter = CategoryFilter::from_selection(selected.unwrap_or(""));
    items
        .iter()
        .filter(|(_, item)| filter.matches(item))
        .map(|(key, item)| (key.clone(), item.clone()))
        .collect()
}

/// Unique categories across `items`, in order of first appearance.
pub fn distinct_categories(items: &IndexMap<String, Item>) -> Vec<String> {
    items
        .values()
        .map(|item| item.category.as_str())
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
