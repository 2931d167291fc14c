use serde::{Deserialize, Serialize};

/// A single to-do entry. The item's name is the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub category: String,
    pub done: bool,
}

impl Item {
    /// A fresh, not-yet-done item
    pub fn new(category: impl Into<String>) -> Self {
        Item {
            category: category.into(),
            done: false,
        }
    }

    /// The character shown inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}

/// One entry of initial data, as written in config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub key: String,
    pub category: String,
    #[serde(default)]
    pub done: bool,
}

impl SeedItem {
    pub fn new(key: &str, category: &str, done: bool) -> Self {
        SeedItem {
            key: key.to_string(),
            category: category.to_string(),
            done,
        }
    }
}

/// Starting list used when config doesn't provide one
pub fn default_seed() -> Vec<SeedItem> {
    vec![
        SeedItem::new("laundry", "home", false),
        SeedItem::new("write report", "work", true),
        SeedItem::new("vacuum", "home", false),
    ]
}
