use indexmap::IndexMap;
use serde::Serialize;

use crate::model::item::Item;
use crate::util::unicode::{display_width, pad_to_width};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ItemJson {
    pub key: String,
    pub category: String,
    pub done: bool,
}

pub fn items_to_json(items: &IndexMap<String, Item>) -> Vec<ItemJson> {
    items
        .iter()
        .map(|(key, item)| ItemJson {
            key: key.clone(),
            category: item.category.clone(),
            done: item.done,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// `[x] name  category`, with the name padded to `key_width` cells
pub fn format_item_line(key: &str, item: &Item, key_width: usize) -> String {
    format!(
        "[{}] {}  {}",
        item.checkbox_char(),
        pad_to_width(key, key_width),
        item.category
    )
}

/// One line per item, names aligned in a column
pub fn format_item_list(items: &IndexMap<String, Item>) -> Vec<String> {
    let key_width = items.keys().map(|k| display_width(k)).max().unwrap_or(0);
    items
        .iter()
        .map(|(key, item)| format_item_line(key, item, key_width))
        .collect()
}
