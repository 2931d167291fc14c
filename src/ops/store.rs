use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::item::{Item, SeedItem};

/// Error type for building commands from user input
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("item not found: {0}")]
    NotFound(String),
}

/// A state transition on the store.
///
/// The serialized `type` tags are the ones command scripts use. An unknown tag
/// fails to deserialize; it is never dropped silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Insert `key`, or overwrite it if present, as not done
    #[serde(rename = "ADD", alias = "add")]
    Add { key: String, category: String },
    /// Write `key` with the opposite of the `done` flag the caller observed
    #[serde(rename = "CHECK_UNCHECK", alias = "toggle_done")]
    ToggleDone {
        key: String,
        category: String,
        done: bool,
    },
}

impl Command {
    /// Build an `Add`, rejecting an empty name or category.
    pub fn add_checked(key: &str, category: &str) -> Result<Command, CommandError> {
        if key.is_empty() {
            return Err(CommandError::EmptyField("name"));
        }
        if category.is_empty() {
            return Err(CommandError::EmptyField("category"));
        }
        Ok(Command::Add {
            key: key.to_string(),
            category: category.to_string(),
        })
    }

    /// Build a `ToggleDone` from the item as it currently appears in `snapshot`.
    pub fn toggle_observed(snapshot: &Snapshot, key: &str) -> Result<Command, CommandError> {
        let item = snapshot
            .get(key)
            .ok_or_else(|| CommandError::NotFound(key.to_string()))?;
        Ok(Command::ToggleDone {
            key: key.to_string(),
            category: item.category.clone(),
            done: item.done,
        })
    }

    /// The item key this command writes
    pub fn key(&self) -> &str {
        match self {
            Command::Add { key, .. } | Command::ToggleDone { key, .. } => key,
        }
    }

    /// Short lowercase name, used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::ToggleDone { .. } => "toggle_done",
        }
    }
}

/// Immutable point-in-time view of every item, keyed by name.
///
/// Clones share storage. `apply` always builds a new mapping, so a snapshot
/// handed out earlier keeps reading the same items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    items: Arc<IndexMap<String, Item>>,
}

impl Snapshot {
    pub fn from_seed(seed: &[SeedItem]) -> Self {
        let items = seed
            .iter()
            .map(|s| {
                (
                    s.key.clone(),
                    Item {
                        category: s.category.clone(),
                        done: s.done,
                    },
                )
            })
            .collect();
        Snapshot {
            items: Arc::new(items),
        }
    }

    /// Apply a command, returning the next snapshot. Entries other than the
    /// command's key are carried over unchanged.
    pub fn apply(&self, cmd: &Command) -> Snapshot {
        let mut items = (*self.items).clone();
        match cmd {
            Command::Add { key, category } => {
                items.insert(key.clone(), Item::new(category.clone()));
            }
            Command::ToggleDone {
                key,
                category,
                done,
            } => {
                items.insert(
                    key.clone(),
                    Item {
                        category: category.clone(),
                        done: !done,
                    },
                );
            }
        }
        Snapshot {
            items: Arc::new(items),
        }
    }

    pub fn items(&self) -> &IndexMap<String, Item> {
        &self.items
    }

    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Owner of the current snapshot. Commands are the only way to change it.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    current: Snapshot,
}

impl TaskStore {
    pub fn new(seed: &[SeedItem]) -> Self {
        TaskStore {
            current: Snapshot::from_seed(seed),
        }
    }

    /// Cheap handle on the current state
    pub fn snapshot(&self) -> Snapshot {
        self.current.clone()
    }

    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    pub fn get(&self, key: &str) -> Option<&Item> {
        self.current.get(key)
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Replace the current snapshot with the result of `cmd`.
    pub fn dispatch(&mut self, cmd: &Command) -> &Snapshot {
        log::debug!(
            "event=dispatch command={} key={:?} items_before={}",
            cmd.name(),
            cmd.key(),
            self.current.len()
        );
        self.current = self.current.apply(cmd);
        &self.current
    }
}
