//! Persistent key-value store and the typed storage service.
//!
//! The store is modeled after per-origin browser storage: a durable mapping
//! from string keys to string values holding the current user, the theme
//! preference, and one JSON-encoded entry list per username. The raw mapping
//! is the `StringStore` trait so tests can substitute an in-memory fake for
//! the SQLite-backed production implementation.
//!
//! Storage failures are best effort by design: `StorageService` logs and
//! swallows them, so a failed save leaves the in-memory state authoritative
//! for the rest of the session and a failed load reads as "no entries".

pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::constants::{KEY_CURRENT_USER, KEY_ENTRIES_PREFIX, KEY_THEME};
use crate::errors::StoreError;
use crate::journal_core::Entry;
use std::collections::HashMap;
use tracing::warn;

/// Durable string key → string value mapping.
///
/// Writes are last-write-wins with no versioning and no transactional
/// guarantee across keys (single active session per user is assumed).
pub trait StringStore {
    /// Reads the value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key` if present.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Theme preference, persisted process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The persisted representation (`"light"` / `"dark"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a persisted value; anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme, used by the toggle action.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// In-memory `StringStore` used in tests and as a reference implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

impl<S: StringStore + ?Sized> StringStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Shared handle to a store, letting tests observe writes made through a
/// service that owns the handle.
impl<S: StringStore> StringStore for std::rc::Rc<std::cell::RefCell<S>> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.borrow_mut().remove(key)
    }
}

/// Typed operations over a `StringStore`.
///
/// Implements the persisted-state layout: `currentUser` holds the raw
/// username, `theme` holds `"light"` or `"dark"`, and `entries:<username>`
/// holds a JSON array of entries. All failures are logged and swallowed.
pub struct StorageService<S: StringStore> {
    store: S,
}

impl<S: StringStore> StorageService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The logged-in username, if any.
    pub fn current_user(&self) -> Option<String> {
        match self.store.get(KEY_CURRENT_USER) {
            Ok(value) => value.filter(|name| !name.is_empty()),
            Err(err) => {
                warn!("Failed to read current user: {}", err);
                None
            }
        }
    }

    pub fn set_current_user(&mut self, name: &str) {
        if let Err(err) = self.store.set(KEY_CURRENT_USER, name) {
            warn!("Failed to persist current user: {}", err);
        }
    }

    pub fn clear_current_user(&mut self) {
        if let Err(err) = self.store.remove(KEY_CURRENT_USER) {
            warn!("Failed to clear current user: {}", err);
        }
    }

    /// The stored theme, or `system_fallback` when unset or invalid.
    pub fn theme(&self, system_fallback: Theme) -> Theme {
        match self.store.get(KEY_THEME) {
            Ok(value) => value
                .as_deref()
                .and_then(Theme::parse)
                .unwrap_or(system_fallback),
            Err(err) => {
                warn!("Failed to read theme: {}", err);
                system_fallback
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if let Err(err) = self.store.set(KEY_THEME, theme.as_str()) {
            warn!("Failed to persist theme: {}", err);
        }
    }

    /// Loads the entry list for `username`.
    ///
    /// An absent key or a value that fails to parse reads as an empty list;
    /// the parse failure is logged, never surfaced.
    pub fn load_entries(&self, username: &str) -> Vec<Entry> {
        let key = entries_key(username);
        match self.store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("Failed to parse stored entries for '{}': {}", username, err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("Failed to load entries for '{}': {}", username, err);
                Vec::new()
            }
        }
    }

    /// Serializes and overwrites the entry list for `username`.
    pub fn save_entries(&mut self, username: &str, entries: &[Entry]) {
        let key = entries_key(username);
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Failed to serialize entries for '{}': {}", username, err);
                return;
            }
        };

        if let Err(err) = self.store.set(&key, &raw) {
            warn!("Failed to save entries for '{}': {}", username, err);
        }
    }
}

fn entries_key(username: &str) -> String {
    format!("{}{}", KEY_ENTRIES_PREFIX, username)
}
