//! Storage adapter for the demo chat.
//!
//! The browser's local storage is reached through [`KeyValueStore`] so the chat
//! engine can run against an in-memory store in tests. [`ChatStore`] is the only
//! place that knows the history lives under a single JSON key, and it swallows
//! every failure: a store that cannot be read looks exactly like an empty one.

use log::warn;
use thiserror::Error;
use web_sys::window;

use crate::demo::chat::ChatMessage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read key `{0}`")]
    Read(String),
    #[error("failed to write key `{0}`")]
    Write(String),
    #[error("stored chat history is not valid: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to encode chat history: {0}")]
    Encode(#[source] serde_json::Error),
}

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Quota errors surface here as a rejected setItem.
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

pub struct ChatStore<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> ChatStore<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Returns the stored history, or `None` when it is missing, unreadable or corrupt.
    pub fn load(&self) -> Option<Vec<ChatMessage>> {
        match self.try_load() {
            Ok(messages) => messages,
            Err(e) => {
                warn!("Ignoring stored chat history: {}", e);
                None
            }
        }
    }

    /// Overwrites the stored history with `messages`. Failures are logged and dropped.
    pub fn save(&self, messages: &[ChatMessage]) {
        if let Err(e) = self.try_save(messages) {
            warn!("Could not persist chat history: {}", e);
        }
    }

    fn try_load(&self) -> Result<Option<Vec<ChatMessage>>, StorageError> {
        match self.store.get_item(self.key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(StorageError::Parse),
            None => Ok(None),
        }
    }

    fn try_save(&self, messages: &[ChatMessage]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(messages).map_err(StorageError::Encode)?;
        self.store.set_item(self.key, &raw)
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::{KeyValueStore, StorageError};

    /// In-memory store. Clones share the same map, so a clone can stand in for
    /// "the same browser after a reload".
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        items: Rc<RefCell<HashMap<String, String>>>,
        unavailable: Rc<Cell<bool>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        pub fn put_raw(&self, key: &str, value: &str) {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
        }

        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.set(unavailable);
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.unavailable.get() {
                return Err(StorageError::Unavailable);
            }
            Ok(self.raw(key))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.unavailable.get() {
                return Err(StorageError::Write(key.to_string()));
            }
            self.put_raw(key, value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStorage;
    use super::*;

    const KEY: &str = "test_chat";

    #[test]
    fn missing_key_loads_as_none() {
        let store = ChatStore::new(MemoryStorage::new(), KEY);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn corrupt_value_loads_as_none() {
        let memory = MemoryStorage::new();
        memory.put_raw(KEY, "{not json");
        let store = ChatStore::new(memory.clone(), KEY);
        assert_eq!(store.load(), None);

        // Valid JSON with the wrong shape is just as unusable.
        memory.put_raw(KEY, r#"{"sender":"Mike K."}"#);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_writes_records_with_me_flag() {
        let memory = MemoryStorage::new();
        let store = ChatStore::new(memory.clone(), KEY);
        store.save(&[ChatMessage::mine("hi")]);

        let raw = memory.raw(KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "sender": "You", "text": "hi", "me": true }])
        );
        assert_eq!(store.load(), Some(vec![ChatMessage::mine("hi")]));
    }

    #[test]
    fn empty_array_is_a_valid_history() {
        let memory = MemoryStorage::new();
        memory.put_raw(KEY, "[]");
        let store = ChatStore::new(memory, KEY);
        assert_eq!(store.load(), Some(vec![]));
    }

    #[test]
    fn unavailable_store_is_swallowed() {
        let memory = MemoryStorage::new();
        memory.set_unavailable(true);
        let store = ChatStore::new(memory.clone(), KEY);

        store.save(&[ChatMessage::mine("lost")]);
        assert_eq!(store.load(), None);

        memory.set_unavailable(false);
        assert_eq!(memory.raw(KEY), None);
    }
}
