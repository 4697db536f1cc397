//! Key-value persistence port.
//!
//! DESIGN
//! ======
//! The login guard persists three string entries. Browsers keep them in
//! `localStorage`; tests and native hosts use [`MemoryStore`]. Reads never
//! fail (an unavailable store reads as empty), writes report [`StoreError`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Error returned by [`KeyValueStore`] writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No backing storage exists in this context (SSR, privacy mode).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the write (quota, read-only store).
    #[error("storage write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// String-keyed persistent store scoped to one browser profile.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot persist the value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be modified.
    fn clear(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        (**self).clear(key)
    }
}

/// In-memory store. Clones share one map, which models two tabs (or a reload)
/// over the same browser profile.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle over the same entries that rejects every write.
    #[must_use]
    pub fn read_only(&self) -> Self {
        Self { entries: Rc::clone(&self.entries), read_only: true }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn reject(&self, key: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::WriteRejected { key: key.to_owned(), reason: "read-only store".to_owned() });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.reject(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.reject(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
