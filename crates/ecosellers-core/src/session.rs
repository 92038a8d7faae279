use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// The signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            company_name: None,
        }
    }

    pub fn with_company(email: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            company_name: Some(company_name.into()),
        }
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.company_name().unwrap_or(&self.email)
    }

    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Key/value string storage, shaped after the browser `Storage` interface.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Session record kept as JSON under a single storage key.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set(&self, session: &Session) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(session).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.storage.set_item(&self.key, &raw)
    }

    /// Absent, unreadable and malformed records all read as no session.
    pub fn get(&self) -> Option<Session> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                error!("failed to read session: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("ignoring malformed session record: {e}");
                None
            }
        }
    }

    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new(), "user")
    }

    #[test]
    fn test_get_after_set_returns_same_record() {
        let store = store();
        let session = Session::with_company("seller@example.com", "GreenLeaf Products");

        store.set(&session).unwrap();

        assert_eq!(store.get(), Some(session.clone()));
        assert_eq!(store.get(), Some(session));
    }

    #[test]
    fn test_get_on_empty_store_is_absent() {
        assert_eq!(store().get(), None);
    }

    #[test]
    fn test_clear_removes_session() {
        let store = store();
        store.set(&Session::new("seller@example.com")).unwrap();
        store.clear().unwrap();

        assert!(!store.is_present());
    }

    #[test]
    fn test_wire_format() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(&storage, "user");

        store.set(&Session::new("a@b.co")).unwrap();
        assert_eq!(
            storage.get_item("user").unwrap().as_deref(),
            Some(r#"{"email":"a@b.co"}"#)
        );

        store.set(&Session::with_company("a@b.co", "Acme")).unwrap();
        assert_eq!(
            storage.get_item("user").unwrap().as_deref(),
            Some(r#"{"email":"a@b.co","companyName":"Acme"}"#)
        );
    }

    #[test]
    fn test_malformed_record_reads_as_absent_and_is_kept() {
        let storage = MemoryStorage::new();
        storage.set_item("user", "{oops").unwrap();
        let store = SessionStore::new(&storage, "user");

        assert_eq!(store.get(), None);
        assert!(storage.get_item("user").unwrap().is_some());
    }

    #[test]
    fn test_display_name_prefers_company() {
        assert_eq!(Session::new("a@b.co").display_name(), "a@b.co");
        assert_eq!(Session::with_company("a@b.co", "").display_name(), "a@b.co");

        let session = Session::with_company("a@b.co", "earth goods");
        assert_eq!(session.display_name(), "earth goods");
        assert_eq!(session.initial(), "E");
    }
}
