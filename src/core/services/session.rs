use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, AppResult};
use crate::core::models::User;

/// Key/value persistence behind the session store.
pub trait SessionBackend: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> AppResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{e:?}")))?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
    }

    /// True when running in a browser that exposes `localStorage`.
    pub fn available() -> bool {
        Self::storage().is_ok()
    }
}

impl SessionBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("{e:?}")))
    }
}

/// In-memory backend for tests and for browsers with storage disabled.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.lock().map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().map_err(|e| AppError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().map_err(|e| AppError::Storage(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Single owner of the persisted session. Built once at startup and handed
/// out through context; components never read `localStorage` themselves.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
    key: String,
    current: Arc<Mutex<Option<Session>>>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Loads the persisted session into memory. A corrupt entry is dropped.
    pub fn init(&self) -> AppResult<Option<Session>> {
        let loaded = match self.backend.get(&self.key)? {
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "discarding unreadable session");
                    self.backend.remove(&self.key)?;
                    None
                }
            },
            None => None,
        };
        self.replace(loaded.clone())?;
        Ok(loaded)
    }

    pub fn get(&self) -> Option<Session> {
        self.current.lock().ok().and_then(|s| s.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.get().map(|s| s.token)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.backend.remove(&self.key)?;
        self.replace(None)
    }

    fn replace(&self, session: Option<Session>) -> AppResult<()> {
        let mut current = self.current.lock().map_err(|e| AppError::Storage(e.to_string()))?;
        *current = session;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KEY: &str = "test.session";

    fn session() -> Session {
        Session {
            token: "abc".into(),
            user: User { id: "u1".into(), name: "Ana".into() },
        }
    }

    fn persisted(backend: &MemoryBackend) {
        backend.set(KEY, &serde_json::to_string(&session()).unwrap()).unwrap();
    }

    #[test]
    fn init_loads_persisted_session() {
        let backend = Arc::new(MemoryBackend::default());
        persisted(&backend);

        let store = SessionStore::new(backend, KEY);
        assert_eq!(store.get(), None);
        assert_eq!(store.init().unwrap(), Some(session()));
        assert_eq!(store.token().as_deref(), Some("abc"));
    }

    #[test]
    fn clear_removes_backend_entry() {
        let backend = Arc::new(MemoryBackend::default());
        persisted(&backend);
        let store = SessionStore::new(backend.clone(), KEY);
        store.init().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);
        assert_eq!(backend.get(KEY).unwrap(), None);
    }

    #[test]
    fn corrupt_entry_is_discarded_on_init() {
        let backend = Arc::new(MemoryBackend::default());
        backend.set(KEY, "{not json").unwrap();
        let store = SessionStore::new(backend.clone(), KEY);
        assert_eq!(store.init().unwrap(), None);
        assert_eq!(backend.get(KEY).unwrap(), None);
    }
}
