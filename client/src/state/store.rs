//! Persistence seam for the session record.
//!
//! DESIGN
//! ======
//! The interceptor and guard only see [`SessionStore`], so their decision
//! logic runs in plain unit tests against [`MemorySessionStore`] while the
//! app uses [`BrowserSessionStore`] backed by `localStorage`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

use super::session::{SESSION_KEY, SessionUser, decode_session};
use crate::util::storage;

/// Read/write access to the persisted session record.
pub trait SessionStore: Send + Sync {
    /// Raw serialized record, if any.
    fn load_raw(&self) -> Option<String>;
    fn save_raw(&self, raw: &str);
    fn clear(&self);

    /// Parsed record; absent or undecodable means no session.
    fn load(&self) -> Option<SessionUser> {
        decode_session(self.load_raw().as_deref())
    }

    fn save(&self, user: &SessionUser) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.save_raw(&raw);
        }
    }
}

/// Shared handle passed through Leptos context.
pub type SharedSessionStore = Arc<dyn SessionStore>;

/// Session store backed by the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load_raw(&self) -> Option<String> {
        storage::load_raw(SESSION_KEY)
    }

    fn save_raw(&self, raw: &str) {
        storage::save_raw(SESSION_KEY, raw);
    }

    fn clear(&self) {
        storage::remove(SESSION_KEY);
    }
}

/// Process-local session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `user`.
    pub fn with_user(user: &SessionUser) -> Self {
        let store = Self::new();
        store.save(user);
        store
    }

    /// Store pre-populated with an arbitrary raw value.
    pub fn with_raw(raw: &str) -> Self {
        let store = Self::new();
        store.save_raw(raw);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn load_raw(&self) -> Option<String> {
        self.raw.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save_raw(&self, raw: &str) {
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.to_owned());
    }

    fn clear(&self) {
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
