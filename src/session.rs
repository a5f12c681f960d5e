//! Bearer token storage.
//!
//! Page controllers never touch `localStorage` directly; they receive a
//! [`SessionStore`] so the flows can run against [`MemorySession`] in tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::TOKEN_STORAGE_KEY;

pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear(&self);
}

/// Token persisted in the browser's `localStorage` under `"token"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set_token(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                    tracing::warn!("failed to persist session token");
                }
            }
            None => tracing::warn!("localStorage unavailable, session token not persisted"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// In-memory store; clones share the same slot.
#[derive(Debug, Default, Clone)]
pub struct MemorySession {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        let session = Self::default();
        session.set_token(token);
        session
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
