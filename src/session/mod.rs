//! Session Identity
//!
//! The client's belief about which teacher (if any) is signed in, and the
//! storage that lets it survive a reload.
//!
//! A [`Session`] is never ambient: the controller returns one from
//! `restore_session`/`login` and takes it as an argument everywhere else.
//! The hosting shell decides where it lives.

#[cfg(feature = "native")]
pub mod file;

#[cfg(feature = "native")]
pub use file::FileSessionStore;

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{SessionError, StoreError};

/// An authenticated identity (the teacher's username)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Session(String);

impl Session {
    /// Create a session; the username must not be empty
    ///
    /// Whitespace is kept as given: whether it names a teacher is the
    /// server's call.
    pub fn new(username: impl Into<String>) -> Result<Self, SessionError> {
        let username = username.into();
        if username.is_empty() {
            return Err(SessionError::EmptyIdentity);
        }
        Ok(Self(username))
    }

    pub fn username(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Session {
    type Error = SessionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Session::new(value)
    }
}

impl From<Session> for String {
    fn from(session: Session) -> Self {
        session.0
    }
}

/// Persistent slot for the logged-in username
pub trait SessionStore {
    /// Read the stored username; `None` means logged out
    fn load(&self) -> Result<Option<String>, StoreError>;

    fn save(&self, username: &str) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `username`
    pub fn with_user(username: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(username.to_string()))),
        }
    }

    /// Current raw contents
    pub fn peek(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, username: &str) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(username.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn load(&self) -> Result<Option<String>, StoreError> {
        (**self).load()
    }

    fn save(&self, username: &str) -> Result<(), StoreError> {
        (**self).save(username)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}
