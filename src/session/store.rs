//! Session storage.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::SessionState;
use crate::error::PadelError;
use crate::Result;

/// Keyed storage for session states.
///
/// Implementations must be safe to call from any number of request tasks
/// at once. Callers never lock around these operations.
pub trait SessionStore: Send + Sync {
    /// Return the state for `session_id`, inserting the default state if
    /// the id is unknown.
    ///
    /// Concurrent first calls for the same id all observe the same instance.
    fn get_or_create(&self, session_id: &str) -> Result<Arc<SessionState>>;

    /// Insert or overwrite the state for `session_id`.
    ///
    /// Returns the stored instance.
    fn put(&self, session_id: String, state: SessionState) -> Result<Arc<SessionState>>;
}

/// Process-lifetime session store backed by a locked map.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Arc<SessionState>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions held.
    ///
    /// Still counts entries after a writer panicked while holding the lock.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no session has been created yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_or_create(&self, session_id: &str) -> Result<Arc<SessionState>> {
        {
            let sessions = self
                .sessions
                .read()
                .map_err(|_| PadelError::LockPoisoned)?;
            if let Some(state) = sessions.get(session_id) {
                return Ok(Arc::clone(state));
            }
        }

        // Another writer may have inserted between the two locks; entry()
        // keeps whichever instance got there first.
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| PadelError::LockPoisoned)?;
        let state = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(session = session_id, "creating default session");
                Arc::new(SessionState::new(session_id))
            });
        Ok(Arc::clone(state))
    }

    fn put(&self, session_id: String, state: SessionState) -> Result<Arc<SessionState>> {
        let state = Arc::new(state);
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| PadelError::LockPoisoned)?;
        sessions.insert(session_id, Arc::clone(&state));
        Ok(state)
    }
}
