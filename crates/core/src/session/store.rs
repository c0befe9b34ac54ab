//! In-memory session store using Moka.
//!
//! Sessions live only in process memory. Idle sessions expire and the
//! least recently used ones are evicted when the store is full.

use moka::sync::Cache;
use orcamento_shared::config::SessionConfig;
use orcamento_shared::types::SessionId;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

use super::error::SessionError;
use super::state::Session;

/// Store of live sessions keyed by ID.
///
/// Cloning is cheap and all clones share the same sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<SessionId, Arc<Mutex<Session>>>,
}

impl SessionStore {
    /// Creates a store bounded by `max_sessions` with the given idle timeout.
    #[must_use]
    pub fn new(max_sessions: u64, idle_timeout: Duration) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle_timeout)
            .build();

        Self { sessions }
    }

    /// Creates a store from configuration.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            config.max_sessions,
            Duration::from_secs(config.idle_timeout_secs),
        )
    }

    /// Opens a new empty session and returns its ID.
    pub fn create(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions
            .insert(id, Arc::new(Mutex::new(Session::new())));
        debug!(session_id = %id, "Session created");
        id
    }

    /// Runs `f` with exclusive access to one session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` for unknown or expired sessions and
    /// `SessionError::Poisoned` if an earlier holder panicked.
    pub fn with_session<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, SessionError> {
        let session = self
            .sessions
            .get(&id)
            .ok_or(SessionError::NotFound(id))?;
        let mut guard = session.lock().map_err(|_| SessionError::Poisoned(id))?;
        Ok(f(&mut *guard))
    }

    /// Closes a session. Returns false if it did not exist.
    pub fn remove(&self, id: SessionId) -> bool {
        let removed = self.sessions.remove(&id).is_some();
        if removed {
            debug!(session_id = %id, "Session closed");
        }
        removed
    }

    /// Returns the number of live sessions (approximate until pending
    /// maintenance has run).
    #[must_use]
    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    /// Returns true if no session is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs pending expiry and eviction work.
    pub fn run_pending_tasks(&self) {
        self.sessions.run_pending_tasks();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
