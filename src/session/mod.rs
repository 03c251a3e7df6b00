//! Session token handling
//!
//! A [`Session`] is an explicit value threaded through every service call; the
//! core never reads authentication state from a global. [`SessionStore`] is the
//! process-wide holder a front end keeps between views: it is written once on
//! login, cleared on logout, and read at call time on every outbound request.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// An authenticated session against the Nightrader backend
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Opaque bearer credential issued by the backend at login
    pub token: String,
}

impl Session {
    /// Creates a session from a backend-issued token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Whether this session carries a credential
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Process-wide holder for the current session
///
/// The token is immutable for the session's duration; concurrent reads are
/// safe and the store never rotates or refreshes it.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the session produced by a successful login
    pub async fn set(&self, session: Session) {
        let mut guard = self.inner.write().await;
        *guard = Some(session);
        info!("Session stored");
    }

    /// Returns a clone of the current session, if any
    pub async fn current(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    /// Clears the session on logout
    pub async fn clear(&self) {
        let mut guard = self.inner.write().await;
        *guard = None;
        info!("Session cleared");
    }
}
