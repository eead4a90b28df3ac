//! In-memory session store
//!
//! Owned by the application context. The authentication flow writes to it;
//! API clients read snapshots through [`SessionProvider`].

use doppler_domain::AppSession;
use parking_lot::RwLock;
use tracing::debug;

use super::ports::SessionProvider;

/// Session holder shared between the auth flow and the clients.
#[derive(Debug, Default)]
pub struct SessionStore {
    session: RwLock<Option<AppSession>>,
}

impl SessionStore {
    /// Create an empty store (no session yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `session`.
    pub fn with_session(session: AppSession) -> Self {
        Self { session: RwLock::new(Some(session)) }
    }

    /// Replace the current session.
    pub fn set(&self, session: AppSession) {
        debug!(status = %session.status, "session updated");
        *self.session.write() = Some(session);
    }

    /// Forget the current session (logout).
    pub fn clear(&self) {
        debug!("session cleared");
        *self.session.write() = None;
    }
}

impl SessionProvider for SessionStore {
    fn current(&self) -> Option<AppSession> {
        self.session.read().clone()
    }
}
