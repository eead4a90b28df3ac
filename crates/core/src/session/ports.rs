//! Port interface for session data

use doppler_domain::AppSession;

/// Source of the current session snapshot.
///
/// Clients receive a provider at construction and consult it once per
/// request; they never mutate the session.
pub trait SessionProvider: Send + Sync {
    /// Snapshot of the session, `None` before the auth flow produced one.
    fn current(&self) -> Option<AppSession>;
}
