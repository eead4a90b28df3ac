//! Session data consulted by the authenticated API clients
//!
//! The session is produced by an external authentication flow. Clients only
//! read snapshots of it; [`resolve_connection_data`] is the precondition check
//! every authenticated request runs before touching the network.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::AUTHORIZATION_SCHEME;

/// Authentication state of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Unknown,
    NonAuthenticated,
    Authenticated,
}

crate::impl_wire_name_conversions!(SessionStatus {
    Unknown => "unknown",
    NonAuthenticated => "non-authenticated",
    Authenticated => "authenticated",
});

/// Account owner as reported by the authentication flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub fullname: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub user: User,
}

/// Snapshot of the authenticated-user context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSession {
    pub status: SessionStatus,
    pub jwt_token: Option<String>,
    pub user_data: Option<UserData>,
}

impl AppSession {
    /// Session that has not been resolved yet.
    pub fn unknown() -> Self {
        Self { status: SessionStatus::Unknown, jwt_token: None, user_data: None }
    }

    /// Session of a visitor that is known not to be logged in.
    pub fn non_authenticated() -> Self {
        Self { status: SessionStatus::NonAuthenticated, jwt_token: None, user_data: None }
    }

    /// Fully authenticated session for `email` using `jwt_token`.
    pub fn authenticated(jwt_token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            jwt_token: Some(jwt_token.into()),
            user_data: Some(UserData {
                user: User { email: email.into(), fullname: None, lang: None },
            }),
        }
    }

    /// Extract the credentials needed for an authenticated request.
    pub fn connection_data(&self) -> Result<ConnectionData, SessionUnavailable> {
        if self.status != SessionStatus::Authenticated {
            return Err(SessionUnavailable::NotAuthenticated(self.status));
        }

        let jwt_token = match self.jwt_token.as_deref() {
            Some(token) if !token.is_empty() => token,
            _ => return Err(SessionUnavailable::MissingToken),
        };

        let user_account = match self.user_data.as_ref() {
            Some(data) if !data.user.email.is_empty() => data.user.email.as_str(),
            _ => return Err(SessionUnavailable::MissingAccount),
        };

        Ok(ConnectionData { jwt_token: jwt_token.to_owned(), user_account: user_account.to_owned() })
    }
}

/// Credentials attached to one authenticated request.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionData {
    pub jwt_token: String,
    pub user_account: String,
}

impl ConnectionData {
    /// Value of the `Authorization` header: `token {jwt}`.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", AUTHORIZATION_SCHEME, self.jwt_token)
    }
}

// Keeps the token out of logs and panic messages.
impl std::fmt::Debug for ConnectionData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionData")
            .field("jwt_token", &"<redacted>")
            .field("user_account", &self.user_account)
            .finish()
    }
}

/// Reasons an authenticated request is refused before any I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionUnavailable {
    #[error("Doppler API connection data is not available: no session")]
    Missing,

    #[error("Doppler API connection data is not available: session is {0}")]
    NotAuthenticated(SessionStatus),

    #[error("Doppler API connection data is not available: missing token")]
    MissingToken,

    #[error("Doppler API connection data is not available: missing account")]
    MissingAccount,
}

/// Precondition check run before every authenticated request.
pub fn resolve_connection_data(
    session: Option<&AppSession>,
) -> Result<ConnectionData, SessionUnavailable> {
    session.ok_or(SessionUnavailable::Missing)?.connection_data()
}
