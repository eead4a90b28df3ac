//! Result envelope returned by every client operation
//!
//! A request either succeeds with a typed value or fails with an
//! [`ApiFailure`]. Failures are values, not panics: callers branch on the
//! envelope and render a fallback. The only condition reported outside the
//! envelope is a missing session ([`SessionUnavailable`]), which is detected
//! before any I/O.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::SessionUnavailable;

/// Transport-level failure class, mirroring what the HTTP stack reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Request,
    Body,
    Redirect,
    Other,
}

crate::impl_wire_name_conversions!(TransportErrorKind {
    Timeout => "timeout",
    Connect => "connect",
    Request => "request",
    Body => "body",
    Redirect => "redirect",
    Other => "other",
});

/// Error raised by the transport while the call was in flight, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Failure side of the result envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiFailure {
    /// The server answered with anything other than a 200 carrying a body.
    #[error("{}", server_message(.status, .title))]
    Server { status: u16, title: Option<String> },

    /// The call never produced a response.
    #[error("Transport error: {0}")]
    Transport(TransportError),

    /// A 200 body that does not match the expected shape.
    #[error("Unexpected payload: {reason}")]
    Payload { reason: String },
}

impl ApiFailure {
    /// Server-reported title, when the failure carries one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Server { title, .. } => title.as_deref(),
            Self::Transport(_) | Self::Payload { .. } => None,
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Transport(_) | Self::Payload { .. } => None,
        }
    }
}

fn server_message(status: &u16, title: &Option<String>) -> String {
    match title {
        Some(title) => title.clone(),
        None => format!("Request failed with status {status}"),
    }
}

/// Success or failure of one client operation.
pub type ApiResult<T> = std::result::Result<T, ApiFailure>;

/// Outcome of an authenticated operation: the outer error is the fail-fast
/// session check, the inner result is the envelope.
pub type ClientResult<T> = std::result::Result<ApiResult<T>, SessionUnavailable>;
