//! Conversions from external infrastructure errors into domain errors.

use doppler_domain::{DopplerError, TransportError, TransportErrorKind};
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DopplerError);

impl From<InfraError> for DopplerError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DopplerError> for InfraError {
    fn from(value: DopplerError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DopplerError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        let error = if value.is_builder() {
            DopplerError::Config(format!("invalid HTTP client configuration: {value}"))
        } else if value.is_timeout() {
            DopplerError::Network(format!("HTTP request timed out: {value}"))
        } else {
            DopplerError::Network(format!("HTTP request failed: {value}"))
        };
        InfraError(error)
    }
}

/// Classify a transport failure for the result envelope, keeping the
/// original message verbatim.
pub fn transport_error(err: &HttpError) -> TransportError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() {
        TransportErrorKind::Connect
    } else if err.is_redirect() {
        TransportErrorKind::Redirect
    } else if err.is_body() || err.is_decode() {
        TransportErrorKind::Body
    } else if err.is_request() {
        TransportErrorKind::Request
    } else {
        TransportErrorKind::Other
    };
    TransportError::new(kind, err.to_string())
}

/* -------------------------------------------------------------------------- */
/* serde / toml / url → DopplerError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(DopplerError::Config(format!("Invalid JSON format: {value}")))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(DopplerError::Config(format!("Invalid TOML format: {value}")))
    }
}

impl From<url::ParseError> for InfraError {
    fn from(value: url::ParseError) -> Self {
        InfraError(DopplerError::Config(format!("Invalid URL: {value}")))
    }
}
