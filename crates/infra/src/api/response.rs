//! Response → result envelope

use doppler_domain::{ApiFailure, ApiResult};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use super::payloads::WirePayload;
use crate::errors::transport_error;

/// Problem details body; only the title is surfaced.
#[derive(Debug, Deserialize)]
struct ProblemPayload {
    title: Option<String>,
}

/// Read the body and fold the response into the envelope.
pub async fn read_envelope<P: WirePayload>(response: Response) -> ApiResult<P::Domain> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|err| ApiFailure::Transport(transport_error(&err)))?;
    decode_envelope::<P>(status, &body)
}

/// Only a 200 with a non-empty body is a success; everything else is a
/// server failure carrying the body's `title`, if any.
pub fn decode_envelope<P: WirePayload>(status: StatusCode, body: &[u8]) -> ApiResult<P::Domain> {
    if status != StatusCode::OK || body.is_empty() {
        let title = problem_title(body);
        debug!(status = status.as_u16(), ?title, "request failed");
        return Err(ApiFailure::Server { status: status.as_u16(), title });
    }

    let payload: P = serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "response body does not match the expected shape");
        ApiFailure::Payload { reason: err.to_string() }
    })?;

    payload.into_domain().map_err(|reason| {
        warn!(%reason, "response body rejected");
        ApiFailure::Payload { reason }
    })
}

fn problem_title(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ProblemPayload>(body).ok().and_then(|problem| problem.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::payloads::ListPayload;

    const LIST: &[u8] =
        br#"{"name":"Customers","listId":3,"subscribersCount":10,"currentStatus":"ready"}"#;

    #[test]
    fn ok_with_body_decodes() {
        let list = decode_envelope::<ListPayload>(StatusCode::OK, LIST).unwrap();
        assert_eq!(list.id, 3);
    }

    #[test]
    fn non_ok_status_carries_title() {
        let failure = decode_envelope::<ListPayload>(
            StatusCode::NOT_FOUND,
            br#"{"title":"List not found","status":404}"#,
        )
        .unwrap_err();

        assert_eq!(failure, ApiFailure::Server { status: 404, title: Some("List not found".into()) });
        assert_eq!(failure.to_string(), "List not found");
    }

    #[test]
    fn non_json_error_body_has_no_title() {
        let failure =
            decode_envelope::<ListPayload>(StatusCode::BAD_GATEWAY, b"<html>bad</html>").unwrap_err();
        assert_eq!(failure, ApiFailure::Server { status: 502, title: None });
    }

    #[test]
    fn success_status_other_than_ok_is_a_failure() {
        let failure = decode_envelope::<ListPayload>(StatusCode::CREATED, LIST).unwrap_err();
        assert_eq!(failure.status(), Some(201));
    }

    #[test]
    fn ok_with_empty_body_is_a_failure() {
        let failure = decode_envelope::<ListPayload>(StatusCode::OK, b"").unwrap_err();
        assert_eq!(failure, ApiFailure::Server { status: 200, title: None });
    }

    #[test]
    fn malformed_body_is_a_payload_failure() {
        let failure =
            decode_envelope::<ListPayload>(StatusCode::OK, br#"{"name":"x"}"#).unwrap_err();
        assert!(matches!(failure, ApiFailure::Payload { .. }));
    }
}
