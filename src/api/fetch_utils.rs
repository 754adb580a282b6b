//! Response classification and strict decoding

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::constants::LOG_PREVIEW_CHARS;
use crate::error::{ApiError, TransportFailureKind};

use super::transport::{HttpResponse, TransportError};

/// Maps a transport failure onto the client's error taxonomy.
pub(super) fn transport_failure(url: &str, e: TransportError) -> ApiError {
    error!("Request failed for URL {}: {}", url, e);
    match e {
        TransportError::Timeout(message) => {
            ApiError::transport(TransportFailureKind::Timeout, url, message)
        }
        TransportError::Connect(message) => {
            ApiError::transport(TransportFailureKind::Connect, url, message)
        }
        TransportError::Other(message) => {
            ApiError::transport(TransportFailureKind::Other, url, message)
        }
        TransportError::Canceled => ApiError::Canceled,
    }
}

/// Returns the body of a successful response, or the error matching its
/// status code. Status and body are kept in the error.
pub(super) fn check_status(
    endpoint_name: &str,
    url: &str,
    response: HttpResponse,
) -> Result<String, ApiError> {
    let status = response.status;
    debug!("Response status: {status}");

    if status.is_success() {
        return Ok(response.body);
    }

    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    error!("HTTP {} - {} (URL: {})", status_code, reason, url);

    Err(match status_code {
        401 => ApiError::rejected_credentials(endpoint_name, response.body),
        404 => ApiError::not_found(url, response.body),
        500..=599 => ApiError::server_error(status_code, url, response.body),
        // Unfollowed redirects and informational codes are as unusable as a 4xx.
        _ => ApiError::client_error(status_code, url, response.body),
    })
}

/// Decodes a response body into `T`, failing on any mismatch.
pub(super) fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    debug!("Response length: {} bytes", body.len());
    let preview: String = body.chars().take(LOG_PREVIEW_CHARS).collect();
    debug!("Response text (first {LOG_PREVIEW_CHARS} chars): {preview}");

    serde_json::from_str::<T>(body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);

        let trimmed = body.trim_start();
        let message = if trimmed.is_empty() {
            "Response body is empty".to_string()
        } else if e.is_syntax() || e.is_eof() {
            format!("Response is not valid JSON: {e}")
        } else {
            format!("Unexpected response structure: {e}")
        };
        ApiError::malformed_response(url, message, body)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use serde::Deserialize;

    const URL: &str = "https://www.geoguessr.com/api/v3/profiles";

    #[derive(Debug, Deserialize, PartialEq)]
    struct Shape {
        id: String,
        count: u32,
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse::new(StatusCode::from_u16(status).unwrap(), body)
    }

    #[test]
    fn test_check_status_success_returns_body() {
        let body = check_status("profile", URL, response(200, "{}")).unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn test_check_status_classification() {
        let err = check_status("profile", URL, response(401, "denied")).unwrap_err();
        assert!(err.is_unauthenticated());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), Some("denied"));

        let err = check_status("profile", URL, response(404, "")).unwrap_err();
        assert!(err.is_not_found());

        let err = check_status("profile", URL, response(429, "slow down")).unwrap_err();
        assert!(matches!(err, ApiError::ClientError { status: 429, .. }));
        assert!(!err.is_retryable());

        let err = check_status("profile", URL, response(502, "bad gateway")).unwrap_err();
        assert!(matches!(err, ApiError::ServerError { status: 502, .. }));
        assert!(err.is_retryable());

        let err = check_status("profile", URL, response(304, "")).unwrap_err();
        assert!(matches!(err, ApiError::ClientError { status: 304, .. }));
    }

    #[test]
    fn test_decode_body_strict() {
        let ok: Shape = decode_body(URL, r#"{"id":"a","count":2,"extra":true}"#).unwrap();
        assert_eq!(
            ok,
            Shape {
                id: "a".to_string(),
                count: 2
            }
        );

        let missing = decode_body::<Shape>(URL, r#"{"id":"a"}"#).unwrap_err();
        assert!(missing.to_string().contains("Unexpected response structure"));

        let wrong_type = decode_body::<Shape>(URL, r#"{"id":"a","count":"2"}"#).unwrap_err();
        assert!(matches!(wrong_type, ApiError::MalformedResponse { .. }));

        let empty = decode_body::<Shape>(URL, "  ").unwrap_err();
        assert!(empty.to_string().contains("Response body is empty"));

        let html = decode_body::<Shape>(URL, "<html>oops</html>").unwrap_err();
        assert!(html.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_transport_failure_mapping() {
        let err = transport_failure(URL, TransportError::Timeout("slow".into()));
        assert!(matches!(
            err,
            ApiError::Transport {
                kind: TransportFailureKind::Timeout,
                ..
            }
        ));
        assert!(matches!(
            transport_failure(URL, TransportError::Canceled),
            ApiError::Canceled
        ));
    }
}
