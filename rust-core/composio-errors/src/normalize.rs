// SPDX-License-Identifier: PMPL-1.0-or-later
//! Failure normalization.
//!
//! [`normalize`] turns one failed request outcome into exactly one
//! [`ComposioError`]. It is a single-attempt mapping: nothing here retries
//! or suppresses a failure.

use tracing::warn;

use crate::body::ErrorBody;
use crate::code::ErrorCode;
use crate::error::ComposioError;

/// Outcome of a request that did not produce a usable result.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// The backend answered with a non-success status.
    Status {
        status: u16,
        url: String,
        body: ErrorBody,
    },
    /// No response arrived within the transport timeout.
    Timeout { url: String },
    /// A connection to the host could not be established.
    Unreachable { url: String, detail: String },
    /// Any other transport-level failure.
    Transport { url: String, detail: String },
    /// A success response whose payload could not be decoded.
    Decode { url: String, detail: String },
}

/// Error code for an HTTP status.
pub fn code_for_status(status: u16) -> ErrorCode {
    match status {
        400 => ErrorCode::BadRequest,
        401 | 403 => ErrorCode::Unauthorized,
        404 => ErrorCode::NotFound,
        408 => ErrorCode::RequestTimeout,
        429 => ErrorCode::RateLimit,
        500 => ErrorCode::ServerError,
        502..=504 => ErrorCode::ServerUnavailable,
        _ => ErrorCode::Unknown,
    }
}

/// Normalize a failure into a structured error.
pub fn normalize(failure: Failure) -> ComposioError {
    let err = match failure {
        Failure::Status { status, url, body } => from_status(status, &url, &body),
        Failure::Timeout { .. } => ComposioError::new(ErrorCode::RequestTimeout),
        Failure::Unreachable { url, detail } => {
            ComposioError::new(ErrorCode::BaseUrlNotReachable)
                .with_message_detail(url)
                .with_description_detail(detail)
        }
        Failure::Transport { url, detail } => ComposioError::new(ErrorCode::Unknown)
            .with_message_detail(url)
            .with_description_detail(detail),
        Failure::Decode { url, detail } => ComposioError::new(ErrorCode::Unknown)
            .with_message_detail(format!("unexpected response payload from {url}"))
            .with_description_detail(detail),
    };

    warn!(
        error_id = %err.error_id(),
        code = %err.code(),
        status = ?err.status(),
        "request failed"
    );
    err
}

fn from_status(status: u16, url: &str, body: &ErrorBody) -> ComposioError {
    let code = code_for_status(status);
    let err = ComposioError::new(code).with_status(status);

    match code {
        ErrorCode::BadRequest => {
            let err = err.with_message_detail(url);
            match body.detail() {
                Some(detail) => err.with_description_detail(detail),
                None => err,
            }
        }
        ErrorCode::NotFound | ErrorCode::RequestTimeout => err,
        ErrorCode::Unknown => err.with_message_detail(format!("HTTP {status} from {url}")),
        _ => match body.detail() {
            Some(detail) => err.with_description_detail(detail),
            None => err,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    const URL: &str = "https://backend.composio.dev/api/v1/apps";

    fn status(status: u16, body: &[u8]) -> ComposioError {
        normalize(Failure::Status {
            status,
            url: URL.to_string(),
            body: ErrorBody::parse(body),
        })
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(code_for_status(400), ErrorCode::BadRequest);
        assert_eq!(code_for_status(401), ErrorCode::Unauthorized);
        assert_eq!(code_for_status(403), ErrorCode::Unauthorized);
        assert_eq!(code_for_status(404), ErrorCode::NotFound);
        assert_eq!(code_for_status(408), ErrorCode::RequestTimeout);
        assert_eq!(code_for_status(429), ErrorCode::RateLimit);
        assert_eq!(code_for_status(500), ErrorCode::ServerError);
        assert_eq!(code_for_status(502), ErrorCode::ServerUnavailable);
        assert_eq!(code_for_status(503), ErrorCode::ServerUnavailable);
        assert_eq!(code_for_status(504), ErrorCode::ServerUnavailable);
        assert_eq!(code_for_status(418), ErrorCode::Unknown);
        assert_eq!(code_for_status(501), ErrorCode::Unknown);
    }

    #[test]
    fn test_not_found_is_verbatim() {
        let err = status(404, br#"{"detail":"Not found"}"#);
        let entry = catalog::lookup(ErrorCode::NotFound);
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), entry.message);
        assert_eq!(err.description(), entry.description);
        assert_eq!(err.name(), "ComposioError");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_bad_request_includes_url_and_errors() {
        let err = status(400, br#"{"errors":["Invalid request for apps"]}"#);
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert!(err.message().contains(URL));
        assert!(err.description().contains("Invalid request for apps"));
        assert!(err
            .description()
            .contains(catalog::lookup(ErrorCode::BadRequest).description));
    }

    #[test]
    fn test_bad_request_with_empty_errors_keeps_detail() {
        let err = status(400, br#"{"errors":[],"detail":"app key is required"}"#);
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert!(err.description().contains("app key is required"));
    }

    #[test]
    fn test_bad_request_without_body() {
        let err = status(400, b"");
        assert_eq!(
            err.description(),
            catalog::lookup(ErrorCode::BadRequest).description
        );
    }

    #[test]
    fn test_request_timeout_description_is_exact() {
        let err = status(408, br#"{"detail":"slow"}"#);
        assert_eq!(err.code(), ErrorCode::RequestTimeout);
        assert_eq!(
            err.description(),
            catalog::lookup(ErrorCode::RequestTimeout).description
        );
    }

    #[test]
    fn test_server_errors_append_upstream_detail() {
        let err = status(500, br#"{"message":"db connection lost"}"#);
        let entry = catalog::lookup(ErrorCode::ServerError);
        assert_eq!(err.code(), ErrorCode::ServerError);
        assert_eq!(err.message(), entry.message);
        assert!(err.description().contains(entry.description));
        assert!(err.description().contains("db connection lost"));

        let err = status(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.code(), ErrorCode::ServerUnavailable);
        assert!(err.description().contains("Bad Gateway"));
    }

    #[test]
    fn test_unknown_status_mentions_status() {
        let err = status(418, b"");
        assert_eq!(err.code(), ErrorCode::Unknown);
        assert!(err.message().contains("HTTP 418"));
        assert!(err.message().contains(catalog::lookup(ErrorCode::Unknown).message));
    }

    #[test]
    fn test_client_side_timeout() {
        let err = normalize(Failure::Timeout {
            url: URL.to_string(),
        });
        let entry = catalog::lookup(ErrorCode::RequestTimeout);
        assert_eq!(err.code(), ErrorCode::RequestTimeout);
        assert_eq!(err.description(), entry.description);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_unreachable_and_transport() {
        let err = normalize(Failure::Unreachable {
            url: URL.to_string(),
            detail: "connection refused".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::BaseUrlNotReachable);
        assert!(err.message().contains(URL));
        assert!(err.description().contains("connection refused"));

        let err = normalize(Failure::Transport {
            url: URL.to_string(),
            detail: "broken pipe".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::Unknown);
        assert!(err.description().contains("broken pipe"));
    }

    #[test]
    fn test_decode_failure() {
        let err = normalize(Failure::Decode {
            url: URL.to_string(),
            detail: "expected value at line 1 column 1".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::Unknown);
        assert!(err.message().contains("unexpected response payload"));
        assert!(err.description().contains("expected value"));
    }
}
