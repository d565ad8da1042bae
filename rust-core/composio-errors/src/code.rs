// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error codes and their namespaces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Namespace an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Failures reported by the Composio backend over HTTP.
    Backend,
    /// Failures that can happen regardless of the backend (transport, setup).
    Common,
    /// Failures raised by SDK-side helpers.
    Sdk,
}

impl Namespace {
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Backend => "BACKEND",
            Namespace::Common => "COMMON",
            Namespace::Sdk => "SDK",
        }
    }
}

/// Closed set of error codes the SDK can return.
///
/// The wire form is `NAMESPACE::NAME`, e.g. `BACKEND::NOT_FOUND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    BadRequest,
    Unauthorized,
    NotFound,
    RateLimit,
    ServerError,
    ServerUnavailable,
    RequestTimeout,
    BaseUrlNotReachable,
    ApiKeyUnavailable,
    InvalidParams,
    Unknown,
    NoConnectedAccountFound,
}

impl ErrorCode {
    /// Every code, in catalog order.
    pub const ALL: [ErrorCode; 12] = [
        ErrorCode::BadRequest,
        ErrorCode::Unauthorized,
        ErrorCode::NotFound,
        ErrorCode::RateLimit,
        ErrorCode::ServerError,
        ErrorCode::ServerUnavailable,
        ErrorCode::RequestTimeout,
        ErrorCode::BaseUrlNotReachable,
        ErrorCode::ApiKeyUnavailable,
        ErrorCode::InvalidParams,
        ErrorCode::Unknown,
        ErrorCode::NoConnectedAccountFound,
    ];

    pub fn namespace(self) -> Namespace {
        match self {
            ErrorCode::BadRequest
            | ErrorCode::Unauthorized
            | ErrorCode::NotFound
            | ErrorCode::RateLimit
            | ErrorCode::ServerError
            | ErrorCode::ServerUnavailable => Namespace::Backend,
            ErrorCode::RequestTimeout
            | ErrorCode::BaseUrlNotReachable
            | ErrorCode::ApiKeyUnavailable
            | ErrorCode::InvalidParams
            | ErrorCode::Unknown => Namespace::Common,
            ErrorCode::NoConnectedAccountFound => Namespace::Sdk,
        }
    }

    /// Name within the namespace, e.g. `NOT_FOUND`.
    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::RateLimit => "RATE_LIMIT",
            ErrorCode::ServerError => "SERVER_ERROR",
            ErrorCode::ServerUnavailable => "SERVER_UNAVAILABLE",
            ErrorCode::RequestTimeout => "REQUEST_TIMEOUT",
            ErrorCode::BaseUrlNotReachable => "BASE_URL_NOT_REACHABLE",
            ErrorCode::ApiKeyUnavailable => "API_KEY_UNAVAILABLE",
            ErrorCode::InvalidParams => "INVALID_PARAMS",
            ErrorCode::Unknown => "UNKNOWN",
            ErrorCode::NoConnectedAccountFound => "NO_CONNECTED_ACCOUNT_FOUND",
        }
    }

    /// Full wire form, e.g. `BACKEND::NOT_FOUND`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BACKEND::BAD_REQUEST",
            ErrorCode::Unauthorized => "BACKEND::UNAUTHORIZED",
            ErrorCode::NotFound => "BACKEND::NOT_FOUND",
            ErrorCode::RateLimit => "BACKEND::RATE_LIMIT",
            ErrorCode::ServerError => "BACKEND::SERVER_ERROR",
            ErrorCode::ServerUnavailable => "BACKEND::SERVER_UNAVAILABLE",
            ErrorCode::RequestTimeout => "COMMON::REQUEST_TIMEOUT",
            ErrorCode::BaseUrlNotReachable => "COMMON::BASE_URL_NOT_REACHABLE",
            ErrorCode::ApiKeyUnavailable => "COMMON::API_KEY_UNAVAILABLE",
            ErrorCode::InvalidParams => "COMMON::INVALID_PARAMS",
            ErrorCode::Unknown => "COMMON::UNKNOWN",
            ErrorCode::NoConnectedAccountFound => "SDK::NO_CONNECTED_ACCOUNT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known `NAMESPACE::NAME` code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_is_namespace_and_name() {
        for code in ErrorCode::ALL {
            let expected = format!("{}::{}", code.namespace().as_str(), code.name());
            assert_eq!(code.as_str(), expected);
        }
    }

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(
            "BACKEND::NOT_FOUND".parse::<ErrorCode>().unwrap(),
            ErrorCode::NotFound
        );
        assert_eq!(
            "COMMON::REQUEST_TIMEOUT".parse::<ErrorCode>().unwrap(),
            ErrorCode::RequestTimeout
        );
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = "BACKEND::TEAPOT".parse::<ErrorCode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown error code: BACKEND::TEAPOT");
    }

    #[test]
    fn test_timeout_lives_in_common_namespace() {
        assert_eq!(ErrorCode::RequestTimeout.namespace(), Namespace::Common);
        assert_eq!(ErrorCode::ServerUnavailable.namespace(), Namespace::Backend);
        assert_eq!(ErrorCode::NoConnectedAccountFound.namespace(), Namespace::Sdk);
    }

    #[test]
    fn test_serde_uses_wire_form() {
        let json = serde_json::to_string(&ErrorCode::BadRequest).unwrap();
        assert_eq!(json, "\"BACKEND::BAD_REQUEST\"");
        let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ErrorCode::BadRequest);
    }
}
