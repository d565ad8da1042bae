// SPDX-License-Identifier: PMPL-1.0-or-later
//! Static error catalog.
//!
//! One [`CatalogEntry`] per [`ErrorCode`]. The table is `'static` and has no
//! mutation API; [`lookup`] is an exhaustive match, so every code resolves.

use crate::code::ErrorCode;

/// Human-readable text attached to an error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: ErrorCode,
    /// Short base message. Normalized errors always contain this text.
    pub message: &'static str,
    pub description: &'static str,
    pub possible_fix: &'static str,
}

static BAD_REQUEST: CatalogEntry = CatalogEntry {
    code: ErrorCode::BadRequest,
    message: "Validation errors while making the request",
    description: "The request was rejected by the backend because it failed validation.",
    possible_fix: "Check the request parameters against the API reference and try again.",
};

static UNAUTHORIZED: CatalogEntry = CatalogEntry {
    code: ErrorCode::Unauthorized,
    message: "Access denied",
    description: "The API key is invalid, expired, or lacks permission for this resource.",
    possible_fix: "Verify the API key, or generate a new one from the Composio dashboard.",
};

static NOT_FOUND: CatalogEntry = CatalogEntry {
    code: ErrorCode::NotFound,
    message: "Resource not found",
    description: "The requested resource does not exist on the backend.",
    possible_fix: "Verify the URL and the resource identifier.",
};

static RATE_LIMIT: CatalogEntry = CatalogEntry {
    code: ErrorCode::RateLimit,
    message: "Rate limit exceeded",
    description: "Too many requests were sent in a short period of time.",
    possible_fix: "Wait before sending more requests, or contact support to raise the limit.",
};

static SERVER_ERROR: CatalogEntry = CatalogEntry {
    code: ErrorCode::ServerError,
    message: "Internal server error",
    description: "The backend failed while processing the request.",
    possible_fix: "Try again later. Contact support with the error id if it keeps happening.",
};

static SERVER_UNAVAILABLE: CatalogEntry = CatalogEntry {
    code: ErrorCode::ServerUnavailable,
    message: "Server unavailable",
    description: "The backend is temporarily unable to handle the request.",
    possible_fix: "Try again later. Check the Composio status page for ongoing incidents.",
};

static REQUEST_TIMEOUT: CatalogEntry = CatalogEntry {
    code: ErrorCode::RequestTimeout,
    message: "Request timed out",
    description: "The request did not complete within the configured timeout.",
    possible_fix: "Check your network connection, or raise the client timeout.",
};

static BASE_URL_NOT_REACHABLE: CatalogEntry = CatalogEntry {
    code: ErrorCode::BaseUrlNotReachable,
    message: "Base URL is not reachable",
    description: "A connection to the configured base URL could not be established.",
    possible_fix: "Check the base URL and your network connection.",
};

static API_KEY_UNAVAILABLE: CatalogEntry = CatalogEntry {
    code: ErrorCode::ApiKeyUnavailable,
    message: "API Key is not provided",
    description: "The client was constructed without an API key.",
    possible_fix: "Pass an API key in the client config or set COMPOSIO_API_KEY.",
};

static INVALID_PARAMS: CatalogEntry = CatalogEntry {
    code: ErrorCode::InvalidParams,
    message: "Invalid parameters",
    description: "One or more arguments were rejected before the request was sent.",
    possible_fix: "Check the arguments passed to the SDK method.",
};

static UNKNOWN: CatalogEntry = CatalogEntry {
    code: ErrorCode::Unknown,
    message: "Unknown error",
    description: "The request failed for a reason the SDK does not recognise.",
    possible_fix: "Try again. Contact support with the error id if it keeps happening.",
};

static NO_CONNECTED_ACCOUNT_FOUND: CatalogEntry = CatalogEntry {
    code: ErrorCode::NoConnectedAccountFound,
    message: "No connected account found",
    description: "The entity has no active connection for the requested app.",
    possible_fix: "Connect the app for this entity before calling it.",
};

/// Return the catalog entry for `code`.
pub fn lookup(code: ErrorCode) -> &'static CatalogEntry {
    match code {
        ErrorCode::BadRequest => &BAD_REQUEST,
        ErrorCode::Unauthorized => &UNAUTHORIZED,
        ErrorCode::NotFound => &NOT_FOUND,
        ErrorCode::RateLimit => &RATE_LIMIT,
        ErrorCode::ServerError => &SERVER_ERROR,
        ErrorCode::ServerUnavailable => &SERVER_UNAVAILABLE,
        ErrorCode::RequestTimeout => &REQUEST_TIMEOUT,
        ErrorCode::BaseUrlNotReachable => &BASE_URL_NOT_REACHABLE,
        ErrorCode::ApiKeyUnavailable => &API_KEY_UNAVAILABLE,
        ErrorCode::InvalidParams => &INVALID_PARAMS,
        ErrorCode::Unknown => &UNKNOWN,
        ErrorCode::NoConnectedAccountFound => &NO_CONNECTED_ACCOUNT_FOUND,
    }
}

/// Iterate over every catalog entry.
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    ErrorCode::ALL.into_iter().map(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_entry_is_keyed_by_its_code() {
        for code in ErrorCode::ALL {
            assert_eq!(lookup(code).code, code);
        }
    }

    #[test]
    fn test_entries_are_unique_and_complete() {
        let codes: HashSet<_> = entries().map(|e| e.code).collect();
        assert_eq!(codes.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn test_no_entry_has_blank_text() {
        for entry in entries() {
            assert!(!entry.message.trim().is_empty(), "{}", entry.code);
            assert!(!entry.description.trim().is_empty(), "{}", entry.code);
            assert!(!entry.possible_fix.trim().is_empty(), "{}", entry.code);
        }
    }

    #[test]
    fn test_api_key_message() {
        assert_eq!(
            lookup(ErrorCode::ApiKeyUnavailable).message,
            "API Key is not provided"
        );
    }
}
