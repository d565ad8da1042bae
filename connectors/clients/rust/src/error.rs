// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Error types for the Composio client SDK.
//!
//! All fallible operations in this crate return [`Result<T>`], an alias for
//! `std::result::Result<T, ComposioError>`. Transport failures, HTTP error
//! statuses, and undecodable payloads are normalized by `composio-errors`
//! before they reach the caller, so no `reqwest` or `serde_json` error ever
//! escapes the SDK.

pub use composio_errors::{catalog, CatalogEntry, ComposioError, ErrorCode, Namespace, Result};
