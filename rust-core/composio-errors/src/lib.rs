// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Composio SDK error taxonomy
//
// Every failure the SDK can surface is reduced to a single `ComposioError`
// whose code comes from a closed set and whose human-readable text comes
// from a static catalog. This crate has no networking of its own: callers
// describe what went wrong as a `Failure` and the normalizer does the rest.
//
// # Modules
//
// - [`code`] -- The `ErrorCode` enum and its `NAMESPACE::NAME` wire form.
// - [`catalog`] -- Static message/description/fix text for every code.
// - [`error`] -- The `ComposioError` value handed to SDK callers.
// - [`body`] -- Known shapes of backend error bodies.
// - [`normalize`] -- Status codes and transport failures to `ComposioError`.
//
// # Example
//
// ```rust
// use composio_errors::{normalize, ErrorBody, ErrorCode, Failure};
//
// let failure = Failure::Status {
//     status: 404,
//     url: "https://backend.composio.dev/api/v1/apps/nope".to_string(),
//     body: ErrorBody::parse(br#"{"detail":"Not found"}"#),
// };
// let err = normalize(failure);
// assert_eq!(err.code(), ErrorCode::NotFound);
// assert_eq!(err.name(), "ComposioError");
// ```

pub mod body;
pub mod catalog;
pub mod code;
pub mod error;
pub mod normalize;

pub use body::ErrorBody;
pub use catalog::CatalogEntry;
pub use code::{ErrorCode, Namespace};
pub use error::{ComposioError, Result, ERROR_NAME};
pub use normalize::{code_for_status, normalize, Failure};
