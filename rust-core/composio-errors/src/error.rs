// SPDX-License-Identifier: PMPL-1.0-or-later
//! The structured error handed to SDK callers.
//!
//! A [`ComposioError`] is built from a catalog entry, optionally augmented
//! with contextual detail, and never changes after it leaves the SDK. Each
//! occurrence gets its own `error_id` so it can be correlated in support
//! requests and logs.

use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{self, CatalogEntry};
use crate::code::ErrorCode;

/// Value of [`ComposioError::name`] for every error.
pub const ERROR_NAME: &str = "ComposioError";

/// Normalized SDK error.
///
/// Serializes with the field names the SDK exposes on the wire:
/// `errCode`, `message`, `description`, `possibleFix`, `errorId`, `name`
/// and, when the error came from an HTTP response, `status`.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("[{err_code}] {message}")]
pub struct ComposioError {
    err_code: ErrorCode,
    message: String,
    description: String,
    possible_fix: String,
    error_id: Uuid,
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl ComposioError {
    /// Create an error carrying the catalog text for `code` verbatim.
    pub fn new(code: ErrorCode) -> Self {
        let entry = catalog::lookup(code);
        Self {
            err_code: code,
            message: entry.message.to_string(),
            description: entry.description.to_string(),
            possible_fix: entry.possible_fix.to_string(),
            error_id: Uuid::new_v4(),
            name: ERROR_NAME,
            status: None,
        }
    }

    /// Append contextual detail to the message, keeping the base text.
    pub fn with_message_detail(mut self, detail: impl Display) -> Self {
        self.message = format!("{}: {detail}", self.message);
        self
    }

    /// Append contextual detail to the description, keeping the base text.
    pub fn with_description_detail(mut self, detail: impl Display) -> Self {
        self.description = format!("{} Details: {detail}", self.description);
        self
    }

    /// Record the HTTP status the error was derived from.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.err_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn possible_fix(&self) -> &str {
        &self.possible_fix
    }

    pub fn error_id(&self) -> Uuid {
        self.error_id
    }

    /// Always [`ERROR_NAME`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// The catalog entry this error was built from.
    pub fn catalog_entry(&self) -> &'static CatalogEntry {
        catalog::lookup(self.err_code)
    }
}

/// Crate-level result alias using [`ComposioError`].
pub type Result<T> = std::result::Result<T, ComposioError>;
