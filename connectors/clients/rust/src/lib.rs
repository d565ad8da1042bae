// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! # Composio Client SDK
//!
//! A Rust client library for the Composio backend REST API: the app
//! catalogue, connected accounts, and per-entity connection lookups. Every
//! failure, whether an HTTP error status, a timeout, or a malformed payload,
//! is returned as a single [`ComposioError`] with a stable code, a catalog
//! message, a suggested fix, and a per-occurrence `error_id`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use composio_client::{ClientConfig, ComposioClient};
//!
//! #[tokio::main]
//! async fn main() -> composio_client::Result<()> {
//!     let client = ComposioClient::new(ClientConfig::new("sk-live-..."))?;
//!     match client.entity("default").get_connection("github").await? {
//!         Some(account) => println!("github connected: {}", account.id),
//!         None => println!("github not connected"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] — Client construction and the request/response funnel.
//! - [`config`] — API key, base URL, and timeout settings.
//! - [`transport`] — The [`Transport`] seam and its `reqwest` implementation.
//! - [`types`] — Wire types for apps and connected accounts.
//! - [`apps`] — App catalogue operations.
//! - [`connections`] — Connected account operations.
//! - [`entity`] — Entity-scoped connection helpers.
//! - [`error`] — Error types and the crate-level `Result` alias.

pub mod apps;
pub mod client;
pub mod config;
pub mod connections;
pub mod entity;
pub mod error;
pub mod transport;
pub mod types;

pub use client::ComposioClient;
pub use config::ClientConfig;
pub use entity::Entity;
pub use error::{ComposioError, ErrorCode, Result};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError};
pub use types::{
    App, ConnectedAccount, ConnectionPage, ConnectionStatus, ListAppsParams,
    ListConnectionsParams,
};
