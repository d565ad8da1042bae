// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Composio client construction and the request/response funnel.
//!
//! [`ComposioClient`] is the primary entry point for all SDK operations. It
//! owns the base URL, API key, and an injected [`Transport`]. Domain methods
//! (apps, connections, entities) are defined as `impl ComposioClient` blocks
//! in their respective modules and all go through [`ComposioClient::get`] or
//! [`ComposioClient::delete`], so every failure is normalized in one place.

use std::fmt;
use std::sync::Arc;

use composio_errors::{normalize, ErrorBody, ErrorCode, Failure};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ComposioError, Result};
use crate::transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

// ---------------------------------------------------------------------------
// ComposioClient
// ---------------------------------------------------------------------------

/// The main Composio client.
///
/// Cheap to clone; clones share the transport.
///
/// # Examples
///
/// ```rust,no_run
/// use composio_client::{ClientConfig, ComposioClient, ListAppsParams};
///
/// # #[tokio::main]
/// # async fn main() -> composio_client::Result<()> {
/// let client = ComposioClient::new(ClientConfig::new("sk-live-..."))?;
/// let apps = client.list_apps(&ListAppsParams::default()).await?;
/// println!("{} apps available", apps.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ComposioClient {
    base_url: Url,
    api_key: String,
    transport: Arc<dyn Transport>,
}

impl ComposioClient {
    // -- Constructors -------------------------------------------------------

    /// Create a client that talks HTTP through `reqwest`.
    ///
    /// # Errors
    ///
    /// `COMMON::API_KEY_UNAVAILABLE` ("API Key is not provided") when the
    /// config has no API key, `COMMON::INVALID_PARAMS` when the base URL is
    /// not an absolute http(s) URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let (base_url, api_key) = validate(&config)?;
        let transport = ReqwestTransport::new(config.timeout).map_err(|e| {
            ComposioError::new(ErrorCode::Unknown).with_description_detail(e)
        })?;
        Ok(Self {
            base_url,
            api_key,
            transport: Arc::new(transport),
        })
    }

    /// Create a client from `COMPOSIO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Create a client that sends requests through `transport`.
    ///
    /// The config timeout is not applied here; it is the transport's job.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let (base_url, api_key) = validate(&config)?;
        Ok(Self {
            base_url,
            api_key,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check the backend is reachable by listing apps.
    ///
    /// Returns `false` for any failure instead of an error.
    pub async fn health(&self) -> bool {
        self.get::<serde_json::Value>(&["api", "v1", "apps"], &[])
            .await
            .is_ok()
    }

    // -- Internal HTTP helpers ----------------------------------------------

    /// Build an endpoint URL from path segments (percent-encoded) and query
    /// pairs, keeping any path prefix of the base URL.
    pub(crate) fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| invalid_params(format!("base URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Perform a GET request and deserialize the JSON response body.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(segments, query)?;
        let response = self.execute(Method::Get, url.clone()).await?;
        serde_json::from_slice(&response.body).map_err(|e| {
            normalize(Failure::Decode {
                url: url.to_string(),
                detail: e.to_string(),
            })
        })
    }

    /// Perform a DELETE request. The response body is ignored.
    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<()> {
        let url = self.endpoint(segments, &[])?;
        self.execute(Method::Delete, url).await?;
        Ok(())
    }

    /// Send one request; turn every non-success outcome into a
    /// [`ComposioError`].
    async fn execute(&self, method: Method, url: Url) -> Result<HttpResponse> {
        debug!(method = method.as_str(), url = %url, "sending request");

        let request = HttpRequest {
            method,
            url: url.clone(),
            headers: vec![
                (API_KEY_HEADER.to_string(), self.api_key.clone()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
        };

        let url = url.to_string();
        let failure = match self.transport.send(request).await {
            Ok(response) if response.is_success() => return Ok(response),
            Ok(response) => Failure::Status {
                status: response.status,
                url,
                body: ErrorBody::parse(&response.body),
            },
            Err(TransportError::Timeout) => Failure::Timeout { url },
            Err(TransportError::Connect(detail)) => Failure::Unreachable { url, detail },
            Err(TransportError::Other(detail)) => Failure::Transport { url, detail },
        };
        Err(normalize(failure))
    }
}

impl fmt::Debug for ComposioClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposioClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Check the config and extract the parsed base URL and API key.
fn validate(config: &ClientConfig) -> Result<(Url, String)> {
    let api_key = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ComposioError::new(ErrorCode::ApiKeyUnavailable))?;

    let base_url = Url::parse(config.base_url.trim())
        .map_err(|e| invalid_params(format!("invalid base URL {:?}: {e}", config.base_url)))?;
    if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
        return Err(invalid_params(format!(
            "base URL must be an absolute http(s) URL, got {:?}",
            config.base_url
        )));
    }

    Ok((base_url, api_key.to_string()))
}

/// `COMMON::INVALID_PARAMS` with `detail` appended to the message.
pub(crate) fn invalid_params(detail: impl fmt::Display) -> ComposioError {
    ComposioError::new(ErrorCode::InvalidParams).with_message_detail(detail)
}

/// Reject blank identifiers before they reach the network.
pub(crate) fn require_non_blank<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(invalid_params(format!("{what} must not be empty")))
    } else {
        Ok(trimmed)
    }
}
