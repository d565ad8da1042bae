// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Client configuration.
//!
//! [`ClientConfig`] holds the API key, base URL, and per-request timeout. It
//! can be built in code or read from the environment with
//! [`ClientConfig::from_env`]; no configuration files are consulted.

use std::fmt;
use std::time::Duration;

use tracing::warn;

/// Default Composio backend.
pub const DEFAULT_BASE_URL: &str = "https://backend.composio.dev";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_KEY: &str = "COMPOSIO_API_KEY";
pub const ENV_BASE_URL: &str = "COMPOSIO_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "COMPOSIO_TIMEOUT_SECS";

/// Connection settings for [`crate::client::ComposioClient`].
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent as `X-API-Key`. Required by the client constructor.
    pub api_key: Option<String>,
    /// Base URL of the backend, e.g. `https://backend.composio.dev`.
    pub base_url: String,
    /// Per-request timeout enforced by the transport.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Default settings with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Read settings from `COMPOSIO_API_KEY`, `COMPOSIO_BASE_URL`, and
    /// `COMPOSIO_TIMEOUT_SECS`. Unset or empty variables keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            config.api_key = Some(key);
        }
        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    value = %raw,
                    "Invalid {ENV_TIMEOUT_SECS} (expected a positive number of seconds), using default"
                ),
            }
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
