// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Wire types for the Composio REST API.
//!
//! Response structs are lenient: optional fields default when the backend
//! omits them, and unknown connection statuses decode to
//! [`ConnectionStatus::Unknown`] rather than failing the whole call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Apps
// ---------------------------------------------------------------------------

/// An app (tool provider) available on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    /// Stable identifier used in URLs, e.g. `github`.
    pub key: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub app_id: Option<String>,
    /// Whether the app can be used without an auth flow.
    #[serde(default, rename = "no_auth")]
    pub no_auth: bool,
}

/// Body of `GET /api/v1/apps`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppList {
    pub items: Vec<App>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Filters for listing apps.
#[derive(Debug, Clone, Default)]
pub struct ListAppsParams {
    /// Only return apps in this category.
    pub category: Option<String>,
}

impl ListAppsParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        self.category
            .iter()
            .map(|c| ("category", c.clone()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Connected accounts
// ---------------------------------------------------------------------------

/// Lifecycle state of a connected account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    Active,
    Initiated,
    Failed,
    Expired,
    /// Any status this SDK version does not know about.
    #[serde(other)]
    Unknown,
}

/// An authorised link between an entity and an app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedAccount {
    pub id: String,
    pub status: ConnectionStatus,
    pub app_name: String,
    #[serde(default)]
    pub app_unique_id: Option<String>,
    #[serde(default)]
    pub integration_id: Option<String>,
    /// Entity id the connection belongs to.
    #[serde(default)]
    pub client_unique_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// App-specific connection parameters (tokens are redacted server-side).
    #[serde(default)]
    pub connection_params: Option<serde_json::Value>,
}

impl ConnectedAccount {
    pub fn is_active(&self) -> bool {
        self.status == ConnectionStatus::Active
    }
}

/// One page of `GET /api/v1/connectedAccounts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPage {
    pub items: Vec<ConnectedAccount>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "first_page")]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

/// Filters for listing connected accounts.
#[derive(Debug, Clone, Default)]
pub struct ListConnectionsParams {
    /// Restrict to one entity (`user_uuid` on the wire).
    pub entity_id: Option<String>,
    /// Restrict to these app keys.
    pub app_names: Vec<String>,
    pub show_active_only: bool,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListConnectionsParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(entity_id) = &self.entity_id {
            query.push(("user_uuid", entity_id.clone()));
        }
        if !self.app_names.is_empty() {
            query.push(("appNames", self.app_names.join(",")));
        }
        if self.show_active_only {
            query.push(("showActiveOnly", "true".to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("pageSize", page_size.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_app_defaults_missing_fields() {
        let app: App = serde_json::from_value(json!({"key": "github", "name": "GitHub"})).unwrap();
        assert_eq!(app.key, "github");
        assert!(app.categories.is_empty());
        assert!(!app.no_auth);
        assert_eq!(app.app_id, None);
    }

    #[test]
    fn test_app_wire_names() {
        let app: App = serde_json::from_value(json!({
            "key": "slack",
            "name": "Slack",
            "appId": "a-1",
            "no_auth": true,
            "categories": ["chat"]
        }))
        .unwrap();
        assert_eq!(app.app_id.as_deref(), Some("a-1"));
        assert!(app.no_auth);
        assert_eq!(app.categories, vec!["chat".to_string()]);
    }

    #[test]
    fn test_connection_status_unknown_fallback() {
        let status: ConnectionStatus = serde_json::from_value(json!("PAUSED")).unwrap();
        assert_eq!(status, ConnectionStatus::Unknown);
        let status: ConnectionStatus = serde_json::from_value(json!("ACTIVE")).unwrap();
        assert_eq!(status, ConnectionStatus::Active);
    }

    #[test]
    fn test_connected_account_decodes() {
        let account: ConnectedAccount = serde_json::from_value(json!({
            "id": "ca_1",
            "status": "ACTIVE",
            "appName": "github",
            "clientUniqueUserId": "default",
            "createdAt": "2026-01-02T03:04:05Z"
        }))
        .unwrap();
        assert!(account.is_active());
        assert_eq!(account.client_unique_user_id.as_deref(), Some("default"));
        assert_eq!(account.updated_at, None);
    }

    #[test]
    fn test_connection_page_defaults() {
        let page: ConnectionPage = serde_json::from_value(json!({"items": []})).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_list_connections_query() {
        let params = ListConnectionsParams {
            entity_id: Some("user-7".to_string()),
            app_names: vec!["github".to_string(), "slack".to_string()],
            show_active_only: true,
            page: Some(2),
            page_size: None,
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("user_uuid", "user-7".to_string()),
                ("appNames", "github,slack".to_string()),
                ("showActiveOnly", "true".to_string()),
                ("page", "2".to_string()),
            ]
        );
        assert!(ListConnectionsParams::default().to_query().is_empty());
    }
}
