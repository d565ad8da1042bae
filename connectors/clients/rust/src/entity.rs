// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Entity helpers.
//!
//! An entity is the caller's notion of an end user. The backend stores no
//! entity record of its own; an [`Entity`] is a client-side handle that
//! scopes connected-account queries to one `user_uuid`.

use composio_errors::ErrorCode;

use crate::client::{require_non_blank, ComposioClient};
use crate::error::{ComposioError, Result};
use crate::types::{ConnectedAccount, ListConnectionsParams};

/// Entity id used when none is given.
pub const DEFAULT_ENTITY_ID: &str = "default";

/// Handle scoping operations to one entity.
#[derive(Debug, Clone)]
pub struct Entity<'a> {
    client: &'a ComposioClient,
    id: String,
}

impl ComposioClient {
    /// Handle for entity `id`; a blank id means [`DEFAULT_ENTITY_ID`].
    pub fn entity(&self, id: &str) -> Entity<'_> {
        let id = match id.trim() {
            "" => DEFAULT_ENTITY_ID,
            id => id,
        };
        Entity {
            client: self,
            id: id.to_string(),
        }
    }
}

impl Entity<'_> {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Every connected account of this entity, optionally for one app.
    ///
    /// Reads all pages of `GET /api/v1/connectedAccounts`.
    pub async fn connections(&self, app: Option<&str>) -> Result<Vec<ConnectedAccount>> {
        let app_names = match app {
            Some(app) => vec![require_non_blank("app name", app)?.to_string()],
            None => Vec::new(),
        };
        let mut params = ListConnectionsParams {
            entity_id: Some(self.id.clone()),
            app_names,
            ..Default::default()
        };

        let mut accounts = Vec::new();
        let mut page_no = 1;
        loop {
            params.page = Some(page_no);
            let page = self.client.list_connections(&params).await?;
            let last = page.items.is_empty() || page_no >= page.total_pages;
            accounts.extend(page.items);
            if last {
                break;
            }
            page_no += 1;
        }
        Ok(accounts)
    }

    /// The most recently created active connection for `app`, if any.
    pub async fn get_connection(&self, app: &str) -> Result<Option<ConnectedAccount>> {
        let app = require_non_blank("app name", app)?;
        let latest = self
            .connections(Some(app))
            .await?
            .into_iter()
            .filter(|account| account.is_active() && account.app_name.eq_ignore_ascii_case(app))
            .max_by_key(|account| account.created_at);
        Ok(latest)
    }

    /// Like [`Entity::get_connection`], but a missing connection is an error.
    ///
    /// # Errors
    ///
    /// `SDK::NO_CONNECTED_ACCOUNT_FOUND` when the entity has no active
    /// connection for `app`.
    pub async fn require_connection(&self, app: &str) -> Result<ConnectedAccount> {
        self.get_connection(app).await?.ok_or_else(|| {
            ComposioError::new(ErrorCode::NoConnectedAccountFound)
                .with_message_detail(format!("entity {:?}, app {:?}", self.id, app.trim()))
        })
    }
}
