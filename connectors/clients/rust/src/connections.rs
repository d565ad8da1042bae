// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Connected account operations.
//!
//! A connected account links an entity to an app after the app's auth flow
//! has completed. Listing is paginated by the backend; see
//! [`crate::entity::Entity::connections`] for a helper that reads every page.

use crate::client::{require_non_blank, ComposioClient};
use crate::error::Result;
use crate::types::{ConnectedAccount, ConnectionPage, ListConnectionsParams};

impl ComposioClient {
    /// List one page of connected accounts.
    ///
    /// Sends `GET /api/v1/connectedAccounts` with the filters in `params`.
    pub async fn list_connections(
        &self,
        params: &ListConnectionsParams,
    ) -> Result<ConnectionPage> {
        self.get(&["api", "v1", "connectedAccounts"], &params.to_query())
            .await
    }

    /// Retrieve a connected account by id.
    ///
    /// # Errors
    ///
    /// `COMMON::INVALID_PARAMS` for a blank id, `BACKEND::NOT_FOUND` if the
    /// account does not exist.
    pub async fn get_connection(&self, id: &str) -> Result<ConnectedAccount> {
        let id = require_non_blank("connection id", id)?;
        self.get(&["api", "v1", "connectedAccounts", id], &[]).await
    }

    /// Delete a connected account, revoking the entity's access to the app.
    pub async fn delete_connection(&self, id: &str) -> Result<()> {
        let id = require_non_blank("connection id", id)?;
        self.delete(&["api", "v1", "connectedAccounts", id]).await
    }
}
