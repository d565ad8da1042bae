// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! App catalogue operations.

use crate::client::{require_non_blank, ComposioClient};
use crate::error::Result;
use crate::types::{App, AppList, ListAppsParams};

impl ComposioClient {
    /// List the apps available to this API key.
    ///
    /// Sends `GET /api/v1/apps`, optionally filtered by category.
    pub async fn list_apps(&self, params: &ListAppsParams) -> Result<Vec<App>> {
        let list: AppList = self.get(&["api", "v1", "apps"], &params.to_query()).await?;
        Ok(list.items)
    }

    /// Retrieve a single app by its key (e.g. `github`).
    ///
    /// # Errors
    ///
    /// `COMMON::INVALID_PARAMS` for a blank key (no request is sent),
    /// `BACKEND::NOT_FOUND` if the backend has no such app.
    pub async fn get_app(&self, key: &str) -> Result<App> {
        let key = require_non_blank("app key", key)?;
        self.get(&["api", "v1", "apps", key], &[]).await
    }
}
