//! REST-backed user directory.
//!
//! Expected endpoints:
//! - `GET {api_base}/api/users`  -- JSON array of user records
//! - `GET {api_base}/api/health` -- `{"ok": true, "mongoState": 1}`; a
//!   `mongoState` other than 1 means the database is not connected

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::traits::UserDirectory;
use crate::config::DirectoryConfig;
use crate::user::User;

/// Database connection state reported when connected.
const MONGO_CONNECTED: i64 = 1;

/// Body of the backend's health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    #[serde(default)]
    pub ok: bool,
    /// Database connection state: 0 disconnected, 1 connected, 2 connecting,
    /// 3 disconnecting.
    #[serde(default)]
    pub mongo_state: Option<i64>,
}

impl HealthStatus {
    /// The backend is up and its database is connected.
    pub fn is_healthy(&self) -> bool {
        self.ok && self.mongo_state == Some(MONGO_CONNECTED)
    }
}

/// A user directory that talks to the REST backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    http: reqwest::Client,
    api_base: String,
}

impl HttpUserDirectory {
    /// Create a client for the backend described by `config`.
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client for user directory")?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// The normalised base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Query the backend's health endpoint.
    ///
    /// Connection failures, non-success statuses and unparseable bodies are
    /// errors. A reachable backend with a disconnected database is reported
    /// through [`HealthStatus::is_healthy`].
    pub async fn health(&self) -> Result<HealthStatus> {
        let resp = self
            .http
            .get(format!("{}/api/health", self.api_base))
            .send()
            .await
            .context("failed to reach user directory for health check")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("health check returned {status}: {text}");
        }

        let health: HealthStatus = resp
            .json()
            .await
            .context("failed to parse health check response")?;
        debug!(ok = health.ok, mongo_state = ?health.mongo_state, "health check");
        Ok(health)
    }
}

impl UserDirectory for HttpUserDirectory {
    async fn fetch_roster(&self) -> Result<Vec<User>> {
        let url = format!("{}/api/users", self.api_base);
        debug!(%url, "fetching roster");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .context("failed to reach user directory")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("user directory returned {status}: {text}");
        }

        let roster: Vec<User> = resp
            .json()
            .await
            .context("failed to parse user directory response")?;

        info!(users = roster.len(), "fetched roster");
        Ok(roster)
    }
}
