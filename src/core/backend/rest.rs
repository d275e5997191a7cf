//! PostgREST client

use super::{Backend, Query};
use crate::config::BackendConfig;
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Backend over the hosted REST endpoint
#[derive(Clone)]
pub struct RestBackend {
    client: Client,
    rest_url: String,
    api_key: String,
}

impl std::fmt::Debug for RestBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestBackend")
            .field("rest_url", &self.rest_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl RestBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| DashboardError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            rest_url: config.rest_url(),
            api_key: config.api_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }
}

#[async_trait]
impl Backend for RestBackend {
    async fn select(&self, query: &Query) -> Result<Vec<Value>> {
        debug!(table = %query.table, filters = query.filters.len(), "REST select");

        let response = self
            .client
            .get(self.table_url(&query.table))
            .query(&query.to_query_pairs())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(table = %query.table, error = %e, "Backend request failed");
                DashboardError::fetch_failure(format!("{}: backend unreachable", query.table))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                table = %query.table,
                status = status.as_u16(),
                body = %body,
                "Backend returned error"
            );
            return Err(DashboardError::fetch_failure(format!(
                "{} returned {}",
                query.table,
                status.as_u16()
            )));
        }

        let rows: Vec<Value> = response.json().await.map_err(|e| {
            warn!(table = %query.table, error = %e, "Backend response is not a row array");
            DashboardError::fetch_failure(format!("{}: invalid response body", query.table))
        })?;

        debug!(table = %query.table, rows = rows.len(), "REST select complete");
        Ok(rows)
    }
}
