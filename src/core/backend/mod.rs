//! Record-oriented access to the hosted backend
//!
//! Everything above this layer asks for rows by table name and filter
//! predicates. `RestBackend` speaks the PostgREST dialect hosted backends
//! expose; `MemoryBackend` serves development mode and tests.

mod memory;
mod query;
mod rest;

pub use memory::MemoryBackend;
pub use query::{Filter, FilterOp, Order, Query};
pub use rest::RestBackend;

use crate::config::BackendConfig;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Backend query API
///
/// `select_one` returns `Ok(None)` when no row matches; that is distinct from
/// an `Err`, which always means the fetch itself failed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    /// Rows matching the query
    async fn select(&self, query: &Query) -> Result<Vec<Value>>;

    /// First row matching the query
    async fn select_one(&self, query: &Query) -> Result<Option<Value>> {
        let rows = self.select(&query.clone().limit(1)).await?;
        Ok(rows.into_iter().next())
    }
}

/// Build the backend described by the configuration
pub async fn from_config(config: &BackendConfig) -> Result<Arc<dyn Backend>> {
    if config.in_memory {
        let backend = match &config.seed_file {
            Some(path) => MemoryBackend::from_seed_file(path).await?,
            None => MemoryBackend::new(),
        };
        info!("Using in-memory backend with {} tables", backend.table_count());
        return Ok(Arc::new(backend));
    }

    info!("Using REST backend at {}", config.url);
    Ok(Arc::new(RestBackend::new(config)?))
}
