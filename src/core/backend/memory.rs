//! In-memory backend

use super::{Backend, FilterOp, Query};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Tables held in memory, filtered with the same semantics as the REST backend
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tables: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_table(self, table: &str, rows: Vec<Value>) -> Self {
        self.insert(table, rows);
        self
    }

    /// Append rows to `table`
    pub fn insert(&self, table: &str, rows: Vec<Value>) {
        self.tables
            .write()
            .entry(table.to_string())
            .or_default()
            .extend(rows);
    }

    pub fn table_count(&self) -> usize {
        self.tables.read().len()
    }

    /// Load `table -> [rows]` from a JSON or YAML file
    pub async fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DashboardError::config(format!("Failed to read seed file {:?}: {}", path, e)))?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let tables: HashMap<String, Vec<Value>> = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn select(&self, query: &Query) -> Result<Vec<Value>> {
        let mut rows: Vec<Value> = {
            let tables = self.tables.read();
            tables
                .get(&query.table)
                .map(|rows| rows.iter().filter(|row| matches(row, query)).cloned().collect())
                .unwrap_or_default()
        };

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ord = compare_values(a.get(&order.column), b.get(&order.column));
                if order.ascending { ord } else { ord.reverse() }
            });
        }

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        debug!(table = %query.table, rows = rows.len(), "memory select");
        Ok(rows)
    }
}

fn matches(row: &Value, query: &Query) -> bool {
    query.filters.iter().all(|filter| {
        let Some(cell) = row.get(&filter.column).and_then(scalar_text) else {
            return false;
        };
        match &filter.op {
            FilterOp::Eq(v) => cell == *v,
            FilterOp::In(values) => values.contains(&cell),
            FilterOp::Gte(v) => compare_text(&cell, v) != Ordering::Less,
            FilterOp::Lte(v) => compare_text(&cell, v) != Ordering::Greater,
        }
    })
}

/// Scalars as PostgREST would print them in a filter
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Numeric when both sides parse, otherwise lexical (ISO dates sort lexically)
fn compare_text(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// Missing values sort last
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a.and_then(scalar_text), b.and_then(scalar_text)) {
        (Some(x), Some(y)) => compare_text(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
