//! # Domain Traits
//!
//! Abstract interfaces for the pluggable pieces (SQL construction, LLM).

use crate::domain::types::{QueryRows, RowPayload};
use async_trait::async_trait;

/// Turns caller-supplied names and values into literal SQL text.
pub trait StatementBuilder: Send + Sync {
    fn build_create_database(&self, name: &str) -> String;

    /// Always the fixed `(id SERIAL PRIMARY KEY, data TEXT)` layout.
    fn build_create_table(&self, name: &str) -> String;

    /// Columns and values follow the payload's iteration order.
    fn build_insert(&self, table: &str, payload: &RowPayload) -> String;

    fn build_select_all(&self, table: &str) -> String;
}

/// Runs SQL text against a named database. One connection per call.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Returns the number of affected rows.
    async fn execute(&self, database: &str, sql: &str) -> anyhow::Result<u64>;

    async fn fetch(&self, database: &str, sql: &str) -> anyhow::Result<QueryRows>;
}

/// Abstract interface for an LLM Provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion
    async fn completion(&self, prompt: &str) -> anyhow::Result<String>;
}
