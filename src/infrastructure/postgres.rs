//! # PostgreSQL Executor
//!
//! Opens a fresh connection per call, runs the statement text through the
//! simple-query protocol and closes the connection before returning.
//! Multi-statement text runs as a whole, exactly as written.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgRow};
use sqlx::{Column, Connection, Executor, Row};

use crate::domain::config::DatabaseConfig;
use crate::domain::traits::SqlExecutor;
use crate::domain::types::QueryRows;
use crate::strings::logs;

pub struct PostgresExecutor {
    config: DatabaseConfig,
}

impl PostgresExecutor {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    fn connect_options(&self, database: &str) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .password(self.password_for(database))
            .database(database)
    }

    /// The maintenance database has its own password default.
    fn password_for(&self, database: &str) -> &str {
        if database == self.config.maintenance_db {
            &self.config.maintenance_password
        } else {
            &self.config.password
        }
    }

    async fn connect(&self, database: &str) -> Result<PgConnection> {
        PgConnection::connect_with(&self.connect_options(database))
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to {}:{}/{}",
                    self.config.host, self.config.port, database
                )
            })
    }
}

async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::debug!("{}", logs::connection_close_failed(&e.to_string()));
    }
}

fn rows_to_text(rows: &[PgRow]) -> Result<QueryRows> {
    let columns = rows
        .first()
        .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        // Simple-query results are text-encoded, so every column decodes as a string.
        let cells = (0..row.len())
            .map(|i| row.try_get_unchecked::<Option<String>, _>(i))
            .collect::<Result<Vec<_>, _>>()?;
        out.push(cells);
    }

    Ok(QueryRows { columns, rows: out })
}

#[async_trait]
impl SqlExecutor for PostgresExecutor {
    async fn execute(&self, database: &str, sql: &str) -> Result<u64> {
        tracing::info!("{}", logs::executing_sql(database, sql));
        let mut conn = self.connect(database).await?;
        let outcome = conn.execute(sqlx::raw_sql(sql)).await;
        close(conn).await;
        Ok(outcome?.rows_affected())
    }

    async fn fetch(&self, database: &str, sql: &str) -> Result<QueryRows> {
        tracing::info!("{}", logs::executing_sql(database, sql));
        let mut conn = self.connect(database).await?;
        let outcome = conn.fetch_all(sqlx::raw_sql(sql)).await;
        close(conn).await;
        rows_to_text(&outcome?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_to_text_empty() {
        let rows = rows_to_text(&[]).unwrap();
        assert!(rows.columns.is_empty());
        assert!(rows.rows.is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires a local PostgreSQL server
    async fn test_roundtrip_against_live_server() {
        let executor = PostgresExecutor::new(DatabaseConfig::default());
        executor
            .execute("postgres", "CREATE TEMP TABLE scratch (id SERIAL PRIMARY KEY, data TEXT);")
            .await
            .unwrap();
        let rows = executor.fetch("postgres", "SELECT 1 AS one, NULL AS nothing;").await.unwrap();
        assert_eq!(rows.columns, vec!["one", "nothing"]);
        assert_eq!(rows.rows, vec![vec![Some("1".to_string()), None]]);
    }

    #[test]
    fn test_password_for_maintenance_db() {
        let executor = PostgresExecutor::new(DatabaseConfig::default());
        assert_eq!(executor.password_for("postgres"), "postgres");
        assert_eq!(executor.password_for("my_database"), "password");
    }

    #[test]
    fn test_password_env_override_applies_everywhere() {
        let config = crate::domain::config::AppConfig::default()
            .apply_env_with(|key| (key == "POSTGRES_PASSWORD").then(|| "s3cret".to_string()));
        let executor = PostgresExecutor::new(config.database);
        assert_eq!(executor.password_for("postgres"), "s3cret");
        assert_eq!(executor.password_for("my_database"), "s3cret");
    }

    #[tokio::test]
    async fn test_unreachable_server_fetch_errors() {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..DatabaseConfig::default()
        };
        let executor = PostgresExecutor::new(config);
        let err = executor.fetch("demo", "SELECT * FROM t;").await.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to connect to 127.0.0.1:1/demo"));
    }

    #[tokio::test]
    async fn test_unreachable_server_errors() {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..DatabaseConfig::default()
        };
        let executor = PostgresExecutor::new(config);
        let err = executor.execute("postgres", "SELECT 1;").await.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to connect to 127.0.0.1:1/postgres"));
    }
}
