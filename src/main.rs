//! # Main Entry Point
//!
//! Boots the MCP server on stdio:
//! - Domain: Configuration, Statement Builders, Types
//! - Infrastructure: PostgreSQL, Ollama, MCP
//! - Application: Tool bodies, Terraform helpers, Logging
//!

mod application;
mod domain;
mod infrastructure;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::tools::Toolbox;
use crate::domain::config::AppConfig;
use crate::domain::statements::builder_for;
use crate::infrastructure::llm::OllamaClient;
use crate::infrastructure::mcp::McpServer;
use crate::infrastructure::postgres::PostgresExecutor;
use crate::strings::logs;

#[derive(Debug, Parser)]
#[command(version, about = "MCP server with Terraform and PostgreSQL tools")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: PathBuf,

    /// Log level when RUST_LOG is unset (e.g. debug, info, warn)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?.apply_env();

    // 2. Logging Setup
    let _guard = application::logging::init(&config.logging, cli.log_level.as_deref())?;
    tracing::info!("{}", logs::config_loaded(&cli.config.display().to_string()));

    // 3. Initialize Infrastructure
    let llm = Arc::new(OllamaClient::new(&config.llm)?);
    let sql = Arc::new(PostgresExecutor::new(config.database.clone()));
    let toolbox = Toolbox::new(
        builder_for(config.database.statement_mode),
        sql,
        llm,
        config.database.maintenance_db.clone(),
    );

    // 4. Serve
    tracing::info!(
        "{}",
        logs::server_starting(&config.server.name, config.server.timeout_secs)
    );
    let server = McpServer::new(
        config.server.clone(),
        Arc::new(toolbox),
        config.terraform.region_file.clone(),
    );
    let service = server
        .serve(stdio())
        .await
        .context("Failed to start MCP session")?;
    service.waiting().await?;
    tracing::info!("{}", logs::SERVER_STOPPED);

    Ok(())
}
