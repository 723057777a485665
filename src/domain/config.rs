//! # Configuration
//!
//! Manages the loading and parsing of the server's configuration file (`config.yaml`).
//! Defines the structs for server, database, LLM, Terraform and logging settings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const POSTGRES_USER_ENV: &str = "POSTGRES_USER";
pub const POSTGRES_PASSWORD_ENV: &str = "POSTGRES_PASSWORD";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`. Every section is optional.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub terraform: TerraformConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load the configuration from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply `POSTGRES_USER` / `POSTGRES_PASSWORD` from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    pub fn apply_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(user) = lookup(POSTGRES_USER_ENV) {
            self.database.user = user;
        }
        if let Some(password) = lookup(POSTGRES_PASSWORD_ENV) {
            self.database.maintenance_password = password.clone();
            self.database.password = password;
        }
        self
    }
}

/// Runtime bootstrap settings handed to the MCP server.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,
    /// Upper bound for a single tool call.
    #[serde(default = "default_tool_timeout")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            timeout_secs: default_tool_timeout(),
        }
    }
}

fn default_server_name() -> String {
    "tfdb-mcp".to_string()
}

fn default_tool_timeout() -> u64 {
    600
}

/// How the database tools turn caller input into SQL text.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatementMode {
    /// Raw interpolation. Caller text becomes part of the statement.
    #[default]
    Interpolated,
    /// Identifiers double-quoted, literals escaped.
    Quoted,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_host")]
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    #[serde(default = "default_db_credential")]
    pub user: String,
    #[serde(default = "default_db_password")]
    pub password: String,
    /// Database used when issuing `CREATE DATABASE`.
    #[serde(default = "default_maintenance_db")]
    pub maintenance_db: String,
    /// Password used only for `maintenance_db`.
    #[serde(default = "default_db_credential")]
    pub maintenance_password: String,
    #[serde(default)]
    pub statement_mode: StatementMode,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_credential(),
            password: default_db_password(),
            maintenance_db: default_maintenance_db(),
            maintenance_password: default_db_credential(),
            statement_mode: StatementMode::default(),
        }
    }
}

fn default_db_host() -> String {
    "localhost".to_string()
}
fn default_db_port() -> u16 {
    5432
}
fn default_db_credential() -> String {
    "postgres".to_string()
}
fn default_db_password() -> String {
    "password".to_string()
}
fn default_maintenance_db() -> String {
    "postgres".to_string()
}

/// Local Ollama endpoint used by the security review tool.
#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            model: default_llm_model(),
            timeout_secs: None,
        }
    }
}

fn default_llm_endpoint() -> String {
    "http://localhost:11434/api/generate".to_string()
}
fn default_llm_model() -> String {
    "llama3.2".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct TerraformConfig {
    /// File read by the `terraform://region` resource.
    #[serde(default = "default_region_file")]
    pub region_file: String,
}

impl Default for TerraformConfig {
    fn default() -> Self {
        Self {
            region_file: default_region_file(),
        }
    }
}

fn default_region_file() -> String {
    "main.tf".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default)]
    pub file: bool,
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: false,
            dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> String {
    "data".to_string()
}
