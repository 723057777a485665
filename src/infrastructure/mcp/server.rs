//! # MCP Server
//!
//! Exposes the tool bodies, the `terraform://region` resource and the
//! `terraform_summary` prompt over rmcp. Every tool call is bounded by the
//! configured timeout and always answers with text.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::application::terraform;
use crate::application::tools::{self, DirectoryListing, Toolbox};
use crate::domain::config::ServerConfig;
use crate::infrastructure::mcp::tools::{
    CreateFileParams, DatabaseParams, FileParams, GreetParams, InsertParams, ListFilesParams,
    TableParams,
};
use crate::strings::{logs, messages, prompts};

pub const REGION_URI: &str = "terraform://region";

#[derive(Clone)]
pub struct McpServer {
    config: ServerConfig,
    toolbox: Arc<Toolbox>,
    region_file: String,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

impl McpServer {
    /// Runs `work` under the tool timeout and wraps its text as a tool result.
    async fn bounded<F>(&self, tool: &str, work: F) -> Result<CallToolResult, McpError>
    where
        F: Future<Output = String>,
    {
        tracing::info!("{}", logs::tool_called(tool));
        let secs = self.config.timeout_secs;
        let text = match tokio::time::timeout(Duration::from_secs(secs), work).await {
            Ok(text) => text,
            Err(_) => {
                tracing::warn!("{}", logs::tool_timeout(tool, secs));
                messages::tool_timed_out(tool, secs)
            }
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    fn resources(&self) -> Vec<Resource> {
        vec![RawResource::new(REGION_URI, "terraform_region").no_annotation()]
    }

    async fn resource(&self, uri: String) -> Result<ReadResourceResult, McpError> {
        if uri != REGION_URI {
            return Err(McpError::resource_not_found(
                "resource_not_found",
                Some(serde_json::json!({ "uri": uri })),
            ));
        }
        let region = terraform::region_from_file(&self.region_file).await;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(region, uri)],
        })
    }
}

#[tool_router]
impl McpServer {
    pub fn new(config: ServerConfig, toolbox: Arc<Toolbox>, region_file: String) -> Self {
        Self {
            config,
            toolbox,
            region_file,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    #[tool(description = "Say hello to someone by name.")]
    async fn hello_world(
        &self,
        Parameters(GreetParams { name }): Parameters<GreetParams>,
    ) -> Result<CallToolResult, McpError> {
        self.bounded("hello_world", async { tools::hello_world(&name) })
            .await
    }

    #[tool(description = "Get the current local time in YYYY-MM-DD HH:MM:SS format.")]
    async fn get_current_time(&self) -> Result<CallToolResult, McpError> {
        self.bounded("get_current_time", async { tools::get_current_time() })
            .await
    }

    #[tool(description = "List the entries of a directory. Returns a JSON array of names.")]
    async fn list_files(
        &self,
        Parameters(ListFilesParams { directory }): Parameters<ListFilesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.bounded("list_files", async {
            match tools::list_files(&directory).await {
                DirectoryListing::Entries(names) => {
                    serde_json::to_string(&names).unwrap_or_else(|e| {
                        messages::directory_list_failed(&directory, &e.to_string())
                    })
                }
                DirectoryListing::Message(msg) => msg,
            }
        })
        .await
    }

    #[tool(description = "Create a Terraform file with the given content.")]
    async fn create_terraform_file(
        &self,
        Parameters(CreateFileParams { file_name, content }): Parameters<CreateFileParams>,
    ) -> Result<CallToolResult, McpError> {
        self.bounded(
            "create_terraform_file",
            tools::create_terraform_file(&file_name, &content),
        )
        .await
    }

    #[tool(description = "Ask the local LLM for a security review of a Terraform file.")]
    async fn security_review_terraform_file(
        &self,
        Parameters(FileParams { file_name }): Parameters<FileParams>,
    ) -> Result<CallToolResult, McpError> {
        self.bounded(
            "security_review_terraform_file",
            self.toolbox.security_review_terraform_file(&file_name),
        )
        .await
    }

    #[tool(description = "Create a PostgreSQL database.")]
    async fn create_postgresql_database(
        &self,
        Parameters(DatabaseParams { db_name }): Parameters<DatabaseParams>,
    ) -> Result<CallToolResult, McpError> {
        self.bounded(
            "create_postgresql_database",
            self.toolbox.create_postgresql_database(&db_name),
        )
        .await
    }

    #[tool(description = "Create a table (id SERIAL PRIMARY KEY, data TEXT) in a PostgreSQL database.")]
    async fn create_postgresql_table(
        &self,
        Parameters(TableParams {
            db_name,
            table_name,
        }): Parameters<TableParams>,
    ) -> Result<CallToolResult, McpError> {
        self.bounded(
            "create_postgresql_table",
            self.toolbox.create_postgresql_table(&db_name, &table_name),
        )
        .await
    }

    #[tool(description = "Insert one row into a PostgreSQL table. `data` maps column names to values.")]
    async fn insert_data_to_postgresql(
        &self,
        Parameters(InsertParams {
            db_name,
            table_name,
            data,
        }): Parameters<InsertParams>,
    ) -> Result<CallToolResult, McpError> {
        self.bounded(
            "insert_data_to_postgresql",
            self.toolbox
                .insert_data_to_postgresql(&db_name, &table_name, &data),
        )
        .await
    }

    #[tool(description = "Select every row from a PostgreSQL table.")]
    async fn select_data_from_postgresql(
        &self,
        Parameters(TableParams {
            db_name,
            table_name,
        }): Parameters<TableParams>,
    ) -> Result<CallToolResult, McpError> {
        self.bounded(
            "select_data_from_postgresql",
            self.toolbox
                .select_data_from_postgresql(&db_name, &table_name),
        )
        .await
    }
}

#[prompt_router]
impl McpServer {
    #[prompt(
        name = "terraform_summary",
        description = "Ask for a summary of a Terraform file."
    )]
    async fn terraform_summary(
        &self,
        Parameters(FileParams { file_name }): Parameters<FileParams>,
    ) -> Result<GetPromptResult, McpError> {
        let text = terraform::summary_prompt(&file_name).await;
        Ok(GetPromptResult {
            description: None,
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(prompts::SERVER_INSTRUCTIONS.into()),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: self.resources(),
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.resource(request.uri).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::statements::InterpolatingBuilder;
    use crate::domain::traits::{LlmProvider, SqlExecutor};
    use crate::domain::types::QueryRows;
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct SlowLlm;

    #[async_trait]
    impl LlmProvider for SlowLlm {
        async fn completion(&self, _prompt: &str) -> anyhow::Result<String> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok("late".to_string())
        }
    }

    struct NoDatabase;

    #[async_trait]
    impl SqlExecutor for NoDatabase {
        async fn execute(&self, _database: &str, _sql: &str) -> anyhow::Result<u64> {
            anyhow::bail!("no database")
        }

        async fn fetch(&self, _database: &str, _sql: &str) -> anyhow::Result<QueryRows> {
            anyhow::bail!("no database")
        }
    }

    fn server_reading(timeout_secs: u64, region_file: &str) -> McpServer {
        let toolbox = Toolbox::new(
            Box::new(InterpolatingBuilder),
            Arc::new(NoDatabase),
            Arc::new(SlowLlm),
            "postgres".to_string(),
        );
        let config = ServerConfig {
            timeout_secs,
            ..ServerConfig::default()
        };
        McpServer::new(config, Arc::new(toolbox), region_file.to_string())
    }

    fn server(timeout_secs: u64) -> McpServer {
        server_reading(timeout_secs, "main.tf")
    }

    fn resource_text(result: &ReadResourceResult) -> String {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text.clone(),
            _ => String::new(),
        }
    }

    fn prompt_text(result: &GetPromptResult) -> String {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text.clone(),
            _ => String::new(),
        }
    }

    fn text_of(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_registers_every_tool() {
        let names: Vec<String> = server(1)
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        for expected in [
            "hello_world",
            "get_current_time",
            "list_files",
            "create_terraform_file",
            "security_review_terraform_file",
            "create_postgresql_database",
            "create_postgresql_table",
            "insert_data_to_postgresql",
            "select_data_from_postgresql",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing tool {expected}");
        }
        assert_eq!(names.len(), 9);
    }

    #[tokio::test]
    async fn test_bounded_passes_text_through() {
        let result = server(1)
            .bounded("hello_world", async { tools::hello_world("Alice") })
            .await
            .unwrap();
        assert_eq!(text_of(&result), "Hello, Alice!");
    }

    #[tokio::test]
    async fn test_bounded_times_out() {
        let srv = server(1);
        let result = srv
            .bounded(
                "security_review_terraform_file",
                async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    "late".to_string()
                },
            )
            .await
            .unwrap();
        assert_eq!(
            text_of(&result),
            "Tool security_review_terraform_file timed out after 1s."
        );
    }

    #[test]
    fn test_server_info_advertises_capabilities() {
        let info = server(1).get_info();
        assert_eq!(info.server_info.name, "tfdb-mcp");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
    }

    #[test]
    fn test_lists_region_resource() {
        let resources = server(1).resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].uri, REGION_URI);
    }

    #[tokio::test]
    async fn test_region_resource_reads_configured_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.tf");
        std::fs::write(&path, "provider \"aws\" {\n  region = \"eu-west-1\"\n}\n").unwrap();

        let srv = server_reading(1, path.to_str().unwrap());
        let result = srv.resource(REGION_URI.to_string()).await.unwrap();
        assert_eq!(resource_text(&result), "eu-west-1");
    }

    #[tokio::test]
    async fn test_region_resource_without_region() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.tf");
        std::fs::write(&path, "terraform {}\n").unwrap();

        let srv = server_reading(1, path.to_str().unwrap());
        let result = srv.resource(REGION_URI.to_string()).await.unwrap();
        assert_eq!(
            resource_text(&result),
            "No region found in the Terraform file."
        );
    }

    #[tokio::test]
    async fn test_unknown_resource_is_an_error() {
        let result = server(1).resource("terraform://zone".to_string()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_registers_summary_prompt() {
        let names: Vec<String> = server(1)
            .prompt_router
            .list_all()
            .into_iter()
            .map(|p| p.name.to_string())
            .collect();
        assert_eq!(names, vec!["terraform_summary".to_string()]);
    }

    #[tokio::test]
    async fn test_summary_prompt_counts_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.tf");
        std::fs::write(&path, "terraform {}\nprovider \"aws\" {}\n").unwrap();
        let path = path.to_str().unwrap().to_string();

        let result = server(1)
            .terraform_summary(Parameters(FileParams {
                file_name: path.clone(),
            }))
            .await
            .unwrap();
        assert_eq!(
            prompt_text(&result),
            format!("Terraform file {path} contains 2 lines, please summarize it.")
        );
    }
}
