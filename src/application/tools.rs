//! # Tool Bodies
//!
//! One method per MCP tool. Each opens what it needs, performs a single linear
//! sequence of operations and answers with text. Failures never escape: they
//! are formatted into a one-line message naming the operation that failed.

use std::io::ErrorKind;
use std::sync::Arc;

use crate::domain::traits::{LlmProvider, SqlExecutor, StatementBuilder};
use crate::domain::types::RowPayload;
use crate::strings::{messages, prompts};

/// Result of `list_files`: the entries, or a message when listing failed.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryListing {
    Entries(Vec<String>),
    Message(String),
}

pub fn hello_world(name: &str) -> String {
    messages::greeting(name)
}

pub fn get_current_time() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub async fn list_files(directory: &str) -> DirectoryListing {
    let mut entries = match tokio::fs::read_dir(directory).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return DirectoryListing::Message(messages::directory_not_found(directory));
        }
        Err(e) => {
            return DirectoryListing::Message(messages::directory_list_failed(
                directory,
                &e.to_string(),
            ));
        }
    };

    let mut names = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => names.push(entry.file_name().to_string_lossy().to_string()),
            Ok(None) => break,
            Err(e) => {
                return DirectoryListing::Message(messages::directory_list_failed(
                    directory,
                    &e.to_string(),
                ));
            }
        }
    }
    names.sort();
    DirectoryListing::Entries(names)
}

pub async fn create_terraform_file(file_name: &str, content: &str) -> String {
    match tokio::fs::write(file_name, content).await {
        Ok(()) => messages::file_created(file_name),
        Err(e) => messages::file_create_failed(file_name, &e.to_string()),
    }
}

/// The database and LLM tools, wired to their backends.
pub struct Toolbox {
    statements: Box<dyn StatementBuilder>,
    sql: Arc<dyn SqlExecutor>,
    llm: Arc<dyn LlmProvider>,
    maintenance_db: String,
}

impl Toolbox {
    pub fn new(
        statements: Box<dyn StatementBuilder>,
        sql: Arc<dyn SqlExecutor>,
        llm: Arc<dyn LlmProvider>,
        maintenance_db: String,
    ) -> Self {
        Self {
            statements,
            sql,
            llm,
            maintenance_db,
        }
    }

    pub async fn security_review_terraform_file(&self, file_name: &str) -> String {
        let content = match tokio::fs::read_to_string(file_name).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return messages::file_not_found(file_name);
            }
            Err(e) => return messages::review_failed(file_name, &e.to_string()),
        };

        match self.llm.completion(&prompts::security_review(&content)).await {
            Ok(review) => messages::review_result(file_name, &review),
            Err(e) => messages::llm_call_failed(&format!("{e:#}")),
        }
    }

    pub async fn create_postgresql_database(&self, db_name: &str) -> String {
        let sql = self.statements.build_create_database(db_name);
        match self.sql.execute(&self.maintenance_db, &sql).await {
            Ok(_) => messages::database_created(db_name),
            Err(e) => messages::database_create_failed(db_name, &format!("{e:#}")),
        }
    }

    pub async fn create_postgresql_table(&self, db_name: &str, table_name: &str) -> String {
        let sql = self.statements.build_create_table(table_name);
        match self.sql.execute(db_name, &sql).await {
            Ok(_) => messages::table_created(db_name, table_name),
            Err(e) => messages::table_create_failed(db_name, table_name, &format!("{e:#}")),
        }
    }

    pub async fn insert_data_to_postgresql(
        &self,
        db_name: &str,
        table_name: &str,
        data: &RowPayload,
    ) -> String {
        let sql = self.statements.build_insert(table_name, data);
        match self.sql.execute(db_name, &sql).await {
            Ok(_) => messages::data_inserted(db_name, table_name),
            Err(e) => messages::data_insert_failed(db_name, table_name, &format!("{e:#}")),
        }
    }

    pub async fn select_data_from_postgresql(&self, db_name: &str, table_name: &str) -> String {
        let sql = self.statements.build_select_all(table_name);
        match self.sql.fetch(db_name, &sql).await {
            Ok(rows) => messages::data_selected(db_name, table_name, &rows.render()),
            Err(e) => messages::data_select_failed(db_name, table_name, &format!("{e:#}")),
        }
    }
}
