//! MCP tool and prompt parameters.
//!
//! Field doc comments become the argument descriptions in the generated JSON schema.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::types::RowPayload;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GreetParams {
    /// The name to greet
    pub name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListFilesParams {
    /// The directory to list files from
    pub directory: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateFileParams {
    /// The name of the file to create
    pub file_name: String,
    /// The content to write to the file
    pub content: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FileParams {
    /// Path of the Terraform file
    pub file_name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DatabaseParams {
    /// The name of the database
    pub db_name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TableParams {
    /// The name of the database
    pub db_name: String,
    /// The name of the table
    pub table_name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct InsertParams {
    /// The name of the database
    pub db_name: String,
    /// The name of the table
    pub table_name: String,
    /// Column name to value
    pub data: RowPayload,
}
