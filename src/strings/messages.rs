//! # Messages
//!
//! Contains constant strings and format functions for tool results.
//! Every tool answers with one of these, success or failure alike.

pub fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

pub fn directory_not_found(dir: &str) -> String {
    format!("Directory {dir} not found.")
}

pub fn directory_list_failed(dir: &str, err: &str) -> String {
    format!("Error listing directory {dir}: {err}")
}

pub fn file_created(path: &str) -> String {
    format!("File {path} created successfully.")
}

pub fn file_create_failed(path: &str, err: &str) -> String {
    format!("Error creating file {path}: {err}")
}

pub fn file_not_found(path: &str) -> String {
    format!("File {path} not found.")
}

pub fn file_read_failed(path: &str, err: &str) -> String {
    format!("Error reading file {path}: {err}")
}

pub fn review_result(path: &str, review: &str) -> String {
    format!("Security review of {path}:\n{review}")
}

pub fn review_failed(path: &str, err: &str) -> String {
    format!("Error reviewing file {path}: {err}")
}

pub fn llm_call_failed(err: &str) -> String {
    format!("Error calling Ollama: {err}")
}

pub fn database_created(db: &str) -> String {
    format!("Database {db} created successfully.")
}

pub fn database_create_failed(db: &str, err: &str) -> String {
    format!("Error creating database {db}: {err}")
}

pub fn table_created(db: &str, table: &str) -> String {
    format!("Table {table} created successfully in database {db}.")
}

pub fn table_create_failed(db: &str, table: &str, err: &str) -> String {
    format!("Error creating table {table} in database {db}: {err}")
}

pub fn data_inserted(db: &str, table: &str) -> String {
    format!("Data inserted into {db}.{table} successfully.")
}

pub fn data_insert_failed(db: &str, table: &str, err: &str) -> String {
    format!("Error inserting data into {db}.{table}: {err}")
}

pub fn data_selected(db: &str, table: &str, rows: &str) -> String {
    format!("Data from {db}.{table}:\n{rows}")
}

pub fn data_select_failed(db: &str, table: &str, err: &str) -> String {
    format!("Error selecting data from {db}.{table}: {err}")
}

pub const NO_REGION_FOUND: &str = "No region found in the Terraform file.";

pub fn region_file_read_failed(path: &str, err: &str) -> String {
    format!("Error reading Terraform file {path}: {err}")
}

pub const TERRAFORM_FILE_EMPTY: &str = "Terraform file is empty.";

pub fn tool_timed_out(tool: &str, secs: u64) -> String {
    format!("Tool {tool} timed out after {secs}s.")
}
