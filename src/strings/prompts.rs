//! # Prompts
//!
//! Text sent to the LLM or returned from the MCP prompt endpoint.

pub fn security_review(content: &str) -> String {
    format!(
        "Act as an experienced security engineer and review the following terraform file content:\n\n{content}\n\nPlease provide a detailed security review."
    )
}

pub fn terraform_summary(path: &str, lines: usize) -> String {
    format!("Terraform file {path} contains {lines} lines, please summarize it.")
}

pub const SERVER_INSTRUCTIONS: &str = "Local tools for Terraform files and a PostgreSQL sandbox. \
Database tools build SQL by string interpolation unless the server runs in quoted mode.";
