//! # Terraform Helpers
//!
//! Backs the `terraform://region` resource and the `terraform_summary` prompt.
//! Both read a file and reduce it to one line of text.

use regex::Regex;
use std::sync::LazyLock;

use crate::strings::{messages, prompts};

static REGION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"region\s*=\s*"([^"]+)""#).expect("region pattern is valid"));

/// First `region = "<value>"` assignment in the text.
pub fn extract_region(content: &str) -> Option<String> {
    REGION_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Region declared in the file at `path`, or a message explaining why there is none.
pub async fn region_from_file(path: &str) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            extract_region(&content).unwrap_or_else(|| messages::NO_REGION_FOUND.to_string())
        }
        Err(e) => messages::region_file_read_failed(path, &e.to_string()),
    }
}

/// Line count with `\n`, `\r\n`, a lone `\r` and the Unicode line separators
/// all ending a line. A trailing break does not open a new line.
pub fn line_count(text: &str) -> usize {
    let mut count = 0;
    let mut open = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                count += 1;
                open = false;
            }
            '\n' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}' => {
                count += 1;
                open = false;
            }
            _ => open = true,
        }
    }
    if open { count + 1 } else { count }
}

pub fn summary_for(path: &str, content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return messages::TERRAFORM_FILE_EMPTY.to_string();
    }
    prompts::terraform_summary(path, line_count(trimmed))
}

pub async fn summary_prompt(path: &str) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => summary_for(path, &content),
        Err(e) => messages::file_read_failed(path, &e.to_string()),
    }
}
