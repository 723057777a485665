//! # Domain Types
//!
//! Common data structures used by the database tools.

use serde_json::{Map, Value};

/// Column name to value, in the order the caller supplied the keys.
pub type RowPayload = Map<String, Value>;

/// Fixed layout of every table the server creates.
pub const TABLE_COLUMNS: &str = "id SERIAL PRIMARY KEY, data TEXT";

/// Renders a payload value the way it is spliced into SQL text.
/// Strings are taken verbatim; everything else uses its JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Result of a `SELECT`, every cell read back as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryRows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryRows {
    /// One line per row, `column=value` pairs separated by `, `.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "(no rows)".to_string();
        }
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        let name = self.columns.get(i).map(String::as_str).unwrap_or("?");
                        format!("{}={}", name, cell.as_deref().unwrap_or("NULL"))
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
