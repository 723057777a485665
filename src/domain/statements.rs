//! # Statement Builders
//!
//! Two ways of assembling the SQL text used by the database tools.
//!
//! `InterpolatingBuilder` splices caller text straight into the statement:
//! no identifier quoting, no literal escaping. It is **injection-prone** and
//! kept on purpose, so its behaviour can be demonstrated and tested.
//!
//! `QuotingBuilder` produces the same statements with identifiers quoted and
//! literals escaped. Pick it with `database.statement_mode: quoted`.

use crate::domain::config::StatementMode;
use crate::domain::traits::StatementBuilder;
use crate::domain::types::{RowPayload, TABLE_COLUMNS, value_text};

/// UNSAFE: raw string interpolation, caller text becomes executable SQL.
///
/// Non-string payload values are spliced from their JSON text, so `null` and
/// `true` become `'null'` and `'true'`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InterpolatingBuilder;

impl StatementBuilder for InterpolatingBuilder {
    fn build_create_database(&self, name: &str) -> String {
        format!("CREATE DATABASE {name};")
    }

    fn build_create_table(&self, name: &str) -> String {
        format!("CREATE TABLE {name} ({TABLE_COLUMNS});")
    }

    fn build_insert(&self, table: &str, payload: &RowPayload) -> String {
        let columns = payload.keys().cloned().collect::<Vec<_>>().join(", ");
        let values = payload
            .values()
            .map(|v| format!("'{}'", value_text(v)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("INSERT INTO {table} ({columns}) VALUES ({values});")
    }

    fn build_select_all(&self, table: &str) -> String {
        format!("SELECT * FROM {table};")
    }
}

/// Quotes identifiers and escapes literals.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuotingBuilder;

/// `"name"`, embedded double quotes doubled.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `'value'`, embedded single quotes doubled.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

impl StatementBuilder for QuotingBuilder {
    fn build_create_database(&self, name: &str) -> String {
        format!("CREATE DATABASE {};", quote_identifier(name))
    }

    fn build_create_table(&self, name: &str) -> String {
        format!("CREATE TABLE {} ({TABLE_COLUMNS});", quote_identifier(name))
    }

    fn build_insert(&self, table: &str, payload: &RowPayload) -> String {
        let columns = payload
            .keys()
            .map(|k| quote_identifier(k))
            .collect::<Vec<_>>()
            .join(", ");
        let values = payload
            .values()
            .map(|v| quote_literal(&value_text(v)))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({columns}) VALUES ({values});",
            quote_identifier(table)
        )
    }

    fn build_select_all(&self, table: &str) -> String {
        format!("SELECT * FROM {};", quote_identifier(table))
    }
}

/// Builder for the configured mode.
pub fn builder_for(mode: StatementMode) -> Box<dyn StatementBuilder> {
    match mode {
        StatementMode::Interpolated => Box::new(InterpolatingBuilder),
        StatementMode::Quoted => Box::new(QuotingBuilder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> RowPayload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_create_database() {
        assert_eq!(
            InterpolatingBuilder.build_create_database("my_database"),
            "CREATE DATABASE my_database;"
        );
    }

    #[test]
    fn test_create_table() {
        assert_eq!(
            InterpolatingBuilder.build_create_table("t"),
            "CREATE TABLE t (id SERIAL PRIMARY KEY, data TEXT);"
        );
    }

    #[test]
    fn test_insert_single_column() {
        assert_eq!(
            InterpolatingBuilder.build_insert("t", &payload(json!({"data": "x"}))),
            "INSERT INTO t (data) VALUES ('x');"
        );
    }

    #[test]
    fn test_insert_keeps_caller_order() {
        let sql = InterpolatingBuilder
            .build_insert("t", &payload(json!({"zeta": "1", "alpha": 2, "mid": null, "on": true})));
        assert_eq!(
            sql,
            "INSERT INTO t (zeta, alpha, mid, on) VALUES ('1', '2', 'null', 'true');"
        );
    }

    #[test]
    fn test_select_all() {
        assert_eq!(
            InterpolatingBuilder.build_select_all("t"),
            "SELECT * FROM t;"
        );
    }

    #[test]
    fn test_insert_quote_breaks_statement() {
        let sql = InterpolatingBuilder.build_insert("t", &payload(json!({"data": "O'Brien"})));
        assert_eq!(sql, "INSERT INTO t (data) VALUES ('O'Brien');");
        // Odd number of quotes: the literal is never closed.
        assert_eq!(sql.matches('\'').count() % 2, 1);
    }

    #[test]
    fn test_insert_value_injects_second_statement() {
        let sql = InterpolatingBuilder.build_insert(
            "demo",
            &payload(json!({"data": "User2');INSERT into demo (data) VALUES('Something"})),
        );
        assert_eq!(
            sql,
            "INSERT INTO demo (data) VALUES ('User2');INSERT into demo (data) VALUES('Something');"
        );
        assert_eq!(sql.matches("INSERT").count(), 2);
    }

    #[test]
    fn test_table_name_injects_statement() {
        let sql = InterpolatingBuilder.build_select_all("t; DROP TABLE users");
        assert_eq!(sql, "SELECT * FROM t; DROP TABLE users;");
    }

    #[test]
    fn test_quoting_builder_escapes() {
        let sql = QuotingBuilder.build_insert(
            "demo",
            &payload(json!({"data": "User2');INSERT into demo (data) VALUES('Something"})),
        );
        assert_eq!(
            sql,
            "INSERT INTO \"demo\" (\"data\") VALUES ('User2'');INSERT into demo (data) VALUES(''Something');"
        );
        assert_eq!(
            QuotingBuilder.build_select_all("t\"; DROP TABLE users; --"),
            "SELECT * FROM \"t\"\"; DROP TABLE users; --\";"
        );
        assert_eq!(
            QuotingBuilder.build_create_table("t"),
            "CREATE TABLE \"t\" (id SERIAL PRIMARY KEY, data TEXT);"
        );
        assert_eq!(
            QuotingBuilder.build_create_database("db"),
            "CREATE DATABASE \"db\";"
        );
    }

    #[test]
    fn test_builder_for_mode() {
        let raw = builder_for(StatementMode::Interpolated);
        assert_eq!(raw.build_select_all("t"), "SELECT * FROM t;");
        let quoted = builder_for(StatementMode::Quoted);
        assert_eq!(quoted.build_select_all("t"), "SELECT * FROM \"t\";");
    }
}
