//! Renders generated rows into SQL INSERT statements.

use crate::schema::Table;
use anyhow::{bail, Result};

/// A single positional SQL value
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Str(String),
    Bool(bool),
}

impl SqlValue {
    /// Literal form for an INSERT value list
    pub fn to_sql(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Str(s) => format!("'{}'", escape_string(s)),
            SqlValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

/// Doubles embedded single quotes
fn escape_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Render one INSERT statement for `row` against `table`.
///
/// `row` is positionally aligned with `table.columns`. Optional columns
/// holding NULL are elided from both the column list and the value list;
/// the consuming schema fills in their defaults.
pub fn render_insert(table: &Table, row: &[SqlValue]) -> Result<String> {
    if row.len() != table.columns.len() {
        bail!(
            "table {} expects {} values, got {}",
            table.name,
            table.columns.len(),
            row.len()
        );
    }

    let mut columns = Vec::with_capacity(row.len());
    let mut values = Vec::with_capacity(row.len());
    for (column, value) in table.columns.iter().zip(row) {
        if column.optional && value.is_null() {
            continue;
        }
        columns.push(column.name);
        values.push(value.to_sql());
    }

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table.name,
        columns.join(", "),
        values.join(", ")
    ))
}
