//! DDL generation: CREATE TABLE statements plus foreign key constraints.

use std::collections::HashMap;

use super::types::sql_type;
use crate::graph::{Edge, Node};
use crate::schema::{Column, Table};

/// Generate the CREATE TABLE statement for a single table.
///
/// A table without an explicitly marked primary key gets a synthetic
/// `id INTEGER PRIMARY KEY` column prepended; a table without any columns
/// collapses to just that synthetic column.
pub fn generate_table_sql(table: &Table) -> String {
    if table.columns.is_empty() {
        return format!(
            "CREATE TABLE {} (\n  id INTEGER PRIMARY KEY\n);\n",
            table.name
        );
    }

    let mut definitions: Vec<String> = table.columns.iter().map(column_definition).collect();

    if !table.has_primary_key() {
        definitions.insert(0, "  id INTEGER PRIMARY KEY".to_string());
    }

    format!(
        "CREATE TABLE {} (\n{}\n);\n",
        table.name,
        definitions.join(",\n")
    )
}

fn column_definition(column: &Column) -> String {
    let mut definition = format!("  {} {}", column.name, sql_type(column.typ, column.length));

    if column.primary_key {
        definition.push_str(" PRIMARY KEY");
    }

    // PRIMARY KEY already implies NOT NULL
    if !column.nullable && !column.primary_key {
        definition.push_str(" NOT NULL");
    }

    if column.unique && !column.primary_key {
        definition.push_str(" UNIQUE");
    }

    if let Some(value) = &column.default_value {
        definition.push_str(&format!(" DEFAULT {}", value));
    }

    definition
}

/// Generate the full DDL script: one CREATE TABLE per node in order, a
/// separating newline, then one ALTER TABLE ... ADD FOREIGN KEY per edge
/// whose endpoints resolve to named tables.
pub fn generate_schema_sql(nodes: &[Node], edges: &[Edge]) -> String {
    let table_sql: Vec<String> = nodes.iter().map(|n| generate_table_sql(&n.table)).collect();

    let names: HashMap<&str, &str> = nodes
        .iter()
        .map(|n| (n.id.as_str(), n.table.name.as_str()))
        .collect();

    let mut constraint_sql = String::new();
    for edge in edges {
        let source = names.get(edge.source.as_str()).copied();
        let target = names.get(edge.target.as_str()).copied();
        match (source, target) {
            (Some(source), Some(target)) if !source.is_empty() && !target.is_empty() => {
                constraint_sql.push_str(&format!(
                    "ALTER TABLE {} ADD FOREIGN KEY ({}_id) REFERENCES {}(id);\n",
                    source,
                    target.to_lowercase(),
                    target
                ));
            }
            // Dangling edges are dropped, not reported
            _ => {}
        }
    }

    format!("{}\n{}", table_sql.join("\n"), constraint_sql)
}
