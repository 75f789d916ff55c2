//! Persisted JSON form of the schema graph.
//!
//! The editor session stores the graph as `{nodes, edges}` with camelCase
//! column fields. This module owns that shape so consumers can load a saved
//! schema and generate SQL from it without going through the editor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{Edge, Node};
use crate::sql::generate_schema_sql;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Schema graph as stored by the editor: table nodes plus relationship edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl SchemaDocument {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Generate the DDL script for the stored graph.
    pub fn generate_sql(&self) -> String {
        generate_schema_sql(&self.nodes, &self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_editor_document() {
        let json = r#"{
            "nodes": [
                {
                    "id": "n1",
                    "name": "user",
                    "columns": [
                        {
                            "id": "c1",
                            "name": "email",
                            "type": "varchar",
                            "length": 100,
                            "nullable": false,
                            "primaryKey": false,
                            "unique": true
                        }
                    ]
                }
            ],
            "edges": []
        }"#;

        let document = SchemaDocument::from_json(json).unwrap();
        assert_eq!(
            document.generate_sql(),
            "CREATE TABLE user (\n  id INTEGER PRIMARY KEY,\n  email VARCHAR(100) NOT NULL UNIQUE\n);\n\n"
        );
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let document = SchemaDocument::from_json("{}").unwrap();
        assert!(document.nodes.is_empty());
        assert!(document.edges.is_empty());
        assert_eq!(document.generate_sql(), "\n");
    }

    #[test]
    fn test_unrecognized_column_type_degrades() {
        let json = r#"{
            "nodes": [
                {
                    "id": "n1",
                    "name": "place",
                    "columns": [
                        {"id": "c1", "name": "area", "type": "geometry", "primaryKey": true}
                    ]
                }
            ]
        }"#;

        let document = SchemaDocument::from_json(json).unwrap();
        assert_eq!(
            document.generate_sql(),
            "CREATE TABLE place (\n  area VARCHAR(255) PRIMARY KEY\n);\n\n"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "nodes": [
                {"id": "n1", "name": "user", "columns": []},
                {"id": "n2", "name": "order", "columns": []}
            ],
            "edges": [
                {"source": "n2", "target": "n1"}
            ]
        }"#;

        let document = SchemaDocument::from_json(json).unwrap();
        let restored = SchemaDocument::from_json(&document.to_json().unwrap()).unwrap();
        assert_eq!(restored, document);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let result = SchemaDocument::from_json("{nodes: oops");
        assert!(result.is_err());
    }
}
