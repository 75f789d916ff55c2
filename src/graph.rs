use serde::{Deserialize, Serialize};

use crate::document::SchemaDocument;
use crate::schema::Table;

/// A table placed on the canvas, addressed by an opaque node id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub table: Table,
}

/// Directed relationship: the source table carries the foreign key,
/// the target table is the one referenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Insertion-ordered table registry plus relationship list.
///
/// Owns the graph the editor session mutates. Generation never mutates it;
/// persistence is handled separately through [`SchemaDocument`].
#[derive(Debug, Clone, Default)]
pub struct SchemaGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_id: u64,
}

impl SchemaGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    fn fresh_id(&mut self) -> String {
        // Loaded documents may already use ids from this scheme
        loop {
            let id = format!("t{}", self.next_id);
            self.next_id += 1;
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Add a table to the graph, returning its node id.
    pub fn add_table(&mut self, table: Table) -> String {
        let id = self.fresh_id();
        self.nodes.push(Node {
            id: id.clone(),
            table,
        });
        id
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.nodes.iter().find(|n| n.id == id).map(|n| &n.table)
    }

    pub fn table_mut(&mut self, id: &str) -> Option<&mut Table> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .map(|n| &mut n.table)
    }

    /// Remove a table and every edge touching it.
    pub fn remove_table(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        true
    }

    /// Connect two nodes. Returns false when either endpoint is unknown.
    /// Duplicate and self-referencing edges are allowed.
    pub fn connect(&mut self, source: &str, target: &str) -> bool {
        if !self.contains(source) || !self.contains(target) {
            return false;
        }
        self.edges.push(Edge {
            source: source.to_string(),
            target: target.to_string(),
        });
        true
    }

    /// Remove the first edge matching the given endpoints.
    pub fn disconnect(&mut self, source: &str, target: &str) -> bool {
        match self
            .edges
            .iter()
            .position(|e| e.source == source && e.target == target)
        {
            Some(pos) => {
                self.edges.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Generate the DDL script for the current graph snapshot.
    pub fn to_sql(&self) -> String {
        crate::sql::generate_schema_sql(&self.nodes, &self.edges)
    }

    pub fn from_document(document: SchemaDocument) -> Self {
        Self {
            nodes: document.nodes,
            edges: document.edges,
            next_id: 0,
        }
    }

    pub fn to_document(&self) -> SchemaDocument {
        SchemaDocument {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }
}
