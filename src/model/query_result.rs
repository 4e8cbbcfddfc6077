//! QueryResult — an owned snapshot of nodes and edges returned by queries.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use super::{Edge, Node};

/// A snapshot bundle of nodes and edges with convenience lookups.
///
/// Results own their entities: mutating a result never touches the graph
/// it was queried from. A result with edges but no nodes still counts as
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl QueryResult {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes, edges: Vec::new() }
    }

    pub fn from_edges(edges: Vec<Edge>) -> Self {
        Self { nodes: Vec::new(), edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True iff there are no nodes. Edges alone do not count.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes_with_label(&self, label: &str) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.has_label(label)).collect()
    }

    pub fn edges_of_type(&self, edge_type: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.edge_type == edge_type).collect()
    }

    /// First node with the given id, or `None`.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First edge with the given id, or `None`.
    pub fn edge_by_id(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }
}

impl fmt::Display for QueryResult {
    /// Multi-line summary. Unique labels and edge types appear in
    /// first-occurrence order across the contained entities.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: IndexSet<&str> = self
            .nodes
            .iter()
            .flat_map(|n| n.labels.iter().map(String::as_str))
            .collect();
        let types: IndexSet<&str> = self.edges.iter().map(|e| e.edge_type.as_str()).collect();

        let join = |set: IndexSet<&str>| set.into_iter().collect::<Vec<_>>().join(", ");
        write!(
            f,
            "QueryResult(\n  Nodes: {}\n  Node Labels: [{}]\n  Edges: {}\n  Edge Types: [{}]\n)",
            self.node_count(),
            join(labels),
            self.edge_count(),
            join(types),
        )
    }
}
