//! The graph store: id assignment, referential integrity, queries.
//!
//! `GraphDatabase` is the exclusive owner of all nodes and edges. No other
//! component holds authoritative state; queries hand out owned snapshots.
//!
//! ## Limitations
//!
//! - **Single-threaded**: mutation goes through `&mut self`. An embedding
//!   that exposes the store to concurrent callers must serialize access
//!   itself (one `Mutex` around the instance, or an owning task fed by a
//!   channel).
//! - **No property indexes**: the find/traversal operations are linear
//!   scans over the current edge or node count.

use indexmap::IndexMap;
use tracing::debug;

use crate::model::{Edge, Node, PropertyMap, QueryResult, Value};
use crate::{Error, Result};

// ============================================================================
// GraphDatabase
// ============================================================================

/// In-memory property graph store.
///
/// Invariant: every registered edge's `from` and `to` resolve to registered
/// nodes at all times. Checked at edge creation, maintained across node
/// deletion by cascading.
#[derive(Debug, Default)]
pub struct GraphDatabase {
    nodes: IndexMap<String, Node>,
    edges: IndexMap<String, Edge>,
    node_counter: u64,
    edge_counter: u64,
}

impl GraphDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Node CRUD
    // ========================================================================

    /// Create a node with an auto-assigned id (`n0`, `n1`, ...).
    ///
    /// Duplicate labels are suppressed, keeping first-occurrence order.
    /// Returns a copy of the stored node.
    pub fn create_node(&mut self, labels: &[&str], properties: PropertyMap) -> Node {
        let id = format!("n{}", self.node_counter);
        self.node_counter += 1;

        let mut node = Node::new(id.as_str()).with_properties(properties);
        for label in labels {
            node.add_label(*label);
        }

        debug!(id = %node.id, labels = ?node.labels, "node created");
        self.nodes.insert(id, node.clone());
        node
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutable access to a stored node, for in-place label/property edits.
    pub fn get_node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Snapshot of all nodes in insertion order.
    pub fn get_all_nodes(&self) -> Vec<Node> {
        self.nodes.values().cloned().collect()
    }

    /// Delete a node and every edge touching it. Returns `false` when the
    /// node is absent, leaving the graph unchanged.
    pub fn delete_node(&mut self, id: &str) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }

        // Collect the cascade set before mutating anything.
        let doomed: Vec<String> = self
            .edges
            .values()
            .filter(|e| e.involves_node(id))
            .map(|e| e.id.clone())
            .collect();

        for edge_id in &doomed {
            self.edges.shift_remove(edge_id);
        }
        self.nodes.shift_remove(id);

        debug!(id, cascaded_edges = doomed.len(), "node deleted");
        true
    }

    // ========================================================================
    // Edge CRUD
    // ========================================================================

    /// Create a directed edge with an auto-assigned id (`e0`, `e1`, ...).
    ///
    /// Both endpoints must be registered nodes; the source is checked
    /// first. Self-loops are permitted. On failure the edge map is left
    /// unchanged.
    pub fn create_edge(
        &mut self,
        edge_type: &str,
        from: &str,
        to: &str,
        properties: PropertyMap,
    ) -> Result<Edge> {
        if !self.nodes.contains_key(from) {
            return Err(Error::SourceNodeMissing(from.to_owned()));
        }
        if !self.nodes.contains_key(to) {
            return Err(Error::TargetNodeMissing(to.to_owned()));
        }

        let id = format!("e{}", self.edge_counter);
        self.edge_counter += 1;

        let edge = Edge::new(id.as_str(), edge_type, from, to).with_properties(properties);
        debug!(id = %edge.id, edge_type, from, to, "edge created");
        self.edges.insert(id, edge.clone());
        Ok(edge)
    }

    pub fn get_edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Mutable access to a stored edge.
    pub fn get_edge_mut(&mut self, id: &str) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    /// Snapshot of all edges in insertion order.
    pub fn get_all_edges(&self) -> Vec<Edge> {
        self.edges.values().cloned().collect()
    }

    /// Delete an edge. Returns `false` when absent. Never touches nodes.
    pub fn delete_edge(&mut self, id: &str) -> bool {
        let removed = self.edges.shift_remove(id).is_some();
        if removed {
            debug!(id, "edge deleted");
        }
        removed
    }

    // ========================================================================
    // Edge filters
    // ========================================================================

    /// All edges whose source is the given node.
    pub fn get_edges_from(&self, node_id: &str) -> Vec<Edge> {
        self.edges.values().filter(|e| e.from == node_id).cloned().collect()
    }

    /// All edges whose target is the given node.
    pub fn get_edges_to(&self, node_id: &str) -> Vec<Edge> {
        self.edges.values().filter(|e| e.to == node_id).cloned().collect()
    }

    /// All edges touching the given node at either endpoint.
    pub fn get_edges_for_node(&self, node_id: &str) -> Vec<Edge> {
        self.edges.values().filter(|e| e.involves_node(node_id)).cloned().collect()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All nodes carrying the label. No edges.
    pub fn find_nodes_by_label(&self, label: &str) -> QueryResult {
        let nodes = self.nodes.values().filter(|n| n.has_label(label)).cloned().collect();
        QueryResult::from_nodes(nodes)
    }

    /// All nodes whose property equals the given value. No edges.
    ///
    /// Equality is structural on [`Value`], so list- and map-valued
    /// properties match by content.
    pub fn find_nodes_by_property(&self, key: &str, value: &Value) -> QueryResult {
        let nodes = self
            .nodes
            .values()
            .filter(|n| n.get_property(key) == Some(value))
            .cloned()
            .collect();
        QueryResult::from_nodes(nodes)
    }

    /// All edges of the given type. No nodes.
    pub fn find_edges_by_type(&self, edge_type: &str) -> QueryResult {
        let edges = self
            .edges
            .values()
            .filter(|e| e.edge_type == edge_type)
            .cloned()
            .collect();
        QueryResult::from_edges(edges)
    }

    /// Nodes reachable over one outgoing hop, paired with the edges taken.
    ///
    /// Incoming edges do not count. A target id that fails to resolve is
    /// skipped rather than erred.
    pub fn get_neighbors(&self, node_id: &str) -> QueryResult {
        let edges = self.get_edges_from(node_id);
        let nodes = edges
            .iter()
            .filter_map(|e| self.nodes.get(&e.to))
            .cloned()
            .collect();
        QueryResult::new(nodes, edges)
    }

    /// Like [`GraphDatabase::get_neighbors`], restricted to one edge type.
    pub fn follow_edge_type(&self, node_id: &str, edge_type: &str) -> QueryResult {
        let edges: Vec<Edge> = self
            .edges
            .values()
            .filter(|e| e.from == node_id && e.edge_type == edge_type)
            .cloned()
            .collect();
        let nodes = edges
            .iter()
            .filter_map(|e| self.nodes.get(&e.to))
            .cloned()
            .collect();
        QueryResult::new(nodes, edges)
    }

    /// True iff some outgoing edge from `from` reaches `to`, optionally
    /// restricted to one edge type. Directional.
    pub fn are_connected(&self, from: &str, to: &str, edge_type: Option<&str>) -> bool {
        self.edges.values().any(|e| {
            e.from == from && e.to == to && edge_type.is_none_or(|t| e.edge_type == t)
        })
    }

    // ========================================================================
    // Introspection and lifecycle
    // ========================================================================

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Remove everything and reset both id counters, so the next created
    /// node is `n0` again.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "graph cleared"
        );
        self.nodes.clear();
        self.edges.clear();
        self.node_counter = 0;
        self.edge_counter = 0;
    }
}

// ============================================================================
// Tests
// ============================================================================
