//! Edge (directed, typed relationship) in the property graph.

use std::fmt;

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};

/// A directed, typed edge between two node identifiers.
///
/// An edge holds its endpoints by id, not by reference; the owning
/// [`crate::GraphDatabase`] guarantees both ids resolve for every edge it
/// registers, and cascades deletion so they keep resolving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub edge_type: String,
    pub from: String,
    pub to: String,
    pub properties: PropertyMap,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        edge_type: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            edge_type: edge_type.into(),
            from: from.into(),
            to: to.into(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Upsert a property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Exact directional match: `from -> to`.
    pub fn connects(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }

    /// True when the node is either endpoint.
    pub fn involves_node(&self, node_id: &str) -> bool {
        self.from == node_id || self.to == node_id
    }

    /// The "other" end of the edge from the given node, or `None` when the
    /// node is neither endpoint.
    pub fn other_node(&self, node_id: &str) -> Option<&str> {
        if self.from == node_id {
            Some(&self.to)
        } else if self.to == node_id {
            Some(&self.from)
        } else {
            None
        }
    }

    /// A new edge with swapped endpoints, id `<id>_reversed`, same type,
    /// copied properties.
    ///
    /// The id derivation is purely textual: the result is detached from any
    /// database counter, and reversing twice (or supplying an id that
    /// already ends in `_reversed`) can collide with an existing id.
    pub fn reverse(&self) -> Edge {
        Edge {
            id: format!("{}_reversed", self.id),
            edge_type: self.edge_type.clone(),
            from: self.to.clone(),
            to: self.from.clone(),
            properties: self.properties.clone(),
        }
    }
}

impl fmt::Display for Edge {
    /// `Edge(<id>, <from>-[<type>]-><to>, <compact-json-properties>)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = serde_json::to_string(&self.properties).map_err(|_| fmt::Error)?;
        write!(
            f,
            "Edge({}, {}-[{}]->{}, {})",
            self.id, self.from, self.edge_type, self.to, props
        )
    }
}
