//! # Record Store Trait
//!
//! The flat persistence contract the graph core sits behind when its
//! entities need to live in an external table store. One capability trait,
//! no inheritance: every backend is a full implementation of the same five
//! table/record operations.
//!
//! ## Implementations
//!
//! | Backend | Module | Description |
//! |---------|--------|-------------|
//! | `MemoryStore` | `memory` | In-memory reference implementation |

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::model::{Edge, Node, PropertyMap, Value};

pub use memory::MemoryStore;

// ============================================================================
// Record
// ============================================================================

/// A flat record: an id plus untyped fields.
///
/// Graph entities project into records for storage; the graph core itself
/// defines no serialization format beyond this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub fields: PropertyMap,
}

impl Record {
    pub fn new(id: impl Into<String>, fields: PropertyMap) -> Self {
        Self { id: id.into(), fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Project a node into a record: its properties plus a `labels` list.
/// A property named `labels` is overwritten by the projection.
impl From<&Node> for Record {
    fn from(node: &Node) -> Self {
        let mut fields = node.properties.clone();
        fields.insert(
            "labels".into(),
            Value::List(node.labels.iter().map(|l| Value::from(l.as_str())).collect()),
        );
        Self { id: node.id.clone(), fields }
    }
}

/// Project an edge into a record: its properties plus `type`, `from`, `to`.
/// Properties with those names are overwritten by the projection.
impl From<&Edge> for Record {
    fn from(edge: &Edge) -> Self {
        let mut fields = edge.properties.clone();
        fields.insert("type".into(), Value::from(edge.edge_type.as_str()));
        fields.insert("from".into(), Value::from(edge.from.as_str()));
        fields.insert("to".into(), Value::from(edge.to.as_str()));
        Self { id: edge.id.clone(), fields }
    }
}

// ============================================================================
// RecordStore Trait
// ============================================================================

/// The table/record storage contract.
///
/// Tables are created explicitly; addressing an unknown table from a write
/// operation is an [`crate::Error::UnknownTable`]. Reads degrade to
/// `Ok(None)` instead.
pub trait RecordStore {
    /// Create a table; idempotent.
    fn create_table(&mut self, table: &str) -> Result<()>;

    /// Insert or replace the record with the same id.
    fn save(&mut self, table: &str, record: Record) -> Result<()>;

    /// Look up a record by id. Unknown tables and ids are `None`.
    fn find(&self, table: &str, id: &str) -> Result<Option<Record>>;

    /// Shallow-merge fields into the stored record; no-op when the record
    /// is absent.
    fn update(&mut self, table: &str, id: &str, fields: PropertyMap) -> Result<()>;

    /// Remove a record; idempotent on the record, error on the table.
    fn delete(&mut self, table: &str, id: &str) -> Result<()>;
}
