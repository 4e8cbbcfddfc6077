//! # graphlet — Embeddable In-Memory Property Graph Store
//!
//! A mutable graph of labeled nodes and typed, directed edges, owned by a
//! single [`GraphDatabase`] instance that assigns identifiers, enforces
//! edge-endpoint existence, and answers one-hop structural queries.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: `GraphDatabase` holds the only authoritative node and
//!    edge maps; queries return owned snapshots, never aliases
//! 2. **Clean DTOs**: `Node`, `Edge`, `Value` are pure data and cross every
//!    boundary unchanged
//! 3. **Synchronous by contract**: every operation is a plain in-memory read
//!    or mutation; an embedding that needs concurrent access adds its own
//!    lock or actor around the whole instance
//!
//! ## Quick Start
//!
//! ```rust
//! use graphlet::{GraphDatabase, PropertyMap, Value};
//!
//! # fn main() -> graphlet::Result<()> {
//! let mut db = GraphDatabase::new();
//!
//! let mut props = PropertyMap::new();
//! props.insert("name".into(), Value::from("Alice"));
//! let alice = db.create_node(&["Person"], props);
//! let bob = db.create_node(&["Person"], PropertyMap::new());
//!
//! let edge = db.create_edge("FRIENDS_WITH", &alice.id, &bob.id, PropertyMap::new())?;
//! assert_eq!(edge.id, "e0");
//! assert!(db.are_connected(&alice.id, &bob.id, Some("FRIENDS_WITH")));
//!
//! // Deleting a node cascades to every edge touching it.
//! db.delete_node(&alice.id);
//! assert!(db.get_all_edges().is_empty());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod builder;
pub mod graph;
pub mod model;
pub mod store;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Edge, Node, PropertyMap, QueryResult, Value, props};

// ============================================================================
// Re-exports: Builder
// ============================================================================

pub use builder::NodeBuilder;

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use graph::GraphDatabase;

// ============================================================================
// Re-exports: Record store
// ============================================================================

pub use store::{MemoryStore, Record, RecordStore};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An edge creation named a source node id that is not registered.
    #[error("Source node {0} does not exist")]
    SourceNodeMissing(String),

    /// An edge creation named a target node id that is not registered.
    #[error("Target node {0} does not exist")]
    TargetNodeMissing(String),

    /// A builder was asked to produce an entity from incomplete state.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record-store operation named a table that was never created.
    #[error("Table {0} does not exist")]
    UnknownTable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
