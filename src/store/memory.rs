//! In-memory record store.
//!
//! This is the reference implementation of [`RecordStore`]. Records live
//! in per-table vectors in insertion order; there is no persistence and no
//! indexing, every lookup is a scan over the table.

use indexmap::IndexMap;
use tracing::debug;

use crate::model::PropertyMap;
use crate::{Error, Result};
use super::{Record, RecordStore};

/// Table store backed by in-memory vectors.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: IndexMap<String, Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table_mut(&mut self, table: &str) -> Result<&mut Vec<Record>> {
        self.tables
            .get_mut(table)
            .ok_or_else(|| Error::UnknownTable(table.to_owned()))
    }
}

impl RecordStore for MemoryStore {
    fn create_table(&mut self, table: &str) -> Result<()> {
        if !self.tables.contains_key(table) {
            debug!(table, "table created");
            self.tables.insert(table.to_owned(), Vec::new());
        }
        Ok(())
    }

    fn save(&mut self, table: &str, record: Record) -> Result<()> {
        let rows = self.table_mut(table)?;
        match rows.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => rows.push(record),
        }
        Ok(())
    }

    fn find(&self, table: &str, id: &str) -> Result<Option<Record>> {
        let found = self
            .tables
            .get(table)
            .and_then(|rows| rows.iter().find(|r| r.id == id))
            .cloned();
        Ok(found)
    }

    fn update(&mut self, table: &str, id: &str, fields: PropertyMap) -> Result<()> {
        let rows = self.table_mut(table)?;
        if let Some(existing) = rows.iter_mut().find(|r| r.id == id) {
            existing.fields.extend(fields);
        }
        Ok(())
    }

    fn delete(&mut self, table: &str, id: &str) -> Result<()> {
        let rows = self.table_mut(table)?;
        rows.retain(|r| r.id != id);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
