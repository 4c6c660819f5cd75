//! The inventory seam: where committed node state lives.
//!
//! The merge session only needs two operations from an inventory — a
//! snapshot of current state and an ordered commit of net changes — so that
//! pair is a trait, with an in-memory registry as the concrete
//! implementation used in tests and single-process deployments.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::parser::HostfileError;
use crate::store::{NodeRecord, RecordSet};

/// Source and sink for committed node records.
pub trait InventoryProvider {
    /// Snapshot of the current inventory, as session-owned working copies.
    fn query_snapshot(&mut self) -> Result<RecordSet, HostfileError>;

    /// Apply net changes. `updates` holds at most one record per name, in
    /// hostfile line order; a host absent from `updates` is unchanged.
    fn commit(&mut self, updates: RecordSet) -> Result<(), HostfileError>;
}

/// In-memory, insertion-ordered node registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    nodes: IndexMap<SmolStr, NodeRecord>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&NodeRecord> {
        self.nodes.get(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Committed records, in first-commit order.
    pub fn records(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.values()
    }
}

impl InventoryProvider for InMemoryInventory {
    fn query_snapshot(&mut self) -> Result<RecordSet, HostfileError> {
        Ok(self.nodes.values().cloned().collect())
    }

    fn commit(&mut self, updates: RecordSet) -> Result<(), HostfileError> {
        for record in updates {
            self.nodes.insert(record.name.clone(), record);
        }
        Ok(())
    }
}
