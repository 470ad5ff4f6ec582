//! A store of tables keyed by ID.
//!
//! Items reference other tables by ID through `Action::InvokeTable`; the
//! registry is where those IDs are resolved. Lookups take a shared lock and
//! hand out `Arc<Table>`, so no lock is held while a table is being rolled.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rt_dice::RandomSource;
use tracing::debug;

use crate::error::{TableError, TableResult};
use crate::roller::Roller;
use crate::table::Table;

/// Tables keyed by unique ID.
#[derive(Debug, Default)]
pub struct Registry {
    tables: RwLock<HashMap<String, Arc<Table>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table. Fails if its ID is already taken.
    pub fn add(&self, table: Table) -> TableResult<()> {
        let mut tables = self.tables.write();
        if tables.contains_key(&table.id) {
            return Err(TableError::AlreadyRegistered(table.id));
        }
        debug!(table = %table.id, "registered table");
        tables.insert(table.id.clone(), Arc::new(table));
        Ok(())
    }

    /// Remove and return a table. Fails if the ID is not registered.
    pub fn remove(&self, id: &str) -> TableResult<Arc<Table>> {
        let removed = self
            .tables
            .write()
            .remove(id)
            .ok_or_else(|| TableError::NotRegistered(id.to_string()))?;
        debug!(table = %id, "removed table");
        Ok(removed)
    }

    /// Get a table by ID.
    pub fn get(&self, id: &str) -> TableResult<Arc<Table>> {
        self.tables
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| TableError::NotRegistered(id.to_string()))
    }

    /// Returns true if a table with this ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.tables.read().contains_key(id)
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Returns true if no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    /// All registered IDs, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.tables.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Roll the table with the given ID, resolving its actions here.
    pub fn roll<R: RandomSource + ?Sized>(&self, id: &str, rng: &mut R) -> TableResult<String> {
        Roller::new().with_registry(self).roll_id(id, rng)
    }
}
