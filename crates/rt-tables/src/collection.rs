//! Ordered groupings of tables for enumeration.

use serde::{Deserialize, Serialize};

use crate::error::TableResult;
use crate::registry::Registry;
use crate::table::Table;

/// An ordered group of tables. IDs and names need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    tables: Vec<Table>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table.
    pub fn push(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Tables in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if the collection holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Every table's name in collection order, empty names included.
    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Every table's category in collection order, duplicates included.
    pub fn categories(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.category.as_str()).collect()
    }

    /// The first table with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Tables in the given category, in collection order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Table> + 'a {
        self.tables.iter().filter(move |t| t.category == category)
    }

    /// Register every table, stopping at the first duplicate ID.
    pub fn into_registry(self) -> TableResult<Registry> {
        let registry = Registry::new();
        for table in self.tables {
            registry.add(table)?;
        }
        Ok(registry)
    }
}

impl FromIterator<Table> for Collection {
    fn from_iter<I: IntoIterator<Item = Table>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

impl IntoIterator for Collection {
    type Item = Table;
    type IntoIter = std::vec::IntoIter<Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}
