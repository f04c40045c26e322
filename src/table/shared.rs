// src/table/shared.rs

use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use super::{Table, TableError};
use crate::config::ImportOptions;

/// A table that can be reparsed while other threads read it.
///
/// Readers take an immutable [`Arc<Table>`] snapshot. A reparse builds the
/// new table outside the lock and swaps the pointer, so a reader sees either
/// the old table or the new one, never a mix.
#[derive(Debug)]
pub struct SharedTable {
    current: RwLock<Arc<Table>>,
}

impl SharedTable {
    pub fn new(table: Table) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    pub fn parse(csv: &str, options: ImportOptions) -> Result<Self, TableError> {
        Ok(Self::new(Table::parse(csv, options)?))
    }

    /// The table as of now. Later swaps do not affect the returned value.
    pub fn snapshot(&self) -> Arc<Table> {
        // a poisoned lock still guards a complete table
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swap in `table`, returning the one it replaced.
    pub fn replace(&self, table: Table) -> Arc<Table> {
        let next = Arc::new(table);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Parse `csv` and swap it in. On error the current table stays.
    pub fn reparse(&self, csv: &str, options: ImportOptions) -> Result<Arc<Table>, TableError> {
        let table = Table::parse(csv, options)?;
        debug!(rows = table.len(), "swapping in reparsed table");
        Ok(self.replace(table))
    }
}

impl From<Table> for SharedTable {
    fn from(table: Table) -> Self {
        Self::new(table)
    }
}
