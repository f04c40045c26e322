// src/table/row.rs

use serde::Serialize;
use std::collections::HashMap;
use std::ops::Index;

use super::error::{Axis, KeyKind, TableError};

/// One parsed data line: its quote-trimmed cells in column order.
///
/// A row knows nothing about headers. Name-based access goes through
/// [`RowRef`], which borrows the owning table's header index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub(crate) fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Positional cell access; a short row is a bounds error.
    pub fn get(&self, column: usize) -> Result<&str, TableError> {
        self.cells
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| TableError::out_of_bounds(Axis::Column, column, self.cells.len()))
    }
}

impl Index<usize> for Row {
    type Output = str;

    fn index(&self, column: usize) -> &str {
        &self.cells[column]
    }
}

/// A row borrowed from a [`Table`](super::Table) together with the table's
/// header index.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    row: &'a Row,
    position: usize,
    header_index: &'a HashMap<String, usize>,
}

impl<'a> RowRef<'a> {
    pub(crate) fn new(row: &'a Row, position: usize, header_index: &'a HashMap<String, usize>) -> Self {
        Self {
            row,
            position,
            header_index,
        }
    }

    /// Emitted row position inside the table.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn row(&self) -> &'a Row {
        self.row
    }

    pub fn cells(&self) -> &'a [String] {
        self.row.cells()
    }

    pub fn len(&self) -> usize {
        self.row.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    pub fn get(&self, column: usize) -> Result<&'a str, TableError> {
        self.row.get(column)
    }

    /// Cell under `header`.
    ///
    /// Unlike `Table::cell_by_header`, an unknown header here is a
    /// `KeyNotFound` error rather than `None`.
    pub fn get_by_header(&self, header: &str) -> Result<&'a str, TableError> {
        let column = self
            .header_index
            .get(header)
            .copied()
            .ok_or_else(|| TableError::key_not_found(KeyKind::Header, header))?;
        self.row.get(column)
    }
}
