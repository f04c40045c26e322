// src/table/error.rs

use std::fmt;
use thiserror::Error;

/// Which lookup index a missing key was looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Header,
    PrimaryKey,
}

impl KeyKind {
    pub fn as_str(&self) -> &str {
        match self {
            KeyKind::Header => "header",
            KeyKind::PrimaryKey => "primary key",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The positional dimension an out-of-range index was applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A raw CSV line, checked while parsing.
    Line,
    /// An emitted data row.
    Row,
    /// A cell within a row.
    Column,
}

impl Axis {
    pub fn as_str(&self) -> &str {
        match self {
            Axis::Line => "line",
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while building or querying a [`Table`](super::Table).
///
/// Lookups that are documented to return `None` on a miss never produce
/// `KeyNotFound`; only the explicit `column_index` / `row_index` resolvers
/// (and header access through a row view) do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("{kind} not found: {key:?}")]
    KeyNotFound { kind: KeyKind, key: String },

    #[error("{axis} index {index} out of bounds (len {len})")]
    OutOfBounds { axis: Axis, index: usize, len: usize },
}

impl TableError {
    pub(crate) fn key_not_found(kind: KeyKind, key: &str) -> Self {
        TableError::KeyNotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub(crate) fn out_of_bounds(axis: Axis, index: usize, len: usize) -> Self {
        TableError::OutOfBounds { axis, index, len }
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, TableError::KeyNotFound { .. })
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, TableError::OutOfBounds { .. })
    }
}
