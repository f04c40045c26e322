// src/table/mod.rs

pub mod error;
pub mod row;
pub mod shared;

pub use error::{Axis, KeyKind, TableError};
pub use row::{Row, RowRef};
pub use shared::SharedTable;

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

use crate::config::ImportOptions;

/// Lines are split on CRLF only, which is what the spreadsheet export emits.
/// A bare `\n` stays inside the line.
pub const LINE_SEPARATOR: &str = "\r\n";
pub const CELL_SEPARATOR: char = ',';

/// A parsed CSV export, indexed by row position, primary key and header.
///
/// A `Table` is built in one go by [`Table::parse`] and never exposes a
/// half-built state: [`Table::reparse`] only replaces `self` once the new
/// indices are complete. For readers on other threads wrap it in a
/// [`SharedTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Distinct header names, in the order they first appear.
    headers: Vec<String>,
    rows: Vec<Row>,
    #[serde(skip)]
    header_index: HashMap<String, usize>,
    #[serde(skip)]
    primary_key_index: HashMap<String, usize>,
    #[serde(skip)]
    options: ImportOptions,
}

fn trim_quotes(cell: &str) -> &str {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    cell.strip_suffix('"').unwrap_or(cell)
}

impl Table {
    /// Parse `csv` using the offsets in `options`.
    ///
    /// A `header_row` past the last line, or a `data_start_row` more than
    /// one past it, is an [`Axis::Line`] bounds error.
    #[instrument(level = "debug", skip(csv), fields(bytes = csv.len()))]
    pub fn parse(csv: &str, options: ImportOptions) -> Result<Self, TableError> {
        let lines: Vec<&str> = csv.split(LINE_SEPARATOR).collect();

        // ─── header ──────────────────────────────────────────────────────
        let header_line = lines
            .get(options.header_row)
            .ok_or_else(|| TableError::out_of_bounds(Axis::Line, options.header_row, lines.len()))?;

        let mut headers = Vec::new();
        let mut header_index = HashMap::new();
        for (column, name) in header_line.split(CELL_SEPARATOR).enumerate() {
            // later duplicates win the position but keep the first slot
            if header_index.insert(name.to_string(), column).is_none() {
                headers.push(name.to_string());
            } else {
                trace!(header = %name, column, "duplicate header overrides earlier column");
            }
        }

        // ─── data ────────────────────────────────────────────────────────
        if options.data_start_row > lines.len() {
            return Err(TableError::out_of_bounds(
                Axis::Line,
                options.data_start_row,
                lines.len(),
            ));
        }

        let data = &lines[options.data_start_row..];
        let mut rows = Vec::with_capacity(data.len());
        let mut primary_key_index = HashMap::with_capacity(data.len());
        for line in data {
            let position = rows.len();
            let cells: Vec<String> = line
                .split(CELL_SEPARATOR)
                .map(|cell| trim_quotes(cell).to_string())
                .collect();

            if let Some(key) = cells.get(options.primary_key_column) {
                if let Some(previous) = primary_key_index.insert(key.clone(), position) {
                    trace!(key = %key, previous, position, "duplicate primary key, later row wins");
                }
            }
            rows.push(Row::new(cells));
        }

        debug!(
            headers = headers.len(),
            rows = rows.len(),
            keys = primary_key_index.len(),
            "parsed table"
        );

        Ok(Self {
            headers,
            rows,
            header_index,
            primary_key_index,
            options,
        })
    }

    /// Rebuild this table from new text. On error `self` is left untouched.
    pub fn reparse(&mut self, csv: &str, options: ImportOptions) -> Result<(), TableError> {
        *self = Self::parse(csv, options)?;
        Ok(())
    }

    /// The offsets this table was parsed with.
    pub fn options(&self) -> ImportOptions {
        self.options
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> + '_ {
        self.headers.iter().map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(position, row)| RowRef::new(row, position, &self.header_index))
    }

    pub fn row(&self, position: usize) -> Result<RowRef<'_>, TableError> {
        self.rows
            .get(position)
            .map(|row| RowRef::new(row, position, &self.header_index))
            .ok_or_else(|| TableError::out_of_bounds(Axis::Row, position, self.rows.len()))
    }

    /// Row whose primary-key cell equals `key`, or `None`.
    pub fn row_by_key(&self, key: &str) -> Option<RowRef<'_>> {
        let position = *self.primary_key_index.get(key)?;
        self.row(position).ok()
    }

    /// Column position of `header`. A miss is an error, not `None`.
    pub fn column_index(&self, header: &str) -> Result<usize, TableError> {
        self.header_index
            .get(header)
            .copied()
            .ok_or_else(|| TableError::key_not_found(KeyKind::Header, header))
    }

    /// Row position of `key`. A miss is an error, not `None`.
    pub fn row_index(&self, key: &str) -> Result<usize, TableError> {
        self.primary_key_index
            .get(key)
            .copied()
            .ok_or_else(|| TableError::key_not_found(KeyKind::PrimaryKey, key))
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<&str, TableError> {
        self.row(row)?.get(column)
    }

    /// The row position is checked before the header is looked up, so a bad
    /// position fails even when the header is unknown.
    pub fn cell_by_header(&self, row: usize, header: &str) -> Result<Option<&str>, TableError> {
        let row = self.row(row)?;
        match self.header_index.get(header) {
            Some(&column) => row.get(column).map(Some),
            None => Ok(None),
        }
    }

    pub fn cell_by_key(&self, key: &str, column: usize) -> Result<Option<&str>, TableError> {
        match self.row_by_key(key) {
            Some(row) => row.get(column).map(Some),
            None => Ok(None),
        }
    }

    pub fn cell_by_key_header(&self, key: &str, header: &str) -> Result<Option<&str>, TableError> {
        let Some(row) = self.row_by_key(key) else {
            return Ok(None);
        };
        match self.header_index.get(header) {
            Some(&column) => row.get(column).map(Some),
            None => Ok(None),
        }
    }
}
