// src/import.rs

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::{ImportOptions, SheetRef};
use crate::fetch::{CsvSource, FetchError};
use crate::table::{SharedTable, Table, TableError};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("fetching sheet: {0}")]
    Fetch(#[from] FetchError),

    #[error("parsing sheet: {0}")]
    Table(#[from] TableError),
}

/// Fetch `sheet` from `source` and parse it with `options`.
#[instrument(level = "info", skip(source, sheet), fields(sheet_id = %sheet.sheet_id, gid = %sheet.sheet_gid))]
pub async fn import<S: CsvSource>(
    source: &S,
    sheet: &SheetRef,
    options: ImportOptions,
) -> Result<Table, ImportError> {
    let csv = source.fetch_csv(sheet).await?;
    let table = Table::parse(&csv, options)?;
    info!(rows = table.len(), "imported sheet");
    Ok(table)
}

/// Re-import `sheet` and swap it into `shared`, returning the previous
/// snapshot. Nothing is swapped if the fetch or the parse fails.
pub async fn refresh<S: CsvSource>(
    shared: &SharedTable,
    source: &S,
    sheet: &SheetRef,
    options: ImportOptions,
) -> Result<Arc<Table>, ImportError> {
    let table = import(source, sheet, options).await?;
    Ok(shared.replace(table))
}
