//! Fetch a shared spreadsheet tab as CSV and query it as an indexed table.
//!
//! ```no_run
//! # async fn demo() -> Result<(), sheetcsv::ImportError> {
//! use sheetcsv::{import, ImportOptions, SheetFetcher, SheetRef};
//!
//! let fetcher = SheetFetcher::new(reqwest::Client::new());
//! let sheet = SheetRef::new("1X2Y3Z", "0");
//! let table = import(&fetcher, &sheet, ImportOptions::default()).await?;
//!
//! for row in table.rows() {
//!     println!("{:?}", row.get_by_header("Name"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod fetch;
pub mod import;
pub mod table;

pub use config::{ConfigError, ImportOptions, SheetRef};
pub use fetch::{CsvSource, FetchError, FileSource, SheetFetcher};
pub use import::{import, refresh, ImportError};
pub use table::{Axis, KeyKind, Row, RowRef, SharedTable, Table, TableError};
