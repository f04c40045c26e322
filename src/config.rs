// src/config.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Row/column offsets used when turning CSV text into a [`Table`](crate::Table).
/// All offsets are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Line holding the column names.
    pub header_row: usize,
    /// First line treated as data; every line after it is data too.
    pub data_start_row: usize,
    /// Column whose values index rows by primary key.
    pub primary_key_column: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            header_row: 0,
            data_start_row: 1,
            primary_key_column: 0,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid share link: {0}")]
    Url(#[from] url::ParseError),

    #[error("no spreadsheet id in {0}")]
    MissingSheetId(String),
}

const DEFAULT_GID: &str = "0";

fn default_gid() -> String {
    DEFAULT_GID.to_string()
}

/// Identifies one tab of a shared spreadsheet.
///
/// For `https://docs.google.com/spreadsheets/d/1X2Y3Z/edit#gid=123456` the
/// `sheet_id` is `1X2Y3Z` and the `sheet_gid` is `123456`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetRef {
    pub sheet_id: String,
    #[serde(default = "default_gid")]
    pub sheet_gid: String,
}

impl SheetRef {
    pub fn new(sheet_id: impl Into<String>, sheet_gid: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            sheet_gid: sheet_gid.into(),
        }
    }

    /// Pull the id and gid out of a link copied from the browser.
    /// A link without a gid refers to the first tab.
    pub fn from_share_url(link: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(link)?;

        let sheet_id = url
            .path_segments()
            .and_then(|mut segments| {
                segments.find(|s| *s == "d")?;
                segments.next()
            })
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ConfigError::MissingSheetId(link.to_string()))?
            .to_string();

        // gid shows up in the fragment (`#gid=`) or, on export links, the query
        let from_fragment = url.fragment().and_then(|fragment| {
            fragment
                .split('&')
                .find_map(|pair| pair.strip_prefix("gid="))
                .map(str::to_string)
        });
        let sheet_gid = from_fragment
            .or_else(|| {
                url.query_pairs()
                    .find(|(k, _)| k == "gid")
                    .map(|(_, v)| v.into_owned())
            })
            .unwrap_or_else(default_gid);

        Ok(Self {
            sheet_id,
            sheet_gid,
        })
    }
}
