// src/fetch/mod.rs

pub mod file;

pub use file::FileSource;

use reqwest::Client;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::SheetRef;

/// Host serving the CSV export of shared spreadsheets.
pub const DEFAULT_BASE_URL: &str = "https://docs.google.com/";

#[derive(Error, Debug)]
pub enum FetchError {
    /// Network failure or a non-2xx response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("building export url: {0}")]
    Url(#[from] url::ParseError),

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that can hand back the raw CSV text of a sheet.
pub trait CsvSource {
    fn fetch_csv(&self, sheet: &SheetRef) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Downloads a sheet tab through the spreadsheet CSV export endpoint.
///
/// One GET per call: no retries, no caching. The caller owns the
/// [`Client`] and decides what to do with a [`FetchError`].
#[derive(Debug, Clone)]
pub struct SheetFetcher {
    client: Client,
    base: Url,
}

impl SheetFetcher {
    pub fn new(client: Client) -> Self {
        let base = Url::parse(DEFAULT_BASE_URL).expect("default base url should parse");
        Self { client, base }
    }

    /// Point the fetcher at another host. `base` should end with `/`.
    pub fn with_base_url(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    /// `{base}spreadsheets/d/{sheet_id}/export?format=csv&gid={sheet_gid}`
    pub fn export_url(&self, sheet_id: &str, sheet_gid: &str) -> Result<Url, FetchError> {
        let mut url = self
            .base
            .join(&format!("spreadsheets/d/{}/export", sheet_id))?;
        url.query_pairs_mut()
            .append_pair("format", "csv")
            .append_pair("gid", sheet_gid);
        Ok(url)
    }

    #[instrument(level = "info", skip(self))]
    pub async fn fetch(&self, sheet_id: &str, sheet_gid: &str) -> Result<String, FetchError> {
        let url = self.export_url(sheet_id, sheet_gid)?;
        debug!(%url, "requesting csv export");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        info!(bytes = body.len(), "fetched csv export");
        Ok(body)
    }
}

impl CsvSource for SheetFetcher {
    async fn fetch_csv(&self, sheet: &SheetRef) -> Result<String, FetchError> {
        self.fetch(&sheet.sheet_id, &sheet.sheet_gid).await
    }
}
