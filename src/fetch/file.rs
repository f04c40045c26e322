// src/fetch/file.rs

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

use super::{CsvSource, FetchError};
use crate::config::SheetRef;

/// Reads previously exported sheets from a directory, one
/// `<sheet_id>_<sheet_gid>.csv` file per tab.
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, sheet: &SheetRef) -> PathBuf {
        self.dir
            .join(format!("{}_{}.csv", sheet.sheet_id, sheet.sheet_gid))
    }
}

impl CsvSource for FileSource {
    #[instrument(level = "debug", skip(self), fields(dir = %self.dir.display()))]
    async fn fetch_csv(&self, sheet: &SheetRef) -> Result<String, FetchError> {
        let path = self.path_for(sheet);
        let text = fs::read_to_string(&path)
            .await
            .map_err(|source| FetchError::Io {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), bytes = text.len(), "read csv file");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_sheet_file() -> Result<()> {
        let tmp = tempdir()?;
        std::fs::write(tmp.path().join("abc_7.csv"), "Name\r\nApple")?;

        let source = FileSource::new(tmp.path());
        let text = source.fetch_csv(&SheetRef::new("abc", "7")).await?;
        assert_eq!(text, "Name\r\nApple");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_reports_path() -> Result<()> {
        let tmp = tempdir()?;
        let source = FileSource::new(tmp.path());
        let sheet = SheetRef::new("nope", "0");

        match source.fetch_csv(&sheet).await {
            Err(FetchError::Io { path, source }) => {
                assert_eq!(path, tmp.path().join("nope_0.csv"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}"),
        }
        Ok(())
    }
}
