// File: crates/case-chart-core/src/loader.rs
// Summary: Async data sources yielding a region's raw records (JSON files or in-memory).

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::LoadError;
use crate::region::Region;
use crate::series::RawRecord;

/// Where a region's records come from. No retries, no timeout.
#[async_trait]
pub trait DataSource {
    async fn fetch(&self, region: Region) -> Result<Vec<RawRecord>, LoadError>;
}

/// Reads `<root>/<region>_data.json`.
#[derive(Clone, Debug)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, region: Region) -> PathBuf {
        self.root.join(region.data_file())
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self, region: Region) -> Result<Vec<RawRecord>, LoadError> {
        let path = self.path_for(region);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| LoadError::Io { path: path.clone(), source })?;
        let records: Vec<RawRecord> =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::Json { path: path.clone(), source })?;
        debug!(%region, path = %path.display(), records = records.len(), "loaded case data");
        Ok(records)
    }
}

/// Serves records from memory, optionally after a per-region delay.
/// A region without records fails like a missing file.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    data: HashMap<Region, Vec<RawRecord>>,
    delays: HashMap<Region, Duration>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, region: Region, records: Vec<RawRecord>) -> Self {
        self.data.insert(region, records);
        self
    }

    pub fn with_delay(mut self, region: Region, delay: Duration) -> Self {
        self.delays.insert(region, delay);
        self
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn fetch(&self, region: Region) -> Result<Vec<RawRecord>, LoadError> {
        if let Some(delay) = self.delays.get(&region) {
            tokio::time::sleep(*delay).await;
        }
        self.data.get(&region).cloned().ok_or_else(|| LoadError::Io {
            path: PathBuf::from(region.data_file()),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no records for region"),
        })
    }
}
