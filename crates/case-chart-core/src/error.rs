// File: crates/case-chart-core/src/error.rs
// Summary: Error types for loading, record parsing and rendering.

use std::path::PathBuf;

use thiserror::Error;

use crate::region::Region;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One raw record that could not be turned into a case record.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("unparseable submission_date {value:?}")]
    Date { value: String },
    #[error("non-numeric new_cases {value:?}")]
    Count { value: String },
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("loading {region} data failed")]
    Load {
        region: Region,
        #[source]
        source: LoadError,
    },
    #[error("series {label} has no records")]
    EmptySeries { label: String },
    #[error("record {index} is malformed")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
