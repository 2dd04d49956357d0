use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a file into a [`RecordSet`](super::model::RecordSet).
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: row {row}: {reason}", path.display())]
    InvalidJsonRecord {
        path: PathBuf,
        row: usize,
        reason: String,
    },
    #[error("unsupported file extension .{extension} for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
}

impl DataSourceError {
    /// Map an I/O error on `path`, folding `NotFound` into its own variant.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            DataSourceError::NotFound { path }
        } else {
            DataSourceError::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DataSourceError::NotFound { .. })
    }
}
