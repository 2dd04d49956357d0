use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::DataSourceError;
use super::loader::{load_file, LoaderConfig};
use super::model::RecordSet;

// ---------------------------------------------------------------------------
// DataSource – per-path cache of loaded record sets
// ---------------------------------------------------------------------------

/// Loads record sets and keeps them for the lifetime of the source.
///
/// Each distinct path is read from disk once; later reads hand back the same
/// shared, immutable [`RecordSet`]. Failed loads are never cached. Entries live
/// until [`invalidate`](Self::invalidate) or [`clear`](Self::clear) drops them.
#[derive(Debug, Default)]
pub struct DataSource {
    config: LoaderConfig,
    cache: HashMap<PathBuf, Arc<RecordSet>>,
}

impl DataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        DataSource {
            config,
            cache: HashMap::new(),
        }
    }

    /// Return the records stored at `path`, loading them on first use.
    pub fn read(&mut self, path: impl AsRef<Path>) -> Result<Arc<RecordSet>, DataSourceError> {
        let path = path.as_ref();
        if let Some(set) = self.cache.get(path) {
            log::debug!("cache hit for {}", path.display());
            return Ok(Arc::clone(set));
        }

        log::debug!("cache miss for {}", path.display());
        let set = Arc::new(load_file(path, &self.config)?);
        self.cache.insert(path.to_path_buf(), Arc::clone(&set));
        Ok(set)
    }

    /// Drop the cached entry for `path`.  Returns whether one existed.
    pub fn invalidate(&mut self, path: impl AsRef<Path>) -> bool {
        self.cache.remove(path.as_ref()).is_some()
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn is_cached(&self, path: impl AsRef<Path>) -> bool {
        self.cache.contains_key(path.as_ref())
    }

    /// Number of cached paths.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
