use log::{debug, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::CACHE_FILE_EXTENSION;
use crate::entities::{Record, Resource, ResourceKind};

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The kind's directory does not exist: nothing was ever synced.
    #[error("no cached {0} records; run a sync first")]
    NotSynced(ResourceKind),

    #[error("cache I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CacheError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// File-per-record store rooted at a cache directory.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the records of `kind`.
    pub fn kind_dir(&self, kind: ResourceKind) -> PathBuf {
        self.root.join(kind.plural())
    }

    /// Replace everything stored for `T::KIND` with `records`.
    ///
    /// Clearing or creating the kind directory is an error. Failing to write a
    /// single record is logged and that record is skipped. Returns the number
    /// of records written.
    pub async fn write_all<T: Resource>(&self, records: &[Record<T>]) -> Result<usize, CacheError> {
        let dir = self.kind_dir(T::KIND);

        remove_dir(&dir).await?;
        fs::create_dir_all(&dir).await.map_err(|e| CacheError::io(&dir, e))?;

        let mut written = 0;
        for record in records {
            match self.write_record(&dir, record).await {
                Ok(()) => written += 1,
                Err(e) => warn!("⚠️  Skipping {} {}: {e}", T::KIND, record.id()),
            }
        }

        debug!("Cached {written}/{} {} records in {}", records.len(), T::KIND, dir.display());
        Ok(written)
    }

    async fn write_record<T: Resource>(&self, dir: &Path, record: &Record<T>) -> Result<(), CacheError> {
        let path = record_path(dir, record.id())
            .ok_or_else(|| CacheError::io(dir, std::io::Error::new(ErrorKind::InvalidInput, "unsafe record id")))?;

        let bytes = serde_json::to_vec(&record.raw).map_err(|e| CacheError::io(&path, e.into()))?;
        fs::write(&path, bytes).await.map_err(|e| CacheError::io(&path, e))
    }

    /// Every record currently stored for `T::KIND`, in directory order.
    ///
    /// A missing kind directory yields [`CacheError::NotSynced`]. Files that
    /// cannot be read or parsed are logged and skipped.
    pub async fn read_all<T: Resource>(&self) -> Result<Vec<Record<T>>, CacheError> {
        let dir = self.kind_dir(T::KIND);

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(CacheError::NotSynced(T::KIND)),
            Err(e) => return Err(CacheError::io(&dir, e)),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| CacheError::io(&dir, e))? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(CACHE_FILE_EXTENSION) {
                continue;
            }

            let bytes = match fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("⚠️  Cannot read cached {} {}: {e}", T::KIND, path.display());
                    continue;
                }
            };

            match Record::<T>::from_slice(&bytes) {
                Ok(record) => records.push(record),
                Err(e) => warn!("⚠️  Skipping malformed cached {} {}: {e}", T::KIND, path.display()),
            }
        }

        Ok(records)
    }

    /// Remove the whole cache root.
    pub async fn clear(&self) -> Result<(), CacheError> {
        remove_dir(&self.root).await
    }

    /// Remove the directory of every kind, leaving other files under the
    /// root (such as the log file) in place. Afterwards every kind reads as
    /// [`CacheError::NotSynced`].
    pub async fn clear_kinds(&self) -> Result<(), CacheError> {
        for kind in ResourceKind::ALL {
            remove_dir(&self.kind_dir(kind)).await?;
        }
        Ok(())
    }
}

/// `remove_dir_all` that treats an already missing directory as removed.
async fn remove_dir(dir: &Path) -> Result<(), CacheError> {
    match fs::remove_dir_all(dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CacheError::io(dir, e)),
    }
}

/// `<dir>/<id>.json`, or `None` when the id cannot be used as a file name.
fn record_path(dir: &Path, id: &str) -> Option<PathBuf> {
    let unsafe_id = id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']);
    if unsafe_id {
        return None;
    }
    Some(dir.join(format!("{id}.{CACHE_FILE_EXTENSION}")))
}
