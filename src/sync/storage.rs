use anyhow::Result;
use log::info;

use crate::entities::{Record, Resource, Task};
use crate::storage::{CacheError, CacheStore};
use crate::sync::{Snapshot, SyncService};

impl SyncService {
    /// Read everything currently cached, without touching the network.
    ///
    /// Kinds that were never synced load as empty.
    ///
    /// # Errors
    /// Returns an error if a cache directory exists but cannot be listed
    pub async fn load_cached(&self) -> Result<Snapshot> {
        load_snapshot(self.store()).await
    }

    /// Cached tasks only.
    pub async fn load_cached_tasks(&self) -> Result<Vec<Record<Task>>> {
        Ok(read_or_empty::<Task>(self.store()).await?)
    }
}

/// Read every kind from `store` into a [`Snapshot`].
pub async fn load_snapshot(store: &CacheStore) -> Result<Snapshot> {
    Ok(Snapshot {
        teams: read_or_empty(store).await?,
        spaces: read_or_empty(store).await?,
        folders: read_or_empty(store).await?,
        lists: read_or_empty(store).await?,
        tasks: read_or_empty(store).await?,
    })
}

async fn read_or_empty<T: Resource>(store: &CacheStore) -> Result<Vec<Record<T>>, CacheError> {
    match store.read_all::<T>().await {
        Ok(records) => {
            info!("📂 Loaded {} cached {}", records.len(), T::KIND.plural());
            Ok(records)
        }
        Err(CacheError::NotSynced(kind)) => {
            info!("📂 No cached {} (never synced)", kind.plural());
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
