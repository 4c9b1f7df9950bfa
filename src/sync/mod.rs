//! Synchronization service module for clickup-tasks.
//!
//! This module provides the [`SyncService`] struct which mirrors the remote
//! hierarchy (teams → spaces → folders → lists → tasks) into the local cache
//! and reads it back.
//!
//! A sync walks the tree one level at a time. All requests of a level run
//! concurrently and the level is joined before the next one starts, because
//! the next fan-out is keyed on the complete parent set. Each level is written
//! to the cache as soon as it is complete, so an aborted sync leaves the
//! finished levels in place and nothing from the sync before it.

pub mod storage;

use anyhow::{Context, Result};
use futures::future::join_all;
use log::{error, info};
use std::future::Future;

use crate::backend::{Backend, BackendError};
use crate::entities::{Folder, List, Record, Resource, Space, Task, Team};
use crate::resolver::NameResolver;
use crate::storage::CacheStore;

/// Every record of one sync or one cache read, grouped by kind.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub teams: Vec<Record<Team>>,
    pub spaces: Vec<Record<Space>>,
    pub folders: Vec<Record<Folder>>,
    pub lists: Vec<Record<List>>,
    pub tasks: Vec<Record<Task>>,
}

impl Snapshot {
    /// Name lookups for every kind present in the snapshot.
    pub fn resolver(&self) -> NameResolver {
        let mut resolver = NameResolver::new();
        resolver.insert_all(&self.teams);
        resolver.insert_all(&self.spaces);
        resolver.insert_all(&self.folders);
        resolver.insert_all(&self.lists);
        resolver.insert_all(&self.tasks);
        resolver
    }
}

/// Service that fills the local cache from a remote backend.
///
/// # Example
/// ```rust,no_run
/// use clickup_tasks::backend::factory::create_backend;
/// use clickup_tasks::config::Config;
/// use clickup_tasks::storage::CacheStore;
/// use clickup_tasks::sync::SyncService;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::load(None)?;
/// let backend = create_backend("clickup", &config.api)?;
/// let service = SyncService::new(backend, CacheStore::new(config.cache_dir()?));
///
/// let snapshot = service.sync().await?;
/// let resolver = snapshot.resolver();
/// # Ok(())
/// # }
/// ```
pub struct SyncService {
    backend: Box<dyn Backend>,
    store: CacheStore,
}

impl SyncService {
    pub fn new(backend: Box<dyn Backend>, store: CacheStore) -> Self {
        Self { backend, store }
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Refetch the whole hierarchy and replace the cache with it.
    ///
    /// The previous cache is dropped before the first request, so after a
    /// failed sync only the levels this sync completed are cached.
    ///
    /// # Errors
    /// Returns the first backend error of any level. Levels completed before
    /// the failure stay cached.
    pub async fn sync(&self) -> Result<Snapshot> {
        info!("🔄 Starting sync with {} backend...", self.backend.backend_type());
        let backend: &dyn Backend = &*self.backend;

        if let Err(e) = self.store.clear_kinds().await {
            error!("❌ Failed to clear cache: {e}");
        }

        let teams = backend.list_authorized_teams().await.context("Failed to fetch teams")?;
        self.fetched_and_stored(&teams).await;

        let spaces = fan_out(&teams, |id| async move { backend.list_spaces(&id).await })
            .await
            .context("Failed to fetch spaces")?;
        self.fetched_and_stored(&spaces).await;

        let (folders, folderless) = futures::join!(
            fan_out(&spaces, |id| async move { backend.list_folders(&id).await }),
            fan_out(&spaces, |id| async move { backend.list_folderless_lists(&id).await }),
        );
        let folders = folders.context("Failed to fetch folders")?;
        let folderless = folderless.context("Failed to fetch folderless lists")?;
        self.fetched_and_stored(&folders).await;

        let mut lists = fan_out(&folders, |id| async move { backend.list_lists(&id).await })
            .await
            .context("Failed to fetch lists")?;
        info!("✅ Fetched {} folderless lists", folderless.len());
        lists.extend(folderless);
        self.fetched_and_stored(&lists).await;

        let tasks = fan_out(&lists, |id| async move { backend.list_tasks(&id).await })
            .await
            .context("Failed to fetch tasks")?;
        self.fetched_and_stored(&tasks).await;

        info!("✅ Sync complete");
        Ok(Snapshot {
            teams,
            spaces,
            folders,
            lists,
            tasks,
        })
    }

    /// Sync and return only the tasks.
    pub async fn sync_tasks(&self) -> Result<Vec<Record<Task>>> {
        Ok(self.sync().await?.tasks)
    }

    /// Log a completed level and write it to the cache. Write failures are
    /// logged; the sync carries on.
    async fn fetched_and_stored<T: Resource>(&self, records: &[Record<T>]) {
        info!("✅ Fetched {} {}", records.len(), T::KIND.plural());
        match self.store.write_all(records).await {
            Ok(written) => info!("💾 Stored {} {}", written, T::KIND.plural()),
            Err(e) => error!("❌ Failed to store {}: {e}", T::KIND.plural()),
        }
    }
}

/// Run `fetch` once per parent, concurrently, and flatten the results.
///
/// Every request is awaited before any error is reported, so a level never
/// ends with requests still in flight.
async fn fan_out<P, T, F, Fut>(parents: &[Record<P>], fetch: F) -> Result<Vec<Record<T>>, BackendError>
where
    P: Resource,
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<Record<T>>, BackendError>>,
{
    let results = join_all(parents.iter().map(|parent| fetch(parent.id().to_string()))).await;

    let mut flattened = Vec::new();
    for result in results {
        flattened.extend(result?);
    }
    Ok(flattened)
}
