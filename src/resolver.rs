//! Id → name lookups for every level of the hierarchy.
//!
//! The resolver is rebuilt on every run from whatever records are at hand,
//! freshly synced or read back from the cache. Missing entries are normal:
//! a cache can be partial after an interrupted sync, so every lookup returns
//! an `Option` and path reconstruction simply skips gaps.

use std::collections::HashMap;

use crate::constants::HIERARCHY_SEPARATOR;
use crate::entities::{Record, Resource, ResourceKind, Task};

#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    teams: HashMap<String, String>,
    spaces: HashMap<String, String>,
    folders: HashMap<String, String>,
    lists: HashMap<String, String>,
    tasks: HashMap<String, String>,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the names of `records` under their kind. Later ids win.
    pub fn insert_all<T: Resource>(&mut self, records: &[Record<T>]) {
        let names = self.names_mut(T::KIND);
        for record in records {
            names.insert(record.id().to_string(), record.name().to_string());
        }
    }

    fn names_mut(&mut self, kind: ResourceKind) -> &mut HashMap<String, String> {
        match kind {
            ResourceKind::Team => &mut self.teams,
            ResourceKind::Space => &mut self.spaces,
            ResourceKind::Folder => &mut self.folders,
            ResourceKind::List => &mut self.lists,
            ResourceKind::Task => &mut self.tasks,
        }
    }

    fn names(&self, kind: ResourceKind) -> &HashMap<String, String> {
        match kind {
            ResourceKind::Team => &self.teams,
            ResourceKind::Space => &self.spaces,
            ResourceKind::Folder => &self.folders,
            ResourceKind::List => &self.lists,
            ResourceKind::Task => &self.tasks,
        }
    }

    /// Name registered for `id` under `kind`.
    pub fn name(&self, kind: ResourceKind, id: &str) -> Option<&str> {
        self.names(kind).get(id).map(String::as_str)
    }

    /// Resolved name of the task's ancestor (or the task itself) at `kind`.
    pub fn resolve(&self, task: &Task, kind: ResourceKind) -> Option<&str> {
        let id = match kind {
            ResourceKind::Team => task.team_id.as_deref(),
            ResourceKind::Space => task.space_id(),
            ResourceKind::Folder => task.folder_id(),
            ResourceKind::List => task.list_id(),
            ResourceKind::Task => Some(task.id.as_str()),
        }?;
        self.name(kind, id)
    }

    /// `team/space/folder/list` for a task, skipping levels that cannot be
    /// resolved. Empty when nothing resolves.
    pub fn hierarchy_path(&self, task: &Task) -> String {
        [ResourceKind::Team, ResourceKind::Space, ResourceKind::Folder, ResourceKind::List]
            .into_iter()
            .filter_map(|kind| self.resolve(task, kind))
            .collect::<Vec<_>>()
            .join(HIERARCHY_SEPARATOR)
    }
}
