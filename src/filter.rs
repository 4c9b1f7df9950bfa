//! Name-based task filtering.
//!
//! Each dimension holds alternatives (OR); every non-empty dimension must be
//! satisfied (AND). Names compare case-insensitively against the resolved
//! name at that level, so a task whose ancestor cannot be resolved never
//! matches a constrained dimension.

use crate::entities::{Record, ResourceKind, Task};
use crate::resolver::NameResolver;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub teams: Vec<String>,
    pub spaces: Vec<String>,
    pub folders: Vec<String>,
    pub lists: Vec<String>,
    pub tasks: Vec<String>,
}

impl Filter {
    /// Requested names for one level.
    pub fn values(&self, kind: ResourceKind) -> &[String] {
        match kind {
            ResourceKind::Team => &self.teams,
            ResourceKind::Space => &self.spaces,
            ResourceKind::Folder => &self.folders,
            ResourceKind::List => &self.lists,
            ResourceKind::Task => &self.tasks,
        }
    }

    pub fn is_empty(&self) -> bool {
        ResourceKind::ALL.iter().all(|kind| self.values(*kind).is_empty())
    }

    pub fn matches(&self, task: &Task, resolver: &NameResolver) -> bool {
        ResourceKind::ALL.into_iter().all(|kind| {
            let wanted = self.values(kind);
            if wanted.is_empty() {
                return true;
            }
            match resolver.resolve(task, kind) {
                Some(name) => {
                    let name = name.to_lowercase();
                    wanted.iter().any(|w| w.to_lowercase() == name)
                }
                None => false,
            }
        })
    }
}

/// Keep the tasks that pass `filter`, preserving their order.
pub fn filter_tasks(tasks: Vec<Record<Task>>, filter: &Filter, resolver: &NameResolver) -> Vec<Record<Task>> {
    if filter.is_empty() {
        return tasks;
    }
    tasks
        .into_iter()
        .filter(|task| filter.matches(&task.data, resolver))
        .collect()
}
