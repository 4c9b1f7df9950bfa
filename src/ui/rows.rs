//! Conversion of tasks into the display strings of one table row.

use chrono::{DateTime, TimeZone};

use crate::entities::{Record, Task};
use crate::resolver::NameResolver;
use crate::utils::datetime::format_due_date_at;

/// One table row, in `TABLE_HEADERS` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: String,
    pub status: String,
    pub hierarchy: String,
    pub priority: String,
    pub due: String,
    pub name: String,
}

impl TaskRow {
    pub fn build<Tz: TimeZone>(task: &Task, resolver: &NameResolver, now: &DateTime<Tz>) -> Self {
        Self {
            id: task.id.clone(),
            status: format!("{} ({})", task.status.status.to_lowercase(), task.status.orderindex),
            hierarchy: resolver.hierarchy_path(task),
            priority: task
                .priority
                .as_ref()
                .map(|p| format!("{} ({})", p.priority, p.orderindex))
                .unwrap_or_default(),
            due: format_due_date_at(task.due_date, now),
            name: task.name.clone(),
        }
    }

    pub fn cells(&self) -> [&str; 6] {
        [
            &self.id,
            &self.status,
            &self.hierarchy,
            &self.priority,
            &self.due,
            &self.name,
        ]
    }
}

/// Rows for already filtered and sorted tasks.
pub fn build_rows<Tz: TimeZone>(tasks: &[Record<Task>], resolver: &NameResolver, now: &DateTime<Tz>) -> Vec<TaskRow> {
    tasks
        .iter()
        .map(|task| TaskRow::build(&task.data, resolver, now))
        .collect()
}
