//! Display order for tasks.
//!
//! Prioritized tasks come first, then lower priority `orderindex`, then lower
//! status `orderindex`, then older tasks. Tasks equal on all of these keep
//! their relative input order (the sort is stable).

use std::cmp::Ordering;

use crate::entities::{Record, Task};

pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    let priority = match (&a.priority, &b.priority) {
        (Some(pa), Some(pb)) => pa.orderindex.cmp(&pb.orderindex),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    priority
        .then_with(|| a.status.orderindex.cmp(&b.status.orderindex))
        .then_with(|| a.date_created.unwrap_or(i64::MAX).cmp(&b.date_created.unwrap_or(i64::MAX)))
}

pub fn sort_tasks(tasks: &mut [Record<Task>]) {
    tasks.sort_by(|a, b| compare_tasks(&a.data, &b.data));
}
