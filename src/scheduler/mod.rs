//! Scheduling pipeline.
//!
//! Three synchronous stages run to completion in order:
//!
//! 1. **resolve** — topological ordering of tasks by dependency, with cycle
//!    detection ([`resolver`])
//! 2. **calculate** — forward propagation of start/end dates through the
//!    resolved order ([`calculator`])
//! 3. **allocate** — human/bot work-hour annotation
//!    ([`allocation`](crate::allocation))
//!
//! A cycle aborts the run before any date is written, so no task is ever
//! left in a half-scheduled state.

mod calculator;
mod resolver;

pub use calculator::propagate_dates;
pub use resolver::resolve_order;

use tracing::debug;

use crate::allocation::allocate_resources;
use crate::error::{Error, Result};
use crate::models::Task;
use crate::store::TaskStore;

/// Runs the full pipeline (resolve → calculate → allocate) over the store.
///
/// Mutates tasks in place and returns clones in dependency order, dates and
/// allocations populated. Fails with [`Error::NoTasks`] on an empty store and
/// [`Error::CircularDependency`] when the dependency graph has a cycle; in
/// both cases no task is modified.
pub fn generate_schedule(store: &mut TaskStore) -> Result<Vec<Task>> {
    if store.is_empty() {
        return Err(Error::NoTasks);
    }

    let order = resolve_order(store.tasks())?;
    debug!(task_count = order.len(), "dependency order resolved");

    let tasks = store.tasks_mut();
    propagate_dates(tasks, &order);
    allocate_resources(tasks);

    Ok(order.iter().map(|&i| tasks[i].clone()).collect())
}

/// Runs the allocation stage only: no resolution, no date changes.
///
/// Returns the live task list in insertion order with `resource_allocation`
/// refreshed. Fails with [`Error::NoTasks`] on an empty store.
pub fn allocate_only(store: &mut TaskStore) -> Result<&[Task]> {
    if store.is_empty() {
        return Err(Error::NoTasks);
    }

    debug!(task_count = store.len(), "allocation-only run");
    allocate_resources(store.tasks_mut());
    Ok(store.tasks())
}
