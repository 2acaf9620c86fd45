//! Schedule calculator: forward date propagation.
//!
//! Walks the resolved order and assigns concrete dates: a task with a
//! predecessor starts the day its predecessor ends; an independent task
//! keeps its own provisional start. `end = start + duration` days, plain
//! calendar arithmetic — no business-day or timezone logic.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::models::Task;

/// Assigns start/end dates to every task, in place.
///
/// `order` must come from [`resolve_order`](super::resolve_order); it
/// guarantees each predecessor's dates are final before any dependent is
/// processed. A predecessor name absent from the list (cannot happen after a
/// resolver run) falls back to the task's own provisional start.
pub fn propagate_dates(tasks: &mut [Task], order: &[usize]) {
    let mut finished: HashMap<String, NaiveDate> = HashMap::with_capacity(order.len());

    for &idx in order {
        let task = &mut tasks[idx];

        let earliest_start = task
            .dependency
            .as_deref()
            .and_then(|dep| finished.get(dep).copied())
            .unwrap_or(task.start_date);

        task.start_date = earliest_start;
        task.end_date = earliest_start + Duration::days(i64::from(task.duration_days));

        finished.insert(task.name.clone(), task.end_date);
    }
}
