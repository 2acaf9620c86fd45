//! Resource allocation heuristic.
//!
//! Annotates each task with a human-readable description of how its
//! work-hours split between assigned humans and bots. A deterministic
//! labeling pass, not an optimizer: dates and resource counts are never
//! changed, only `resource_allocation` is written.
//!
//! Work-hours are `duration * 8` (fixed 8-hour days). For mixed teams the
//! human share comes from [`Team::human_share`]; hours are rounded half-up
//! and per-resource figures may drift from the totals by rounding (accepted).

use crate::models::{Task, Team};

/// Annotates every task in place. Order-independent; each task is processed
/// on its own. Tasks with no humans and no bots are skipped and keep their
/// current `resource_allocation`.
pub fn allocate_resources(tasks: &mut [Task]) {
    for task in tasks.iter_mut() {
        if let Some(label) = describe_allocation(task) {
            task.resource_allocation = Some(label);
        }
    }
}

/// Computes the split label for a single task.
///
/// Returns `None` when the task has no resources at all.
pub fn describe_allocation(task: &Task) -> Option<String> {
    if task.human_count == 0 && task.bot_count == 0 {
        return None;
    }

    let total_hours = task.total_work_hours();

    let label = if task.human_count > 0 && task.bot_count > 0 {
        let human_pct = task.team.human_share();
        let human_hours = round_div(total_hours * human_pct, 100);
        let bot_hours = total_hours - human_hours;
        let per_human = round_div(human_hours, task.human_count);
        let per_bot = round_div(bot_hours, task.bot_count);
        format!(
            "{human_pct}% human ({per_human}h each), {}% bot ({per_bot}h each)",
            100 - human_pct
        )
    } else if task.human_count > 0 {
        let per_human = round_div(total_hours, task.human_count);
        format!("100% human ({per_human}h each)")
    } else {
        let per_bot = round_div(total_hours, task.bot_count);
        format!("100% bot ({per_bot}h each)")
    };

    Some(label)
}

/// Integer division rounded half-up.
fn round_div(numerator: u32, denominator: u32) -> u32 {
    (numerator + denominator / 2) / denominator
}
