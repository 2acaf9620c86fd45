//! Local project-structure recommendations.
//!
//! Rule-of-thumb advice derived from the task list alone, no provider
//! involved: parallelization opportunities, tasks worth splitting, and
//! dependency-chain warnings.

use crate::models::Task;

/// Duration above which a task is suggested for splitting.
const LONG_TASK_DAYS: u32 = 10;

/// Produces advisory strings for the given task list.
///
/// Empty when nothing stands out.
pub fn recommendations(tasks: &[Task]) -> Vec<String> {
    let mut out = Vec::new();

    let independent = tasks.iter().filter(|t| !t.has_dependency()).count();
    if independent > 1 {
        out.push(
            "Multiple independent tasks detected. Consider parallel execution.".to_string(),
        );
    }

    for task in tasks.iter().filter(|t| t.duration_days > LONG_TASK_DAYS) {
        out.push(format!(
            "'{}' has a long duration ({} days). Consider breaking it into smaller tasks.",
            task.name, task.duration_days
        ));
    }

    let dependent = tasks.iter().filter(|t| t.has_dependency()).count();
    if dependent * 2 > tasks.len() {
        out.push(
            "Complex dependency chain detected. Consider creating milestone checkpoints."
                .to_string(),
        );
    }

    out
}
