//! Project progress and cost rollups.

use crate::models::Task;

/// Aggregate figures over a task list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectStats {
    /// Total number of tasks.
    pub total_tasks: usize,
    /// Tasks at 100% completion.
    pub completed_tasks: usize,
    /// Sum of task costs.
    pub total_cost: f64,
    /// Mean completion percentage, rounded half-up. Zero for no tasks.
    pub average_completion: u32,
}

/// Computes the rollup. All zeros for an empty list.
pub fn project_stats(tasks: &[Task]) -> ProjectStats {
    if tasks.is_empty() {
        return ProjectStats::default();
    }

    let total: u32 = tasks.iter().map(|t| u32::from(t.completion)).sum();

    ProjectStats {
        total_tasks: tasks.len(),
        completed_tasks: tasks.iter().filter(|t| t.completion == 100).count(),
        total_cost: tasks.iter().map(|t| t.cost).sum(),
        average_completion: (f64::from(total) / tasks.len() as f64).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;
    use chrono::NaiveDate;

    fn task(name: &str, cost: f64, completion: u8) -> Task {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Task {
            id: 0,
            name: name.to_string(),
            description: String::new(),
            duration_days: 1,
            start_date: start,
            end_date: start,
            dependency: None,
            team: Team::default(),
            human_count: 1,
            bot_count: 0,
            cost,
            completion,
            resource_allocation: None,
            color: String::new(),
        }
    }

    #[test]
    fn test_empty_list_all_zeros() {
        assert_eq!(project_stats(&[]), ProjectStats::default());
    }

    #[test]
    fn test_rollup() {
        let tasks = vec![
            task("A", 100.0, 100),
            task("B", 250.0, 50),
            task("C", 0.0, 0),
        ];
        let stats = project_stats(&tasks);
        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.completed_tasks, 1);
        assert!((stats.total_cost - 350.0).abs() < 1e-10);
        assert_eq!(stats.average_completion, 50);
    }

    #[test]
    fn test_average_rounds_half_up() {
        // (100 + 1) / 2 = 50.5 → 51.
        let tasks = vec![task("A", 0.0, 100), task("B", 0.0, 1)];
        assert_eq!(project_stats(&tasks).average_completion, 51);
    }
}
