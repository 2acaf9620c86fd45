//! Dependency resolver: cycle-detecting topological order.
//!
//! Orders tasks so every task appears strictly after its single predecessor.
//! DFS with three traversal states: fully visited, on the current recursion
//! path, and discovered-cycle. Each recursive call receives its own copy of
//! the path set, so sibling branches never share cycle state.
//!
//! A dependency name that matches no task is traversed as "no dependency".
//! Insertion validation rejects that case, so this leniency only matters for
//! data that entered by other routes (restored snapshots, hand-built lists).
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::models::Task;

/// Produces a dependency-respecting ordering of `tasks`.
///
/// Returns indices into the input slice: every predecessor index appears
/// strictly before any task depending on it. Independent tasks keep the
/// store's insertion order among themselves, so the output is deterministic
/// for a fixed input.
///
/// Fails with [`Error::CircularDependency`] naming every task found on a
/// cycle (a self-dependency is a cycle of size one); no partial ordering is
/// returned.
pub fn resolve_order(tasks: &[Task]) -> Result<Vec<usize>> {
    let index: HashMap<&str, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.as_str(), i))
        .collect();

    let mut visited: HashSet<usize> = HashSet::new();
    let mut cycles: Vec<usize> = Vec::new();
    let mut order: Vec<usize> = Vec::with_capacity(tasks.len());

    for i in 0..tasks.len() {
        if !visited.contains(&i) {
            visit(i, tasks, &index, &HashSet::new(), &mut visited, &mut cycles, &mut order);
        }
    }

    if !cycles.is_empty() {
        return Err(Error::CircularDependency(cycle_members(tasks, &index, &cycles)));
    }

    Ok(order)
}

/// Expands each back-edge task into the full membership of its cycle.
///
/// Out-degree is at most one, so following dependency links from a task on a
/// cycle walks the whole cycle and returns to the start.
fn cycle_members(tasks: &[Task], index: &HashMap<&str, usize>, marked: &[usize]) -> Vec<String> {
    let mut seen: HashSet<usize> = HashSet::new();
    let mut names = Vec::new();

    for &start in marked {
        let mut cur = start;
        loop {
            if !seen.insert(cur) {
                break;
            }
            names.push(tasks[cur].name.clone());
            match tasks[cur].dependency.as_deref().and_then(|d| index.get(d)) {
                Some(&next) if next != start => cur = next,
                _ => break,
            }
        }
    }

    names
}

fn visit(
    idx: usize,
    tasks: &[Task],
    index: &HashMap<&str, usize>,
    path: &HashSet<usize>,
    visited: &mut HashSet<usize>,
    cycles: &mut Vec<usize>,
    order: &mut Vec<usize>,
) {
    if cycles.contains(&idx) {
        return;
    }
    if path.contains(&idx) {
        cycles.push(idx);
        return;
    }
    if visited.contains(&idx) {
        return;
    }

    // Fresh copy per branch: a cycle on one branch must not poison siblings.
    let mut branch = path.clone();
    branch.insert(idx);

    if let Some(dep_name) = tasks[idx].dependency.as_deref() {
        if let Some(&dep_idx) = index.get(dep_name) {
            visit(dep_idx, tasks, index, &branch, visited, cycles, order);
        }
    }

    visited.insert(idx);
    order.push(idx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;
    use chrono::NaiveDate;

    fn task(name: &str, dependency: Option<&str>) -> Task {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Task {
            id: 0,
            name: name.to_string(),
            description: String::new(),
            duration_days: 1,
            start_date: start,
            end_date: start,
            dependency: dependency.map(str::to_string),
            team: Team::default(),
            human_count: 1,
            bot_count: 0,
            cost: 0.0,
            completion: 0,
            resource_allocation: None,
            color: String::new(),
        }
    }

    fn names(tasks: &[Task], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| tasks[i].name.clone()).collect()
    }

    #[test]
    fn test_predecessor_before_dependent() {
        let tasks = vec![task("B", Some("A")), task("A", None)];
        let order = resolve_order(&tasks).unwrap();
        assert_eq!(names(&tasks, &order), vec!["A", "B"]);
    }

    #[test]
    fn test_chain_order() {
        let tasks = vec![task("C", Some("B")), task("A", None), task("B", Some("A"))];
        let order = resolve_order(&tasks).unwrap();
        assert_eq!(names(&tasks, &order), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_every_task_appears_once() {
        let tasks = vec![
            task("A", None),
            task("B", Some("A")),
            task("C", Some("A")),
            task("D", None),
        ];
        let order = resolve_order(&tasks).unwrap();
        let mut seen = order.clone();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_independent_tasks_keep_insertion_order() {
        let tasks = vec![task("Z", None), task("M", None), task("A", None)];
        let order = resolve_order(&tasks).unwrap();
        assert_eq!(names(&tasks, &order), vec!["Z", "M", "A"]);
    }

    #[test]
    fn test_deterministic() {
        let tasks = vec![task("B", Some("A")), task("A", None), task("C", Some("B"))];
        let first = resolve_order(&tasks).unwrap();
        let second = resolve_order(&tasks).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_self_dependency_is_cycle() {
        let tasks = vec![task("A", Some("A"))];
        let err = resolve_order(&tasks).unwrap_err();
        assert!(matches!(err, Error::CircularDependency(names) if names == vec!["A"]));
    }

    #[test]
    fn test_two_task_cycle() {
        let tasks = vec![task("A", Some("B")), task("B", Some("A"))];
        let err = resolve_order(&tasks).unwrap_err();
        match err {
            Error::CircularDependency(names) => {
                assert!(names.contains(&"A".to_string()));
                assert!(names.contains(&"B".to_string()));
                assert_eq!(names.len(), 2);
            }
            other => panic!("expected cycle error, got {other}"),
        }
    }

    #[test]
    fn test_cycle_reports_no_partial_order() {
        // A valid task alongside a cycle still fails the whole run.
        let tasks = vec![task("OK", None), task("A", Some("B")), task("B", Some("A"))];
        assert!(resolve_order(&tasks).is_err());
    }

    #[test]
    fn test_unresolved_dependency_treated_as_none() {
        let tasks = vec![task("B", Some("GONE")), task("A", None)];
        let order = resolve_order(&tasks).unwrap();
        assert_eq!(names(&tasks, &order), vec!["B", "A"]);
    }

    #[test]
    fn test_shared_predecessor_branches_isolated() {
        // Both B and C depend on A; the copied path set keeps each branch's
        // traversal state separate.
        let tasks = vec![task("A", None), task("B", Some("A")), task("C", Some("A"))];
        let order = resolve_order(&tasks).unwrap();
        let ordered = names(&tasks, &order);
        let pos = |n: &str| ordered.iter().position(|x| x == n).unwrap();
        assert!(pos("A") < pos("B"));
        assert!(pos("A") < pos("C"));
    }

    #[test]
    fn test_empty_input() {
        let order = resolve_order(&[]).unwrap();
        assert!(order.is_empty());
    }
}
