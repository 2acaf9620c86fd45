//! Canonical task collection.
//!
//! `TaskStore` owns the mutable task list and the id sequence. Insertion is
//! the only way to create a task and enforces every record-level invariant:
//! non-empty unique name, positive duration, at least one resource, and a
//! dependency name that resolves to an existing task. Rejected inserts leave
//! the store untouched.

use chrono::Duration;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Task, TaskDraft};

/// Display palette for newly created tasks.
const COLORS: [&str; 10] = [
    "#4285F4", "#EA4335", "#FBBC05", "#34A853", "#5E35B1", "#00ACC1", "#F57C00", "#C2185B",
    "#7CB342", "#546E7A",
];

/// Owned, mutable collection of tasks plus the next-id counter.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use taskline::{TaskDraft, TaskStore};
///
/// let mut store = TaskStore::new();
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let task = store.add(TaskDraft::new("Kickoff", 2, start).with_humans(1)).unwrap();
/// assert_eq!(task.id, 1);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskStore {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a store from existing tasks (e.g., a restored snapshot).
    ///
    /// The id sequence resumes after the highest id present, so restored and
    /// newly added tasks never collide.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { tasks, next_id }
    }

    /// Validates a draft and appends it as a new task.
    ///
    /// The provisional end date is computed as `start + duration` days; the
    /// scheduler overwrites both dates on a full run. Fails with a specific
    /// reason on any invariant violation, leaving the store unchanged.
    pub fn add(&mut self, draft: TaskDraft) -> Result<&Task> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if draft.duration_days == 0 {
            return Err(Error::InvalidDuration);
        }
        if draft.human_count == 0 && draft.bot_count == 0 {
            return Err(Error::NoResources(name.to_string()));
        }
        if self.tasks.iter().any(|t| t.name == name) {
            return Err(Error::DuplicateName(name.to_string()));
        }
        // Strict here; the resolver stays lenient for data that bypassed
        // insertion (snapshot imports, hand-built lists).
        if let Some(dep) = draft.dependency.as_deref() {
            if !self.tasks.iter().any(|t| t.name == dep) {
                return Err(Error::DependencyNotFound(dep.to_string()));
            }
        }

        let end_date = draft.start_date + Duration::days(i64::from(draft.duration_days));
        let id = self.next_id;
        self.next_id += 1;

        debug!(id, name, "task added");

        self.tasks.push(Task {
            id,
            name: name.to_string(),
            description: draft.description,
            duration_days: draft.duration_days,
            start_date: draft.start_date,
            end_date,
            dependency: draft.dependency,
            team: draft.team,
            human_count: draft.human_count,
            bot_count: draft.bot_count,
            cost: draft.cost,
            completion: 0,
            resource_allocation: None,
            color: random_color().to_string(),
        });

        let idx = self.tasks.len() - 1;
        Ok(&self.tasks[idx])
    }

    /// Removes a task by id. Returns `true` if a task was removed.
    ///
    /// Dependents of a removed task keep their dependency name; the resolver
    /// treats the dangling reference as "no dependency".
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    /// Sets a task's completion percentage, clamped to 0..=100.
    ///
    /// Returns `false` if no task has the given id.
    pub fn set_completion(&mut self, id: u32, completion: u8) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completion = completion.min(100);
                true
            }
            None => false,
        }
    }

    /// The live task list, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    /// Finds a task by name.
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn random_color() -> &'static str {
    let idx = rand::rng().random_range(0..COLORS.len());
    COLORS[idx]
}
