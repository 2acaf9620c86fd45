//! Task model.
//!
//! A task is a unit of project work with a duration in days, provisional
//! start/end dates, at most one predecessor (referenced by name), and
//! human/bot resource counts. The scheduler overwrites the dates, the
//! allocator fills in `resource_allocation`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Team;

/// A scheduled (or schedulable) project task.
///
/// Created only through [`TaskStore::add`](crate::store::TaskStore::add),
/// which validates the draft, assigns the id, and computes the provisional
/// end date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, monotonically assigned at creation; never reused.
    pub id: u32,
    /// Unique, user-facing name. Dependencies reference this.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Effort in days (always positive).
    pub duration_days: u32,
    /// Scheduled or provisional start date.
    pub start_date: NaiveDate,
    /// Always `start_date + duration_days` after scheduling.
    pub end_date: NaiveDate,
    /// Name of the single predecessor task, if any.
    pub dependency: Option<String>,
    /// Team category; lookup key for the allocation heuristic.
    pub team: Team,
    /// Number of humans assigned.
    pub human_count: u32,
    /// Number of bots assigned.
    pub bot_count: u32,
    /// Estimated cost (feeds project stats only).
    pub cost: f64,
    /// Completion percentage, 0..=100.
    pub completion: u8,
    /// Derived work-hour split label; `None` until an allocation run.
    pub resource_allocation: Option<String>,
    /// Cosmetic display color, assigned at creation.
    pub color: String,
}

impl Task {
    /// Whether this task has a named predecessor.
    pub fn has_dependency(&self) -> bool {
        self.dependency.is_some()
    }

    /// Total work-hours at the fixed 8-hour-day assumption.
    pub fn total_work_hours(&self) -> u32 {
        self.duration_days * 8
    }
}

/// Input for task insertion; validated by the store.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use taskline::{TaskDraft, Team};
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let draft = TaskDraft::new("Design mockups", 5, start)
///     .with_team(Team::Design)
///     .with_humans(2)
///     .with_bots(1)
///     .with_dependency("Requirements");
/// assert_eq!(draft.duration_days, 5);
/// ```
#[derive(Debug, Clone)]
pub struct TaskDraft {
    /// Task name (must be unique in the store).
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Effort in days.
    pub duration_days: u32,
    /// User-entered provisional start date.
    pub start_date: NaiveDate,
    /// Predecessor name; must resolve at insertion time.
    pub dependency: Option<String>,
    /// Team category.
    pub team: Team,
    /// Humans assigned.
    pub human_count: u32,
    /// Bots assigned.
    pub bot_count: u32,
    /// Estimated cost.
    pub cost: f64,
}

impl TaskDraft {
    /// Creates a draft with the required fields.
    pub fn new(name: impl Into<String>, duration_days: u32, start_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            duration_days,
            start_date,
            dependency: None,
            team: Team::default(),
            human_count: 0,
            bot_count: 0,
            cost: 0.0,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the predecessor task name.
    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependency = Some(name.into());
        self
    }

    /// Sets the team category.
    pub fn with_team(mut self, team: Team) -> Self {
        self.team = team;
        self
    }

    /// Sets the human headcount.
    pub fn with_humans(mut self, count: u32) -> Self {
        self.human_count = count;
        self
    }

    /// Sets the bot count.
    pub fn with_bots(mut self, count: u32) -> Self {
        self.bot_count = count;
        self
    }

    /// Sets the estimated cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }
}
