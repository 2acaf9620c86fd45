//! Project scheduling domain models.
//!
//! A `Task` is the single central entity: a named unit of work with a
//! duration in days, at most one predecessor (referenced by name), an
//! assigned team category, and human/bot resource counts. `TaskDraft`
//! carries validated-on-insert input into the store.

mod task;
mod team;

pub use task::{Task, TaskDraft};
pub use team::Team;
