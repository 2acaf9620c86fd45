//! Dependency-driven project scheduling.
//!
//! Provides an in-memory task store, a topological dependency resolver,
//! forward date propagation, and a human/bot work-hour allocation heuristic.
//! A single synchronous pass (resolve → calculate → allocate) turns a flat
//! task list into a dated, annotated timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskDraft`, `Team`
//! - **`store`**: `TaskStore` — canonical task collection with strict
//!   insertion validation and id assignment
//! - **`scheduler`**: Dependency resolution (cycle-detecting topological
//!   order) and start/end date propagation
//! - **`allocation`**: Per-team human/bot work-hour split labels
//! - **`suggest`**: Priority scoring behind a pluggable text-generation
//!   provider, with a deterministic local fallback
//! - **`snapshot`**: Named project snapshots (JSON, ISO dates)
//! - **`stats`**: Progress and cost rollups
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)
//! - Kerzner (2017), "Project Management: A Systems Approach", Ch. 12 (Network Scheduling)

pub mod allocation;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod snapshot;
pub mod stats;
pub mod store;
pub mod suggest;

pub use error::{Error, Result};
pub use models::{Task, TaskDraft, Team};
pub use store::TaskStore;
