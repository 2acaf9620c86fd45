//! Named project snapshots.
//!
//! A snapshot bundles project metadata with the full task array for
//! persistence by a collaborator (browser storage, file, whatever the host
//! chooses). Dates serialize as ISO `YYYY-MM-DD` strings and parse back into
//! date values on restore; the store's id sequence resumes past the highest
//! restored id.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Task;
use crate::store::TaskStore;

/// Project metadata for a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectMeta {
    /// Project name (snapshot key for the host).
    pub name: String,
    /// Owning organization.
    pub organization: String,
    /// Free-text description.
    pub description: String,
    /// Total budget.
    pub budget: f64,
}

/// A complete, serializable project state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Project metadata.
    #[serde(flatten)]
    pub meta: ProjectMeta,
    /// All tasks, insertion order preserved.
    pub tasks: Vec<Task>,
}

impl ProjectSnapshot {
    /// Captures the current store state under the given metadata.
    pub fn from_store(meta: ProjectMeta, store: &TaskStore) -> Self {
        Self {
            meta,
            tasks: store.tasks().to_vec(),
        }
    }

    /// Rebuilds a live store from this snapshot.
    pub fn into_store(self) -> TaskStore {
        TaskStore::from_tasks(self.tasks)
    }

    /// Serializes to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
