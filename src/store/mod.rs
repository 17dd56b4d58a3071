//! Remote store abstraction for the task table.
//!
//! This module defines the interface the board uses to talk to the remote
//! relational store, along with the error types and the patch shape for
//! partial updates.

use async_trait::async_trait;

use crate::task::{CardColor, Priority, Task};

pub mod rest;

pub use rest::RestTaskStore;

/// Errors from remote store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Could not reach the remote store: {0}")]
    Connectivity(String),

    #[error("The remote store rejected the write: {0}")]
    Persistence(String),
}

/// A partial field change for an existing task.
///
/// Only the user-editable fields are present; ordering and creation time
/// cannot be expressed as a patch by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskPatch {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub color: CardColor,
}

impl From<&Task> for TaskPatch {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            color: task.color,
        }
    }
}

/// Store trait the board persists through.
///
/// `fetch_all` fails with [`StoreError::Connectivity`]; the write operations
/// fail with [`StoreError::Persistence`]. The caller owns the asymmetry
/// between confirmed writes (create/edit/delete apply to the in-memory
/// sequence only after success) and best-effort order writes (the sequence
/// is already reordered when `bulk_replace_order` runs, and a failure does
/// not roll it back).
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetch every task, ordered by `order_index` ascending.
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Persist a newly created task with its full field set.
    async fn insert(&self, task: &Task) -> Result<(), StoreError>;

    /// Persist a partial field change for one task.
    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<(), StoreError>;

    /// Delete one task by id.
    async fn remove(&self, id: &str) -> Result<(), StoreError>;

    /// Upsert every task in the sequence with its current `order_index`,
    /// writing all fields (full overwrite, keyed on id).
    async fn bulk_replace_order(&self, tasks: &[Task]) -> Result<(), StoreError>;
}
