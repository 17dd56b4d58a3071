//! Background operation manager.
//!
//! Every remote call runs as its own spawned task and reports back through
//! an action channel. Operations are deliberately not serialized against
//! each other: overlapping writes race and the last network response
//! determines the persisted state, matching the board's observed
//! at-most-weak-consistency behavior.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::actions::Action;
use crate::ai::{AiAssistant, AiError};
use crate::constants::{
    ERROR_AI_ORDER_SAVE_FAILED, ERROR_DELETE_FAILED, ERROR_LOAD_FAILED, ERROR_ORDER_SAVE_FAILED,
    ERROR_SAVE_FAILED,
};
use crate::store::{TaskPatch, TaskStore};
use crate::task::Task;

pub type TaskId = u64;

/// What a background task is doing, for the status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    Load,
    Write,
    Ai,
}

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub kind: BackgroundKind,
    pub description: String,
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn track(&mut self, handle: JoinHandle<()>, kind: BackgroundKind, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                kind,
                description,
            },
        );
        task_id
    }

    /// Fetch the full task sequence, ordered by position.
    pub fn spawn_fetch(&mut self, store: Arc<dyn TaskStore>) -> TaskId {
        let sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            match store.fetch_all().await {
                Ok(tasks) => {
                    log::info!("Loaded {} tasks from the remote store", tasks.len());
                    let _ = sender.send(Action::TasksLoaded(tasks));
                }
                Err(e) => {
                    log::warn!("Task fetch failed: {e}");
                    let _ = sender.send(Action::LoadFailed(ERROR_LOAD_FAILED.to_string()));
                }
            }
        });
        self.track(handle, BackgroundKind::Load, "Fetch tasks".to_string())
    }

    /// Insert a new task. The in-memory append only happens once the store
    /// confirms, so the `TaskInserted` action carries the task back.
    pub fn spawn_create(&mut self, store: Arc<dyn TaskStore>, task: Task) -> TaskId {
        let sender = self.action_sender.clone();
        let description = format!("Create task '{}'", task.title);
        let handle = tokio::spawn(async move {
            match store.insert(&task).await {
                Ok(()) => {
                    log::info!("Created task {}", task.id);
                    let _ = sender.send(Action::TaskInserted(task));
                }
                Err(e) => {
                    log::warn!("Task insert failed: {e}");
                    let _ = sender.send(Action::WriteFailed(ERROR_SAVE_FAILED.to_string()));
                }
            }
        });
        self.track(handle, BackgroundKind::Write, description)
    }

    /// Update an existing task's editable fields. The in-memory merge waits
    /// for confirmation, same as create.
    pub fn spawn_update(&mut self, store: Arc<dyn TaskStore>, id: String, patch: TaskPatch) -> TaskId {
        let sender = self.action_sender.clone();
        let description = format!("Update task {id}");
        let handle = tokio::spawn(async move {
            match store.update(&id, &patch).await {
                Ok(()) => {
                    log::info!("Updated task {id}");
                    let _ = sender.send(Action::TaskUpdated { id, patch });
                }
                Err(e) => {
                    log::warn!("Task update failed: {e}");
                    let _ = sender.send(Action::WriteFailed(ERROR_SAVE_FAILED.to_string()));
                }
            }
        });
        self.track(handle, BackgroundKind::Write, description)
    }

    /// Delete a task; removal from the sequence waits for confirmation.
    pub fn spawn_delete(&mut self, store: Arc<dyn TaskStore>, id: String) -> TaskId {
        let sender = self.action_sender.clone();
        let description = format!("Delete task {id}");
        let handle = tokio::spawn(async move {
            match store.remove(&id).await {
                Ok(()) => {
                    log::info!("Deleted task {id}");
                    let _ = sender.send(Action::TaskRemoved(id));
                }
                Err(e) => {
                    log::warn!("Task delete failed: {e}");
                    let _ = sender.send(Action::WriteFailed(ERROR_DELETE_FAILED.to_string()));
                }
            }
        });
        self.track(handle, BackgroundKind::Write, description)
    }

    /// Persist the already-reordered sequence. The caller has applied the
    /// reorder optimistically; a failure surfaces an error but rolls nothing
    /// back, and the message distinguishes a failed save after an AI sort.
    pub fn spawn_save_order(&mut self, store: Arc<dyn TaskStore>, tasks: Vec<Task>, after_ai: bool) -> TaskId {
        let sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            match store.bulk_replace_order(&tasks).await {
                Ok(()) => {
                    log::info!("Saved order for {} tasks", tasks.len());
                    let _ = sender.send(Action::OrderSaved);
                }
                Err(e) => {
                    log::warn!("Order upsert failed: {e}");
                    let message = if after_ai {
                        ERROR_AI_ORDER_SAVE_FAILED
                    } else {
                        ERROR_ORDER_SAVE_FAILED
                    };
                    let _ = sender.send(Action::WriteFailed(message.to_string()));
                }
            }
        });
        self.track(handle, BackgroundKind::Write, "Save order".to_string())
    }

    /// Ask the model for a suggested ordering of the current sequence.
    pub fn spawn_smart_sort(&mut self, ai: AiAssistant, tasks: Vec<Task>) -> TaskId {
        let sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            match ai.suggest_order(&tasks).await {
                Ok(ids) => {
                    log::info!("Smart sort suggested {} ids", ids.len());
                    let _ = sender.send(Action::OrderSuggested(ids));
                }
                Err(e @ AiError::Malformed(_)) => {
                    // Unusable answer: keep the current order, surface the error.
                    log::warn!("Smart sort returned unusable output: {e}");
                    let _ = sender.send(Action::SortFailed(e.to_string()));
                }
                Err(e) => {
                    log::warn!("Smart sort failed: {e}");
                    let _ = sender.send(Action::SortFailed(e.to_string()));
                }
            }
        });
        self.track(handle, BackgroundKind::Ai, "Smart sort".to_string())
    }

    /// Ask the model for a description for the title in the open form.
    pub fn spawn_enhance(&mut self, ai: AiAssistant, title: String) -> TaskId {
        let sender = self.action_sender.clone();
        let description = format!("Enhance '{title}'");
        let handle = tokio::spawn(async move {
            match ai.enhance_description(&title).await {
                Ok(text) => {
                    log::info!("Enhanced description for '{title}'");
                    let _ = sender.send(Action::DescriptionEnhanced(text));
                }
                Err(e) => {
                    log::warn!("Description enhancement failed: {e}");
                    let _ = sender.send(Action::EnhanceFailed(e.to_string()));
                }
            }
        });
        self.track(handle, BackgroundKind::Ai, description)
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Whether any store write is still outstanding (drives the syncing
    /// indicator; nothing else reads this).
    pub fn write_in_flight(&self) -> bool {
        self.tasks.values().any(|task| task.kind == BackgroundKind::Write)
    }

    /// Whether any model call is still outstanding.
    pub fn ai_in_flight(&self) -> bool {
        self.tasks.values().any(|task| task.kind == BackgroundKind::Ai)
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
