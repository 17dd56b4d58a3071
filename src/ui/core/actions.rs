use crate::store::TaskPatch;
use crate::task::Task;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,

    // Board mutations requested by the user
    SubmitTask {
        /// `Some(id)` edits an existing task; `None` creates a new one.
        editing: Option<String>,
        patch: TaskPatch,
    },
    DeleteTask(String),
    MoveTask {
        from: usize,
        to: usize,
    },
    SmartSort,
    Reload,

    // AI enhancement for the open form
    EnhanceDescription {
        title: String,
    },
    DescriptionEnhanced(String),
    EnhanceFailed(String),

    // Background completions
    TasksLoaded(Vec<Task>),
    LoadFailed(String),
    TaskInserted(Task),
    TaskUpdated {
        id: String,
        patch: TaskPatch,
    },
    TaskRemoved(String),
    OrderSuggested(Vec<String>),
    SortFailed(String),
    OrderSaved,
    WriteFailed(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    DismissError,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    /// Create (editing = None) or edit a task through the form.
    TaskForm { editing: Option<Task> },
    DeleteConfirmation { task_id: String },
    Help,
    Logs,
}
