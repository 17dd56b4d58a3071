//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Error banner messages
pub const ERROR_LOAD_FAILED: &str =
    "Could not load tasks from the remote board. Check the tasks table configuration.";
pub const ERROR_SAVE_FAILED: &str = "Could not save the task to the remote board.";
pub const ERROR_DELETE_FAILED: &str = "Could not delete the task.";
pub const ERROR_ORDER_SAVE_FAILED: &str = "Could not save the new order.";
pub const ERROR_AI_ORDER_SAVE_FAILED: &str = "AI sorted the tasks, but the new order could not be saved.";

// Preflight / startup messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Dialog titles
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// Fallback title for tasks submitted with an empty title field
pub const UNTITLED_TASK: &str = "Untitled";

// Remote store defaults
pub const DEFAULT_TASKS_TABLE: &str = "tasks";

// AI defaults
pub const DEFAULT_AI_MODEL: &str = "gemini-3-flash-preview";

// In-app log buffer size (entries)
pub const LOG_BUFFER_CAP: usize = 500;

// UI layout constants
/// Minimum board width to preserve usability
pub const BOARD_MIN_WIDTH: u16 = 20;
/// Height of the status bar in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;
