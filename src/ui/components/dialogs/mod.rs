//! Dialog rendering helpers shared by the dialog component.

pub mod common;
pub mod system_dialogs;
pub mod task_dialogs;

pub use task_dialogs::FormField;
