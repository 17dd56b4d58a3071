//! Reusable UI components

pub mod badge;
pub mod board_component;
pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;

// Component exports
pub use board_component::BoardComponent;
pub use dialog_component::DialogComponent;
pub use status_bar::{StatusBar, StatusLine};
