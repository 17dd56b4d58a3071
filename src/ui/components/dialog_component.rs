//! Modal dialog component.
//!
//! One container for every modal surface: the task form (create and edit,
//! with the AI describe affordance), the delete confirmation, help, and the
//! log view. Field focus, text editing and submission all live here; the
//! per-dialog rendering is delegated to the `dialogs` modules.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

use crate::icons::IconService;
use crate::logger::Logger;
use crate::store::TaskPatch;
use crate::task::{CardColor, Priority};
use crate::ui::components::dialogs::{system_dialogs, task_dialogs, FormField};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};

/// A text field with a character-position cursor.
#[derive(Debug, Clone, Default)]
struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    fn set(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.text = text;
    }

    fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_pos(&self) -> usize {
        self.text.chars().take(self.cursor).map(|ch| ch.len_utf8()).sum()
    }

    fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos();
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_pos = self.byte_pos();
            let prev_char_len = self
                .text
                .chars()
                .nth(self.cursor - 1)
                .map(|ch| ch.len_utf8())
                .unwrap_or(1);
            self.text.remove(byte_pos - prev_char_len);
            self.cursor -= 1;
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let byte_pos = self.byte_pos();
            self.text.remove(byte_pos);
        }
    }

    fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }
}

/// Modal dialog component handling the task form and system dialogs.
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    title: InputBuffer,
    description: InputBuffer,
    priority: Priority,
    color: CardColor,
    focus: FormField,
    enhancing: bool,
    editing_id: Option<String>,
    pub icons: IconService,
    logger: Logger,
    // Scrolling support for help and logs
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
}

impl DialogComponent {
    pub fn new(icons: IconService, logger: Logger) -> Self {
        Self {
            dialog_type: None,
            title: InputBuffer::default(),
            description: InputBuffer::default(),
            priority: Priority::default(),
            color: CardColor::default(),
            focus: FormField::default(),
            enhancing: false,
            editing_id: None,
            icons,
            logger,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.title.clear();
        self.description.clear();
        self.priority = Priority::default();
        self.color = CardColor::default();
        self.focus = FormField::default();
        self.enhancing = false;
        self.editing_id = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn handle_submit(&mut self) -> Action {
        match &self.dialog_type {
            Some(DialogType::TaskForm { .. }) => {
                if self.title.text.trim().is_empty() {
                    // The form refuses to save without a title
                    return Action::None;
                }

                let patch = TaskPatch {
                    title: self.title.text.trim().to_string(),
                    description: self.description.text.clone(),
                    priority: self.priority,
                    color: self.color,
                };
                let action = Action::SubmitTask {
                    editing: self.editing_id.clone(),
                    patch,
                };
                self.clear_dialog();
                action
            }
            Some(DialogType::DeleteConfirmation { task_id }) => {
                let action = Action::DeleteTask(task_id.clone());
                self.clear_dialog();
                action
            }
            _ => Action::None,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        // AI describe: works from any field once a title exists
        if key.code == KeyCode::Char('e') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.title.text.trim().is_empty() || self.enhancing {
                return Action::None;
            }
            self.enhancing = true;
            log::info!("Form: requesting AI description for '{}'", self.title.text.trim());
            return Action::EnhanceDescription {
                title: self.title.text.trim().to_string(),
            };
        }

        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                Action::None
            }
            KeyCode::Char(c) => {
                match self.focus {
                    FormField::Title => self.title.insert(c),
                    FormField::Description => self.description.insert(c),
                    FormField::Priority | FormField::Color => {}
                }
                Action::None
            }
            KeyCode::Backspace => {
                match self.focus {
                    FormField::Title => self.title.backspace(),
                    FormField::Description => self.description.backspace(),
                    FormField::Priority | FormField::Color => {}
                }
                Action::None
            }
            KeyCode::Delete => {
                match self.focus {
                    FormField::Title => self.title.delete(),
                    FormField::Description => self.description.delete(),
                    FormField::Priority | FormField::Color => {}
                }
                Action::None
            }
            KeyCode::Left => {
                match self.focus {
                    FormField::Title => self.title.left(),
                    FormField::Description => self.description.left(),
                    FormField::Priority => self.priority = self.priority.prev(),
                    FormField::Color => self.color = self.color.prev(),
                }
                Action::None
            }
            KeyCode::Right => {
                match self.focus {
                    FormField::Title => self.title.right(),
                    FormField::Description => self.description.right(),
                    FormField::Priority => self.priority = self.priority.next(),
                    FormField::Color => self.color = self.color.next(),
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_scrolling_key(&mut self, key: KeyEvent, dismiss: &[KeyCode]) -> Action {
        if dismiss.contains(&key.code) {
            return Action::HideDialog;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::End => {
                self.scroll_offset = usize::MAX;
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::TaskForm { .. }) => self.handle_form_key(key),
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                _ => Action::None,
            },
            Some(DialogType::Help) => {
                self.handle_scrolling_key(key, &[KeyCode::Esc, KeyCode::Char('?')])
            }
            Some(DialogType::Logs) => {
                self.handle_scrolling_key(key, &[KeyCode::Esc, KeyCode::Char('G'), KeyCode::Char('q')])
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                if let DialogType::TaskForm { editing: Some(task) } = &dialog_type {
                    self.title.set(task.title.clone());
                    self.description.set(task.description.clone());
                    self.priority = task.priority;
                    self.color = task.color;
                    self.editing_id = Some(task.id.clone());
                    log::info!("Dialog: editing task {}", task.id);
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::DescriptionEnhanced(text) => {
                if matches!(self.dialog_type, Some(DialogType::TaskForm { .. })) {
                    self.description.set(text);
                    self.logger.log("AI description filled into the form".to_string());
                }
                self.enhancing = false;
                Action::None
            }
            Action::EnhanceFailed(_) => {
                // The banner carries the message; the form just stops waiting.
                self.enhancing = false;
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type.clone() {
            Some(DialogType::TaskForm { .. }) => {
                task_dialogs::render_task_form_dialog(
                    f,
                    rect,
                    &self.icons,
                    &self.title.text,
                    &self.description.text,
                    self.priority,
                    self.color,
                    self.focus,
                    self.enhancing,
                    self.editing_id.is_some(),
                );
            }
            Some(DialogType::DeleteConfirmation { .. }) => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons);
            }
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            Some(DialogType::Logs) => {
                let entries = self.logger.entries();
                system_dialogs::render_logs_dialog(
                    f,
                    rect,
                    &entries,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            None => {}
        }
    }
}
