use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

use crate::ai::AiAssistant;
use crate::board;
use crate::constants::UNTITLED_TASK;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::store::TaskStore;
use crate::task::Task;
use crate::ui::components::{BoardComponent, DialogComponent, StatusBar, StatusLine};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;

/// Application state separate from UI concerns.
///
/// `tasks` is the canonical sequence: its array order is the single source
/// of truth for display and for the persisted order indices.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error_message: Option<String>,
}

impl AppState {
    /// Surface an error. Only one message shows at a time; the latest wins.
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

pub struct AppComponent {
    // Component composition
    board: BoardComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    store: Arc<dyn TaskStore>,
    ai: AiAssistant,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,
    confirm_delete: bool,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: Arc<dyn TaskStore>, ai: AiAssistant, icons: IconService, confirm_delete: bool) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = Logger::new();

        let state = AppState {
            loading: true,
            ..Default::default()
        };

        Self {
            board: BoardComponent::new(),
            dialog: DialogComponent::new(icons.clone(), logger.clone()),
            state,
            store,
            ai,
            task_manager,
            background_action_rx,
            logger,
            icons,
            confirm_delete,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether any store write is still outstanding
    pub fn is_syncing(&self) -> bool {
        self.task_manager.write_in_flight()
    }

    /// Whether a model call is still outstanding
    pub fn is_ai_busy(&self) -> bool {
        self.task_manager.ai_in_flight()
    }

    /// Kick off the one startup fetch
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("Loading tasks from the remote store".to_string());
        self.state.loading = true;
        self.task_manager.spawn_fetch(self.store.clone());
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.board.update_data(self.state.tasks.clone());
        self.board.icons = self.icons.clone();
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Char('s') => Action::SmartSort,
            KeyCode::Char('x') => Action::DismissError,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Reload => {
                self.logger.log("Manual reload requested".to_string());
                self.state.loading = true;
                self.task_manager.spawn_fetch(self.store.clone());
                Action::None
            }
            Action::TasksLoaded(tasks) => {
                self.logger.log(format!("Loaded {} tasks", tasks.len()));
                self.state.tasks = tasks;
                self.state.loading = false;
                self.sync_component_data();
                Action::None
            }
            Action::LoadFailed(message) => {
                // The sequence is left exactly as it was (possibly empty)
                self.logger.log(format!("Load failed: {message}"));
                self.state.loading = false;
                self.state.set_error(message);
                Action::None
            }
            Action::SubmitTask { editing: None, patch } => {
                let title = if patch.title.is_empty() {
                    UNTITLED_TASK.to_string()
                } else {
                    patch.title
                };
                let task = Task::new(
                    title,
                    patch.description,
                    patch.priority,
                    patch.color,
                    board::next_position(&self.state.tasks),
                );
                self.logger.log(format!("Creating task '{}'", task.title));
                // The sequence is appended to only after the store confirms
                self.task_manager.spawn_create(self.store.clone(), task);
                Action::None
            }
            Action::SubmitTask {
                editing: Some(id),
                patch,
            } => {
                self.logger.log(format!("Updating task {id}"));
                self.task_manager.spawn_update(self.store.clone(), id, patch);
                Action::None
            }
            Action::TaskInserted(task) => {
                self.state.tasks.push(task);
                self.sync_component_data();
                Action::None
            }
            Action::TaskUpdated { id, patch } => {
                if let Some(position) = board::position_of(&self.state.tasks, &id) {
                    board::merge_patch(&mut self.state.tasks[position], &patch);
                    self.sync_component_data();
                }
                Action::None
            }
            Action::DeleteTask(id) => {
                self.logger.log(format!("Deleting task {id}"));
                self.task_manager.spawn_delete(self.store.clone(), id);
                Action::None
            }
            Action::TaskRemoved(id) => {
                // Survivors keep their stored indices; the next bulk reorder
                // closes the gaps
                board::remove_by_id(&mut self.state.tasks, &id);
                self.sync_component_data();
                Action::None
            }
            Action::MoveTask { from, to } => {
                if board::move_task(&mut self.state.tasks, from, to) {
                    self.logger.log(format!("Moved task from {from} to {to}"));
                    self.board.select(to);
                    self.sync_component_data();
                    // Optimistic: the sequence is already reordered, the save
                    // is best-effort
                    self.task_manager
                        .spawn_save_order(self.store.clone(), self.state.tasks.clone(), false);
                }
                Action::None
            }
            Action::SmartSort => {
                if self.state.tasks.len() < 2 {
                    self.logger.log("Smart sort skipped: fewer than 2 tasks".to_string());
                    return Action::None;
                }
                if self.task_manager.ai_in_flight() {
                    self.logger.log("Smart sort already running".to_string());
                    return Action::None;
                }
                self.logger.log("Smart sort requested".to_string());
                self.task_manager.spawn_smart_sort(self.ai.clone(), self.state.tasks.clone());
                Action::None
            }
            Action::OrderSuggested(ids) => {
                if board::apply_suggested_order(&mut self.state.tasks, &ids) {
                    self.logger.log("Applied AI ordering".to_string());
                    self.sync_component_data();
                    self.task_manager
                        .spawn_save_order(self.store.clone(), self.state.tasks.clone(), true);
                } else {
                    self.logger.log("AI ordering ignored: sequence too small".to_string());
                }
                Action::None
            }
            Action::SortFailed(message) => {
                // The sequence keeps its original order
                self.logger.log(format!("Smart sort failed: {message}"));
                self.state.set_error(message);
                Action::None
            }
            Action::OrderSaved => {
                self.logger.log("Order saved".to_string());
                Action::None
            }
            Action::WriteFailed(message) => {
                self.logger.log(format!("Write failed: {message}"));
                self.state.set_error(message);
                Action::None
            }
            Action::EnhanceDescription { title } => {
                // A missing API key fails the spawned call with Disabled and
                // comes back through the same channel as any other AI error
                self.logger.log(format!("AI describe requested for '{title}'"));
                self.task_manager.spawn_enhance(self.ai.clone(), title);
                Action::None
            }
            Action::EnhanceFailed(message) => {
                self.logger.log(format!("AI describe failed: {message}"));
                self.state.set_error(message);
                Action::None
            }
            Action::DismissError => {
                self.state.clear_error();
                Action::None
            }
            // Everything else either already happened in a component or
            // needs no app-level work
            _ => action,
        }
    }

    /// Process background actions from the task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        self.task_manager.cleanup_finished_tasks();

        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    let board_action = self.board.handle_key_events(key);
                    if matches!(board_action, Action::None) {
                        self.handle_global_key(key)
                    } else {
                        board_action
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }

    /// Run one action through the component chain and the app handler
    pub fn dispatch(&mut self, action: Action) {
        // With confirmation turned off, 'd' deletes straight away
        let action = match action {
            Action::ShowDialog(DialogType::DeleteConfirmation { task_id }) if !self.confirm_delete => {
                Action::DeleteTask(task_id)
            }
            other => other,
        };

        let action = self.dialog.update(action);
        let action = self.board.update(action);
        let _ = self.handle_app_action(action);
    }

    fn render_error_banner(&self, f: &mut Frame, rect: Rect) {
        let Some(message) = &self.state.error_message else {
            return;
        };

        let banner = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} {message}", self.icons.error()),
                Style::default().fg(Color::White),
            ),
            Span::styled("  (x to dismiss)", Style::default().fg(Color::Gray)),
        ]))
        .style(Style::default().bg(Color::Red));

        f.render_widget(banner, rect);
    }

    fn render_loading_popup(&self, f: &mut Frame, rect: Rect) {
        let popup_area = {
            let popup_layout =
                Layout::vertical([Constraint::Percentage(40), Constraint::Min(3), Constraint::Percentage(40)])
                    .split(rect);

            Layout::horizontal([Constraint::Percentage(30), Constraint::Min(30), Constraint::Percentage(30)])
                .split(popup_layout[1])[1]
        };

        let content = Paragraph::new(Line::from(Span::styled(
            format!("{} Loading tasks...", self.icons.loading()),
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(Style::default().fg(Color::Yellow)));

        f.render_widget(Clear, popup_area);
        f.render_widget(content, popup_area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.board.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let has_banner = self.state.error_message.is_some();
        let areas = LayoutManager::main_layout(rect, has_banner);

        if has_banner {
            self.render_error_banner(f, areas[0]);
        }
        self.board.render(f, areas[1]);

        let status = StatusLine {
            task_count: self.state.tasks.len(),
            syncing: self.is_syncing(),
            ai_busy: self.is_ai_busy(),
            moving: self.board.grabbed.is_some(),
            icons: &self.icons,
        };
        StatusBar::render(f, areas[2], &status);

        if self.state.loading {
            self.render_loading_popup(f, rect);
        }

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
