use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::icons::IconService;
use crate::task::Task;
use crate::ui::components::badge::{create_color_swatch, create_priority_badge};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};

/// The board: the ordered card list with selection and move mode.
///
/// Move mode is the drag-and-drop of the terminal: Space grabs the selected
/// card, j/k choose the drop position, Space drops it there and Esc cancels.
pub struct BoardComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub grabbed: Option<usize>,
    pub list_state: ListState,
    pub icons: IconService,
}

impl Default for BoardComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            grabbed: None,
            list_state: ListState::default(),
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        if self.grabbed.map_or(false, |g| g >= self.tasks.len()) {
            self.grabbed = None;
        }
        self.update_list_state();
    }

    /// Point the selection at a specific position (e.g. after a drop).
    pub fn select(&mut self, index: usize) {
        self.selected_index = index;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn create_task_item(&self, task: &Task, position: usize) -> ListItem<'_> {
        let mut line_spans = Vec::new();

        line_spans.push(create_color_swatch(task.color));
        line_spans.push(Span::raw(" "));
        line_spans.push(create_priority_badge(task.priority));
        line_spans.push(Span::raw(" "));

        let is_grabbed = self.grabbed == Some(position);
        let title_style = if is_grabbed {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC)
        } else {
            Style::default().fg(Color::White)
        };
        if is_grabbed {
            line_spans.push(Span::styled(
                format!("{} ", self.icons.grabbed()),
                Style::default().fg(Color::Yellow),
            ));
        }
        line_spans.push(Span::styled(task.title.clone(), title_style));

        if !task.description.is_empty() {
            let mut summary: String = task.description.chars().take(60).collect();
            if task.description.chars().count() > 60 {
                summary.push('…');
            }
            line_spans.push(Span::styled(
                format!("  {summary}"),
                Style::default().fg(Color::DarkGray),
            ));
        }

        ListItem::new(Line::from(line_spans))
    }
}

impl Component for BoardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Char(' ') => {
                match self.grabbed.take() {
                    None => {
                        if self.tasks.len() >= 2 && self.selected_index < self.tasks.len() {
                            self.grabbed = Some(self.selected_index);
                        }
                        Action::None
                    }
                    Some(from) => {
                        let to = self.selected_index;
                        if from == to {
                            Action::None
                        } else {
                            Action::MoveTask { from, to }
                        }
                    }
                }
            }
            KeyCode::Esc if self.grabbed.is_some() => {
                self.grabbed = None;
                Action::None
            }
            KeyCode::Char('e') => {
                if let Some(task) = self.get_selected_task() {
                    Action::ShowDialog(DialogType::TaskForm {
                        editing: Some(task.clone()),
                    })
                } else {
                    Action::None
                }
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.get_selected_task() {
                    Action::ShowDialog(DialogType::DeleteConfirmation {
                        task_id: task.id.clone(),
                    })
                } else {
                    Action::None
                }
            }
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TaskForm { editing: None }),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!("{} Board", self.icons.board_title());

        if self.tasks.is_empty() {
            let empty_message = "No tasks yet. Press 'a' to create one.";
            let empty_list = List::new(vec![ListItem::new(empty_message)])
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
        } else {
            let items: Vec<ListItem> = self
                .tasks
                .iter()
                .enumerate()
                .map(|(position, task)| self.create_task_item(task, position))
                .collect();
            let mut list_state = self.list_state.clone();

            let highlight = if self.grabbed.is_some() {
                // Highlight marks the drop position while a card is carried
                Style::default().bg(Color::Yellow).fg(Color::Black)
            } else {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            };

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(highlight);

            f.render_stateful_widget(list, rect, &mut list_state);
            self.list_state = list_state;
        }
    }
}
