use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Clear,
    Frame,
};

use crate::icons::IconService;
use crate::task::{CardColor, Priority};
use crate::ui::components::badge::card_color;
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph,
    create_selector_paragraph, shortcuts,
};
use crate::ui::layout::LayoutManager;

/// Which form field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Priority,
    Color,
}

impl FormField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::Color,
            FormField::Color => FormField::Title,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Color,
            FormField::Description => FormField::Title,
            FormField::Priority => FormField::Description,
            FormField::Color => FormField::Priority,
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render_task_form_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    title_buffer: &str,
    description_buffer: &str,
    priority: Priority,
    color: CardColor,
    focus: FormField,
    enhancing: bool,
    is_edit: bool,
) {
    let dialog_area = LayoutManager::centered_rect_lines(65, 18, area);
    f.render_widget(Clear, dialog_area);

    let title = if is_edit { "Edit Task" } else { "New Task" };
    let main_block = create_dialog_block(title, Color::Cyan);
    let inner_area = main_block.inner(dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title input
            Constraint::Length(3), // Description input
            Constraint::Length(3), // Priority selector
            Constraint::Length(3), // Color selector
            Constraint::Length(1), // Spacer / enhancing note
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let title_input = create_input_paragraph(title_buffer, "Title", focus == FormField::Title);

    let description_title = if enhancing {
        format!("Description {} thinking…", icons.ai())
    } else {
        "Description".to_string()
    };
    let description_input = create_input_paragraph(
        description_buffer,
        &description_title,
        focus == FormField::Description,
    );

    let priority_value = Line::from(Span::styled(
        priority.as_str().to_string(),
        Style::default().fg(Color::White),
    ));
    let priority_selector = create_selector_paragraph(priority_value, "Priority", focus == FormField::Priority);

    let color_value = Line::from(vec![
        Span::styled("■ ", Style::default().fg(card_color(color))),
        Span::styled(color.as_str().to_string(), Style::default().fg(Color::White)),
    ]);
    let color_selector = create_selector_paragraph(color_value, "Color", focus == FormField::Color);

    let instructions = create_instructions_paragraph(&[
        shortcuts::ENTER_SAVE,
        shortcuts::SEPARATOR,
        shortcuts::TAB_FIELD,
        shortcuts::SEPARATOR,
        shortcuts::ARROWS_CYCLE,
        shortcuts::SEPARATOR,
        shortcuts::CTRL_E_ENHANCE,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(title_input, chunks[0]);
    f.render_widget(description_input, chunks[1]);
    f.render_widget(priority_selector, chunks[2]);
    f.render_widget(color_selector, chunks[3]);
    f.render_widget(instructions, chunks[5]);
}
