use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let title = format!("{} Confirm Delete", icons.warning());
    let message = "Are you sure you want to delete this task?";
    let instructions = "Press Enter to confirm, Esc to cancel";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Red));

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .margin(2)
        .constraints([
            ratatui::layout::Constraint::Length(1),
            ratatui::layout::Constraint::Length(1),
        ])
        .split(dialog_area);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);
}

/// Render scrollable text content inside a titled dialog box.
fn render_scrolling_text_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    lines: &[String],
    color: Color,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(70, 70, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(2),
    );

    let total_lines = lines.len();
    let visible_height = content_area.height as usize;

    let text = if total_lines > visible_height {
        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped_offset = scroll_offset.min(max_scroll);

        *scrollbar_state = scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped_offset);

        lines
            .iter()
            .skip(clamped_offset)
            .take(visible_height)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        lines.join("\n")
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(block, dialog_area);
    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    let help_lines: Vec<String> = [
        "Navigation",
        "  j / Down       next task",
        "  k / Up         previous task",
        "",
        "Tasks",
        "  a              add a task",
        "  e              edit the selected task",
        "  d              delete the selected task",
        "",
        "Ordering",
        "  Space          grab / drop the selected task",
        "  j / k          carry the grabbed task (Esc cancels)",
        "  s              smart sort the whole board (needs 2+ tasks)",
        "",
        "Board",
        "  r              reload from the remote store",
        "  x              dismiss the error banner",
        "  G              show logs",
        "  ?              this help",
        "  q / Ctrl-C     quit",
        "",
        "In the task form: Tab cycles fields, ←/→ change priority/color,",
        "Ctrl-E asks the AI for a description (needs a title).",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    render_scrolling_text_dialog(
        f,
        area,
        "Help - Press 'Esc' or '?' to close".to_string(),
        &help_lines,
        Color::Cyan,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    entries: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let lines = if entries.is_empty() {
        vec!["No log entries yet.".to_string()]
    } else {
        entries.to_vec()
    };

    render_scrolling_text_dialog(
        f,
        area,
        DIALOG_TITLE_LOGS.to_string(),
        &lines,
        Color::Gray,
        scroll_offset,
        scrollbar_state,
    );
}
