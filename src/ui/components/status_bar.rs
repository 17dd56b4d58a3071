//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::icons::IconService;

/// What the status bar needs to know about the app this frame.
pub struct StatusLine<'a> {
    pub task_count: usize,
    pub syncing: bool,
    pub ai_busy: bool,
    pub moving: bool,
    pub icons: &'a IconService,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, line: &StatusLine) {
        let status_text = if line.moving {
            "Move mode: j/k to pick a spot • Space: drop • Esc: cancel".to_string()
        } else if line.syncing {
            format!("{} Syncing with the remote board...", line.icons.syncing())
        } else if line.ai_busy {
            format!("{} Waiting for the AI...", line.icons.ai())
        } else {
            format!(
                "{} tasks • a: add • e: edit • d: delete • Space: move • s: smart sort • r: reload • ?: help • q: quit",
                line.task_count
            )
        };

        let status_color = if line.syncing || line.ai_busy || line.moving {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
