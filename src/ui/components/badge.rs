use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::task::{CardColor, Priority};

/// Priority badge with flag symbols
#[must_use]
pub fn create_priority_badge(priority: Priority) -> Span<'static> {
    match priority {
        Priority::High => Span::styled(
            "⚑",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Priority::Medium => Span::styled(
            "⚑",
            Style::default().fg(Color::Rgb(255, 165, 0)).add_modifier(Modifier::BOLD),
        ),
        Priority::Low => Span::styled("⚐", Style::default().fg(Color::White)),
    }
}

/// Terminal color for a palette tag
#[must_use]
pub fn card_color(color: CardColor) -> Color {
    match color {
        CardColor::Blue => Color::Rgb(59, 130, 246),
        CardColor::Green => Color::Rgb(34, 197, 94),
        CardColor::Amber => Color::Rgb(245, 158, 11),
        CardColor::Rose => Color::Rgb(244, 63, 94),
        CardColor::Indigo => Color::Rgb(99, 102, 241),
        CardColor::Purple => Color::Rgb(168, 85, 247),
    }
}

/// Color swatch shown on every card
#[must_use]
pub fn create_color_swatch(color: CardColor) -> Span<'static> {
    Span::styled("■", Style::default().fg(card_color(color)))
}
