//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the
//! application, supporting emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

impl IconTheme {
    /// Parse a config value, defaulting to ASCII for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "emoji" => Self::Emoji,
            "unicode" => Self::Unicode,
            _ => Self::Ascii,
        }
    }
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub board_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Status and activity icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub syncing: &'static str,
    pub loading: &'static str,
    pub ai: &'static str,
    pub grabbed: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub ui: UiIcons,
    pub status: StatusIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    pub fn board_title(&self) -> &'static str {
        self.icons().ui.board_title
    }

    pub fn syncing(&self) -> &'static str {
        self.icons().status.syncing
    }

    pub fn loading(&self) -> &'static str {
        self.icons().status.loading
    }

    pub fn ai(&self) -> &'static str {
        self.icons().status.ai
    }

    pub fn grabbed(&self) -> &'static str {
        self.icons().status.grabbed
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                board_title: "📋",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            status: StatusIcons {
                syncing: "🔄",
                loading: "⏳",
                ai: "✨",
                grabbed: "✊",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                board_title: "▤",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
            status: StatusIcons {
                syncing: "⟳",
                loading: "◌",
                ai: "✦",
                grabbed: "↕",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                board_title: "#",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
            status: StatusIcons {
                syncing: "~",
                loading: ".",
                ai: "*",
                grabbed: "^",
            },
        }
    }
}
