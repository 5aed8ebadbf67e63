//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the viewer.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Tab colors
    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;

    // Study palette
    pub const METRIC_POSITIVE: Color = Color::Green;
    pub const METRIC_NEGATIVE: Color = Color::Red;
    pub const BAR_COLOR: Color = Color::Cyan;
    pub const BAR_SELECTED: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab style.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab style.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Positive metric value (green, bold).
    pub fn metric_positive() -> Style {
        Style::default()
            .fg(Theme::METRIC_POSITIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Negative metric value (red, bold).
    pub fn metric_negative() -> Style {
        Style::default()
            .fg(Theme::METRIC_NEGATIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Styles a displayed metric by its sign.
    pub fn metric_for(value: &str) -> Style {
        if value.trim_start().starts_with('-') {
            Self::metric_negative()
        } else {
            Self::metric_positive()
        }
    }

    /// Section header style for detail popups.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Key column style in key-value popup lines.
    pub fn kv_key() -> Style {
        Style::default().fg(Color::Cyan)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }
}
