//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

use super::popup::{render_popup_frame, section};

/// One key binding line: key column plus description.
fn binding(keys: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", keys), Styles::help_key()),
        Span::raw(description.to_string()),
    ])
}

/// Renders the scrollable help popup.
pub fn render_help(frame: &mut Frame, area: Rect, state: &mut AppState, scroll: &mut usize) {
    let lines: Vec<Line<'static>> = vec![
        section("Tabs"),
        binding("1 / 2 / 3", "Overview / Quintiles / Performance"),
        binding("Tab", "Next tab"),
        binding("Shift+Tab", "Previous tab"),
        Line::default(),
        section("Quintiles"),
        binding("←/→  h/l", "Select a bar"),
        binding("Enter", "Open / close the detail popup"),
        binding("click bar", "Open the detail popup"),
        binding("Esc", "Close the detail popup"),
        binding("click out", "Close the detail popup"),
        Line::default(),
        section("Performance"),
        binding("v", "Next table view"),
        binding("s", "Sort by the next column (ascending)"),
        binding("r", "Reverse the active sort column"),
        binding("click hdr", "Sort by that column"),
        binding("↑/↓  j/k", "Move row selection"),
        binding("PgUp/PgDn", "Page selection"),
        Line::default(),
        section("General"),
        binding("?", "Toggle this help"),
        binding("q", "Quit (with confirmation)"),
        binding("Ctrl+C", "Quit immediately"),
    ];

    let popup_area = render_popup_frame(frame, area, "Help", lines, scroll);
    state.hits.popup = Some(popup_area);
}
