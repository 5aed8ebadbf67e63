//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::content::StudyContent;

use super::state::{AppState, PopupState, Tab};
use super::widgets::{
    render_header, render_help, render_overview, render_performance, render_quintile_detail,
    render_quintiles, render_quit_confirm,
};

/// Main render function.
pub fn render(frame: &mut Frame, content: &StudyContent, state: &mut AppState) {
    let area = frame.area();

    // Hit regions are rebuilt from scratch every frame.
    state.hits.clear();

    // A degenerate surface is tolerated as a no-op.
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Main layout: header, content
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(8),   // Content area
    ])
    .split(area);

    render_header(frame, chunks[0], content, state);
    render_content(frame, chunks[1], content, state);

    // Popups are rendered last to overlay everything. The scroll offset is
    // written back after the widget clamps it against its content.
    match state.popup.clone() {
        PopupState::None => {}
        PopupState::Help { scroll } => {
            let mut scroll = scroll;
            render_help(frame, area, state, &mut scroll);
            state.popup = PopupState::Help { scroll };
        }
        PopupState::QuitConfirm => {
            render_quit_confirm(frame, area, state);
        }
        PopupState::QuintileDetail { index, scroll } => {
            let mut scroll = scroll;
            render_quintile_detail(frame, area, content, state, index, &mut scroll);
            state.popup = PopupState::QuintileDetail { index, scroll };
        }
    }
}

/// Renders content based on current tab.
fn render_content(frame: &mut Frame, area: Rect, content: &StudyContent, state: &mut AppState) {
    match state.current_tab {
        Tab::Overview => render_overview(frame, area, content),
        Tab::Quintiles => render_quintiles(frame, area, content, state),
        Tab::Performance => render_performance(frame, area, content, state),
    }
}
