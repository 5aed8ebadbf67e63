//! Quintile detail popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::content::StudyContent;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

use super::popup::{kv, kv_styled, render_popup_frame, section};

/// Renders the detail popup for the observation bound to the popup state.
pub fn render_quintile_detail(
    frame: &mut Frame,
    area: Rect,
    content: &StudyContent,
    state: &mut AppState,
    index: usize,
    scroll: &mut usize,
) {
    // A stale index is tolerated as a no-op rather than an error.
    let Some(obs) = content.quintiles.get(index) else {
        return;
    };

    let value = format!("{:.3} bps", obs.avg_return_bps);
    let lines: Vec<Line<'static>> = vec![
        section("Observation"),
        kv("Quintile", obs.quintile),
        kv("Description", obs.description),
        kv_styled("5-Day Return", &value, Styles::metric_for(&value)),
        Line::default(),
        section("Interpretation"),
        Line::from(obs.interpretation),
    ];

    let title = format!("Quintile {} Details", obs.quintile);
    let popup_area = render_popup_frame(frame, area, &title, lines, scroll);
    state.hits.popup = Some(popup_area);
}
