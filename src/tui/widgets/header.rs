//! Header widget showing time, study title, and tabs.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::content::StudyContent;
use crate::tui::state::{AppState, Tab};
use crate::tui::style::Styles;

/// Renders the header bar and records tab label hit regions.
pub fn render_header(frame: &mut Frame, area: Rect, content: &StudyContent, state: &mut AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(21), // Time
        Constraint::Min(24),    // Title
        Constraint::Length(22), // Tabs
        Constraint::Length(42), // Status / hint
    ])
    .split(area);

    // Time
    let time_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    frame.render_widget(Paragraph::new(time_str).style(Styles::header()), chunks[0]);

    // Title
    frame.render_widget(
        Paragraph::new(content.title).style(Styles::header()),
        chunks[1],
    );

    // Tabs, with per-label hit regions for mouse switching
    let mut spans: Vec<Span> = Vec::new();
    let mut x = chunks[2].x;
    for (i, tab) in Tab::all().iter().enumerate() {
        let label = format!(" {}:{} ", i + 1, tab.name());
        let width = label.len() as u16;
        if x + width <= chunks[2].right() {
            state
                .hits
                .tabs
                .push((Rect::new(x, chunks[2].y, width, 1), *tab));
        }
        let style = if *tab == state.current_tab {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(label, style));
        x += width;
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::header()),
        chunks[2],
    );

    // Status message or key hint
    let (right_content, right_style) = if let Some(msg) = &state.status_message {
        (msg.clone(), Styles::tab_active())
    } else {
        ("? help  q quit".to_string(), Styles::header())
    };
    frame.render_widget(
        Paragraph::new(right_content).style(right_style),
        chunks[3],
    );
}
