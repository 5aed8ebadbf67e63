//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let popup_width = (area.width * 50 / 100).clamp(30, 44).min(area.width);
    let popup_height = 5u16.min(area.height);
    let popup_area = Rect::new(
        area.x + (area.width.saturating_sub(popup_width)) / 2,
        area.y + (area.height.saturating_sub(popup_height)) / 2,
        popup_width,
        popup_height,
    );

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Quit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().fg(Color::White).bg(Color::Black));

    let lines = vec![
        Line::from("Quit tonelens?"),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter/y", Styles::help_key()),
            Span::styled(" quit   ", Styles::help()),
            Span::styled("Esc/n", Styles::help_key()),
            Span::styled(" stay", Styles::help()),
        ]),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, popup_area);

    state.hits.popup = Some(popup_area);
}
