//! Quintiles tab: proportional bar chart with a selectable detail footer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

use crate::content::StudyContent;
use crate::tui::chart::{self, MAX_BAR_HEIGHT};
use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};

const BAR_WIDTH: u16 = 7;
const BAR_GAP: u16 = 2;

/// Renders the quintile bar chart and records per-bar hit regions.
pub fn render_quintiles(frame: &mut Frame, area: Rect, content: &StudyContent, state: &mut AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(" Quintile Returns (5-Day Forward, bps) ")
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let specs = chart::build_bars(&content.quintiles);
    if specs.is_empty() || inner.width == 0 || inner.height == 0 {
        return;
    }

    // Clamp selection against the observation count.
    state.quintiles.selected = state.quintiles.selected.min(specs.len() - 1);
    let selected = state.quintiles.selected;

    let chunks = Layout::vertical([
        Constraint::Min(4),    // Chart
        Constraint::Length(1), // Selected observation detail
        Constraint::Length(1), // Key hints
    ])
    .split(inner);
    let chart_area = chunks[0];

    let bars: Vec<Bar> = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let color = if i == selected {
                Theme::BAR_SELECTED
            } else {
                Theme::BAR_COLOR
            };
            Bar::default()
                .value(spec.height.round() as u64)
                .text_value(spec.value_label.clone())
                .label(Line::from(spec.label.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Theme::FG).bg(color))
        })
        .collect();

    let chart_widget = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .max(MAX_BAR_HEIGHT.round() as u64);
    frame.render_widget(chart_widget, chart_area);

    // Bars render left to right at fixed offsets; record each column that
    // fits as a hit region.
    for i in 0..specs.len() as u16 {
        let x = chart_area.x + i * (BAR_WIDTH + BAR_GAP);
        if x + BAR_WIDTH > chart_area.right() {
            break;
        }
        state
            .hits
            .bars
            .push(Rect::new(x, chart_area.y, BAR_WIDTH, chart_area.height));
    }

    // Supplementary detail for the selected observation (three decimals).
    let detail = Line::from(vec![
        Span::styled(
            format!("{} ", specs[selected].label),
            Style::default().fg(Theme::BAR_SELECTED),
        ),
        Span::raw(specs[selected].detail.clone()),
    ]);
    frame.render_widget(Paragraph::new(detail), chunks[1]);

    let hints = Line::from(vec![
        Span::styled("←/→", Styles::help_key()),
        Span::styled(" select  ", Styles::help()),
        Span::styled("Enter", Styles::help_key()),
        Span::styled(" details  ", Styles::help()),
        Span::styled("click", Styles::help_key()),
        Span::styled(" a bar for details", Styles::help()),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}
