//! Overview tab: headline metric tiles and the study narrative.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::content::StudyContent;
use crate::tui::style::Styles;

/// Renders the overview tab.
pub fn render_overview(frame: &mut Frame, area: Rect, content: &StudyContent) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(4), // Metric tiles
        Constraint::Min(6),    // Narrative
    ])
    .split(area);

    render_metric_tiles(frame, chunks[0], content);
    render_narrative(frame, chunks[1], content);
}

fn render_metric_tiles(frame: &mut Frame, area: Rect, content: &StudyContent) {
    if content.headline_metrics.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = content
        .headline_metrics
        .iter()
        .map(|_| Constraint::Ratio(1, content.headline_metrics.len() as u32))
        .collect();
    let tiles = Layout::horizontal(constraints).split(area);

    for (metric, tile) in content.headline_metrics.iter().zip(tiles.iter()) {
        let lines = vec![
            Line::from(Span::styled(metric.value, Styles::metric_for(metric.value))),
            Line::from(Span::styled(metric.label, Styles::dim())),
        ];
        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, *tile);
    }
}

fn render_narrative(frame: &mut Frame, area: Rect, content: &StudyContent) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "Executive Summary",
        Styles::section_header(),
    )));
    lines.push(Line::from(content.summary));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Research Hypothesis",
        Styles::section_header(),
    )));
    lines.push(Line::from(Span::styled(
        content.hypothesis,
        Styles::dim(),
    )));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Key Findings",
        Styles::section_header(),
    )));
    for finding in content.key_findings {
        lines.push(Line::from(format!("  • {}", finding)));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Overview ")
                .borders(Borders::ALL)
                .style(Styles::default()),
        );
    frame.render_widget(widget, area);
}
