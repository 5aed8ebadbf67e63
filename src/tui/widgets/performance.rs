//! Performance tab: one sortable study table per view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::content::StudyContent;
use crate::tui::state::{AppState, PerfView};
use crate::tui::style::Styles;
use crate::tui::table::sort_rows;

const WIDTHS_SUMMARY: &[u16] = &[18, 10];
const WIDTHS_IC: &[u16] = &[8, 8, 17, 7];
const WIDTHS_QUINTILES: &[u16] = &[10, 20];
const WIDTHS_SPREADS: &[u16] = &[8, 13];
const WIDTHS_SOURCES: &[u16] = &[26, 26];

/// Fixed column widths for a view; the last column always fills the rest.
fn widths_for(view: PerfView) -> &'static [u16] {
    match view {
        PerfView::Summary => WIDTHS_SUMMARY,
        PerfView::InfoCoef => WIDTHS_IC,
        PerfView::QuintileReturns => WIDTHS_QUINTILES,
        PerfView::Spreads => WIDTHS_SPREADS,
        PerfView::Sources => WIDTHS_SOURCES,
    }
}

/// Renders the sortable table for the current performance view and records
/// header cell hit regions for mouse-driven sort activation.
pub fn render_performance(
    frame: &mut Frame,
    area: Rect,
    content: &StudyContent,
    state: &mut AppState,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let view = state.performance.view;
    let Some(study_table) = content.table(view.table_id()) else {
        let block = Block::default()
            .title(" Factor Performance ")
            .borders(Borders::ALL)
            .style(Styles::default());
        frame.render_widget(Paragraph::new("No data available").block(block), area);
        return;
    };

    // Sort a working copy; the embedded table keeps its authored order.
    let mut rows_data: Vec<Vec<&str>> = study_table.rows.iter().map(|r| r.to_vec()).collect();
    let sort = state.performance.sort();
    if let Some(column) = sort.column {
        sort_rows(&mut rows_data, column, sort.direction);
    }

    // Clamp selection and sync the ratatui table state.
    if !rows_data.is_empty() {
        state.performance.selected = state.performance.selected.min(rows_data.len() - 1);
    } else {
        state.performance.selected = 0;
    }
    state
        .performance
        .ratatui_state
        .select(Some(state.performance.selected));

    // Header with sort indicator on the active column only.
    let headers: Vec<Span> = study_table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            Span::styled(
                format!("{}{}", h, sort.indicator(i)),
                Styles::table_header(),
            )
        })
        .collect();
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|cells| {
            Row::new(cells.iter().map(|c| Span::raw(c.to_string())))
                .style(Styles::default())
                .height(1)
        })
        .collect();

    let widths = widths_for(view);
    let mut constraints: Vec<Constraint> =
        widths.iter().map(|&w| Constraint::Length(w)).collect();
    constraints.push(Constraint::Fill(1));

    let title = format!(
        " {} [v:{}] [{} rows] ",
        study_table.title,
        view.name(),
        rows_data.len()
    );

    let table = Table::new(rows, constraints)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    let inner_top = Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2).min(1),
    );
    record_header_cells(state, inner_top, widths, study_table.headers.len());

    frame.render_stateful_widget(table, area, &mut state.performance.ratatui_state);
}

/// Records one hit region per header cell. Columns are laid out left to
/// right with one cell of spacing; the last column takes the remainder.
fn record_header_cells(state: &mut AppState, header_row: Rect, widths: &[u16], columns: usize) {
    if header_row.width == 0 || header_row.height == 0 {
        return;
    }
    let mut x = header_row.x;
    for i in 0..columns {
        let width = match widths.get(i) {
            Some(&w) => w,
            None => header_row.right().saturating_sub(x),
        };
        if width == 0 || x >= header_row.right() {
            break;
        }
        let clipped = width.min(header_row.right() - x);
        state
            .hits
            .header_cells
            .push(Rect::new(x, header_row.y, clipped, 1));
        x = x.saturating_add(width).saturating_add(1);
    }
}
