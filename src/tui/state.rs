//! Application state management.

use std::collections::HashMap;

use ratatui::layout::{Position, Rect};
use ratatui::widgets::TableState as RatatuiTableState;

use super::table::SortState;

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Quintiles,
    Performance,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Overview, Tab::Quintiles, Tab::Performance]
    }

    /// Returns the short display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Overview => "OVW",
            Tab::Quintiles => "QNT",
            Tab::Performance => "PRF",
        }
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Overview => Tab::Quintiles,
            Tab::Quintiles => Tab::Performance,
            Tab::Performance => Tab::Overview,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::Overview => Tab::Performance,
            Tab::Quintiles => Tab::Overview,
            Tab::Performance => Tab::Quintiles,
        }
    }
}

/// Table views on the Performance tab. Each view shows one study table and
/// keeps its own sort state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PerfView {
    #[default]
    Summary,
    InfoCoef,
    QuintileReturns,
    Spreads,
    Sources,
}

impl PerfView {
    pub fn all() -> &'static [PerfView] {
        &[
            PerfView::Summary,
            PerfView::InfoCoef,
            PerfView::QuintileReturns,
            PerfView::Spreads,
            PerfView::Sources,
        ]
    }

    /// Display name for the tab title.
    pub fn name(&self) -> &'static str {
        match self {
            PerfView::Summary => "summary",
            PerfView::InfoCoef => "info coef",
            PerfView::QuintileReturns => "quintiles",
            PerfView::Spreads => "spreads",
            PerfView::Sources => "sources",
        }
    }

    /// Id of the study table backing this view.
    pub fn table_id(&self) -> &'static str {
        match self {
            PerfView::Summary => "summary",
            PerfView::InfoCoef => "ic",
            PerfView::QuintileReturns => "quintile_returns",
            PerfView::Spreads => "spreads",
            PerfView::Sources => "sources",
        }
    }

    /// Returns the next view.
    pub fn next(&self) -> PerfView {
        match self {
            PerfView::Summary => PerfView::InfoCoef,
            PerfView::InfoCoef => PerfView::QuintileReturns,
            PerfView::QuintileReturns => PerfView::Spreads,
            PerfView::Spreads => PerfView::Sources,
            PerfView::Sources => PerfView::Summary,
        }
    }
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Quintile detail popup, bound to one observation.
    QuintileDetail { index: usize, scroll: usize },
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns true if a quintile detail popup is open.
    pub fn is_detail_open(&self) -> bool {
        matches!(self, Self::QuintileDetail { .. })
    }

    /// Scroll offset of the open popup, if it scrolls.
    pub fn scroll_mut(&mut self) -> Option<&mut usize> {
        match self {
            Self::Help { scroll } | Self::QuintileDetail { scroll, .. } => Some(scroll),
            _ => None,
        }
    }
}

/// State for the Quintiles tab.
#[derive(Debug, Default)]
pub struct QuintilesTabState {
    /// Selected bar index.
    pub selected: usize,
}

impl QuintilesTabState {
    pub fn select_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_right(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }
}

/// State for the Performance tab: current view plus per-view sort state.
#[derive(Debug)]
pub struct PerformanceTabState {
    pub view: PerfView,
    /// Selected row index (clamped during render).
    pub selected: usize,
    /// Sort state per view. A view is unsorted until first activation.
    sorts: HashMap<PerfView, SortState>,
    pub ratatui_state: RatatuiTableState,
}

impl Default for PerformanceTabState {
    fn default() -> Self {
        Self {
            view: PerfView::default(),
            selected: 0,
            sorts: HashMap::new(),
            ratatui_state: RatatuiTableState::default(),
        }
    }
}

impl PerformanceTabState {
    /// Sort state of the current view.
    pub fn sort(&self) -> SortState {
        self.sorts.get(&self.view).copied().unwrap_or_default()
    }

    /// Mutable sort state of the current view.
    pub fn sort_mut(&mut self) -> &mut SortState {
        self.sorts.entry(self.view).or_default()
    }

    /// Switches to the next view; selection resets, sort states persist.
    pub fn next_view(&mut self) {
        self.view = self.view.next();
        self.selected = 0;
        self.ratatui_state.select(Some(0));
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
    }

    pub fn page_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
    }

    pub fn page_down(&mut self, n: usize) {
        self.selected = self.selected.saturating_add(n);
    }

    pub fn home(&mut self) {
        self.selected = 0;
    }

    pub fn end(&mut self) {
        self.selected = usize::MAX;
    }
}

/// Screen regions recorded during render and consumed by mouse handling on
/// the next event.
#[derive(Debug, Default, Clone)]
pub struct HitRegions {
    /// Tab labels in the header bar.
    pub tabs: Vec<(Rect, Tab)>,
    /// Quintile bars, indexed by observation.
    pub bars: Vec<Rect>,
    /// Performance table header cells, indexed by column.
    pub header_cells: Vec<Rect>,
    /// Content region of the open popup, if any.
    pub popup: Option<Rect>,
}

impl HitRegions {
    /// Clears all regions at the start of a render pass.
    pub fn clear(&mut self) {
        self.tabs.clear();
        self.bars.clear();
        self.header_cells.clear();
        self.popup = None;
    }

    pub fn tab_at(&self, pos: Position) -> Option<Tab> {
        self.tabs
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, tab)| *tab)
    }

    pub fn bar_at(&self, pos: Position) -> Option<usize> {
        self.bars.iter().position(|rect| rect.contains(pos))
    }

    pub fn header_column_at(&self, pos: Position) -> Option<usize> {
        self.header_cells.iter().position(|rect| rect.contains(pos))
    }

    pub fn in_popup(&self, pos: Position) -> bool {
        self.popup.is_some_and(|rect| rect.contains(pos))
    }
}

/// Main application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Active popup. Only one can be open at a time.
    pub popup: PopupState,
    /// Quintiles tab state.
    pub quintiles: QuintilesTabState,
    /// Performance tab state.
    pub performance: PerformanceTabState,
    /// Temporary status message shown in the header.
    pub status_message: Option<String>,
    /// Hit regions recorded by the last render.
    pub hits: HitRegions,
    /// Terminal width, tracked for resize.
    pub terminal_width: u16,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the quintile detail popup is open.
    pub fn any_detail_open(&self) -> bool {
        self.popup.is_detail_open()
    }

    /// Switches to a new tab and clears any stale status message.
    pub fn switch_tab(&mut self, new_tab: Tab) {
        if self.current_tab != new_tab {
            self.current_tab = new_tab;
            self.status_message = None;
        }
    }

    /// Opens the quintile detail popup for `index`. Opening over an already
    /// open detail rebinds it, so at most one view exists.
    pub fn open_quintile_detail(&mut self, index: usize) {
        self.quintiles.selected = index;
        self.popup = PopupState::QuintileDetail { index, scroll: 0 };
    }

    /// Closes whatever popup is open. A no-op when none is.
    pub fn close_popup(&mut self) {
        self.popup = PopupState::None;
    }
}
