//! Input handling and keybindings.
//!
//! Handlers are pure functions of the current state and one input event.
//! Nothing here touches the terminal; render picks the new state up on the
//! next frame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::content::StudyContent;

use super::state::{AppState, PopupState, Tab};

/// Result of handling an input event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, content: &StudyContent, key: KeyEvent) -> KeyAction {
    if state.popup == PopupState::QuitConfirm {
        return handle_quit_confirm(state, key);
    }
    handle_normal_mode(state, content, key)
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('y') => {
            state.close_popup();
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.close_popup();
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.close_popup();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_normal_mode(state: &mut AppState, content: &StudyContent, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Tab navigation (blocked while a detail popup is open)
        KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Char('1')
        | KeyCode::Char('2')
        | KeyCode::Char('3')
            if state.any_detail_open() =>
        {
            state.status_message = Some("Close popup (Esc) before switching tabs".to_string());
            KeyAction::None
        }
        KeyCode::Tab => {
            state.switch_tab(state.current_tab.next());
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.switch_tab(state.current_tab.prev());
            KeyAction::None
        }
        KeyCode::Char('1') => {
            state.switch_tab(Tab::Overview);
            KeyAction::None
        }
        KeyCode::Char('2') => {
            state.switch_tab(Tab::Quintiles);
            KeyAction::None
        }
        KeyCode::Char('3') => {
            state.switch_tab(Tab::Performance);
            KeyAction::None
        }

        // Row navigation, or popup scroll if a popup is open
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(scroll) = state.popup.scroll_mut() {
                *scroll = scroll.saturating_sub(1);
            } else if state.current_tab == Tab::Performance {
                state.performance.select_up();
            }
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(scroll) = state.popup.scroll_mut() {
                // Clamped against content during render
                *scroll = scroll.saturating_add(1);
            } else if state.current_tab == Tab::Performance {
                state.performance.select_down();
            }
            KeyAction::None
        }
        KeyCode::PageUp => {
            if let Some(scroll) = state.popup.scroll_mut() {
                *scroll = scroll.saturating_sub(10);
            } else if state.current_tab == Tab::Performance {
                state.performance.page_up(10);
            }
            KeyAction::None
        }
        KeyCode::PageDown => {
            if let Some(scroll) = state.popup.scroll_mut() {
                *scroll = scroll.saturating_add(10);
            } else if state.current_tab == Tab::Performance {
                state.performance.page_down(10);
            }
            KeyAction::None
        }
        KeyCode::Home => {
            if state.current_tab == Tab::Performance {
                state.performance.home();
            }
            KeyAction::None
        }
        KeyCode::End => {
            if state.current_tab == Tab::Performance {
                state.performance.end();
            }
            KeyAction::None
        }

        // Bar selection on the Quintiles tab. With a detail open the popup
        // follows the selection, so exactly one view stays open.
        KeyCode::Left | KeyCode::Char('h') => {
            if state.current_tab == Tab::Quintiles {
                state.quintiles.select_left();
                if state.any_detail_open() {
                    state.open_quintile_detail(state.quintiles.selected);
                }
            }
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if state.current_tab == Tab::Quintiles {
                state.quintiles.select_right(content.quintiles.len());
                if state.any_detail_open() {
                    state.open_quintile_detail(state.quintiles.selected);
                }
            }
            KeyAction::None
        }

        // Detail popup (Enter on the Quintiles tab toggles it)
        KeyCode::Enter => {
            if state.current_tab == Tab::Quintiles && !content.quintiles.is_empty() {
                if state.any_detail_open() {
                    state.close_popup();
                } else {
                    state.open_quintile_detail(state.quintiles.selected);
                }
            }
            KeyAction::None
        }

        // Sorting: `s` activates the next column (resets to ascending),
        // `r` re-activates the current one (alternates direction).
        KeyCode::Char('s') | KeyCode::Char('S') => {
            if state.current_tab == Tab::Performance {
                if let Some(count) = column_count(state, content) {
                    let next = state
                        .performance
                        .sort()
                        .column
                        .map(|c| (c + 1) % count)
                        .unwrap_or(0);
                    state.performance.sort_mut().activate(next);
                }
            }
            KeyAction::None
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if state.current_tab == Tab::Performance && column_count(state, content).is_some() {
                let current = state.performance.sort().column.unwrap_or(0);
                state.performance.sort_mut().activate(current);
            }
            KeyAction::None
        }

        // Performance view cycling
        KeyCode::Char('v') | KeyCode::Char('V') => {
            if state.current_tab == Tab::Performance {
                state.performance.next_view();
            }
            KeyAction::None
        }

        // Help popup
        KeyCode::Char('?') | KeyCode::Char('H') => {
            state.popup = if matches!(state.popup, PopupState::Help { .. }) {
                PopupState::None
            } else {
                PopupState::Help { scroll: 0 }
            };
            KeyAction::None
        }

        // Close popups with Escape
        KeyCode::Esc => {
            state.status_message = None;
            state.close_popup();
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Handles mouse input. Hit regions come from the previous render pass.
pub fn handle_mouse(state: &mut AppState, content: &StudyContent, mouse: MouseEvent) -> KeyAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return KeyAction::None;
    }
    let pos = Position::new(mouse.column, mouse.row);

    // An open popup swallows clicks: inside its content region nothing
    // happens, outside it the popup is dismissed.
    if state.popup.is_open() {
        if !state.hits.in_popup(pos) {
            state.close_popup();
        }
        return KeyAction::None;
    }

    if let Some(tab) = state.hits.tab_at(pos) {
        state.switch_tab(tab);
    } else if state.current_tab == Tab::Quintiles {
        if let Some(index) = state.hits.bar_at(pos) {
            if index < content.quintiles.len() {
                state.open_quintile_detail(index);
            }
        }
    } else if state.current_tab == Tab::Performance {
        if let Some(column) = state.hits.header_column_at(pos) {
            if column_count(state, content).is_some_and(|count| column < count) {
                state.performance.sort_mut().activate(column);
            }
        }
    }
    // A click with nothing under it (including a dismiss with no popup
    // open) is a no-op.
    KeyAction::None
}

/// Column count of the table backing the current performance view.
fn column_count(state: &AppState, content: &StudyContent) -> Option<usize> {
    content
        .table(state.performance.view.table_id())
        .map(|t| t.headers.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::table::SortDirection;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn setup() -> (AppState, StudyContent) {
        (AppState::new(), StudyContent::load())
    }

    #[test]
    fn quit_requires_confirmation_and_quits_on_qq() {
        let (mut state, content) = setup();

        let action = handle_key(&mut state, &content, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        let action = handle_key(&mut state, &content, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn quit_confirmation_cancels_on_esc() {
        let (mut state, content) = setup();

        let _ = handle_key(&mut state, &content, key(KeyCode::Char('q')));
        let action = handle_key(&mut state, &content, key(KeyCode::Esc));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn tab_keys_switch_tabs() {
        let (mut state, content) = setup();
        assert_eq!(state.current_tab, Tab::Overview);

        let _ = handle_key(&mut state, &content, key(KeyCode::Char('3')));
        assert_eq!(state.current_tab, Tab::Performance);

        let _ = handle_key(&mut state, &content, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Overview);

        let _ = handle_key(&mut state, &content, key(KeyCode::BackTab));
        assert_eq!(state.current_tab, Tab::Performance);
    }

    #[test]
    fn tab_switch_blocked_while_detail_open() {
        let (mut state, content) = setup();
        state.switch_tab(Tab::Quintiles);
        let _ = handle_key(&mut state, &content, key(KeyCode::Enter));
        assert!(state.any_detail_open());

        let _ = handle_key(&mut state, &content, key(KeyCode::Char('3')));
        assert_eq!(state.current_tab, Tab::Quintiles);
        assert!(state.status_message.is_some());

        // Esc closes the popup, then switching works.
        let _ = handle_key(&mut state, &content, key(KeyCode::Esc));
        assert!(!state.any_detail_open());
        let _ = handle_key(&mut state, &content, key(KeyCode::Char('3')));
        assert_eq!(state.current_tab, Tab::Performance);
    }

    #[test]
    fn enter_toggles_quintile_detail() {
        let (mut state, content) = setup();
        state.switch_tab(Tab::Quintiles);

        let _ = handle_key(&mut state, &content, key(KeyCode::Enter));
        assert_eq!(
            state.popup,
            PopupState::QuintileDetail {
                index: 0,
                scroll: 0
            }
        );

        let _ = handle_key(&mut state, &content, key(KeyCode::Enter));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn selection_moves_rebind_an_open_detail() {
        let (mut state, content) = setup();
        state.switch_tab(Tab::Quintiles);
        let _ = handle_key(&mut state, &content, key(KeyCode::Enter));

        let _ = handle_key(&mut state, &content, key(KeyCode::Right));
        assert_eq!(
            state.popup,
            PopupState::QuintileDetail {
                index: 1,
                scroll: 0
            }
        );

        // Selection clamps at the last observation.
        for _ in 0..10 {
            let _ = handle_key(&mut state, &content, key(KeyCode::Char('l')));
        }
        assert_eq!(state.quintiles.selected, content.quintiles.len() - 1);
    }

    #[test]
    fn sort_keys_cycle_and_toggle() {
        let (mut state, content) = setup();
        state.switch_tab(Tab::Performance);

        // First `s` activates column 0 ascending.
        let _ = handle_key(&mut state, &content, key(KeyCode::Char('s')));
        assert_eq!(state.performance.sort().column, Some(0));
        assert_eq!(state.performance.sort().direction, SortDirection::Ascending);

        // `r` re-activates the same column: ascending flips to descending.
        let _ = handle_key(&mut state, &content, key(KeyCode::Char('r')));
        assert_eq!(state.performance.sort().direction, SortDirection::Descending);

        // `s` moves on to the next column and resets to ascending.
        let _ = handle_key(&mut state, &content, key(KeyCode::Char('s')));
        assert_eq!(state.performance.sort().column, Some(1));
        assert_eq!(state.performance.sort().direction, SortDirection::Ascending);
    }

    #[test]
    fn sort_keys_ignored_outside_performance_tab() {
        let (mut state, content) = setup();
        let _ = handle_key(&mut state, &content, key(KeyCode::Char('s')));
        assert_eq!(state.performance.sort().column, None);
    }

    #[test]
    fn view_cycling_keeps_per_view_sort() {
        let (mut state, content) = setup();
        state.switch_tab(Tab::Performance);

        let _ = handle_key(&mut state, &content, key(KeyCode::Char('s')));
        let first_view = state.performance.view;

        let _ = handle_key(&mut state, &content, key(KeyCode::Char('v')));
        assert_ne!(state.performance.view, first_view);
        assert_eq!(state.performance.sort().column, None);
    }

    #[test]
    fn help_toggles_and_scrolls() {
        let (mut state, content) = setup();
        let _ = handle_key(&mut state, &content, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::Help { scroll: 0 });

        let _ = handle_key(&mut state, &content, key(KeyCode::Down));
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });

        let _ = handle_key(&mut state, &content, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn mouse_click_on_bar_opens_exactly_one_detail() {
        let (mut state, content) = setup();
        state.switch_tab(Tab::Quintiles);
        state.hits.bars = (0..5u16)
            .map(|i| Rect::new(2 + i * 9, 4, 7, 12))
            .collect();

        let _ = handle_mouse(&mut state, &content, click(3, 6));
        assert_eq!(
            state.popup,
            PopupState::QuintileDetail {
                index: 0,
                scroll: 0
            }
        );

        // Clicking a second bar dismisses the popup first (outside click),
        // a further click then opens the new one.
        state.hits.popup = Some(Rect::new(20, 8, 40, 10));
        let _ = handle_mouse(&mut state, &content, click(12, 6));
        assert_eq!(state.popup, PopupState::None);
        let _ = handle_mouse(&mut state, &content, click(12, 6));
        assert_eq!(
            state.popup,
            PopupState::QuintileDetail {
                index: 1,
                scroll: 0
            }
        );
    }

    #[test]
    fn mouse_click_inside_popup_keeps_it_open() {
        let (mut state, content) = setup();
        state.open_quintile_detail(2);
        state.hits.popup = Some(Rect::new(10, 5, 40, 10));

        let _ = handle_mouse(&mut state, &content, click(15, 7));
        assert!(state.any_detail_open());

        let _ = handle_mouse(&mut state, &content, click(0, 0));
        assert!(!state.any_detail_open());
    }

    #[test]
    fn mouse_click_with_nothing_open_is_a_no_op() {
        let (mut state, content) = setup();
        let action = handle_mouse(&mut state, &content, click(50, 20));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::None);
        assert_eq!(state.current_tab, Tab::Overview);
    }

    #[test]
    fn mouse_click_on_header_cell_activates_sort() {
        let (mut state, content) = setup();
        state.switch_tab(Tab::Performance);
        state.hits.header_cells = vec![
            Rect::new(1, 2, 18, 1),
            Rect::new(20, 2, 10, 1),
            Rect::new(31, 2, 30, 1),
        ];

        let _ = handle_mouse(&mut state, &content, click(22, 2));
        assert_eq!(state.performance.sort().column, Some(1));
        assert_eq!(state.performance.sort().direction, SortDirection::Ascending);

        // Clicking the same header again flips the direction.
        let _ = handle_mouse(&mut state, &content, click(22, 2));
        assert_eq!(state.performance.sort().direction, SortDirection::Descending);

        // A different header resets to ascending.
        let _ = handle_mouse(&mut state, &content, click(2, 2));
        assert_eq!(state.performance.sort().column, Some(0));
        assert_eq!(state.performance.sort().direction, SortDirection::Ascending);
    }

    #[test]
    fn mouse_click_on_tab_label_switches_tab() {
        let (mut state, content) = setup();
        state.hits.tabs = vec![
            (Rect::new(30, 0, 7, 1), Tab::Overview),
            (Rect::new(37, 0, 7, 1), Tab::Quintiles),
        ];
        let _ = handle_mouse(&mut state, &content, click(38, 0));
        assert_eq!(state.current_tab, Tab::Quintiles);
    }
}
