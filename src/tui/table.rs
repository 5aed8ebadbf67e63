//! Generic sortable table: sort state, type inference, stable ordering.
//!
//! Tables carry their cells as display text. Before a sort the column is
//! inspected: if every cell survives the stripping rule (drop everything but
//! digits, decimal point, and minus sign) and parses as a number, the column
//! compares numerically for that sort; otherwise it compares textually.

use std::cmp::Ordering;

/// Sort direction for an active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator for the active column.
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Per-table sort state. At most one column is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// Active column index, `None` until the first activation.
    pub column: Option<usize>,
    /// Direction of the active column.
    pub direction: SortDirection,
}

impl SortState {
    /// Activates a column. Re-activating the column that is already active
    /// and ascending flips it to descending; every other activation (a
    /// different column, or no prior state) resets to ascending.
    pub fn activate(&mut self, column: usize) {
        self.direction = if self.column == Some(column)
            && self.direction == SortDirection::Ascending
        {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.column = Some(column);
    }

    /// Header indicator for `column`, empty for inactive columns.
    pub fn indicator(&self, column: usize) -> &'static str {
        if self.column == Some(column) {
            self.direction.indicator()
        } else {
            ""
        }
    }
}

/// Comparison mode inferred for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Textual,
}

/// Strips a display cell down to digits, `.` and `-`, then parses it.
/// `"$1,200"` parses as 1200; `"N/A"` and empty cells do not parse.
pub fn numeric_value(cell: &str) -> Option<f64> {
    let stripped: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    stripped.parse::<f64>().ok()
}

/// Infers the comparison mode for `column` by inspecting every row.
/// A missing or unparseable cell anywhere demotes the column to textual.
pub fn infer_column_kind<S: AsRef<str>>(rows: &[Vec<S>], column: usize) -> ColumnKind {
    let all_numeric = rows.iter().all(|row| {
        row.get(column)
            .and_then(|cell| numeric_value(cell.as_ref()))
            .is_some()
    });
    if all_numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Textual
    }
}

/// Case-insensitive collation of trimmed display text, with the raw text as
/// a tiebreaker. Stands in for locale collation: digits order before
/// letters, case differences do not dominate.
fn compare_textual(a: &str, b: &str) -> Ordering {
    let a = a.trim();
    let b = b.trim();
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Compares two rows at `column` under the inferred mode. Missing cells
/// compare as empty text or as the lowest numeric key.
fn compare_cells<S: AsRef<str>>(a: &[S], b: &[S], column: usize, kind: ColumnKind) -> Ordering {
    let cell_a = a.get(column).map(|c| c.as_ref()).unwrap_or("");
    let cell_b = b.get(column).map(|c| c.as_ref()).unwrap_or("");
    match kind {
        ColumnKind::Numeric => {
            let va = numeric_value(cell_a).unwrap_or(f64::NEG_INFINITY);
            let vb = numeric_value(cell_b).unwrap_or(f64::NEG_INFINITY);
            va.partial_cmp(&vb).unwrap_or(Ordering::Equal)
        }
        ColumnKind::Textual => compare_textual(cell_a, cell_b),
    }
}

/// Reorders `rows` by `column` in the given direction. The sort is stable:
/// rows with equal keys keep their current relative order. A zero-row table
/// is returned unchanged; the operation never panics.
pub fn sort_rows<S: AsRef<str>>(rows: &mut [Vec<S>], column: usize, direction: SortDirection) {
    let kind = infer_column_kind(rows, column);
    rows.sort_by(|a, b| {
        let cmp = compare_cells(a, b, column, kind);
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

/// Activates `column` on `state` and applies the resulting order to `rows`.
pub fn activate_and_sort<S: AsRef<str>>(
    rows: &mut [Vec<S>],
    column: usize,
    state: &mut SortState,
) {
    state.activate(column);
    sort_rows(rows, column, state.direction);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(cells: &[&[&str]]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn column(rows: &[Vec<String>], col: usize) -> Vec<&str> {
        rows.iter().map(|r| r[col].as_str()).collect()
    }

    #[test]
    fn activation_toggles_only_on_repeated_ascending() {
        let mut state = SortState::default();

        state.activate(2);
        assert_eq!(state.column, Some(2));
        assert_eq!(state.direction, SortDirection::Ascending);

        state.activate(2);
        assert_eq!(state.direction, SortDirection::Descending);

        // Third activation of the same column goes back to ascending.
        state.activate(2);
        assert_eq!(state.direction, SortDirection::Ascending);

        // Switching columns always resets to ascending.
        state.activate(2);
        assert_eq!(state.direction, SortDirection::Descending);
        state.activate(0);
        assert_eq!(state.column, Some(0));
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn currency_column_sorts_numerically() {
        let mut data = rows(&[&["$1,200"], &["$300"], &["$45"]]);
        assert_eq!(infer_column_kind(&data, 0), ColumnKind::Numeric);

        sort_rows(&mut data, 0, SortDirection::Ascending);
        assert_eq!(column(&data, 0), ["$45", "$300", "$1,200"]);

        sort_rows(&mut data, 0, SortDirection::Descending);
        assert_eq!(column(&data, 0), ["$1,200", "$300", "$45"]);
    }

    #[test]
    fn mixed_column_falls_back_to_textual() {
        let mut data = rows(&[&["Apple"], &["42"], &["Banana"]]);
        assert_eq!(infer_column_kind(&data, 0), ColumnKind::Textual);

        sort_rows(&mut data, 0, SortDirection::Ascending);
        assert_eq!(column(&data, 0), ["42", "Apple", "Banana"]);
    }

    #[test]
    fn sort_preserves_row_multiset() {
        let mut data = rows(&[
            &["5-Day", "+0.015"],
            &["10-Day", "+0.011"],
            &["1-Day", "+0.002"],
        ]);
        let mut before: Vec<String> = data.iter().map(|r| r.join("|")).collect();
        before.sort();

        let mut state = SortState::default();
        activate_and_sort(&mut data, 1, &mut state);
        activate_and_sort(&mut data, 1, &mut state);
        assert_eq!(state.direction, SortDirection::Descending);

        let mut after: Vec<String> = data.iter().map(|r| r.join("|")).collect();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let mut data = rows(&[
            &["b", "1"],
            &["first", "2"],
            &["second", "2"],
            &["a", "1"],
        ]);
        sort_rows(&mut data, 1, SortDirection::Ascending);
        assert_eq!(column(&data, 0), ["b", "a", "first", "second"]);
    }

    #[test]
    fn negative_and_signed_values_sort_numerically() {
        let mut data = rows(&[&["+3.065"], &["-2.913"], &["0.0"]]);
        assert_eq!(infer_column_kind(&data, 0), ColumnKind::Numeric);
        sort_rows(&mut data, 0, SortDirection::Ascending);
        assert_eq!(column(&data, 0), ["-2.913", "0.0", "+3.065"]);
    }

    #[test]
    fn missing_cells_sort_lowest_ascending() {
        let mut data = vec![
            vec!["x".to_string(), "beta".to_string()],
            vec!["y".to_string()],
            vec!["z".to_string(), "alpha".to_string()],
        ];
        // Ragged rows demote the column to textual.
        assert_eq!(infer_column_kind(&data, 1), ColumnKind::Textual);
        sort_rows(&mut data, 1, SortDirection::Ascending);
        assert_eq!(column(&data, 0), ["y", "z", "x"]);
    }

    #[test]
    fn zero_rows_is_a_no_op() {
        let mut data: Vec<Vec<String>> = Vec::new();
        sort_rows(&mut data, 3, SortDirection::Descending);
        assert!(data.is_empty());

        let mut state = SortState::default();
        activate_and_sort(&mut data, 3, &mut state);
        assert_eq!(state.column, Some(3));
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn stripping_rule_quirks_demote_to_textual() {
        // Two decimal points fail the parse, so the column is textual.
        let data = rows(&[&["1.2.3"], &["4.5"]]);
        assert_eq!(infer_column_kind(&data, 0), ColumnKind::Textual);

        // "N/A" strips to the empty string.
        assert_eq!(numeric_value("N/A"), None);
        assert_eq!(numeric_value(""), None);
        assert_eq!(numeric_value("49.88%"), Some(49.88));
        assert_eq!(numeric_value("-39.01%"), Some(-39.01));
        assert_eq!(numeric_value("$1,200"), Some(1200.0));
    }

    #[test]
    fn indicator_marks_exactly_the_active_column() {
        let mut state = SortState::default();
        assert_eq!(state.indicator(0), "");

        state.activate(1);
        assert_eq!(state.indicator(0), "");
        assert_eq!(state.indicator(1), "▲");

        state.activate(1);
        assert_eq!(state.indicator(1), "▼");
    }

    #[test]
    fn textual_comparison_folds_case() {
        let mut data = rows(&[&["banana"], &["Apple"], &["cherry"]]);
        sort_rows(&mut data, 0, SortDirection::Ascending);
        assert_eq!(column(&data, 0), ["Apple", "banana", "cherry"]);
    }
}
