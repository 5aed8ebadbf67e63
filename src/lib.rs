//! tonelens - Terminal viewer for the earnings call tone dispersion study.
//!
//! This library provides the functionality behind the `tonelens` binary:
//! - `content` - embedded study datasets (metric tables, quintile returns)
//! - `tui` - interactive TUI for browsing the study results
//! - `export` - JSON/CSV/Markdown dumps of the study tables

pub mod content;
pub mod export;
pub mod tui;
