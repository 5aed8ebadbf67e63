//! Export functionality for the embedded study tables.
//!
//! This module provides exporters for dumping the study datasets in JSON,
//! CSV, and Markdown, mirroring the asset dumps the published report was
//! generated from.

pub mod csv;
pub mod json;
pub mod markdown;

use std::io::{self, Write};

use chrono::Local;
use serde::Serialize;

use crate::content::{QuintileObservation, StudyContent, StudyTable};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    /// Study title
    pub study: &'static str,
    /// Export timestamp (RFC 3339, local offset)
    pub generated_at: String,
    /// Quintile observations with full precision
    pub quintiles: Vec<QuintileObservation>,
    /// All study tables as display text
    pub tables: Vec<StudyTable>,
}

impl ExportData {
    /// Builds the export container from the embedded study content.
    pub fn new(content: &StudyContent) -> Self {
        Self {
            study: content.title,
            generated_at: Local::now().to_rfc3339(),
            quintiles: content.quintiles.clone(),
            tables: content.tables.clone(),
        }
    }
}

/// Trait for export format implementations.
pub trait Exporter {
    /// Writes the export data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Exports `data` in `format` to `writer`.
pub fn write_export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}
