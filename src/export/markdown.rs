//! Markdown export implementation.
//!
//! Produces a report-style document: study title, generation stamp, and one
//! pipe table per study table.

use std::io::{self, Write};

use super::{ExportData, Exporter};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Escapes pipe characters so cells cannot break table layout.
    fn escape_cell(value: &str) -> String {
        value.replace('|', "\\|")
    }

    fn write_row<W: Write>(writer: &mut W, cells: &[&str]) -> io::Result<()> {
        let line: Vec<String> = cells.iter().map(|c| Self::escape_cell(c)).collect();
        writeln!(writer, "| {} |", line.join(" | "))
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "# {}", data.study)?;
        writeln!(writer)?;
        writeln!(writer, "Generated: {}", data.generated_at)?;

        for table in &data.tables {
            writeln!(writer)?;
            writeln!(writer, "## {}", table.title)?;
            writeln!(writer)?;
            Self::write_row(writer, table.headers)?;
            let separator: Vec<&str> = table.headers.iter().map(|_| "---").collect();
            Self::write_row(writer, &separator)?;
            for row in &table.rows {
                Self::write_row(writer, row)?;
            }
        }
        Ok(())
    }
}
