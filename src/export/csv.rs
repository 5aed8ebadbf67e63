//! CSV export implementation.
//!
//! Each study table becomes one CSV section, preceded by a `#` comment line
//! with the table title and separated by blank lines.

use std::io::{self, Write};

use super::{ExportData, Exporter};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    fn write_row<W: Write>(writer: &mut W, cells: &[&str]) -> io::Result<()> {
        let line: Vec<String> = cells.iter().map(|c| Self::escape_field(c)).collect();
        writeln!(writer, "{}", line.join(","))
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        for (i, table) in data.tables.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            writeln!(writer, "# {}", table.title)?;
            Self::write_row(writer, table.headers)?;
            for row in &table.rows {
                Self::write_row(writer, row)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StudyContent;

    fn export_to_string() -> String {
        let content = StudyContent::load();
        let data = ExportData::new(&content);
        let mut output = Vec::new();
        CsvExporter.export(&data, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn csv_export_writes_one_section_per_table() {
        let csv = export_to_string();
        let content = StudyContent::load();

        let titles: Vec<&str> = csv
            .lines()
            .filter(|l| l.starts_with("# "))
            .collect();
        assert_eq!(titles.len(), content.tables.len());
        assert!(csv.contains("Metric,Value,Interpretation"));
        assert!(csv.contains("Sharpe Ratio,0.231,Positive risk-adjusted returns"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let csv = export_to_string();
        // "33,362 quarterly calls" carries a comma and must be quoted.
        assert!(csv.contains("\"33,362 quarterly calls\""));
    }

    #[test]
    fn escape_field_doubles_quotes() {
        assert_eq!(CsvExporter::escape_field("plain"), "plain");
        assert_eq!(CsvExporter::escape_field("a,b"), "\"a,b\"");
        assert_eq!(CsvExporter::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
