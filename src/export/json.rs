//! JSON export implementation.

use std::io::{self, Write};

use super::{ExportData, Exporter};

/// JSON exporter implementation.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, data)?;
        writeln!(writer)
    }
}
