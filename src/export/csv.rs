//! CSV export implementation.
//!
//! Exports one `category,label,count` row per counted label for spreadsheet use.

use super::Exporter;
use crate::report::UsageReport;
use std::io::{self, Write};

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
}

impl Exporter for CsvExporter {
    fn export<R: UsageReport, W: Write>(&self, report: &R, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "category,label,count")?;

        for section in report.sections() {
            for (label, count) in section.counts.iter() {
                writeln!(
                    writer,
                    "{},{},{}",
                    Self::escape_field(section.name),
                    Self::escape_field(label),
                    count
                )?;
            }
        }

        Ok(())
    }
}
