//! Plain-text rendering for the console.
//!
//! Shows the summary and the top entries of each section. This is not a
//! file format; it is printed after the report file has been written.

use super::Exporter;
use crate::report::UsageReport;
use std::io::{self, Write};

/// Default number of entries shown per section.
pub const DEFAULT_TOP_N: usize = 10;

/// Console summary exporter.
#[derive(Debug, Clone, Copy)]
pub struct TextExporter {
    /// Entries shown per section.
    pub top_n: usize,
}

impl Default for TextExporter {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl TextExporter {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }
}

impl Exporter for TextExporter {
    fn export<R: UsageReport, W: Write>(&self, report: &R, writer: &mut W) -> io::Result<()> {
        let rule = "=".repeat(60);
        writeln!(writer)?;
        writeln!(writer, "{}", rule)?;
        writeln!(writer, "{} - COMPLETE", report.title().to_uppercase())?;
        writeln!(writer, "{}", rule)?;

        writeln!(writer)?;
        writeln!(writer, "SUMMARY:")?;
        for row in report.summary_rows() {
            writeln!(writer, "  {}: {}", row.label, row.value)?;
        }

        for section in report.sections() {
            writeln!(writer)?;
            writeln!(writer, "{}:", section.heading.to_uppercase())?;
            writeln!(writer, "  Total uses: {}", section.counts.total())?;
            writeln!(writer, "  Unique: {}", section.counts.unique())?;

            let top = section.counts.top(self.top_n);
            if top.is_empty() {
                continue;
            }
            if top.len() < section.counts.unique() {
                writeln!(writer, "  Top {}:", top.len())?;
            }
            for (idx, (label, count)) in top.iter().enumerate() {
                writeln!(writer, "    {}. {}: {} times", idx + 1, label, count)?;
            }
        }

        Ok(())
    }
}
