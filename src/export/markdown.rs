//! Markdown export implementation.
//!
//! Exports usage reports in Markdown format for documentation and reporting.

use super::Exporter;
use crate::report::UsageReport;
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Escape pipe characters so labels do not break table cells.
    fn escape_cell(value: &str) -> String {
        value.replace('|', "\\|")
    }
}

impl Exporter for MarkdownExporter {
    fn export<R: UsageReport, W: Write>(&self, report: &R, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# {}", report.title())?;
        writeln!(writer)?;
        writeln!(writer, "**Generated:** {}", report.timestamp())?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        for row in report.summary_rows() {
            writeln!(writer, "| {} | {} |", row.label, row.value)?;
        }
        writeln!(writer)?;

        for section in report.sections() {
            writeln!(writer, "## {}", section.heading)?;
            writeln!(writer)?;

            if section.counts.is_empty() {
                writeln!(writer, "_No usage found._")?;
                writeln!(writer)?;
                continue;
            }

            writeln!(
                writer,
                "Total uses: {}, unique: {}",
                section.counts.total(),
                section.counts.unique()
            )?;
            writeln!(writer)?;
            writeln!(writer, "| # | Name | Count |")?;
            writeln!(writer, "|---|------|-------|")?;
            for (idx, (label, count)) in section.counts.iter().enumerate() {
                writeln!(
                    writer,
                    "| {} | `{}` | {} |",
                    idx + 1,
                    Self::escape_cell(label),
                    count
                )?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}
