//! Export functionality for usage reports.
//!
//! This module provides exporters for writing usage reports to disk in
//! various formats: JSON, CSV and Markdown, plus the plain-text rendering
//! printed to the console after a run.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::report::UsageReport;

pub use self::csv::CsvExporter;
pub use self::json::JsonExporter;
pub use self::markdown::MarkdownExporter;
pub use self::text::TextExporter;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    #[default]
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl ExportFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
        }
    }

    /// Default report path for a report kind, e.g. `primevue-usage-stats.json`.
    pub fn default_path(&self, kind: &str) -> PathBuf {
        PathBuf::from(format!("{}-usage-stats.{}", kind, self.extension()))
    }
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

/// Trait for exporters that can write a usage report.
pub trait Exporter {
    /// Export the report to the given writer.
    fn export<R: UsageReport, W: Write>(&self, report: &R, writer: &mut W) -> io::Result<()>;
}

/// Export a report using the specified format.
pub fn export<R: UsageReport, W: Write>(
    format: ExportFormat,
    report: &R,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => JsonExporter.export(report, writer),
        ExportFormat::Csv => CsvExporter.export(report, writer),
        ExportFormat::Markdown => MarkdownExporter.export(report, writer),
    }
}

/// Write a report to `path`, replacing any existing file.
pub fn export_to_file<R: UsageReport>(
    format: ExportFormat,
    report: &R,
    path: &Path,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    export(format, report, &mut writer)?;
    writer.flush()
}
