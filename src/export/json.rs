//! JSON export implementation.
//!
//! Writes the full report as pretty-printed JSON. Category objects keep the
//! ranked order, most used first.

use super::Exporter;
use crate::report::UsageReport;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export<R: UsageReport, W: Write>(&self, report: &R, writer: &mut W) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ClassAccumulator, ClassAnalyzer};
    use crate::patterns::tailwind_patterns;
    use crate::report::TailwindReport;

    fn create_test_report() -> TailwindReport {
        let analyzer = ClassAnalyzer::new(tailwind_patterns().unwrap());
        let mut acc = ClassAccumulator::new(analyzer.patterns());
        acc.total_files = 2;
        analyzer.analyze_source(
            r#"<div class="bg-red-500 shadow-lg"></div><p :class="{ 'bg-sky-100': on }"></p>"#,
            &mut acc,
        );
        TailwindReport::from_accumulator(&acc, "2024-01-01T00:00:00.000Z")
    }

    #[test]
    fn test_json_export_valid() {
        let report = create_test_report();
        let mut output = Vec::new();

        JsonExporter.export(&report, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        assert_eq!(parsed["totalFiles"], 2);
        // `'bg-sky-100':` and `bg-sky-100` are distinct tokens that both match
        assert_eq!(parsed["categories"]["background"]["total"], 3);
        assert_eq!(parsed["categories"]["background"]["unique"], 2);
        assert_eq!(parsed["categories"]["shadow"]["classes"]["shadow-lg"], 1);
        assert_eq!(parsed["usedTailwindColors"]["red"], 1);
        assert_eq!(parsed["usedTailwindColors"]["sky"], 2);
    }

    #[test]
    fn test_json_export_is_pretty() {
        let report = create_test_report();
        let mut output = Vec::new();

        JsonExporter.export(&report, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        assert!(json_str.starts_with("{\n  \"timestamp\""));
        assert!(json_str.ends_with("}\n"));
    }
}
