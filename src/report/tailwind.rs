//! Tailwind usage report.

use serde::Serialize;

use super::{serialize_pairs, ReportSection, SummaryRow, UsageReport};
use crate::analysis::{ClassAccumulator, RankedCounts};

/// Ranked classes of one utility category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassCategory {
    pub total: usize,
    pub unique: usize,
    pub classes: RankedCounts,
}

impl ClassCategory {
    pub fn new(classes: RankedCounts) -> Self {
        Self {
            total: classes.total(),
            unique: classes.unique(),
            classes,
        }
    }
}

/// Final Tailwind usage report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindReport {
    pub timestamp: String,
    pub total_files: usize,
    #[serde(serialize_with = "serialize_pairs")]
    pub categories: Vec<(String, ClassCategory)>,
    /// Colors with a non-zero count, in palette order.
    pub used_tailwind_colors: RankedCounts,
}

impl TailwindReport {
    pub fn from_accumulator(acc: &ClassAccumulator, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            total_files: acc.total_files,
            categories: acc
                .categories
                .iter()
                .map(|(name, tally)| (name.clone(), ClassCategory::new(tally.rank())))
                .collect(),
            used_tailwind_colors: RankedCounts::in_order(
                acc.colors.iter().map(|(c, n)| (c.as_str(), *n)),
            ),
        }
    }

    pub fn category(&self, name: &str) -> Option<&ClassCategory> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }
}

impl UsageReport for TailwindReport {
    fn title(&self) -> &str {
        "Tailwind CSS Usage Analysis"
    }

    fn timestamp(&self) -> &str {
        &self.timestamp
    }

    fn summary_rows(&self) -> Vec<SummaryRow> {
        let mut rows = vec![SummaryRow::new("Total files analyzed", self.total_files)];
        rows.extend(self.categories.iter().map(|(name, category)| {
            SummaryRow::new(format!("{} classes used", name), category.total)
        }));
        rows.push(SummaryRow::new(
            "Colors used",
            self.used_tailwind_colors.unique(),
        ));
        rows
    }

    fn sections(&self) -> Vec<ReportSection<'_>> {
        let mut sections: Vec<ReportSection<'_>> = self
            .categories
            .iter()
            .map(|(name, category)| ReportSection {
                name,
                heading: capitalize(name),
                counts: &category.classes,
            })
            .collect();
        sections.push(ReportSection {
            name: "usedTailwindColors",
            heading: "Used Colors".to_string(),
            counts: &self.used_tailwind_colors,
        });
        sections
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ClassAnalyzer;
    use crate::patterns::tailwind_patterns;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn report_for(content: &str) -> TailwindReport {
        let analyzer = ClassAnalyzer::new(tailwind_patterns().unwrap());
        let mut acc = ClassAccumulator::new(analyzer.patterns());
        acc.total_files = 1;
        analyzer.analyze_source(content, &mut acc);
        TailwindReport::from_accumulator(&acc, "2024-01-01T00:00:00.000Z")
    }

    #[test]
    fn test_json_shape() {
        let report = report_for(r#"<div class="bg-blue-500 text-white rounded"></div>"#);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value,
            json!({
                "timestamp": "2024-01-01T00:00:00.000Z",
                "totalFiles": 1,
                "categories": {
                    "background": {"total": 1, "unique": 1, "classes": {"bg-blue-500": 1}},
                    "text": {"total": 1, "unique": 1, "classes": {"text-white": 1}},
                    "border": {"total": 0, "unique": 0, "classes": {}},
                    "shadow": {"total": 0, "unique": 0, "classes": {}},
                    "rounded": {"total": 1, "unique": 1, "classes": {"rounded": 1}}
                },
                "usedTailwindColors": {"blue": 1, "white": 1}
            })
        );
    }

    #[test]
    fn test_colors_keep_palette_order() {
        let report = report_for(
            r#"<p class="text-white bg-white border-zinc-200"></p>"#,
        );
        let colors: Vec<&str> = report.used_tailwind_colors.iter().map(|(c, _)| c).collect();
        assert_eq!(colors, vec!["zinc", "white"]);
        assert_eq!(report.used_tailwind_colors.get("white"), Some(2));
    }

    #[test]
    fn test_empty_report() {
        let report = report_for("");
        assert!(report.used_tailwind_colors.is_empty());
        assert!(report.categories.iter().all(|(_, c)| c.total == 0 && c.unique == 0));
    }

    #[test]
    fn test_sections_include_colors() {
        let report = report_for(r#"<div class="shadow-md"></div>"#);
        let names: Vec<&str> = report.sections().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["background", "text", "border", "shadow", "rounded", "usedTailwindColors"]
        );
        assert_eq!(report.category("shadow").unwrap().classes.get("shadow-md"), Some(1));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("background"), "Background");
        assert_eq!(capitalize(""), "");
    }
}
