//! Utility-class categorization and color tagging.
//!
//! Class identifiers are pulled out of each file with
//! [`extract_classes`](crate::extract::extract_classes) and then matched
//! against the category rules. Every matched substring is counted under its
//! category and checked against the color families.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::tally::Tally;
use crate::extract::extract_classes;
use crate::patterns::ClassPatterns;
use crate::scan::{self, ScanOptions};

/// Running totals for the class pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassAccumulator {
    /// Files that passed the extension filter.
    pub total_files: usize,
    /// `(category name, tally of matched classes)` in category order.
    pub categories: Vec<(String, Tally)>,
    /// `(color, count)` in color-list order, zero-initialized.
    pub colors: Vec<(String, usize)>,
}

impl ClassAccumulator {
    pub fn new(patterns: &ClassPatterns) -> Self {
        Self {
            total_files: 0,
            categories: patterns
                .categories
                .labels()
                .map(|label| (label.to_string(), Tally::new()))
                .collect(),
            colors: patterns.colors.iter().map(|c| (c.clone(), 0)).collect(),
        }
    }

    pub fn category(&self, name: &str) -> Option<&Tally> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    pub fn color(&self, name: &str) -> usize {
        self.colors
            .iter()
            .find(|(c, _)| c == name)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

/// Categorizes extracted class identifiers.
#[derive(Debug, Clone)]
pub struct ClassAnalyzer {
    patterns: ClassPatterns,
}

impl ClassAnalyzer {
    pub fn new(patterns: ClassPatterns) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &ClassPatterns {
        &self.patterns
    }

    /// Count one class identifier into `acc`.
    pub fn record_class(&self, class: &str, acc: &mut ClassAccumulator) {
        for (rule, (_, tally)) in self
            .patterns
            .categories
            .rules
            .iter()
            .zip(acc.categories.iter_mut())
        {
            for m in rule.regex.find_iter(class) {
                let matched = m.as_str();
                tally.increment(matched);
                for idx in self.patterns.color_hits(matched) {
                    acc.colors[idx].1 += 1;
                }
            }
        }
    }

    /// Extract and count the classes in `content`.
    pub fn analyze_source(&self, content: &str, acc: &mut ClassAccumulator) {
        for class in extract_classes(content) {
            self.record_class(&class, acc);
        }
    }

    /// Analyze a list of files into a fresh accumulator.
    pub fn analyze_files(&self, files: &[PathBuf]) -> ClassAccumulator {
        let mut acc = ClassAccumulator::new(&self.patterns);

        for path in files {
            acc.total_files += 1;

            match scan::read_source(path) {
                Ok(content) => {
                    debug!("Extracting classes from {}", path.display());
                    self.analyze_source(&content, &mut acc);
                }
                Err(e) => {
                    warn!("Error processing {}", e);
                }
            }
        }

        acc
    }

    /// Walk `root` and analyze every eligible file.
    pub fn analyze_project(&self, root: &Path, options: &ScanOptions) -> ClassAccumulator {
        info!("Analyzing {}", root.display());
        let files = scan::collect_files(root, options);
        self.analyze_files(&files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{tailwind_patterns, PatternTable};
    use std::fs;
    use tempfile::TempDir;

    fn analyzer() -> ClassAnalyzer {
        ClassAnalyzer::new(tailwind_patterns().unwrap())
    }

    fn fresh(analyzer: &ClassAnalyzer) -> ClassAccumulator {
        ClassAccumulator::new(analyzer.patterns())
    }

    #[test]
    fn test_background_class_tags_color() {
        let analyzer = analyzer();
        let mut acc = fresh(&analyzer);
        analyzer.record_class("bg-blue-500", &mut acc);

        assert_eq!(acc.category("background").unwrap().get("bg-blue-500"), 1);
        assert_eq!(acc.color("blue"), 1);
    }

    #[test]
    fn test_text_class_does_not_touch_background() {
        let analyzer = analyzer();
        let mut acc = fresh(&analyzer);
        analyzer.record_class("text-slate-700", &mut acc);

        assert_eq!(acc.category("text").unwrap().get("text-slate-700"), 1);
        assert_eq!(acc.color("slate"), 1);
        assert!(acc.category("background").unwrap().is_empty());
    }

    #[test]
    fn test_variant_prefix_matches_inner_class() {
        let analyzer = analyzer();
        let mut acc = fresh(&analyzer);
        analyzer.record_class("hover:bg-red-600", &mut acc);
        analyzer.record_class("rounded", &mut acc);

        assert_eq!(acc.category("background").unwrap().get("bg-red-600"), 1);
        assert_eq!(acc.category("rounded").unwrap().get("rounded"), 1);
        assert_eq!(acc.color("red"), 1);
    }

    #[test]
    fn test_border_color_counts_once_per_match() {
        let analyzer = analyzer();
        let mut acc = fresh(&analyzer);
        analyzer.record_class("border-white", &mut acc);

        assert_eq!(acc.category("border").unwrap().get("border-white"), 1);
        assert_eq!(acc.color("white"), 1);
    }

    #[test]
    fn test_analyze_source_dedupes_within_file() {
        let analyzer = analyzer();
        let mut acc = fresh(&analyzer);
        analyzer.analyze_source(
            r#"<div class="bg-white shadow"><p class="bg-white text-gray-500"></p></div>"#,
            &mut acc,
        );

        assert_eq!(acc.category("background").unwrap().get("bg-white"), 1);
        assert_eq!(acc.category("shadow").unwrap().get("shadow"), 1);
        assert_eq!(acc.category("text").unwrap().get("text-gray-500"), 1);
        assert_eq!(acc.color("white"), 1);
        assert_eq!(acc.color("gray"), 1);
    }

    #[test]
    fn test_object_key_counts_match_with_and_without_variant() {
        let analyzer = analyzer();

        let mut plain = fresh(&analyzer);
        analyzer.analyze_source(r#"<p :class="{ 'bg-red-500': on }"></p>"#, &mut plain);
        let mut hovered = fresh(&analyzer);
        analyzer.analyze_source(r#"<p :class="{ 'hover:bg-red-500': on }"></p>"#, &mut hovered);

        // quoted key token plus the cleaned key
        assert_eq!(plain.category("background").unwrap().get("bg-red-500"), 2);
        assert_eq!(hovered.category("background").unwrap().get("bg-red-500"), 2);
        assert_eq!(plain.color("red"), 2);
        assert_eq!(hovered.color("red"), 2);
    }

    #[test]
    fn test_synthetic_patterns() {
        let patterns = ClassPatterns::new(
            PatternTable::from_pairs("categories", &[("fill", r"\bfill-[\w-]+")]).unwrap(),
            vec!["brand".to_string()],
        );
        let analyzer = ClassAnalyzer::new(patterns);
        let mut acc = fresh(&analyzer);
        analyzer.analyze_source(r#"<svg class="fill-brand bg-brand"/>"#, &mut acc);

        assert_eq!(acc.categories.len(), 1);
        assert_eq!(acc.category("fill").unwrap().get("fill-brand"), 1);
        assert_eq!(acc.color("brand"), 1);
    }

    #[test]
    fn test_project_counts_across_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("components")).unwrap();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("App.vue"), r#"<div class="bg-blue-500"></div>"#).unwrap();
        fs::write(
            root.join("components/Card.tsx"),
            r#"<div className="bg-blue-500 rounded-lg" />"#,
        )
        .unwrap();
        fs::write(root.join("components/card.css"), ".x { } class=\"bg-red-500\"").unwrap();
        fs::write(root.join("dist/app.js"), r#"class="bg-green-500""#).unwrap();

        let acc = analyzer().analyze_project(root, &ScanOptions::for_classes());
        assert_eq!(acc.total_files, 2);
        assert_eq!(acc.category("background").unwrap().get("bg-blue-500"), 2);
        assert_eq!(acc.category("background").unwrap().get("bg-red-500"), 0);
        assert_eq!(acc.category("rounded").unwrap().get("rounded-lg"), 1);
        assert_eq!(acc.color("blue"), 2);
        assert_eq!(acc.color("green"), 0);
    }
}
