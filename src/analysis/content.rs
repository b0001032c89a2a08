//! Direct pattern counting against file content.
//!
//! Every rule of every table is matched against the whole file. A file
//! counts as "matching" once, no matter how many rules hit.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::tally::Tally;
use crate::patterns::PatternTable;
use crate::scan::{self, ScanOptions};

/// Per-file counts produced by [`ContentAnalyzer::analyze_source`].
#[derive(Debug, Clone, Default)]
pub struct FileMatches {
    /// One tally per table, in table order.
    pub tallies: Vec<Tally>,
}

impl FileMatches {
    /// True if any rule matched at least once.
    pub fn has_matches(&self) -> bool {
        self.tallies.iter().any(|t| !t.is_empty())
    }
}

/// Running totals for the content pipeline.
#[derive(Debug, Clone, Default)]
pub struct ContentAccumulator {
    /// Files that passed the extension filter.
    pub total_files: usize,
    /// Files with at least one match in any table.
    pub matching_files: usize,
    /// `(table name, tally)` in table order.
    pub categories: Vec<(String, Tally)>,
}

impl ContentAccumulator {
    pub fn new(tables: &[PatternTable]) -> Self {
        Self {
            total_files: 0,
            matching_files: 0,
            categories: tables
                .iter()
                .map(|t| (t.name.clone(), Tally::new()))
                .collect(),
        }
    }

    /// Merge one file's counts into the running totals.
    pub fn merge_file(&mut self, file: &FileMatches) {
        for ((_, total), tally) in self.categories.iter_mut().zip(&file.tallies) {
            total.merge(tally);
        }
        if file.has_matches() {
            self.matching_files += 1;
        }
    }

    /// Tally for a table, if the table exists.
    pub fn category(&self, name: &str) -> Option<&Tally> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }
}

/// Counts pattern table matches in source files.
#[derive(Debug, Clone)]
pub struct ContentAnalyzer {
    tables: Vec<PatternTable>,
}

impl ContentAnalyzer {
    pub fn new(tables: Vec<PatternTable>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &[PatternTable] {
        &self.tables
    }

    /// Count matches of every rule in `content`.
    pub fn analyze_source(&self, content: &str) -> FileMatches {
        let tallies = self
            .tables
            .iter()
            .map(|table| {
                let mut tally = Tally::new();
                for rule in &table.rules {
                    tally.add(&rule.label, rule.count_in(content));
                }
                tally
            })
            .collect();

        FileMatches { tallies }
    }

    /// Analyze a list of files into a fresh accumulator.
    ///
    /// Every file counts toward `total_files`. Files that cannot be read are
    /// logged and contribute nothing else.
    pub fn analyze_files(&self, files: &[PathBuf]) -> ContentAccumulator {
        let mut acc = ContentAccumulator::new(&self.tables);

        for path in files {
            acc.total_files += 1;

            match scan::read_source(path) {
                Ok(content) => {
                    let matches = self.analyze_source(&content);
                    debug!(
                        "{}: {} matches",
                        path.display(),
                        matches.tallies.iter().map(Tally::total).sum::<usize>()
                    );
                    acc.merge_file(&matches);
                }
                Err(e) => {
                    warn!("Error processing {}", e);
                }
            }
        }

        acc
    }

    /// Walk `root` and analyze every eligible file.
    pub fn analyze_project(&self, root: &Path, options: &ScanOptions) -> ContentAccumulator {
        info!("Analyzing {}", root.display());
        let files = scan::collect_files(root, options);
        self.analyze_files(&files)
    }
}
