//! Pattern tables used by the analyzers.
//!
//! A [`PatternTable`] maps human-readable labels to regular expressions.
//! Both pipelines receive their tables as plain values, so callers can swap
//! the built-in tables for ones loaded from a JSON file or, in tests, for a
//! minimal synthetic table.
//!
//! # Pattern file formats
//!
//! Content patterns (the `primevue` pipeline) are a list of named tables:
//!
//! ```json
//! [
//!   { "name": "components",
//!     "patterns": [ { "label": "Button", "regex": "<(?:p-button|Button)\\b" } ] }
//! ]
//! ```
//!
//! Class patterns (the `tailwind` pipeline) are a category list plus colors:
//!
//! ```json
//! { "categories": [ { "label": "background", "regex": "\\bbg-[\\w-]+" } ],
//!   "colors": ["red", "blue"] }
//! ```

pub mod primevue;
pub mod tailwind;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

pub use primevue::primevue_patterns;
pub use tailwind::{tailwind_patterns, ClassPatterns, DEFAULT_COLORS};

/// Errors that can occur while building or loading pattern tables.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// Failed to read a pattern file from disk.
    #[error("Failed to read pattern file: {0}")]
    Io(#[from] std::io::Error),

    /// The pattern file is not valid JSON for the expected shape.
    #[error("Failed to parse pattern file: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule's regular expression does not compile.
    #[error("Invalid regex for '{label}': {source}")]
    InvalidRegex {
        label: String,
        #[source]
        source: regex::Error,
    },

    /// A content table name collides with a report key or another table.
    #[error("Table name '{0}' is reserved or already used")]
    DuplicateTable(String),
}

/// Top-level keys of the content report that tables cannot be named.
pub const RESERVED_TABLE_NAMES: &[&str] = &["timestamp", "summary"];

/// Result type alias for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;

/// A single labelled matching rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub label: String,
    pub regex: Regex,
}

impl PatternRule {
    /// Compile a rule from a label and a regex source string.
    pub fn new(label: impl Into<String>, pattern: &str) -> PatternResult<Self> {
        let label = label.into();
        let regex = Regex::new(pattern).map_err(|source| PatternError::InvalidRegex {
            label: label.clone(),
            source,
        })?;
        Ok(Self { label, regex })
    }

    /// Number of non-overlapping matches in `haystack`.
    pub fn count_in(&self, haystack: &str) -> usize {
        self.regex.find_iter(haystack).count()
    }
}

/// A named, ordered group of rules whose counts are reported together.
#[derive(Debug, Clone)]
pub struct PatternTable {
    pub name: String,
    pub rules: Vec<PatternRule>,
}

impl PatternTable {
    /// Build a table from `(label, regex)` pairs.
    pub fn from_pairs(name: impl Into<String>, pairs: &[(&str, &str)]) -> PatternResult<Self> {
        let rules = pairs
            .iter()
            .map(|(label, pattern)| PatternRule::new(*label, pattern))
            .collect::<PatternResult<Vec<_>>>()?;
        Ok(Self {
            name: name.into(),
            rules,
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.label.as_str())
    }
}

/// On-disk form of a single rule.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSpec {
    pub label: String,
    pub regex: String,
}

impl RuleSpec {
    fn compile(&self) -> PatternResult<PatternRule> {
        PatternRule::new(self.label.clone(), &self.regex)
    }
}

/// On-disk form of a content pattern table.
#[derive(Debug, Clone, Deserialize)]
pub struct TableSpec {
    pub name: String,
    pub patterns: Vec<RuleSpec>,
}

/// On-disk form of the class pattern configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassPatternSpec {
    pub categories: Vec<RuleSpec>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

/// Parse content pattern tables from a JSON string.
pub fn parse_content_patterns(content: &str) -> PatternResult<Vec<PatternTable>> {
    let specs: Vec<TableSpec> = serde_json::from_str(content)?;
    let mut seen = HashSet::new();
    specs
        .iter()
        .map(|spec| {
            if RESERVED_TABLE_NAMES.contains(&spec.name.as_str()) || !seen.insert(&spec.name) {
                return Err(PatternError::DuplicateTable(spec.name.clone()));
            }
            let rules = spec
                .patterns
                .iter()
                .map(RuleSpec::compile)
                .collect::<PatternResult<Vec<_>>>()?;
            Ok(PatternTable {
                name: spec.name.clone(),
                rules,
            })
        })
        .collect()
}

/// Load content pattern tables from a JSON file.
pub fn load_content_patterns(path: &Path) -> PatternResult<Vec<PatternTable>> {
    let content = fs::read_to_string(path)?;
    parse_content_patterns(&content)
}

/// Parse class patterns from a JSON string.
///
/// When `colors` is omitted the default Tailwind palette is used.
pub fn parse_class_patterns(content: &str) -> PatternResult<ClassPatterns> {
    let spec: ClassPatternSpec = serde_json::from_str(content)?;
    let rules = spec
        .categories
        .iter()
        .map(RuleSpec::compile)
        .collect::<PatternResult<Vec<_>>>()?;
    let colors = spec
        .colors
        .unwrap_or_else(|| DEFAULT_COLORS.iter().map(|c| c.to_string()).collect());

    Ok(ClassPatterns::new(
        PatternTable {
            name: "categories".to_string(),
            rules,
        },
        colors,
    ))
}

/// Load class patterns from a JSON file.
pub fn load_class_patterns(path: &Path) -> PatternResult<ClassPatterns> {
    let content = fs::read_to_string(path)?;
    parse_class_patterns(&content)
}
