//! Usage analysis for frontend source trees.
//!
//! Two independent pipelines share the same walker and counting types:
//!
//! - [`ContentAnalyzer`] matches pattern tables directly against file content
//!   (PrimeVue components, CSS variables, severity and surface classes).
//! - [`ClassAnalyzer`] extracts class identifiers from class attributes and
//!   bindings, then buckets them into utility categories and color families.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use usagescope::analysis::ContentAnalyzer;
//! use usagescope::patterns::primevue_patterns;
//! use usagescope::scan::ScanOptions;
//!
//! let analyzer = ContentAnalyzer::new(primevue_patterns()?);
//! let acc = analyzer.analyze_project(Path::new("src"), &ScanOptions::for_content());
//! println!("{} of {} files use PrimeVue", acc.matching_files, acc.total_files);
//! # Ok::<(), usagescope::patterns::PatternError>(())
//! ```

pub mod classes;
pub mod content;
pub mod tally;

// Re-export main types for convenience
pub use classes::{ClassAccumulator, ClassAnalyzer};
pub use content::{ContentAccumulator, ContentAnalyzer, FileMatches};
pub use tally::{RankedCounts, Tally};
