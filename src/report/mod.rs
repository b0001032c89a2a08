//! Usage reports built from the final accumulator state.
//!
//! Reports are plain, read-only values. They carry the run timestamp, the
//! summary scalars and every category's ranked counts, and they know how to
//! present themselves as summary rows and sections for the exporters.

pub mod primevue;
pub mod tailwind;

use chrono::{SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::analysis::RankedCounts;

pub use primevue::{PrimeVueReport, PrimeVueSummary};
pub use tailwind::{ClassCategory, TailwindReport};

/// A labelled scalar shown in the summary block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub value: usize,
}

impl SummaryRow {
    pub fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One category of counts as presented to a reader.
#[derive(Debug, Clone)]
pub struct ReportSection<'a> {
    /// Machine name (table or category name).
    pub name: &'a str,
    /// Human-readable heading.
    pub heading: String,
    pub counts: &'a RankedCounts,
}

/// Common view over both report kinds used by the exporters.
pub trait UsageReport: Serialize {
    /// Banner title, e.g. "PrimeVue Usage Analysis".
    fn title(&self) -> &str;

    fn timestamp(&self) -> &str;

    fn summary_rows(&self) -> Vec<SummaryRow>;

    fn sections(&self) -> Vec<ReportSection<'_>>;
}

/// Current time as an ISO-8601 UTC timestamp with millisecond precision.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serialize `(name, value)` pairs as a JSON object, keeping pair order.
pub(crate) fn serialize_pairs<S, V>(pairs: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (name, value) in pairs {
        map.serialize_entry(name, value)?;
    }
    map.end()
}
