//! PrimeVue usage report.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::{serialize_pairs, ReportSection, SummaryRow, UsageReport};
use crate::analysis::{ContentAccumulator, RankedCounts};
use crate::patterns::primevue::{COMPONENTS_TABLE, CSS_VARIABLES_TABLE};

/// Total and distinct-label counts for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub total: usize,
    pub unique: usize,
}

/// Summary block of the PrimeVue report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimeVueSummary {
    pub total_files: usize,
    pub files_using_prime_vue: usize,
    pub total_component_uses: usize,
    #[serde(rename = "totalCSSVariableUses")]
    pub total_css_variable_uses: usize,
    pub unique_components: usize,
    #[serde(rename = "uniqueCSSVariables")]
    pub unique_css_variables: usize,
    /// Totals for every table, in table order.
    #[serde(serialize_with = "serialize_pairs")]
    pub categories: Vec<(String, CategoryTotals)>,
}

/// Final PrimeVue usage report.
///
/// Serializes as `timestamp`, `summary` and then one object per table keyed
/// by the table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeVueReport {
    pub timestamp: String,
    pub summary: PrimeVueSummary,
    pub categories: Vec<(String, RankedCounts)>,
}

impl PrimeVueReport {
    /// Rank every table and compute the summary.
    pub fn from_accumulator(acc: &ContentAccumulator, timestamp: impl Into<String>) -> Self {
        let categories: Vec<(String, RankedCounts)> = acc
            .categories
            .iter()
            .map(|(name, tally)| (name.clone(), tally.rank()))
            .collect();

        let totals_for = |name: &str| {
            categories
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, counts)| (counts.total(), counts.unique()))
                .unwrap_or((0, 0))
        };
        let (total_component_uses, unique_components) = totals_for(COMPONENTS_TABLE);
        let (total_css_variable_uses, unique_css_variables) = totals_for(CSS_VARIABLES_TABLE);

        let summary = PrimeVueSummary {
            total_files: acc.total_files,
            files_using_prime_vue: acc.matching_files,
            total_component_uses,
            total_css_variable_uses,
            unique_components,
            unique_css_variables,
            categories: categories
                .iter()
                .map(|(name, counts)| {
                    (
                        name.clone(),
                        CategoryTotals {
                            total: counts.total(),
                            unique: counts.unique(),
                        },
                    )
                })
                .collect(),
        };

        Self {
            timestamp: timestamp.into(),
            summary,
            categories,
        }
    }

    pub fn category(&self, name: &str) -> Option<&RankedCounts> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }
}

impl Serialize for PrimeVueReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.categories.len()))?;
        map.serialize_entry("timestamp", &self.timestamp)?;
        map.serialize_entry("summary", &self.summary)?;
        for (name, counts) in &self.categories {
            map.serialize_entry(name, counts)?;
        }
        map.end()
    }
}

fn heading_for(name: &str) -> String {
    match name {
        "components" => "Components".to_string(),
        "cssVariables" => "CSS Variables".to_string(),
        "severityClasses" => "Severity/State Classes".to_string(),
        "surfaceClasses" => "Surface Classes".to_string(),
        other => other.to_string(),
    }
}

impl UsageReport for PrimeVueReport {
    fn title(&self) -> &str {
        "PrimeVue Usage Analysis"
    }

    fn timestamp(&self) -> &str {
        &self.timestamp
    }

    fn summary_rows(&self) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Total files analyzed", self.summary.total_files),
            SummaryRow::new("Files using PrimeVue", self.summary.files_using_prime_vue),
            SummaryRow::new("Unique components used", self.summary.unique_components),
            SummaryRow::new("Total component instances", self.summary.total_component_uses),
            SummaryRow::new("Unique CSS variables used", self.summary.unique_css_variables),
            SummaryRow::new("Total CSS variable uses", self.summary.total_css_variable_uses),
        ]
    }

    fn sections(&self) -> Vec<ReportSection<'_>> {
        self.categories
            .iter()
            .map(|(name, counts)| ReportSection {
                name,
                heading: heading_for(name),
                counts,
            })
            .collect()
    }
}
