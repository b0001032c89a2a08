//! Built-in Tailwind utility-class categories and color families.

use super::{PatternResult, PatternTable};

const CATEGORIES: &[(&str, &str)] = &[
    ("background", r"\bbg-[\w-]+"),
    ("text", r"\btext-[\w-]+"),
    ("border", r"\bborder(?:-[\w-]+)?"),
    ("shadow", r"\bshadow(?:-[\w-]+)?"),
    ("rounded", r"\brounded(?:-[\w-]+)?"),
];

/// Tailwind color families tracked by the color counter.
pub const DEFAULT_COLORS: &[&str] = &[
    "zinc",
    "gray",
    "neutral",
    "slate",
    "stone",
    "red",
    "orange",
    "amber",
    "yellow",
    "lime",
    "green",
    "emerald",
    "teal",
    "cyan",
    "sky",
    "blue",
    "indigo",
    "violet",
    "purple",
    "fuchsia",
    "pink",
    "rose",
    "black",
    "white",
    "transparent",
];

/// Category rules plus the color families to tag matched classes with.
#[derive(Debug, Clone)]
pub struct ClassPatterns {
    pub categories: PatternTable,
    pub colors: Vec<String>,
    needles: Vec<(String, String)>,
}

impl ClassPatterns {
    pub fn new(categories: PatternTable, colors: Vec<String>) -> Self {
        let needles = colors
            .iter()
            .map(|c| (format!("-{}-", c), format!("-{}", c)))
            .collect();
        Self {
            categories,
            colors,
            needles,
        }
    }

    /// Indices of every color family `class` refers to.
    ///
    /// A color matches when it appears wrapped in hyphens or as a trailing
    /// `-color` suffix. Overlapping names are not deduplicated, so one class
    /// can match more than one color.
    pub fn color_hits<'a>(&'a self, class: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.needles
            .iter()
            .enumerate()
            .filter(move |(_, (inner, suffix))| {
                class.contains(inner.as_str()) || class.ends_with(suffix.as_str())
            })
            .map(|(idx, _)| idx)
    }
}

/// Build the default Tailwind categories and color list.
pub fn tailwind_patterns() -> PatternResult<ClassPatterns> {
    Ok(ClassPatterns::new(
        PatternTable::from_pairs("categories", CATEGORIES)?,
        DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit_names(patterns: &ClassPatterns, class: &str) -> Vec<String> {
        patterns
            .color_hits(class)
            .map(|idx| patterns.colors[idx].clone())
            .collect()
    }

    #[test]
    fn test_default_categories() {
        let patterns = tailwind_patterns().unwrap();
        assert_eq!(
            patterns.categories.labels().collect::<Vec<_>>(),
            vec!["background", "text", "border", "shadow", "rounded"]
        );
        assert_eq!(patterns.colors.len(), 25);
    }

    #[test]
    fn test_color_hits_inner_and_suffix() {
        let patterns = tailwind_patterns().unwrap();
        assert_eq!(hit_names(&patterns, "bg-blue-500"), vec!["blue"]);
        assert_eq!(hit_names(&patterns, "text-white"), vec!["white"]);
        assert!(hit_names(&patterns, "bg-bluegray").is_empty());
        assert!(hit_names(&patterns, "rounded-lg").is_empty());
    }

    #[test]
    fn test_color_hits_can_overlap() {
        let patterns = tailwind_patterns().unwrap();
        assert_eq!(hit_names(&patterns, "bg-red-blue"), vec!["red", "blue"]);
    }
}
