//! Class identifier extraction from markup and component source.
//!
//! This works on raw text with regular expressions and does not parse
//! markup or script. It will pick up words that only resemble class names,
//! and every branch of a conditional binding is reported as present.
//!
//! # Example
//!
//! ```
//! use usagescope::extract::extract_classes;
//!
//! let classes = extract_classes(r#"<div class="flex gap-2" :class="{ 'is-open': open }">"#);
//! assert!(classes.contains("flex"));
//! assert!(classes.contains("is-open"));
//! assert!(!classes.contains("open"));
//! ```

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// One attribute syntax to scan for.
struct ClassRule {
    regex: Regex,
    /// The capture is always the body of an object literal.
    object_body: bool,
}

impl ClassRule {
    fn new(pattern: &str, object_body: bool) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            object_body,
        }
    }
}

static CLASS_RULES: Lazy<Vec<ClassRule>> = Lazy::new(|| {
    vec![
        // static attribute
        ClassRule::new(r#"class="([^"]*)""#, false),
        ClassRule::new(r"class='([^']*)'", false),
        ClassRule::new(r"class=`([^`]*)`", false),
        // bound attribute
        ClassRule::new(r#":class="([^"]*)""#, false),
        ClassRule::new(r":class='([^']*)'", false),
        ClassRule::new(r#":class="`([^`]*)`""#, false),
        // JSX
        ClassRule::new(r#"className="([^"]*)""#, false),
        ClassRule::new(r"className='([^']*)'", false),
        ClassRule::new(r"className=`([^`]*)`", false),
        // object binding
        ClassRule::new(r#":class="\{([^}]*)\}""#, true),
        ClassRule::new(r":class='\{([^}]*)\}'", true),
        // array binding
        ClassRule::new(r#":class="\[([^\]]*)\]""#, false),
        ClassRule::new(r":class='\[([^\]]*)\]'", false),
        // bare identifier at the end of an interpolation
        ClassRule::new(r"\$\{[^}]*\s+([\w-]+)\s*\}", false),
    ]
});

static OBJECT_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r#"['"]?([\w-]+)['"]?\s*:"#).unwrap());

/// `key: condition` pairs; group 1 keeps the key and colon.
///
/// A quoted key is matched whole, so variant colons inside it stay put. The
/// condition may contain one level of parentheses with commas inside.
static OBJECT_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"((?:'[^']*'|"[^"]*"|[\w-]+)\s*:)(?:\([^()]*\)|[^,}(])*"#).unwrap()
});

/// Extract the deduplicated set of class-like identifiers in `content`.
pub fn extract_classes(content: &str) -> BTreeSet<String> {
    let mut classes = BTreeSet::new();

    for rule in CLASS_RULES.iter() {
        for caps in rule.regex.captures_iter(content) {
            let Some(value) = caps.get(1).map(|m| m.as_str()) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let is_object = rule.object_body || value.trim_start().starts_with('{');
            collect_tokens(value, is_object, &mut classes);
        }
    }

    classes
}

/// Add the tokens of one captured attribute value to `classes`.
///
/// Splitting on whitespace and the `key:` scan both always run; their
/// results are unioned. Inside an object literal the condition after each
/// key is dropped before splitting.
pub fn collect_tokens(value: &str, is_object: bool, classes: &mut BTreeSet<String>) {
    let split_source = if is_object {
        OBJECT_ENTRY.replace_all(value, "$1 ")
    } else {
        std::borrow::Cow::Borrowed(value)
    };

    for token in split_source.split_whitespace() {
        classes.insert(token.to_string());
    }

    if value.contains(':') {
        for m in OBJECT_KEY.find_iter(value) {
            let cleaned: String = m
                .as_str()
                .chars()
                .filter(|c| !matches!(c, '\'' | '"' | ':') && !c.is_whitespace())
                .collect();
            if !cleaned.is_empty() {
                classes.insert(cleaned);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(content: &str) -> Vec<String> {
        extract_classes(content).into_iter().collect()
    }

    #[test]
    fn test_static_and_object_binding() {
        let classes = extract_classes(r#"<div class="foo bar" :class="{ 'baz': active }"></div>"#);
        assert!(classes.contains("foo"));
        assert!(classes.contains("bar"));
        assert!(classes.contains("baz"));
        assert!(!classes.contains("active"));
    }

    #[test]
    fn test_object_binding_exact_tokens() {
        let content = r#"<div :class="{ 'baz': active }"></div>"#;
        assert_eq!(extract(content), vec!["'baz':", "baz", "{", "}"]);
    }

    #[test]
    fn test_object_key_with_variant_prefix() {
        let content = r#"<div :class="{ 'hover:bg-red-500': on }"></div>"#;
        assert_eq!(
            extract(content),
            vec!["'hover:bg-red-500':", "bg-red-500", "hover", "{", "}"]
        );
    }

    #[test]
    fn test_object_condition_with_call_arguments() {
        let content = r#"<div :class="{ 'px-2': isOn(a, b), flex: ready }"></div>"#;
        let classes = extract_classes(content);
        assert!(classes.contains("px-2"));
        assert!(classes.contains("flex"));
        for unexpected in ["isOn(a,", "a,", "b)", "b),", "ready"] {
            assert!(!classes.contains(unexpected), "unexpected {}", unexpected);
        }
    }

    #[test]
    fn test_quoting_styles() {
        let content = "<a class='one'></a><b class=`two`></b><c class=\"three\"></c>";
        assert_eq!(extract(content), vec!["one", "three", "two"]);
    }

    #[test]
    fn test_class_name_attribute() {
        let content = r#"<div className="p-4 rounded-lg"><span className='text-sm'/></div>"#;
        assert_eq!(extract(content), vec!["p-4", "rounded-lg", "text-sm"]);
    }

    #[test]
    fn test_object_binding_multiple_keys() {
        let content = r#"<div :class="{ 'bg-red-500': hasError, shadow: raised, 'px-2': true }">"#;
        let classes = extract_classes(content);
        for expected in ["bg-red-500", "shadow", "px-2"] {
            assert!(classes.contains(expected), "missing {}", expected);
        }
        for unexpected in ["hasError", "raised", "true"] {
            assert!(!classes.contains(unexpected), "unexpected {}", unexpected);
        }
    }

    #[test]
    fn test_array_binding_keeps_every_token() {
        let content = r#"<div :class="[ 'flex', isOpen ? 'block' : 'hidden' ]">"#;
        let classes = extract_classes(content);
        // raw-text extraction keeps quotes on array items
        assert!(classes.contains("'flex',"));
        assert!(classes.contains("isOpen"));
        assert!(classes.contains("'hidden'"));
        // the ternary colon is read as a key
        assert!(classes.contains("block"));
    }

    #[test]
    fn test_template_literal_binding() {
        let content = r#"<div :class="`card ${isActive ? 'ring' : ''} mt-2`">"#;
        let classes = extract_classes(content);
        assert!(classes.contains("card"));
        assert!(classes.contains("mt-2"));
    }

    #[test]
    fn test_interpolation_identifier() {
        let content = "const cls = `${base} ${variant primary-btn}`;";
        let classes = extract_classes(content);
        assert!(classes.contains("primary-btn"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let content = r#"<p class="mt-2 mt-2"></p><p class="mt-2"></p>"#;
        assert_eq!(extract(content), vec!["mt-2"]);
    }

    #[test]
    fn test_empty_attribute_and_plain_text() {
        assert!(extract_classes(r#"<div class=""></div>"#).is_empty());
        assert!(extract_classes("no markup here").is_empty());
    }

    #[test]
    fn test_collect_tokens_union_of_passes() {
        let mut classes = BTreeSet::new();
        collect_tokens("a b-c: d", false, &mut classes);
        assert_eq!(
            classes.into_iter().collect::<Vec<_>>(),
            vec!["a", "b-c", "b-c:", "d"]
        );
    }
}
