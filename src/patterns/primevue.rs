//! Built-in PrimeVue pattern tables.

use super::{PatternResult, PatternTable};

/// PrimeVue components, matched by kebab-case or PascalCase opening tag.
const COMPONENTS: &[(&str, &str)] = &[
    ("Button", r"<(?:p-button|Button)\b"),
    ("Dialog", r"<(?:p-dialog|Dialog)\b"),
    ("InputText", r"<(?:p-input-text|InputText)\b"),
    ("Dropdown", r"<(?:p-dropdown|Dropdown)\b"),
    ("DataTable", r"<(?:p-data-table|DataTable)\b"),
    ("Card", r"<(?:p-card|Card)\b"),
    ("Panel", r"<(?:p-panel|Panel)\b"),
    ("Menu", r"<(?:p-menu|Menu)\b"),
    ("Toast", r"<(?:p-toast|Toast)\b"),
    ("Checkbox", r"<(?:p-checkbox|Checkbox)\b"),
    ("RadioButton", r"<(?:p-radio-button|RadioButton)\b"),
    ("SelectButton", r"<(?:p-select-button|SelectButton)\b"),
    ("Slider", r"<(?:p-slider|Slider)\b"),
    ("ProgressBar", r"<(?:p-progress-bar|ProgressBar)\b"),
    ("Tooltip", r"<(?:p-tooltip|Tooltip|v-tooltip)\b"),
    ("Badge", r"<(?:p-badge|Badge)\b"),
    ("Tag", r"<(?:p-tag|Tag)\b"),
    ("Divider", r"<(?:p-divider|Divider)\b"),
    ("Accordion", r"<(?:p-accordion|Accordion)\b"),
    ("TabView", r"<(?:p-tab-view|TabView)\b"),
    ("Tree", r"<(?:p-tree|Tree)\b"),
    ("TreeTable", r"<(?:p-tree-table|TreeTable)\b"),
    ("Sidebar", r"<(?:p-sidebar|Sidebar)\b"),
    ("OverlayPanel", r"<(?:p-overlay-panel|OverlayPanel)\b"),
    ("ConfirmDialog", r"<(?:p-confirm-dialog|ConfirmDialog)\b"),
    ("BlockUI", r"<(?:p-block-ui|BlockUI)\b"),
    ("ScrollPanel", r"<(?:p-scroll-panel|ScrollPanel)\b"),
    ("Splitter", r"<(?:p-splitter|Splitter)\b"),
    ("SplitButton", r"<(?:p-split-button|SplitButton)\b"),
    ("ToggleButton", r"<(?:p-toggle-button|ToggleButton)\b"),
    ("MultiSelect", r"<(?:p-multi-select|MultiSelect)\b"),
    ("Textarea", r"<(?:p-textarea|Textarea)\b"),
    ("AutoComplete", r"<(?:p-auto-complete|AutoComplete)\b"),
    ("Calendar", r"<(?:p-calendar|Calendar)\b"),
    ("InputNumber", r"<(?:p-input-number|InputNumber)\b"),
    ("InputMask", r"<(?:p-input-mask|InputMask)\b"),
    ("Password", r"<(?:p-password|Password)\b"),
    ("Editor", r"<(?:p-editor|Editor)\b"),
    ("Message", r"<(?:p-message|Message)\b"),
    ("InlineMessage", r"<(?:p-inline-message|InlineMessage)\b"),
    ("FileUpload", r"<(?:p-file-upload|FileUpload)\b"),
    ("Breadcrumb", r"<(?:p-breadcrumb|Breadcrumb)\b"),
    ("ContextMenu", r"<(?:p-context-menu|ContextMenu)\b"),
    ("Menubar", r"<(?:p-menubar|Menubar)\b"),
    ("Steps", r"<(?:p-steps|Steps)\b"),
    ("TabMenu", r"<(?:p-tab-menu|TabMenu)\b"),
    ("TieredMenu", r"<(?:p-tiered-menu|TieredMenu)\b"),
    ("Avatar", r"<(?:p-avatar|Avatar)\b"),
    ("Chip", r"<(?:p-chip|Chip)\b"),
    ("Skeleton", r"<(?:p-skeleton|Skeleton)\b"),
    ("ProgressSpinner", r"<(?:p-progress-spinner|ProgressSpinner)\b"),
    ("Ripple", r"v-ripple"),
];

/// Theme CSS custom properties referenced through `var(...)`.
const CSS_VARIABLES: &[(&str, &str)] = &[
    ("primaryColor", r"var\(--p-primary-color\)"),
    ("primaryHoverColor", r"var\(--p-primary-hover-color\)"),
    ("primaryActiveColor", r"var\(--p-primary-active-color\)"),
    ("surface0", r"var\(--p-surface-0\)"),
    ("surface50", r"var\(--p-surface-50\)"),
    ("surface100", r"var\(--p-surface-100\)"),
    ("surface200", r"var\(--p-surface-200\)"),
    ("surface300", r"var\(--p-surface-300\)"),
    ("surface400", r"var\(--p-surface-400\)"),
    ("surface500", r"var\(--p-surface-500\)"),
    ("surface600", r"var\(--p-surface-600\)"),
    ("surface700", r"var\(--p-surface-700\)"),
    ("surface800", r"var\(--p-surface-800\)"),
    ("surface900", r"var\(--p-surface-900\)"),
    ("surface950", r"var\(--p-surface-950\)"),
    ("textColor", r"var\(--p-text-color\)"),
    ("textMutedColor", r"var\(--p-text-muted-color\)"),
    ("borderColor", r"var\(--p-border-color\)"),
    ("contentBackground", r"var\(--p-content-background\)"),
    ("highlightBackground", r"var\(--p-highlight-background\)"),
    ("maskBackground", r"var\(--p-mask-background\)"),
    ("formFieldBackground", r"var\(--p-form-field-background\)"),
    ("formFieldBorderColor", r"var\(--p-form-field-border-color\)"),
    (
        "formFieldFocusBorderColor",
        r"var\(--p-form-field-focus-border-color\)",
    ),
    (
        "buttonPrimaryBackground",
        r"var\(--p-button-primary-background\)",
    ),
    (
        "buttonSecondaryBackground",
        r"var\(--p-button-secondary-background\)",
    ),
];

const SEVERITIES: &[&str] = &[
    "success",
    "info",
    "warning",
    "danger",
    "help",
    "primary",
    "secondary",
    "contrast",
];

const SURFACE_STEPS: &[&str] = &[
    "0", "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Name of the component table; the report summary reads it by name.
pub const COMPONENTS_TABLE: &str = "components";
/// Name of the CSS variable table; the report summary reads it by name.
pub const CSS_VARIABLES_TABLE: &str = "cssVariables";

/// Build the four built-in PrimeVue tables in report order.
pub fn primevue_patterns() -> PatternResult<Vec<PatternTable>> {
    let severity: Vec<(String, String)> = SEVERITIES
        .iter()
        .map(|s| {
            (
                s.to_string(),
                format!(r"\bp-(?:button|badge|tag|message)-{}\b", s),
            )
        })
        .collect();

    let surface: Vec<(String, String)> = SURFACE_STEPS
        .iter()
        .map(|step| (format!("surface{}", step), format!(r"\bsurface-{}\b", step)))
        .collect();

    Ok(vec![
        PatternTable::from_pairs(COMPONENTS_TABLE, COMPONENTS)?,
        PatternTable::from_pairs(CSS_VARIABLES_TABLE, CSS_VARIABLES)?,
        PatternTable::from_pairs("severityClasses", &borrow_pairs(&severity))?,
        PatternTable::from_pairs("surfaceClasses", &borrow_pairs(&surface))?,
    ])
}

fn borrow_pairs(pairs: &[(String, String)]) -> Vec<(&str, &str)> {
    pairs
        .iter()
        .map(|(label, pattern)| (label.as_str(), pattern.as_str()))
        .collect()
}
