//! Category normalization shared by filtering, grouping and display.
//!
//! Every place that compares, groups or shows a category goes through
//! [`normalize_category`], so a legacy label can never filter one way and
//! group another.

/// Label used when a template has a blank category.
pub const OTHER_CATEGORY: &str = "Other";

/// Canonical label that the legacy admin category collapses to.
pub const HOME_CATEGORY: &str = "Home";

/// Legacy label still present in older catalogs, compared case-insensitively.
const LEGACY_HOME_LABEL: &str = "home & life admin";

/// Normalize a raw category label.
///
/// Trims the input; blank becomes `"Other"`, the legacy
/// `"Home & Life Admin"` label (any casing) becomes `"Home"`, and anything
/// else is returned trimmed with its original casing.
///
/// # Examples
///
/// ```rust
/// use lovelists_core::normalize_category;
///
/// assert_eq!(normalize_category("Home & Life Admin"), "Home");
/// assert_eq!(normalize_category("  "), "Other");
/// assert_eq!(normalize_category(" Wedding "), "Wedding");
/// ```
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        OTHER_CATEGORY.to_string()
    } else if trimmed.to_lowercase() == LEGACY_HOME_LABEL {
        HOME_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whether two raw labels name the same category once normalized.
pub fn same_category(a: &str, b: &str) -> bool {
    normalize_category(a).to_lowercase() == normalize_category(b).to_lowercase()
}
