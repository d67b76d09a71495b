//! Value normalization
//!
//! Turns vendor names and JSON values into the canonical forms used for
//! display and grouping.

use serde_json::Value;

/// Reserved separator in identity-provider attribute names
const ATTRIBUTE_SEPARATOR: char = ':';

/// Make an attribute name safe to expose as a field name.
///
/// # Examples
/// ```
/// use otfstats::services::normalizer::sanitize_attribute_name;
///
/// assert_eq!(sanitize_attribute_name("custom:home_studio_id"), "custom_home_studio_id");
/// assert_eq!(sanitize_attribute_name("email"), "email");
/// ```
pub fn sanitize_attribute_name(name: &str) -> String {
    name.replace(ATTRIBUTE_SEPARATOR, "_")
}

/// Reduce a coach name to its capitalized first name.
///
/// "jane SMITH" → "Jane". A blank name stays empty.
pub fn coach_first_name(name: &str) -> String {
    let first = name.split_whitespace().next().unwrap_or("");
    let mut chars = first.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Convert a JSON value to a table cell.
///
/// Null and `""` → `None`, other strings verbatim, everything else as
/// compact JSON text. An empty string is missing, as it is in a CSV export.
pub fn json_cell(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
