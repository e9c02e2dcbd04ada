use once_cell::sync::Lazy;
use regex::Regex;

static DETAIL_GROUP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(.*?\)").unwrap());

static FIRST_DETAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((.*?)\)").unwrap());

/// Remove bracketed details such as `(n)`, `(p,s)` or `(fraction)` and keep
/// the base type name.
///
/// `NUMBER(P,S)` becomes `NUMBER`, `TIMESTAMP (6) WITH TIME ZONE` becomes
/// `TIMESTAMP WITH TIME ZONE`. Applying it twice gives the same result as once.
pub fn strip_detail_suffix(type_name: &str) -> String {
    DETAIL_GROUP_PATTERN
        .replace_all(type_name, "")
        .trim()
        .to_string()
}

/// Return the first bracketed detail including its parentheses, or an empty
/// string when there is none.
pub fn extract_detail_suffix(type_name: &str) -> String {
    FIRST_DETAIL_PATTERN
        .captures(type_name)
        .map(|caps| format!("({})", &caps[1]))
        .unwrap_or_default()
}

/// True for the large object family (`BLOB`, `CLOB`, `NCLOB`, ...).
pub fn is_large_object(type_name: &str) -> bool {
    type_name.to_uppercase().contains("LOB")
}

/// Drop the length/precision qualifier of a large object type.
///
/// Non-LOB names are returned unchanged.
pub fn strip_large_object_suffix(type_name: &str) -> String {
    if !is_large_object(type_name) {
        return type_name.to_string();
    }
    type_name
        .split('(')
        .next()
        .unwrap_or(type_name)
        .trim()
        .to_string()
}
