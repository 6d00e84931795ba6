//! Encoding between raw attribute values and tag value lists.
//!
//! A group's values are stored in a single attribute as UTF-8 text joined
//! by `;`. Neither `;` nor `:` are escaped inside values, so a value
//! containing either will not survive a round trip.

/// Collapse internal whitespace runs (spaces, tabs, newlines) to single
/// spaces and trim the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode a raw attribute value into its list of values, in stored order.
pub fn xattr_value_to_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(normalize_whitespace)
        .filter(|v| !v.is_empty())
        .collect()
}

/// Encode a list of values as one attribute value: normalized, sorted,
/// deduplicated, joined with `;`. Empty input encodes to the empty string.
pub fn list_to_xattr_value<S: AsRef<str>>(values: &[S]) -> String {
    let mut values: Vec<String> = values
        .iter()
        .map(|v| normalize_whitespace(v.as_ref()))
        .filter(|v| !v.is_empty())
        .collect();
    values.sort();
    values.dedup();
    values.join(";")
}
