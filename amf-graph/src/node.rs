//! Primitive read operations over a single graph node.
//!
//! Every function here is total: malformed input degrades to
//! `None`/`false`/empty rather than panicking. Keys are the keys actually
//! present on the node — resolve IRIs through
//! [`DocumentContext`](crate::DocumentContext) first when the document may
//! be compacted.

use serde_json::Value as JsonValue;

/// Normalize the one-or-many representation of a property value.
///
/// JSON-LD allows `"key": {...}` and `"key": [{...}]` interchangeably.
/// Arrays are returned as-is; a bare value becomes a one-element slice.
pub fn ensure_array(value: &JsonValue) -> &[JsonValue] {
    match value {
        JsonValue::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    }
}

/// Unwrap an expanded `{"@value": x}` literal, passing compacted bare
/// values through unchanged.
fn unwrap_literal(value: &JsonValue) -> &JsonValue {
    value.get("@value").unwrap_or(value)
}

/// Read the first scalar value of `key`.
///
/// Returns `None` when the node is not an object, the key is absent, or
/// the value array is empty.
pub fn get_value<'a>(node: &'a JsonValue, key: &str) -> Option<&'a JsonValue> {
    let entry = node.get(key)?;
    ensure_array(entry).first().map(unwrap_literal)
}

/// Read all scalar values of `key`.
///
/// Returns `Some(vec![])` when the key exists but carries no entries and
/// `None` when the key itself is absent — callers distinguish "declared
/// empty" from "not declared".
pub fn get_value_array<'a>(node: &'a JsonValue, key: &str) -> Option<Vec<&'a JsonValue>> {
    let entry = node.get(key)?;
    let items = match entry {
        JsonValue::Array(items) => items.iter().map(unwrap_literal).collect(),
        other => vec![unwrap_literal(other)],
    };
    Some(items)
}

/// Read the first value of `key` as a string.
///
/// Numbers and booleans are rendered; graph models are inconsistent
/// about quoting scalar literals.
pub fn string_value(node: &JsonValue, key: &str) -> Option<String> {
    match get_value(node, key)? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read the first value of `key` as a boolean, accepting quoted literals.
pub fn bool_value(node: &JsonValue, key: &str) -> Option<bool> {
    match get_value(node, key)? {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Read the first value of `key` as an integer, accepting quoted literals.
pub fn i64_value(node: &JsonValue, key: &str) -> Option<i64> {
    match get_value(node, key)? {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Read the first value of `key` as a float, accepting quoted literals.
pub fn f64_value(node: &JsonValue, key: &str) -> Option<f64> {
    match get_value(node, key)? {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Check whether `key` is an own property of the node (existence, not
/// truthiness).
pub fn has_property(node: &JsonValue, key: &str) -> bool {
    node.as_object().is_some_and(|map| map.contains_key(key))
}

/// Check whether the node's `@type` set contains `type_key` exactly.
///
/// Membership is tested over the whole set; position carries no meaning.
pub fn has_type(node: &JsonValue, type_key: &str) -> bool {
    node_types(node).iter().any(|t| *t == type_key)
}

/// The node's raw `@type` tags, in document order.
pub fn node_types(node: &JsonValue) -> Vec<&str> {
    match node.get("@type") {
        Some(entry) => ensure_array(entry)
            .iter()
            .filter_map(JsonValue::as_str)
            .collect(),
        None => Vec::new(),
    }
}

/// The node's `@id`, when present.
pub fn node_id(node: &JsonValue) -> Option<&str> {
    node.get("@id")?.as_str()
}

/// Read the first `{"@id": ...}` reference carried by `key`.
///
/// Compacted models sometimes carry bare id strings; both forms are
/// accepted.
pub fn get_link_value<'a>(node: &'a JsonValue, key: &str) -> Option<&'a str> {
    let entry = node.get(key)?;
    let first = ensure_array(entry).first()?;
    match first {
        JsonValue::Object(_) => first.get("@id")?.as_str(),
        JsonValue::String(s) => Some(s),
        _ => None,
    }
}

/// Read every `{"@id": ...}` reference carried by `key`.
pub fn get_link_values<'a>(node: &'a JsonValue, key: &str) -> Vec<&'a str> {
    let Some(entry) = node.get(key) else {
        return Vec::new();
    };
    ensure_array(entry)
        .iter()
        .filter_map(|item| match item {
            JsonValue::Object(_) => item.get("@id").and_then(JsonValue::as_str),
            JsonValue::String(s) => Some(s.as_str()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_ensure_array_wraps_bare_values() {
        let bare = json!({"a": 1});
        assert_eq!(ensure_array(&bare), std::slice::from_ref(&bare));
    }

    #[test]
    fn test_ensure_array_is_identity_on_arrays() {
        let arr = json!([1, 2, 3]);
        let slice = ensure_array(&arr);
        assert_eq!(slice.len(), 3);
        // Fixed point: wrapping the slice back into an array changes nothing
        let rewrapped = JsonValue::Array(slice.to_vec());
        assert_eq!(ensure_array(&rewrapped), slice);
    }

    #[test]
    fn test_get_value_unwraps_expanded_literals() {
        let node = json!({"k": [{"@value": "hello"}]});
        assert_eq!(get_value(&node, "k"), Some(&json!("hello")));
    }

    #[test]
    fn test_get_value_accepts_compacted_literals() {
        let node = json!({"k": "hello"});
        assert_eq!(get_value(&node, "k"), Some(&json!("hello")));
    }

    #[test]
    fn test_get_value_empty_array_is_none() {
        let node = json!({"k": []});
        assert_eq!(get_value(&node, "k"), None);
        assert_eq!(get_value(&node, "missing"), None);
        assert_eq!(get_value(&json!("not an object"), "k"), None);
    }

    #[test]
    fn test_get_value_array_distinguishes_empty_from_absent() {
        let node = json!({"k": [], "v": [{"@value": 1}, {"@value": 2}]});
        assert_eq!(get_value_array(&node, "k"), Some(vec![]));
        assert_eq!(get_value_array(&node, "missing"), None);
        assert_eq!(
            get_value_array(&node, "v"),
            Some(vec![&json!(1), &json!(2)])
        );
    }

    #[test]
    fn test_typed_values_accept_quoted_literals() {
        let node = json!({
            "b": [{"@value": "true"}],
            "i": [{"@value": "42"}],
            "f": 1.5,
            "s": [{"@value": 200}]
        });
        assert_eq!(bool_value(&node, "b"), Some(true));
        assert_eq!(i64_value(&node, "i"), Some(42));
        assert_eq!(f64_value(&node, "f"), Some(1.5));
        assert_eq!(string_value(&node, "s"), Some("200".to_string()));
        assert_eq!(i64_value(&node, "missing"), None);
    }

    #[test]
    fn test_has_type_ignores_position() {
        let node = json!({"@type": ["A", "B", "C"]});
        assert!(has_type(&node, "A"));
        assert!(has_type(&node, "C"));
        assert!(!has_type(&node, "D"));
    }

    #[test]
    fn test_has_property_checks_existence_not_truthiness() {
        let node = json!({"k": null, "f": false});
        assert!(has_property(&node, "k"));
        assert!(has_property(&node, "f"));
        assert!(!has_property(&node, "missing"));
        assert!(!has_property(&json!([1]), "k"));
    }

    #[test]
    fn test_link_values() {
        let node = json!({
            "one": {"@id": "x"},
            "many": [{"@id": "a"}, {"@id": "b"}, 42],
            "bare": "c"
        });
        assert_eq!(get_link_value(&node, "one"), Some("x"));
        assert_eq!(get_link_values(&node, "many"), vec!["a", "b"]);
        assert_eq!(get_link_value(&node, "bare"), Some("c"));
        assert!(get_link_values(&node, "missing").is_empty());
    }

    #[test]
    fn test_node_identity() {
        let node = json!({"@id": "amf://id#1", "@type": "A"});
        assert_eq!(node_id(&node), Some("amf://id#1"));
        assert_eq!(node_types(&node), vec!["A"]);
        assert_eq!(node_id(&json!({})), None);
    }
}
