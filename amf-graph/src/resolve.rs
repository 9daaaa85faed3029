//! Document section traversal, id lookup and link resolution.
//!
//! Everything here walks the graph reachable from the document root
//! through `encodes`, `declares` and `references`. Missing ids and
//! sections come back as `None`; the only loops possible in the data
//! (self-referential links) are cut by a per-call visited set.

use crate::context::DocumentContext;
use crate::node;
use amf_vocab::{document, source_maps};
use serde_json::Value as JsonValue;
use std::collections::HashSet;

/// Linear scan of a node array by `@id` equality.
pub fn find_by_id<'a>(nodes: &'a [JsonValue], id: &str) -> Option<&'a JsonValue> {
    nodes.iter().find(|item| node::node_id(item) == Some(id))
}

/// A shape-merge function registered for one property key.
///
/// Receives both whole shapes so it can read the key off either side.
type MergeFn = fn(&DocumentContext, &JsonValue, &JsonValue) -> JsonValue;

/// Keys that do not follow plain right-biased replacement when two shape
/// nodes are merged. One entry today; the table keeps the mechanism open
/// for further keys.
const SPECIAL_MERGE: &[(&str, MergeFn)] = &[(source_maps::SOURCES, merge_sources_key)];

fn merge_sources_key(ctx: &DocumentContext, a: &JsonValue, b: &JsonValue) -> JsonValue {
    ctx.merge_source_map_sources(a, b)
}

impl DocumentContext {
    /// The `encodes` node of the document, unwrapped from its singleton
    /// array.
    pub fn encodes(&self) -> Option<&JsonValue> {
        let key = self.resolve_key(document::ENCODES);
        let entry = self.root().get(&key)?;
        node::ensure_array(entry).first()
    }

    /// The document's local declarations.
    ///
    /// An empty `declares` array normalizes to `None`, so callers get one
    /// branch for "has any declarations".
    pub fn declares(&self) -> Option<&[JsonValue]> {
        self.section(document::DECLARES)
    }

    /// The document's imported sub-documents, `None` when empty or absent.
    pub fn references(&self) -> Option<&[JsonValue]> {
        self.section(document::REFERENCES)
    }

    fn section(&self, iri: &str) -> Option<&[JsonValue]> {
        let key = self.resolve_key(iri);
        let entry = self.root().get(&key)?;
        let items = node::ensure_array(entry);
        if items.is_empty() {
            None
        } else {
            Some(items)
        }
    }

    /// Type membership against the effective key of `iri`.
    ///
    /// Compact documents compact their `@type` tags too, so the IRI is
    /// resolved first; the full spelling is also accepted.
    pub fn has_type(&self, node: &JsonValue, iri: &str) -> bool {
        let key = self.resolve_key(iri);
        node::has_type(node, &key) || node::has_type(node, iri)
    }

    /// Find a node by id anywhere in the reachable graph: declarations
    /// first, then references (their own declarations included), then the
    /// encoded tree.
    pub fn find_by_id(&self, id: &str) -> Option<&JsonValue> {
        if let Some(declares) = self.declares() {
            if let Some(found) = find_by_id(declares, id) {
                return Some(found);
            }
        }
        let declares_key = self.resolve_key(document::DECLARES);
        let encodes_key = self.resolve_key(document::ENCODES);
        if let Some(references) = self.references() {
            for reference in references {
                if node::node_id(reference) == Some(id) {
                    return Some(reference);
                }
                if let Some(entry) = reference.get(&declares_key) {
                    if let Some(found) = find_by_id(node::ensure_array(entry), id) {
                        return Some(found);
                    }
                }
                if let Some(entry) = reference.get(&encodes_key) {
                    if let Some(found) = find_by_id(node::ensure_array(entry), id) {
                        return Some(found);
                    }
                }
            }
        }
        self.encodes().and_then(|encoded| find_in_tree(encoded, id))
    }

    /// Find a declared domain element by id: the document's own `declares`
    /// first, then each referenced library's `declares` in document order.
    /// First match wins.
    pub fn find_amf_type(&self, domain_id: &str) -> Option<&JsonValue> {
        if let Some(declares) = self.declares() {
            if let Some(found) = find_by_id(declares, domain_id) {
                return Some(found);
            }
        }
        let declares_key = self.resolve_key(document::DECLARES);
        for reference in self.references().unwrap_or_default() {
            if !self.has_type(reference, document::MODULE) {
                continue;
            }
            if let Some(entry) = reference.get(&declares_key) {
                if let Some(found) = find_by_id(node::ensure_array(entry), domain_id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Find a referenced sub-document by its own id or by the id of the
    /// node it encodes (the two ways consumers address a fragment).
    pub fn find_reference_object(&self, domain_id: &str) -> Option<&JsonValue> {
        let encodes_key = self.resolve_key(document::ENCODES);
        self.references()?.iter().find(|reference| {
            if node::node_id(reference) == Some(domain_id) {
                return true;
            }
            reference
                .get(&encodes_key)
                .map(node::ensure_array)
                .and_then(<[JsonValue]>::first)
                .and_then(node::node_id)
                == Some(domain_id)
        })
    }

    /// Resolve a `link-target` id to its node, one level deep.
    ///
    /// Chained links are not followed here; [`resolve`](Self::resolve)
    /// layers recursion and cycle tracking on top.
    pub fn link_target(&self, id: &str) -> Option<&JsonValue> {
        self.find_by_id(id)
    }

    /// Replace a link node with its fully resolved target.
    ///
    /// Nodes without a `link-target` marker pass through unchanged. A link
    /// is resolved recursively (the target may itself be a link) with a
    /// per-call visited set, so a self-referential chain stops at the
    /// first re-entry. The link node's own properties are merged over the
    /// resolved target, keeping local overrides such as a declared name;
    /// the markers themselves are stripped, which also makes the operation
    /// idempotent.
    pub fn resolve<'a>(&self, shape: &'a JsonValue) -> std::borrow::Cow<'a, JsonValue> {
        let link_key = self.resolve_key(document::LINK_TARGET);
        if !node::has_property(shape, &link_key) {
            return std::borrow::Cow::Borrowed(shape);
        }
        let mut visited = HashSet::new();
        std::borrow::Cow::Owned(self.resolve_inner(shape, &mut visited))
    }

    fn resolve_inner(&self, shape: &JsonValue, visited: &mut HashSet<String>) -> JsonValue {
        let link_key = self.resolve_key(document::LINK_TARGET);
        let Some(target_id) = node::get_link_value(shape, &link_key) else {
            return shape.clone();
        };
        let target_id = target_id.to_string();
        let label_key = self.resolve_key(document::LINK_LABEL);
        let local = strip_keys(shape, &[&link_key, &label_key]);
        if let Some(id) = node::node_id(shape) {
            visited.insert(id.to_string());
        }
        if !visited.insert(target_id.clone()) {
            return local;
        }
        let Some(target) = self.link_target(&target_id) else {
            return local;
        };
        let target = target.clone();
        let resolved = self.resolve_inner(&target, visited);
        self.merge_shapes(&resolved, &local)
    }

    /// Merge two shape nodes contributing to the same effective shape.
    ///
    /// Plain `{...a, ...b}` semantics (right side wins on collision),
    /// except for keys in the special-merge table, which combine both
    /// sides instead.
    pub fn merge_shapes(&self, a: &JsonValue, b: &JsonValue) -> JsonValue {
        let (Some(left), Some(right)) = (a.as_object(), b.as_object()) else {
            return b.clone();
        };
        let mut merged = left.clone();
        for (key, value) in right {
            if let Some(merge) = self.special_merge_fn(key) {
                merged.insert(key.clone(), merge(self, a, b));
            } else {
                merged.insert(key.clone(), value.clone());
            }
        }
        JsonValue::Object(merged)
    }

    fn special_merge_fn(&self, key: &str) -> Option<MergeFn> {
        SPECIAL_MERGE
            .iter()
            .find(|(iri, _)| *iri == key || self.resolve_key(iri) == key)
            .map(|(_, merge)| *merge)
    }

    /// Union of two shapes' source-map `sources` objects.
    ///
    /// Each side contributes its single-entry `sources` array (when
    /// present); keys are unioned with `b` winning on collision. Always a
    /// single-entry array, `[{}]` when neither side has sources.
    pub fn merge_source_map_sources(&self, a: &JsonValue, b: &JsonValue) -> JsonValue {
        let key = self.resolve_key(source_maps::SOURCES);
        let mut merged = serde_json::Map::new();
        for shape in [a, b] {
            let entry = shape
                .get(&key)
                .or_else(|| shape.get(source_maps::SOURCES));
            let Some(sources) = entry
                .map(node::ensure_array)
                .and_then(<[JsonValue]>::first)
                .and_then(JsonValue::as_object)
            else {
                continue;
            };
            for (k, v) in sources {
                merged.insert(k.clone(), v.clone());
            }
        }
        JsonValue::Array(vec![JsonValue::Object(merged)])
    }
}

/// Depth-first search of an embedded node tree by `@id`.
fn find_in_tree<'a>(node: &'a JsonValue, id: &str) -> Option<&'a JsonValue> {
    match node {
        JsonValue::Object(map) => {
            if crate::node::node_id(node) == Some(id) {
                return Some(node);
            }
            map.values().find_map(|value| find_in_tree(value, id))
        }
        JsonValue::Array(items) => items.iter().find_map(|item| find_in_tree(item, id)),
        _ => None,
    }
}

/// Copy of an object with the given keys removed. Non-objects come back
/// unchanged.
fn strip_keys(node: &JsonValue, keys: &[&str]) -> JsonValue {
    let Some(map) = node.as_object() else {
        return node.clone();
    };
    let mut out = map.clone();
    for key in keys {
        out.remove(*key);
    }
    JsonValue::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn ctx(doc: JsonValue) -> DocumentContext {
        DocumentContext::new(Arc::new(doc)).unwrap()
    }

    #[test]
    fn test_find_by_id_scans_arrays() {
        let nodes = vec![json!({"@id": "a"}), json!({"@id": "b"}), json!({})];
        assert_eq!(find_by_id(&nodes, "b"), Some(&nodes[1]));
        assert_eq!(find_by_id(&nodes, "z"), None);
    }

    #[test]
    fn test_merge_shapes_is_commutative_on_disjoint_keys() {
        let ctx = ctx(json!({"@id": "amf://doc"}));
        let a = json!({"a": 1});
        let b = json!({"b": 2});
        assert_eq!(ctx.merge_shapes(&a, &b), json!({"a": 1, "b": 2}));
        assert_eq!(ctx.merge_shapes(&b, &a), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_merge_shapes_right_bias_on_collision() {
        let ctx = ctx(json!({"@id": "amf://doc"}));
        let merged = ctx.merge_shapes(&json!({"a": 1}), &json!({"a": 2}));
        assert_eq!(merged["a"], json!(2));
    }

    #[test]
    fn test_merge_source_map_sources_union() {
        let ctx = ctx(json!({"@id": "amf://doc"}));
        let key = "http://a.ml/vocabularies/document-source-maps#sources";
        let a = json!({key: [{"s1": 1, "s2": 2}]});
        let b = json!({key: [{"s2": 20, "s3": 30}]});
        assert_eq!(
            ctx.merge_source_map_sources(&a, &b),
            json!([{"s1": 1, "s2": 20, "s3": 30}])
        );
    }

    #[test]
    fn test_merge_source_map_sources_empty() {
        let ctx = ctx(json!({"@id": "amf://doc"}));
        assert_eq!(
            ctx.merge_source_map_sources(&json!({}), &json!({})),
            json!([{}])
        );
    }

    #[test]
    fn test_merge_shapes_routes_sources_through_special_merge() {
        let ctx = ctx(json!({"@id": "amf://doc"}));
        let key = "http://a.ml/vocabularies/document-source-maps#sources";
        let a = json!({key: [{"lexical": "1,2"}], "x": 1});
        let b = json!({key: [{"tracked-element": "amf://p"}]});
        let merged = ctx.merge_shapes(&a, &b);
        assert_eq!(
            merged[key],
            json!([{"lexical": "1,2", "tracked-element": "amf://p"}])
        );
        assert_eq!(merged["x"], json!(1));
    }

    #[test]
    fn test_empty_sections_normalize_to_none() {
        let ctx = ctx(json!({
            "@id": "amf://doc",
            "http://a.ml/vocabularies/document#declares": [],
        }));
        assert!(ctx.declares().is_none());
        assert!(ctx.references().is_none());
        assert!(ctx.encodes().is_none());
    }
}
