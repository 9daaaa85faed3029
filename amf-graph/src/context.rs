//! Per-document key resolution.
//!
//! AMF emits a model either expanded (every property keyed by its full
//! IRI) or compacted (keys shortened through the document's `@context`
//! prefix map). The mode is a document-wide, immutable property, so it is
//! detected once when the document is attached and every vocabulary IRI is
//! resolved against it through a cached table.

use crate::error::{GraphError, Result};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

static NULL: JsonValue = JsonValue::Null;

/// The current document plus everything derived from it: compaction mode,
/// the `@context` prefix table, and the resolved-key cache.
///
/// Prefix entries are sorted longest namespace first so the most specific
/// prefix wins when namespaces nest. Resolved keys are cached per full IRI
/// for the lifetime of the document; replacing the document rebuilds the
/// table and drops the cache wholesale. Re-attaching the identical
/// document (`Arc::ptr_eq`) is a no-op.
#[derive(Debug)]
pub struct DocumentContext {
    document: Arc<JsonValue>,
    /// Namespace IRI paired with its compact prefix, longest IRI first.
    prefixes: Vec<(String, String)>,
    /// Compact prefix back to its namespace IRI.
    by_prefix: HashMap<String, String>,
    compact: bool,
    /// Full IRI to the key actually present on graph nodes.
    key_cache: Mutex<HashMap<String, String>>,
}

impl DocumentContext {
    /// Attach a document and derive its compaction mode and prefix table.
    ///
    /// Accepts the document itself or a `[document]` singleton wrapper.
    /// This is the one place structural validation happens: a root that is
    /// not an object (after unwrapping) is rejected here so that every
    /// later lookup can degrade to `None` instead of erroring.
    pub fn new(document: Arc<JsonValue>) -> Result<Self> {
        let root = unwrap_root(&document)?;
        let (compact, prefixes, by_prefix) = parse_context(root)?;
        Ok(Self {
            document,
            prefixes,
            by_prefix,
            compact,
            key_cache: Mutex::new(HashMap::new()),
        })
    }

    /// Replace the current document, rebuilding the prefix table and
    /// flushing the resolved-key cache.
    ///
    /// Re-setting the identical `Arc` leaves everything in place. On error
    /// the previous document stays attached.
    pub fn set_document(&mut self, document: Arc<JsonValue>) -> Result<()> {
        if Arc::ptr_eq(&self.document, &document) {
            return Ok(());
        }
        *self = Self::new(document)?;
        Ok(())
    }

    /// The attached document, as supplied (wrapper included).
    pub fn document(&self) -> &Arc<JsonValue> {
        &self.document
    }

    /// The document root node, with a `[document]` wrapper unwrapped.
    pub fn root(&self) -> &JsonValue {
        match &*self.document {
            JsonValue::Array(items) => items.first().unwrap_or(&NULL),
            other => other,
        }
    }

    /// Whether the document is in compact (prefixed-key) mode.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Resolve a full vocabulary IRI to the key actually present on this
    /// document's nodes.
    ///
    /// Expanded documents pass the IRI through unchanged. Compact documents
    /// go through the prefix table, longest namespace first; an IRI no
    /// prefix covers falls back to itself, so lookups stay consistent (if
    /// possibly "not found") instead of failing.
    pub fn resolve_key(&self, iri: &str) -> String {
        if !self.compact {
            return iri.to_string();
        }
        if let Ok(cache) = self.key_cache.lock() {
            if let Some(hit) = cache.get(iri) {
                return hit.clone();
            }
        }
        let resolved = self.compact_iri(iri);
        if let Ok(mut cache) = self.key_cache.lock() {
            cache.insert(iri.to_string(), resolved.clone());
        }
        resolved
    }

    /// Expand a key found on a node back to its full IRI.
    ///
    /// The inverse of [`resolve_key`](Self::resolve_key): `prefix:local`
    /// goes through the prefix table, absolute IRIs and keywords pass
    /// through, and an unknown prefix leaves the key unchanged.
    pub fn expand_key(&self, key: &str) -> String {
        if key.starts_with('@') {
            return key.to_string();
        }
        if let Some((prefix, local)) = key.split_once(':') {
            if local.starts_with("//") {
                return key.to_string();
            }
            if let Some(ns) = self.by_prefix.get(prefix) {
                return format!("{ns}{local}");
            }
        }
        key.to_string()
    }

    /// The compact prefix mapped to exactly `namespace`, if any.
    ///
    /// Used when a caller needs to recognize keys belonging to a whole
    /// vocabulary (e.g. object data-node members) rather than one IRI.
    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, prefix)| prefix.as_str())
    }

    /// Longest-prefix compaction against the document's `@context`.
    fn compact_iri(&self, iri: &str) -> String {
        for (ns, prefix) in &self.prefixes {
            if let Some(local) = iri.strip_prefix(ns.as_str()) {
                return format!("{prefix}:{local}");
            }
        }
        iri.to_string()
    }
}

/// Unwrap an optional `[document]` wrapper and validate the root.
fn unwrap_root(document: &JsonValue) -> Result<&JsonValue> {
    let root = match document {
        JsonValue::Array(items) => items.first().unwrap_or(&NULL),
        other => other,
    };
    if root.is_object() {
        Ok(root)
    } else {
        Err(GraphError::InvalidDocument {
            kind: json_kind(root),
        })
    }
}

/// Detect the compaction mode and collect the prefix table from the root
/// `@context`.
fn parse_context(
    root: &JsonValue,
) -> Result<(bool, Vec<(String, String)>, HashMap<String, String>)> {
    let Some(context) = root.get("@context") else {
        return Ok((false, Vec::new(), HashMap::new()));
    };
    let JsonValue::Object(entries) = context else {
        return Err(GraphError::InvalidContext {
            message: format!("expected an object, got {}", json_kind(context)),
        });
    };

    let mut by_prefix = HashMap::new();
    for (term, entry) in entries {
        if term.starts_with('@') {
            continue;
        }
        // String entries map a prefix directly; object entries carry the
        // namespace in their "@id".
        let iri = match entry {
            JsonValue::String(s) => Some(s.as_str()),
            JsonValue::Object(map) => map.get("@id").and_then(JsonValue::as_str),
            _ => None,
        };
        if let Some(iri) = iri {
            by_prefix.insert(term.clone(), iri.to_string());
        }
    }

    let mut prefixes: Vec<(String, String)> = by_prefix
        .iter()
        .filter(|(_, iri)| iri.ends_with('/') || iri.ends_with('#'))
        .map(|(prefix, iri)| (iri.clone(), prefix.clone()))
        .collect();
    prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.1.cmp(&b.1)));

    Ok((true, prefixes, by_prefix))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ctx(doc: JsonValue) -> DocumentContext {
        DocumentContext::new(Arc::new(doc)).unwrap()
    }

    #[test]
    fn test_expanded_document_passes_keys_through() {
        let ctx = ctx(json!({"@id": "amf://doc"}));
        assert!(!ctx.is_compact());
        assert_eq!(
            ctx.resolve_key("http://a.ml/vocabularies/document#encodes"),
            "http://a.ml/vocabularies/document#encodes"
        );
    }

    #[test]
    fn test_compact_document_resolves_through_context() {
        let ctx = ctx(json!({
            "@context": {
                "doc": "http://a.ml/vocabularies/document#",
                "core": {"@id": "http://a.ml/vocabularies/core#"}
            },
            "@id": "amf://doc"
        }));
        assert!(ctx.is_compact());
        assert_eq!(
            ctx.resolve_key("http://a.ml/vocabularies/document#encodes"),
            "doc:encodes"
        );
        assert_eq!(
            ctx.resolve_key("http://a.ml/vocabularies/core#name"),
            "core:name"
        );
        // No covering prefix: the literal IRI comes back
        assert_eq!(
            ctx.resolve_key("http://example.com/ns#other"),
            "http://example.com/ns#other"
        );
    }

    #[test]
    fn test_resolve_key_is_idempotent() {
        let ctx = ctx(json!({
            "@context": {"doc": "http://a.ml/vocabularies/document#"},
            "@id": "amf://doc"
        }));
        let first = ctx.resolve_key("http://a.ml/vocabularies/document#declares");
        let second = ctx.resolve_key("http://a.ml/vocabularies/document#declares");
        assert_eq!(first, second);
    }

    #[test]
    fn test_longest_namespace_wins() {
        let ctx = ctx(json!({
            "@context": {
                "a": "http://example.com/ns#",
                "ab": "http://example.com/ns#nested/"
            },
            "@id": "amf://doc"
        }));
        assert_eq!(ctx.resolve_key("http://example.com/ns#nested/x"), "ab:x");
        assert_eq!(ctx.resolve_key("http://example.com/ns#x"), "a:x");
    }

    #[test]
    fn test_expand_key_inverts_resolution() {
        let ctx = ctx(json!({
            "@context": {"shacl": "http://www.w3.org/ns/shacl#"},
            "@id": "amf://doc"
        }));
        assert_eq!(
            ctx.expand_key("shacl:NodeShape"),
            "http://www.w3.org/ns/shacl#NodeShape"
        );
        // Absolute IRIs, keywords and unknown prefixes pass through
        assert_eq!(ctx.expand_key("http://a.ml/x#y"), "http://a.ml/x#y");
        assert_eq!(ctx.expand_key("@type"), "@type");
        assert_eq!(ctx.expand_key("mystery:thing"), "mystery:thing");
    }

    #[test]
    fn test_cache_does_not_leak_across_documents() {
        let mut ctx = ctx(json!({
            "@context": {"doc": "http://a.ml/vocabularies/document#"},
            "@id": "amf://a"
        }));
        assert_eq!(
            ctx.resolve_key("http://a.ml/vocabularies/document#encodes"),
            "doc:encodes"
        );
        ctx.set_document(Arc::new(json!({
            "@context": {"d": "http://a.ml/vocabularies/document#"},
            "@id": "amf://b"
        })))
        .unwrap();
        assert_eq!(
            ctx.resolve_key("http://a.ml/vocabularies/document#encodes"),
            "d:encodes"
        );
    }

    #[test]
    fn test_reset_same_document_is_noop() {
        let doc = Arc::new(json!({"@id": "amf://doc"}));
        let mut ctx = DocumentContext::new(doc.clone()).unwrap();
        ctx.set_document(doc.clone()).unwrap();
        assert!(Arc::ptr_eq(ctx.document(), &doc));
    }

    #[test]
    fn test_wrapped_document_is_unwrapped() {
        let ctx = ctx(json!([{
            "@context": {"doc": "http://a.ml/vocabularies/document#"},
            "@id": "amf://doc"
        }]));
        assert!(ctx.is_compact());
        assert_eq!(ctx.root()["@id"], json!("amf://doc"));
    }

    #[test]
    fn test_invalid_roots_are_rejected() {
        assert!(DocumentContext::new(Arc::new(json!("nope"))).is_err());
        assert!(DocumentContext::new(Arc::new(json!([]))).is_err());
        assert!(DocumentContext::new(Arc::new(json!([42]))).is_err());
    }

    #[test]
    fn test_remote_context_is_rejected() {
        let result = DocumentContext::new(Arc::new(json!({
            "@context": "https://example.com/context.jsonld",
            "@id": "amf://doc"
        })));
        assert!(result.is_err());
    }

    #[test]
    fn test_prefix_for() {
        let ctx = ctx(json!({
            "@context": {"data": "http://a.ml/vocabularies/data#"},
            "@id": "amf://doc"
        }));
        assert_eq!(ctx.prefix_for("http://a.ml/vocabularies/data#"), Some("data"));
        assert_eq!(ctx.prefix_for("http://a.ml/vocabularies/core#"), None);
    }
}
