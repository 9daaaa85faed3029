//! Translation from AMF JSON-LD graph nodes to the flat records in
//! `amf-model`.
//!
//! [`AmfSerializer`] holds the current document (through an
//! `amf_graph::DocumentContext`) and exposes one translator per domain
//! concept. Translators are pure reads over the graph: they resolve
//! links, locate properties through the document's compaction mode, and
//! recurse into nested nodes. Missing optional substructure degrades to
//! `None`/empty collections; a translator returns `None` only for
//! structurally invalid input (not an object, or no `@id`).
//!
//! # Example
//!
//! ```
//! use amf_serializer::AmfSerializer;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let doc = Arc::new(json!({
//!     "@id": "amf://doc",
//!     "@type": ["http://a.ml/vocabularies/document#Document"],
//!     "http://a.ml/vocabularies/document#encodes": [{
//!         "@id": "amf://doc#/web-api",
//!         "@type": ["http://a.ml/vocabularies/apiContract#WebAPI"],
//!         "http://a.ml/vocabularies/core#name": [{"@value": "Pets"}]
//!     }]
//! }));
//! let serializer = AmfSerializer::new(doc.clone()).unwrap();
//! let api = serializer.api(&doc).unwrap();
//! assert_eq!(api.name.as_deref(), Some("Pets"));
//! ```

mod api;
mod data;
mod security;
mod shape;

pub use shape::ShapeOptions;

use amf_graph::{node as graph_node, DocumentContext, Result};
use amf_model::ApiCustomDomainProperty;
use amf_vocab::{core, document};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::debug;

/// The serializer: a document context plus the translator methods
/// implemented across this crate's modules.
#[derive(Debug)]
pub struct AmfSerializer {
    ctx: DocumentContext,
}

impl AmfSerializer {
    /// Attach a document (or `[document]` wrapper) and build the
    /// serializer over it.
    pub fn new(document: Arc<JsonValue>) -> Result<Self> {
        Ok(Self {
            ctx: DocumentContext::new(document)?,
        })
    }

    /// Build a serializer over an existing context.
    pub fn from_context(ctx: DocumentContext) -> Self {
        Self { ctx }
    }

    /// Replace the current document; a re-set of the identical document
    /// is a no-op. Derived key caches are rebuilt on change.
    pub fn set_document(&mut self, document: Arc<JsonValue>) -> Result<()> {
        if !Arc::ptr_eq(self.ctx.document(), &document) {
            debug!("replacing AMF document, derived caches are rebuilt");
        }
        self.ctx.set_document(document)
    }

    /// The underlying document context.
    pub fn context(&self) -> &DocumentContext {
        &self.ctx
    }

    /// The attached document, as supplied.
    pub fn document(&self) -> &Arc<JsonValue> {
        self.ctx.document()
    }

    /// The applied annotations of a node, always a list (empty when the
    /// node carries none).
    ///
    /// Each entry in the node's `customDomainProperties` link list names a
    /// definition attached to the node itself under the linked id as a
    /// property key; AMF emits that key both with and without the
    /// `amf://id` prefix depending on the pipeline, so both spellings are
    /// tried.
    pub fn custom_domain_properties(&self, node: &JsonValue) -> Vec<ApiCustomDomainProperty> {
        let key = self.key(document::CUSTOM_DOMAIN_PROPERTIES);
        let mut result = Vec::new();
        for id in graph_node::get_link_values(node, &key) {
            let definition = node
                .get(id)
                .or_else(|| node.get(format!("amf://id{id}").as_str()))
                .or_else(|| {
                    id.strip_prefix("amf://id")
                        .and_then(|stripped| node.get(stripped))
                });
            let Some(definition) = definition
                .map(graph_node::ensure_array)
                .and_then(<[JsonValue]>::first)
            else {
                continue;
            };
            let name = self
                .string_value(definition, core::EXTENSION_NAME)
                .or_else(|| self.string_value(definition, core::NAME));
            result.push(ApiCustomDomainProperty {
                id: id.to_string(),
                name,
                extension: self.unknown_data_node(definition),
            });
        }
        result
    }

    // Shared read helpers; keys are resolved against the document's
    // compaction mode on every access.

    pub(crate) fn key(&self, iri: &str) -> String {
        self.ctx.resolve_key(iri)
    }

    /// The node's `@type` tags expanded to full IRIs.
    pub(crate) fn types(&self, node: &JsonValue) -> Vec<String> {
        graph_node::node_types(node)
            .iter()
            .map(|tag| self.ctx.expand_key(tag))
            .collect()
    }

    pub(crate) fn string_value(&self, node: &JsonValue, iri: &str) -> Option<String> {
        graph_node::string_value(node, &self.key(iri))
    }

    pub(crate) fn string_values(&self, node: &JsonValue, iri: &str) -> Vec<String> {
        let key = self.key(iri);
        graph_node::get_value_array(node, &key)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| match value {
                JsonValue::String(s) => Some(s.clone()),
                JsonValue::Number(n) => Some(n.to_string()),
                JsonValue::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn bool_value(&self, node: &JsonValue, iri: &str) -> Option<bool> {
        graph_node::bool_value(node, &self.key(iri))
    }

    pub(crate) fn i64_value(&self, node: &JsonValue, iri: &str) -> Option<i64> {
        graph_node::i64_value(node, &self.key(iri))
    }

    pub(crate) fn f64_value(&self, node: &JsonValue, iri: &str) -> Option<f64> {
        graph_node::f64_value(node, &self.key(iri))
    }

    pub(crate) fn link_value<'a>(&self, node: &'a JsonValue, iri: &str) -> Option<&'a str> {
        let key = self.key(iri);
        graph_node::get_link_value(node, &key)
    }

    /// First embedded node under `iri`.
    pub(crate) fn child<'a>(&self, node: &'a JsonValue, iri: &str) -> Option<&'a JsonValue> {
        let key = self.key(iri);
        graph_node::ensure_array(node.get(&key)?).first()
    }

    /// All embedded nodes under `iri`, in document order.
    pub(crate) fn children<'a>(&self, node: &'a JsonValue, iri: &str) -> Vec<&'a JsonValue> {
        let key = self.key(iri);
        match node.get(&key) {
            Some(entry) => graph_node::ensure_array(entry).iter().collect(),
            None => Vec::new(),
        }
    }

    /// Swap a bare `{"@id": ...}` stub for the canonical node it names,
    /// when one is reachable. Embedded nodes pass through untouched.
    pub(crate) fn dereference<'a>(&'a self, node: &'a JsonValue) -> &'a JsonValue {
        let Some(map) = node.as_object() else {
            return node;
        };
        if map.len() == 1 {
            if let Some(found) = graph_node::node_id(node).and_then(|id| self.ctx.find_by_id(id))
            {
                return found;
            }
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_custom_domain_properties_empty_when_absent() {
        let serializer = AmfSerializer::new(Arc::new(json!({"@id": "amf://doc"}))).unwrap();
        let node = json!({"@id": "amf://doc#/op"});
        assert_eq!(serializer.custom_domain_properties(&node), vec![]);
    }

    #[test]
    fn test_custom_domain_properties_reads_attached_definition() {
        let serializer = AmfSerializer::new(Arc::new(json!({"@id": "amf://doc"}))).unwrap();
        let node = json!({
            "@id": "amf://doc#/op",
            "http://a.ml/vocabularies/document#customDomainProperties": [
                {"@id": "amf://doc#/annotations/clearance"}
            ],
            "amf://doc#/annotations/clearance": [{
                "@id": "amf://doc#/annotations/clearance/scalar",
                "@type": ["http://a.ml/vocabularies/data#Scalar"],
                "http://a.ml/vocabularies/core#extensionName": [{"@value": "clearance"}],
                "http://a.ml/vocabularies/data#value": [{"@value": "low"}]
            }]
        });
        let props = serializer.custom_domain_properties(&node);
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].name.as_deref(), Some("clearance"));
        assert!(props[0].extension.is_some());
    }

    #[test]
    fn test_set_document_identity_noop() {
        let doc = Arc::new(json!({"@id": "amf://doc"}));
        let mut serializer = AmfSerializer::new(doc.clone()).unwrap();
        serializer.set_document(doc.clone()).unwrap();
        assert!(Arc::ptr_eq(serializer.document(), &doc));
    }

    #[test]
    fn test_types_expand_compact_tags() {
        let serializer = AmfSerializer::new(Arc::new(json!({
            "@context": {"shacl": "http://www.w3.org/ns/shacl#"},
            "@id": "amf://doc"
        })))
        .unwrap();
        let node = json!({"@id": "x", "@type": ["shacl:NodeShape"]});
        assert_eq!(
            serializer.types(&node),
            vec!["http://www.w3.org/ns/shacl#NodeShape".to_string()]
        );
    }
}
