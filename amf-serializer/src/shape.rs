//! Shape translators.
//!
//! A shape node can carry several `@type` tags at once, so
//! [`AmfSerializer::unknown_shape`] dispatches through a fixed precedence
//! chain, most specific tag first, with `AnyShape` as the fallback. Every
//! translator resolves links before reading and threads [`ShapeOptions`]
//! into nested shapes.

use crate::AmfSerializer;
use amf_graph::node as graph_node;
use amf_model::{
    ApiAnyShape, ApiArrayShape, ApiDataNodeUnion, ApiExample, ApiFileShape, ApiNodeShape,
    ApiPropertyShape, ApiRecursiveShape, ApiScalarShape, ApiSchemaShape, ApiShapeBase,
    ApiShapeUnion, ApiTupleShape, ApiUnionShape, ApiXmlSerializer,
};
use amf_vocab::{api_contract, core, rdf, shacl, shapes, source_maps};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Per-call serialization context for shapes.
///
/// `tracked_id` identifies the payload (or parameter) on whose behalf the
/// shape is being serialized; it controls which tracked examples surface
/// (see [`AmfSerializer::filter_tracked_examples`]).
#[derive(Debug, Clone, Default)]
pub struct ShapeOptions {
    pub tracked_id: Option<String>,
}

impl ShapeOptions {
    /// Options for serializing a shape owned by the given payload.
    pub fn tracked(id: impl Into<String>) -> Self {
        Self {
            tracked_id: Some(id.into()),
        }
    }
}

impl AmfSerializer {
    /// Translate any shape node, selecting the concrete translator by
    /// `@type` membership.
    pub fn unknown_shape(&self, node: &JsonValue) -> Option<ApiShapeUnion> {
        self.unknown_shape_with(node, &ShapeOptions::default())
    }

    /// [`unknown_shape`](Self::unknown_shape) with an explicit tracked
    /// context.
    ///
    /// The precedence is fixed: Scalar, Node, Union, File, Schema, Tuple
    /// (before Array, whose tag tuples also carry), Array/Matrix,
    /// Recursive, then the AnyShape fallback.
    pub fn unknown_shape_with(
        &self,
        node: &JsonValue,
        opts: &ShapeOptions,
    ) -> Option<ApiShapeUnion> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        if self.context().has_type(node, shapes::SCALAR_SHAPE) {
            return self.scalar_shape_with(node, opts).map(ApiShapeUnion::Scalar);
        }
        if self.context().has_type(node, shacl::NODE_SHAPE) {
            return self.node_shape_with(node, opts).map(ApiShapeUnion::Node);
        }
        if self.context().has_type(node, shapes::UNION_SHAPE) {
            return self.union_shape_with(node, opts).map(ApiShapeUnion::Union);
        }
        if self.context().has_type(node, shapes::FILE_SHAPE) {
            return self.file_shape_with(node, opts).map(ApiShapeUnion::File);
        }
        if self.context().has_type(node, shapes::SCHEMA_SHAPE) {
            return self.schema_shape_with(node, opts).map(ApiShapeUnion::Schema);
        }
        if self.context().has_type(node, shapes::TUPLE_SHAPE) {
            return self.tuple_shape_with(node, opts).map(ApiShapeUnion::Tuple);
        }
        if self.context().has_type(node, shapes::ARRAY_SHAPE)
            || self.context().has_type(node, shapes::MATRIX_SHAPE)
        {
            return self.array_shape_with(node, opts).map(ApiShapeUnion::Array);
        }
        if self.context().has_type(node, shapes::RECURSIVE_SHAPE) {
            return self.recursive_shape(node).map(ApiShapeUnion::Recursive);
        }
        debug!(id = graph_node::node_id(node), "no concrete shape tag, using AnyShape");
        self.any_shape_with(node, opts).map(ApiShapeUnion::Any)
    }

    /// Facets shared by every shape.
    fn shape_base(&self, node: &JsonValue, opts: &ShapeOptions) -> Option<ApiShapeBase> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiShapeBase {
            id,
            types: self.types(node),
            name: self
                .string_value(node, shacl::NAME)
                .or_else(|| self.string_value(node, core::NAME)),
            display_name: self.string_value(node, core::DISPLAY_NAME),
            description: self.string_value(node, core::DESCRIPTION),
            default_value_str: self.string_value(node, shacl::DEFAULT_VALUE_STR),
            default_value: self
                .child(node, shacl::DEFAULT_VALUE)
                .and_then(|value| self.unknown_data_node(value)),
            deprecated: self.bool_value(node, shapes::DEPRECATED),
            read_only: self.bool_value(node, shapes::READ_ONLY),
            write_only: self.bool_value(node, shapes::WRITE_ONLY),
            values: self.enum_values(node),
            inherits: self.shape_list(node, shapes::INHERITS, opts),
            or: self.shape_list(node, shacl::OR, opts),
            and: self.shape_list(node, shacl::AND, opts),
            xone: self.shape_list(node, shacl::XONE, opts),
            not: self
                .child(node, shacl::NOT)
                .and_then(|not| self.unknown_shape_with(not, opts))
                .map(Box::new),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    fn shape_list(
        &self,
        node: &JsonValue,
        iri: &str,
        opts: &ShapeOptions,
    ) -> Vec<ApiShapeUnion> {
        self.children(node, iri)
            .into_iter()
            .filter_map(|item| self.unknown_shape_with(item, opts))
            .collect()
    }

    /// Enum values under `sh:in`: an RDF sequence node whose members sit
    /// under `rdf:_1`, `rdf:_2`, ... keys.
    fn enum_values(&self, node: &JsonValue) -> Vec<ApiDataNodeUnion> {
        let Some(seq) = self.child(node, shacl::IN) else {
            return Vec::new();
        };
        let Some(map) = seq.as_object() else {
            return Vec::new();
        };
        let mut members: Vec<(usize, &JsonValue)> = map
            .iter()
            .filter_map(|(key, value)| {
                let expanded = self.context().expand_key(key);
                let local = expanded.strip_prefix(rdf::NS)?;
                let index = local.strip_prefix('_')?.parse().ok()?;
                Some((index, value))
            })
            .collect();
        members.sort_by_key(|(index, _)| *index);
        members
            .into_iter()
            .filter_map(|(_, value)| graph_node::ensure_array(value).first())
            .filter_map(|member| self.unknown_data_node(member))
            .collect()
    }

    /// The AnyShape layer: base facets plus documentation, XML hints and
    /// the shape's examples, filtered by ownership.
    pub fn any_shape(&self, node: &JsonValue) -> Option<ApiAnyShape> {
        self.any_shape_with(node, &ShapeOptions::default())
    }

    pub fn any_shape_with(&self, node: &JsonValue, opts: &ShapeOptions) -> Option<ApiAnyShape> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        Some(ApiAnyShape {
            base: self.shape_base(node, opts)?,
            documentation: self
                .child(node, core::DOCUMENTATION)
                .and_then(|docs| self.documentation(docs)),
            xml_serialization: self
                .child(node, shapes::XML_SERIALIZATION)
                .and_then(|xml| self.xml_serializer(xml)),
            examples: self.owned_examples(node, opts),
        })
    }

    pub fn scalar_shape(&self, node: &JsonValue) -> Option<ApiScalarShape> {
        self.scalar_shape_with(node, &ShapeOptions::default())
    }

    pub fn scalar_shape_with(
        &self,
        node: &JsonValue,
        opts: &ShapeOptions,
    ) -> Option<ApiScalarShape> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let minimum = self.f64_value(node, shacl::MIN_INCLUSIVE);
        let maximum = self.f64_value(node, shacl::MAX_INCLUSIVE);
        let exclusive_minimum = self.f64_value(node, shacl::MIN_EXCLUSIVE);
        let exclusive_maximum = self.f64_value(node, shacl::MAX_EXCLUSIVE);
        Some(ApiScalarShape {
            base: self.any_shape_with(node, opts)?,
            data_type: self.link_value(node, shacl::DATATYPE).map(str::to_string),
            pattern: self.string_value(node, shacl::PATTERN),
            min_length: self.i64_value(node, shacl::MIN_LENGTH),
            max_length: self.i64_value(node, shacl::MAX_LENGTH),
            minimum: minimum.or(exclusive_minimum),
            maximum: maximum.or(exclusive_maximum),
            exclusive_minimum: exclusive_minimum.map(|_| true),
            exclusive_maximum: exclusive_maximum.map(|_| true),
            format: self.string_value(node, shapes::FORMAT),
            multiple_of: self.f64_value(node, shapes::MULTIPLE_OF),
        })
    }

    pub fn node_shape(&self, node: &JsonValue) -> Option<ApiNodeShape> {
        self.node_shape_with(node, &ShapeOptions::default())
    }

    pub fn node_shape_with(&self, node: &JsonValue, opts: &ShapeOptions) -> Option<ApiNodeShape> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        Some(ApiNodeShape {
            base: self.any_shape_with(node, opts)?,
            properties: self
                .children(node, shacl::PROPERTY)
                .into_iter()
                .filter_map(|property| self.property_shape_with(property, opts))
                .collect(),
            min_properties: self.i64_value(node, shapes::MIN_PROPERTIES),
            max_properties: self.i64_value(node, shapes::MAX_PROPERTIES),
            closed: self.bool_value(node, shacl::CLOSED),
            discriminator: self.string_value(node, shapes::DISCRIMINATOR),
            discriminator_value: self.string_value(node, shapes::DISCRIMINATOR_VALUE),
        })
    }

    pub fn property_shape(&self, node: &JsonValue) -> Option<ApiPropertyShape> {
        self.property_shape_with(node, &ShapeOptions::default())
    }

    pub fn property_shape_with(
        &self,
        node: &JsonValue,
        opts: &ShapeOptions,
    ) -> Option<ApiPropertyShape> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        Some(ApiPropertyShape {
            base: self.shape_base(node, opts)?,
            path: self.link_value(node, shacl::PATH).map(str::to_string),
            range: self
                .child(node, shapes::RANGE)
                .and_then(|range| self.unknown_shape_with(range, opts))
                .map(Box::new),
            min_count: self.i64_value(node, shacl::MIN_COUNT),
            max_count: self.i64_value(node, shacl::MAX_COUNT),
        })
    }

    pub fn union_shape(&self, node: &JsonValue) -> Option<ApiUnionShape> {
        self.union_shape_with(node, &ShapeOptions::default())
    }

    pub fn union_shape_with(
        &self,
        node: &JsonValue,
        opts: &ShapeOptions,
    ) -> Option<ApiUnionShape> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        Some(ApiUnionShape {
            base: self.any_shape_with(node, opts)?,
            any_of: self.shape_list(node, shapes::ANY_OF, opts),
        })
    }

    pub fn file_shape(&self, node: &JsonValue) -> Option<ApiFileShape> {
        self.file_shape_with(node, &ShapeOptions::default())
    }

    pub fn file_shape_with(&self, node: &JsonValue, opts: &ShapeOptions) -> Option<ApiFileShape> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        Some(ApiFileShape {
            base: self.any_shape_with(node, opts)?,
            file_types: self.string_values(node, shapes::FILE_TYPE),
            pattern: self.string_value(node, shacl::PATTERN),
            min_length: self.i64_value(node, shacl::MIN_LENGTH),
            max_length: self.i64_value(node, shacl::MAX_LENGTH),
            minimum: self.f64_value(node, shacl::MIN_INCLUSIVE),
            maximum: self.f64_value(node, shacl::MAX_INCLUSIVE),
            format: self.string_value(node, shapes::FORMAT),
            multiple_of: self.f64_value(node, shapes::MULTIPLE_OF),
        })
    }

    pub fn schema_shape(&self, node: &JsonValue) -> Option<ApiSchemaShape> {
        self.schema_shape_with(node, &ShapeOptions::default())
    }

    pub fn schema_shape_with(
        &self,
        node: &JsonValue,
        opts: &ShapeOptions,
    ) -> Option<ApiSchemaShape> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        Some(ApiSchemaShape {
            base: self.any_shape_with(node, opts)?,
            media_type: self.string_value(node, core::MEDIA_TYPE),
            raw: self.string_value(node, shacl::RAW),
        })
    }

    pub fn array_shape(&self, node: &JsonValue) -> Option<ApiArrayShape> {
        self.array_shape_with(node, &ShapeOptions::default())
    }

    pub fn array_shape_with(
        &self,
        node: &JsonValue,
        opts: &ShapeOptions,
    ) -> Option<ApiArrayShape> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        Some(ApiArrayShape {
            base: self.any_shape_with(node, opts)?,
            items: self
                .child(node, shapes::ITEMS)
                .and_then(|items| self.unknown_shape_with(items, opts))
                .map(Box::new),
            min_items: self.i64_value(node, shacl::MIN_COUNT),
            max_items: self.i64_value(node, shacl::MAX_COUNT),
            unique_items: self.bool_value(node, shapes::UNIQUE_ITEMS),
        })
    }

    pub fn tuple_shape(&self, node: &JsonValue) -> Option<ApiTupleShape> {
        self.tuple_shape_with(node, &ShapeOptions::default())
    }

    pub fn tuple_shape_with(
        &self,
        node: &JsonValue,
        opts: &ShapeOptions,
    ) -> Option<ApiTupleShape> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        Some(ApiTupleShape {
            base: self.any_shape_with(node, opts)?,
            items: self.shape_list(node, shapes::ITEMS, opts),
            additional_items: self.bool_value(node, shapes::ADDITIONAL_ITEMS),
        })
    }

    /// The recursion marker: no nested shapes, only the `fixPoint` id of
    /// the ancestor the recursion folds back to.
    pub fn recursive_shape(&self, node: &JsonValue) -> Option<ApiRecursiveShape> {
        Some(ApiRecursiveShape {
            base: self.shape_base(node, &ShapeOptions::default())?,
            fix_point: self.link_value(node, shapes::FIX_POINT).map(str::to_string),
        })
    }

    pub fn xml_serializer(&self, node: &JsonValue) -> Option<ApiXmlSerializer> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiXmlSerializer {
            id,
            types: self.types(node),
            attribute: self.bool_value(node, shapes::XML_ATTRIBUTE),
            wrapped: self.bool_value(node, shapes::XML_WRAPPED),
            name: self.string_value(node, shapes::XML_NAME),
            namespace: self.string_value(node, shapes::XML_NAMESPACE),
            prefix: self.string_value(node, shapes::XML_PREFIX),
        })
    }

    /// The shape's examples with ownership applied: with a tracked
    /// context, untracked examples plus the ones tracked to that id;
    /// standalone, untracked examples only.
    fn owned_examples(&self, node: &JsonValue, opts: &ShapeOptions) -> Vec<ApiExample> {
        let nodes = self.children(node, api_contract::EXAMPLES);
        let filtered = match opts.tracked_id.as_deref() {
            Some(tracked_id) => self.filter_tracked_examples(nodes, tracked_id),
            None => self.filter_non_tracked_examples(nodes),
        };
        filtered
            .into_iter()
            .filter_map(|example| self.example(example))
            .collect()
    }

    /// Keep untracked examples and those whose `tracked-element` entry
    /// names `tracked_id`.
    pub fn filter_tracked_examples<'a>(
        &self,
        examples: Vec<&'a JsonValue>,
        tracked_id: &str,
    ) -> Vec<&'a JsonValue> {
        examples
            .into_iter()
            .filter(|example| match self.tracked_ids(example) {
                Some(ids) => ids.iter().any(|id| id == tracked_id),
                None => true,
            })
            .collect()
    }

    /// Keep only examples with no `tracked-element` entry (declared on
    /// the type itself, not pinned to a payload).
    pub fn filter_non_tracked_examples<'a>(
        &self,
        examples: Vec<&'a JsonValue>,
    ) -> Vec<&'a JsonValue> {
        examples
            .into_iter()
            .filter(|example| self.tracked_ids(example).is_none())
            .collect()
    }

    /// The ids an example is tracked to, read from its source map.
    ///
    /// The entry's `value` literal may name several ids separated by
    /// commas; a `{"@id"}` link form is matched whole.
    fn tracked_ids(&self, example: &JsonValue) -> Option<Vec<String>> {
        let sources_key = self.key(source_maps::SOURCES);
        let source_map = example
            .get(&sources_key)
            .map(graph_node::ensure_array)
            .and_then(<[JsonValue]>::first)?;
        let tracked_key = self.key(source_maps::TRACKED_ELEMENT);
        let entry = graph_node::ensure_array(source_map.get(&tracked_key)?).first()?;
        let value_key = self.key(source_maps::VALUE);
        if let Some(value) = graph_node::get_value(entry, &value_key).and_then(JsonValue::as_str)
        {
            return Some(
                value
                    .split(',')
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .collect(),
            );
        }
        graph_node::node_id(entry).map(|id| vec![id.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AmfSerializer;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn serializer() -> AmfSerializer {
        AmfSerializer::new(Arc::new(json!({"@id": "amf://doc"}))).unwrap()
    }

    fn tracked_example(id: &str, tracked: &str) -> JsonValue {
        json!({
            "@id": id,
            "@type": ["http://a.ml/vocabularies/apiContract#Example"],
            "http://a.ml/vocabularies/document-source-maps#sources": [{
                "@id": format!("{id}/source-map"),
                "http://a.ml/vocabularies/document-source-maps#tracked-element": [{
                    "@id": format!("{id}/source-map/tracked-element"),
                    "http://a.ml/vocabularies/document-source-maps#value": [
                        {"@value": tracked}
                    ]
                }]
            }]
        })
    }

    #[test]
    fn test_untracked_examples_always_pass() {
        let s = serializer();
        let plain = json!({"@id": "amf://example"});
        let nodes = vec![&plain];
        assert_eq!(s.filter_non_tracked_examples(nodes.clone()).len(), 1);
        assert_eq!(s.filter_tracked_examples(nodes, "amf://payload").len(), 1);
    }

    #[test]
    fn test_tracked_example_needs_matching_id() {
        let s = serializer();
        let tracked = tracked_example("amf://example", "amf://payload-a, amf://payload-b");
        let nodes = vec![&tracked];
        assert!(s.filter_non_tracked_examples(nodes.clone()).is_empty());
        assert_eq!(
            s.filter_tracked_examples(nodes.clone(), "amf://payload-b").len(),
            1
        );
        assert!(s.filter_tracked_examples(nodes, "amf://payload-c").is_empty());
    }

    #[test]
    fn test_tracked_link_form_matches_whole() {
        let s = serializer();
        let tracked = json!({
            "@id": "amf://example",
            "http://a.ml/vocabularies/document-source-maps#sources": [{
                "@id": "amf://example/source-map",
                "http://a.ml/vocabularies/document-source-maps#tracked-element": [
                    {"@id": "amf://payload-a"}
                ]
            }]
        });
        let nodes = vec![&tracked];
        assert_eq!(s.filter_tracked_examples(nodes.clone(), "amf://payload-a").len(), 1);
        assert!(s.filter_tracked_examples(nodes, "amf://payload").is_empty());
    }
}
