//! Shape dispatch, recursion markers and example ownership.

use amf_model::ApiShapeUnion;
use amf_serializer::{AmfSerializer, ShapeOptions};
use pretty_assertions::assert_eq;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

fn serializer(doc: JsonValue) -> AmfSerializer {
    AmfSerializer::new(Arc::new(doc)).unwrap()
}

fn empty_serializer() -> AmfSerializer {
    serializer(json!({"@id": "amf://doc"}))
}

#[test]
fn test_dispatch_picks_most_specific_tag() {
    let s = empty_serializer();
    // A scalar shape also tagged AnyShape must not fall back
    let scalar = json!({
        "@id": "amf://shape",
        "@type": [
            "http://a.ml/vocabularies/shapes#AnyShape",
            "http://a.ml/vocabularies/shapes#ScalarShape"
        ],
        "http://www.w3.org/ns/shacl#datatype": [
            {"@id": "http://www.w3.org/2001/XMLSchema#integer"}
        ],
        "http://www.w3.org/ns/shacl#minInclusive": [{"@value": 0.0}]
    });
    let Some(ApiShapeUnion::Scalar(shape)) = s.unknown_shape(&scalar) else {
        panic!("expected scalar dispatch");
    };
    assert_eq!(
        shape.data_type.as_deref(),
        Some("http://www.w3.org/2001/XMLSchema#integer")
    );
    assert_eq!(shape.minimum, Some(0.0));
    assert_eq!(shape.exclusive_minimum, None);
}

#[test]
fn test_tuple_dispatch_wins_over_array_tag() {
    let s = empty_serializer();
    // AMF tags tuples with both TupleShape and ArrayShape
    let tuple = json!({
        "@id": "amf://tuple",
        "@type": [
            "http://a.ml/vocabularies/shapes#ArrayShape",
            "http://a.ml/vocabularies/shapes#TupleShape"
        ],
        "http://a.ml/vocabularies/shapes#items": [
            {
                "@id": "amf://tuple/0",
                "@type": ["http://a.ml/vocabularies/shapes#ScalarShape"]
            },
            {
                "@id": "amf://tuple/1",
                "@type": ["http://a.ml/vocabularies/shapes#ScalarShape"]
            }
        ]
    });
    let Some(ApiShapeUnion::Tuple(shape)) = s.unknown_shape(&tuple) else {
        panic!("expected tuple dispatch");
    };
    assert_eq!(shape.items.len(), 2);
}

#[test]
fn test_untagged_shape_falls_back_to_any() {
    let s = empty_serializer();
    let bare = json!({
        "@id": "amf://mystery",
        "@type": ["http://a.ml/vocabularies/shapes#Shape"],
        "http://www.w3.org/ns/shacl#name": [{"@value": "mystery"}]
    });
    let Some(ApiShapeUnion::Any(shape)) = s.unknown_shape(&bare) else {
        panic!("expected AnyShape fallback");
    };
    assert_eq!(shape.base.name.as_deref(), Some("mystery"));
}

#[test]
fn test_union_members_are_translated() {
    let s = empty_serializer();
    let union = json!({
        "@id": "amf://union",
        "@type": ["http://a.ml/vocabularies/shapes#UnionShape"],
        "http://a.ml/vocabularies/shapes#anyOf": [
            {
                "@id": "amf://union/nil",
                "@type": ["http://a.ml/vocabularies/shapes#NilShape"]
            },
            {
                "@id": "amf://union/scalar",
                "@type": ["http://a.ml/vocabularies/shapes#ScalarShape"]
            }
        ]
    });
    let Some(ApiShapeUnion::Union(shape)) = s.unknown_shape(&union) else {
        panic!("expected union dispatch");
    };
    assert_eq!(shape.any_of.len(), 2);
    assert!(matches!(shape.any_of[1], ApiShapeUnion::Scalar(_)));
}

#[test]
fn test_array_items_shape() {
    let s = empty_serializer();
    let array = json!({
        "@id": "amf://array",
        "@type": ["http://a.ml/vocabularies/shapes#ArrayShape"],
        "http://www.w3.org/ns/shacl#minCount": [{"@value": 1}],
        "http://a.ml/vocabularies/shapes#items": [{
            "@id": "amf://array/items",
            "@type": ["http://a.ml/vocabularies/shapes#ScalarShape"],
            "http://www.w3.org/ns/shacl#datatype": [
                {"@id": "http://www.w3.org/2001/XMLSchema#string"}
            ]
        }]
    });
    let Some(ApiShapeUnion::Array(shape)) = s.unknown_shape(&array) else {
        panic!("expected array dispatch");
    };
    assert_eq!(shape.min_items, Some(1));
    assert!(matches!(
        shape.items.as_deref(),
        Some(ApiShapeUnion::Scalar(_))
    ));
}

#[test]
fn test_recursive_shape_terminates_with_fix_point() {
    // Pet.friend -> RecursiveShape folding back to Pet itself
    let doc = json!({
        "@id": "amf://doc",
        "@type": ["http://a.ml/vocabularies/document#Document"],
        "http://a.ml/vocabularies/document#declares": [{
            "@id": "amf://doc#/declarations/Pet",
            "@type": ["http://www.w3.org/ns/shacl#NodeShape"],
            "http://www.w3.org/ns/shacl#name": [{"@value": "Pet"}],
            "http://www.w3.org/ns/shacl#property": [{
                "@id": "amf://doc#/declarations/Pet/property/friend",
                "@type": ["http://www.w3.org/ns/shacl#PropertyShape"],
                "http://www.w3.org/ns/shacl#name": [{"@value": "friend"}],
                "http://a.ml/vocabularies/shapes#range": [{
                    "@id": "amf://doc#/declarations/Pet/property/friend/recursive",
                    "@type": ["http://a.ml/vocabularies/shapes#RecursiveShape"],
                    "http://a.ml/vocabularies/shapes#fixPoint": [
                        {"@id": "amf://doc#/declarations/Pet"}
                    ]
                }]
            }]
        }]
    });
    let s = serializer(doc);
    let pet = s
        .context()
        .find_by_id("amf://doc#/declarations/Pet")
        .unwrap()
        .clone();
    let Some(ApiShapeUnion::Node(shape)) = s.unknown_shape(&pet) else {
        panic!("expected node dispatch");
    };
    let range = shape.properties[0].range.as_deref().unwrap();
    let ApiShapeUnion::Recursive(recursive) = range else {
        panic!("expected a recursion marker");
    };
    assert!(recursive
        .base
        .types
        .iter()
        .any(|t| t == "http://a.ml/vocabularies/shapes#RecursiveShape"));
    assert_eq!(
        recursive.fix_point.as_deref(),
        Some("amf://doc#/declarations/Pet")
    );
}

/// A shape with a type-level example and a payload-tracked example.
fn shape_with_tracked_example() -> JsonValue {
    json!({
        "@id": "amf://doc#/declarations/Pet",
        "@type": [
            "http://www.w3.org/ns/shacl#NodeShape",
            "http://a.ml/vocabularies/shapes#AnyShape"
        ],
        "http://a.ml/vocabularies/apiContract#examples": [
            {
                "@id": "amf://doc#/examples/type-level",
                "@type": ["http://a.ml/vocabularies/apiContract#Example"],
                "http://a.ml/vocabularies/core#name": [{"@value": "default"}]
            },
            {
                "@id": "amf://doc#/examples/payload-level",
                "@type": ["http://a.ml/vocabularies/apiContract#Example"],
                "http://a.ml/vocabularies/core#name": [{"@value": "override"}],
                "http://a.ml/vocabularies/document-source-maps#sources": [{
                    "@id": "amf://doc#/examples/payload-level/source-map",
                    "http://a.ml/vocabularies/document-source-maps#tracked-element": [{
                        "@id": "amf://doc#/examples/payload-level/source-map/tracked",
                        "http://a.ml/vocabularies/document-source-maps#value": [
                            {"@value": "amf://doc#/payload"}
                        ]
                    }]
                }]
            }
        ]
    })
}

#[test]
fn test_standalone_shape_hides_tracked_examples() {
    let s = empty_serializer();
    let shape = shape_with_tracked_example();
    let Some(ApiShapeUnion::Node(node)) = s.unknown_shape(&shape) else {
        panic!("expected node dispatch");
    };
    let names: Vec<_> = node.base.examples.iter().filter_map(|e| e.name.as_deref()).collect();
    assert_eq!(names, vec!["default"]);
}

#[test]
fn test_matching_tracked_id_surfaces_both_examples() {
    let s = empty_serializer();
    let shape = shape_with_tracked_example();
    let opts = ShapeOptions::tracked("amf://doc#/payload");
    let Some(ApiShapeUnion::Node(node)) = s.unknown_shape_with(&shape, &opts) else {
        panic!("expected node dispatch");
    };
    let names: Vec<_> = node.base.examples.iter().filter_map(|e| e.name.as_deref()).collect();
    assert_eq!(names, vec!["default", "override"]);
}

#[test]
fn test_non_matching_tracked_id_hides_tracked_examples() {
    let s = empty_serializer();
    let shape = shape_with_tracked_example();
    let opts = ShapeOptions::tracked("amf://doc#/other-payload");
    let Some(ApiShapeUnion::Node(node)) = s.unknown_shape_with(&shape, &opts) else {
        panic!("expected node dispatch");
    };
    let names: Vec<_> = node.base.examples.iter().filter_map(|e| e.name.as_deref()).collect();
    assert_eq!(names, vec!["default"]);
}

#[test]
fn test_payload_owns_its_tracked_examples() {
    let doc = json!({
        "@id": "amf://doc",
        "@type": ["http://a.ml/vocabularies/document#Document"],
        "http://a.ml/vocabularies/document#declares": [shape_with_tracked_example()]
    });
    let s = serializer(doc);
    let payload = json!({
        "@id": "amf://doc#/payload",
        "@type": ["http://a.ml/vocabularies/apiContract#Payload"],
        "http://a.ml/vocabularies/core#mediaType": [{"@value": "application/json"}],
        "http://a.ml/vocabularies/shapes#schema": [
            {"@id": "amf://doc#/declarations/Pet"}
        ]
    });
    let serialized = s.payload(&payload).unwrap();
    let Some(ApiShapeUnion::Node(schema)) = serialized.schema.as_deref() else {
        panic!("expected the schema to dereference to the declared shape");
    };
    // Serialized on behalf of the tracking payload: both examples surface
    assert_eq!(schema.base.examples.len(), 2);
}

#[test]
fn test_enum_values_from_rdf_sequence() {
    let s = empty_serializer();
    let shape = json!({
        "@id": "amf://shape",
        "@type": ["http://a.ml/vocabularies/shapes#ScalarShape"],
        "http://www.w3.org/ns/shacl#in": [{
            "@id": "amf://shape/in",
            "@type": ["http://www.w3.org/2000/01/rdf-schema#Seq"],
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#_2": [{
                "@id": "amf://shape/in/2",
                "@type": ["http://a.ml/vocabularies/data#Scalar"],
                "http://a.ml/vocabularies/data#value": [{"@value": "cat"}]
            }],
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#_1": [{
                "@id": "amf://shape/in/1",
                "@type": ["http://a.ml/vocabularies/data#Scalar"],
                "http://a.ml/vocabularies/data#value": [{"@value": "dog"}]
            }]
        }]
    });
    let Some(ApiShapeUnion::Scalar(scalar)) = s.unknown_shape(&shape) else {
        panic!("expected scalar dispatch");
    };
    // Members ordered by sequence index, not document order
    let values: Vec<_> = scalar
        .base
        .base
        .values
        .iter()
        .map(|value| match value {
            amf_model::ApiDataNodeUnion::Scalar(node) => node.value.clone().unwrap(),
            other => panic!("unexpected member: {other:?}"),
        })
        .collect();
    assert_eq!(values, vec!["dog".to_string(), "cat".to_string()]);
}

#[test]
fn test_schema_shape_keeps_raw_text() {
    let s = empty_serializer();
    let shape = json!({
        "@id": "amf://schema",
        "@type": ["http://a.ml/vocabularies/shapes#SchemaShape"],
        "http://a.ml/vocabularies/core#mediaType": [{"@value": "application/xml"}],
        "http://www.w3.org/ns/shacl#raw": [{"@value": "<xs:schema/>"}]
    });
    let Some(ApiShapeUnion::Schema(schema)) = s.unknown_shape(&shape) else {
        panic!("expected schema dispatch");
    };
    assert_eq!(schema.media_type.as_deref(), Some("application/xml"));
    assert_eq!(schema.raw.as_deref(), Some("<xs:schema/>"));
}

#[test]
fn test_xml_serialization_hints() {
    let s = empty_serializer();
    let shape = json!({
        "@id": "amf://shape",
        "@type": ["http://www.w3.org/ns/shacl#NodeShape"],
        "http://a.ml/vocabularies/shapes#xmlSerialization": [{
            "@id": "amf://shape/xml",
            "@type": ["http://a.ml/vocabularies/shapes#XMLSerializer"],
            "http://a.ml/vocabularies/shapes#xmlAttribute": [{"@value": false}],
            "http://a.ml/vocabularies/shapes#xmlWrapped": [{"@value": true}],
            "http://a.ml/vocabularies/shapes#xmlName": [{"@value": "pet"}]
        }]
    });
    let Some(ApiShapeUnion::Node(node)) = s.unknown_shape(&shape) else {
        panic!("expected node dispatch");
    };
    let xml = node.base.xml_serialization.as_ref().unwrap();
    assert_eq!(xml.attribute, Some(false));
    assert_eq!(xml.wrapped, Some(true));
    assert_eq!(xml.name.as_deref(), Some("pet"));
}
