//! Cross-module tests over whole documents, in both compact and expanded
//! form.

use amf_graph::DocumentContext;
use pretty_assertions::assert_eq;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

fn ctx(doc: JsonValue) -> DocumentContext {
    DocumentContext::new(Arc::new(doc)).unwrap()
}

/// A compact document with one declared scalar shape and one referenced
/// library declaring a shape under the same name.
fn library_doc() -> JsonValue {
    json!({
        "@context": {
            "doc": "http://a.ml/vocabularies/document#",
            "shacl": "http://www.w3.org/ns/shacl#",
            "core": "http://a.ml/vocabularies/core#"
        },
        "@id": "amf://doc",
        "@type": ["doc:Document"],
        "doc:declares": [
            {"@id": "amf://doc#/declares/Pet", "@type": ["shacl:NodeShape"], "shacl:name": "Pet"}
        ],
        "doc:references": [
            {
                "@id": "amf://lib",
                "@type": ["doc:Module"],
                "doc:declares": [
                    {"@id": "amf://doc#/declares/Pet2", "@type": ["shacl:NodeShape"]},
                    {"@id": "amf://lib#/declares/Toy", "@type": ["shacl:NodeShape"]}
                ]
            },
            {
                "@id": "amf://fragment",
                "@type": ["doc:Fragment"],
                "doc:encodes": [{"@id": "amf://fragment#/shape"}]
            }
        ]
    })
}

#[test]
fn test_sections_over_compact_document() {
    let ctx = ctx(library_doc());
    assert_eq!(ctx.declares().map(<[JsonValue]>::len), Some(1));
    assert_eq!(ctx.references().map(<[JsonValue]>::len), Some(2));
    assert!(ctx.encodes().is_none());
}

#[test]
fn test_find_amf_type_prefers_document_declares() {
    // The same shape name exists locally and in the library; the local
    // declaration must win.
    let doc = json!({
        "@context": {"doc": "http://a.ml/vocabularies/document#"},
        "@id": "amf://doc",
        "doc:declares": [{"@id": "amf://shared", "local": true}],
        "doc:references": [{
            "@id": "amf://lib",
            "@type": ["doc:Module"],
            "doc:declares": [{"@id": "amf://shared", "local": false}]
        }]
    });
    let ctx = ctx(doc);
    let found = ctx.find_amf_type("amf://shared").unwrap();
    assert_eq!(found["local"], json!(true));
}

#[test]
fn test_find_amf_type_descends_only_into_modules() {
    let ctx = ctx(library_doc());
    assert!(ctx.find_amf_type("amf://lib#/declares/Toy").is_some());
    // The fragment's encodes node is not a module declaration
    assert!(ctx.find_amf_type("amf://fragment#/shape").is_none());
}

#[test]
fn test_find_by_id_reaches_fragment_encodes() {
    let ctx = ctx(library_doc());
    assert!(ctx.find_by_id("amf://fragment#/shape").is_some());
    assert!(ctx.find_by_id("amf://doc#/declares/Pet").is_some());
    assert!(ctx.find_by_id("amf://nowhere").is_none());
}

#[test]
fn test_find_reference_object_by_id_and_by_encodes() {
    let ctx = ctx(library_doc());
    let by_id = ctx.find_reference_object("amf://fragment").unwrap();
    let by_encodes = ctx.find_reference_object("amf://fragment#/shape").unwrap();
    assert_eq!(by_id, by_encodes);
    assert!(ctx.find_reference_object("amf://doc#/declares/Pet").is_none());
}

#[test]
fn test_resolve_follows_links_and_keeps_local_overrides() {
    let doc = json!({
        "@context": {
            "doc": "http://a.ml/vocabularies/document#",
            "shacl": "http://www.w3.org/ns/shacl#"
        },
        "@id": "amf://doc",
        "doc:declares": [{
            "@id": "amf://doc#/declares/Pet",
            "@type": ["shacl:NodeShape"],
            "shacl:name": [{"@value": "Pet"}],
            "shacl:closed": [{"@value": true}]
        }]
    });
    let ctx = ctx(doc);
    let link = json!({
        "@id": "amf://doc#/link",
        "@type": ["shacl:NodeShape"],
        "doc:link-target": [{"@id": "amf://doc#/declares/Pet"}],
        "doc:link-label": [{"@value": "Animal"}],
        "shacl:name": [{"@value": "Animal"}]
    });
    let resolved = ctx.resolve(&link).into_owned();
    // Target properties are pulled in, local name wins, markers are gone
    assert_eq!(resolved["shacl:closed"], json!([{"@value": true}]));
    assert_eq!(resolved["shacl:name"], json!([{"@value": "Animal"}]));
    assert!(resolved.get("doc:link-target").is_none());
    assert!(resolved.get("doc:link-label").is_none());

    // Idempotent: resolving the resolved node changes nothing
    let again = ctx.resolve(&resolved).into_owned();
    assert_eq!(again, resolved);
}

#[test]
fn test_resolve_passes_through_non_links() {
    let ctx = ctx(json!({"@id": "amf://doc"}));
    let plain = json!({"@id": "amf://doc#/shape", "@type": ["shacl:NodeShape"]});
    let resolved = ctx.resolve(&plain);
    assert!(matches!(resolved, std::borrow::Cow::Borrowed(_)));
}

#[test]
fn test_resolve_terminates_on_link_cycles() {
    // a links to b, b links back to a
    let doc = json!({
        "@context": {"doc": "http://a.ml/vocabularies/document#"},
        "@id": "amf://doc",
        "doc:declares": [
            {
                "@id": "amf://a",
                "doc:link-target": [{"@id": "amf://b"}],
                "from-a": 1
            },
            {
                "@id": "amf://b",
                "doc:link-target": [{"@id": "amf://a"}],
                "from-b": 2
            }
        ]
    });
    let ctx = ctx(doc);
    let a = ctx.find_by_id("amf://a").unwrap().clone();
    let resolved = ctx.resolve(&a).into_owned();
    assert!(resolved.get("doc:link-target").is_none());
    assert_eq!(resolved["from-a"], json!(1));
    assert_eq!(resolved["from-b"], json!(2));
}

#[test]
fn test_resolve_of_dangling_link_strips_markers() {
    let ctx = ctx(json!({"@id": "amf://doc"}));
    let link = json!({
        "@id": "amf://doc#/link",
        "http://a.ml/vocabularies/document#link-target": [{"@id": "amf://missing"}],
        "kept": true
    });
    let resolved = ctx.resolve(&link).into_owned();
    assert_eq!(resolved["kept"], json!(true));
    assert!(resolved
        .get("http://a.ml/vocabularies/document#link-target")
        .is_none());
}

#[test]
fn test_expanded_document_sections() {
    let doc = json!([{
        "@id": "amf://doc",
        "@type": ["http://a.ml/vocabularies/document#Document"],
        "http://a.ml/vocabularies/document#encodes": [{
            "@id": "amf://doc#/web-api",
            "@type": ["http://a.ml/vocabularies/apiContract#WebAPI"]
        }]
    }]);
    let ctx = ctx(doc);
    assert!(!ctx.is_compact());
    let encoded = ctx.encodes().unwrap();
    assert!(ctx.has_type(encoded, "http://a.ml/vocabularies/apiContract#WebAPI"));
}

#[test]
fn test_has_type_accepts_compact_tags() {
    let ctx = ctx(json!({
        "@context": {"apiContract": "http://a.ml/vocabularies/apiContract#"},
        "@id": "amf://doc"
    }));
    let node = json!({"@id": "x", "@type": ["apiContract:EndPoint"]});
    assert!(ctx.has_type(&node, "http://a.ml/vocabularies/apiContract#EndPoint"));
    assert!(!ctx.has_type(&node, "http://a.ml/vocabularies/apiContract#Operation"));
}
