//! Shape records: the normalized form of SHACL/AML shape nodes.
//!
//! Shapes share a large set of common facets; the shared parts are kept
//! in [`ApiShapeBase`] and [`ApiAnyShape`] and flattened into each
//! concrete record so the serialized JSON stays a single flat object.

use crate::api::{ApiCustomDomainProperty, ApiDocumentation, ApiExample};
use crate::data::ApiDataNodeUnion;
use serde::{Deserialize, Serialize};

/// Any shape, dispatched by `@type` tag membership during serialization.
///
/// Recursive shapes terminate in a [`fix_point`](ApiRecursiveShape::fix_point)
/// id rather than an object cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiShapeUnion {
    Scalar(ApiScalarShape),
    Node(ApiNodeShape),
    Union(ApiUnionShape),
    File(ApiFileShape),
    Schema(ApiSchemaShape),
    Array(ApiArrayShape),
    Tuple(ApiTupleShape),
    Recursive(ApiRecursiveShape),
    Any(ApiAnyShape),
}

impl ApiShapeUnion {
    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn types(&self) -> &[String] {
        &self.base().types
    }

    pub fn name(&self) -> Option<&str> {
        self.base().name.as_deref()
    }

    fn base(&self) -> &ApiShapeBase {
        match self {
            Self::Scalar(s) => &s.base.base,
            Self::Node(s) => &s.base.base,
            Self::Union(s) => &s.base.base,
            Self::File(s) => &s.base.base,
            Self::Schema(s) => &s.base.base,
            Self::Array(s) => &s.base.base,
            Self::Tuple(s) => &s.base.base,
            Self::Recursive(s) => &s.base,
            Self::Any(s) => &s.base,
        }
    }
}

/// Facets common to every shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiShapeBase {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub default_value_str: Option<String>,
    pub default_value: Option<ApiDataNodeUnion>,
    pub deprecated: Option<bool>,
    pub read_only: Option<bool>,
    pub write_only: Option<bool>,
    /// Enum values (`sh:in`).
    #[serde(default)]
    pub values: Vec<ApiDataNodeUnion>,
    #[serde(default)]
    pub inherits: Vec<ApiShapeUnion>,
    #[serde(default)]
    pub or: Vec<ApiShapeUnion>,
    #[serde(default)]
    pub and: Vec<ApiShapeUnion>,
    #[serde(default)]
    pub xone: Vec<ApiShapeUnion>,
    pub not: Option<Box<ApiShapeUnion>>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

/// The fallback shape, and the carrier of documentation, XML
/// serialization hints and examples for every shape that has them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAnyShape {
    #[serde(flatten)]
    pub base: ApiShapeBase,
    pub documentation: Option<ApiDocumentation>,
    pub xml_serialization: Option<ApiXmlSerializer>,
    #[serde(default)]
    pub examples: Vec<ApiExample>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiScalarShape {
    #[serde(flatten)]
    pub base: ApiAnyShape,
    pub data_type: Option<String>,
    pub pattern: Option<String>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<bool>,
    pub exclusive_maximum: Option<bool>,
    pub format: Option<String>,
    pub multiple_of: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNodeShape {
    #[serde(flatten)]
    pub base: ApiAnyShape,
    #[serde(default)]
    pub properties: Vec<ApiPropertyShape>,
    pub min_properties: Option<i64>,
    pub max_properties: Option<i64>,
    pub closed: Option<bool>,
    pub discriminator: Option<String>,
    pub discriminator_value: Option<String>,
}

/// A property of a node shape; the constrained value shape is in
/// [`range`](Self::range).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPropertyShape {
    #[serde(flatten)]
    pub base: ApiShapeBase,
    pub path: Option<String>,
    pub range: Option<Box<ApiShapeUnion>>,
    pub min_count: Option<i64>,
    pub max_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUnionShape {
    #[serde(flatten)]
    pub base: ApiAnyShape,
    #[serde(default)]
    pub any_of: Vec<ApiShapeUnion>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFileShape {
    #[serde(flatten)]
    pub base: ApiAnyShape,
    #[serde(default)]
    pub file_types: Vec<String>,
    pub pattern: Option<String>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub format: Option<String>,
    pub multiple_of: Option<f64>,
}

/// An opaque schema body (XSD, JSON Schema text) kept as raw text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSchemaShape {
    #[serde(flatten)]
    pub base: ApiAnyShape,
    pub media_type: Option<String>,
    pub raw: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiArrayShape {
    #[serde(flatten)]
    pub base: ApiAnyShape,
    pub items: Option<Box<ApiShapeUnion>>,
    pub min_items: Option<i64>,
    pub max_items: Option<i64>,
    pub unique_items: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTupleShape {
    #[serde(flatten)]
    pub base: ApiAnyShape,
    #[serde(default)]
    pub items: Vec<ApiShapeUnion>,
    pub additional_items: Option<bool>,
}

/// The marker breaking a self-referential shape; `fix_point` is the id of
/// the ancestor shape the recursion folds back to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecursiveShape {
    #[serde(flatten)]
    pub base: ApiShapeBase,
    pub fix_point: Option<String>,
}

/// XML serialization hints attached to a shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiXmlSerializer {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub attribute: Option<bool>,
    pub wrapped: Option<bool>,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub prefix: Option<String>,
}
