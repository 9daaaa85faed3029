//! Data nodes: the structured values carried by examples, defaults,
//! annotation extensions and abstract declarations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Any data node, dispatched by the node's `@type` tags during
/// serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiDataNodeUnion {
    Scalar(ApiScalarNode),
    Object(ApiObjectNode),
    Array(ApiArrayNode),
}

impl ApiDataNodeUnion {
    pub fn id(&self) -> &str {
        match self {
            Self::Scalar(node) => &node.id,
            Self::Object(node) => &node.id,
            Self::Array(node) => &node.id,
        }
    }
}

/// A scalar value with its declared datatype.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiScalarNode {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub data_type: Option<String>,
}

/// A map of named members.
///
/// Member names are the percent-decoded local names of the node's data
/// vocabulary keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiObjectNode {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, ApiDataNodeUnion>,
}

/// An ordered list of members.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiArrayNode {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<ApiDataNodeUnion>,
}
