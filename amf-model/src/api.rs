//! The HTTP surface of an API: endpoints, operations, messages and the
//! supporting document nodes.

use crate::data::ApiDataNodeUnion;
use crate::security::ApiSecurityRequirement;
use crate::shape::ApiShapeUnion;
use serde::{Deserialize, Serialize};

/// An applied annotation: the link id, the annotation's declared name and
/// its extension value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCustomDomainProperty {
    pub id: String,
    pub name: Option<String>,
    pub extension: Option<ApiDataNodeUnion>,
}

/// Summary of the whole API: the `encodes` node of a WebApi/AsyncApi
/// document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiApi {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub identifier: Option<String>,
    #[serde(default)]
    pub schemes: Vec<String>,
    #[serde(default)]
    pub accepts: Vec<String>,
    #[serde(default)]
    pub content_type: Vec<String>,
    pub version: Option<String>,
    pub terms_of_service: Option<String>,
    pub provider: Option<ApiOrganization>,
    pub license: Option<ApiLicense>,
    #[serde(default)]
    pub documentations: Vec<ApiDocumentation>,
    #[serde(default)]
    pub end_points: Vec<ApiEndPoint>,
    #[serde(default)]
    pub servers: Vec<ApiServer>,
    #[serde(default)]
    pub security: Vec<ApiSecurityRequirement>,
    #[serde(default)]
    pub tags: Vec<ApiTag>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiServer {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub variables: Vec<ApiParameter>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndPoint {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub path: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub operations: Vec<ApiOperation>,
    /// URI parameters declared on the path itself.
    #[serde(default)]
    pub parameters: Vec<ApiParameter>,
    #[serde(default)]
    pub servers: Vec<ApiServer>,
    #[serde(default)]
    pub security: Vec<ApiSecurityRequirement>,
    /// Applied traits and resource types, unsubstituted.
    #[serde(default)]
    pub extends: Vec<ApiParametrizedDeclaration>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOperation {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub method: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub operation_id: Option<String>,
    pub deprecated: Option<bool>,
    #[serde(default)]
    pub schemes: Vec<String>,
    #[serde(default)]
    pub accepts: Vec<String>,
    #[serde(default)]
    pub content_type: Vec<String>,
    pub documentation: Option<ApiDocumentation>,
    pub request: Option<ApiRequest>,
    #[serde(default)]
    pub responses: Vec<ApiResponse>,
    #[serde(default)]
    pub callbacks: Vec<ApiCallback>,
    #[serde(default)]
    pub servers: Vec<ApiServer>,
    #[serde(default)]
    pub security: Vec<ApiSecurityRequirement>,
    #[serde(default)]
    pub tags: Vec<ApiTag>,
    #[serde(default)]
    pub extends: Vec<ApiParametrizedDeclaration>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    #[serde(default)]
    pub query_parameters: Vec<ApiParameter>,
    #[serde(default)]
    pub headers: Vec<ApiParameter>,
    #[serde(default)]
    pub uri_parameters: Vec<ApiParameter>,
    #[serde(default)]
    pub cookie_parameters: Vec<ApiParameter>,
    #[serde(default)]
    pub payloads: Vec<ApiPayload>,
    pub query_string: Option<Box<ApiShapeUnion>>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status_code: Option<String>,
    #[serde(default)]
    pub headers: Vec<ApiParameter>,
    #[serde(default)]
    pub payloads: Vec<ApiPayload>,
    #[serde(default)]
    pub examples: Vec<ApiExample>,
    /// OAS response links.
    #[serde(default)]
    pub links: Vec<ApiTemplatedLink>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPayload {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub media_type: Option<String>,
    pub schema: Option<Box<ApiShapeUnion>>,
    #[serde(default)]
    pub examples: Vec<ApiExample>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParameter {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub param_name: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub allow_empty_value: Option<bool>,
    pub deprecated: Option<bool>,
    pub explode: Option<bool>,
    pub allow_reserved: Option<bool>,
    pub style: Option<String>,
    /// Where the parameter is carried: query, path, header, cookie.
    pub binding: Option<String>,
    pub schema: Option<Box<ApiShapeUnion>>,
    #[serde(default)]
    pub payloads: Vec<ApiPayload>,
    #[serde(default)]
    pub examples: Vec<ApiExample>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiExample {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub strict: Option<bool>,
    pub media_type: Option<String>,
    /// The example body as written in the source document.
    pub value: Option<String>,
    pub structured_value: Option<ApiDataNodeUnion>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

/// External documentation (a CreativeWork node).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocumentation {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrganization {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLicense {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTag {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCallback {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub expression: Option<String>,
    pub endpoint: Option<Box<ApiEndPoint>>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

/// An OAS link between a response and another operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTemplatedLink {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub operation_id: Option<String>,
    pub server: Option<Box<ApiServer>>,
    #[serde(default)]
    pub mapping: Vec<ApiIriTemplateMapping>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIriTemplateMapping {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub template_variable: Option<String>,
    pub link_expression: Option<String>,
}

/// A trait or resource type applied to an endpoint or operation.
///
/// Carries the resolved target declaration and the variable bindings used
/// at the application site; the substitution itself is not performed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParametrizedDeclaration {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub target: Option<ApiAbstractDeclaration>,
    #[serde(default)]
    pub variables: Vec<ApiVariableValue>,
}

/// The declaration a parametrization points at.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAbstractDeclaration {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Variable names the declaration abstracts over.
    #[serde(default)]
    pub variables: Vec<String>,
    pub data_node: Option<ApiDataNodeUnion>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

/// One variable binding at a trait/resource-type application site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVariableValue {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub value: Option<ApiDataNodeUnion>,
}
