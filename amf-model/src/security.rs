//! Security scheme records and the per-protocol settings variants.

use crate::api::{ApiCustomDomainProperty, ApiParameter, ApiResponse};
use crate::data::ApiDataNodeUnion;
use crate::shape::ApiShapeUnion;
use serde::{Deserialize, Serialize};

/// A security requirement attached to an API, endpoint or operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityRequirement {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub schemes: Vec<ApiParametrizedSecurityScheme>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

/// A scheme application inside a requirement, with optional settings
/// overriding the scheme's own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParametrizedSecurityScheme {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub settings: Option<ApiSecuritySettingsUnion>,
    pub scheme: Option<ApiSecurityScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityScheme {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    /// The scheme kind as declared: `OAuth 2.0`, `Basic Authentication`,
    /// `Api Key`, ...
    #[serde(rename = "type")]
    pub scheme_type: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub headers: Vec<ApiParameter>,
    #[serde(default)]
    pub query_parameters: Vec<ApiParameter>,
    #[serde(default)]
    pub responses: Vec<ApiResponse>,
    pub settings: Option<ApiSecuritySettingsUnion>,
    pub query_string: Option<Box<ApiShapeUnion>>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

/// Scheme settings, dispatched by the settings node's `@type` tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiSecuritySettingsUnion {
    OAuth1(ApiSecurityOAuth1Settings),
    OAuth2(ApiSecurityOAuth2Settings),
    ApiKey(ApiSecurityApiKeySettings),
    Http(ApiSecurityHttpSettings),
    OpenIdConnect(ApiSecurityOpenIdConnectSettings),
    /// Fallback for a settings node carrying no protocol-specific tag.
    Settings(ApiSecuritySettings),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecuritySettings {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub additional_properties: Option<ApiDataNodeUnion>,
    #[serde(default)]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityOAuth1Settings {
    #[serde(flatten)]
    pub base: ApiSecuritySettings,
    pub request_token_uri: Option<String>,
    pub authorization_uri: Option<String>,
    pub token_credentials_uri: Option<String>,
    #[serde(default)]
    pub signatures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityOAuth2Settings {
    #[serde(flatten)]
    pub base: ApiSecuritySettings,
    #[serde(default)]
    pub authorization_grants: Vec<String>,
    #[serde(default)]
    pub flows: Vec<ApiSecurityOAuth2Flow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityOAuth2Flow {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub flow: Option<String>,
    pub authorization_uri: Option<String>,
    pub access_token_uri: Option<String>,
    pub refresh_uri: Option<String>,
    #[serde(default)]
    pub scopes: Vec<ApiSecurityScope>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityScope {
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityApiKeySettings {
    #[serde(flatten)]
    pub base: ApiSecuritySettings,
    pub name: Option<String>,
    /// Where the key is carried: query, header, cookie.
    #[serde(rename = "in")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityHttpSettings {
    #[serde(flatten)]
    pub base: ApiSecuritySettings,
    pub scheme: Option<String>,
    pub bearer_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityOpenIdConnectSettings {
    #[serde(flatten)]
    pub base: ApiSecuritySettings,
    pub url: Option<String>,
}
