//! Security scheme translators, including the per-protocol settings
//! dispatch.

use crate::AmfSerializer;
use amf_graph::node as graph_node;
use amf_model::{
    ApiParametrizedSecurityScheme, ApiSecurityApiKeySettings, ApiSecurityHttpSettings,
    ApiSecurityOAuth1Settings, ApiSecurityOAuth2Flow, ApiSecurityOAuth2Settings,
    ApiSecurityOpenIdConnectSettings, ApiSecurityRequirement, ApiSecurityScheme,
    ApiSecurityScope, ApiSecuritySettings, ApiSecuritySettingsUnion,
};
use amf_vocab::{api_contract, core, security};
use serde_json::Value as JsonValue;

impl AmfSerializer {
    /// A requirement attached to an API, endpoint or operation.
    pub fn security_requirement(&self, node: &JsonValue) -> Option<ApiSecurityRequirement> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiSecurityRequirement {
            id,
            types: self.types(node),
            name: self
                .string_value(node, core::NAME)
                .or_else(|| self.string_value(node, security::NAME)),
            schemes: self
                .children(node, security::SCHEMES)
                .into_iter()
                .filter_map(|scheme| self.parametrized_security_scheme(scheme))
                .collect(),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    /// A scheme application inside a requirement. The applied scheme may
    /// be an `{"@id"}` stub pointing at a declared scheme.
    pub fn parametrized_security_scheme(
        &self,
        node: &JsonValue,
    ) -> Option<ApiParametrizedSecurityScheme> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiParametrizedSecurityScheme {
            id,
            types: self.types(node),
            name: self
                .string_value(node, core::NAME)
                .or_else(|| self.string_value(node, security::NAME)),
            settings: self
                .child(node, security::SETTINGS)
                .and_then(|settings| self.security_settings(settings)),
            scheme: self
                .child(node, security::SCHEME)
                .map(|scheme| self.dereference(scheme))
                .and_then(|scheme| self.security_scheme(scheme)),
        })
    }

    pub fn security_scheme(&self, node: &JsonValue) -> Option<ApiSecurityScheme> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiSecurityScheme {
            id,
            types: self.types(node),
            name: self
                .string_value(node, core::NAME)
                .or_else(|| self.string_value(node, security::NAME)),
            scheme_type: self.string_value(node, security::TYPE),
            display_name: self.string_value(node, core::DISPLAY_NAME),
            description: self.string_value(node, core::DESCRIPTION),
            headers: self
                .children(node, security::HEADER)
                .into_iter()
                .filter_map(|header| self.parameter(header))
                .collect(),
            query_parameters: self
                .children(node, security::PARAMETER)
                .into_iter()
                .filter_map(|parameter| self.parameter(parameter))
                .collect(),
            responses: self
                .children(node, security::RESPONSE)
                .into_iter()
                .filter_map(|response| self.response(response))
                .collect(),
            settings: self
                .child(node, security::SETTINGS)
                .and_then(|settings| self.security_settings(settings)),
            query_string: self
                .child(node, api_contract::QUERY_STRING)
                .and_then(|query| self.unknown_shape(query))
                .map(Box::new),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    /// Settings dispatch by tag; a node with no protocol-specific tag
    /// falls back to the base settings record.
    pub fn security_settings(&self, node: &JsonValue) -> Option<ApiSecuritySettingsUnion> {
        if self.context().has_type(node, security::OAUTH1_SETTINGS) {
            return self
                .oauth1_settings(node)
                .map(ApiSecuritySettingsUnion::OAuth1);
        }
        if self.context().has_type(node, security::OAUTH2_SETTINGS) {
            return self
                .oauth2_settings(node)
                .map(ApiSecuritySettingsUnion::OAuth2);
        }
        if self.context().has_type(node, security::API_KEY_SETTINGS) {
            return self
                .api_key_settings(node)
                .map(ApiSecuritySettingsUnion::ApiKey);
        }
        if self.context().has_type(node, security::HTTP_SETTINGS) {
            return self
                .http_settings(node)
                .map(ApiSecuritySettingsUnion::Http);
        }
        if self.context().has_type(node, security::OPEN_ID_CONNECT_SETTINGS) {
            return self
                .open_id_connect_settings(node)
                .map(ApiSecuritySettingsUnion::OpenIdConnect);
        }
        self.settings_base(node).map(ApiSecuritySettingsUnion::Settings)
    }

    fn settings_base(&self, node: &JsonValue) -> Option<ApiSecuritySettings> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiSecuritySettings {
            id,
            types: self.types(node),
            additional_properties: self
                .child(node, security::ADDITIONAL_PROPERTIES)
                .and_then(|value| self.unknown_data_node(value)),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    fn oauth1_settings(&self, node: &JsonValue) -> Option<ApiSecurityOAuth1Settings> {
        Some(ApiSecurityOAuth1Settings {
            base: self.settings_base(node)?,
            request_token_uri: self.string_value(node, security::REQUEST_TOKEN_URI),
            authorization_uri: self.string_value(node, security::AUTHORIZATION_URI),
            token_credentials_uri: self.string_value(node, security::TOKEN_CREDENTIALS_URI),
            signatures: self.string_values(node, security::SIGNATURE),
        })
    }

    fn oauth2_settings(&self, node: &JsonValue) -> Option<ApiSecurityOAuth2Settings> {
        Some(ApiSecurityOAuth2Settings {
            base: self.settings_base(node)?,
            authorization_grants: self.string_values(node, security::AUTHORIZATION_GRANT),
            flows: self
                .children(node, security::FLOWS)
                .into_iter()
                .filter_map(|flow| self.oauth2_flow(flow))
                .collect(),
        })
    }

    pub fn oauth2_flow(&self, node: &JsonValue) -> Option<ApiSecurityOAuth2Flow> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiSecurityOAuth2Flow {
            id,
            types: self.types(node),
            flow: self.string_value(node, security::FLOW),
            authorization_uri: self.string_value(node, security::AUTHORIZATION_URI),
            access_token_uri: self.string_value(node, security::ACCESS_TOKEN_URI),
            refresh_uri: self.string_value(node, security::REFRESH_URI),
            scopes: self
                .children(node, security::SCOPE)
                .into_iter()
                .filter_map(|scope| self.security_scope(scope))
                .collect(),
        })
    }

    fn security_scope(&self, node: &JsonValue) -> Option<ApiSecurityScope> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiSecurityScope {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            description: self.string_value(node, core::DESCRIPTION),
        })
    }

    fn api_key_settings(&self, node: &JsonValue) -> Option<ApiSecurityApiKeySettings> {
        Some(ApiSecurityApiKeySettings {
            base: self.settings_base(node)?,
            name: self.string_value(node, core::NAME),
            location: self.string_value(node, security::IN),
        })
    }

    fn http_settings(&self, node: &JsonValue) -> Option<ApiSecurityHttpSettings> {
        Some(ApiSecurityHttpSettings {
            base: self.settings_base(node)?,
            scheme: self.string_value(node, security::SCHEME),
            bearer_format: self.string_value(node, security::BEARER_FORMAT),
        })
    }

    fn open_id_connect_settings(
        &self,
        node: &JsonValue,
    ) -> Option<ApiSecurityOpenIdConnectSettings> {
        Some(ApiSecurityOpenIdConnectSettings {
            base: self.settings_base(node)?,
            url: self.string_value(node, security::OPEN_ID_CONNECT_URL),
        })
    }
}
