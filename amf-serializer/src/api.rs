//! Translators for the HTTP surface: the API summary, endpoints,
//! operations, messages and the supporting document nodes.

use crate::shape::ShapeOptions;
use crate::AmfSerializer;
use amf_graph::node as graph_node;
use amf_model::{
    ApiAbstractDeclaration, ApiApi, ApiCallback, ApiDocumentation, ApiEndPoint, ApiExample,
    ApiIriTemplateMapping, ApiLicense, ApiOperation, ApiOrganization, ApiParameter,
    ApiParametrizedDeclaration, ApiPayload, ApiRequest, ApiResponse, ApiSecurityRequirement,
    ApiServer, ApiTag, ApiTemplatedLink, ApiVariableValue,
};
use amf_vocab::{api_contract, core, document, security, shacl, shapes};
use serde_json::Value as JsonValue;

impl AmfSerializer {
    /// Summary of the whole API.
    ///
    /// Accepts the Document node, a `[Document]` wrapper, or the encoded
    /// WebApi/AsyncApi node directly.
    pub fn api(&self, node: &JsonValue) -> Option<ApiApi> {
        let root = graph_node::ensure_array(node).first()?;
        let encodes_key = self.key(document::ENCODES);
        let target = match root.get(&encodes_key) {
            Some(entry) => graph_node::ensure_array(entry).first()?,
            None => root,
        };
        let id = graph_node::node_id(target)?.to_string();
        Some(ApiApi {
            id,
            types: self.types(target),
            name: self.string_value(target, core::NAME),
            description: self.string_value(target, core::DESCRIPTION),
            identifier: self.string_value(target, core::IDENTIFIER),
            schemes: self.string_values(target, api_contract::SCHEME),
            accepts: self.string_values(target, api_contract::ACCEPTS),
            content_type: self.string_values(target, api_contract::CONTENT_TYPE),
            version: self.string_value(target, core::VERSION),
            terms_of_service: self.string_value(target, core::TERMS_OF_SERVICE),
            provider: self
                .child(target, core::PROVIDER)
                .and_then(|provider| self.organization(provider)),
            license: self
                .child(target, core::LICENSE)
                .and_then(|license| self.license(license)),
            documentations: self
                .children(target, core::DOCUMENTATION)
                .into_iter()
                .filter_map(|docs| self.documentation(docs))
                .collect(),
            end_points: self
                .children(target, api_contract::ENDPOINT)
                .into_iter()
                .filter_map(|endpoint| self.end_point(endpoint))
                .collect(),
            servers: self.server_list(target),
            security: self.security_list(target),
            tags: self.tag_list(target),
            custom_domain_properties: self.custom_domain_properties(target),
        })
    }

    /// Same as [`api`](Self::api); the WebApi/AsyncApi split exists only
    /// in the `@type` tags the caller can inspect on the result.
    pub fn web_api(&self, node: &JsonValue) -> Option<ApiApi> {
        self.api(node)
    }

    pub fn async_api(&self, node: &JsonValue) -> Option<ApiApi> {
        self.api(node)
    }

    pub fn server(&self, node: &JsonValue) -> Option<ApiServer> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiServer {
            id,
            types: self.types(node),
            url: self.string_value(node, core::URL_TEMPLATE),
            description: self.string_value(node, core::DESCRIPTION),
            variables: self
                .children(node, api_contract::VARIABLE)
                .into_iter()
                .filter_map(|variable| self.parameter(variable))
                .collect(),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    pub fn end_point(&self, node: &JsonValue) -> Option<ApiEndPoint> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiEndPoint {
            id,
            types: self.types(node),
            path: self.string_value(node, api_contract::PATH),
            name: self.string_value(node, core::NAME),
            description: self.string_value(node, core::DESCRIPTION),
            summary: self
                .string_value(node, api_contract::GUI_SUMMARY)
                .or_else(|| self.string_value(node, core::SUMMARY)),
            operations: self
                .children(node, api_contract::SUPPORTED_OPERATION)
                .into_iter()
                .filter_map(|operation| self.operation(operation))
                .collect(),
            parameters: self.parameter_list(node, api_contract::PARAMETER_KEY, "path"),
            servers: self.server_list(node),
            security: self.security_list(node),
            extends: self.parametrized_declarations(node),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    pub fn operation(&self, node: &JsonValue) -> Option<ApiOperation> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiOperation {
            id,
            types: self.types(node),
            method: self.string_value(node, api_contract::METHOD),
            name: self.string_value(node, core::NAME),
            description: self.string_value(node, core::DESCRIPTION),
            summary: self
                .string_value(node, api_contract::GUI_SUMMARY)
                .or_else(|| self.string_value(node, core::SUMMARY)),
            operation_id: self.string_value(node, api_contract::OPERATION_ID),
            deprecated: self.bool_value(node, core::DEPRECATED),
            schemes: self.string_values(node, api_contract::SCHEME),
            accepts: self.string_values(node, api_contract::ACCEPTS),
            content_type: self.string_values(node, api_contract::CONTENT_TYPE),
            documentation: self
                .child(node, core::DOCUMENTATION)
                .and_then(|docs| self.documentation(docs)),
            request: self
                .child(node, api_contract::EXPECTS)
                .and_then(|request| self.request(request)),
            responses: self
                .children(node, api_contract::RETURNS)
                .into_iter()
                .filter_map(|response| self.response(response))
                .collect(),
            callbacks: self
                .children(node, api_contract::CALLBACK_KEY)
                .into_iter()
                .filter_map(|callback| self.callback(callback))
                .collect(),
            servers: self.server_list(node),
            security: self.security_list(node),
            tags: self.tag_list(node),
            extends: self.parametrized_declarations(node),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    pub fn request(&self, node: &JsonValue) -> Option<ApiRequest> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiRequest {
            id,
            types: self.types(node),
            description: self.string_value(node, core::DESCRIPTION),
            required: self.bool_value(node, api_contract::REQUIRED),
            query_parameters: self.parameter_list(node, api_contract::PARAMETER_KEY, "query"),
            headers: self.parameter_list(node, api_contract::HEADER, "header"),
            uri_parameters: self.parameter_list(node, api_contract::URI_PARAMETER, "path"),
            cookie_parameters: self.parameter_list(node, api_contract::COOKIE_PARAMETER, "cookie"),
            payloads: self
                .children(node, api_contract::PAYLOAD_KEY)
                .into_iter()
                .filter_map(|payload| self.payload(payload))
                .collect(),
            query_string: self
                .child(node, api_contract::QUERY_STRING)
                .and_then(|query| self.unknown_shape(query))
                .map(Box::new),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    pub fn response(&self, node: &JsonValue) -> Option<ApiResponse> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiResponse {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            description: self.string_value(node, core::DESCRIPTION),
            status_code: self.string_value(node, api_contract::STATUS_CODE),
            headers: self.parameter_list(node, api_contract::HEADER, "header"),
            payloads: self
                .children(node, api_contract::PAYLOAD_KEY)
                .into_iter()
                .filter_map(|payload| self.payload(payload))
                .collect(),
            examples: self
                .children(node, api_contract::EXAMPLES)
                .into_iter()
                .filter_map(|example| self.example(example))
                .collect(),
            links: self
                .children(node, api_contract::LINK)
                .into_iter()
                .filter_map(|link| self.templated_link(link))
                .collect(),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    /// A payload owns its schema's tracked examples: the schema is
    /// serialized with this payload's id as the tracked context.
    pub fn payload(&self, node: &JsonValue) -> Option<ApiPayload> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        let opts = ShapeOptions::tracked(id.clone());
        Some(ApiPayload {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            media_type: self.string_value(node, core::MEDIA_TYPE),
            schema: self
                .child(node, shapes::SCHEMA)
                .map(|schema| self.dereference(schema))
                .and_then(|schema| self.unknown_shape_with(schema, &opts))
                .map(Box::new),
            examples: self
                .children(node, api_contract::EXAMPLES)
                .into_iter()
                .filter_map(|example| self.example(example))
                .collect(),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    pub fn parameter(&self, node: &JsonValue) -> Option<ApiParameter> {
        self.parameter_with_binding(node, None)
    }

    fn parameter_with_binding(
        &self,
        node: &JsonValue,
        default_binding: Option<&str>,
    ) -> Option<ApiParameter> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        let opts = ShapeOptions::tracked(id.clone());
        Some(ApiParameter {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            param_name: self.string_value(node, api_contract::PARAM_NAME),
            description: self.string_value(node, core::DESCRIPTION),
            required: self.bool_value(node, api_contract::REQUIRED),
            allow_empty_value: self.bool_value(node, api_contract::ALLOW_EMPTY_VALUE),
            deprecated: self.bool_value(node, core::DEPRECATED),
            explode: self.bool_value(node, api_contract::EXPLODE),
            allow_reserved: self.bool_value(node, api_contract::ALLOW_RESERVED),
            style: self.string_value(node, api_contract::STYLE),
            binding: self
                .string_value(node, api_contract::BINDING)
                .or_else(|| default_binding.map(str::to_string)),
            schema: self
                .child(node, shapes::SCHEMA)
                .map(|schema| self.dereference(schema))
                .and_then(|schema| self.unknown_shape_with(schema, &opts))
                .map(Box::new),
            payloads: self
                .children(node, api_contract::PAYLOAD_KEY)
                .into_iter()
                .filter_map(|payload| self.payload(payload))
                .collect(),
            examples: self
                .children(node, api_contract::EXAMPLES)
                .into_iter()
                .filter_map(|example| self.example(example))
                .collect(),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    pub fn example(&self, node: &JsonValue) -> Option<ApiExample> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiExample {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            display_name: self.string_value(node, core::DISPLAY_NAME),
            description: self.string_value(node, core::DESCRIPTION),
            strict: self.bool_value(node, api_contract::STRICT),
            media_type: self.string_value(node, core::MEDIA_TYPE),
            value: self
                .string_value(node, document::RAW)
                .or_else(|| self.string_value(node, shacl::RAW)),
            structured_value: self
                .child(node, api_contract::STRUCTURED_VALUE)
                .and_then(|value| self.unknown_data_node(value)),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    pub fn documentation(&self, node: &JsonValue) -> Option<ApiDocumentation> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiDocumentation {
            id,
            types: self.types(node),
            url: self.string_value(node, core::URL),
            title: self.string_value(node, core::TITLE),
            description: self.string_value(node, core::DESCRIPTION),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    pub fn organization(&self, node: &JsonValue) -> Option<ApiOrganization> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiOrganization {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            url: self.string_value(node, core::URL),
            email: self.string_value(node, core::EMAIL),
        })
    }

    pub fn license(&self, node: &JsonValue) -> Option<ApiLicense> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiLicense {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            url: self.string_value(node, core::URL),
        })
    }

    pub fn tag(&self, node: &JsonValue) -> Option<ApiTag> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiTag {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            description: self.string_value(node, core::DESCRIPTION),
        })
    }

    pub fn callback(&self, node: &JsonValue) -> Option<ApiCallback> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiCallback {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            expression: self.string_value(node, api_contract::EXPRESSION),
            endpoint: self
                .child(node, api_contract::ENDPOINT)
                .and_then(|endpoint| self.end_point(endpoint))
                .map(Box::new),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    pub fn templated_link(&self, node: &JsonValue) -> Option<ApiTemplatedLink> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiTemplatedLink {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            description: self.string_value(node, core::DESCRIPTION),
            template: self.string_value(node, api_contract::TEMPLATE),
            operation_id: self.string_value(node, api_contract::OPERATION_ID),
            server: self
                .child(node, api_contract::SERVER_KEY)
                .and_then(|server| self.server(server))
                .map(Box::new),
            mapping: self
                .children(node, api_contract::MAPPING)
                .into_iter()
                .filter_map(|mapping| self.iri_template_mapping(mapping))
                .collect(),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    pub fn iri_template_mapping(&self, node: &JsonValue) -> Option<ApiIriTemplateMapping> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiIriTemplateMapping {
            id,
            types: self.types(node),
            template_variable: self.string_value(node, api_contract::TEMPLATE_VARIABLE),
            link_expression: self.string_value(node, api_contract::LINK_EXPRESSION),
        })
    }

    /// The traits and resource types applied to an endpoint or operation,
    /// with resolved targets and the variable bindings used at the
    /// application site. No substitution happens here.
    pub fn parametrized_declarations(&self, node: &JsonValue) -> Vec<ApiParametrizedDeclaration> {
        self.children(node, document::EXTENDS)
            .into_iter()
            .filter(|item| {
                self.context().has_type(item, document::PARAMETRIZED_TRAIT)
                    || self
                        .context()
                        .has_type(item, document::PARAMETRIZED_RESOURCE_TYPE)
                    || self
                        .context()
                        .has_type(item, document::PARAMETRIZED_DECLARATION)
            })
            .filter_map(|item| self.parametrized_declaration(item))
            .collect()
    }

    pub fn parametrized_declaration(
        &self,
        node: &JsonValue,
    ) -> Option<ApiParametrizedDeclaration> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiParametrizedDeclaration {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            target: self
                .child(node, document::TARGET)
                .map(|target| self.dereference(target))
                .and_then(|target| self.abstract_declaration(target)),
            variables: self
                .children(node, document::VARIABLE)
                .into_iter()
                .filter_map(|variable| self.variable_value(variable))
                .collect(),
        })
    }

    fn abstract_declaration(&self, node: &JsonValue) -> Option<ApiAbstractDeclaration> {
        let resolved = self.context().resolve(node);
        let node = resolved.as_ref();
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiAbstractDeclaration {
            id,
            types: self.types(node),
            name: self
                .string_value(node, core::NAME)
                .or_else(|| self.string_value(node, document::NAME)),
            description: self.string_value(node, core::DESCRIPTION),
            variables: self.string_values(node, document::VARIABLE),
            data_node: self
                .child(node, document::DATA_NODE)
                .and_then(|data| self.unknown_data_node(data)),
            custom_domain_properties: self.custom_domain_properties(node),
        })
    }

    fn variable_value(&self, node: &JsonValue) -> Option<ApiVariableValue> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiVariableValue {
            id,
            types: self.types(node),
            name: self
                .string_value(node, core::NAME)
                .or_else(|| self.string_value(node, document::NAME)),
            value: self
                .child(node, document::VALUE)
                .and_then(|value| self.unknown_data_node(value)),
        })
    }

    fn parameter_list(
        &self,
        node: &JsonValue,
        iri: &str,
        default_binding: &str,
    ) -> Vec<ApiParameter> {
        self.children(node, iri)
            .into_iter()
            .filter_map(|parameter| self.parameter_with_binding(parameter, Some(default_binding)))
            .collect()
    }

    fn server_list(&self, node: &JsonValue) -> Vec<ApiServer> {
        self.children(node, api_contract::SERVER_KEY)
            .into_iter()
            .filter_map(|server| self.server(server))
            .collect()
    }

    fn security_list(&self, node: &JsonValue) -> Vec<ApiSecurityRequirement> {
        self.children(node, security::SECURITY)
            .into_iter()
            .filter_map(|requirement| self.security_requirement(requirement))
            .collect()
    }

    fn tag_list(&self, node: &JsonValue) -> Vec<ApiTag> {
        self.children(node, api_contract::TAG_KEY)
            .into_iter()
            .filter_map(|tag| self.tag(tag))
            .collect()
    }
}
