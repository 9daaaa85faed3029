//! AMF vocabulary constants and namespace prefixes
//!
//! This crate provides a centralized location for the vocabulary IRIs used
//! by AMF ("API Modeling Framework") JSON-LD graph models, along with the
//! canonical prefix names used when a model is emitted in compact form.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `document` - AML document model (http://a.ml/vocabularies/document#)
//! - `core` - AML core vocabulary (http://a.ml/vocabularies/core#)
//! - `api_contract` - API contract vocabulary (http://a.ml/vocabularies/apiContract#)
//! - `shapes` - AML shapes vocabulary (http://a.ml/vocabularies/shapes#)
//! - `data` - AML data-node vocabulary (http://a.ml/vocabularies/data#)
//! - `security` - AML security vocabulary (http://a.ml/vocabularies/security#)
//! - `source_maps` - AML source maps (http://a.ml/vocabularies/document-source-maps#)
//! - `shacl` - SHACL vocabulary (http://www.w3.org/ns/shacl#)
//! - `rdf` / `rdfs` / `xsd` - W3C vocabularies
//! - `prefixes` - Canonical compact prefix names per vocabulary

/// AML document model vocabulary constants
pub mod document {
    /// Namespace IRI for the document vocabulary
    pub const NS: &str = "http://a.ml/vocabularies/document#";

    /// document:Document - a root parsed unit
    pub const DOCUMENT: &str = "http://a.ml/vocabularies/document#Document";

    /// document:Module - a reusable library of declarations
    pub const MODULE: &str = "http://a.ml/vocabularies/document#Module";

    /// document:Fragment - a partial document
    pub const FRAGMENT: &str = "http://a.ml/vocabularies/document#Fragment";

    /// document:Unit - any parsed unit
    pub const UNIT: &str = "http://a.ml/vocabularies/document#Unit";

    /// document:DomainElement
    pub const DOMAIN_ELEMENT: &str = "http://a.ml/vocabularies/document#DomainElement";

    /// document:AbstractDeclaration - a trait or resource type declaration
    pub const ABSTRACT_DECLARATION: &str =
        "http://a.ml/vocabularies/document#AbstractDeclaration";

    /// document:ParametrizedDeclaration - an applied trait/resource type
    pub const PARAMETRIZED_DECLARATION: &str =
        "http://a.ml/vocabularies/document#ParametrizedDeclaration";

    /// document:ParametrizedTrait
    pub const PARAMETRIZED_TRAIT: &str = "http://a.ml/vocabularies/document#ParametrizedTrait";

    /// document:ParametrizedResourceType
    pub const PARAMETRIZED_RESOURCE_TYPE: &str =
        "http://a.ml/vocabularies/document#ParametrizedResourceType";

    /// document:encodes - the primary decoded unit of a document
    pub const ENCODES: &str = "http://a.ml/vocabularies/document#encodes";

    /// document:declares - named reusable declarations local to a document
    pub const DECLARES: &str = "http://a.ml/vocabularies/document#declares";

    /// document:references - imported sub-documents
    pub const REFERENCES: &str = "http://a.ml/vocabularies/document#references";

    /// document:link-target - id of the node a link points at
    pub const LINK_TARGET: &str = "http://a.ml/vocabularies/document#link-target";

    /// document:link-label - local label the link was declared under
    pub const LINK_LABEL: &str = "http://a.ml/vocabularies/document#link-label";

    /// document:reference-id
    pub const REFERENCE_ID: &str = "http://a.ml/vocabularies/document#reference-id";

    /// document:customDomainProperties - annotation links on a node
    pub const CUSTOM_DOMAIN_PROPERTIES: &str =
        "http://a.ml/vocabularies/document#customDomainProperties";

    /// document:extends - applied traits / resource types
    pub const EXTENDS: &str = "http://a.ml/vocabularies/document#extends";

    /// document:target - the abstract declaration a parametrization points at
    pub const TARGET: &str = "http://a.ml/vocabularies/document#target";

    /// document:variable - declared or applied parametrization variables
    pub const VARIABLE: &str = "http://a.ml/vocabularies/document#variable";

    /// document:value - the value bound to a parametrization variable
    pub const VALUE: &str = "http://a.ml/vocabularies/document#value";

    /// document:dataNode - unresolved structure of an abstract declaration
    pub const DATA_NODE: &str = "http://a.ml/vocabularies/document#dataNode";

    /// document:name - declaration name inside abstract declarations
    pub const NAME: &str = "http://a.ml/vocabularies/document#name";

    /// document:raw - source text of an example or schema body
    pub const RAW: &str = "http://a.ml/vocabularies/document#raw";
}

/// AML core vocabulary constants
pub mod core {
    /// Namespace IRI for the core vocabulary
    pub const NS: &str = "http://a.ml/vocabularies/core#";

    /// core:CreativeWork - external documentation node
    pub const CREATIVE_WORK: &str = "http://a.ml/vocabularies/core#CreativeWork";

    /// core:Organization
    pub const ORGANIZATION: &str = "http://a.ml/vocabularies/core#Organization";

    /// core:License
    pub const LICENSE_TYPE: &str = "http://a.ml/vocabularies/core#License";

    /// core:name
    pub const NAME: &str = "http://a.ml/vocabularies/core#name";

    /// core:displayName
    pub const DISPLAY_NAME: &str = "http://a.ml/vocabularies/core#displayName";

    /// core:description
    pub const DESCRIPTION: &str = "http://a.ml/vocabularies/core#description";

    /// core:summary
    pub const SUMMARY: &str = "http://a.ml/vocabularies/core#summary";

    /// core:documentation
    pub const DOCUMENTATION: &str = "http://a.ml/vocabularies/core#documentation";

    /// core:version
    pub const VERSION: &str = "http://a.ml/vocabularies/core#version";

    /// core:title
    pub const TITLE: &str = "http://a.ml/vocabularies/core#title";

    /// core:identifier
    pub const IDENTIFIER: &str = "http://a.ml/vocabularies/core#identifier";

    /// core:termsOfService
    pub const TERMS_OF_SERVICE: &str = "http://a.ml/vocabularies/core#termsOfService";

    /// core:provider
    pub const PROVIDER: &str = "http://a.ml/vocabularies/core#provider";

    /// core:license
    pub const LICENSE: &str = "http://a.ml/vocabularies/core#license";

    /// core:url
    pub const URL: &str = "http://a.ml/vocabularies/core#url";

    /// core:email
    pub const EMAIL: &str = "http://a.ml/vocabularies/core#email";

    /// core:mediaType
    pub const MEDIA_TYPE: &str = "http://a.ml/vocabularies/core#mediaType";

    /// core:urlTemplate - server URL template
    pub const URL_TEMPLATE: &str = "http://a.ml/vocabularies/core#urlTemplate";

    /// core:extensionName - name of a custom domain property
    pub const EXTENSION_NAME: &str = "http://a.ml/vocabularies/core#extensionName";

    /// core:deprecated
    pub const DEPRECATED: &str = "http://a.ml/vocabularies/core#deprecated";
}

/// AML API contract vocabulary constants
pub mod api_contract {
    /// Namespace IRI for the apiContract vocabulary
    pub const NS: &str = "http://a.ml/vocabularies/apiContract#";

    /// apiContract:API
    pub const API: &str = "http://a.ml/vocabularies/apiContract#API";

    /// apiContract:WebAPI
    pub const WEB_API: &str = "http://a.ml/vocabularies/apiContract#WebAPI";

    /// apiContract:AsyncAPI
    pub const ASYNC_API: &str = "http://a.ml/vocabularies/apiContract#AsyncAPI";

    /// apiContract:EndPoint
    pub const END_POINT: &str = "http://a.ml/vocabularies/apiContract#EndPoint";

    /// apiContract:Operation
    pub const OPERATION: &str = "http://a.ml/vocabularies/apiContract#Operation";

    /// apiContract:Request
    pub const REQUEST: &str = "http://a.ml/vocabularies/apiContract#Request";

    /// apiContract:Response
    pub const RESPONSE: &str = "http://a.ml/vocabularies/apiContract#Response";

    /// apiContract:Payload
    pub const PAYLOAD: &str = "http://a.ml/vocabularies/apiContract#Payload";

    /// apiContract:Parameter
    pub const PARAMETER: &str = "http://a.ml/vocabularies/apiContract#Parameter";

    /// apiContract:Server
    pub const SERVER: &str = "http://a.ml/vocabularies/apiContract#Server";

    /// apiContract:Example
    pub const EXAMPLE: &str = "http://a.ml/vocabularies/apiContract#Example";

    /// apiContract:Callback
    pub const CALLBACK: &str = "http://a.ml/vocabularies/apiContract#Callback";

    /// apiContract:TemplatedLink
    pub const TEMPLATED_LINK: &str = "http://a.ml/vocabularies/apiContract#TemplatedLink";

    /// apiContract:IriTemplateMapping
    pub const IRI_TEMPLATE_MAPPING: &str =
        "http://a.ml/vocabularies/apiContract#IriTemplateMapping";

    /// apiContract:Tag
    pub const TAG: &str = "http://a.ml/vocabularies/apiContract#Tag";

    /// apiContract:endpoint
    pub const ENDPOINT: &str = "http://a.ml/vocabularies/apiContract#endpoint";

    /// apiContract:path
    pub const PATH: &str = "http://a.ml/vocabularies/apiContract#path";

    /// apiContract:supportedOperation
    pub const SUPPORTED_OPERATION: &str =
        "http://a.ml/vocabularies/apiContract#supportedOperation";

    /// apiContract:method
    pub const METHOD: &str = "http://a.ml/vocabularies/apiContract#method";

    /// apiContract:expects - the request of an operation
    pub const EXPECTS: &str = "http://a.ml/vocabularies/apiContract#expects";

    /// apiContract:returns - the responses of an operation
    pub const RETURNS: &str = "http://a.ml/vocabularies/apiContract#returns";

    /// apiContract:statusCode
    pub const STATUS_CODE: &str = "http://a.ml/vocabularies/apiContract#statusCode";

    /// apiContract:payload
    pub const PAYLOAD_KEY: &str = "http://a.ml/vocabularies/apiContract#payload";

    /// apiContract:parameter - query parameters
    pub const PARAMETER_KEY: &str = "http://a.ml/vocabularies/apiContract#parameter";

    /// apiContract:uriParameter
    pub const URI_PARAMETER: &str = "http://a.ml/vocabularies/apiContract#uriParameter";

    /// apiContract:cookieParameter
    pub const COOKIE_PARAMETER: &str = "http://a.ml/vocabularies/apiContract#cookieParameter";

    /// apiContract:header
    pub const HEADER: &str = "http://a.ml/vocabularies/apiContract#header";

    /// apiContract:queryString
    pub const QUERY_STRING: &str = "http://a.ml/vocabularies/apiContract#queryString";

    /// apiContract:binding - where a parameter is carried
    pub const BINDING: &str = "http://a.ml/vocabularies/apiContract#binding";

    /// apiContract:paramName
    pub const PARAM_NAME: &str = "http://a.ml/vocabularies/apiContract#paramName";

    /// apiContract:required
    pub const REQUIRED: &str = "http://a.ml/vocabularies/apiContract#required";

    /// apiContract:allowEmptyValue
    pub const ALLOW_EMPTY_VALUE: &str = "http://a.ml/vocabularies/apiContract#allowEmptyValue";

    /// apiContract:explode
    pub const EXPLODE: &str = "http://a.ml/vocabularies/apiContract#explode";

    /// apiContract:allowReserved
    pub const ALLOW_RESERVED: &str = "http://a.ml/vocabularies/apiContract#allowReserved";

    /// apiContract:style
    pub const STYLE: &str = "http://a.ml/vocabularies/apiContract#style";

    /// apiContract:server
    pub const SERVER_KEY: &str = "http://a.ml/vocabularies/apiContract#server";

    /// apiContract:scheme - protocol schemes
    pub const SCHEME: &str = "http://a.ml/vocabularies/apiContract#scheme";

    /// apiContract:accepts
    pub const ACCEPTS: &str = "http://a.ml/vocabularies/apiContract#accepts";

    /// apiContract:contentType
    pub const CONTENT_TYPE: &str = "http://a.ml/vocabularies/apiContract#contentType";

    /// apiContract:guiSummary
    pub const GUI_SUMMARY: &str = "http://a.ml/vocabularies/apiContract#guiSummary";

    /// apiContract:examples
    pub const EXAMPLES: &str = "http://a.ml/vocabularies/apiContract#examples";

    /// apiContract:structuredValue - example value as a data node
    pub const STRUCTURED_VALUE: &str = "http://a.ml/vocabularies/apiContract#structuredValue";

    /// apiContract:strict
    pub const STRICT: &str = "http://a.ml/vocabularies/apiContract#strict";

    /// apiContract:protocol
    pub const PROTOCOL: &str = "http://a.ml/vocabularies/apiContract#protocol";

    /// apiContract:protocolVersion
    pub const PROTOCOL_VERSION: &str = "http://a.ml/vocabularies/apiContract#protocolVersion";

    /// apiContract:variable - server URL template variables
    pub const VARIABLE: &str = "http://a.ml/vocabularies/apiContract#variable";

    /// apiContract:callback
    pub const CALLBACK_KEY: &str = "http://a.ml/vocabularies/apiContract#callback";

    /// apiContract:expression - callback expression
    pub const EXPRESSION: &str = "http://a.ml/vocabularies/apiContract#expression";

    /// apiContract:link - OAS response links
    pub const LINK: &str = "http://a.ml/vocabularies/apiContract#link";

    /// apiContract:mapping - templated link variable mappings
    pub const MAPPING: &str = "http://a.ml/vocabularies/apiContract#mapping";

    /// apiContract:template
    pub const TEMPLATE: &str = "http://a.ml/vocabularies/apiContract#template";

    /// apiContract:operationId
    pub const OPERATION_ID: &str = "http://a.ml/vocabularies/apiContract#operationId";

    /// apiContract:templateVariable
    pub const TEMPLATE_VARIABLE: &str = "http://a.ml/vocabularies/apiContract#templateVariable";

    /// apiContract:linkExpression
    pub const LINK_EXPRESSION: &str = "http://a.ml/vocabularies/apiContract#linkExpression";

    /// apiContract:tag
    pub const TAG_KEY: &str = "http://a.ml/vocabularies/apiContract#tag";
}

/// AML shapes vocabulary constants
pub mod shapes {
    /// Namespace IRI for the shapes vocabulary
    pub const NS: &str = "http://a.ml/vocabularies/shapes#";

    /// shapes:Shape
    pub const SHAPE: &str = "http://a.ml/vocabularies/shapes#Shape";

    /// shapes:AnyShape
    pub const ANY_SHAPE: &str = "http://a.ml/vocabularies/shapes#AnyShape";

    /// shapes:ScalarShape
    pub const SCALAR_SHAPE: &str = "http://a.ml/vocabularies/shapes#ScalarShape";

    /// shapes:ArrayShape
    pub const ARRAY_SHAPE: &str = "http://a.ml/vocabularies/shapes#ArrayShape";

    /// shapes:MatrixShape - a multi-dimensional array
    pub const MATRIX_SHAPE: &str = "http://a.ml/vocabularies/shapes#MatrixShape";

    /// shapes:TupleShape
    pub const TUPLE_SHAPE: &str = "http://a.ml/vocabularies/shapes#TupleShape";

    /// shapes:UnionShape
    pub const UNION_SHAPE: &str = "http://a.ml/vocabularies/shapes#UnionShape";

    /// shapes:FileShape
    pub const FILE_SHAPE: &str = "http://a.ml/vocabularies/shapes#FileShape";

    /// shapes:NilShape
    pub const NIL_SHAPE: &str = "http://a.ml/vocabularies/shapes#NilShape";

    /// shapes:SchemaShape - an opaque schema body (XSD, JSON schema text)
    pub const SCHEMA_SHAPE: &str = "http://a.ml/vocabularies/shapes#SchemaShape";

    /// shapes:RecursiveShape - marker breaking self-referential shapes
    pub const RECURSIVE_SHAPE: &str = "http://a.ml/vocabularies/shapes#RecursiveShape";

    /// shapes:range - the shape constraining a property's values
    pub const RANGE: &str = "http://a.ml/vocabularies/shapes#range";

    /// shapes:items
    pub const ITEMS: &str = "http://a.ml/vocabularies/shapes#items";

    /// shapes:anyOf - union members
    pub const ANY_OF: &str = "http://a.ml/vocabularies/shapes#anyOf";

    /// shapes:fixPoint - the ancestor id a recursive shape folds back to
    pub const FIX_POINT: &str = "http://a.ml/vocabularies/shapes#fixPoint";

    /// shapes:schema - the shape of a payload or parameter
    pub const SCHEMA: &str = "http://a.ml/vocabularies/shapes#schema";

    /// shapes:fileType
    pub const FILE_TYPE: &str = "http://a.ml/vocabularies/shapes#fileType";

    /// shapes:format
    pub const FORMAT: &str = "http://a.ml/vocabularies/shapes#format";

    /// shapes:multipleOf
    pub const MULTIPLE_OF: &str = "http://a.ml/vocabularies/shapes#multipleOf";

    /// shapes:uniqueItems
    pub const UNIQUE_ITEMS: &str = "http://a.ml/vocabularies/shapes#uniqueItems";

    /// shapes:additionalItems
    pub const ADDITIONAL_ITEMS: &str = "http://a.ml/vocabularies/shapes#additionalItems";

    /// shapes:discriminator
    pub const DISCRIMINATOR: &str = "http://a.ml/vocabularies/shapes#discriminator";

    /// shapes:discriminatorValue
    pub const DISCRIMINATOR_VALUE: &str =
        "http://a.ml/vocabularies/shapes#discriminatorValue";

    /// shapes:readOnly
    pub const READ_ONLY: &str = "http://a.ml/vocabularies/shapes#readOnly";

    /// shapes:writeOnly
    pub const WRITE_ONLY: &str = "http://a.ml/vocabularies/shapes#writeOnly";

    /// shapes:deprecated
    pub const DEPRECATED: &str = "http://a.ml/vocabularies/shapes#deprecated";

    /// shapes:minProperties
    pub const MIN_PROPERTIES: &str = "http://a.ml/vocabularies/shapes#minProperties";

    /// shapes:maxProperties
    pub const MAX_PROPERTIES: &str = "http://a.ml/vocabularies/shapes#maxProperties";

    /// shapes:inherits
    pub const INHERITS: &str = "http://a.ml/vocabularies/shapes#inherits";

    /// shapes:xmlSerialization
    pub const XML_SERIALIZATION: &str = "http://a.ml/vocabularies/shapes#xmlSerialization";

    /// shapes:XMLSerializer
    pub const XML_SERIALIZER: &str = "http://a.ml/vocabularies/shapes#XMLSerializer";

    /// shapes:xmlName
    pub const XML_NAME: &str = "http://a.ml/vocabularies/shapes#xmlName";

    /// shapes:xmlNamespace
    pub const XML_NAMESPACE: &str = "http://a.ml/vocabularies/shapes#xmlNamespace";

    /// shapes:xmlPrefix
    pub const XML_PREFIX: &str = "http://a.ml/vocabularies/shapes#xmlPrefix";

    /// shapes:xmlAttribute
    pub const XML_ATTRIBUTE: &str = "http://a.ml/vocabularies/shapes#xmlAttribute";

    /// shapes:xmlWrapped
    pub const XML_WRAPPED: &str = "http://a.ml/vocabularies/shapes#xmlWrapped";
}

/// AML data-node vocabulary constants
pub mod data {
    /// Namespace IRI for the data vocabulary
    pub const NS: &str = "http://a.ml/vocabularies/data#";

    /// data:Scalar
    pub const SCALAR: &str = "http://a.ml/vocabularies/data#Scalar";

    /// data:Object
    pub const OBJECT: &str = "http://a.ml/vocabularies/data#Object";

    /// data:Array
    pub const ARRAY: &str = "http://a.ml/vocabularies/data#Array";

    /// data:value
    pub const VALUE: &str = "http://a.ml/vocabularies/data#value";
}

/// AML security vocabulary constants
pub mod security {
    /// Namespace IRI for the security vocabulary
    pub const NS: &str = "http://a.ml/vocabularies/security#";

    /// security:SecurityScheme
    pub const SECURITY_SCHEME: &str = "http://a.ml/vocabularies/security#SecurityScheme";

    /// security:SecurityRequirement
    pub const SECURITY_REQUIREMENT: &str =
        "http://a.ml/vocabularies/security#SecurityRequirement";

    /// security:ParametrizedSecurityScheme
    pub const PARAMETRIZED_SECURITY_SCHEME: &str =
        "http://a.ml/vocabularies/security#ParametrizedSecurityScheme";

    /// security:Settings
    pub const SETTINGS_TYPE: &str = "http://a.ml/vocabularies/security#Settings";

    /// security:OAuth1Settings
    pub const OAUTH1_SETTINGS: &str = "http://a.ml/vocabularies/security#OAuth1Settings";

    /// security:OAuth2Settings
    pub const OAUTH2_SETTINGS: &str = "http://a.ml/vocabularies/security#OAuth2Settings";

    /// security:OAuth2Flow
    pub const OAUTH2_FLOW: &str = "http://a.ml/vocabularies/security#OAuth2Flow";

    /// security:ApiKeySettings
    pub const API_KEY_SETTINGS: &str = "http://a.ml/vocabularies/security#ApiKeySettings";

    /// security:HttpSettings
    pub const HTTP_SETTINGS: &str = "http://a.ml/vocabularies/security#HttpSettings";

    /// security:OpenIdConnectSettings
    pub const OPEN_ID_CONNECT_SETTINGS: &str =
        "http://a.ml/vocabularies/security#OpenIdConnectSettings";

    /// security:Scope
    pub const SCOPE_TYPE: &str = "http://a.ml/vocabularies/security#Scope";

    /// security:security - requirements attached to an api/endpoint/operation
    pub const SECURITY: &str = "http://a.ml/vocabularies/security#security";

    /// security:schemes - parametrized schemes of a requirement
    pub const SCHEMES: &str = "http://a.ml/vocabularies/security#schemes";

    /// security:scheme - the scheme a parametrization points at, or the
    /// HTTP auth scheme name inside HttpSettings
    pub const SCHEME: &str = "http://a.ml/vocabularies/security#scheme";

    /// security:settings
    pub const SETTINGS: &str = "http://a.ml/vocabularies/security#settings";

    /// security:name
    pub const NAME: &str = "http://a.ml/vocabularies/security#name";

    /// security:type
    pub const TYPE: &str = "http://a.ml/vocabularies/security#type";

    /// security:in - where an API key is carried
    pub const IN: &str = "http://a.ml/vocabularies/security#in";

    /// security:flows
    pub const FLOWS: &str = "http://a.ml/vocabularies/security#flows";

    /// security:flow
    pub const FLOW: &str = "http://a.ml/vocabularies/security#flow";

    /// security:authorizationUri
    pub const AUTHORIZATION_URI: &str = "http://a.ml/vocabularies/security#authorizationUri";

    /// security:accessTokenUri
    pub const ACCESS_TOKEN_URI: &str = "http://a.ml/vocabularies/security#accessTokenUri";

    /// security:refreshUri
    pub const REFRESH_URI: &str = "http://a.ml/vocabularies/security#refreshUri";

    /// security:authorizationGrant
    pub const AUTHORIZATION_GRANT: &str =
        "http://a.ml/vocabularies/security#authorizationGrant";

    /// security:scope
    pub const SCOPE: &str = "http://a.ml/vocabularies/security#scope";

    /// security:requestTokenUri
    pub const REQUEST_TOKEN_URI: &str = "http://a.ml/vocabularies/security#requestTokenUri";

    /// security:tokenCredentialsUri
    pub const TOKEN_CREDENTIALS_URI: &str =
        "http://a.ml/vocabularies/security#tokenCredentialsUri";

    /// security:signature
    pub const SIGNATURE: &str = "http://a.ml/vocabularies/security#signature";

    /// security:bearerFormat
    pub const BEARER_FORMAT: &str = "http://a.ml/vocabularies/security#bearerFormat";

    /// security:openIdConnectUrl
    pub const OPEN_ID_CONNECT_URL: &str =
        "http://a.ml/vocabularies/security#openIdConnectUrl";

    /// security:additionalProperties
    pub const ADDITIONAL_PROPERTIES: &str =
        "http://a.ml/vocabularies/security#additionalProperties";

    /// security:header - header parameters of a scheme
    pub const HEADER: &str = "http://a.ml/vocabularies/security#header";

    /// security:parameter - query parameters of a scheme
    pub const PARAMETER: &str = "http://a.ml/vocabularies/security#parameter";

    /// security:response - responses documented on a scheme
    pub const RESPONSE: &str = "http://a.ml/vocabularies/security#response";
}

/// AML source-map vocabulary constants
pub mod source_maps {
    /// Namespace IRI for the document-source-maps vocabulary
    pub const NS: &str = "http://a.ml/vocabularies/document-source-maps#";

    /// sourcemaps:SourceMap
    pub const SOURCE_MAP: &str = "http://a.ml/vocabularies/document-source-maps#SourceMap";

    /// sourcemaps:sources - source-map container on a node
    pub const SOURCES: &str = "http://a.ml/vocabularies/document-source-maps#sources";

    /// sourcemaps:element - the node a source-map entry annotates
    pub const ELEMENT: &str = "http://a.ml/vocabularies/document-source-maps#element";

    /// sourcemaps:value - the value carried by a source-map entry
    pub const VALUE: &str = "http://a.ml/vocabularies/document-source-maps#value";

    /// sourcemaps:tracked-element - payload-ownership marker for examples
    pub const TRACKED_ELEMENT: &str =
        "http://a.ml/vocabularies/document-source-maps#tracked-element";

    /// sourcemaps:declared-element
    pub const DECLARED_ELEMENT: &str =
        "http://a.ml/vocabularies/document-source-maps#declared-element";

    /// sourcemaps:auto-generated-name
    pub const AUTO_GENERATED_NAME: &str =
        "http://a.ml/vocabularies/document-source-maps#auto-generated-name";

    /// sourcemaps:lexical
    pub const LEXICAL: &str = "http://a.ml/vocabularies/document-source-maps#lexical";
}

/// SHACL vocabulary constants
pub mod shacl {
    /// Namespace IRI for SHACL
    pub const NS: &str = "http://www.w3.org/ns/shacl#";

    /// sh:Shape
    pub const SHAPE: &str = "http://www.w3.org/ns/shacl#Shape";

    /// sh:NodeShape
    pub const NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";

    /// sh:PropertyShape
    pub const PROPERTY_SHAPE: &str = "http://www.w3.org/ns/shacl#PropertyShape";

    /// sh:property
    pub const PROPERTY: &str = "http://www.w3.org/ns/shacl#property";

    /// sh:path
    pub const PATH: &str = "http://www.w3.org/ns/shacl#path";

    /// sh:name
    pub const NAME: &str = "http://www.w3.org/ns/shacl#name";

    /// sh:datatype
    pub const DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";

    /// sh:minCount
    pub const MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";

    /// sh:maxCount
    pub const MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";

    /// sh:minInclusive
    pub const MIN_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#minInclusive";

    /// sh:maxInclusive
    pub const MAX_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxInclusive";

    /// sh:minExclusive
    pub const MIN_EXCLUSIVE: &str = "http://www.w3.org/ns/shacl#minExclusive";

    /// sh:maxExclusive
    pub const MAX_EXCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxExclusive";

    /// sh:minLength
    pub const MIN_LENGTH: &str = "http://www.w3.org/ns/shacl#minLength";

    /// sh:maxLength
    pub const MAX_LENGTH: &str = "http://www.w3.org/ns/shacl#maxLength";

    /// sh:pattern
    pub const PATTERN: &str = "http://www.w3.org/ns/shacl#pattern";

    /// sh:in - enum values
    pub const IN: &str = "http://www.w3.org/ns/shacl#in";

    /// sh:defaultValue
    pub const DEFAULT_VALUE: &str = "http://www.w3.org/ns/shacl#defaultValue";

    /// sh:defaultValueStr
    pub const DEFAULT_VALUE_STR: &str = "http://www.w3.org/ns/shacl#defaultValueStr";

    /// sh:closed
    pub const CLOSED: &str = "http://www.w3.org/ns/shacl#closed";

    /// sh:raw - raw schema/example text
    pub const RAW: &str = "http://www.w3.org/ns/shacl#raw";

    /// sh:and
    pub const AND: &str = "http://www.w3.org/ns/shacl#and";

    /// sh:or
    pub const OR: &str = "http://www.w3.org/ns/shacl#or";

    /// sh:xone
    pub const XONE: &str = "http://www.w3.org/ns/shacl#xone";

    /// sh:not
    pub const NOT: &str = "http://www.w3.org/ns/shacl#not";
}

/// RDF vocabulary constants
pub mod rdf {
    /// Namespace IRI for rdf
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:Seq IRI
    pub const SEQ: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Seq";

    /// rdf:first IRI (RDF list head)
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

    /// rdf:rest IRI (RDF list tail)
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

    /// rdf:nil IRI (RDF list terminator)
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// Namespace IRI for rdfs
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:member - array data-node members
    pub const MEMBER: &str = "http://www.w3.org/2000/01/rdf-schema#member";

    /// rdfs:Seq
    pub const SEQ: &str = "http://www.w3.org/2000/01/rdf-schema#Seq";
}

/// XSD vocabulary constants
pub mod xsd {
    /// Namespace IRI for xsd
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:long IRI
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:time IRI
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";

    /// xsd:nil IRI
    pub const NIL: &str = "http://www.w3.org/2001/XMLSchema#nil";
}

/// Canonical compact prefix names, as emitted by AMF when a model is
/// serialized in compact ("flattened + compacted") form.
pub mod prefixes {
    /// Prefix for the document vocabulary
    pub const DOC: &str = "doc";

    /// Prefix for the core vocabulary
    pub const CORE: &str = "core";

    /// Prefix for the apiContract vocabulary
    pub const API_CONTRACT: &str = "apiContract";

    /// Prefix for the shapes vocabulary
    pub const SHAPES: &str = "shapes";

    /// Prefix for the data vocabulary
    pub const DATA: &str = "data";

    /// Prefix for the security vocabulary
    pub const SECURITY: &str = "security";

    /// Prefix for the document-source-maps vocabulary
    pub const SOURCE_MAPS: &str = "sourcemaps";

    /// Prefix for SHACL
    pub const SHACL: &str = "shacl";

    /// Prefix for rdf
    pub const RDF: &str = "rdf";

    /// Prefix for rdfs
    pub const RDFS: &str = "rdfs";

    /// Prefix for xsd
    pub const XSD: &str = "xsd";

    /// All canonical (prefix, namespace IRI) pairs.
    ///
    /// Real models carry their own `@context`; this table exists for
    /// building fixtures and for tooling that emits compact documents.
    pub const ALL: &[(&str, &str)] = &[
        (DOC, super::document::NS),
        (CORE, super::core::NS),
        (API_CONTRACT, super::api_contract::NS),
        (SHAPES, super::shapes::NS),
        (DATA, super::data::NS),
        (SECURITY, super::security::NS),
        (SOURCE_MAPS, super::source_maps::NS),
        (SHACL, super::shacl::NS),
        (RDF, super::rdf::NS),
        (RDFS, super::rdfs::NS),
        (XSD, super::xsd::NS),
    ];
}
