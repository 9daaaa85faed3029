//! Flat API model records.
//!
//! These are the output types of the AMF serializer: plain,
//! JSON-serializable records with named fields, one family per domain
//! concept. Every field is a primitive, a plain collection, or another
//! record of the same family; there are no object cycles (recursive
//! shapes terminate in a `fix_point` id string). Serialized keys use the
//! camelCase wire casing the rendering layer consumes.
//!
//! Optional substructure is `Option`/empty collection, never an error:
//! a record with most fields unset is still a valid record.

pub mod api;
pub mod data;
pub mod security;
pub mod shape;

pub use api::{
    ApiAbstractDeclaration, ApiApi, ApiCallback, ApiCustomDomainProperty, ApiDocumentation,
    ApiEndPoint, ApiExample, ApiIriTemplateMapping, ApiLicense, ApiOperation, ApiOrganization,
    ApiParameter, ApiParametrizedDeclaration, ApiPayload, ApiRequest, ApiResponse, ApiServer,
    ApiTag, ApiTemplatedLink, ApiVariableValue,
};
pub use data::{ApiArrayNode, ApiDataNodeUnion, ApiObjectNode, ApiScalarNode};
pub use security::{
    ApiParametrizedSecurityScheme, ApiSecurityApiKeySettings, ApiSecurityHttpSettings,
    ApiSecurityOAuth1Settings, ApiSecurityOAuth2Flow, ApiSecurityOAuth2Settings,
    ApiSecurityOpenIdConnectSettings, ApiSecurityRequirement, ApiSecurityScheme,
    ApiSecurityScope, ApiSecuritySettings, ApiSecuritySettingsUnion,
};
pub use shape::{
    ApiAnyShape, ApiArrayShape, ApiFileShape, ApiNodeShape, ApiPropertyShape, ApiRecursiveShape,
    ApiScalarShape, ApiSchemaShape, ApiShapeBase, ApiShapeUnion, ApiTupleShape, ApiUnionShape,
    ApiXmlSerializer,
};
