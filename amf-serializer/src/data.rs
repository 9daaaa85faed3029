//! Data-node translators: scalars, objects and arrays carried by
//! examples, defaults and annotation extensions.

use crate::AmfSerializer;
use amf_graph::node as graph_node;
use amf_model::{ApiArrayNode, ApiDataNodeUnion, ApiObjectNode, ApiScalarNode};
use amf_vocab::{core, data, rdfs, shacl};
use percent_encoding::percent_decode_str;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::debug;

impl AmfSerializer {
    /// Translate any data node, dispatched by `@type` membership.
    pub fn unknown_data_node(&self, node: &JsonValue) -> Option<ApiDataNodeUnion> {
        if self.context().has_type(node, data::SCALAR) {
            return self.scalar_node(node).map(ApiDataNodeUnion::Scalar);
        }
        if self.context().has_type(node, data::OBJECT) {
            return self.object_node(node).map(ApiDataNodeUnion::Object);
        }
        if self.context().has_type(node, data::ARRAY) {
            return self.array_node(node).map(ApiDataNodeUnion::Array);
        }
        debug!(id = graph_node::node_id(node), "node carries no data-node tag");
        None
    }

    pub fn scalar_node(&self, node: &JsonValue) -> Option<ApiScalarNode> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiScalarNode {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            value: self.string_value(node, data::VALUE),
            data_type: self
                .link_value(node, shacl::DATATYPE)
                .map(str::to_string)
                .or_else(|| self.literal_data_type(node)),
        })
    }

    /// Object members are the node's data-vocabulary keys; the member
    /// name is the percent-decoded local name.
    pub fn object_node(&self, node: &JsonValue) -> Option<ApiObjectNode> {
        let id = graph_node::node_id(node)?.to_string();
        let map = node.as_object()?;
        let compact_prefix = self
            .context()
            .prefix_for(data::NS)
            .map(|prefix| format!("{prefix}:"));
        let mut properties = HashMap::new();
        for (key, entry) in map {
            let local = key.strip_prefix(data::NS).or_else(|| {
                compact_prefix
                    .as_deref()
                    .and_then(|prefix| key.strip_prefix(prefix))
            });
            let Some(local) = local else { continue };
            let Some(member) = graph_node::ensure_array(entry).first() else {
                continue;
            };
            let Some(value) = self.unknown_data_node(member) else {
                continue;
            };
            let name = percent_decode_str(local)
                .decode_utf8()
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| local.to_string());
            properties.insert(name, value);
        }
        Some(ApiObjectNode {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            properties,
        })
    }

    pub fn array_node(&self, node: &JsonValue) -> Option<ApiArrayNode> {
        let id = graph_node::node_id(node)?.to_string();
        Some(ApiArrayNode {
            id,
            types: self.types(node),
            name: self.string_value(node, core::NAME),
            members: self
                .children(node, rdfs::MEMBER)
                .into_iter()
                .filter_map(|member| self.unknown_data_node(member))
                .collect(),
        })
    }

    /// Datatype attached to the value literal itself (`{"@value": ...,
    /// "@type": xsd}`), expanded to a full IRI.
    fn literal_data_type(&self, node: &JsonValue) -> Option<String> {
        let key = self.key(data::VALUE);
        let entry = graph_node::ensure_array(node.get(&key)?).first()?;
        let tag = entry.as_object()?.get("@type")?.as_str()?;
        Some(self.context().expand_key(tag))
    }
}
