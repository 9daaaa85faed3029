//! Graph plumbing for AMF JSON-LD models.
//!
//! An AMF model is a JSON-LD graph: nodes identified by `@id`, typed by
//! `@type` sets, with values either expanded (`{"@value": x}`, full-IRI
//! keys) or compacted through the document's `@context`. This crate
//! provides the three layers everything else builds on:
//!
//! - [`node`] - total read primitives over a single graph node
//! - [`DocumentContext`] - per-document key resolution with a cached
//!   prefix table, plus section traversal, id lookup, link resolution and
//!   shape merging
//! - [`GraphError`] - the document-boundary error type; per-node lookups
//!   never error, they degrade to `None`
//!
//! # Example
//!
//! ```
//! use amf_graph::DocumentContext;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let doc = Arc::new(json!({
//!     "@context": {"doc": "http://a.ml/vocabularies/document#"},
//!     "@id": "amf://doc",
//!     "doc:encodes": [{"@id": "amf://doc#/web-api"}]
//! }));
//! let ctx = DocumentContext::new(doc).unwrap();
//! assert_eq!(
//!     ctx.resolve_key("http://a.ml/vocabularies/document#encodes"),
//!     "doc:encodes"
//! );
//! assert!(ctx.encodes().is_some());
//! ```

pub mod context;
pub mod error;
pub mod node;
pub mod resolve;

pub use context::DocumentContext;
pub use error::{GraphError, Result};
pub use resolve::find_by_id;
