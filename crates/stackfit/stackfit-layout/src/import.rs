//! JSON import of design documents.
//!
//! Three shapes are accepted:
//!
//! - a bare node object,
//! - a file export `{"document": node, ...}`,
//! - a node-query response `{"nodes": {"<id>": {"document": node}}}`.
//!
//! For node-query responses the entry with the smallest key is used.

use serde::de::Error as _;
use serde_json::Value;

use crate::error::LayoutError;
use crate::node::SourceNode;
use crate::prefilter::{prefilter, RawNode};

/// Parse a design document into its raw root node.
///
/// # Errors
///
/// [`LayoutError::Parse`] if the text is not JSON, or no node can be found
/// in it.
pub fn parse_document(json: &str) -> Result<RawNode, LayoutError> {
    let value: Value = serde_json::from_str(json)?;
    let root = unwrap_envelope(value)?;
    Ok(serde_json::from_value(root)?)
}

fn unwrap_envelope(mut value: Value) -> Result<Value, serde_json::Error> {
    if let Some(Value::Object(nodes)) = value.get_mut("nodes").map(Value::take) {
        let entry = nodes
            .into_iter()
            .next()
            .map(|(_, entry)| entry)
            .ok_or_else(|| serde_json::Error::custom("`nodes` map is empty"))?;
        return unwrap_envelope(entry);
    }
    if let Some(document) = value.get_mut("document").map(Value::take) {
        return Ok(document);
    }
    Ok(value)
}

/// Parse, select and prefilter in one step.
///
/// With `node_id`, the subtree rooted at that node becomes the layout root.
///
/// # Errors
///
/// Parse failures, [`LayoutError::NodeNotFound`] for an unknown `node_id`,
/// and every error [`prefilter`] can raise.
pub fn load_source(json: &str, node_id: Option<&str>) -> Result<SourceNode, LayoutError> {
    let document = parse_document(json)?;
    let root = match node_id {
        Some(id) => document
            .find(id)
            .ok_or_else(|| LayoutError::NodeNotFound { id: id.to_string() })?,
        None => &document,
    };
    tracing::debug!(id = %root.id, "loaded design node");
    prefilter(root)
}
