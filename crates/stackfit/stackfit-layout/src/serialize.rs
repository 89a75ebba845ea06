//! Serde helpers for borrowed source nodes.
//!
//! Layout output references source nodes by pointer. On the wire those
//! references collapse to ids (or a short summary for the node a layout
//! node stands for) so a serialized tree does not repeat the whole source
//! subtree at every level.

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::Serializer;

use crate::node::SourceNode;

/// Serialize a list of node references as their ids.
#[allow(clippy::ptr_arg)]
pub(crate) fn node_ids<S: Serializer>(
    nodes: &Vec<&SourceNode>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(nodes.len()))?;
    for node in nodes {
        seq.serialize_element(node.id.as_str())?;
    }
    seq.end()
}

/// Serialize an optional node reference as its id or `null`.
pub(crate) fn opt_node_id<S: Serializer>(
    node: &Option<&SourceNode>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match node {
        Some(n) => serializer.serialize_some(n.id.as_str()),
        None => serializer.serialize_none(),
    }
}

/// Serialize a node reference as `{id, name, kind, bounds}`.
pub(crate) fn node_summary<S: Serializer>(
    node: &&SourceNode,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut s = serializer.serialize_struct("SourceNode", 4)?;
    s.serialize_field("id", &node.id)?;
    s.serialize_field("name", &node.name)?;
    s.serialize_field("kind", &node.kind)?;
    s.serialize_field("bounds", &node.bounds)?;
    s.end()
}

#[cfg(test)]
mod tests {
    use crate::build::LayoutBuilder;
    use crate::geometry::BoundingBox;
    use crate::node::{NodeKind, SourceNode};

    #[test]
    fn test_tree_serializes_ids_not_subtrees() {
        let text = |id: &str, name: &str, y: f64| {
            SourceNode::new(id, name, NodeKind::Text, BoundingBox::new(0.0, y, 100.0, 20.0))
        };
        let root = SourceNode::container("root", "Card", BoundingBox::new(0.0, 0.0, 100.0, 100.0))
            .with_children([text("a", "Title", 0.0), text("b", "Body", 30.0)]);
        let tree = LayoutBuilder::default().build_tree(&root);
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json["root"]["source"]["id"], "root");
        assert_eq!(json["root"]["source"]["kind"], "container");
        assert_eq!(json["root"]["decision"]["type"], "stack");
        assert_eq!(json["root"]["decision"]["container"], "vertical");
        assert_eq!(json["root"]["decision"]["spacing"], 10);
        assert_eq!(json["root"]["decision"]["ordered_children"], serde_json::json!(["a", "b"]));
        assert_eq!(json["root"]["children"][0]["decision"]["type"], "leaf");
        assert_eq!(json["degraded"], serde_json::json!([]));
    }
}
