//! Input boundary: raw design nodes to validated [`SourceNode`] trees.
//!
//! Raw exports carry hidden layers, boxless nodes (slices, empty groups)
//! and tool-specific flags. [`prefilter`] strips what layout cannot use and
//! validates the rest, so everything downstream can assume a visible root
//! and finite, non-negative geometry on every node.

use crate::error::LayoutError;
use crate::geometry::BoundingBox;
use crate::node::{Axis, NodeKind, SourceNode};

/// A node as it appears in a design-tool export.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RawNode {
    /// Node id.
    pub id: String,
    /// Layer name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Tool node type, e.g. `FRAME` or `TEXT`.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub node_type: String,
    /// Visibility flag; absent means visible.
    #[cfg_attr(feature = "serde", serde(default = "visible_by_default"))]
    pub visible: bool,
    /// Absolute bounding box, if the node has one.
    #[cfg_attr(feature = "serde", serde(rename = "absoluteBoundingBox", default))]
    pub bounds: Option<BoundingBox>,
    /// Auto-layout mode, e.g. `VERTICAL`.
    #[cfg_attr(feature = "serde", serde(rename = "layoutMode", default))]
    pub layout_mode: Option<String>,
    /// Auto-layout gap between children.
    #[cfg_attr(feature = "serde", serde(rename = "itemSpacing", default))]
    pub item_spacing: Option<f64>,
    /// Children in z-order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<RawNode>,
}

#[cfg(feature = "serde")]
fn visible_by_default() -> bool {
    true
}

impl RawNode {
    /// Visible raw node with a box and no children.
    pub fn new(
        id: impl Into<String>,
        node_type: impl Into<String>,
        bounds: Option<BoundingBox>,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            node_type: node_type.into(),
            visible: true,
            bounds,
            layout_mode: None,
            item_spacing: None,
            children: Vec::new(),
        }
    }

    /// Set the layer name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = RawNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Mark the node hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Depth-first search for a node by id (including `self`).
    pub fn find(&self, id: &str) -> Option<&RawNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    fn subtree_len(&self) -> usize {
        self.children
            .iter()
            .fold(1usize, |acc, c| acc.saturating_add(c.subtree_len()))
    }
}

/// Clean a raw tree for layout.
///
/// Hidden descendants and descendants without a bounding box are dropped
/// together with their subtrees. The root itself must be visible and have
/// a box. Every kept box is validated.
///
/// # Errors
///
/// - [`LayoutError::HiddenRoot`] if `root` is hidden.
/// - [`LayoutError::MissingGeometry`] if `root` has no box.
/// - [`LayoutError::InvalidGeometry`] if any kept box is negative or
///   non-finite.
pub fn prefilter(root: &RawNode) -> Result<SourceNode, LayoutError> {
    if !root.visible {
        return Err(LayoutError::HiddenRoot { id: root.id.clone() });
    }
    let mut dropped = 0usize;
    let node = convert(root, &mut dropped)?;
    if dropped > 0 {
        tracing::debug!(id = %root.id, dropped, "prefilter dropped hidden or boxless nodes");
    }
    Ok(node)
}

fn convert(raw: &RawNode, dropped: &mut usize) -> Result<SourceNode, LayoutError> {
    let bounds = checked_bounds(raw)?;
    let mut children = Vec::with_capacity(raw.children.len());
    for child in &raw.children {
        if !child.visible || child.bounds.is_none() {
            *dropped = dropped.saturating_add(child.subtree_len());
            continue;
        }
        children.push(convert(child, dropped)?);
    }
    Ok(shallow(raw, bounds).with_children(children))
}

fn checked_bounds(raw: &RawNode) -> Result<BoundingBox, LayoutError> {
    let bounds = raw
        .bounds
        .ok_or_else(|| LayoutError::MissingGeometry { id: raw.id.clone() })?;
    bounds.validate().map_err(|reason| LayoutError::InvalidGeometry {
        id: raw.id.clone(),
        reason,
    })?;
    Ok(bounds)
}

fn shallow(raw: &RawNode, bounds: BoundingBox) -> SourceNode {
    let mut node = SourceNode::new(
        raw.id.clone(),
        raw.name.clone(),
        NodeKind::from_design_type(&raw.node_type),
        bounds,
    );
    node.visible = raw.visible;
    node.declared_axis = raw.layout_mode.as_deref().and_then(Axis::from_layout_mode);
    node.item_spacing = raw.item_spacing;
    node
}

/// Strict conversion: nothing is dropped, every node needs a valid box.
///
/// Hidden nodes are kept and stay hidden.
impl TryFrom<&RawNode> for SourceNode {
    type Error = LayoutError;

    fn try_from(raw: &RawNode) -> Result<Self, Self::Error> {
        let bounds = checked_bounds(raw)?;
        let children = raw
            .children
            .iter()
            .map(SourceNode::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(shallow(raw, bounds).with_children(children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::InvalidExtent;

    fn bx(y: f64) -> Option<BoundingBox> {
        Some(BoundingBox::new(0.0, y, 100.0, 20.0))
    }

    #[test]
    fn test_drops_hidden_and_boxless() {
        let raw = RawNode::new("root", "FRAME", bx(0.0)).with_children([
            RawNode::new("a", "TEXT", bx(0.0)),
            RawNode::new("ghost", "FRAME", bx(10.0))
                .hidden()
                .with_children([RawNode::new("inner", "TEXT", bx(10.0))]),
            RawNode::new("slice", "SLICE", None),
            RawNode::new("b", "RECTANGLE", bx(30.0)),
        ]);
        let node = prefilter(&raw).unwrap();

        let ids: Vec<_> = node.children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(node.children[0].kind, NodeKind::Text);
        assert_eq!(node.children[1].kind, NodeKind::Vector);
    }

    #[test]
    fn test_root_errors() {
        let hidden = RawNode::new("r", "FRAME", bx(0.0)).hidden();
        assert!(matches!(prefilter(&hidden), Err(LayoutError::HiddenRoot { id }) if id == "r"));

        let boxless = RawNode::new("r", "FRAME", None);
        assert!(matches!(
            prefilter(&boxless),
            Err(LayoutError::MissingGeometry { id }) if id == "r"
        ));
    }

    #[test]
    fn test_invalid_box_is_reported_with_id() {
        let mut bad = RawNode::new("bad", "FRAME", bx(0.0));
        bad.bounds = Some(BoundingBox {
            x: 0.0,
            y: 0.0,
            width: -4.0,
            height: 10.0,
        });
        let raw = RawNode::new("root", "FRAME", bx(0.0)).with_children([bad]);

        match prefilter(&raw) {
            Err(LayoutError::InvalidGeometry { id, reason }) => {
                assert_eq!(id, "bad");
                assert_eq!(reason, InvalidExtent::NegativeWidth);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_layout_mode_and_spacing_carried() {
        let mut raw = RawNode::new("row", "FRAME", bx(0.0));
        raw.layout_mode = Some("HORIZONTAL".into());
        raw.item_spacing = Some(12.0);
        let node = prefilter(&raw).unwrap();

        assert_eq!(node.declared_axis, Some(Axis::Horizontal));
        assert_eq!(node.item_spacing, Some(12.0));
    }

    #[test]
    fn test_strict_conversion_keeps_hidden_rejects_boxless() {
        let raw = RawNode::new("root", "FRAME", bx(0.0))
            .with_children([RawNode::new("h", "TEXT", bx(0.0)).hidden()]);
        let node = SourceNode::try_from(&raw).unwrap();
        assert_eq!(node.children.len(), 1);
        assert!(!node.children[0].visible);

        let raw = RawNode::new("root", "FRAME", bx(0.0))
            .with_children([RawNode::new("s", "SLICE", None)]);
        assert!(matches!(
            SourceNode::try_from(&raw),
            Err(LayoutError::MissingGeometry { id }) if id == "s"
        ));
    }

    #[test]
    fn test_find() {
        let deep = RawNode::new("deep", "TEXT", bx(0.0));
        let raw = RawNode::new("root", "FRAME", bx(0.0))
            .with_children([RawNode::new("a", "FRAME", bx(0.0)).with_children([deep])]);
        assert_eq!(raw.find("deep").map(|n| n.id.as_str()), Some("deep"));
        assert!(raw.find("missing").is_none());
    }
}
