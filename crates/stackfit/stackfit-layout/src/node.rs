//! Source tree: the design elements the classifier reads.
//!
//! A [`SourceNode`] tree is owned by the caller and only ever borrowed by
//! this crate. Children are stored in paint (z) order, which is not the
//! same as geometric order.

use crate::geometry::BoundingBox;

/// What kind of design element a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeKind {
    /// Frame, group, component or section.
    Container,
    /// Text run.
    Text,
    /// Vector path or primitive shape.
    Vector,
    /// Raster image.
    Image,
    /// Component instance.
    Instance,
}

impl NodeKind {
    /// Map a design-tool node type (`"FRAME"`, `"TEXT"`, ...) to a kind.
    ///
    /// Unknown types are treated as opaque vectors.
    ///
    /// ```rust
    /// use stackfit_layout::node::NodeKind;
    ///
    /// assert_eq!(NodeKind::from_design_type("FRAME"), NodeKind::Container);
    /// assert_eq!(NodeKind::from_design_type("INSTANCE"), NodeKind::Instance);
    /// assert_eq!(NodeKind::from_design_type("ELLIPSE"), NodeKind::Vector);
    /// ```
    pub fn from_design_type(node_type: &str) -> Self {
        match node_type {
            "FRAME" | "GROUP" | "COMPONENT" | "COMPONENT_SET" | "SECTION" | "CANVAS"
            | "DOCUMENT" => NodeKind::Container,
            "INSTANCE" => NodeKind::Instance,
            "TEXT" => NodeKind::Text,
            "IMAGE" => NodeKind::Image,
            _ => NodeKind::Vector,
        }
    }

    /// Text, vector and image nodes are rendered as opaque content, never
    /// as stacks.
    pub fn is_content(self) -> bool {
        matches!(self, NodeKind::Text | NodeKind::Vector | NodeKind::Image)
    }

    /// Short lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Container => "container",
            NodeKind::Text => "text",
            NodeKind::Vector => "vector",
            NodeKind::Image => "image",
            NodeKind::Instance => "instance",
        }
    }
}

/// Flow direction a node may already declare in the source tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Children flow top to bottom.
    Vertical,
    /// Children flow left to right.
    Horizontal,
    /// Explicitly no flow (free positioning).
    None,
}

impl Axis {
    /// Parse a design-tool `layoutMode` value.
    ///
    /// Returns `None` for unrecognised modes.
    pub fn from_layout_mode(mode: &str) -> Option<Self> {
        match mode {
            "VERTICAL" => Some(Axis::Vertical),
            "HORIZONTAL" => Some(Axis::Horizontal),
            "NONE" => Some(Axis::None),
            _ => None,
        }
    }
}

/// One element of the source design tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SourceNode {
    /// Design-tool id, unique within a document.
    pub id: String,
    /// Designer-given layer name.
    pub name: String,
    /// Element kind.
    pub kind: NodeKind,
    /// Absolute bounding box.
    pub bounds: BoundingBox,
    /// Hidden nodes take no part in layout.
    pub visible: bool,
    /// Children in z-order (first = painted first).
    pub children: Vec<SourceNode>,
    /// Flow direction declared by the source tool, if any.
    pub declared_axis: Option<Axis>,
    /// Gap between children declared by the source tool, if any.
    pub item_spacing: Option<f64>,
}

impl SourceNode {
    /// Create a visible, childless node.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: NodeKind,
        bounds: BoundingBox,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            bounds,
            visible: true,
            children: Vec::new(),
            declared_axis: None,
            item_spacing: None,
        }
    }

    /// Shorthand for a [`NodeKind::Container`] node.
    pub fn container(id: impl Into<String>, name: impl Into<String>, bounds: BoundingBox) -> Self {
        Self::new(id, name, NodeKind::Container, bounds)
    }

    /// Replace the children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = SourceNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Append one child on top of the existing ones.
    pub fn with_child(mut self, child: SourceNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the declared flow axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.declared_axis = Some(axis);
        self
    }

    /// Set the declared item spacing.
    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = Some(spacing);
        self
    }

    /// Mark the node hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Visible children, in z-order.
    pub fn visible_children(&self) -> impl Iterator<Item = &SourceNode> + '_ {
        self.children.iter().filter(|c| c.visible)
    }

    /// Number of visible children.
    pub fn visible_child_count(&self) -> usize {
        self.visible_children().count()
    }

    /// Whether the source tool declares a horizontal flow for this node.
    pub fn declares_horizontal(&self) -> bool {
        self.declared_axis == Some(Axis::Horizontal)
    }

    /// Depth-first search for a node by id (including `self`).
    pub fn find(&self, id: &str) -> Option<&SourceNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Total number of nodes in this subtree, hidden ones included.
    pub fn subtree_len(&self) -> usize {
        self.children
            .iter()
            .fold(1usize, |acc, c| acc.saturating_add(c.subtree_len()))
    }
}
