//! Layout tree builder.
//!
//! Walks a [`SourceNode`] tree top-down and attaches a layout decision to
//! every node:
//!
//! 1. Content nodes (text, vector, image) and childless nodes are leaves.
//! 2. Nodes past `max_depth`, or with more than `max_fanout` visible
//!    children, degrade to leaves. The degradation is recorded and the rest
//!    of the tree builds normally.
//! 3. Nodes with a recognised screen anatomy become a screen: header, body
//!    (classified with the relaxed screen tolerance, optionally wrapped in a
//!    scroll container) and footer.
//! 4. Everything else goes through the sibling classifier.
//!
//! The output borrows from the input and is fully deterministic.
//!
//! # Example
//!
//! ```rust
//! use stackfit_layout::prelude::*;
//!
//! let root = SourceNode::container("root", "Card", BoundingBox::new(0.0, 0.0, 200.0, 100.0))
//!     .with_children([
//!         SourceNode::new("t", "Title", NodeKind::Text, BoundingBox::new(0.0, 0.0, 200.0, 20.0)),
//!         SourceNode::new("s", "Sub", NodeKind::Text, BoundingBox::new(0.0, 28.0, 200.0, 16.0)),
//!     ]);
//!
//! let tree = LayoutBuilder::new(LayoutConfig::DEFAULT).build_tree(&root);
//! assert!(tree.is_complete());
//! assert_eq!(tree.root.container(), Some(ContainerType::Vertical));
//! ```

use crate::classify::{
    classify, classify_refs, flow_along, round_spacing, ContainerType, FlowAxis, LayoutDecision,
};
use crate::config::LayoutConfig;
use crate::lexicon::{AnchorPredicate, NameLexicon};
use crate::node::{Axis, NodeKind, SourceNode};
use crate::screen::{detect_screen_pattern, ScreenPattern};

/// Direction of a scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScrollAxis {
    /// Scrolls up and down.
    Vertical,
    /// Scrolls left and right.
    Horizontal,
}

impl ScrollAxis {
    /// Scroll direction that matches a body container. Overlays scroll
    /// vertically.
    pub fn for_container(container: ContainerType) -> Self {
        match container {
            ContainerType::Horizontal => ScrollAxis::Horizontal,
            ContainerType::Vertical | ContainerType::Overlay => ScrollAxis::Vertical,
        }
    }
}

/// Why a subtree was cut off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DegradeReason {
    /// The node sits deeper than `max_depth`.
    DepthExceeded {
        /// Depth of the node.
        depth: usize,
        /// Configured limit.
        max: usize,
    },
    /// The node has more visible children than `max_fanout`.
    FanoutExceeded {
        /// Visible child count.
        children: usize,
        /// Configured limit.
        max: usize,
    },
}

/// Why a node is rendered as an opaque leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LeafReason {
    /// No visible children.
    Childless,
    /// Text, vector or image content.
    Content(NodeKind),
    /// Subtree bound hit.
    Degraded(DegradeReason),
}

/// Layout of the body of a screen.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BodyDecision<'a> {
    /// How the body children are stacked.
    pub layout: LayoutDecision<'a>,
    /// Scroll container wrapping the stack, when the body overflows.
    pub scroll: Option<ScrollAxis>,
}

/// Layout of a recognised screen.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScreenDecision<'a> {
    /// The detected anatomy.
    pub pattern: ScreenPattern<'a>,
    /// Decision for the body between the anchors.
    pub body: BodyDecision<'a>,
}

/// Decision attached to one [`LayoutNode`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Decision<'a> {
    /// Opaque box, handed to style/asset extraction.
    Leaf {
        /// Why the node is a leaf.
        reason: LeafReason,
    },
    /// Sibling classification result.
    Stack(LayoutDecision<'a>),
    /// Header / body / footer screen.
    Screen(ScreenDecision<'a>),
    /// Synthetic body node inside a screen.
    Body(BodyDecision<'a>),
}

/// One node of the inferred layout tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutNode<'a> {
    /// Source element. For a screen body this is the screen container.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::serialize::node_summary"))]
    pub source: &'a SourceNode,
    /// Decision for this node.
    pub decision: Decision<'a>,
    /// Child layouts in decided order.
    pub children: Vec<LayoutNode<'a>>,
}

impl<'a> LayoutNode<'a> {
    fn leaf(source: &'a SourceNode, reason: LeafReason) -> Self {
        Self {
            source,
            decision: Decision::Leaf { reason },
            children: Vec::new(),
        }
    }

    /// Whether this node is an opaque leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self.decision, Decision::Leaf { .. })
    }

    /// Stack container of this node, if it has one.
    ///
    /// Screens report their body container.
    pub fn container(&self) -> Option<ContainerType> {
        match &self.decision {
            Decision::Leaf { .. } => None,
            Decision::Stack(d) => Some(d.container),
            Decision::Screen(s) => Some(s.body.layout.container),
            Decision::Body(b) => Some(b.layout.container),
        }
    }

    /// Screen decision, if this node is a screen.
    pub fn screen(&self) -> Option<&ScreenDecision<'a>> {
        match &self.decision {
            Decision::Screen(s) => Some(s),
            _ => None,
        }
    }

    /// Number of layout nodes in this subtree, synthetic bodies included.
    pub fn node_count(&self) -> usize {
        self.children
            .iter()
            .fold(1usize, |acc, c| acc.saturating_add(c.node_count()))
    }

    /// Pre-order walk over the subtree.
    pub fn walk(&self) -> Vec<&LayoutNode<'a>> {
        let mut out = Vec::with_capacity(self.node_count());
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

/// A subtree that hit a bound and was replaced by a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Degradation {
    /// Id of the degraded node.
    pub node_id: String,
    /// Which bound was hit.
    pub reason: DegradeReason,
}

/// Result of building a whole tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutTree<'a> {
    /// Root layout node.
    pub root: LayoutNode<'a>,
    /// Subtrees degraded to leaves, in pre-order.
    pub degraded: Vec<Degradation>,
}

impl LayoutTree<'_> {
    /// `true` when no subtree was degraded.
    pub fn is_complete(&self) -> bool {
        self.degraded.is_empty()
    }
}

/// Builds layout trees with a fixed configuration and anchor predicate.
#[derive(Debug, Clone)]
pub struct LayoutBuilder<P = NameLexicon> {
    config: LayoutConfig,
    predicate: P,
}

impl LayoutBuilder<NameLexicon> {
    /// Builder using the stock name lexicon.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            predicate: NameLexicon::default(),
        }
    }
}

impl Default for LayoutBuilder<NameLexicon> {
    fn default() -> Self {
        Self::new(LayoutConfig::DEFAULT)
    }
}

impl<P: AnchorPredicate> LayoutBuilder<P> {
    /// Replace the anchor predicate.
    pub fn with_predicate<Q: AnchorPredicate>(self, predicate: Q) -> LayoutBuilder<Q> {
        LayoutBuilder {
            config: self.config,
            predicate,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Build the layout of `node`, treating it as sitting at `depth`.
    ///
    /// Degradations are logged but not returned; use
    /// [`build_tree`](Self::build_tree) to collect them.
    pub fn build<'a>(&self, node: &'a SourceNode, depth: usize) -> LayoutNode<'a> {
        let mut degraded = Vec::new();
        self.build_node(node, depth, &mut degraded)
    }

    /// Build the layout of a whole tree rooted at depth 0.
    pub fn build_tree<'a>(&self, root: &'a SourceNode) -> LayoutTree<'a> {
        let mut degraded = Vec::new();
        let root = self.build_node(root, 0, &mut degraded);
        if !degraded.is_empty() {
            tracing::warn!(count = degraded.len(), "layout degraded subtrees to leaves");
        }
        LayoutTree { root, degraded }
    }

    fn build_node<'a>(
        &self,
        node: &'a SourceNode,
        depth: usize,
        degraded: &mut Vec<Degradation>,
    ) -> LayoutNode<'a> {
        tracing::trace!(id = %node.id, depth, "building node");

        if node.kind.is_content() {
            return LayoutNode::leaf(node, LeafReason::Content(node.kind));
        }

        let child_count = node.visible_child_count();
        if child_count == 0 {
            return LayoutNode::leaf(node, LeafReason::Childless);
        }

        if let Some(reason) = self.bound_hit(depth, child_count) {
            tracing::warn!(
                id = %node.id,
                depth,
                children = child_count,
                "subtree degraded to leaf"
            );
            degraded.push(Degradation {
                node_id: node.id.clone(),
                reason,
            });
            return LayoutNode::leaf(node, LeafReason::Degraded(reason));
        }

        let next = depth.saturating_add(1);

        if let Some(pattern) = detect_screen_pattern(node, &self.config, &self.predicate) {
            return self.build_screen(node, pattern, next, degraded);
        }

        let decision = self
            .declared_flow(node)
            .unwrap_or_else(|| classify(&node.children, self.config.default_tolerance));
        tracing::trace!(
            id = %node.id,
            container = ?decision.container,
            spacing = decision.spacing,
            "classified"
        );

        let children = self.build_children(&decision.ordered_children, next, degraded);
        LayoutNode {
            source: node,
            decision: Decision::Stack(decision),
            children,
        }
    }

    fn bound_hit(&self, depth: usize, child_count: usize) -> Option<DegradeReason> {
        if depth > self.config.max_depth {
            return Some(DegradeReason::DepthExceeded {
                depth,
                max: self.config.max_depth,
            });
        }
        if child_count > self.config.max_fanout {
            return Some(DegradeReason::FanoutExceeded {
                children: child_count,
                max: self.config.max_fanout,
            });
        }
        None
    }

    fn declared_flow<'a>(&self, node: &'a SourceNode) -> Option<LayoutDecision<'a>> {
        if !self.config.honor_declared_axis {
            return None;
        }
        let axis = match node.declared_axis? {
            Axis::Vertical => FlowAxis::Vertical,
            Axis::Horizontal => FlowAxis::Horizontal,
            Axis::None => return None,
        };
        let mut decision = flow_along(&node.children, axis);
        if let Some(spacing) = node.item_spacing {
            decision.spacing = round_spacing(spacing);
        }
        Some(decision)
    }

    fn build_screen<'a>(
        &self,
        node: &'a SourceNode,
        pattern: ScreenPattern<'a>,
        depth: usize,
        degraded: &mut Vec<Degradation>,
    ) -> LayoutNode<'a> {
        let layout = classify_refs(&pattern.body, self.config.screen_body_tolerance);
        let scroll = pattern
            .needs_scroll
            .then(|| ScrollAxis::for_container(layout.container));
        let body = BodyDecision { layout, scroll };

        let mut children = Vec::with_capacity(3);
        if let Some(header) = pattern.header {
            children.push(self.build_node(header, depth, degraded));
        }
        children.push(LayoutNode {
            source: node,
            decision: Decision::Body(body.clone()),
            children: self.build_children(&body.layout.ordered_children, depth, degraded),
        });
        if let Some(footer) = pattern.footer {
            children.push(self.build_node(footer, depth, degraded));
        }

        LayoutNode {
            source: node,
            decision: Decision::Screen(ScreenDecision { pattern, body }),
            children,
        }
    }

    fn build_children<'a>(
        &self,
        ordered: &[&'a SourceNode],
        depth: usize,
        degraded: &mut Vec<Degradation>,
    ) -> Vec<LayoutNode<'a>> {
        ordered
            .iter()
            .map(|child| self.build_node(child, depth, degraded))
            .collect()
    }
}
