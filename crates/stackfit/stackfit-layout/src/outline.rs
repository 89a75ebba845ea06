//! Plain-text outline of a layout tree.
//!
//! One line per layout node, two spaces of indentation per level:
//!
//! ```text
//! Screen "Home" #1:1
//!   HStack(spacing: 8) "Top Nav" #1:2
//!     Text "Title" #1:3
//!   ScrollView(vertical) VStack(spacing: 4) body
//!     Text "Hello" #1:5
//!     ZStack "Hero" #1:6
//!       Image "Photo" #1:7 offset(0, 0)
//!       Text "Caption" #1:8 offset(0, 40)
//!   Box "Tab Bar" #1:9
//! ```

use core::fmt;

use crate::build::{Decision, DegradeReason, LayoutNode, LeafReason, ScrollAxis};
use crate::classify::{ContainerType, LayoutDecision};
use crate::geometry::Offset;
use crate::node::{NodeKind, SourceNode};

impl fmt::Display for LayoutNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0, None)
    }
}

impl fmt::Display for ScrollAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollAxis::Vertical => f.write_str("vertical"),
            ScrollAxis::Horizontal => f.write_str("horizontal"),
        }
    }
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradeReason::DepthExceeded { depth, max } => write!(f, "depth {} > {}", depth, max),
            DegradeReason::FanoutExceeded { children, max } => {
                write!(f, "{} children > {}", children, max)
            }
        }
    }
}

fn write_node(
    f: &mut fmt::Formatter<'_>,
    node: &LayoutNode<'_>,
    level: usize,
    offset: Option<Offset>,
) -> fmt::Result {
    write!(f, "{:width$}", "", width = level.saturating_mul(2))?;

    let stack = match &node.decision {
        Decision::Leaf { reason } => {
            write_leaf(f, node.source, *reason)?;
            None
        }
        Decision::Stack(d) => {
            write_stack(f, d)?;
            write_label(f, node.source)?;
            Some(d)
        }
        Decision::Screen(_) => {
            f.write_str("Screen")?;
            write_label(f, node.source)?;
            None
        }
        Decision::Body(b) => {
            if let Some(axis) = b.scroll {
                write!(f, "ScrollView({}) ", axis)?;
            }
            write_stack(f, &b.layout)?;
            f.write_str(" body")?;
            Some(&b.layout)
        }
    };

    if let Some(o) = offset {
        write!(f, " offset({}, {})", o.dx, o.dy)?;
    }
    writeln!(f)?;

    let next = level.saturating_add(1);
    for child in &node.children {
        let child_offset = stack.and_then(|d| d.offset_of(&child.source.id));
        write_node(f, child, next, child_offset)?;
    }
    Ok(())
}

fn write_stack(f: &mut fmt::Formatter<'_>, decision: &LayoutDecision<'_>) -> fmt::Result {
    match decision.container {
        ContainerType::Vertical => write!(f, "VStack(spacing: {})", decision.spacing),
        ContainerType::Horizontal => write!(f, "HStack(spacing: {})", decision.spacing),
        ContainerType::Overlay => f.write_str("ZStack"),
    }
}

fn write_leaf(f: &mut fmt::Formatter<'_>, source: &SourceNode, reason: LeafReason) -> fmt::Result {
    match reason {
        LeafReason::Content(kind) => {
            f.write_str(content_label(kind))?;
            write_label(f, source)
        }
        LeafReason::Childless => {
            f.write_str("Box")?;
            write_label(f, source)
        }
        LeafReason::Degraded(why) => {
            f.write_str("Box")?;
            write_label(f, source)?;
            write!(f, " [degraded: {}]", why)
        }
    }
}

fn content_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Text => "Text",
        NodeKind::Image => "Image",
        NodeKind::Vector => "Vector",
        NodeKind::Container | NodeKind::Instance => "Box",
    }
}

fn write_label(f: &mut fmt::Formatter<'_>, source: &SourceNode) -> fmt::Result {
    write!(f, " {:?} #{}", source.name, source.id)
}
