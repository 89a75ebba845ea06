//! Sibling layout classifier.
//!
//! Given the children of one container, decide whether they read as a
//! vertical flow, a horizontal flow, or an overlay composition.
//!
//! # Algorithm
//!
//! 1. Sort by `y`. If no adjacent pair overlaps by more than the tolerance,
//!    the set is a **vertical** flow.
//! 2. Otherwise sort by `x` and apply the same test: **horizontal** flow.
//! 3. Otherwise it is an **overlay**: each child is placed by the integer
//!    offset of its center from the center of the union of all siblings,
//!    in paint order.
//!
//! Vertical always wins a tie. Flow spacing is the rounded mean of the
//! non-negative gaps.
//!
//! # Example
//!
//! ```rust
//! use stackfit_layout::classify::{classify, ContainerType};
//! use stackfit_layout::geometry::BoundingBox;
//! use stackfit_layout::node::SourceNode;
//!
//! let rows = [
//!     SourceNode::container("a", "Row A", BoundingBox::new(0.0, 0.0, 100.0, 40.0)),
//!     SourceNode::container("b", "Row B", BoundingBox::new(0.0, 48.0, 100.0, 40.0)),
//! ];
//!
//! let decision = classify(&rows, 1.0);
//! assert_eq!(decision.container, ContainerType::Vertical);
//! assert_eq!(decision.spacing, 8);
//! ```

use std::collections::BTreeMap;

use crate::geometry::{horizontal_gap, vertical_gap, BoundingBox, Offset};
use crate::node::SourceNode;

/// Container chosen for a sibling set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContainerType {
    /// Children stacked top to bottom.
    Vertical,
    /// Children stacked left to right.
    Horizontal,
    /// Children positioned by offset from a common center.
    Overlay,
}

impl ContainerType {
    /// `true` for Vertical and Horizontal.
    pub fn is_flow(self) -> bool {
        !matches!(self, ContainerType::Overlay)
    }
}

/// Outcome of classifying one sibling set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutDecision<'a> {
    /// Chosen container.
    pub container: ContainerType,
    /// Gap between consecutive children; zero for Overlay.
    pub spacing: u32,
    /// Children sorted along the flow axis, or in z-order for Overlay.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::serialize::node_ids"))]
    pub ordered_children: Vec<&'a SourceNode>,
    /// Center-relative offset per child id; Overlay only.
    pub offsets: BTreeMap<&'a str, Offset>,
}

impl<'a> LayoutDecision<'a> {
    /// Overlay decision without offsets (fewer than two children).
    fn bare_overlay(children: Vec<&'a SourceNode>) -> Self {
        Self {
            container: ContainerType::Overlay,
            spacing: 0,
            ordered_children: children,
            offsets: BTreeMap::new(),
        }
    }

    fn flow(container: ContainerType, spacing: u32, ordered_children: Vec<&'a SourceNode>) -> Self {
        Self {
            container,
            spacing,
            ordered_children,
            offsets: BTreeMap::new(),
        }
    }

    /// Offset recorded for `id`, if this is an Overlay that contains it.
    pub fn offset_of(&self, id: &str) -> Option<Offset> {
        self.offsets.get(id).copied()
    }

    /// Ids of the ordered children.
    pub fn child_ids(&self) -> Vec<&'a str> {
        self.ordered_children.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Classify a sibling set. Hidden siblings are ignored.
pub fn classify(siblings: &[SourceNode], tolerance_px: f64) -> LayoutDecision<'_> {
    let visible: Vec<&SourceNode> = siblings.iter().filter(|n| n.visible).collect();
    classify_visible(visible, tolerance_px)
}

/// [`classify`] over already-borrowed siblings, such as a screen body.
pub fn classify_refs<'a>(siblings: &[&'a SourceNode], tolerance_px: f64) -> LayoutDecision<'a> {
    let visible: Vec<&'a SourceNode> = siblings.iter().copied().filter(|n| n.visible).collect();
    classify_visible(visible, tolerance_px)
}

fn classify_visible(visible: Vec<&SourceNode>, tolerance_px: f64) -> LayoutDecision<'_> {
    if visible.len() < 2 {
        tracing::trace!(count = visible.len(), "too few siblings for flow");
        return LayoutDecision::bare_overlay(visible);
    }

    let by_y = sorted_by(&visible, |b| b.y);
    if let Some(spacing) = sequential_spacing(&by_y, tolerance_px, vertical_gap) {
        return LayoutDecision::flow(ContainerType::Vertical, spacing, by_y);
    }

    let by_x = sorted_by(&visible, |b| b.x);
    if let Some(spacing) = sequential_spacing(&by_x, tolerance_px, horizontal_gap) {
        return LayoutDecision::flow(ContainerType::Horizontal, spacing, by_x);
    }

    overlay(visible)
}

/// Direction of a declared flow. Overlays are never declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowAxis {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
}

impl FlowAxis {
    /// Container produced by a flow along this axis.
    pub fn container(self) -> ContainerType {
        match self {
            FlowAxis::Vertical => ContainerType::Vertical,
            FlowAxis::Horizontal => ContainerType::Horizontal,
        }
    }
}

/// Flow decision along a fixed axis, skipping the overlap test.
///
/// Used when the source document already declares the flow direction.
pub fn flow_along(siblings: &[SourceNode], axis: FlowAxis) -> LayoutDecision<'_> {
    let visible: Vec<&SourceNode> = siblings.iter().filter(|n| n.visible).collect();
    let (sorted, spacing) = match axis {
        FlowAxis::Vertical => {
            let by_y = sorted_by(&visible, |b| b.y);
            let spacing = mean_spacing(&gaps(&by_y, vertical_gap));
            (by_y, spacing)
        }
        FlowAxis::Horizontal => {
            let by_x = sorted_by(&visible, |b| b.x);
            let spacing = mean_spacing(&gaps(&by_x, horizontal_gap));
            (by_x, spacing)
        }
    };
    LayoutDecision::flow(axis.container(), spacing, sorted)
}

/// Round a non-negative gap to whole pixels; negative gaps become zero.
// Spacing is bounded by canvas size; the clamp keeps the cast lossless.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_spacing(gap: f64) -> u32 {
    if gap.is_nan() {
        return 0;
    }
    gap.max(0.0).round().min(f64::from(u32::MAX)) as u32
}

/// Stable sort, so equal coordinates keep paint order.
fn sorted_by<'a>(nodes: &[&'a SourceNode], key: fn(&BoundingBox) -> f64) -> Vec<&'a SourceNode> {
    let mut sorted = nodes.to_vec();
    sorted.sort_by(|a, b| key(&a.bounds).total_cmp(&key(&b.bounds)));
    sorted
}

fn gaps(sorted: &[&SourceNode], gap: fn(&BoundingBox, &BoundingBox) -> f64) -> Vec<f64> {
    sorted
        .windows(2)
        .filter_map(|pair| match pair {
            [a, b] => Some(gap(&a.bounds, &b.bounds)),
            _ => None,
        })
        .collect()
}

fn sequential_spacing(
    sorted: &[&SourceNode],
    tolerance_px: f64,
    gap: fn(&BoundingBox, &BoundingBox) -> f64,
) -> Option<u32> {
    let gaps = gaps(sorted, gap);
    if gaps.iter().any(|g| *g < -tolerance_px) {
        return None;
    }
    Some(mean_spacing(&gaps))
}

#[allow(clippy::cast_precision_loss)]
fn mean_spacing(gaps: &[f64]) -> u32 {
    if gaps.is_empty() {
        return 0;
    }
    let total: f64 = gaps.iter().map(|g| g.max(0.0)).sum();
    round_spacing(total / gaps.len() as f64)
}

fn overlay(children: Vec<&SourceNode>) -> LayoutDecision<'_> {
    let Some(union) = BoundingBox::union_all(children.iter().map(|c| &c.bounds)) else {
        return LayoutDecision::bare_overlay(children);
    };
    let origin = union.center();
    let offsets = children
        .iter()
        .map(|c| (c.id.as_str(), Offset::between(origin, c.bounds.center())))
        .collect();

    LayoutDecision {
        container: ContainerType::Overlay,
        spacing: 0,
        ordered_children: children,
        offsets,
    }
}
