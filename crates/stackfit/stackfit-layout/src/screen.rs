//! Mobile screen pattern detection.
//!
//! Recognises the header / body / footer anatomy of a phone screen and
//! decides whether the body needs a scroll container.
//!
//! Overlap between the body and an anchor does **not** disqualify the
//! pattern. A body that runs underneath a tab bar is exactly how designers
//! draw scrolling content, so overlap has to be explained by this detector
//! before the classifier is allowed to fall back to an overlay.
//!
//! # Checks
//!
//! With children sorted by `y` and `rel_y = child.y - container.y`:
//!
//! | anchor | candidate   | position                  | identity                       |
//! |--------|-------------|---------------------------|--------------------------------|
//! | footer | last child  | `rel_y > footer_zone * H` | footer name or horizontal axis |
//! | header | first child | `rel_y < header_zone * H` | header name or horizontal axis |
//!
//! Both anchors must also be shorter than `anchor_max_height`.
//!
//! The body is everything strictly between the qualifying anchors. At least
//! one anchor and one body child are required.

use crate::config::LayoutConfig;
use crate::lexicon::{AnchorPredicate, AnchorRole};
use crate::node::SourceNode;

/// A recognised screen anatomy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScreenPattern<'a> {
    /// Fixed top bar, if one qualified.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::serialize::opt_node_id"))]
    pub header: Option<&'a SourceNode>,
    /// Fixed bottom bar, if one qualified.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::serialize::opt_node_id"))]
    pub footer: Option<&'a SourceNode>,
    /// Children between the anchors, sorted by `y`.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::serialize::node_ids"))]
    pub body: Vec<&'a SourceNode>,
    /// Whether the body overflows the space left by the anchors.
    pub needs_scroll: bool,
    /// Container height minus anchor heights.
    pub available_height: f64,
    /// Estimated stacked height of the body.
    pub total_body_height: f64,
}

/// Detect a header/body/footer screen among the visible children of
/// `container`.
///
/// Returns `None` when fewer than two children are visible, when neither
/// anchor qualifies, or when nothing is left for the body.
pub fn detect_screen_pattern<'a, P>(
    container: &'a SourceNode,
    config: &LayoutConfig,
    predicate: &P,
) -> Option<ScreenPattern<'a>>
where
    P: AnchorPredicate + ?Sized,
{
    let mut children: Vec<&'a SourceNode> = container.visible_children().collect();
    if children.len() < 2 {
        return None;
    }
    children.sort_by(|a, b| a.bounds.y.total_cmp(&b.bounds.y));

    let height = container.bounds.height;
    let top = container.bounds.y;

    let footer = children
        .last()
        .copied()
        .filter(|c| is_footer(c, top, height, config, predicate));
    let header = children
        .first()
        .copied()
        .filter(|c| is_header(c, top, height, config, predicate));

    if header.is_none() && footer.is_none() {
        return None;
    }

    let start = usize::from(header.is_some());
    let end = children.len().saturating_sub(usize::from(footer.is_some()));
    let body: Vec<&'a SourceNode> = children.get(start..end).map(<[_]>::to_vec).unwrap_or_default();
    if body.is_empty() {
        tracing::trace!(id = %container.id, "anchors found but body is empty");
        return None;
    }

    let anchor_height =
        header.map_or(0.0, |h| h.bounds.height) + footer.map_or(0.0, |f| f.bounds.height);
    let available_height = height - anchor_height;
    let total_body_height = estimated_body_height(&body, config.spacing_estimate);
    let needs_scroll = total_body_height > config.scroll_threshold * available_height;

    tracing::debug!(
        id = %container.id,
        header = header.map(|h| h.id.as_str()),
        footer = footer.map(|f| f.id.as_str()),
        body = body.len(),
        available_height,
        total_body_height,
        needs_scroll,
        "screen pattern detected"
    );

    Some(ScreenPattern {
        header,
        footer,
        body,
        needs_scroll,
        available_height,
        total_body_height,
    })
}

/// Sum of body heights plus `spacing_estimate` between each pair.
#[allow(clippy::cast_precision_loss)]
pub fn estimated_body_height(body: &[&SourceNode], spacing_estimate: f64) -> f64 {
    let heights: f64 = body.iter().map(|c| c.bounds.height).sum();
    let gaps = body.len().saturating_sub(1) as f64;
    heights + spacing_estimate * gaps
}

fn is_footer<P>(
    child: &SourceNode,
    top: f64,
    height: f64,
    config: &LayoutConfig,
    predicate: &P,
) -> bool
where
    P: AnchorPredicate + ?Sized,
{
    child.bounds.height < config.anchor_max_height
        && child.bounds.y - top > config.footer_zone * height
        && (predicate.matches(AnchorRole::Footer, child) || child.declares_horizontal())
}

fn is_header<P>(
    child: &SourceNode,
    top: f64,
    height: f64,
    config: &LayoutConfig,
    predicate: &P,
) -> bool
where
    P: AnchorPredicate + ?Sized,
{
    child.bounds.height < config.anchor_max_height
        && child.bounds.y - top < config.header_zone * height
        && (predicate.matches(AnchorRole::Header, child) || child.declares_horizontal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use crate::lexicon::NameLexicon;
    use crate::node::Axis;

    fn child(id: &str, name: &str, y: f64, h: f64) -> SourceNode {
        SourceNode::container(id, name, BoundingBox::new(0.0, y, 390.0, h))
    }

    fn detect(s: &SourceNode) -> Option<ScreenPattern<'_>> {
        detect_screen_pattern(s, &LayoutConfig::DEFAULT, &NameLexicon::default())
    }

    fn screen(children: Vec<SourceNode>) -> SourceNode {
        SourceNode::container("screen", "Screen", BoundingBox::new(0.0, 0.0, 390.0, 844.0))
            .with_children(children)
    }

    #[test]
    fn test_header_and_tab_bar() {
        let s = screen(vec![
            child("tabs", "Tab Bar", 760.0, 84.0),
            child("list", "List", 100.0, 300.0),
            child("head", "Header", 0.0, 90.0),
        ]);
        let p = detect(&s).unwrap();

        assert_eq!(p.header.map(|n| n.id.as_str()), Some("head"));
        assert_eq!(p.footer.map(|n| n.id.as_str()), Some("tabs"));
        assert_eq!(p.body.len(), 1);
        assert_eq!(p.available_height, 844.0 - 90.0 - 84.0);
        assert_eq!(p.total_body_height, 300.0);
        assert!(!p.needs_scroll);
    }

    #[test]
    fn test_no_anchor_means_no_pattern() {
        let s = screen(vec![child("a", "Card", 0.0, 400.0), child("b", "Card", 420.0, 400.0)]);
        assert!(detect(&s).is_none());
    }

    #[test]
    fn test_horizontal_axis_qualifies_unnamed_footer() {
        let s = screen(vec![
            child("body", "Frame 1", 0.0, 700.0),
            child("row", "Frame 2", 780.0, 64.0).with_axis(Axis::Horizontal),
        ]);
        let p = detect(&s).unwrap();

        assert!(p.header.is_none());
        assert_eq!(p.footer.map(|n| n.id.as_str()), Some("row"));
        assert_eq!(p.body.len(), 1);
    }

    #[test]
    fn test_tall_footer_rejected() {
        let s = screen(vec![
            child("body", "Content", 0.0, 700.0),
            child("tabs", "Tab Bar", 720.0, 124.0),
        ]);
        assert!(detect(&s).is_none());
    }

    #[test]
    fn test_anchors_only_is_not_a_screen() {
        let s = screen(vec![
            child("head", "Header", 0.0, 60.0),
            child("tabs", "Tab Bar", 780.0, 64.0),
        ]);
        assert!(detect(&s).is_none());
    }

    #[test]
    fn test_single_child_is_not_a_screen() {
        let s = screen(vec![child("tabs", "Tab Bar", 780.0, 64.0)]);
        assert!(detect(&s).is_none());
    }

    #[test]
    fn test_hidden_children_ignored() {
        let s = screen(vec![
            child("body", "Content", 0.0, 700.0),
            child("tabs", "Tab Bar", 780.0, 64.0),
            child("ghost", "Overlay", 800.0, 40.0).hidden(),
        ]);
        let p = detect(&s).unwrap();
        assert_eq!(p.footer.map(|n| n.id.as_str()), Some("tabs"));
    }

    #[test]
    fn test_positions_are_relative_to_container() {
        let bx = |y: f64, h: f64| BoundingBox::new(-471.0, y, 390.0, h);
        let s = SourceNode::container("screen", "Screen", bx(2863.0, 844.0)).with_children([
            SourceNode::container("head", "Top Nav", bx(2863.0, 60.0)),
            SourceNode::container("body", "Body", bx(2933.0, 600.0)),
        ]);
        let p = detect(&s).unwrap();
        assert_eq!(p.header.map(|n| n.id.as_str()), Some("head"));
    }

    #[test]
    fn test_custom_predicate() {
        let s = screen(vec![
            child("head", "Frame 9", 0.0, 60.0),
            child("body", "Frame 10", 70.0, 600.0),
        ]);
        let by_id = |role: AnchorRole, n: &SourceNode| role == AnchorRole::Header && n.id == "head";
        let p = detect_screen_pattern(&s, &LayoutConfig::DEFAULT, &by_id).unwrap();
        assert_eq!(p.header.map(|n| n.id.as_str()), Some("head"));
    }

    #[test]
    fn test_estimated_body_height() {
        let a = child("a", "a", 0.0, 24.0);
        let b = child("b", "b", 0.0, 996.0);
        assert_eq!(estimated_body_height(&[&a, &b], 16.0), 1036.0);
        assert_eq!(estimated_body_height(&[], 16.0), 0.0);
    }
}
