//! Stack Layout Inference
//!
//! Turns a tree of absolutely positioned design elements into a declarative
//! stack layout: vertical and horizontal flows, overlays placed from a
//! common center, and mobile screens with a fixed header, a (possibly
//! scrolling) body and a fixed footer.
//!
//! # Architecture
//!
//! - Geometry: bounding boxes, gaps, centers, offsets
//! - Classifier: one sibling set to Vertical / Horizontal / Overlay
//! - Screen detector: header / body / footer anatomy and scroll need
//! - Builder: recursive tree walk with depth and fan-out bounds
//! - Input boundary: prefilter and optional JSON import (`serde` feature)
//!
//! # Example
//!
//! ```rust
//! use stackfit_layout::prelude::*;
//!
//! let screen = SourceNode::container("s", "Home", BoundingBox::new(0.0, 0.0, 390.0, 844.0))
//!     .with_children([
//!         SourceNode::container("h", "Header", BoundingBox::new(0.0, 0.0, 390.0, 60.0)),
//!         SourceNode::container("b", "Feed", BoundingBox::new(0.0, 60.0, 390.0, 1200.0)),
//!         SourceNode::container("t", "Tab Bar", BoundingBox::new(0.0, 780.0, 390.0, 64.0)),
//!     ]);
//!
//! let tree = LayoutBuilder::new(LayoutConfig::DEFAULT).build_tree(&screen);
//! let body = &tree.root.screen().unwrap().body;
//! assert_eq!(body.scroll, Some(ScrollAxis::Vertical));
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic))]

pub mod build;
pub mod classify;
pub mod config;
pub mod error;
pub mod geometry;
pub mod lexicon;
pub mod node;
pub mod prefilter;
pub mod screen;

mod outline;

#[cfg(feature = "serde")]
pub mod import;
#[cfg(feature = "serde")]
mod serialize;

pub mod prelude {
    //! Everything needed to build a layout tree.

    pub use crate::build::{
        BodyDecision, Decision, DegradeReason, Degradation, LayoutBuilder, LayoutNode, LayoutTree,
        LeafReason, ScreenDecision, ScrollAxis,
    };
    pub use crate::classify::{
        classify, classify_refs, flow_along, ContainerType, FlowAxis, LayoutDecision,
    };
    pub use crate::config::LayoutConfig;
    pub use crate::error::LayoutError;
    pub use crate::geometry::{BoundingBox, Offset, Point};
    pub use crate::lexicon::{AnchorPredicate, AnchorRole, NameLexicon};
    pub use crate::node::{Axis, NodeKind, SourceNode};
    pub use crate::prefilter::{prefilter, RawNode};
    pub use crate::screen::{detect_screen_pattern, ScreenPattern};

    #[cfg(feature = "serde")]
    pub use crate::import::{load_source, parse_document};
}

pub use build::{LayoutBuilder, LayoutNode, LayoutTree};
pub use config::LayoutConfig;
pub use error::LayoutError;
pub use node::SourceNode;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_inputs_are_send_and_sync() {
        assert_send_sync::<SourceNode>();
        assert_send_sync::<LayoutConfig>();
        assert_send_sync::<NameLexicon>();
        assert_send_sync::<LayoutBuilder>();
    }
}
