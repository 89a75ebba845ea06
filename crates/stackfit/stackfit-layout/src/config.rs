//! Layout inference configuration.
//!
//! Every threshold the classifier, the screen detector and the builder use
//! lives here and is passed explicitly; nothing is read from globals.

/// Thresholds and bounds for layout inference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Nodes deeper than this become leaves.
    pub max_depth: usize,
    /// Nodes with more visible children than this become leaves.
    pub max_fanout: usize,
    /// Overlap (px) still treated as sequential for ordinary sibling sets.
    pub default_tolerance: f64,
    /// Overlap (px) still treated as sequential for a screen body.
    pub screen_body_tolerance: f64,
    /// Body needs scroll once it exceeds this fraction of available height.
    pub scroll_threshold: f64,
    /// Typical inter-element gap used only for the scroll estimate.
    pub spacing_estimate: f64,
    /// Header and footer must be strictly shorter than this (px).
    pub anchor_max_height: f64,
    /// Header must start above this fraction of the container height.
    pub header_zone: f64,
    /// Footer must start below this fraction of the container height.
    pub footer_zone: f64,
    /// Use a node's declared flow axis instead of measuring its children.
    pub honor_declared_axis: bool,
}

impl LayoutConfig {
    /// Geometry-only inference with the stock mobile thresholds.
    pub const DEFAULT: Self = Self {
        max_depth: 10,
        max_fanout: 15,
        default_tolerance: 1.0,
        screen_body_tolerance: 10.0,
        scroll_threshold: 0.95,
        spacing_estimate: 16.0,
        anchor_max_height: 120.0,
        header_zone: 0.15,
        footer_zone: 0.85,
        honor_declared_axis: false,
    };

    /// Like [`DEFAULT`](Self::DEFAULT), but trusts auto-layout axes declared
    /// in the source document.
    pub const AUTO_LAYOUT: Self = Self {
        honor_declared_axis: true,
        ..Self::DEFAULT
    };

    /// Set the maximum recursion depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum visible fan-out.
    pub fn with_max_fanout(mut self, max_fanout: usize) -> Self {
        self.max_fanout = max_fanout;
        self
    }

    /// Set the sibling tolerance used outside screen bodies.
    pub fn with_default_tolerance(mut self, px: f64) -> Self {
        self.default_tolerance = px;
        self
    }

    /// Set the sibling tolerance used for screen bodies.
    pub fn with_screen_body_tolerance(mut self, px: f64) -> Self {
        self.screen_body_tolerance = px;
        self
    }

    /// Set the scroll threshold ratio.
    pub fn with_scroll_threshold(mut self, ratio: f64) -> Self {
        self.scroll_threshold = ratio;
        self
    }

    /// Set the spacing estimate used by the scroll check.
    pub fn with_spacing_estimate(mut self, px: f64) -> Self {
        self.spacing_estimate = px;
        self
    }

    /// Toggle declared-axis handling.
    pub fn with_declared_axis(mut self, honor: bool) -> Self {
        self.honor_declared_axis = honor;
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let c = LayoutConfig::default();
        assert_eq!(c.default_tolerance, 1.0);
        assert_eq!(c.screen_body_tolerance, 10.0);
        assert_eq!(c.scroll_threshold, 0.95);
        assert_eq!(c.spacing_estimate, 16.0);
        assert_eq!(c.anchor_max_height, 120.0);
        assert_eq!(c.header_zone, 0.15);
        assert_eq!(c.footer_zone, 0.85);
        assert!(!c.honor_declared_axis);
    }

    #[test]
    fn test_auto_layout_preset() {
        let c = LayoutConfig::AUTO_LAYOUT;
        assert!(c.honor_declared_axis);
        assert_eq!(c.max_fanout, LayoutConfig::DEFAULT.max_fanout);
    }

    #[test]
    fn test_builder_setters() {
        let c = LayoutConfig::DEFAULT
            .with_max_depth(3)
            .with_max_fanout(4)
            .with_scroll_threshold(0.5);
        assert_eq!(c.max_depth, 3);
        assert_eq!(c.max_fanout, 4);
        assert_eq!(c.scroll_threshold, 0.5);
    }
}
