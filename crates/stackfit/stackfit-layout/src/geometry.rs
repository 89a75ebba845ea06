//! Axis-aligned box geometry.
//!
//! Every box lives in the single absolute coordinate space the design tool
//! exports: top-left origin, `x` growing right, `y` growing down. Nothing in
//! this module fails; boxes are validated once at the input boundary (see
//! [`crate::prefilter`]).
//!
//! # Example
//!
//! ```rust
//! use stackfit_layout::geometry::{vertical_gap, BoundingBox};
//!
//! let title = BoundingBox::new(0.0, 0.0, 200.0, 40.0);
//! let body = BoundingBox::new(0.0, 56.0, 200.0, 300.0);
//!
//! assert_eq!(title.bottom(), 40.0);
//! assert_eq!(vertical_gap(&title, &body), 16.0);
//! ```

use core::fmt;

/// A point in absolute design space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position (grows downward).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a design element.
///
/// # Invariants
///
/// - `width >= 0` and `height >= 0`
/// - all four components are finite
///
/// [`BoundingBox::new`] checks the invariants in debug builds only;
/// [`BoundingBox::try_new`] checks them always.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// Why a box failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidExtent {
    /// A component is NaN or infinite.
    NonFinite,
    /// `width < 0`.
    NegativeWidth,
    /// `height < 0`.
    NegativeHeight,
}

impl fmt::Display for InvalidExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidExtent::NonFinite => write!(f, "non-finite coordinate"),
            InvalidExtent::NegativeWidth => write!(f, "negative width"),
            InvalidExtent::NegativeHeight => write!(f, "negative height"),
        }
    }
}

impl BoundingBox {
    /// Create a box from its top-left corner and size.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the box violates the invariants.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0, "width ({}) must be >= 0", width);
        debug_assert!(height >= 0.0, "height ({}) must be >= 0", height);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box, rejecting negative or non-finite values.
    ///
    /// ```rust
    /// use stackfit_layout::geometry::{BoundingBox, InvalidExtent};
    ///
    /// assert!(BoundingBox::try_new(0.0, 0.0, 10.0, 10.0).is_ok());
    /// assert_eq!(
    ///     BoundingBox::try_new(0.0, 0.0, -1.0, 10.0),
    ///     Err(InvalidExtent::NegativeWidth)
    /// );
    /// ```
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, InvalidExtent> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(InvalidExtent::NonFinite);
        }
        if width < 0.0 {
            return Err(InvalidExtent::NegativeWidth);
        }
        if height < 0.0 {
            return Err(InvalidExtent::NegativeHeight);
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Re-check the invariants of an existing box.
    pub fn validate(&self) -> Result<(), InvalidExtent> {
        Self::try_new(self.x, self.y, self.width, self.height).map(|_| ())
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        BoundingBox {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }

    /// Smallest box covering every box in `boxes`, or `None` when empty.
    ///
    /// ```rust
    /// use stackfit_layout::geometry::BoundingBox;
    ///
    /// let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    /// let b = BoundingBox::new(20.0, 5.0, 10.0, 20.0);
    /// let all = BoundingBox::union_all([&a, &b]).unwrap();
    ///
    /// assert_eq!(all, BoundingBox::new(0.0, 0.0, 30.0, 25.0));
    /// ```
    pub fn union_all<'a>(boxes: impl IntoIterator<Item = &'a BoundingBox>) -> Option<BoundingBox> {
        boxes
            .into_iter()
            .fold(None, |acc: Option<BoundingBox>, b| match acc {
                Some(u) => Some(u.union(b)),
                None => Some(*b),
            })
    }
}

/// Distance from the bottom of `a` to the top of `b`. Negative means overlap.
pub fn vertical_gap(a: &BoundingBox, b: &BoundingBox) -> f64 {
    b.y - a.bottom()
}

/// Distance from the right of `a` to the left of `b`. Negative means overlap.
pub fn horizontal_gap(a: &BoundingBox, b: &BoundingBox) -> f64 {
    b.x - a.right()
}

/// Integer displacement of a child center from its container center.
///
/// Used by Overlay decisions: `center(child) == center(union) + offset`,
/// up to rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Offset {
    /// Horizontal displacement.
    pub dx: i64,
    /// Vertical displacement.
    pub dy: i64,
}

impl Offset {
    /// Create a new offset.
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    /// Rounded displacement that moves `origin` onto `target`.
    pub fn between(origin: Point, target: Point) -> Self {
        Self {
            dx: round_to_i64(target.x - origin.x),
            dy: round_to_i64(target.y - origin.y),
        }
    }
}

// Design coordinates are bounded by canvas size (well under 2^53), so the
// rounded value always fits.
#[allow(clippy::cast_possible_truncation)]
fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}
