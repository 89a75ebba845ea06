//! Errors raised at the input boundary.
//!
//! Classification itself never fails. Subtrees that exceed the depth or
//! fan-out bounds degrade to leaves and are reported through
//! [`crate::build::LayoutTree::degraded`], not through this type.

use crate::geometry::InvalidExtent;

/// Input-boundary failure.
#[derive(Debug)]
pub enum LayoutError {
    /// A node that must be positioned has no bounding box.
    MissingGeometry {
        /// Offending node id.
        id: String,
    },
    /// A bounding box is negative or non-finite.
    InvalidGeometry {
        /// Offending node id.
        id: String,
        /// What is wrong with the box.
        reason: InvalidExtent,
    },
    /// The node requested as layout root is hidden.
    HiddenRoot {
        /// Root node id.
        id: String,
    },
    /// No node with this id exists in the document.
    NodeNotFound {
        /// Requested id.
        id: String,
    },
    /// The document is not valid design JSON.
    #[cfg(feature = "serde")]
    Parse(serde_json::Error),
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingGeometry { id } => write!(f, "node {} has no bounding box", id),
            Self::InvalidGeometry { id, reason } => {
                write!(f, "node {} has an invalid bounding box: {}", id, reason)
            }
            Self::HiddenRoot { id } => write!(f, "root node {} is hidden", id),
            Self::NodeNotFound { id } => write!(f, "node {} not found", id),
            #[cfg(feature = "serde")]
            Self::Parse(e) => write!(f, "malformed design document: {}", e),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
