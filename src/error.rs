//! Error types.

use thiserror::Error;

/// Errors reported by [`QuadTree`](crate::QuadTree) construction and insertion.
///
/// Inserting a point outside the tree is not an error; `insert` just returns `false`.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// A node must be able to hold at least one point.
    #[error("quadtree capacity must be at least 1")]
    ZeroCapacity,

    /// A split node contained a point that none of its four quadrants accepted.
    ///
    /// The quadrants always cover their parent, so this means a numeric bug.
    #[error("point ({x}, {y}) is inside a node at depth {depth} but outside all of its quadrants")]
    UncoveredPoint {
        /// Rejected x coordinate.
        x: f64,
        /// Rejected y coordinate.
        y: f64,
        /// Depth of the node whose children all rejected the point.
        depth: usize,
    },
}
