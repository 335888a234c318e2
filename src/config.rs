//! Tree configuration shared by a root and all of its descendants.

use crate::QuadTreeError;

/// Points a leaf holds before it splits, unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 4;

/// How a point lying on a split line is routed to a child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum BoundaryPolicy {
    /// Every node edge is closed. A point on a shared edge goes to the first
    /// quadrant containing it, in top-left, top-right, bottom-left,
    /// bottom-right order.
    #[default]
    Inclusive,
    /// A child's max edges are open unless they lie on the root's max edge,
    /// so every point of the root belongs to exactly one quadrant.
    HalfOpen,
}

/// Parameters fixed when a root is built and inherited on every split.
///
/// ```
/// use point_quadtree::{BoundaryPolicy, QuadTreeConfig};
///
/// let config = QuadTreeConfig::default()
///     .with_capacity(8)
///     .with_max_depth(20)
///     .with_boundary_policy(BoundaryPolicy::HalfOpen);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadTreeConfig {
    /// Maximum points a leaf holds before splitting.
    pub capacity: usize,
    /// Optional depth at which nodes stop splitting; once full they keep
    /// growing their own bucket instead. The root has depth 0. `None` leaves
    /// only the geometric limit (see [`Bounds::is_divisible`](crate::Bounds::is_divisible)).
    pub max_depth: Option<usize>,
    /// Routing of points that sit on a split line.
    pub boundary: BoundaryPolicy,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_depth: None,
            boundary: BoundaryPolicy::Inclusive,
        }
    }
}

impl QuadTreeConfig {
    /// Sets the leaf capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Caps the depth at which splitting stops.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets the boundary routing policy.
    #[must_use]
    pub fn with_boundary_policy(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Checks the configuration can build a tree.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::ZeroCapacity`] if `capacity` is 0.
    pub fn validate(&self) -> Result<(), QuadTreeError> {
        if self.capacity == 0 {
            return Err(QuadTreeError::ZeroCapacity);
        }
        Ok(())
    }
}
