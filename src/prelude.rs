//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use point_quadtree::prelude::*;
//! ```

pub use crate::{BoundaryPolicy, Bounds, Point, QuadTree, QuadTreeConfig, QuadTreeError};
