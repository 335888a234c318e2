//! # Point Quadtree - 2D Range Query Index
//!
//! A recursive quadrant-subdivision tree that stores bare 2D points and answers
//! axis-aligned rectangular range queries.
//!
//! ## Features
//!
//! - **Lazy Splitting**: A node stays a leaf until an insertion exceeds its capacity
//! - **Pruned Queries**: Subtrees whose rectangle misses the query are skipped whole
//! - **Deterministic Output**: Results come back in pre-order, stable for a given insertion order
//! - **Bounded Depth**: Coincident points stop splitting once a node can no longer be halved
//!
//! ## Quick Start
//!
//! ```rust
//! use point_quadtree::prelude::*;
//!
//! // Root covering [0,0]-[100,100], leaves hold up to 4 points
//! let mut tree = QuadTree::new(Bounds::from_coords(0.0, 0.0, 100.0, 100.0), 4)?;
//!
//! tree.insert(Point::new(10.0, 10.0));
//! tree.insert(Point::new(20.0, 20.0));
//! tree.insert(Point::new(30.0, 30.0));
//! tree.insert(Point::new(40.0, 40.0));
//! tree.insert(Point::new(50.0, 50.0)); // fifth point splits the root
//!
//! // Points outside the root are rejected, not stored
//! assert!(!tree.insert(Point::new(200.0, 200.0)));
//!
//! let found = tree.overlap_query(&Bounds::from_coords(10.0, 10.0, 40.0, 40.0));
//! assert_eq!(found.len(), 4);
//!
//! // Reuse one output vector across queries
//! let mut results = Vec::new();
//! tree.overlap_query_into(&Bounds::from_coords(45.0, 45.0, 55.0, 55.0), &mut results);
//! assert_eq!(results, vec![Point::new(50.0, 50.0)]);
//! # Ok::<(), QuadTreeError>(())
//! ```
//!
//! ## How It Works
//!
//! Each node owns a rectangle and a bucket of points. When a full leaf receives
//! another point it splits into four quadrants around its center and the point
//! is handed to the first quadrant that contains it. Points already in the
//! bucket are not moved; queries check every bucket on their way down.
//!
//! Rectangle edges are inclusive, so a point on a split line lies in two
//! quadrants. [`BoundaryPolicy`] decides which one receives it.

pub mod config;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod quadtree;

mod integration_test;

pub use config::{BoundaryPolicy, QuadTreeConfig};
pub use error::QuadTreeError;
pub use geometry::{Bounds, Point};
pub use quadtree::QuadTree;
