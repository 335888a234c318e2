//! Point quadtree with lazy quadrant splitting.
//!
//! Every node owns a rectangle, a bucket of up to `capacity` points and, once
//! split, exactly four children covering its quadrants. Points already in a
//! bucket when the node splits stay there; queries visit every bucket on the
//! way down, so they are still found.

use std::slice;

use tracing::{debug, error, trace};

use crate::{BoundaryPolicy, Bounds, Point, QuadTreeConfig, QuadTreeError};

/// A node of the quadtree. The value returned by [`QuadTree::new`] is the root.
///
/// ```
/// use point_quadtree::prelude::*;
///
/// let mut tree = QuadTree::new(Bounds::from_coords(0.0, 0.0, 100.0, 100.0), 4)?;
/// for i in 1..=5 {
///     let v = f64::from(i) * 10.0;
///     assert!(tree.insert(Point::new(v, v)));
/// }
/// assert!(!tree.is_leaf());
/// assert!(!tree.insert(Point::new(200.0, 200.0)));
///
/// let found = tree.overlap_query(&Bounds::from_coords(10.0, 10.0, 40.0, 40.0));
/// assert_eq!(found.len(), 4);
/// # Ok::<(), QuadTreeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree {
    config: QuadTreeConfig,
    bounds: Bounds,
    depth: usize,
    /// Max-x edge excluded from routing (half-open policy only).
    open_right: bool,
    /// Max-y edge excluded from routing (half-open policy only).
    open_bottom: bool,
    points: Vec<Point>,
    /// Top-left, top-right, bottom-left, bottom-right.
    children: Option<Box<[QuadTree; 4]>>,
}

impl QuadTree {
    /// Creates a root covering `bounds` whose leaves hold up to `capacity` points.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::ZeroCapacity`] if `capacity` is 0.
    pub fn new(bounds: Bounds, capacity: usize) -> Result<Self, QuadTreeError> {
        Self::with_config(bounds, QuadTreeConfig::default().with_capacity(capacity))
    }

    /// Creates a root covering `bounds` with a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::ZeroCapacity`] if `config.capacity` is 0.
    pub fn with_config(bounds: Bounds, config: QuadTreeConfig) -> Result<Self, QuadTreeError> {
        config.validate()?;
        Ok(Self::node(bounds, config, 0, false, false))
    }

    fn node(
        bounds: Bounds,
        config: QuadTreeConfig,
        depth: usize,
        open_right: bool,
        open_bottom: bool,
    ) -> Self {
        Self {
            config,
            bounds,
            depth,
            open_right,
            open_bottom,
            points: Vec::new(),
            children: None,
        }
    }

    /// Region this node is responsible for.
    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Points a leaf may hold before it splits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Configuration shared with the whole tree.
    #[inline]
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Distance from the root, which has depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Points stored directly in this node, in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The four quadrant children, or `None` for a leaf.
    #[inline]
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// True until the node splits.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Number of points stored in this subtree.
    pub fn len(&self) -> usize {
        self.points.len() + self.child_iter().map(Self::len).sum::<usize>()
    }

    /// True if the subtree stores no point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.child_iter().all(Self::is_empty)
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.child_iter().map(Self::node_count).sum::<usize>()
    }

    /// Levels below this node: 0 for a leaf.
    pub fn height(&self) -> usize {
        self.child_iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Iterates over every stored point, own bucket first, then the children
    /// depth-first in quadrant order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![self],
            current: slice::Iter::default(),
        }
    }

    fn child_iter(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().flat_map(|children| children.iter())
    }

    /// Whether `point` is routed to this node. Edge handling follows the
    /// configured [`BoundaryPolicy`].
    #[inline]
    fn accepts(&self, point: Point) -> bool {
        self.bounds.contains(point)
            && !(self.open_right && point.x == self.bounds.max.x)
            && !(self.open_bottom && point.y == self.bounds.max.y)
    }

    /// False once halving no longer shrinks the node or the depth cap is hit.
    #[inline]
    fn can_split(&self) -> bool {
        self.bounds.is_divisible() && self.config.max_depth.is_none_or(|max| self.depth < max)
    }

    /// Turns a leaf into an internal node with four quadrant children.
    ///
    /// Existing points stay in this node's bucket. Calling it on a node that
    /// already has children does nothing.
    pub fn split(&mut self) {
        if self.children.is_some() {
            return;
        }

        trace!(depth = self.depth, bounds = %self.bounds, "splitting node");

        let [top_left, top_right, bottom_left, bottom_right] = self.bounds.quadrants();
        let half_open = self.config.boundary == BoundaryPolicy::HalfOpen;
        let depth = self.depth + 1;
        let config = self.config;

        self.children = Some(Box::new([
            Self::node(top_left, config, depth, half_open, half_open),
            Self::node(top_right, config, depth, self.open_right, half_open),
            Self::node(bottom_left, config, depth, half_open, self.open_bottom),
            Self::node(bottom_right, config, depth, self.open_right, self.open_bottom),
        ]));
    }

    /// Inserts a point, returning `false` if it lies outside this node.
    ///
    /// A full leaf splits unless its bounds can no longer be halved (or the
    /// configured depth cap is reached); then it keeps the point past capacity.
    ///
    /// # Panics
    ///
    /// Panics if a split node accepts the point but none of its quadrants do,
    /// which would mean the quadrant geometry is broken.
    pub fn insert(&mut self, point: Point) -> bool {
        match self.try_insert(point) {
            Ok(accepted) => accepted,
            Err(err) => panic!("quadtree invariant violated: {err}"),
        }
    }

    /// Inserts a point, reporting a broken quadrant invariant as an error.
    ///
    /// `Ok(false)` means the point is outside this node and nothing changed.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::UncoveredPoint`] if this node accepts the point
    /// but none of its children do.
    pub fn try_insert(&mut self, point: Point) -> Result<bool, QuadTreeError> {
        if !self.accepts(point) {
            return Ok(false);
        }

        if self.children.is_none() {
            if self.points.len() < self.config.capacity {
                self.points.push(point);
                return Ok(true);
            }
            if !self.can_split() {
                debug!(
                    depth = self.depth,
                    len = self.points.len() + 1,
                    bounds = %self.bounds,
                    "node cannot split further, growing past capacity"
                );
                self.points.push(point);
                return Ok(true);
            }
        }

        self.split();

        if let Some(children) = self.children.as_deref_mut() {
            for child in children.iter_mut() {
                if child.try_insert(point)? {
                    return Ok(true);
                }
            }
        }

        error!(%point, depth = self.depth, bounds = %self.bounds, "no quadrant accepted point");
        Err(QuadTreeError::UncoveredPoint {
            x: point.x,
            y: point.y,
            depth: self.depth,
        })
    }

    /// Inserts every point in order and returns how many were accepted.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`insert`](Self::insert).
    pub fn insert_all<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        points
            .into_iter()
            .filter(|&point| self.insert(point))
            .count()
    }

    /// Returns every stored point inside `region` (edges included).
    ///
    /// Order is pre-order: a node's own bucket, then its children in
    /// top-left, top-right, bottom-left, bottom-right order.
    pub fn overlap_query(&self, region: &Bounds) -> Vec<Point> {
        let mut results = Vec::new();
        self.overlap_query_into(region, &mut results);
        results
    }

    /// Like [`overlap_query`](Self::overlap_query) but appends to `results`.
    ///
    /// `results` is not cleared, so one vector can collect several queries.
    pub fn overlap_query_into(&self, region: &Bounds, results: &mut Vec<Point>) {
        if !self.bounds.intersects(region) {
            return;
        }

        results.extend(self.points.iter().copied().filter(|&p| region.contains(p)));

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.overlap_query_into(region, results);
            }
        }
    }
}

impl<'a> IntoIterator for &'a QuadTree {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Pre-order iterator over the points of a subtree. Created by [`QuadTree::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a QuadTree>,
    current: slice::Iter<'a, Point>,
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if let Some(&point) = self.current.next() {
                return Some(point);
            }
            let node = self.stack.pop()?;
            self.current = node.points.iter();
            if let Some(children) = &node.children {
                self.stack.extend(children.iter().rev());
            }
        }
    }
}
