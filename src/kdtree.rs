//! Balanced 2D kd-tree over ranked points.
//!
//! The tree is built once from a fixed point set and is read-only afterwards.
//! Levels alternate their split dimension, starting with x at the root. For
//! every node, the left subtree holds points strictly below the node in the
//! node's split dimension and the right subtree holds points at or above it.
//!
//! Construction pre-sorts the point indices once by x and once by y, then
//! keeps both orderings sorted through the recursion with a stable partition
//! around each median. This keeps the build at O(n log n) without re-sorting
//! at any level.
//!
//! Nodes live in a single `Vec` in pre-order (root first) and refer to their
//! children by [`NodeId`].

use std::cmp::Ordering;

use log::{debug, warn};

use crate::error::BuildError;
use crate::node::{Node, NodeId};
use crate::types::{Axis, Point};

/// Static kd-tree answering rectangle queries for the best-ranked points
///
/// # Examples
/// ```
/// use point_search::{KdTree, Point, Rect};
///
/// let points: Vec<Point> = (0..7).map(|i| Point::new(i, i, i as f32, -i as f32)).collect();
/// let tree = KdTree::build(&points);
/// assert_eq!(tree.len(), 7);
///
/// let best = tree.best_in(&Rect::new(-100.0, -100.0, 100.0, 100.0), 3);
/// assert_eq!(best.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KdTree {
    /// Nodes in pre-order, root at index 0
    pub(crate) nodes: Vec<Node>,
}

impl KdTree {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Builds a balanced tree from a copy of `points`.
    ///
    /// Returns an empty tree when `points` is empty or holds a NaN coordinate.
    /// Use [`KdTree::try_build`] to find out why.
    pub fn build(points: &[Point]) -> Self {
        match Self::try_build(points) {
            Ok(tree) => tree,
            Err(BuildError::Empty) => Self::new(),
            Err(err) => {
                warn!("Rejecting point set: {err}");
                Self::new()
            }
        }
    }

    /// Builds a balanced tree from a copy of `points`.
    ///
    /// # Errors
    /// [`BuildError::Empty`] if `points` is empty, and
    /// [`BuildError::NanCoordinate`] if any point has a NaN coordinate.
    pub fn try_build(points: &[Point]) -> Result<Self, BuildError> {
        if points.is_empty() {
            return Err(BuildError::Empty);
        }
        if let Some(index) = points.iter().position(|p| p.x.is_nan() || p.y.is_nan()) {
            return Err(BuildError::NanCoordinate { index });
        }

        // [512, 4, 35, ...] means points[512] has the lowest coordinate
        let mut x_order: Vec<usize> = (0..points.len()).collect();
        let mut y_order = x_order.clone();
        x_order.sort_by(|&a, &b| compare(&points[a], &points[b], Axis::X));
        y_order.sort_by(|&a, &b| compare(&points[a], &points[b], Axis::Y));

        let mut builder = Builder {
            points,
            nodes: Vec::with_capacity(points.len()),
            scratch: vec![0; points.len()],
        };
        let root = builder.insert_median(&mut x_order, &mut y_order, 0, points.len(), Axis::X);
        debug_assert_eq!(root, Some(NodeId(0)), "root must be the first node");

        let tree = Self { nodes: builder.nodes };
        debug!("Built kd-tree: {} points, height {}", tree.len(), tree.height());
        Ok(tree)
    }

    /// Number of points in the tree
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the root node, `None` for an empty tree
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() { None } else { Some(NodeId(0)) }
    }

    /// The root node, `None` for an empty tree
    pub fn root_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Node with the given id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of levels; 0 for an empty tree, 1 for a single point
    pub fn height(&self) -> usize {
        let Some(root) = self.root() else {
            return 0;
        };
        let mut height = 0;
        let mut stack = vec![(root, 1)];
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id.0];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }

    /// All points, depth-first with each node before its children
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.nodes.iter().map(Node::point)
    }
}

/// Orders two points along `axis`; NaN is rejected before any comparison.
#[inline]
fn compare(a: &Point, b: &Point, axis: Axis) -> Ordering {
    a.coord(axis).partial_cmp(&b.coord(axis)).unwrap_or(Ordering::Equal)
}

/// Recursion state shared by every level of one build
struct Builder<'a> {
    points: &'a [Point],
    nodes: Vec<Node>,
    /// Partition buffer, indexed like the orderings
    scratch: Vec<usize>,
}

impl Builder<'_> {
    /// Inserts the median of `start..end` and recurses into both halves.
    ///
    /// `primary` is ordered along `axis` and `other` along the other axis;
    /// within `start..end` both hold the same set of point indices.
    fn insert_median(
        &mut self,
        primary: &mut [usize],
        other: &mut [usize],
        start: usize,
        end: usize,
        axis: Axis,
    ) -> Option<NodeId> {
        if start >= end {
            return None;
        }
        let points = self.points;
        if end - start == 1 {
            return Some(self.push(Node::leaf(points[primary[start]])));
        }

        let mut median = start + (end - 1 - start) / 2;
        let split = points[primary[median]].coord(axis);
        // Take the first of a run of equal values so the left side stays strictly below
        while median > start && points[primary[median - 1]].coord(axis) == split {
            median -= 1;
        }
        let median_index = primary[median];

        // Stable partition of `other` around the median; both halves stay sorted.
        let mut lower = start;
        let mut upper = median + 1;
        for &index in &other[start..end] {
            if index == median_index {
                continue;
            }
            if points[index].coord(axis) < split {
                self.scratch[lower] = index;
                lower += 1;
            } else {
                self.scratch[upper] = index;
                upper += 1;
            }
        }
        debug_assert_eq!(lower, median, "left partition size must match the median position");
        debug_assert_eq!(upper, end, "right partition must fill the range");
        other[start..end].copy_from_slice(&self.scratch[start..end]);

        let id = self.push(Node::leaf(points[median_index]));
        let left = self.insert_median(other, primary, start, median, axis.next());
        let right = self.insert_median(other, primary, median + 1, end, axis.next());
        let node = &mut self.nodes[id.0];
        node.left = left;
        node.right = right;
        Some(id)
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}
