//! Owned search context behind the C boundary.
//!
//! A [`SearchContext`] owns one tree built from a copy of the caller's points
//! and finishes every search by sorting the kept points by ascending rank.
//! It has no interior mutability, so one context can serve any number of
//! threads at once (share it by reference or through an `Arc`).

use log::debug;

use crate::error::BuildError;
use crate::kdtree::KdTree;
use crate::types::{Point, Rect};

/// Tree built once from a point set, queried many times
///
/// # Examples
/// ```
/// use point_search::{Point, Rect, SearchContext};
///
/// let points: Vec<Point> = (0..7).map(|i| Point::new(i, i, i as f32, -i as f32)).collect();
/// let context = SearchContext::new(&points);
///
/// let mut out = [Point::default(); 3];
/// let written = context.search(&Rect::new(-100.0, -100.0, 100.0, 100.0), 3, &mut out);
/// let ids: Vec<i32> = out[..written].iter().map(|p| p.id).collect();
/// assert_eq!(ids, vec![0, 1, 2]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    tree: KdTree,
}

impl SearchContext {
    /// Copies `points` into a new tree
    pub fn new(points: &[Point]) -> Self {
        Self {
            tree: KdTree::build(points),
        }
    }

    /// Copies `points` into a new tree, keeping an empty input as an empty context.
    ///
    /// # Errors
    /// [`BuildError::NanCoordinate`] if any point has a NaN coordinate.
    pub fn try_new(points: &[Point]) -> Result<Self, BuildError> {
        match KdTree::try_build(points) {
            Ok(tree) => Ok(Self { tree }),
            Err(BuildError::Empty) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Writes the best `count` points inside `rect` to `out`, sorted by
    /// ascending rank, and returns how many were written.
    ///
    /// Invalid arguments (negative `count`, `out` shorter than `count`) write
    /// nothing and return 0.
    pub fn search(&self, rect: &Rect, count: i32, out: &mut [Point]) -> usize {
        let written = match self.tree.find_best(rect, count, out) {
            Ok(written) => written,
            Err(err) => {
                debug!("Search rejected: {err}");
                return 0;
            }
        };
        out[..written].sort_by_key(|point| point.rank);
        written
    }

    /// The underlying tree
    pub fn tree(&self) -> &KdTree {
        &self.tree
    }

    /// Number of indexed points
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns whether no points are indexed
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl From<KdTree> for SearchContext {
    fn from(tree: KdTree) -> Self {
        Self { tree }
    }
}
