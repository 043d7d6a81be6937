//! Bounded top-K rectangle search over a [`KdTree`].
//!
//! The traversal is a pruned depth-first walk from the root. Matching points
//! go into a fixed-size, unsorted buffer: the first `k` matches fill it in
//! traversal order, after which a match only replaces the current worst entry
//! when its rank is strictly lower. The worst entry is found again with a
//! linear scan after every replacement, so equal ranks never displace an
//! entry that is already kept.

use log::trace;

use crate::error::SearchError;
use crate::kdtree::KdTree;
use crate::node::NodeId;
use crate::types::{Axis, Point, Rect};

impl KdTree {
    /// Finds the best-ranked points inside `rect`.
    ///
    /// Writes up to `max_count` points to the front of `out` and returns how
    /// many were written, which is `min(matches, max_count)`. The written
    /// points are in no particular order.
    ///
    /// # Errors
    /// [`SearchError::NegativeCount`] if `max_count` is negative and
    /// [`SearchError::BufferTooSmall`] if `out` is shorter than `max_count`.
    /// A search that matches nothing is `Ok(0)`.
    pub fn find_best(&self, rect: &Rect, max_count: i32, out: &mut [Point]) -> Result<usize, SearchError> {
        let requested = usize::try_from(max_count).map_err(|_| SearchError::NegativeCount(max_count))?;
        if out.len() < requested {
            return Err(SearchError::BufferTooSmall {
                requested,
                capacity: out.len(),
            });
        }
        Ok(self.collect_best(rect, &mut out[..requested]))
    }

    /// Returns up to `k` of the best-ranked points inside `rect`, unordered
    pub fn best_in(&self, rect: &Rect, k: usize) -> Vec<Point> {
        let mut best = vec![Point::default(); k.min(self.len())];
        let written = self.collect_best(rect, &mut best);
        best.truncate(written);
        best
    }

    fn collect_best(&self, rect: &Rect, slots: &mut [Point]) -> usize {
        let Some(root) = self.root() else {
            return 0;
        };
        if slots.is_empty() {
            return 0;
        }

        let mut best = BestBuffer::new(slots);
        self.visit(root, rect, Axis::X, &mut best);
        trace!("Rect {rect:?}: {} inside, kept {}", best.found, best.len);
        best.len
    }

    fn visit(&self, id: NodeId, rect: &Rect, axis: Axis, best: &mut BestBuffer<'_>) {
        let node = &self.nodes[id.0];
        if rect.contains(&node.point) {
            best.offer(node.point);
        }

        let split = node.point.coord(axis);
        let (low, high) = rect.bounds(axis);
        if let Some(left) = node.left {
            if low < split {
                self.visit(left, rect, axis.next(), best);
            }
        }
        if let Some(right) = node.right {
            if high >= split {
                self.visit(right, rect, axis.next(), best);
            }
        }
    }
}

/// Fixed-capacity, unsorted buffer of the best points seen so far
#[derive(Debug)]
struct BestBuffer<'a> {
    slots: &'a mut [Point],
    /// Filled slots
    len: usize,
    /// Matches offered so far
    found: usize,
    /// Slot holding the worst rank, valid once full
    worst: usize,
    worst_rank: i32,
}

impl<'a> BestBuffer<'a> {
    fn new(slots: &'a mut [Point]) -> Self {
        Self {
            slots,
            len: 0,
            found: 0,
            worst: 0,
            worst_rank: i32::MIN,
        }
    }

    fn offer(&mut self, point: Point) {
        self.found += 1;
        if self.len < self.slots.len() {
            self.slots[self.len] = point;
            self.len += 1;
            if self.len == self.slots.len() {
                self.find_worst();
            }
        } else if point.rank < self.worst_rank {
            self.slots[self.worst] = point;
            self.find_worst();
        }
    }

    /// First slot with the highest rank
    fn find_worst(&mut self) {
        let mut worst = 0;
        let mut worst_rank = i32::MIN;
        for (i, point) in self.slots.iter().enumerate() {
            if point.rank > worst_rank {
                worst_rank = point.rank;
                worst = i;
            }
        }
        self.worst = worst;
        self.worst_rank = worst_rank;
    }
}
