//! Arena entries of the kd-tree.

use crate::types::Point;

/// Position of a node in the tree's arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index of this node
    pub fn index(self) -> usize {
        self.0
    }
}

/// One point of the tree and the ids of its children.
///
/// Nodes are only created while the tree is built and never change afterwards.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) point: Point,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Node {
    pub(crate) fn leaf(point: Point) -> Self {
        Self { point, left: None, right: None }
    }

    /// The point stored at this node
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Child holding coordinates strictly below this node's in the split dimension
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Child holding coordinates at or above this node's in the split dimension
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// True when the node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
