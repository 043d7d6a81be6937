//! # Point Search - static kd-tree for ranked rectangle queries
//!
//! A Rust library that indexes a fixed set of ranked 2D points once and then
//! answers many axis-aligned rectangle queries, each returning the K points
//! with the lowest rank inside the rectangle.
//!
//! ## Features
//!
//! - **Balanced Build**: O(n log n) construction from two presorted orderings
//! - **Bounded Top-K Search**: pruned depth-first walk with an unsorted K-slot buffer
//! - **Read-only After Build**: share one tree between threads without locking
//! - **C Boundary**: `create` / `search` / `destroy` over `#[repr(C)]` points
//!
//! ## Quick Start
//!
//! ```rust
//! use point_search::prelude::*;
//!
//! // Points are {id, rank, x, y}; lower rank is better
//! let points = vec![
//!     Point::new(10, 3, 1.0, 1.0),
//!     Point::new(11, 1, 2.0, 2.0),
//!     Point::new(12, 2, 8.0, 8.0),
//!     Point::new(13, 0, 2.5, 1.5),
//! ];
//!
//! // Build the index once
//! let context = SearchContext::new(&points);
//!
//! // Best two points inside [0, 3] x [0, 3], sorted by rank
//! let mut out = [Point::default(); 2];
//! let written = context.search(&Rect::new(0.0, 0.0, 3.0, 3.0), 2, &mut out);
//! assert_eq!(written, 2);
//! assert_eq!(out[0].id, 13);
//! assert_eq!(out[1].id, 11);
//! ```
//!
//! ## How It Works
//!
//! The tree splits on x at the root and alternates between y and x on every
//! level below. Each node holds the median point of its range; everything on
//! its left is strictly smaller in the split dimension and everything on its
//! right is greater or equal. A query walks only the children whose side of
//! the split can overlap the rectangle, keeping the best K matches in a
//! fixed buffer that tracks its current worst entry.

pub mod context;
pub mod error;
pub mod ffi;
pub mod kdtree;
pub mod node;
pub mod prelude;
pub mod search;
pub mod types;


pub use context::SearchContext;
pub use error::{BuildError, SearchError};
pub use kdtree::KdTree;
pub use node::{Node, NodeId};
pub use types::{Axis, Point, Rect};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
