//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use point_search::prelude::*;
//! ```

pub use crate::{KdTree, Point, Rect, SearchContext, SearchError};
