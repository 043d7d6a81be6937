//! C-compatible entry points.
//!
//! Three functions over an opaque [`SearchContext`] handle: `create` copies a
//! point array into a new context, `search` runs a rank-sorted bounded query
//! and `destroy` frees the context. `search` never reports an error; bad
//! arguments simply produce 0 points.
//!
//! The calling convention is `system`, which is `stdcall` on 32-bit Windows
//! and the C convention everywhere else.

use std::ptr;
use std::slice;

use log::warn;

use crate::context::SearchContext;
use crate::types::{Point, Rect};

/// Builds a context from the points in `points_begin..points_end`.
///
/// The points are copied, so the caller may free its array afterwards.
/// Returns null if either pointer is null, the range is reversed or a point
/// has a NaN coordinate. An empty range gives a context with no points.
///
/// # Safety
/// When both pointers are non-null they must delimit one readable, properly
/// aligned array of `Point`, with `points_end` one past its last element.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn create(points_begin: *const Point, points_end: *const Point) -> *mut SearchContext {
    if points_begin.is_null() || points_end.is_null() {
        warn!("create: null point range");
        return ptr::null_mut();
    }

    let len = unsafe { points_end.offset_from(points_begin) };
    let Ok(len) = usize::try_from(len) else {
        warn!("create: reversed point range");
        return ptr::null_mut();
    };

    let points = unsafe { slice::from_raw_parts(points_begin, len) };
    match SearchContext::try_new(points) {
        Ok(context) => Box::into_raw(Box::new(context)),
        Err(err) => {
            warn!("create: {err}");
            ptr::null_mut()
        }
    }
}

/// Writes up to `count` of the best points inside `rect` to `out_points`,
/// sorted by ascending rank, and returns how many were written.
///
/// Returns 0 for a null context or destination and for `count <= 0`.
///
/// # Safety
/// `sc` must be null or a live pointer returned by [`create`]. When `count`
/// is positive, `out_points` must be null or point to at least `count`
/// writable `Point`s.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn search(sc: *mut SearchContext, rect: Rect, count: i32, out_points: *mut Point) -> i32 {
    if sc.is_null() || out_points.is_null() {
        return 0;
    }
    let Ok(len) = usize::try_from(count) else {
        return 0;
    };
    if len == 0 {
        return 0;
    }

    let context = unsafe { &*sc };
    let out = unsafe { slice::from_raw_parts_mut(out_points, len) };
    let written = context.search(&rect, count, out);
    i32::try_from(written).unwrap_or(count)
}

/// Frees a context created by [`create`]. Always returns null.
///
/// # Safety
/// `sc` must be null or a pointer returned by [`create`] that has not been
/// destroyed yet.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn destroy(sc: *mut SearchContext) -> *mut SearchContext {
    if !sc.is_null() {
        drop(unsafe { Box::from_raw(sc) });
    }
    ptr::null_mut()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Point> {
        (0..7).map(|i| Point::new(i, i, i as f32, -i as f32)).collect()
    }

    #[test]
    fn test_create_search_destroy() {
        let points = fixture();
        let range = points.as_ptr_range();
        let sc = unsafe { create(range.start, range.end) };
        assert!(!sc.is_null(), "Valid range should yield a context");
        drop(points);

        let mut out = [Point::default(); 3];
        let rect = Rect::new(-100.0, -100.0, 100.0, 100.0);
        let written = unsafe { search(sc, rect, 3, out.as_mut_ptr()) };
        assert_eq!(written, 3);
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![0, 1, 2]);

        let sc = unsafe { destroy(sc) };
        assert!(sc.is_null(), "destroy always returns null");
    }

    #[test]
    fn test_create_rejects_null_and_reversed_ranges() {
        let points = fixture();
        let range = points.as_ptr_range();
        assert!(unsafe { create(ptr::null(), range.end) }.is_null());
        assert!(unsafe { create(range.start, ptr::null()) }.is_null());
        assert!(unsafe { create(range.end, range.start) }.is_null());
    }

    #[test]
    fn test_create_rejects_nan_coordinate() {
        let mut points: Vec<Point> = (0..1000).map(|i| Point::new(i, i, i as f32, i as f32)).collect();
        points[500].x = f32::NAN;
        let range = points.as_ptr_range();
        let sc = unsafe { create(range.start, range.end) };
        assert!(sc.is_null(), "A NaN coordinate must not yield a usable context");
        assert!(unsafe { destroy(sc) }.is_null());

        points[500].x = 500.0;
        let range = points.as_ptr_range();
        let sc = unsafe { create(range.start, range.end) };
        assert!(!sc.is_null(), "Finite points build a context");
        let mut out = [Point::default(); 5];
        assert_eq!(unsafe { search(sc, Rect::new(0.0, 0.0, 10.0, 10.0), 5, out.as_mut_ptr()) }, 5);
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert!(unsafe { destroy(sc) }.is_null());
    }

    #[test]
    fn test_empty_range_gives_empty_context() {
        let points = fixture();
        let start = points.as_ptr();
        let sc = unsafe { create(start, start) };
        assert!(!sc.is_null(), "Empty range is still a valid range");

        let mut out = [Point::default(); 2];
        assert_eq!(unsafe { search(sc, Rect::everything(), 2, out.as_mut_ptr()) }, 0);
        assert!(unsafe { destroy(sc) }.is_null());
    }

    #[test]
    fn test_search_bad_arguments_return_zero() {
        let points = fixture();
        let range = points.as_ptr_range();
        let sc = unsafe { create(range.start, range.end) };
        let mut out = [Point::default(); 2];
        let rect = Rect::everything();

        assert_eq!(unsafe { search(ptr::null_mut(), rect, 2, out.as_mut_ptr()) }, 0);
        assert_eq!(unsafe { search(sc, rect, 2, ptr::null_mut()) }, 0);
        assert_eq!(unsafe { search(sc, rect, 0, out.as_mut_ptr()) }, 0);
        assert_eq!(unsafe { search(sc, rect, -5, out.as_mut_ptr()) }, 0);
        assert_eq!(out, [Point::default(); 2], "Nothing should be written");

        assert!(unsafe { destroy(sc) }.is_null());
        assert!(unsafe { destroy(ptr::null_mut()) }.is_null(), "Destroying null is a no-op");
    }
}
