//! Value types shared by the tree, the searcher and the C boundary.
//!
//! Field order and widths of [`Point`] and [`Rect`] match the C layout
//! expected by existing callers, so both are `#[repr(C)]`.

/// A ranked point: `{ id, rank, x, y }`.
///
/// Lower rank means higher priority.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Caller-assigned identifier
    pub id: i32,
    /// Priority, lower is better
    pub rank: i32,
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Creates a point
    pub fn new(id: i32, rank: i32, x: f32, y: f32) -> Self {
        Self { id, rank, x, y }
    }

    /// Coordinate of this point along `axis`
    #[inline]
    pub fn coord(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Axis-aligned rectangle `{ lx, ly, hx, hy }`, inclusive on all four bounds.
///
/// A rectangle with `lx > hx` (or `ly > hy`) is not rejected; it simply
/// contains nothing.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Low x bound
    pub lx: f32,
    /// Low y bound
    pub ly: f32,
    /// High x bound
    pub hx: f32,
    /// High y bound
    pub hy: f32,
}

impl Rect {
    /// Creates a rectangle from its low and high corners
    pub fn new(lx: f32, ly: f32, hx: f32, hy: f32) -> Self {
        Self { lx, ly, hx, hy }
    }

    /// Rectangle covering the whole plane
    pub fn everything() -> Self {
        Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::INFINITY, f32::INFINITY)
    }

    /// Returns true if `point` lies inside, bounds included
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.lx && point.x <= self.hx && point.y >= self.ly && point.y <= self.hy
    }

    /// Low and high bounds along `axis`
    #[inline]
    pub fn bounds(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::X => (self.lx, self.hx),
            Axis::Y => (self.ly, self.hy),
        }
    }
}

/// Split dimension of a tree level. The root splits on `X`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Split on x
    X,
    /// Split on y
    Y,
}

impl Axis {
    /// Split dimension of the next level down
    #[inline]
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

const _: () = assert!(size_of::<Point>() == 16);
const _: () = assert!(size_of::<Rect>() == 16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_bounds_are_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert!(rect.contains(&Point::new(0, 0, 0.0, 0.0)), "Low corner should be inside");
        assert!(rect.contains(&Point::new(1, 0, 10.0, 5.0)), "High corner should be inside");
        assert!(rect.contains(&Point::new(2, 0, 10.0, 0.0)), "Edge point should be inside");
        assert!(!rect.contains(&Point::new(3, 0, 10.000_1, 0.0)), "Just past hx should be outside");
        assert!(!rect.contains(&Point::new(4, 0, 5.0, -0.000_1)), "Just below ly should be outside");
    }

    #[test]
    fn test_inverted_rect_contains_nothing() {
        let rect = Rect::new(5.0, 0.0, 1.0, 10.0);
        for x in 0..10 {
            assert!(!rect.contains(&Point::new(x, 0, x as f32, 5.0)), "Inverted rect matched x={x}");
        }
    }

    #[test]
    fn test_everything_contains_extremes() {
        let rect = Rect::everything();
        assert!(rect.contains(&Point::new(0, 0, f32::MAX, f32::MIN)), "Finite extremes should be inside");
        assert!(rect.contains(&Point::new(1, 0, f32::INFINITY, 0.0)), "Infinity should be inside");
        assert!(!rect.contains(&Point::new(2, 0, f32::NAN, 0.0)), "NaN is never inside");
    }

    #[test]
    fn test_axis_alternates() {
        assert_eq!(Axis::X.next(), Axis::Y);
        assert_eq!(Axis::Y.next(), Axis::X);
        let p = Point::new(7, 1, 2.5, -3.5);
        assert_eq!(p.coord(Axis::X), 2.5);
        assert_eq!(p.coord(Axis::Y), -3.5);
        assert_eq!(Rect::new(1.0, 2.0, 3.0, 4.0).bounds(Axis::Y), (2.0, 4.0));
    }
}
