//! Geometry primitives for diagram presentations.
//!
//! Presentations place model elements on a 2-D plane: node presentations
//! occupy an axis-aligned [`Bounds`] rectangle and link presentations are
//! routed through a sequence of [`Point`]s. The containment analysis in the
//! `seqlens` crate is built on [`Bounds::contains`], which is inclusive on
//! all four edges.

use serde::{Deserialize, Serialize};

/// A point on the diagram's 2-D coordinate plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// An axis-aligned rectangular bounding box with minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from minimum and maximum corner coordinates.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates bounds from an origin corner and a width/height extent.
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns true if the bounds have non-negative width and height.
    ///
    /// A well-formed rectangle may still be degenerate (zero area); only
    /// inverted min/max pairs are rejected.
    pub fn is_well_formed(self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Tests whether a point lies within the bounds.
    ///
    /// The test is inclusive on all four edges: a point exactly on the
    /// boundary counts as contained.
    pub fn contains(self, point: Point) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
    }

    /// Merges two bounds to create a larger bounds that contains both
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 0.0);
    }

    #[test]
    fn test_bounds_accessors() {
        let bounds = Bounds::new(1.0, 2.0, 5.0, 8.0);
        assert_eq!(bounds.min_x(), 1.0);
        assert_eq!(bounds.min_y(), 2.0);
        assert_eq!(bounds.max_x(), 5.0);
        assert_eq!(bounds.max_y(), 8.0);
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 6.0);
    }

    #[test]
    fn test_bounds_from_origin_size() {
        let bounds = Bounds::from_origin_size(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.max_x(), 40.0);
        assert_eq!(bounds.max_y(), 60.0);
    }

    #[test]
    fn test_bounds_well_formed() {
        assert!(Bounds::new(0.0, 0.0, 10.0, 10.0).is_well_formed());
        // Degenerate but not inverted
        assert!(Bounds::new(5.0, 5.0, 5.0, 5.0).is_well_formed());
        assert!(!Bounds::new(10.0, 0.0, 0.0, 10.0).is_well_formed());
        assert!(!Bounds::new(0.0, 10.0, 10.0, 0.0).is_well_formed());
    }

    #[test]
    fn test_contains_interior_and_exterior() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert!(bounds.contains(Point::new(50.0, 50.0)));
        assert!(!bounds.contains(Point::new(150.0, 50.0)));
        assert!(!bounds.contains(Point::new(50.0, -1.0)));
    }

    #[test]
    fn test_contains_is_boundary_inclusive() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        // Corners
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(100.0, 100.0)));
        assert!(bounds.contains(Point::new(0.0, 100.0)));
        assert!(bounds.contains(Point::new(100.0, 0.0)));
        // Edges
        assert!(bounds.contains(Point::new(0.0, 50.0)));
        assert!(bounds.contains(Point::new(100.0, 50.0)));
        assert!(bounds.contains(Point::new(50.0, 0.0)));
        assert!(bounds.contains(Point::new(50.0, 100.0)));
    }

    #[test]
    fn test_bounds_merge() {
        let a = Bounds::new(1.0, 2.0, 5.0, 6.0);
        let b = Bounds::new(3.0, 0.0, 8.0, 4.0);
        let merged = a.merge(b);
        assert_eq!(merged, Bounds::new(1.0, 0.0, 8.0, 6.0));
    }

    #[test]
    fn test_serde_round_trip() {
        let bounds = Bounds::from_origin_size(0.0, 0.0, 100.0, 50.0);
        let json = serde_json::to_string(&bounds).unwrap();
        let back: Bounds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bounds);
    }

    proptest! {
        #[test]
        fn prop_contains_respects_edges(
            min_x in -1000.0f32..1000.0,
            min_y in -1000.0f32..1000.0,
            w in 0.0f32..1000.0,
            h in 0.0f32..1000.0,
            tx in 0.0f32..=1.0,
            ty in 0.0f32..=1.0,
        ) {
            let bounds = Bounds::from_origin_size(min_x, min_y, w, h);
            // Any point interpolated within the rectangle is contained
            let p = Point::new(min_x + w * tx, min_y + h * ty);
            prop_assert!(bounds.contains(p));
            // Anything strictly past max_x is not
            let outside = Point::new(bounds.max_x() + 1.0, min_y);
            prop_assert!(!bounds.contains(outside));
        }
    }
}
