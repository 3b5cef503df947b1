//! Geometry primitives for the editing model.
//!
//! Everything here operates in normalized document coordinates (scale 1.0)
//! unless a function explicitly says otherwise. The origin is the top-left
//! corner of a page, +X right, +Y down, matching the rendered page surface.

use serde::{Deserialize, Serialize};

/// A point in normalized document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by the given delta.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in normalized document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a normalized rectangle from two opposite corners.
    ///
    /// Drag gestures can move in any direction, so either corner may be the
    /// top-left. The result always has non-negative width and height.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Tests whether two rectangles overlap.
    ///
    /// Uses strict comparisons: rectangles that merely share an edge do NOT
    /// intersect. Selection behavior depends on this, so the comparison must
    /// stay strict.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Tests whether a point lies inside this rectangle (edges inclusive).
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Returns the smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Returns this rectangle translated by the given delta.
    pub fn translated(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether both dimensions exceed the given minimum.
    ///
    /// Gesture thresholds (selection 5x5, shape 10x10, erasure 5x5) all go
    /// through this check.
    pub fn exceeds_min_size(&self, min: f64) -> bool {
        self.width > min && self.height > min
    }
}

/// Clamps a coordinate so an element of the given extent stays on the page.
///
/// The boundary policy is clamp, never reject: a move that would push an
/// element past an edge lands it exactly on the edge. Elements larger than
/// the page pin to 0.
pub fn clamp_position(pos: f64, extent: f64, page_extent: f64) -> f64 {
    pos.max(0.0).min((page_extent - extent).max(0.0))
}
