//! Screen-space geometry shared by the layout and grid modules.
//!
//! Coordinates are pixels with `y` growing downward, so "above" means a
//! smaller `y`. Rectangles are anchored at their center.

use serde::{Deserialize, Serialize};

/// Penetration depth below which two boxes are treated as touching, not overlapping.
pub const OVERLAP_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of `self` relative to `origin`.
    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub center: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.size.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.size.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center.y - self.size.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center.y + self.size.height / 2.0
    }

    /// The same rectangle grown by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Rect {
        Rect::new(
            self.center,
            Size::new(self.size.width + 2.0 * margin, self.size.height + 2.0 * margin),
        )
    }

    /// Strict overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.left() + OVERLAP_EPSILON
            || other.right() <= self.left() + OVERLAP_EPSILON
            || self.bottom() <= other.top() + OVERLAP_EPSILON
            || other.bottom() <= self.top() + OVERLAP_EPSILON)
    }

    /// Overlap test after padding both boxes by half of `spacing`, so boxes
    /// closer than `spacing` count as overlapping.
    pub fn overlaps_with_spacing(&self, other: &Rect, spacing: f64) -> bool {
        let half = spacing / 2.0;
        self.expanded(half).overlaps(&other.expanded(half))
    }
}
