//! Collision-free placement of the representations around the main numeral.
//!
//! Each enabled mode becomes a [`LayoutComponent`]: a rectangle with an
//! estimated size, a seeded position above the anchor, and a priority. The
//! [`OverlapResolver`] shuffles components vertically until no two padded
//! bounding boxes intersect. The anchor (priority 0) never moves.

mod resolve;

pub use resolve::{LayoutUnresolved, OverlapResolver, Placement, ResolvedLayout, count_overlaps};
pub(crate) use resolve::by_distance;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};
use crate::mode::NumeralMode;

/// Tuning for the overlap resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum gap between any two components, in pixels.
    pub min_spacing: f64,
    /// Relaxation passes before falling back to forced stacking.
    pub max_iterations: u32,
    /// Extra clearance added when pushing a component off the anchor.
    pub clearance_buffer: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_spacing: 15.0,
            max_iterations: 20,
            clearance_buffer: 2.0,
        }
    }
}

impl ResolverConfig {
    /// The same config with negative or non-finite distances replaced by 0.
    pub fn clamped(&self) -> Self {
        let non_negative = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            min_spacing: non_negative(self.min_spacing),
            max_iterations: self.max_iterations,
            clearance_buffer: non_negative(self.clearance_buffer),
        }
    }
}

/// One movable rectangle. Lower priority values are resolved first and
/// move least.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutComponent {
    pub id: NumeralMode,
    pub center: Point,
    pub size: Size,
    pub priority: u8,
}

impl LayoutComponent {
    /// Create a component. Priority 0 belongs to the anchor, so it is raised to 1.
    pub fn new(id: NumeralMode, center: Point, size: Size, priority: u8) -> Self {
        Self {
            id,
            center,
            size,
            priority: priority.max(1),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.center, self.size)
    }
}
