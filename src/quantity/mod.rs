//! Quantity visualization: arranging `count` icons into grids.
//!
//! [`optimal_stacking_layout`] picks rows × columns for a bare count, using
//! layouts that support recognising a quantity at a glance: a single row up
//! to five, a ten-frame up to ten, a double ten-frame up to twenty, and a
//! width-bounded near-square grid beyond. [`QuantityLayout`] lays out a whole
//! number as one icon column per non-zero place value.
//!
//! Icons fill a grid row-major (row 0 left to right, then row 1, ...), so
//! trailing cells stay empty when `rows * columns > count`.

mod composite;

pub use composite::{
    Arrangement, IconPlacement, OnesArrangement, PlaceColumn, QuantityConfig, QuantityLayout,
};

use serde::{Deserialize, Serialize};

/// Rows × columns for a set of icons. `{0, 0}` iff the count is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: u32,
    pub columns: u32,
}

impl GridLayout {
    pub const EMPTY: GridLayout = GridLayout {
        rows: 0,
        columns: 0,
    };

    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Number of cells.
    pub fn capacity(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }

    /// `(row, column)` of the first `count` cells in row-major order.
    pub fn fill_order(&self, count: u32) -> impl Iterator<Item = (u32, u32)> {
        let columns = self.columns.max(1);
        let filled = u64::from(count).min(self.capacity());
        (0..filled).map(move |i| ((i / u64::from(columns)) as u32, (i % u64::from(columns)) as u32))
    }
}

/// Horizontal space available to a stacking layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackingConstraints {
    pub viewport_width: f64,
    pub icon_width: f64,
    /// Share of the viewport width a grid may use.
    pub width_fraction: f64,
}

impl StackingConstraints {
    /// Upper bound on columns. At least 1; unbounded when the icon width is
    /// not positive.
    pub fn max_columns(&self) -> u32 {
        if self.icon_width.is_nan() || self.icon_width <= 0.0 || !self.viewport_width.is_finite() {
            return u32::MAX;
        }
        let cap = (self.width_fraction * self.viewport_width / self.icon_width).floor();
        if cap < 1.0 { 1 } else { cap.min(f64::from(u32::MAX)) as u32 }
    }
}

impl Default for StackingConstraints {
    fn default() -> Self {
        Self {
            viewport_width: 1024.0,
            icon_width: 28.0,
            width_fraction: DEFAULT_WIDTH_FRACTION,
        }
    }
}

pub const DEFAULT_WIDTH_FRACTION: f64 = 0.2;

/// Rows allowed per column before a capped grid is widened.
const MAX_ASPECT: f64 = 1.5;

/// Growth applied to the count when widening a too-tall grid.
const WIDEN_FACTOR: f64 = 1.3;

/// Pick a grid for `count` icons.
///
/// - `0` → `{0, 0}`
/// - `1..=5` → one row
/// - `6..=10` → ten-frame `{2, 5}`
/// - `11..=20` → double ten-frame `{4, 5}`
/// - above 20 → `ceil(sqrt(count))` columns capped by the available width,
///   widened toward `ceil(sqrt(1.3 * count))` when more than 1.5× taller than wide
pub fn optimal_stacking_layout(count: u32, constraints: &StackingConstraints) -> GridLayout {
    match count {
        0 => GridLayout::EMPTY,
        1..=5 => GridLayout::new(1, count),
        6..=10 => GridLayout::new(2, 5),
        11..=20 => GridLayout::new(4, 5),
        _ => {
            let cap = constraints.max_columns();
            let mut columns = ceil_sqrt(f64::from(count)).min(cap);
            let mut rows = count.div_ceil(columns);
            if f64::from(rows) > f64::from(columns) * MAX_ASPECT {
                columns = ceil_sqrt(f64::from(count) * WIDEN_FACTOR).min(cap);
                rows = count.div_ceil(columns);
            }
            GridLayout::new(rows, columns)
        }
    }
}

/// Near-square grid: `ceil(sqrt(count))` columns, as few rows as fit.
pub fn square_layout(count: u32) -> GridLayout {
    if count == 0 {
        return GridLayout::EMPTY;
    }
    let columns = ceil_sqrt(f64::from(count));
    GridLayout::new(count.div_ceil(columns), columns)
}

/// Single column, one icon per row.
pub fn column_layout(count: u32) -> GridLayout {
    if count == 0 {
        GridLayout::EMPTY
    } else {
        GridLayout::new(count, 1)
    }
}

/// Convert a raw count: fractions truncate, negative and non-finite values become 0.
pub fn count_from_f64(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.trunc().min(f64::from(u32::MAX)) as u32
}

fn ceil_sqrt(value: f64) -> u32 {
    (value.sqrt().ceil() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(count: u32) -> GridLayout {
        optimal_stacking_layout(count, &StackingConstraints::default())
    }

    #[test]
    fn boundary_layouts() {
        assert_eq!(layout(0), GridLayout::new(0, 0));
        assert_eq!(layout(1), GridLayout::new(1, 1));
        assert_eq!(layout(5), GridLayout::new(1, 5));
        assert_eq!(layout(6), GridLayout::new(2, 5));
        assert_eq!(layout(10), GridLayout::new(2, 5));
        assert_eq!(layout(11), GridLayout::new(4, 5));
        assert_eq!(layout(20), GridLayout::new(4, 5));
        assert!(layout(21).rows > 4);
    }

    #[test]
    fn every_count_fits() {
        for count in 0..=9999 {
            let g = layout(count);
            assert!(g.capacity() >= u64::from(count), "count {count}: {g:?}");
            assert_eq!(g == GridLayout::EMPTY, count == 0);
            if count > 0 {
                assert!(g.rows >= 1 && g.columns >= 1);
            }
        }
    }

    #[test]
    fn large_counts_respect_width_cap() {
        let constraints = StackingConstraints {
            viewport_width: 500.0,
            icon_width: 20.0,
            width_fraction: 0.2,
        };
        // cap = floor(0.2 * 500 / 20) = 5
        let g = optimal_stacking_layout(100, &constraints);
        assert_eq!(g, GridLayout::new(20, 5));
    }

    #[test]
    fn moderately_tall_grid_is_widened() {
        let constraints = StackingConstraints {
            viewport_width: 1000.0,
            icon_width: 25.0,
            width_fraction: 0.2,
        };
        // cap = 8; sqrt(100) = 10 → 8 columns, 13 rows (> 12), widened to
        // min(8, ceil(sqrt(130)) = 12) = 8 columns.
        let g = optimal_stacking_layout(100, &constraints);
        assert_eq!(g, GridLayout::new(13, 8));
    }

    #[test]
    fn uncapped_square_for_moderate_counts() {
        let constraints = StackingConstraints {
            viewport_width: 10_000.0,
            icon_width: 10.0,
            width_fraction: 0.2,
        };
        assert_eq!(optimal_stacking_layout(30, &constraints), GridLayout::new(5, 6));
        assert_eq!(optimal_stacking_layout(36, &constraints), GridLayout::new(6, 6));
    }

    #[test]
    fn tiny_viewport_still_yields_one_column() {
        let constraints = StackingConstraints {
            viewport_width: 10.0,
            icon_width: 50.0,
            width_fraction: 0.2,
        };
        assert_eq!(constraints.max_columns(), 1);
        assert_eq!(optimal_stacking_layout(30, &constraints), GridLayout::new(30, 1));
    }

    #[test]
    fn fill_order_is_row_major_and_stops_at_count() {
        let cells: Vec<_> = GridLayout::new(2, 5).fill_order(7).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn square_and_column_layouts() {
        assert_eq!(square_layout(9), GridLayout::new(3, 3));
        assert_eq!(square_layout(7), GridLayout::new(3, 3));
        assert_eq!(square_layout(0), GridLayout::EMPTY);
        assert_eq!(column_layout(9), GridLayout::new(9, 1));
    }

    #[test]
    fn raw_counts_truncate() {
        assert_eq!(count_from_f64(7.9), 7);
        assert_eq!(count_from_f64(-3.0), 0);
        assert_eq!(count_from_f64(f64::NAN), 0);
    }
}
