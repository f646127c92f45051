//! Place-value composite: one icon column per non-zero place of a number.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};
use crate::number::{Number, Place};
use crate::quantity::{
    DEFAULT_WIDTH_FRACTION, GridLayout, StackingConstraints, column_layout,
    optimal_stacking_layout, square_layout,
};

/// How place-value columns are placed relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    /// Side by side, highest place on the left.
    #[default]
    Horizontal,
    /// Stacked, highest place on top.
    Vertical,
}

/// Grid used for the ones column.
///
/// `Square` keeps a full nine as a 3×3 block. `Stacking` applies the
/// bare-count rules of [`optimal_stacking_layout`] instead (single row up to
/// five, then ten-frames, so 7 → 2×5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnesArrangement {
    /// Near-square grid (9 → 3×3).
    #[default]
    Square,
    /// Same rules as a bare count: single row, ten-frame, double ten-frame.
    Stacking,
}

/// Spacing and arrangement of the quantity visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantityConfig {
    /// Horizontal gap between icons inside a column.
    pub icon_gap_x: f64,
    /// Vertical gap between icon rows inside a column.
    pub icon_gap_y: f64,
    /// Gap between columns in horizontal arrangement.
    pub group_gap_x: f64,
    /// Gap between columns in vertical arrangement.
    pub group_gap_y: f64,
    pub arrangement: Arrangement,
    pub ones_arrangement: OnesArrangement,
    /// Share of the viewport width a single grid may use.
    pub width_fraction: f64,
}

impl Default for QuantityConfig {
    fn default() -> Self {
        Self {
            icon_gap_x: 4.0,
            icon_gap_y: 4.0,
            group_gap_x: 24.0,
            group_gap_y: 16.0,
            arrangement: Arrangement::default(),
            ones_arrangement: OnesArrangement::default(),
            width_fraction: DEFAULT_WIDTH_FRACTION,
        }
    }
}

/// One place value's icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceColumn {
    pub place: Place,
    pub count: u8,
    pub grid: GridLayout,
    pub bounds: Rect,
}

/// Center of one icon to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconPlacement {
    pub place: Place,
    pub center: Point,
}

/// A number laid out as icon columns, centered on an anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityLayout {
    pub columns: Vec<PlaceColumn>,
    pub bounds: Rect,
    pub icon: Size,
    pub icon_gap_x: f64,
    pub icon_gap_y: f64,
}

impl QuantityLayout {
    /// Lay out `n` centered on `center`.
    ///
    /// Zero places get no column. Tens, hundreds and thousands are single
    /// vertical stacks; the ones column follows `config.ones_arrangement`.
    pub fn for_number(
        n: Number,
        center: Point,
        icon: Size,
        viewport_width: f64,
        config: &QuantityConfig,
    ) -> Self {
        let constraints = StackingConstraints {
            viewport_width,
            icon_width: icon.width,
            width_fraction: config.width_fraction,
        };

        let sized: Vec<(Place, u8, GridLayout, Size)> = n
            .place_values()
            .non_zero()
            .map(|(place, count)| {
                let grid = match (place, config.ones_arrangement) {
                    (Place::Ones, OnesArrangement::Square) => square_layout(u32::from(count)),
                    (Place::Ones, OnesArrangement::Stacking) => {
                        optimal_stacking_layout(u32::from(count), &constraints)
                    }
                    _ => column_layout(u32::from(count)),
                };
                (place, count, grid, grid_size(grid, icon, config))
            })
            .collect();

        let gaps = sized.len().saturating_sub(1) as f64;
        let total = match config.arrangement {
            Arrangement::Horizontal => Size::new(
                sized.iter().map(|c| c.3.width).sum::<f64>() + gaps * config.group_gap_x,
                sized.iter().map(|c| c.3.height).fold(0.0, f64::max),
            ),
            Arrangement::Vertical => Size::new(
                sized.iter().map(|c| c.3.width).fold(0.0, f64::max),
                sized.iter().map(|c| c.3.height).sum::<f64>() + gaps * config.group_gap_y,
            ),
        };
        let bounds = Rect::new(center, total);

        let mut cursor = match config.arrangement {
            Arrangement::Horizontal => bounds.left(),
            Arrangement::Vertical => bounds.top(),
        };
        let columns = sized
            .into_iter()
            .map(|(place, count, grid, size)| {
                // Columns share the composite's top edge (horizontal) or
                // center line (vertical).
                let column_center = match config.arrangement {
                    Arrangement::Horizontal => {
                        let c = Point::new(cursor + size.width / 2.0, bounds.top() + size.height / 2.0);
                        cursor += size.width + config.group_gap_x;
                        c
                    }
                    Arrangement::Vertical => {
                        let c = Point::new(center.x, cursor + size.height / 2.0);
                        cursor += size.height + config.group_gap_y;
                        c
                    }
                };
                PlaceColumn {
                    place,
                    count,
                    grid,
                    bounds: Rect::new(column_center, size),
                }
            })
            .collect();

        Self {
            columns,
            bounds,
            icon,
            icon_gap_x: config.icon_gap_x,
            icon_gap_y: config.icon_gap_y,
        }
    }

    pub fn size(&self) -> Size {
        self.bounds.size
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The same layout moved so its bounds are centered on `center`.
    pub fn moved_to(&self, center: Point) -> Self {
        let delta = center.offset_from(self.bounds.center);
        let shift = |r: &Rect| {
            Rect::new(
                Point::new(r.center.x + delta.x, r.center.y + delta.y),
                r.size,
            )
        };
        Self {
            columns: self
                .columns
                .iter()
                .map(|c| PlaceColumn {
                    bounds: shift(&c.bounds),
                    ..c.clone()
                })
                .collect(),
            bounds: shift(&self.bounds),
            ..self.clone()
        }
    }

    /// Every icon center, column by column, row-major within each column.
    pub fn icons(&self) -> Vec<IconPlacement> {
        let step_x = self.icon.width + self.icon_gap_x;
        let step_y = self.icon.height + self.icon_gap_y;
        self.columns
            .iter()
            .flat_map(|column| {
                let origin = Point::new(
                    column.bounds.left() + self.icon.width / 2.0,
                    column.bounds.top() + self.icon.height / 2.0,
                );
                column
                    .grid
                    .fill_order(u32::from(column.count))
                    .map(move |(row, col)| IconPlacement {
                        place: column.place,
                        center: Point::new(
                            origin.x + f64::from(col) * step_x,
                            origin.y + f64::from(row) * step_y,
                        ),
                    })
            })
            .collect()
    }
}

fn grid_size(grid: GridLayout, icon: Size, config: &QuantityConfig) -> Size {
    let span = |n: u32, extent: f64, gap: f64| {
        if n == 0 {
            0.0
        } else {
            f64::from(n) * extent + f64::from(n - 1) * gap
        }
    };
    Size::new(
        span(grid.columns, icon.width, config.icon_gap_x),
        span(grid.rows, icon.height, config.icon_gap_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: Size = Size::new(20.0, 20.0);

    fn layout(n: u64, config: &QuantityConfig) -> QuantityLayout {
        QuantityLayout::for_number(
            Number::new(n).unwrap(),
            Point::new(500.0, 400.0),
            ICON,
            1000.0,
            config,
        )
    }

    #[test]
    fn zero_has_no_columns() {
        let q = layout(0, &QuantityConfig::default());
        assert!(q.is_empty());
        assert_eq!(q.size(), Size::new(0.0, 0.0));
        assert!(q.icons().is_empty());
    }

    #[test]
    fn columns_are_highest_place_first_and_skip_zeros() {
        let q = layout(3040, &QuantityConfig::default());
        let places: Vec<_> = q.columns.iter().map(|c| c.place).collect();
        assert_eq!(places, vec![Place::Thousands, Place::Tens]);
        assert!(q.columns[0].bounds.center.x < q.columns[1].bounds.center.x);
    }

    #[test]
    fn upper_places_are_single_columns() {
        let q = layout(9990, &QuantityConfig::default());
        for c in &q.columns {
            assert_eq!(c.grid, GridLayout::new(9, 1));
        }
    }

    #[test]
    fn horizontal_width_is_columns_plus_group_gaps() {
        let config = QuantityConfig::default();
        let q = layout(9999, &config);
        let sum: f64 = q.columns.iter().map(|c| c.bounds.size.width).sum();
        assert!((q.size().width - (sum + 3.0 * config.group_gap_x)).abs() < 1e-9);
        // Centered on the anchor x.
        assert!((q.bounds.center.x - 500.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_9999_height_is_columns_plus_three_gaps() {
        let config = QuantityConfig {
            arrangement: Arrangement::Vertical,
            ..Default::default()
        };
        let q = layout(9999, &config);
        let ones = q.columns.iter().find(|c| c.place == Place::Ones).unwrap();
        assert_eq!(ones.grid, GridLayout::new(3, 3));
        let upper = 9.0 * ICON.height + 8.0 * config.icon_gap_y;
        let ones_h = 3.0 * ICON.height + 2.0 * config.icon_gap_y;
        let expected = 3.0 * upper + ones_h + 3.0 * config.group_gap_y;
        assert!((q.size().height - expected).abs() < 1e-9);
    }

    #[test]
    fn stacking_ones_uses_ten_frame() {
        let config = QuantityConfig {
            ones_arrangement: OnesArrangement::Stacking,
            ..Default::default()
        };
        let q = layout(7, &config);
        assert_eq!(q.columns[0].grid, GridLayout::new(2, 5));
    }

    #[test]
    fn icon_count_matches_digits_and_stays_inside_bounds() {
        let q = layout(4239, &QuantityConfig::default());
        let icons = q.icons();
        assert_eq!(icons.len(), 4 + 2 + 3 + 9);
        for icon in &icons {
            let column = q.columns.iter().find(|c| c.place == icon.place).unwrap();
            assert!(icon.center.x - ICON.width / 2.0 >= column.bounds.left() - 1e-9);
            assert!(icon.center.x + ICON.width / 2.0 <= column.bounds.right() + 1e-9);
            assert!(icon.center.y - ICON.height / 2.0 >= column.bounds.top() - 1e-9);
            assert!(icon.center.y + ICON.height / 2.0 <= column.bounds.bottom() + 1e-9);
        }
    }

    #[test]
    fn moved_to_shifts_everything() {
        let q = layout(123, &QuantityConfig::default());
        let moved = q.moved_to(Point::new(0.0, 0.0));
        assert_eq!(moved.bounds.center, Point::new(0.0, 0.0));
        let dx = moved.columns[0].bounds.center.x - q.columns[0].bounds.center.x;
        assert!((dx + 500.0).abs() < 1e-9);
        assert_eq!(moved.icons().len(), q.icons().len());
    }
}
