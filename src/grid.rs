//! Grid mode: a viewport split into `rows × cols` equal cells.
//!
//! The cells plus the padding gutters between them are centered in the
//! viewport. [`GridMapper`] converts between cell indices and pixel
//! positions in both directions. It caches only derived dimensions and is
//! recomputed in full on every size or padding change; cell occupancy is
//! the caller's business.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::geometry::{Point, Size};

/// Default gutter between cells, in pixels.
pub const DEFAULT_CELL_PADDING: f64 = 10.0;

/// A cell reference: row and column, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Accept raw coordinates only when both are non-negative whole numbers.
    pub fn from_f64(row: f64, col: f64) -> GridResult<Self> {
        let whole = |v: f64| v.is_finite() && v >= 0.0 && v.fract() == 0.0;
        if !whole(row) || !whole(col) {
            return Err(GridError::InvalidCell {
                message: format!("({row}, {col}) is not a pair of whole numbers"),
            });
        }
        Ok(Self::new(row as usize, col as usize))
    }
}

/// Cell ↔ pixel mapping for one grid session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridMapper {
    rows: usize,
    cols: usize,
    padding: f64,
    viewport: Size,
    cell: Size,
    grid: Size,
    offset: Point,
}

impl GridMapper {
    /// Create a mapper for a `rows × cols` grid in a `width × height` viewport.
    pub fn new(rows: usize, cols: usize, width: f64, height: f64, padding: f64) -> GridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions {
                message: format!("{rows}x{cols} grid has no cells"),
            });
        }
        check_extent("padding", padding)?;

        let mut mapper = Self {
            rows,
            cols,
            padding,
            viewport: Size::default(),
            cell: Size::default(),
            grid: Size::default(),
            offset: Point::default(),
        };
        mapper.update_dimensions(width, height)?;
        Ok(mapper)
    }

    /// Recompute every derived dimension for a new viewport size.
    pub fn update_dimensions(&mut self, width: f64, height: f64) -> GridResult<()> {
        check_extent("viewport width", width)?;
        check_extent("viewport height", height)?;

        let gutters_x = self.padding * (self.cols - 1) as f64;
        let gutters_y = self.padding * (self.rows - 1) as f64;
        let cell = Size::new(
            ((width - gutters_x) / self.cols as f64).max(0.0),
            ((height - gutters_y) / self.rows as f64).max(0.0),
        );
        let grid = Size::new(
            cell.width * self.cols as f64 + gutters_x,
            cell.height * self.rows as f64 + gutters_y,
        );

        self.viewport = Size::new(width, height);
        self.cell = cell;
        self.grid = grid;
        self.offset = Point::new((width - grid.width) / 2.0, (height - grid.height) / 2.0);

        tracing::debug!(
            rows = self.rows,
            cols = self.cols,
            cell_width = cell.width,
            cell_height = cell.height,
            "grid dimensions updated"
        );
        Ok(())
    }

    /// Change the gutter width and recompute.
    pub fn set_padding(&mut self, padding: f64) -> GridResult<()> {
        check_extent("padding", padding)?;
        self.padding = padding;
        self.update_dimensions(self.viewport.width, self.viewport.height)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn cell_size(&self) -> Size {
        self.cell
    }

    /// Size of all cells plus gutters.
    pub fn grid_size(&self) -> Size {
        self.grid
    }

    /// Top-left corner of the grid inside the viewport.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn is_valid_cell(&self, row: i64, col: i64) -> bool {
        usize::try_from(row).is_ok_and(|r| r < self.rows)
            && usize::try_from(col).is_ok_and(|c| c < self.cols)
    }

    /// Pixel center of cell `(row, col)`.
    pub fn cell_position(&self, row: i64, col: i64) -> GridResult<Point> {
        if !self.is_valid_cell(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(Point::new(
            self.offset.x + col as f64 * (self.cell.width + self.padding) + self.cell.width / 2.0,
            self.offset.y + row as f64 * (self.cell.height + self.padding) + self.cell.height / 2.0,
        ))
    }

    /// Pixel center of a cell reference.
    pub fn position_of(&self, cell: Cell) -> GridResult<Point> {
        match (i64::try_from(cell.row), i64::try_from(cell.col)) {
            (Ok(row), Ok(col)) => self.cell_position(row, col),
            _ => Err(GridError::InvalidCell {
                message: format!("({}, {}) does not fit the grid", cell.row, cell.col),
            }),
        }
    }

    /// The cell containing pixel `(x, y)`.
    ///
    /// Gutters are not excluded: a point in the padding between cells maps to
    /// the cell before it (floor division by cell size plus padding).
    pub fn grid_cell(&self, x: f64, y: f64) -> GridResult<Cell> {
        let rel_x = x - self.offset.x;
        let rel_y = y - self.offset.y;
        let outside = !(0.0..=self.grid.width).contains(&rel_x)
            || !(0.0..=self.grid.height).contains(&rel_y);
        let stride_x = self.cell.width + self.padding;
        let stride_y = self.cell.height + self.padding;
        if outside || stride_x <= 0.0 || stride_y <= 0.0 {
            return Err(GridError::InvalidCell {
                message: format!("point ({x}, {y}) lies outside the grid area"),
            });
        }

        let col = (rel_x / stride_x).floor() as i64;
        let row = (rel_y / stride_y).floor() as i64;
        if !self.is_valid_cell(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(Cell::new(row as usize, col as usize))
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    fn out_of_bounds(&self, row: i64, col: i64) -> GridError {
        GridError::InvalidCell {
            message: format!("({row}, {col}) is outside a {}x{} grid", self.rows, self.cols),
        }
    }
}

fn check_extent(what: &str, value: f64) -> GridResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GridError::InvalidDimensions {
            message: format!("{what} must be finite and non-negative, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, cols: usize, w: f64, h: f64) -> GridMapper {
        GridMapper::new(rows, cols, w, h, DEFAULT_CELL_PADDING).unwrap()
    }

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn center_cell_is_viewport_center() {
        let g = grid(3, 3, 600.0, 600.0);
        assert!(approx(g.cell_position(1, 1).unwrap(), Point::new(300.0, 300.0)));
    }

    #[test]
    fn cell_size_accounts_for_padding() {
        let g = grid(3, 4, 430.0, 320.0);
        // (430 - 3 * 10) / 4 = 100, (320 - 2 * 10) / 3 = 100
        assert_eq!(g.cell_size(), Size::new(100.0, 100.0));
        assert_eq!(g.grid_size(), Size::new(430.0, 320.0));
        assert_eq!(g.offset(), Point::new(0.0, 0.0));
        assert!(approx(g.cell_position(0, 0).unwrap(), Point::new(50.0, 50.0)));
        assert!(approx(g.cell_position(2, 3).unwrap(), Point::new(380.0, 270.0)));
    }

    #[test]
    fn round_trip_every_cell() {
        for (rows, cols, w, h) in [(3, 3, 600.0, 600.0), (4, 7, 1024.0, 768.0), (1, 1, 50.0, 80.0)] {
            let g = grid(rows, cols, w, h);
            for cell in g.cells() {
                let p = g.position_of(cell).unwrap();
                assert_eq!(g.grid_cell(p.x, p.y).unwrap(), cell);
            }
        }
    }

    #[test]
    fn out_of_bounds_cells_are_invalid() {
        let g = grid(3, 3, 600.0, 600.0);
        assert!(!g.is_valid_cell(-1, 0));
        assert!(!g.is_valid_cell(0, 3));
        assert!(g.is_valid_cell(2, 2));
        assert!(matches!(
            g.cell_position(3, 0),
            Err(GridError::InvalidCell { .. })
        ));
    }

    #[test]
    fn fractional_cell_coordinates_are_rejected() {
        assert!(Cell::from_f64(1.5, 0.0).is_err());
        assert!(Cell::from_f64(-1.0, 0.0).is_err());
        assert_eq!(Cell::from_f64(2.0, 1.0).unwrap(), Cell::new(2, 1));
    }

    #[test]
    fn points_outside_grid_are_rejected() {
        // 600 wide viewport, 300 tall: cells are shorter than wide, grid fills it.
        let g = GridMapper::new(2, 2, 600.0, 300.0, 0.0).unwrap();
        assert!(g.grid_cell(-1.0, 10.0).is_err());
        assert!(g.grid_cell(10.0, 301.0).is_err());
        // Exactly on the far edge with no padding floors to an out-of-range index.
        assert!(g.grid_cell(600.0, 10.0).is_err());
    }

    #[test]
    fn gutter_points_resolve_to_preceding_cell() {
        let g = grid(3, 4, 430.0, 320.0);
        // x = 105 lies in the gutter between columns 0 (0..100) and 1 (110..210).
        assert_eq!(g.grid_cell(105.0, 50.0).unwrap(), Cell::new(0, 0));
    }

    #[test]
    fn resize_recomputes_everything() {
        let mut g = grid(3, 3, 600.0, 600.0);
        g.update_dimensions(1200.0, 300.0).unwrap();
        assert!(approx(g.cell_position(1, 1).unwrap(), Point::new(600.0, 150.0)));
        g.set_padding(0.0).unwrap();
        assert_eq!(g.cell_size(), Size::new(400.0, 100.0));
    }

    #[test]
    fn oversized_padding_clamps_cells_to_zero() {
        let g = GridMapper::new(3, 3, 10.0, 10.0, 20.0).unwrap();
        assert_eq!(g.cell_size(), Size::new(0.0, 0.0));
        // Gutters overflow the viewport; the grid is still centered.
        assert_eq!(g.offset(), Point::new(-15.0, -15.0));
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        assert!(matches!(
            GridMapper::new(0, 3, 100.0, 100.0, 0.0),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(GridMapper::new(3, 3, f64::NAN, 100.0, 0.0).is_err());
        assert!(GridMapper::new(3, 3, 100.0, 100.0, -1.0).is_err());
    }
}
