//! Fitting a maze grid into a surface

use super::surface::{Area, Point};

/// Uniform cell size and grid placement for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub rows: usize,
    pub cols: usize,
    /// Edge length of every (square) cell
    pub cell_size: f64,
    /// Left edge of the grid
    pub offset_x: f64,
    /// Top edge of the grid
    pub offset_y: f64,
}

impl Geometry {
    /// Largest square cells that fit `rows × cols` into `width × height`,
    /// with the grid centred in whatever space is left over.
    ///
    /// `rows` and `cols` must be non-zero, which every parsed maze guarantees.
    pub fn fit(rows: usize, cols: usize, width: f64, height: f64) -> Self {
        debug_assert!(rows > 0 && cols > 0, "cannot fit an empty grid");
        let cell_size = (width / cols as f64).min(height / rows as f64);
        let offset_x = (width - cell_size * cols as f64) / 2.0;
        let offset_y = (height - cell_size * rows as f64) / 2.0;

        Geometry {
            rows,
            cols,
            cell_size,
            offset_x,
            offset_y,
        }
    }

    /// Top-left corner of the cell at `(row, col)`
    pub fn cell_origin(&self, row: usize, col: usize) -> Point {
        Point::new(
            self.offset_x + col as f64 * self.cell_size,
            self.offset_y + row as f64 * self.cell_size,
        )
    }

    /// The rectangle covered by the whole grid
    pub fn grid_area(&self) -> Area {
        Area::new(
            self.offset_x,
            self.offset_y,
            self.cell_size * self.cols as f64,
            self.cell_size * self.rows as f64,
        )
    }
}
