//! Coordinate conversion between host pixels and grid cells.
//!
//! Centralizes the pixel <-> cell formulas so drag handling, ghost rendering
//! and drop commits agree on which cell a pointer is over. This is the only
//! place the row height is used; the placement math is purely cell based.

use crate::insertion::{Bounds, Point};
use crate::placement::Grid;
use crate::types::{Breakpoint, GridPoint, GridRect};

/// Converter for one grid as laid out on screen at one breakpoint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConverter {
    origin: Point,
    cell_width: f32,
    row_height: f32,
}

impl GridConverter {
    /// `origin` is the grid's top-left corner and `width` its pixel width
    pub fn new(grid: &Grid, breakpoint: Breakpoint, origin: Point, width: f32) -> Self {
        let cols = grid.cols(breakpoint).max(1) as f32;
        Self {
            origin,
            cell_width: width.max(1.0) / cols,
            row_height: grid.config().row_height,
        }
    }

    #[inline]
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Cell containing `point`. Points left of or above the grid map to
    /// negative cells.
    #[inline]
    pub fn pixel_to_cell(&self, point: Point) -> GridPoint {
        GridPoint::new(
            ((point.x - self.origin.x) / self.cell_width).floor() as i32,
            ((point.y - self.origin.y) / self.row_height).floor() as i32,
        )
    }

    /// Top-left pixel of `cell`
    #[inline]
    pub fn cell_to_pixel(&self, cell: GridPoint) -> Point {
        Point::new(
            self.origin.x + cell.x as f32 * self.cell_width,
            self.origin.y + cell.y as f32 * self.row_height,
        )
    }

    /// Pixel bounds of `rect`
    pub fn rect_to_pixels(&self, rect: GridRect) -> Bounds {
        let top_left = self.cell_to_pixel(rect.origin());
        Bounds::new(
            top_left.x,
            top_left.y,
            rect.w as f32 * self.cell_width,
            rect.h as f32 * self.row_height,
        )
    }
}
