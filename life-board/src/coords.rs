//! Render-space coordinates and the single conversion to and from board
//! storage coordinates.
//!
//! The window axes put `x` to the right and `y` downwards, so a cell drawn at
//! `(x, y)` is stored at `board[y][x]`, i.e. `Loc { row: y, col: x }`.

use crate::board::Loc;

/// Cell position in render space: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
}

impl CellCoord {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Maps a pixel position on the board area to the cell under it by
    /// flooring `pixel / cell_size` on each axis. Positions left of or above
    /// the board, and non-finite ones, map to no cell. The result is not
    /// checked against the board dimensions.
    pub fn from_pixel(px: f64, py: f64, cell_size: u32) -> Option<Self> {
        if cell_size == 0 {
            return None;
        }
        let cell_size = f64::from(cell_size);
        Some(Self::new(
            Self::pixel_to_cell(px, cell_size)?,
            Self::pixel_to_cell(py, cell_size)?,
        ))
    }

    fn pixel_to_cell(pixel: f64, cell_size: f64) -> Option<u32> {
        if !pixel.is_finite() || pixel < 0.0 {
            return None;
        }
        let cell = (pixel / cell_size).floor();
        (cell <= f64::from(u32::MAX)).then_some(cell as u32)
    }

    /// Top-left pixel of this cell.
    pub fn pixel_origin(&self, cell_size: u32) -> (u32, u32) {
        (self.x * cell_size, self.y * cell_size)
    }
}

impl From<Loc> for CellCoord {
    fn from(loc: Loc) -> Self {
        Self::new(loc.col, loc.row)
    }
}

impl From<CellCoord> for Loc {
    fn from(coord: CellCoord) -> Self {
        Loc::new(coord.y, coord.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_swap_at_the_boundary() {
        let coord = CellCoord::new(7, 2);
        let loc = Loc::from(coord);
        assert_eq!(loc, Loc::new(2, 7));
        assert_eq!(CellCoord::from(loc), coord);
    }

    #[test]
    fn pixels_floor_to_cells() {
        assert_eq!(CellCoord::from_pixel(0.0, 0.0, 20), Some(CellCoord::new(0, 0)));
        assert_eq!(CellCoord::from_pixel(19.9, 20.0, 20), Some(CellCoord::new(0, 1)));
        assert_eq!(CellCoord::from_pixel(799.0, 599.0, 20), Some(CellCoord::new(39, 29)));
    }

    #[test]
    fn negative_and_non_finite_pixels_are_rejected() {
        assert_eq!(CellCoord::from_pixel(-0.5, 10.0, 20), None);
        assert_eq!(CellCoord::from_pixel(10.0, -1.0, 20), None);
        assert_eq!(CellCoord::from_pixel(f64::NAN, 10.0, 20), None);
        assert_eq!(CellCoord::from_pixel(10.0, f64::INFINITY, 20), None);
        assert_eq!(CellCoord::from_pixel(10.0, 10.0, 0), None);
    }

    #[test]
    fn pixel_origin_is_cell_corner() {
        assert_eq!(CellCoord::new(3, 4).pixel_origin(20), (60, 80));
    }
}
