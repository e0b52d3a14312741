// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Grid Dimensions
//!
//! `GridDims` is the `m × n` board every coordinate lives on. Bounds are
//! 1-indexed and inclusive on both ends, so a `20 × 20` grid accepts
//! `x` and `y` in `1..=20`.
//!
//! The clamping helpers here are what keeps cluster jitter on the board:
//! any signed position is pulled back to the nearest border cell.

use crate::coord::{CoordOffset, GridCoord};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyGridError {
    rows: usize,
    cols: usize,
}

impl EmptyGridError {
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl Display for EmptyGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Grid {}x{} has no cells; both dimensions must be at least 1",
            self.rows, self.cols
        )
    }
}

impl std::error::Error for EmptyGridError {}

/// Dimensions of a non-empty grid: `rows` bounds `x`, `cols` bounds `y`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct GridDims {
    rows: usize,
    cols: usize,
}

impl GridDims {
    /// Creates grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyGridError`] if either dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use soal_core::dims::GridDims;
    ///
    /// let dims = GridDims::new(20, 30).unwrap();
    /// assert_eq!(dims.cells(), 600);
    /// assert!(GridDims::new(0, 5).is_err());
    /// ```
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Result<Self, EmptyGridError> {
        if rows == 0 || cols == 0 {
            return Err(EmptyGridError::new(rows, cols));
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, `rows · cols`.
    #[inline]
    pub const fn cells(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        (1..=self.rows).contains(&coord.x()) && (1..=self.cols).contains(&coord.y())
    }

    /// Pulls a signed position back onto the board.
    #[inline]
    pub fn clamp(&self, x: i64, y: i64) -> GridCoord {
        GridCoord::new(clamp_axis(x, self.rows), clamp_axis(y, self.cols))
    }

    /// Moves `coord` by `offset`, clamping the result to the board.
    #[inline]
    pub fn offset(&self, coord: GridCoord, offset: CoordOffset) -> GridCoord {
        self.clamp(
            signed(coord.x()).saturating_add(offset.dx()),
            signed(coord.y()).saturating_add(offset.dy()),
        )
    }

    /// The square of cells within `radius` of `center`, cut at the borders.
    #[inline]
    pub fn window(&self, center: GridCoord, radius: usize) -> CellWindow {
        let r = signed(radius);
        let (cx, cy) = (signed(center.x()), signed(center.y()));
        CellWindow {
            min: self.clamp(cx.saturating_sub(r), cy.saturating_sub(r)),
            max: self.clamp(cx.saturating_add(r), cy.saturating_add(r)),
        }
    }

    /// Every cell in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (1..=self.rows).flat_map(move |x| (1..=self.cols).map(move |y| GridCoord::new(x, y)))
    }
}

impl Display for GridDims {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[inline]
fn signed(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

#[inline]
fn clamp_axis(v: i64, upper: usize) -> usize {
    if v < 1 {
        1
    } else {
        usize::try_from(v).map_or(upper, |u| u.min(upper))
    }
}

/// Inclusive rectangle of cells `[min.x, max.x] × [min.y, max.y]`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CellWindow {
    min: GridCoord,
    max: GridCoord,
}

impl CellWindow {
    #[inline]
    pub fn min(&self) -> GridCoord {
        self.min
    }

    #[inline]
    pub fn max(&self) -> GridCoord {
        self.max
    }

    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        (self.min.x()..=self.max.x()).contains(&coord.x())
            && (self.min.y()..=self.max.y()).contains(&coord.y())
    }

    #[inline]
    pub fn cells(&self) -> usize {
        (self.max.x() - self.min.x() + 1) * (self.max.y() - self.min.y() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(m: usize, n: usize) -> GridDims {
        GridDims::new(m, n).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert_eq!(GridDims::new(0, 3), Err(EmptyGridError::new(0, 3)));
        assert_eq!(GridDims::new(3, 0), Err(EmptyGridError::new(3, 0)));
    }

    #[test]
    fn test_cells() {
        assert_eq!(dims(20, 20).cells(), 400);
        assert_eq!(dims(1, 7).cells(), 7);
    }

    #[test]
    fn test_contains_is_one_indexed() {
        let d = dims(4, 6);
        assert!(d.contains(GridCoord::new(1, 1)));
        assert!(d.contains(GridCoord::new(4, 6)));
        assert!(!d.contains(GridCoord::new(0, 1)));
        assert!(!d.contains(GridCoord::new(5, 1)));
        assert!(!d.contains(GridCoord::new(1, 7)));
    }

    #[test]
    fn test_clamp_pulls_to_border() {
        let d = dims(10, 8);
        assert_eq!(d.clamp(-3, 4), GridCoord::new(1, 4));
        assert_eq!(d.clamp(0, 0), GridCoord::new(1, 1));
        assert_eq!(d.clamp(15, 9), GridCoord::new(10, 8));
        assert_eq!(d.clamp(5, 5), GridCoord::new(5, 5));
    }

    #[test]
    fn test_offset_clamps() {
        let d = dims(10, 10);
        let c = GridCoord::new(2, 9);
        assert_eq!(d.offset(c, CoordOffset::new(-5, 5)), GridCoord::new(1, 10));
        assert_eq!(d.offset(c, CoordOffset::new(3, -4)), GridCoord::new(5, 5));
    }

    #[test]
    fn test_window_cut_at_borders() {
        let d = dims(20, 12);
        let w = d.window(GridCoord::new(3, 10), 5);
        assert_eq!(w.min(), GridCoord::new(1, 5));
        assert_eq!(w.max(), GridCoord::new(8, 12));
        assert_eq!(w.cells(), 8 * 8);
        assert!(w.contains(GridCoord::new(8, 5)));
        assert!(!w.contains(GridCoord::new(9, 5)));
    }

    #[test]
    fn test_iter_cells_row_major() {
        let cells: Vec<_> = dims(2, 3).iter_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], GridCoord::new(1, 1));
        assert_eq!(cells[2], GridCoord::new(1, 3));
        assert_eq!(cells[3], GridCoord::new(2, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(dims(40, 30).to_string(), "40x30");
    }
}
