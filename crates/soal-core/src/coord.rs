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

use serde::Serialize;
use std::fmt::Display;

/// A 1-indexed cell on the grid, `x` counting rows and `y` counting columns.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub struct GridCoord {
    x: usize,
    y: usize,
}

impl GridCoord {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        GridCoord { x, y }
    }

    #[inline]
    pub const fn x(self) -> usize {
        self.x
    }

    #[inline]
    pub const fn y(self) -> usize {
        self.y
    }
}

impl Display for GridCoord {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GridCoord({}, {})", self.x, self.y)
    }
}

/// A signed displacement, used to jitter a cell around a cluster center.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CoordOffset {
    dx: i64,
    dy: i64,
}

impl CoordOffset {
    #[inline]
    pub const fn new(dx: i64, dy: i64) -> Self {
        CoordOffset { dx, dy }
    }

    #[inline]
    pub const fn dx(self) -> i64 {
        self.dx
    }

    #[inline]
    pub const fn dy(self) -> i64 {
        self.dy
    }
}

impl Display for CoordOffset {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CoordOffset({}, {})", self.dx, self.dy)
    }
}
