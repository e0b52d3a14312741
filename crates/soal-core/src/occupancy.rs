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

use crate::{coord::GridCoord, dims::GridDims};
use std::collections::HashSet;

/// Cells already taken by a house or a tree.
///
/// A coordinate is inserted at most once, which is what keeps houses and
/// trees disjoint when both are drawn against the same set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancySet {
    cells: HashSet<GridCoord>,
}

impl OccupancySet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        self.cells.contains(&coord)
    }

    /// Claims `coord`. Returns `false` if it was already taken.
    #[inline]
    pub fn try_occupy(&mut self, coord: GridCoord) -> bool {
        self.cells.insert(coord)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Unoccupied cells of `dims`, in row-major order.
    pub fn free_cells<'a>(&'a self, dims: &'a GridDims) -> impl Iterator<Item = GridCoord> + 'a {
        dims.iter_cells().filter(move |c| !self.cells.contains(c))
    }
}
