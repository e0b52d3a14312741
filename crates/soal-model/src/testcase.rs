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

use crate::err::{CoordOutOfBoundsError, DuplicateCoordError, InvalidTestCaseError};
use soal_core::{GridCoord, GridDims, OccupancySet};

/// One generated input for the fire-station problem.
///
/// Houses and trees keep the order in which they were placed, which is
/// also the order they are written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    dims: GridDims,
    stations: usize,
    houses: Vec<GridCoord>,
    trees: Vec<GridCoord>,
}

impl TestCase {
    /// Creates a test case after checking that every cell is on the grid
    /// and used at most once across houses and trees.
    pub fn new(
        dims: GridDims,
        stations: usize,
        houses: Vec<GridCoord>,
        trees: Vec<GridCoord>,
    ) -> Result<Self, InvalidTestCaseError> {
        let mut occupied = OccupancySet::with_capacity(houses.len() + trees.len());
        for &c in houses.iter().chain(trees.iter()) {
            if !dims.contains(c) {
                return Err(CoordOutOfBoundsError::new(c, dims).into());
            }
            if !occupied.try_occupy(c) {
                return Err(DuplicateCoordError::new(c).into());
            }
        }
        Ok(Self {
            dims,
            stations,
            houses,
            trees,
        })
    }

    /// For callers that placed cells through an [`OccupancySet`] already.
    pub(crate) fn from_placed(
        dims: GridDims,
        stations: usize,
        houses: Vec<GridCoord>,
        trees: Vec<GridCoord>,
    ) -> Self {
        debug_assert!(Self::new(dims, stations, houses.clone(), trees.clone()).is_ok());
        Self {
            dims,
            stations,
            houses,
            trees,
        }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn stations(&self) -> usize {
        self.stations
    }

    #[inline]
    pub fn houses(&self) -> &[GridCoord] {
        &self.houses
    }

    #[inline]
    pub fn trees(&self) -> &[GridCoord] {
        &self.trees
    }

    #[inline]
    pub fn house_count(&self) -> usize {
        self.houses.len()
    }

    #[inline]
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Lines in the written file: two header lines plus one per cell.
    #[inline]
    pub fn line_count(&self) -> usize {
        2 + self.houses.len() + self.trees.len()
    }
}
