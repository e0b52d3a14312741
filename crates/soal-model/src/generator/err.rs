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

use soal_core::{EmptyGridError, GridDims};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioOutOfRangeError {
    name: &'static str,
    value: f64,
}

impl RatioOutOfRangeError {
    pub fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Display for RatioOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RatioOutOfRangeError: {} = {} is not within [0, 1]",
            self.name, self.value
        )
    }
}

impl std::error::Error for RatioOutOfRangeError {}

#[derive(Debug, Clone, PartialEq)]
pub enum GridGenConfigBuildError {
    EmptyGrid(EmptyGridError),
    RatioOutOfRange(RatioOutOfRangeError),
    ZeroHousesPerStation,
    MissingDims,
    MissingPlacementPolicy,
    MissingTreeRatio,
    MissingHousesPerStation,
}

impl Display for GridGenConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use GridGenConfigBuildError::*;
        match self {
            EmptyGrid(e) => write!(f, "{}", e),
            RatioOutOfRange(e) => write!(f, "{}", e),
            ZeroHousesPerStation => write!(f, "houses_per_station must be at least 1"),
            MissingDims => write!(f, "Missing dims"),
            MissingPlacementPolicy => write!(f, "Missing placement_policy"),
            MissingTreeRatio => write!(f, "Missing tree_ratio"),
            MissingHousesPerStation => write!(f, "Missing houses_per_station"),
        }
    }
}

impl From<EmptyGridError> for GridGenConfigBuildError {
    fn from(err: EmptyGridError) -> Self {
        Self::EmptyGrid(err)
    }
}

impl From<RatioOutOfRangeError> for GridGenConfigBuildError {
    fn from(err: RatioOutOfRangeError) -> Self {
        Self::RatioOutOfRange(err)
    }
}

impl std::error::Error for GridGenConfigBuildError {}

/// The grid cannot hold the requested houses and trees without overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceededError {
    dims: GridDims,
    houses: usize,
    trees: usize,
}

impl CapacityExceededError {
    pub fn new(dims: GridDims, houses: usize, trees: usize) -> Self {
        Self {
            dims,
            houses,
            trees,
        }
    }
    pub fn dims(&self) -> GridDims {
        self.dims
    }
    pub fn houses(&self) -> usize {
        self.houses
    }
    pub fn trees(&self) -> usize {
        self.trees
    }
}

impl Display for CapacityExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CapacityExceededError: {} houses + {} trees do not fit into the {} cells of a {} grid",
            self.houses,
            self.trees,
            self.dims.cells(),
            self.dims
        )
    }
}

impl std::error::Error for CapacityExceededError {}

#[derive(Debug)]
pub enum GenerateError {
    Config(GridGenConfigBuildError),
    Capacity(CapacityExceededError),
    Io(std::io::Error),
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Config(e) => write!(f, "{}", e),
            GenerateError::Capacity(e) => write!(f, "{}", e),
            GenerateError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Config(e) => Some(e),
            GenerateError::Capacity(e) => Some(e),
            GenerateError::Io(e) => Some(e),
        }
    }
}

impl From<GridGenConfigBuildError> for GenerateError {
    fn from(err: GridGenConfigBuildError) -> Self {
        Self::Config(err)
    }
}

impl From<EmptyGridError> for GenerateError {
    fn from(err: EmptyGridError) -> Self {
        Self::Config(err.into())
    }
}

impl From<CapacityExceededError> for GenerateError {
    fn from(err: CapacityExceededError) -> Self {
        Self::Capacity(err)
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
