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

use soal_core::{GridCoord, GridDims};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordOutOfBoundsError {
    coord: GridCoord,
    dims: GridDims,
}

impl CoordOutOfBoundsError {
    #[inline]
    pub fn new(coord: GridCoord, dims: GridDims) -> Self {
        Self { coord, dims }
    }

    #[inline]
    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }
}

impl Display for CoordOutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Coordinate {} lies outside the {} grid",
            self.coord, self.dims
        )
    }
}

impl std::error::Error for CoordOutOfBoundsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateCoordError {
    coord: GridCoord,
}

impl DuplicateCoordError {
    #[inline]
    pub fn new(coord: GridCoord) -> Self {
        Self { coord }
    }

    #[inline]
    pub fn coord(&self) -> GridCoord {
        self.coord
    }
}

impl Display for DuplicateCoordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coordinate {} is occupied more than once", self.coord)
    }
}

impl std::error::Error for DuplicateCoordError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidTestCaseError {
    OutOfBounds(CoordOutOfBoundsError),
    Duplicate(DuplicateCoordError),
}

impl Display for InvalidTestCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTestCaseError::OutOfBounds(e) => write!(f, "{}", e),
            InvalidTestCaseError::Duplicate(e) => write!(f, "{}", e),
        }
    }
}

impl From<CoordOutOfBoundsError> for InvalidTestCaseError {
    fn from(err: CoordOutOfBoundsError) -> Self {
        Self::OutOfBounds(err)
    }
}

impl From<DuplicateCoordError> for InvalidTestCaseError {
    fn from(err: DuplicateCoordError) -> Self {
        Self::Duplicate(err)
    }
}

impl std::error::Error for InvalidTestCaseError {}

/// Failure while reading a test-case file. Line numbers are 1-based.
#[derive(Debug)]
pub enum ParseTestCaseError {
    Io(std::io::Error),
    MissingLine {
        line: usize,
        expected: &'static str,
    },
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    InvalidInteger {
        line: usize,
        token: String,
    },
    EmptyGrid {
        line: usize,
    },
    TrailingData {
        line: usize,
    },
    Invalid(InvalidTestCaseError),
}

impl Display for ParseTestCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ParseTestCaseError::*;
        match self {
            Io(e) => write!(f, "I/O error while reading test case: {}", e),
            MissingLine { line, expected } => {
                write!(f, "Line {}: expected {}, found end of input", line, expected)
            }
            FieldCount {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {}: expected {} fields, found {}",
                line, expected, found
            ),
            InvalidInteger { line, token } => {
                write!(f, "Line {}: '{}' is not a non-negative integer", line, token)
            }
            EmptyGrid { line } => write!(f, "Line {}: grid dimensions must be at least 1", line),
            TrailingData { line } => write!(f, "Line {}: unexpected data after last tree", line),
            Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseTestCaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseTestCaseError::Io(e) => Some(e),
            ParseTestCaseError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseTestCaseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<InvalidTestCaseError> for ParseTestCaseError {
    fn from(err: InvalidTestCaseError) -> Self {
        Self::Invalid(err)
    }
}
