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

//! # Grid Test-Case Model (`soal-model`)
//!
//! Synthetic inputs for a fire-station placement exercise: an `m × n` grid
//! holding houses and trees on distinct cells, plus the number of stations
//! needed to serve the houses.
//!
//! ## Key Data Structures
//!
//! - **`TestCase`**: one generated input. Dimensions, station count, and the
//!   ordered house and tree cells. Construction checks that every cell is on
//!   the grid and used once.
//!
//! - **`GridGenConfig`** / **`GridGenConfigBuilder`**: validated parameters
//!   for a generation run, including the `PlacementPolicy` (uniform scatter
//!   or clustered around random centers) and the RNG seed.
//!
//! - **`GridGenerator`**: draws a `Generation` from a config. The same seed
//!   always yields the same test case.
//!
//! ## Text Format
//!
//! `TestCase::write_to` / `TestCase::read_from` implement the plain-text
//! layout consumed by solvers: `m n`, then `p h t`, then one `x y` line per
//! house followed by one per tree.

pub mod codec;
pub mod err;
pub mod generator;
pub mod testcase;

pub mod prelude {
    pub use crate::err::{
        CoordOutOfBoundsError, DuplicateCoordError, InvalidTestCaseError, ParseTestCaseError,
    };
    pub use crate::generator::{
        CapacityExceededError, ClusterPlacement, GenerateError, Generation, GenerationSummary,
        GridGenConfig, GridGenConfigBuildError, GridGenConfigBuilder, GridGenerator,
        PlacementMode, PlacementPolicy, RatioOutOfRangeError, generate_clustered,
        generate_random, generate_to_file, ratio_count, station_count,
    };
    pub use crate::testcase::TestCase;
    pub use soal_core::{GridCoord, GridDims};
}
