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

/// How houses are scattered over the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementPolicy {
    /// `floor(cells · house_ratio)` houses drawn uniformly over the grid.
    Uniform { house_ratio: f64 },
    /// `clusters` random centers, each seeding up to `houses_per_cluster`
    /// houses in its neighbourhood.
    Clustered {
        clusters: usize,
        houses_per_cluster: usize,
    },
}

impl PlacementPolicy {
    #[inline]
    pub fn uniform(house_ratio: f64) -> Self {
        Self::Uniform { house_ratio }
    }

    #[inline]
    pub fn clustered(clusters: usize, houses_per_cluster: usize) -> Self {
        Self::Clustered {
            clusters,
            houses_per_cluster,
        }
    }

    #[inline]
    pub fn mode(&self) -> PlacementMode {
        match *self {
            PlacementPolicy::Uniform { .. } => PlacementMode::Uniform,
            PlacementPolicy::Clustered { clusters, .. } => PlacementMode::Clustered { clusters },
        }
    }
}

impl Display for PlacementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementPolicy::Uniform { house_ratio } => {
                write!(f, "Uniform {{ house_ratio: {:.4} }}", house_ratio)
            }
            PlacementPolicy::Clustered {
                clusters,
                houses_per_cluster,
            } => write!(
                f,
                "Clustered {{ clusters: {}, houses_per_cluster: {} }}",
                clusters, houses_per_cluster
            ),
        }
    }
}

/// The policy without its tuning knobs, as recorded in summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PlacementMode {
    Uniform,
    Clustered { clusters: usize },
}

impl Display for PlacementMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementMode::Uniform => write!(f, "uniform"),
            PlacementMode::Clustered { clusters } => write!(f, "clustered({})", clusters),
        }
    }
}
