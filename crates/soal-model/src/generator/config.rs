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

use std::fmt::Display;

use rand::Rng;
use soal_core::GridDims;

use super::err::{GridGenConfigBuildError, RatioOutOfRangeError};
use super::policies::PlacementPolicy;

/// Configuration for synthetic grid test-case generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGenConfig {
    pub(crate) dims: GridDims,
    pub(crate) placement_policy: PlacementPolicy,
    pub(crate) tree_ratio: f64,
    pub(crate) houses_per_station: usize,

    pub(crate) cluster_radius: usize,
    pub(crate) cluster_attempts_mult: usize,
    pub(crate) rejection_bound_mult: usize,

    pub(crate) seed: u64,
}

fn check_ratio(name: &'static str, value: f64) -> Result<f64, RatioOutOfRangeError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(RatioOutOfRangeError::new(name, value))
    }
}

impl GridGenConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dims: GridDims,
        placement_policy: PlacementPolicy,
        tree_ratio: f64,
        houses_per_station: usize,
        cluster_radius: usize,
        cluster_attempts_mult: usize,
        rejection_bound_mult: usize,
        seed: u64,
    ) -> Result<Self, GridGenConfigBuildError> {
        if let PlacementPolicy::Uniform { house_ratio } = placement_policy {
            check_ratio("house_ratio", house_ratio)?;
        }
        check_ratio("tree_ratio", tree_ratio)?;
        if houses_per_station == 0 {
            return Err(GridGenConfigBuildError::ZeroHousesPerStation);
        }

        Ok(Self {
            dims,
            placement_policy,
            tree_ratio,
            houses_per_station,
            cluster_radius,
            cluster_attempts_mult,
            rejection_bound_mult,
            seed,
        })
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }
    #[inline]
    pub fn placement_policy(&self) -> &PlacementPolicy {
        &self.placement_policy
    }
    #[inline]
    pub fn tree_ratio(&self) -> f64 {
        self.tree_ratio
    }
    #[inline]
    pub fn houses_per_station(&self) -> usize {
        self.houses_per_station
    }
    #[inline]
    pub fn cluster_radius(&self) -> usize {
        self.cluster_radius
    }
    #[inline]
    pub fn cluster_attempts_mult(&self) -> usize {
        self.cluster_attempts_mult
    }
    #[inline]
    pub fn rejection_bound_mult(&self) -> usize {
        self.rejection_bound_mult
    }
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Display for GridGenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GridGenConfig {{ \
             dims: {}, placement_policy: {}, tree_ratio: {:.4}, houses_per_station: {}, \
             cluster_radius: {}, cluster_attempts_mult: {}, rejection_bound_mult: {}, seed: {} \
             }}",
            self.dims,
            self.placement_policy,
            self.tree_ratio,
            self.houses_per_station,
            self.cluster_radius,
            self.cluster_attempts_mult,
            self.rejection_bound_mult,
            self.seed
        )
    }
}

/// Builder for `GridGenConfig`.
pub struct GridGenConfigBuilder {
    // Required
    dims: Option<GridDims>,
    placement_policy: Option<PlacementPolicy>,
    tree_ratio: Option<f64>,
    houses_per_station: Option<usize>,

    // Optional with defaults
    cluster_radius: usize,
    cluster_attempts_mult: usize,
    rejection_bound_mult: usize,
    seed: u64,
}

impl Default for GridGenConfigBuilder {
    fn default() -> Self {
        Self {
            dims: None,
            placement_policy: None,
            tree_ratio: None,
            houses_per_station: None,

            cluster_radius: 5,
            cluster_attempts_mult: 10,
            rejection_bound_mult: 32,
            seed: rand::rng().random(),
        }
    }
}

impl GridGenConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn dims(mut self, v: GridDims) -> Self {
        self.dims = Some(v);
        self
    }

    #[inline]
    pub fn uniform(mut self, house_ratio: f64) -> Self {
        self.placement_policy = Some(PlacementPolicy::uniform(house_ratio));
        self
    }
    #[inline]
    pub fn clustered(mut self, clusters: usize, houses_per_cluster: usize) -> Self {
        self.placement_policy = Some(PlacementPolicy::clustered(clusters, houses_per_cluster));
        self
    }
    #[inline]
    pub fn placement_policy(mut self, v: PlacementPolicy) -> Self {
        self.placement_policy = Some(v);
        self
    }

    #[inline]
    pub fn tree_ratio(mut self, v: f64) -> Self {
        self.tree_ratio = Some(v);
        self
    }
    #[inline]
    pub fn houses_per_station(mut self, v: usize) -> Self {
        self.houses_per_station = Some(v);
        self
    }

    #[inline]
    pub fn cluster_radius(mut self, v: usize) -> Self {
        self.cluster_radius = v;
        self
    }
    #[inline]
    pub fn cluster_attempts_mult(mut self, v: usize) -> Self {
        self.cluster_attempts_mult = v;
        self
    }
    #[inline]
    pub fn rejection_bound_mult(mut self, v: usize) -> Self {
        self.rejection_bound_mult = v;
        self
    }
    #[inline]
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    pub fn build(self) -> Result<GridGenConfig, GridGenConfigBuildError> {
        use GridGenConfigBuildError::*;
        let dims = self.dims.ok_or(MissingDims)?;
        let placement_policy = self.placement_policy.ok_or(MissingPlacementPolicy)?;
        let tree_ratio = self.tree_ratio.ok_or(MissingTreeRatio)?;
        let houses_per_station = self.houses_per_station.ok_or(MissingHousesPerStation)?;

        GridGenConfig::new(
            dims,
            placement_policy,
            tree_ratio,
            houses_per_station,
            self.cluster_radius,
            self.cluster_attempts_mult,
            self.rejection_bound_mult,
            self.seed,
        )
    }
}
