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

mod config;
mod err;
mod policies;

pub use config::{GridGenConfig, GridGenConfigBuilder};
pub use err::{
    CapacityExceededError, GenerateError, GridGenConfigBuildError, RatioOutOfRangeError,
};
pub use policies::{PlacementMode, PlacementPolicy};

use crate::testcase::TestCase;
use num_traits::NumCast;
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};
use serde::Serialize;
use soal_core::{CellWindow, CoordOffset, GridCoord, GridDims, OccupancySet};
use std::{fmt::Display, path::Path};
use tracing::{debug, info, instrument, warn};

/// `floor(cells · ratio)`.
#[inline]
pub fn ratio_count(cells: usize, ratio: f64) -> usize {
    let cells_f: f64 = NumCast::from(cells).unwrap_or(f64::MAX);
    NumCast::from((cells_f * ratio).floor()).unwrap_or(0)
}

/// Fire stations needed for `houses`, never fewer than one.
#[inline]
pub fn station_count(houses: usize, houses_per_station: usize) -> usize {
    (houses / houses_per_station.max(1)).max(1)
}

/// Houses seeded by one cluster center, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterPlacement {
    center: GridCoord,
    window: CellWindow,
    houses: Vec<GridCoord>,
    attempts: usize,
}

impl ClusterPlacement {
    #[inline]
    pub fn center(&self) -> GridCoord {
        self.center
    }
    /// Cells reachable from the center after clamping.
    #[inline]
    pub fn window(&self) -> CellWindow {
        self.window
    }
    #[inline]
    pub fn houses(&self) -> &[GridCoord] {
        &self.houses
    }
    #[inline]
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    test_case: TestCase,
    clusters: Vec<ClusterPlacement>,
    mode: PlacementMode,
    seed: u64,
}

impl Generation {
    #[inline]
    pub fn test_case(&self) -> &TestCase {
        &self.test_case
    }
    #[inline]
    pub fn into_test_case(self) -> TestCase {
        self.test_case
    }
    /// Empty for uniform placement.
    #[inline]
    pub fn clusters(&self) -> &[ClusterPlacement] {
        &self.clusters
    }
    #[inline]
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn summary(&self, file: impl Into<String>) -> GenerationSummary {
        GenerationSummary {
            file: file.into(),
            mode: self.mode,
            dims: self.test_case.dims(),
            stations: self.test_case.stations(),
            houses: self.test_case.house_count(),
            trees: self.test_case.tree_count(),
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub file: String,
    pub mode: PlacementMode,
    pub dims: GridDims,
    pub stations: usize,
    pub houses: usize,
    pub trees: usize,
    pub seed: u64,
}

impl Display for GenerationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Generated {}: {} grid, ", self.file, self.dims)?;
        if let PlacementMode::Clustered { clusters } = self.mode {
            write!(f, "{} clusters, ", clusters)?;
        }
        write!(
            f,
            "{} houses, {} trees, {} stations",
            self.houses, self.trees, self.stations
        )
    }
}

pub struct GridGenerator {
    config: GridGenConfig,
    rng: ChaCha8Rng,
    row_distribution: Uniform<usize>,
    col_distribution: Uniform<usize>,
    offset_distribution: Uniform<i64>,
    radius: usize,
}

impl From<GridGenConfig> for GridGenerator {
    fn from(config: GridGenConfig) -> Self {
        Self::new(config)
    }
}

impl GridGenerator {
    pub fn new(config: GridGenConfig) -> Self {
        let dims = config.dims();
        let radius = config.cluster_radius();
        let signed_radius = i64::try_from(radius).unwrap_or(i64::MAX);
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed()),
            row_distribution: Uniform::new_inclusive(1, dims.rows())
                .expect("GridDims guarantees at least one row"),
            col_distribution: Uniform::new_inclusive(1, dims.cols())
                .expect("GridDims guarantees at least one column"),
            offset_distribution: Uniform::new_inclusive(-signed_radius, signed_radius)
                .expect("valid [-radius, radius]"),
            radius,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &GridGenConfig {
        &self.config
    }

    #[inline]
    fn sample_cell(&mut self) -> GridCoord {
        let x = self.row_distribution.sample(&mut self.rng);
        let y = self.col_distribution.sample(&mut self.rng);
        GridCoord::new(x, y)
    }

    #[inline]
    fn sample_offset(&mut self) -> CoordOffset {
        let dx = self.offset_distribution.sample(&mut self.rng);
        let dy = self.offset_distribution.sample(&mut self.rng);
        CoordOffset::new(dx, dy)
    }

    fn check_capacity(&self, houses: usize, trees: usize) -> Result<(), CapacityExceededError> {
        let dims = self.config.dims();
        if houses.saturating_add(trees) > dims.cells() {
            return Err(CapacityExceededError::new(dims, houses, trees));
        }
        Ok(())
    }

    /// Places `count` new cells uniformly over the grid.
    ///
    /// Draws with rejection against `occupied` until a bound of
    /// `max(count · rejection_bound_mult, cells)` draws is spent, then takes
    /// whatever is still missing from a shuffle of the free cells. The caller
    /// must have checked that enough free cells exist.
    fn place_uniform(&mut self, occupied: &mut OccupancySet, count: usize) -> Vec<GridCoord> {
        let dims = self.config.dims();
        let bound = count
            .saturating_mul(self.config.rejection_bound_mult())
            .max(dims.cells());

        let mut placed = Vec::with_capacity(count);
        let mut draws = 0usize;
        while placed.len() < count && draws < bound {
            draws += 1;
            let cell = self.sample_cell();
            if occupied.try_occupy(cell) {
                placed.push(cell);
            }
        }

        if placed.len() < count {
            let missing = count - placed.len();
            debug!(missing, draws, "Rejection bound reached; drawing from free cells");
            let mut free: Vec<GridCoord> = occupied.free_cells(&dims).collect();
            free.shuffle(&mut self.rng);
            for cell in free.into_iter().take(missing) {
                occupied.try_occupy(cell);
                placed.push(cell);
            }
        }

        placed
    }

    fn place_clustered(
        &mut self,
        occupied: &mut OccupancySet,
        clusters: usize,
        houses_per_cluster: usize,
    ) -> Vec<ClusterPlacement> {
        let dims = self.config.dims();
        let max_attempts = houses_per_cluster.saturating_mul(self.config.cluster_attempts_mult());

        // Centers are seeds only and never occupy a cell themselves.
        let centers: Vec<GridCoord> = (0..clusters).map(|_| self.sample_cell()).collect();

        let mut placements = Vec::with_capacity(clusters);
        for (index, center) in centers.into_iter().enumerate() {
            let mut houses = Vec::with_capacity(houses_per_cluster);
            let mut attempts = 0usize;
            while houses.len() < houses_per_cluster && attempts < max_attempts {
                let offset = self.sample_offset();
                let cell = dims.offset(center, offset);
                if occupied.try_occupy(cell) {
                    houses.push(cell);
                }
                attempts += 1;
            }

            if houses.len() < houses_per_cluster {
                warn!(
                    cluster = index,
                    %center,
                    placed = houses.len(),
                    requested = houses_per_cluster,
                    attempts,
                    "Cluster gave up before reaching its quota"
                );
            }

            placements.push(ClusterPlacement {
                center,
                window: dims.window(center, self.radius),
                houses,
                attempts,
            });
        }
        placements
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(dims = %self.config.dims(), policy = %self.config.placement_policy(), seed = self.config.seed()),
        err(Display)
    )]
    pub fn generate(&mut self) -> Result<Generation, CapacityExceededError> {
        let dims = self.config.dims();
        let tree_count = ratio_count(dims.cells(), self.config.tree_ratio());
        let mut occupied = OccupancySet::new();

        let policy = *self.config.placement_policy();
        let (houses, clusters) = match policy {
            PlacementPolicy::Uniform { house_ratio } => {
                let house_count = ratio_count(dims.cells(), house_ratio);
                self.check_capacity(house_count, tree_count)?;
                (self.place_uniform(&mut occupied, house_count), Vec::new())
            }
            PlacementPolicy::Clustered {
                clusters,
                houses_per_cluster,
            } => {
                let placements = self.place_clustered(&mut occupied, clusters, houses_per_cluster);
                let houses: Vec<GridCoord> = placements
                    .iter()
                    .flat_map(|p| p.houses.iter().copied())
                    .collect();
                self.check_capacity(houses.len(), tree_count)?;
                (houses, placements)
            }
        };

        let trees = self.place_uniform(&mut occupied, tree_count);
        let stations = station_count(houses.len(), self.config.houses_per_station());
        debug!(
            houses = houses.len(),
            trees = trees.len(),
            stations,
            "Placement complete"
        );

        Ok(Generation {
            test_case: TestCase::from_placed(dims, stations, houses, trees),
            clusters,
            mode: policy.mode(),
            seed: self.config.seed(),
        })
    }
}

/// Generates a test case from `config` and writes it to `path`.
///
/// Nothing is written if the grid cannot hold the requested cells. A write
/// failure may leave a partial file behind.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display(), seed = config.seed()))]
pub fn generate_to_file<P: AsRef<Path>>(
    path: P,
    config: GridGenConfig,
) -> Result<GenerationSummary, GenerateError> {
    let mut generator = GridGenerator::new(config);
    let generation = generator.generate()?;
    generation.test_case().write_file(&path)?;
    let summary = generation.summary(path.as_ref().display().to_string());
    info!(
        houses = summary.houses,
        trees = summary.trees,
        stations = summary.stations,
        "Test case written"
    );
    Ok(summary)
}

/// Uniform scatter: `floor(m·n·house_ratio)` houses and
/// `floor(m·n·tree_ratio)` trees.
#[allow(clippy::too_many_arguments)]
pub fn generate_random<P: AsRef<Path>>(
    path: P,
    rows: usize,
    cols: usize,
    house_ratio: f64,
    tree_ratio: f64,
    houses_per_station: usize,
    seed: u64,
) -> Result<GenerationSummary, GenerateError> {
    let config = GridGenConfigBuilder::new()
        .dims(GridDims::new(rows, cols)?)
        .uniform(house_ratio)
        .tree_ratio(tree_ratio)
        .houses_per_station(houses_per_station)
        .seed(seed)
        .build()?;
    generate_to_file(path, config)
}

/// Clustered scatter: up to `houses_per_cluster` houses around each of
/// `clusters` random centers, then uniform trees.
#[allow(clippy::too_many_arguments)]
pub fn generate_clustered<P: AsRef<Path>>(
    path: P,
    rows: usize,
    cols: usize,
    clusters: usize,
    houses_per_cluster: usize,
    tree_ratio: f64,
    houses_per_station: usize,
    seed: u64,
) -> Result<GenerationSummary, GenerateError> {
    let config = GridGenConfigBuilder::new()
        .dims(GridDims::new(rows, cols)?)
        .clustered(clusters, houses_per_cluster)
        .tree_ratio(tree_ratio)
        .houses_per_station(houses_per_station)
        .seed(seed)
        .build()?;
    generate_to_file(path, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn uniform_cfg(m: usize, n: usize, house: f64, tree: f64, per: usize, seed: u64) -> GridGenConfig {
        GridGenConfigBuilder::new()
            .dims(GridDims::new(m, n).unwrap())
            .uniform(house)
            .tree_ratio(tree)
            .houses_per_station(per)
            .seed(seed)
            .build()
            .unwrap()
    }

    fn clustered_cfg(
        m: usize,
        n: usize,
        clusters: usize,
        per_cluster: usize,
        tree: f64,
        per: usize,
        seed: u64,
    ) -> GridGenConfig {
        GridGenConfigBuilder::new()
            .dims(GridDims::new(m, n).unwrap())
            .clustered(clusters, per_cluster)
            .tree_ratio(tree)
            .houses_per_station(per)
            .seed(seed)
            .build()
            .unwrap()
    }

    fn assert_disjoint_and_in_bounds(tc: &TestCase) {
        let dims = tc.dims();
        let mut seen = HashSet::new();
        for c in tc.houses().iter().chain(tc.trees()) {
            assert!(dims.contains(*c), "{c} outside {dims}");
            assert!(seen.insert(*c), "{c} placed twice");
        }
    }

    #[test]
    fn ratio_count_floors() {
        assert_eq!(ratio_count(400, 0.15), 60);
        assert_eq!(ratio_count(400, 0.20), 80);
        assert_eq!(ratio_count(400, 0.18), 72);
        assert_eq!(ratio_count(1600, 0.23), 368);
        assert_eq!(ratio_count(10, 0.25), 2);
        assert_eq!(ratio_count(10, 0.0), 0);
        assert_eq!(ratio_count(10, 1.0), 10);
    }

    #[test]
    fn station_count_never_below_one() {
        assert_eq!(station_count(60, 20), 3);
        assert_eq!(station_count(59, 20), 2);
        assert_eq!(station_count(5, 20), 1);
        assert_eq!(station_count(0, 20), 1);
    }

    #[test]
    fn uniform_counts_match_ratios() {
        let mut generator = GridGenerator::new(uniform_cfg(20, 20, 0.15, 0.20, 20, 42));
        let generation = generator.generate().unwrap();
        let tc = generation.test_case();

        assert_eq!(tc.house_count(), 60);
        assert_eq!(tc.tree_count(), 80);
        assert_eq!(tc.stations(), 3);
        assert_eq!(tc.line_count(), 142);
        assert!(generation.clusters().is_empty());
        assert_eq!(generation.mode(), PlacementMode::Uniform);
        assert_disjoint_and_in_bounds(tc);
    }

    #[test]
    fn same_seed_same_output() {
        let a = GridGenerator::new(uniform_cfg(40, 40, 0.18, 0.23, 18, 7))
            .generate()
            .unwrap();
        let b = GridGenerator::new(uniform_cfg(40, 40, 0.18, 0.23, 18, 7))
            .generate()
            .unwrap();
        assert_eq!(a, b);

        let c = GridGenerator::new(uniform_cfg(40, 40, 0.18, 0.23, 18, 8))
            .generate()
            .unwrap();
        assert_ne!(a.test_case(), c.test_case());
    }

    #[test]
    fn capacity_overflow_is_an_error() {
        let mut generator = GridGenerator::new(uniform_cfg(4, 4, 0.75, 0.5, 1, 1));
        let err = generator.generate().unwrap_err();
        assert_eq!(err.houses(), 12);
        assert_eq!(err.trees(), 8);
        assert_eq!(err.dims().cells(), 16);
    }

    #[test]
    fn fully_packed_grid_terminates() {
        // 4 houses + 5 trees on 9 cells.
        for mult in [0, 1, 32] {
            let cfg = GridGenConfigBuilder::new()
                .dims(GridDims::new(3, 3).unwrap())
                .uniform(0.5)
                .tree_ratio(0.56)
                .houses_per_station(2)
                .rejection_bound_mult(mult)
                .seed(3)
                .build()
                .unwrap();
            let generation = GridGenerator::new(cfg).generate().unwrap();
            let tc = generation.test_case();
            assert_eq!(tc.house_count(), 4);
            assert_eq!(tc.tree_count(), 5);
            assert_eq!(tc.stations(), 2);
            assert_disjoint_and_in_bounds(tc);
        }
    }

    #[test]
    fn clustered_houses_stay_near_their_center() {
        let mut generator = GridGenerator::new(clustered_cfg(30, 30, 3, 20, 0.22, 18, 11));
        let generation = generator.generate().unwrap();
        let tc = generation.test_case();

        assert_eq!(generation.clusters().len(), 3);
        assert!(tc.house_count() <= 3 * 20);
        assert_eq!(tc.tree_count(), 198);
        assert_eq!(tc.stations(), station_count(tc.house_count(), 18));

        let mut concatenated = Vec::new();
        for cluster in generation.clusters() {
            let center = cluster.center();
            assert!(cluster.houses().len() <= 20);
            assert!(cluster.attempts() <= 20 * 10);
            for &h in cluster.houses() {
                assert!(cluster.window().contains(h));
                assert!(h.x() >= center.x().saturating_sub(5).max(1));
                assert!(h.x() <= (center.x() + 5).min(30));
                assert!(h.y() >= center.y().saturating_sub(5).max(1));
                assert!(h.y() <= (center.y() + 5).min(30));
            }
            concatenated.extend_from_slice(cluster.houses());
        }
        assert_eq!(concatenated.as_slice(), tc.houses());
        assert_disjoint_and_in_bounds(tc);
    }

    #[test]
    fn offsets_cover_the_full_radius() {
        let mut generator = GridGenerator::new(clustered_cfg(20, 20, 1, 10, 0.0, 18, 13));
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            let offset = generator.sample_offset();
            assert!((-5..=5).contains(&offset.dx()), "{offset}");
            assert!((-5..=5).contains(&offset.dy()), "{offset}");
            seen.insert(offset.dx());
        }
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn small_grid_keeps_the_configured_radius() {
        // Jitter on a 3x3 grid still spans [-5, 5] and is clamped afterwards.
        let mut generator = GridGenerator::new(clustered_cfg(3, 3, 1, 4, 0.0, 2, 21));
        let mut extremes = (false, false);
        for _ in 0..2_000 {
            let offset = generator.sample_offset();
            extremes.0 |= offset.dx() == -5;
            extremes.1 |= offset.dx() == 5;
        }
        assert_eq!(extremes, (true, true));

        let generation = generator.generate().unwrap();
        assert_disjoint_and_in_bounds(generation.test_case());
    }

    #[test]
    fn saturated_cluster_places_fewer_houses() {
        // A radius-1 window holds at most 9 cells.
        let cfg = GridGenConfigBuilder::new()
            .dims(GridDims::new(10, 10).unwrap())
            .clustered(1, 50)
            .tree_ratio(0.0)
            .houses_per_station(4)
            .cluster_radius(1)
            .seed(5)
            .build()
            .unwrap();
        let generation = GridGenerator::new(cfg).generate().unwrap();
        let cluster = &generation.clusters()[0];

        assert!(cluster.houses().len() <= 9);
        assert!(cluster.houses().len() < 50);
        assert_eq!(cluster.attempts(), 500);
        assert_eq!(generation.test_case().tree_count(), 0);
    }

    #[test]
    fn no_clusters_means_no_houses_and_one_station() {
        let generation = GridGenerator::new(clustered_cfg(10, 10, 0, 30, 0.1, 18, 2))
            .generate()
            .unwrap();
        let tc = generation.test_case();
        assert_eq!(tc.house_count(), 0);
        assert_eq!(tc.tree_count(), 10);
        assert_eq!(tc.stations(), 1);
    }

    #[test]
    fn summary_lines() {
        let generation = GridGenerator::new(uniform_cfg(20, 20, 0.15, 0.20, 20, 1))
            .generate()
            .unwrap();
        assert_eq!(
            generation.summary("t.txt").to_string(),
            "Generated t.txt: 20x20 grid, 60 houses, 80 trees, 3 stations"
        );

        let summary = GenerationSummary {
            file: "c.txt".into(),
            mode: PlacementMode::Clustered { clusters: 3 },
            dims: GridDims::new(30, 30).unwrap(),
            stations: 3,
            houses: 58,
            trees: 198,
            seed: 9,
        };
        assert_eq!(
            summary.to_string(),
            "Generated c.txt: 30x30 grid, 3 clusters, 58 houses, 198 trees, 3 stations"
        );
    }
}
