//! Shared helpers for wayfind benchmark suites.

use wayfind_harness::runner::{
    grid_fixture, romania_fixture, terrain_random_fixture, terrain_small_fixture,
    wrap_grid_fixture, WorldSpec,
};
use wayfind_harness::worlds::grid::GridProblem;
use wayfind_harness::worlds::route::RouteProblem;
use wayfind_harness::worlds::terrain::TerrainGridProblem;
use wayfind_harness::worlds::wrap_grid::WrapGridProblem;
use wayfind_search::{SearchPolicy, SearchStats, Strategy};

/// A fixture world built once, so that benchmarks time only the search.
pub enum PreparedWorld {
    Route(RouteProblem),
    WrapGrid(WrapGridProblem),
    Grid(GridProblem),
    Terrain(TerrainGridProblem),
}

impl PreparedWorld {
    /// Build the same world `run_named` would build for `spec`.
    ///
    /// # Panics
    ///
    /// Panics if the fixture fails to build. Benchmark setup failures are fatal.
    #[must_use]
    pub fn build(spec: WorldSpec) -> Self {
        match spec {
            WorldSpec::Romania => Self::Route(romania_fixture().expect("romania fixture")),
            WorldSpec::WrapGrid => Self::WrapGrid(wrap_grid_fixture().expect("wrap grid fixture")),
            WorldSpec::Grid => Self::Grid(grid_fixture()),
            WorldSpec::TerrainSmall => {
                Self::Terrain(terrain_small_fixture().expect("terrain fixture"))
            }
            WorldSpec::TerrainRandom => {
                Self::Terrain(terrain_random_fixture().expect("terrain fixture"))
            }
        }
    }

    /// Run `strategy` without building a report.
    ///
    /// # Panics
    ///
    /// Panics if `policy` is invalid.
    #[must_use]
    pub fn search(&self, strategy: Strategy, policy: &SearchPolicy) -> SearchStats {
        match self {
            Self::Route(p) => strategy.run(p, policy, None).expect("search").stats,
            Self::WrapGrid(p) => strategy.run(p, policy, None).expect("search").stats,
            Self::Grid(p) => strategy.run(p, policy, None).expect("search").stats,
            Self::Terrain(p) => strategy.run(p, policy, None).expect("search").stats,
        }
    }
}

/// An open `size × size` wraparound grid with the goal as far from the
/// start as the torus allows.
///
/// # Panics
///
/// Panics if `size < 1`.
#[must_use]
pub fn open_wrap_grid(size: i64) -> WrapGridProblem {
    WrapGridProblem::new(size, (0, 0), (size / 2, size / 2)).expect("wrap grid")
}
