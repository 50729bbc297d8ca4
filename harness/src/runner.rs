//! Harness runner: build a named fixture world, search it, and report.
//!
//! # Pipeline
//!
//! ```text
//! WorldSpec → build world → Strategy::run(policy) → RunReport → digest
//! ```
//!
//! The runner owns no search logic; it only wires fixture worlds to the
//! engine and packages the result.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use wayfind_search::{CancelToken, SearchError, SearchPolicy, Strategy};

use crate::contract::{World, WorldError};
use crate::report::RunReport;
use crate::worlds::grid::{wall, GridProblem};
use crate::worlds::route::{romania_problem, RouteProblem};
use crate::worlds::terrain::{
    land_grid_small, random_land_grid, TerrainGridProblem, TerrainHeuristic,
};
use crate::worlds::wrap_grid::WrapGridProblem;

/// A fixture world the runner knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldSpec {
    /// [`romania_fixture`]
    Romania,
    /// [`wrap_grid_fixture`]
    WrapGrid,
    /// [`grid_fixture`]
    Grid,
    /// [`terrain_small_fixture`]
    TerrainSmall,
    /// [`terrain_random_fixture`]
    TerrainRandom,
}

/// Seed for [`WorldSpec::TerrainRandom`].
pub const TERRAIN_RANDOM_SEED: u64 = 30;

impl WorldSpec {
    pub const ALL: [Self; 5] = [
        Self::Romania,
        Self::WrapGrid,
        Self::Grid,
        Self::TerrainSmall,
        Self::TerrainRandom,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Romania => "romania",
            Self::WrapGrid => "wrap-grid",
            Self::Grid => "grid",
            Self::TerrainSmall => "terrain-small",
            Self::TerrainRandom => "terrain-random",
        }
    }
}

impl fmt::Display for WorldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorldSpec {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spec| spec.name() == s)
            .ok_or_else(|| RunError::UnknownWorld {
                name: s.to_string(),
            })
    }
}

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The fixture world could not be built.
    World(WorldError),
    /// The search rejected its policy.
    Search(SearchError),
    /// No fixture has this name.
    UnknownWorld { name: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World(e) => write!(f, "world construction failed: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::UnknownWorld { name } => write!(f, "unknown world: {name}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<WorldError> for RunError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Search `world` with `strategy` under `policy` and report the run.
///
/// # Errors
///
/// Returns [`RunError::Search`] if `policy` fails validation.
pub fn run_world<W: World>(
    world: &W,
    strategy: Strategy,
    policy: &SearchPolicy,
    cancel: Option<&CancelToken>,
) -> Result<RunReport, RunError> {
    debug!("run: world={} strategy={strategy}", world.world_id());
    let result = strategy.run(world, policy, cancel)?;
    let report = RunReport::from_result(world, strategy, policy, &result);
    info!(
        "run: world={} strategy={strategy} outcome={} expansions={}",
        report.world_id, report.outcome, report.stats.expansions
    );
    Ok(report)
}

/// Arad to Bucharest on the Romania road map.
///
/// # Errors
///
/// Fails only if the built-in map loses one of its endpoints.
pub fn romania_fixture() -> Result<RouteProblem, WorldError> {
    romania_problem("Arad", "Bucharest")
}

/// `(2, 2)` to `(7, 6)` on an open 10×10 wraparound grid.
///
/// # Errors
///
/// Fails only if the endpoints leave the grid.
pub fn wrap_grid_fixture() -> Result<WrapGridProblem, WorldError> {
    WrapGridProblem::new(10, (2, 2), (7, 6))
}

/// `(2, 2)` to `(20, 6)` with a wall at `x = 10` spanning `y` in `-5..=10`.
#[must_use]
pub fn grid_fixture() -> GridProblem {
    GridProblem::new((2, 2), (20, 6), wall(10, -5, 10))
}

/// `(2, 2)` to `(4, 4)` on the 5×5 mixed terrain.
///
/// # Errors
///
/// Fails only if the fixture grid is malformed.
pub fn terrain_small_fixture() -> Result<TerrainGridProblem, WorldError> {
    TerrainGridProblem::new(land_grid_small(), (2, 2), (4, 4))
}

/// `(2, 2)` to `(7, 6)` on a 10×10 terrain seeded with
/// [`TERRAIN_RANDOM_SEED`], searched with the Manhattan heuristic.
///
/// # Errors
///
/// Fails only if the generated grid is malformed.
pub fn terrain_random_fixture() -> Result<TerrainGridProblem, WorldError> {
    Ok(
        TerrainGridProblem::new(random_land_grid(10, TERRAIN_RANDOM_SEED), (2, 2), (7, 6))?
            .with_heuristic(TerrainHeuristic::Manhattan),
    )
}

/// Build the fixture named by `spec` and run it.
///
/// # Errors
///
/// Returns [`RunError::World`] if the fixture fails to build and
/// [`RunError::Search`] if `policy` fails validation.
pub fn run_named(
    spec: WorldSpec,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<RunReport, RunError> {
    match spec {
        WorldSpec::Romania => run_world(&romania_fixture()?, strategy, policy, None),
        WorldSpec::WrapGrid => run_world(&wrap_grid_fixture()?, strategy, policy, None),
        WorldSpec::Grid => run_world(&grid_fixture(), strategy, policy, None),
        WorldSpec::TerrainSmall => run_world(&terrain_small_fixture()?, strategy, policy, None),
        WorldSpec::TerrainRandom => run_world(&terrain_random_fixture()?, strategy, policy, None),
    }
}
