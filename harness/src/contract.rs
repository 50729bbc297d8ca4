//! World contract: what the runner needs beyond the search problem itself.
//!
//! Worlds provide the domain (states, moves, costs, heuristics) through
//! [`wayfind_search::Problem`]. On top of that a world names itself and
//! renders states and its own configuration as JSON so that run reports can
//! be serialized canonically. Worlds do NOT hash or serialize reports
//! themselves; that is the runner's job.

use wayfind_search::Problem;

/// Typed failure for world construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// A route endpoint is not a vertex of the map.
    UnknownLocation { name: String },
    /// A grid has no cells.
    EmptyGrid,
    /// A terrain grid row has a different length than the grid height.
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A grid side is too long to index with `i64` coordinates.
    GridTooLarge { side: usize },
    /// A coordinate lies outside a bounded grid.
    OutOfBounds { point: (i64, i64), size: i64 },
    /// A start or goal cell is blocked.
    BlockedEndpoint { point: (i64, i64) },
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLocation { name } => write!(f, "unknown location: {name}"),
            Self::EmptyGrid => f.write_str("grid has no cells"),
            Self::RaggedGrid {
                row,
                expected,
                actual,
            } => write!(
                f,
                "terrain row {row} has {actual} cells, expected {expected}"
            ),
            Self::GridTooLarge { side } => write!(f, "grid side {side} exceeds i64 coordinates"),
            Self::OutOfBounds { point, size } => {
                write!(f, "point {point:?} outside {size}x{size} grid")
            }
            Self::BlockedEndpoint { point } => {
                write!(f, "start or goal {point:?} is an obstacle")
            }
        }
    }
}

impl std::error::Error for WorldError {}

/// The contract a world must implement to be run by the harness runner.
pub trait World: Problem {
    /// Unique world identifier (e.g., `"romania"`).
    fn world_id(&self) -> &str;

    /// Render a state for a run report.
    fn state_json(&self, state: &Self::State) -> serde_json::Value;

    /// Render the world configuration for a run report.
    ///
    /// Must contain only integers, strings, booleans, arrays and objects so
    /// that it canonicalizes.
    fn describe(&self) -> serde_json::Value;
}
