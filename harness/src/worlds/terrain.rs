//! Path finding across a wraparound terrain grid with per-cell entry costs.
//!
//! Terrain values are the cost of stepping onto a cell (1 grass, 2 hill,
//! 3 mountain in the fixtures). Movement and wrapping follow
//! [`super::wrap_grid`]. The heuristics measure distance on the flat plane,
//! ignoring the seam: near the edges they can overestimate the true cost,
//! so A* on this world is not guaranteed optimal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wayfind_search::{Node, Problem};

use super::distance::{manhattan, straight_line, wrap};
use super::{point_json, Point, AXIS_DIRECTIONS};
use crate::contract::{World, WorldError};

/// Which flat-plane distance the heuristic uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TerrainHeuristic {
    #[default]
    StraightLine,
    Manhattan,
}

impl TerrainHeuristic {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::StraightLine => "straight_line",
            Self::Manhattan => "manhattan",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TerrainGridProblem {
    land: Vec<Vec<u8>>,
    size: i64,
    initial: Point,
    goal: Point,
    heuristic: TerrainHeuristic,
}

impl TerrainGridProblem {
    /// Create a terrain problem. `land[x][y]` is the cost of entering `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EmptyGrid`] for an empty grid,
    /// [`WorldError::RaggedGrid`] if the grid is not square,
    /// [`WorldError::GridTooLarge`] if its side does not fit in a coordinate,
    /// and [`WorldError::OutOfBounds`] if either endpoint lies off the grid.
    pub fn new(land: Vec<Vec<u8>>, initial: Point, goal: Point) -> Result<Self, WorldError> {
        if land.is_empty() {
            return Err(WorldError::EmptyGrid);
        }
        let expected = land.len();
        if let Some((row, cells)) = land.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(WorldError::RaggedGrid {
                row,
                expected,
                actual: cells.len(),
            });
        }
        let size = grid_side(expected)?;
        for point in [initial, goal] {
            if wrap(point, size) != point {
                return Err(WorldError::OutOfBounds { point, size });
            }
        }
        Ok(Self {
            land,
            size,
            initial,
            goal,
            heuristic: TerrainHeuristic::default(),
        })
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: TerrainHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Cost of entering `point`, after wrapping it onto the grid.
    // `wrap` keeps both coordinates in `0..size`, and `size` came from a usize.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn terrain(&self, point: Point) -> u8 {
        let (x, y) = wrap(point, self.size);
        self.land[x as usize][y as usize]
    }
}

fn grid_side(len: usize) -> Result<i64, WorldError> {
    i64::try_from(len).map_err(|_| WorldError::GridTooLarge { side: len })
}

impl Problem for TerrainGridProblem {
    type State = Point;
    type Action = Point;

    fn initial(&self) -> Point {
        self.initial
    }

    fn actions(&self, state: &Point) -> Vec<Point> {
        let (x, y) = *state;
        AXIS_DIRECTIONS
            .iter()
            .map(|&(dx, dy)| (x + dx, y + dy))
            .collect()
    }

    fn result(&self, _state: &Point, action: &Point) -> Point {
        wrap(*action, self.size)
    }

    fn goal(&self) -> Option<&Point> {
        Some(&self.goal)
    }

    fn action_cost(&self, _state: &Point, action: &Point, _next: &Point) -> f64 {
        f64::from(self.terrain(*action))
    }

    fn heuristic(&self, node: &Node<Point, Point>) -> f64 {
        match self.heuristic {
            TerrainHeuristic::StraightLine => straight_line(*node.state(), self.goal),
            TerrainHeuristic::Manhattan => manhattan(*node.state(), self.goal),
        }
    }
}

impl World for TerrainGridProblem {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "terrain"
    }

    fn state_json(&self, state: &Point) -> serde_json::Value {
        point_json(*state)
    }

    fn describe(&self) -> serde_json::Value {
        serde_json::json!({
            "goal": point_json(self.goal),
            "heuristic": self.heuristic.name(),
            "initial": point_json(self.initial),
            "land": self.land,
            "size": self.size,
        })
    }
}

/// A 5×5 mixed-terrain fixture.
#[must_use]
pub fn land_grid_small() -> Vec<Vec<u8>> {
    vec![
        vec![1, 1, 2, 3, 3],
        vec![1, 2, 1, 3, 1],
        vec![1, 1, 3, 1, 1],
        vec![2, 2, 2, 3, 3],
        vec![3, 1, 1, 1, 1],
    ]
}

/// An `n × n` grid of grass.
#[must_use]
pub fn uniform_land_grid(n: usize) -> Vec<Vec<u8>> {
    vec![vec![1; n]; n]
}

/// An `n × n` grid of random terrain in `1..=3`, reproducible from `seed`.
#[must_use]
pub fn random_land_grid(n: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(1..=3)).collect())
        .collect()
}
