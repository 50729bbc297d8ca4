//! Path finding on a `size × size` grid whose edges wrap around (a torus).
//!
//! Moves go one cell up, right, down or left. An action is the unwrapped
//! target coordinate, so stepping left from `(0, y)` is the action
//! `(-1, y)`, and `result` reduces it to `(size - 1, y)`. Every move costs 1
//! and the heuristic is the wraparound Manhattan distance, which is exact on
//! an open grid and therefore admissible and consistent.

use std::collections::BTreeSet;

use wayfind_search::{Node, Problem};

use super::distance::{wrap, wrap_manhattan};
use super::{point_json, Point, AXIS_DIRECTIONS};
use crate::contract::{World, WorldError};

#[derive(Debug, Clone)]
pub struct WrapGridProblem {
    size: i64,
    initial: Point,
    goal: Point,
    obstacles: BTreeSet<Point>,
}

impl WrapGridProblem {
    /// # Errors
    ///
    /// Returns [`WorldError::EmptyGrid`] for `size < 1` and
    /// [`WorldError::OutOfBounds`] if either endpoint lies off the grid.
    pub fn new(size: i64, initial: Point, goal: Point) -> Result<Self, WorldError> {
        if size < 1 {
            return Err(WorldError::EmptyGrid);
        }
        for point in [initial, goal] {
            if wrap(point, size) != point {
                return Err(WorldError::OutOfBounds { point, size });
            }
        }
        Ok(Self {
            size,
            initial,
            goal,
            obstacles: BTreeSet::new(),
        })
    }

    /// Block cells. Coordinates are wrapped onto the grid first.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BlockedEndpoint`] if the start or goal is listed.
    pub fn with_obstacles(
        mut self,
        obstacles: impl IntoIterator<Item = Point>,
    ) -> Result<Self, WorldError> {
        for point in obstacles {
            let point = wrap(point, self.size);
            if point == self.initial || point == self.goal {
                return Err(WorldError::BlockedEndpoint { point });
            }
            self.obstacles.insert(point);
        }
        Ok(self)
    }

    #[must_use]
    pub fn is_obstacle(&self, point: Point) -> bool {
        self.obstacles.contains(&wrap(point, self.size))
    }
}

impl Problem for WrapGridProblem {
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
            .filter(|&p| !self.is_obstacle(p))
            .collect()
    }

    fn result(&self, state: &Point, action: &Point) -> Point {
        if self.is_obstacle(*action) {
            *state
        } else {
            wrap(*action, self.size)
        }
    }

    fn goal(&self) -> Option<&Point> {
        Some(&self.goal)
    }

    fn heuristic(&self, node: &Node<Point, Point>) -> f64 {
        wrap_manhattan(*node.state(), self.goal, self.size)
    }
}

impl World for WrapGridProblem {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "wrap_grid"
    }

    fn state_json(&self, state: &Point) -> serde_json::Value {
        point_json(*state)
    }

    fn describe(&self) -> serde_json::Value {
        serde_json::json!({
            "goal": point_json(self.goal),
            "initial": point_json(self.initial),
            "obstacles": self.obstacles.iter().map(|&p| point_json(p)).collect::<Vec<_>>(),
            "size": self.size,
        })
    }
}
