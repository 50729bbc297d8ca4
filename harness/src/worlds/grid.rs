//! Path finding on an unbounded 2-D grid with obstacle cells.
//!
//! Moves go one cell in any of the eight king directions; both the step cost
//! and the heuristic are straight-line distance, so diagonal steps cost √2.
//! The grid has no edge: if the goal is walled in, search runs forever, so
//! callers that cannot rule that out should set an expansion budget.

use std::collections::BTreeSet;

use wayfind_search::{Node, Problem};

use super::distance::straight_line;
use super::{point_json, Point, KING_DIRECTIONS};
use crate::contract::World;

#[derive(Debug, Clone)]
pub struct GridProblem {
    initial: Point,
    goal: Point,
    obstacles: BTreeSet<Point>,
}

impl GridProblem {
    /// Create a grid problem. The start and goal cells are never obstacles,
    /// even if listed.
    #[must_use]
    pub fn new(initial: Point, goal: Point, obstacles: impl IntoIterator<Item = Point>) -> Self {
        let obstacles = obstacles
            .into_iter()
            .filter(|&p| p != initial && p != goal)
            .collect();
        Self {
            initial,
            goal,
            obstacles,
        }
    }

    #[must_use]
    pub fn is_obstacle(&self, point: Point) -> bool {
        self.obstacles.contains(&point)
    }
}

impl Problem for GridProblem {
    type State = Point;
    type Action = Point;

    fn initial(&self) -> Point {
        self.initial
    }

    fn actions(&self, state: &Point) -> Vec<Point> {
        let (x, y) = *state;
        KING_DIRECTIONS
            .iter()
            .map(|&(dx, dy)| (x + dx, y + dy))
            .filter(|&p| !self.is_obstacle(p))
            .collect()
    }

    fn result(&self, state: &Point, action: &Point) -> Point {
        if self.is_obstacle(*action) {
            *state
        } else {
            *action
        }
    }

    fn goal(&self) -> Option<&Point> {
        Some(&self.goal)
    }

    fn action_cost(&self, state: &Point, _action: &Point, next: &Point) -> f64 {
        straight_line(*state, *next)
    }

    fn heuristic(&self, node: &Node<Point, Point>) -> f64 {
        straight_line(*node.state(), self.goal)
    }
}

impl World for GridProblem {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "grid"
    }

    fn state_json(&self, state: &Point) -> serde_json::Value {
        point_json(*state)
    }

    fn describe(&self) -> serde_json::Value {
        serde_json::json!({
            "goal": point_json(self.goal),
            "initial": point_json(self.initial),
            "obstacles": self.obstacles.iter().map(|&p| point_json(p)).collect::<Vec<_>>(),
        })
    }
}

/// A vertical wall at `x` covering rows `y_min..=y_max`.
pub fn wall(x: i64, y_min: i64, y_max: i64) -> impl Iterator<Item = Point> {
    (y_min..=y_max).map(move |y| (x, y))
}
