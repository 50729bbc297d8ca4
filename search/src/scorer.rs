//! Frontier scoring functions and the named search strategies.
//!
//! Every named strategy is the same best-first engine with a different score:
//!
//! | strategy | score `f(n)` |
//! |---|---|
//! | uniform-cost | `path_cost(n)` |
//! | breadth-first | `depth(n)` |
//! | greedy | `h(n)` |
//! | A* | `path_cost(n) + h(n)` |

use std::fmt;
use std::str::FromStr;

use crate::contract::Problem;
use crate::error::SearchError;
use crate::node::Node;
use crate::policy::{CancelToken, SearchPolicy};
use crate::search::{best_first_search, SearchResult};

/// `f(n) = path_cost(n)`.
#[must_use]
pub fn path_cost<S, A>(node: &Node<S, A>) -> f64 {
    node.path_cost()
}

/// `f(n) = depth(n)`.
///
/// Ordering by depth alone leaves every node of one layer tied; the frontier
/// breaks those ties by insertion order, which is what makes this score
/// expand layers first-in first-out like a queue-based breadth-first search.
#[must_use]
pub fn depth<S, A>(node: &Node<S, A>) -> f64 {
    f64::from(node.depth())
}

/// A named scoring function for the best-first engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    UniformCost,
    BreadthFirst,
    Greedy,
    AStar,
}

impl Strategy {
    /// All strategies, in a fixed order.
    pub const ALL: [Self; 4] = [
        Self::UniformCost,
        Self::BreadthFirst,
        Self::Greedy,
        Self::AStar,
    ];

    /// Stable name used on the command line and in reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::UniformCost => "uniform-cost",
            Self::BreadthFirst => "breadth-first",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }

    /// Whether the score consults [`Problem::heuristic`].
    #[must_use]
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Self::Greedy | Self::AStar)
    }

    /// Run this strategy on `problem` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
    pub fn run<P: Problem>(
        self,
        problem: &P,
        policy: &SearchPolicy,
        cancel: Option<&CancelToken>,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        match self {
            Self::UniformCost => {
                best_first_search(problem, path_cost::<P::State, P::Action>, policy, cancel)
            }
            Self::BreadthFirst => {
                best_first_search(problem, depth::<P::State, P::Action>, policy, cancel)
            }
            Self::Greedy => best_first_search(
                problem,
                |n: &Node<P::State, P::Action>| problem.heuristic(n),
                policy,
                cancel,
            ),
            Self::AStar => best_first_search(
                problem,
                |n: &Node<P::State, P::Action>| n.path_cost() + problem.heuristic(n),
                policy,
                cancel,
            ),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a strategy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    pub name: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search strategy {:?} (expected one of: uniform-cost, breadth-first, greedy, astar)",
            self.name
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform-cost" | "ucs" => Ok(Self::UniformCost),
            "breadth-first" | "bfs" => Ok(Self::BreadthFirst),
            "greedy" => Ok(Self::Greedy),
            "astar" | "a*" => Ok(Self::AStar),
            other => Err(ParseStrategyError {
                name: other.to_string(),
            }),
        }
    }
}
