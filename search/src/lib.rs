//! Wayfind Search: deterministic best-first search over user-defined problems.
//!
//! This crate provides the search core. It depends on no other workspace
//! crate; domain problems live in `wayfind_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_search  ←  wayfind_harness
//! (engine, nodes)     (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`Problem`]: trait for search spaces (actions, transitions, goal, costs, heuristic)
//! - [`Node`]: immutable tree node with a shared parent chain
//! - [`Frontier`]: priority queue ordered by `(score, insertion order)`
//! - [`SearchOutcome`]: solution node or one of the `Failure` / `Cutoff` sentinels
//! - [`SearchPolicy`]: optional expansion and depth budgets
//! - [`Strategy`]: uniform-cost, breadth-first, greedy and A* by name

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod scorer;
pub mod search;

pub use contract::Problem;
pub use error::SearchError;
pub use frontier::{Frontier, FrontierKey};
pub use node::{path_actions, path_states, Node, NodeRef};
pub use policy::{CancelToken, SearchPolicy};
pub use scorer::{ParseStrategyError, Strategy};
pub use search::{
    astar_search, astar_search_with, best_first_search, breadth_first_search, expand,
    greedy_search, greedy_search_with, uniform_cost_search, SearchOutcome, SearchResult,
    SearchStats,
};
