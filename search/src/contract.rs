//! Search problem contract trait.

use std::hash::Hash;

use crate::node::Node;

/// Trait for problems that support search.
///
/// A problem describes an implicit graph: where it starts, which actions are
/// legal in each state, where they lead, what they cost, and which states are
/// goals. One problem value may be searched by several threads at once, so
/// every method takes `&self` and must not rely on interior mutation.
///
/// # Contract
///
/// - `actions` must return a finite list in a deterministic order: same state
///   → same actions in the same order. It should not offer a move back into
///   the same state unless the domain allows self-loops.
/// - `result` must be a pure function of `(state, action)`. The reached map
///   is keyed by the returned state, so a nondeterministic `result` corrupts
///   the search silently.
/// - `action_cost` must be non-negative. Path costs are then non-decreasing
///   along every parent chain.
/// - `heuristic` must be non-negative. For A* to return an optimal path it
///   must also be admissible (never overestimate the remaining cost); for the
///   first goal pop to be optimal without reopening states it must be
///   consistent (`h(n) <= cost(n, n') + h(n')` on every edge). The engine does
///   not verify either property: a violation degrades solution quality
///   without raising an error.
pub trait Problem {
    /// A configuration of the search space.
    type State: Clone + Eq + Hash;
    /// A transition out of a state.
    type Action: Clone;

    /// The state the search starts from.
    fn initial(&self) -> Self::State;

    /// Legal actions from `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by taking `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// The single goal state, if this problem has one.
    ///
    /// Problems with several or implicit goals return `None` and override
    /// [`Problem::is_goal`] instead.
    fn goal(&self) -> Option<&Self::State> {
        None
    }

    /// Test whether `state` satisfies the goal.
    ///
    /// Defaults to equality with [`Problem::goal`].
    fn is_goal(&self, state: &Self::State) -> bool {
        self.goal().is_some_and(|goal| goal == state)
    }

    /// Cost of moving from `state` to `next` by `action`. Defaults to 1.
    fn action_cost(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> f64 {
        let _ = (state, action, next);
        1.0
    }

    /// Estimated cost from `node` to the nearest goal. Defaults to 0.
    fn heuristic(&self, node: &Node<Self::State, Self::Action>) -> f64 {
        let _ = node;
        0.0
    }
}
