//! Search entry points and expansion loop.
//!
//! One engine, [`best_first_search`], repeatedly pops the lowest-scored node,
//! tests it for the goal, and expands it. The named entry points differ only
//! in the scoring function they hand to the engine.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace, warn};

use crate::contract::Problem;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{path_actions, path_states, Node, NodeRef};
use crate::policy::{CancelToken, SearchPolicy};
use crate::scorer;

/// How a search run ended.
///
/// `Failure` and `Cutoff` are the two sentinel outcomes: they carry no node,
/// report an infinite path cost and reconstruct to empty paths, so callers
/// can chain path reconstruction without checking first.
#[derive(Debug)]
pub enum SearchOutcome<S, A> {
    /// A goal node was popped from the frontier.
    Solution(NodeRef<S, A>),
    /// The frontier emptied without reaching a goal.
    Failure,
    /// The run was abandoned by a policy budget before the space was exhausted.
    Cutoff,
    /// The run observed a cancelled [`CancelToken`].
    Cancelled,
}

impl<S, A> Clone for SearchOutcome<S, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Solution(node) => Self::Solution(Arc::clone(node)),
            Self::Failure => Self::Failure,
            Self::Cutoff => Self::Cutoff,
            Self::Cancelled => Self::Cancelled,
        }
    }
}

impl<S, A> SearchOutcome<S, A> {
    /// The solution node, if any.
    #[must_use]
    pub fn node(&self) -> Option<&NodeRef<S, A>> {
        match self {
            Self::Solution(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_solution(&self) -> bool {
        matches!(self, Self::Solution(_))
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }

    /// Path cost of the solution; `+inf` for every non-solution outcome.
    #[must_use]
    pub fn path_cost(&self) -> f64 {
        self.node().map_or(f64::INFINITY, |n| n.path_cost())
    }

    /// Stable lowercase name of the outcome kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Solution(_) => "solution",
            Self::Failure => "failure",
            Self::Cutoff => "cutoff",
            Self::Cancelled => "cancelled",
        }
    }
}

impl<S: Clone, A> SearchOutcome<S, A> {
    /// Root-to-goal states; empty unless this is a solution.
    #[must_use]
    pub fn path_states(&self) -> Vec<S> {
        self.node().map(|n| path_states(n)).unwrap_or_default()
    }
}

impl<S, A: Clone> SearchOutcome<S, A> {
    /// Root-to-goal actions; empty unless this is a solution.
    #[must_use]
    pub fn path_actions(&self) -> Vec<A> {
        self.node().map(|n| path_actions(n)).unwrap_or_default()
    }
}

impl<S, A> fmt::Display for SearchOutcome<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solution(node) => write!(
                f,
                "solution (depth {}, cost {})",
                node.depth(),
                node.path_cost()
            ),
            other => f.write_str(other.kind()),
        }
    }
}

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (the goal pop is not an expansion).
    pub expansions: u64,
    /// Children produced by expansion, whether kept or not.
    pub generated: u64,
    /// Children that replaced a costlier reached-map entry for their state.
    pub reinserted: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
}

/// Result of a search execution.
///
/// Always contains the reached map regardless of how the search terminated.
#[derive(Debug)]
pub struct SearchResult<S, A> {
    /// The terminal outcome.
    pub outcome: SearchOutcome<S, A>,
    /// Cheapest node found for every state the run reached.
    pub reached: HashMap<S, NodeRef<S, A>>,
    pub stats: SearchStats,
}

impl<S, A> SearchResult<S, A> {
    /// Returns `true` if the search terminated because a goal was popped.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.outcome.is_solution()
    }

    /// The solution node, if any.
    #[must_use]
    pub fn solution(&self) -> Option<&NodeRef<S, A>> {
        self.outcome.node()
    }
}

/// Expand `node`, producing one child per legal action.
///
/// The sequence is lazy and restartable: calling `expand` again on the same
/// problem and node yields an equal, independent sequence.
pub fn expand<'a, P: Problem>(
    problem: &'a P,
    node: &'a NodeRef<P::State, P::Action>,
) -> impl Iterator<Item = NodeRef<P::State, P::Action>> + 'a {
    let state = node.state();
    problem.actions(state).into_iter().map(move |action| {
        let next = problem.result(state, &action);
        let cost = node.path_cost() + problem.action_cost(state, &action, &next);
        Arc::new(Node::child(next, node, action, cost))
    })
}

/// Run best-first search, always expanding the node with the lowest `f`.
///
/// The goal test happens when a node is popped, not when it is generated. A
/// child is kept when its state has not been reached yet or when it reaches
/// that state more cheaply than the stored node; the costlier frontier entry
/// is left in place and simply loses every comparison it would have won.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. No reached map is produced in this case because no
/// search steps were taken.
pub fn best_first_search<P, F>(
    problem: &P,
    f: F,
    policy: &SearchPolicy,
    cancel: Option<&CancelToken>,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: Problem,
    F: Fn(&Node<P::State, P::Action>) -> f64,
{
    policy.validate()?;
    Ok(run(problem, &f, policy, cancel))
}

/// Search nodes with minimum path cost first.
pub fn uniform_cost_search<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    run_unbounded(problem, &scorer::path_cost::<P::State, P::Action>)
}

/// Search shallowest nodes first, through the best-first engine.
///
/// This is not a queue-based breadth-first search: it scores nodes by depth
/// and relies on the frontier's insertion-order tie-break to expand each
/// layer in the order it was generated. The goal test still happens at pop
/// time, so the returned path has the fewest actions but not necessarily the
/// lowest cost.
pub fn breadth_first_search<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    run_unbounded(problem, &scorer::depth::<P::State, P::Action>)
}

/// Search nodes with minimum `problem.heuristic(n)` first.
pub fn greedy_search<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    run_unbounded(problem, &|n: &Node<P::State, P::Action>| problem.heuristic(n))
}

/// Greedy best-first search with a heuristic that overrides the problem's.
pub fn greedy_search_with<P, H>(problem: &P, h: H) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    H: Fn(&Node<P::State, P::Action>) -> f64,
{
    run_unbounded(problem, &h)
}

/// Search nodes with minimum `path_cost(n) + problem.heuristic(n)` first.
pub fn astar_search<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    run_unbounded(problem, &|n: &Node<P::State, P::Action>| {
        n.path_cost() + problem.heuristic(n)
    })
}

/// A* search with a heuristic that overrides the problem's.
pub fn astar_search_with<P, H>(problem: &P, h: H) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    H: Fn(&Node<P::State, P::Action>) -> f64,
{
    run_unbounded(problem, &|n: &Node<P::State, P::Action>| n.path_cost() + h(n))
}

fn run_unbounded<P, F>(problem: &P, f: &F) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    F: Fn(&Node<P::State, P::Action>) -> f64,
{
    run(problem, f, &SearchPolicy::unbounded(), None)
}

fn run<P, F>(
    problem: &P,
    f: &F,
    policy: &SearchPolicy,
    cancel: Option<&CancelToken>,
) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    F: Fn(&Node<P::State, P::Action>) -> f64,
{
    let root: NodeRef<P::State, P::Action> = Arc::new(Node::root(problem.initial()));
    let mut reached: HashMap<P::State, NodeRef<P::State, P::Action>> = HashMap::new();
    reached.insert(root.state().clone(), Arc::clone(&root));

    let mut frontier = Frontier::new(|n: &NodeRef<P::State, P::Action>| f(&**n));
    frontier.add(root);

    let mut stats = SearchStats::default();
    let mut depth_limited = false;

    debug!("search start: policy={policy:?}");

    let outcome = loop {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            debug!("search cancelled after {} expansions", stats.expansions);
            break SearchOutcome::Cancelled;
        }

        let Some((key, current)) = frontier.pop_with_key() else {
            break if depth_limited {
                SearchOutcome::Cutoff
            } else {
                SearchOutcome::Failure
            };
        };
        trace!(
            "pop: score={} seq={} depth={} cost={}",
            key.score,
            key.sequence,
            current.depth(),
            current.path_cost()
        );

        if problem.is_goal(current.state()) {
            break SearchOutcome::Solution(current);
        }

        if policy
            .max_expansions
            .is_some_and(|max| stats.expansions >= max)
        {
            warn!(
                "expansion budget of {} spent with {} nodes still on the frontier",
                stats.expansions,
                frontier.len() + 1
            );
            break SearchOutcome::Cutoff;
        }

        if policy.max_depth.is_some_and(|max| current.depth() >= max) {
            depth_limited = true;
            continue;
        }

        stats.expansions += 1;
        for child in expand(problem, &current) {
            stats.generated += 1;
            let improves = match reached.get(child.state()) {
                Some(existing) => child.path_cost() < existing.path_cost(),
                None => true,
            };
            if !improves {
                continue;
            }
            if reached
                .insert(child.state().clone(), Arc::clone(&child))
                .is_some()
            {
                stats.reinserted += 1;
                trace!("cheaper path found: cost={}", child.path_cost());
            }
            frontier.add(child);
        }
    };

    if matches!(outcome, SearchOutcome::Cutoff) && depth_limited {
        warn!("depth limit {:?} cut the search short", policy.max_depth);
    }

    stats.frontier_high_water = frontier.high_water();
    debug!(
        "search end: outcome={} expansions={} generated={} reached={}",
        outcome.kind(),
        stats.expansions,
        stats.generated,
        reached.len()
    );

    SearchResult {
        outcome,
        reached,
        stats,
    }
}
