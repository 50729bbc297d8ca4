//! How runs end: failure on unreachable goals, policy cutoffs, cancellation,
//! and pre-flight policy rejection.

use lock_tests::{disconnected, init_logging, WeightedGraph};
use wayfind_harness::worlds::grid::{wall, GridProblem};
use wayfind_harness::worlds::route::{romania_problem, RouteMap, RouteProblem};
use wayfind_search::{
    astar_search, best_first_search, breadth_first_search, greedy_search, uniform_cost_search,
    CancelToken, Node, SearchError, SearchPolicy, Strategy,
};

// ---------------------------------------------------------------------------
// No solution
// ---------------------------------------------------------------------------

#[test]
fn unreachable_goal_fails_for_every_entry_point() {
    init_logging();
    let graph = disconnected();
    for result in [
        uniform_cost_search(&graph),
        breadth_first_search(&graph),
        greedy_search(&graph),
        astar_search(&graph),
    ] {
        assert!(result.outcome.is_failure());
        assert!(result.outcome.path_states().is_empty());
        assert!(result.solution().is_none());
        assert_eq!(result.reached.len(), 2);
        assert_eq!(result.stats.expansions, 2);
    }
}

#[test]
fn unreachable_goal_fails_for_every_strategy_by_name() {
    let graph = disconnected();
    for strategy in Strategy::ALL {
        let result = strategy
            .run(&graph, &SearchPolicy::default(), None)
            .unwrap();
        assert_eq!(result.outcome.kind(), "failure", "{strategy}");
    }
}

#[test]
fn one_way_road_cannot_be_driven_backwards() {
    let map = RouteMap::new(&[("a", "b", 1.0), ("b", "c", 1.0)], true);
    let forward = RouteProblem::new(map.clone(), "a", "c").unwrap();
    let backward = RouteProblem::new(map, "c", "a").unwrap();
    assert_eq!(uniform_cost_search(&forward).outcome.path_cost(), 2.0);
    let result = uniform_cost_search(&backward);
    assert!(result.outcome.is_failure());
    assert_eq!(result.reached.len(), 1);
}

#[test]
fn start_at_goal_is_an_empty_solution() {
    let graph = WeightedGraph::undirected(&[(0, 1, 4.0)], 1, 1);
    let result = astar_search(&graph);
    assert!(result.is_goal_reached());
    assert_eq!(result.outcome.path_states(), vec![1]);
    assert!(result.outcome.path_actions().is_empty());
    assert_eq!(result.outcome.path_cost(), 0.0);
    assert_eq!(result.stats.expansions, 0);
}

// ---------------------------------------------------------------------------
// Policy budgets
// ---------------------------------------------------------------------------

#[test]
fn expansion_budget_cuts_off() {
    let problem = romania_problem("Arad", "Bucharest").unwrap();
    let policy = SearchPolicy::default().with_max_expansions(3);
    let result = Strategy::UniformCost.run(&problem, &policy, None).unwrap();
    assert_eq!(result.outcome.kind(), "cutoff");
    assert_eq!(result.stats.expansions, 3);
    assert!(result.outcome.path_states().is_empty());
    assert!(!result.reached.is_empty());
}

#[test]
fn budget_large_enough_still_solves() {
    let problem = romania_problem("Arad", "Bucharest").unwrap();
    let policy = SearchPolicy::default().with_max_expansions(5);
    let result = Strategy::AStar.run(&problem, &policy, None).unwrap();
    assert!(result.is_goal_reached());
    assert_eq!(result.outcome.path_cost(), 418.0);
}

#[test]
fn expansion_budget_bounds_an_unbounded_grid() {
    // Goal boxed in on all sides of an edgeless grid: only a budget stops it.
    let walls = wall(-1, -1, 1)
        .chain(wall(1, -1, 1))
        .chain([(0, 1), (0, -1)])
        .map(|(x, y)| (x + 50, y));
    let problem = GridProblem::new((0, 0), (50, 0), walls);
    let policy = SearchPolicy::default().with_max_expansions(500);
    let result = Strategy::AStar.run(&problem, &policy, None).unwrap();
    assert_eq!(result.outcome.kind(), "cutoff");
    assert_eq!(result.stats.expansions, 500);
}

#[test]
fn depth_limit_turns_failure_into_cutoff() {
    let problem = romania_problem("Arad", "Bucharest").unwrap();
    let shallow = SearchPolicy::default().with_max_depth(2);
    let result = Strategy::BreadthFirst.run(&problem, &shallow, None).unwrap();
    assert_eq!(result.outcome.kind(), "cutoff");
    assert!(result.reached.values().all(|n| n.depth() <= 2));

    let enough = SearchPolicy::default().with_max_depth(3);
    let result = Strategy::BreadthFirst.run(&problem, &enough, None).unwrap();
    assert!(result.is_goal_reached());
    assert_eq!(result.outcome.path_actions().len(), 3);
}

#[test]
fn depth_limit_on_a_fully_explored_space_is_still_failure() {
    let graph = disconnected();
    let policy = SearchPolicy::default().with_max_depth(5);
    let result = Strategy::UniformCost.run(&graph, &policy, None).unwrap();
    assert!(result.outcome.is_failure());
}

#[test]
fn zero_expansion_budget_is_rejected_before_search() {
    let problem = romania_problem("Arad", "Bucharest").unwrap();
    let policy = SearchPolicy::default().with_max_expansions(0);
    let err = best_first_search(&problem, Node::path_cost, &policy, None).unwrap_err();
    assert!(matches!(err, SearchError::InvalidPolicy { .. }));
    assert!(err.to_string().contains("max_expansions"));
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

#[test]
fn pre_cancelled_token_stops_immediately() {
    let problem = romania_problem("Arad", "Bucharest").unwrap();
    let token = CancelToken::new();
    token.cancel();
    let result = Strategy::AStar
        .run(&problem, &SearchPolicy::default(), Some(&token))
        .unwrap();
    assert_eq!(result.outcome.kind(), "cancelled");
    assert_eq!(result.stats.expansions, 0);
    assert_eq!(result.outcome.path_cost(), f64::INFINITY);
}

#[test]
fn cancelling_from_the_scorer_stops_the_next_pop() {
    let problem = romania_problem("Arad", "Bucharest").unwrap();
    let token = CancelToken::new();
    let watcher = token.clone();
    let f = |n: &Node<String, String>| {
        if n.state() == "Sibiu" {
            watcher.cancel();
        }
        n.path_cost()
    };
    let result = best_first_search(&problem, f, &SearchPolicy::default(), Some(&token)).unwrap();
    assert_eq!(result.outcome.kind(), "cancelled");
    assert_eq!(result.stats.expansions, 1);
    assert!(result.reached.contains_key("Sibiu"));
}

#[test]
fn untouched_token_changes_nothing() {
    let problem = romania_problem("Arad", "Bucharest").unwrap();
    let token = CancelToken::new();
    let with = Strategy::UniformCost
        .run(&problem, &SearchPolicy::default(), Some(&token))
        .unwrap();
    let without = uniform_cost_search(&problem);
    assert_eq!(with.outcome.path_states(), without.outcome.path_states());
    assert_eq!(with.stats, without.stats);
}
