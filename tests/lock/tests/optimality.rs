//! Solution quality per strategy, checked against an independent Dijkstra.

use std::collections::{HashMap, HashSet};

use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lock_tests::{init_logging, WeightedGraph};
use wayfind_harness::worlds::route::{romania, romania_problem, RouteProblem};
use wayfind_harness::worlds::terrain::{land_grid_small, TerrainGridProblem};
use wayfind_harness::worlds::wrap_grid::WrapGridProblem;
use wayfind_search::{
    astar_search, astar_search_with, breadth_first_search, greedy_search, uniform_cost_search,
    Node, Problem,
};

fn arad_to_bucharest() -> RouteProblem {
    romania_problem("Arad", "Bucharest").unwrap()
}

/// Shortest distances from `source` over directed `(from, to, cost)` edges.
fn reference_distances<V>(
    edges: impl IntoIterator<Item = (V, V, f64)>,
    source: &V,
) -> HashMap<V, f64>
where
    V: Clone + Eq + std::hash::Hash,
{
    let mut graph: DiGraph<V, f64> = DiGraph::new();
    let mut index: HashMap<V, NodeIndex> = HashMap::new();
    let mut vertex = |graph: &mut DiGraph<V, f64>, v: V| {
        *index.entry(v.clone()).or_insert_with(|| graph.add_node(v))
    };
    for (from, to, cost) in edges {
        let a = vertex(&mut graph, from);
        let b = vertex(&mut graph, to);
        graph.add_edge(a, b, cost);
    }
    let start = vertex(&mut graph, source.clone());
    dijkstra(&graph, start, None, |e| *e.weight())
        .into_iter()
        .map(|(ix, d)| (graph[ix].clone(), d))
        .collect()
}

fn romania_reference(source: &str) -> HashMap<String, f64> {
    let map = romania();
    let edges: Vec<(String, String, f64)> = map
        .places()
        .into_iter()
        .flat_map(|from| {
            let map = &map;
            map.neighbors(from).iter().map(move |to| {
                let cost = map.distance(from, to).unwrap_or(f64::INFINITY);
                (from.to_string(), to.clone(), cost)
            })
        })
        .collect();
    reference_distances(edges, &source.to_string())
}

fn random_graph(rng: &mut StdRng, vertices: u32, edges: usize) -> WeightedGraph {
    let mut seen = HashSet::new();
    let links: Vec<(u32, u32, f64)> = (0..edges)
        .map(|_| {
            let a = rng.gen_range(0..vertices);
            let b = rng.gen_range(0..vertices);
            (a, b, f64::from(rng.gen_range(1..=20u32)))
        })
        .filter(|&(a, b, _)| a != b && seen.insert((a.min(b), a.max(b))))
        .collect();
    WeightedGraph::undirected(&links, 0, vertices - 1)
}

// ---------------------------------------------------------------------------
// Uniform-cost optimality
// ---------------------------------------------------------------------------

#[test]
fn uniform_cost_matches_dijkstra_on_romania() {
    init_logging();
    let reference = romania_reference("Arad");
    for goal in romania().places() {
        let problem = romania_problem("Arad", goal).unwrap();
        let result = uniform_cost_search(&problem);
        assert_eq!(result.outcome.path_cost(), reference[goal], "Arad → {goal}");
    }
}

#[test]
fn uniform_cost_matches_dijkstra_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..40 {
        let graph = random_graph(&mut rng, 25, 45);
        let reference = reference_distances(graph.edges(), &graph.initial);
        let result = uniform_cost_search(&graph);
        match reference.get(&graph.goal) {
            Some(&d) => assert_eq!(result.outcome.path_cost(), d),
            None => assert!(result.outcome.is_failure()),
        }
    }
}

// ---------------------------------------------------------------------------
// A* optimality and efficiency
// ---------------------------------------------------------------------------

#[test]
fn astar_matches_uniform_cost_and_expands_no_more() {
    let ucs = uniform_cost_search(&arad_to_bucharest());
    let astar = astar_search(&arad_to_bucharest());
    assert_eq!(astar.outcome.path_cost(), ucs.outcome.path_cost());
    assert_eq!(astar.outcome.path_states(), ucs.outcome.path_states());
    assert!(astar.stats.expansions <= ucs.stats.expansions);
    assert_eq!(astar.stats.expansions, 5);
    assert_eq!(ucs.stats.expansions, 12);

    let grid = WrapGridProblem::new(10, (2, 2), (7, 6)).unwrap();
    let ucs = uniform_cost_search(&grid);
    let astar = astar_search(&grid);
    assert_eq!(astar.outcome.path_cost(), ucs.outcome.path_cost());
    assert!(astar.stats.expansions < ucs.stats.expansions);
}

#[test]
fn astar_with_exact_heuristic_is_optimal_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..40 {
        let graph = random_graph(&mut rng, 25, 45);
        let to_goal = reference_distances(graph.edges(), &graph.goal);
        let table: Vec<(u32, f64)> = to_goal.iter().map(|(&v, &d)| (v, d / 2.0)).collect();
        let graph = graph.with_heuristic(&table);

        let ucs = uniform_cost_search(&graph);
        let astar = astar_search(&graph);
        assert_eq!(astar.outcome.path_cost(), ucs.outcome.path_cost());
        assert_eq!(astar.outcome.kind(), ucs.outcome.kind());
    }
}

#[test]
fn zero_heuristic_astar_is_uniform_cost() {
    let problem = arad_to_bucharest();
    let zero = astar_search_with(&problem, |_: &Node<String, String>| 0.0);
    let ucs = uniform_cost_search(&problem);
    assert_eq!(zero.outcome.path_states(), ucs.outcome.path_states());
    assert_eq!(zero.stats, ucs.stats);
}

#[test]
fn straight_line_heuristic_is_consistent_on_romania() {
    let problem = arad_to_bucharest();
    let map = problem.map();
    for from in map.places() {
        let h_from = problem.heuristic(&Node::root(from.to_string()));
        for to in map.neighbors(from) {
            let h_to = problem.heuristic(&Node::root(to.clone()));
            let cost = map.distance(from, to).unwrap();
            assert!(h_from <= cost + h_to + 1e-9, "{from} → {to}");
        }
    }
}

// ---------------------------------------------------------------------------
// Breadth-first, greedy and a broken heuristic
// ---------------------------------------------------------------------------

#[test]
fn breadth_first_returns_fewest_moves() {
    let bfs = breadth_first_search(&arad_to_bucharest());
    assert_eq!(
        bfs.outcome.path_states(),
        ["Arad", "Sibiu", "Fagaras", "Bucharest"]
    );
    assert_eq!(bfs.outcome.path_actions().len(), 3);
    let ucs = uniform_cost_search(&arad_to_bucharest());
    assert!(bfs.outcome.path_cost() > ucs.outcome.path_cost());

    let terrain = TerrainGridProblem::new(land_grid_small(), (2, 2), (4, 4)).unwrap();
    let bfs = breadth_first_search(&terrain);
    let ucs = uniform_cost_search(&terrain);
    assert_eq!(bfs.outcome.path_actions().len(), 4);
    assert!(ucs.outcome.path_actions().len() >= 4);
    assert!(bfs.outcome.path_cost() >= ucs.outcome.path_cost());
}

#[test]
fn greedy_can_be_costlier_than_uniform_cost() {
    let greedy = greedy_search(&arad_to_bucharest());
    let ucs = uniform_cost_search(&arad_to_bucharest());
    assert!(greedy.is_goal_reached());
    assert_eq!(greedy.outcome.path_cost(), 450.0);
    assert!(greedy.outcome.path_cost() > ucs.outcome.path_cost());
    assert!(greedy.stats.expansions < ucs.stats.expansions);
}

#[test]
fn overestimating_heuristic_silently_degrades_astar() {
    let problem = arad_to_bucharest();
    let inflated = |n: &Node<String, String>| {
        if n.state() == "Rimnicu" {
            1000.0
        } else {
            problem.heuristic(n)
        }
    };
    let result = astar_search_with(&problem, inflated);
    assert!(result.is_goal_reached());
    assert_eq!(
        result.outcome.path_states(),
        ["Arad", "Sibiu", "Fagaras", "Bucharest"]
    );
    assert_eq!(result.outcome.path_cost(), 450.0);
}

// ---------------------------------------------------------------------------
// Wraparound grid
// ---------------------------------------------------------------------------

#[test]
fn wraparound_grid_takes_manhattan_wrap_distance() {
    let problem = WrapGridProblem::new(10, (2, 2), (7, 6)).unwrap();
    let result = uniform_cost_search(&problem);
    let states = result.outcome.path_states();
    assert_eq!(states.first(), Some(&(2, 2)));
    assert_eq!(states.last(), Some(&(7, 6)));
    let dx = (7_i64 - 2).abs();
    let dy = (6_i64 - 2).abs();
    let expected = dx.min(10 - dx) + dy.min(10 - dy);
    assert_eq!(i64::try_from(result.outcome.path_actions().len()).unwrap(), expected);
    assert_eq!(expected, 9);
    for pair in states.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let step = (a.0 - b.0).rem_euclid(10).min((b.0 - a.0).rem_euclid(10))
            + (a.1 - b.1).rem_euclid(10).min((b.1 - a.1).rem_euclid(10));
        assert_eq!(step, 1, "{a:?} → {b:?}");
    }
}
