//! Route finding between named places on a weighted map.
//!
//! States and actions are both place names: the action is the neighbor to
//! drive to. The heuristic is the straight-line distance between map
//! locations, which is consistent whenever every road is at least as long as
//! the straight line between its endpoints (true for [`romania`]).

use std::collections::HashMap;

use wayfind_search::{Node, Problem};

use super::distance::straight_line;
use super::{point_json, Point};
use crate::contract::{World, WorldError};

/// A map of places: a graph with weighted links and optional locations.
#[derive(Debug, Clone)]
pub struct RouteMap {
    distances: HashMap<(String, String), f64>,
    neighbors: HashMap<String, Vec<String>>,
    locations: HashMap<String, Point>,
    link_count: usize,
}

impl RouteMap {
    /// Build a map from `(from, to, distance)` links.
    ///
    /// Unless `directed`, every link is mirrored. Neighbor lists keep link
    /// order: all links as given first, then the mirrored ones, so expansion
    /// order is reproducible.
    #[must_use]
    pub fn new(links: &[(&str, &str, f64)], directed: bool) -> Self {
        let mut ordered: Vec<(String, String)> = Vec::new();
        let mut distances: HashMap<(String, String), f64> = HashMap::new();

        let mut insert = |from: &str, to: &str, distance: f64| {
            let key = (from.to_string(), to.to_string());
            if distances.insert(key.clone(), distance).is_none() {
                ordered.push(key);
            }
        };
        for &(from, to, distance) in links {
            insert(from, to, distance);
        }
        if !directed {
            for &(from, to, distance) in links {
                insert(to, from, distance);
            }
        }

        let mut neighbors: HashMap<String, Vec<String>> = HashMap::new();
        for (from, to) in &ordered {
            neighbors.entry(from.clone()).or_default().push(to.clone());
        }

        Self {
            link_count: ordered.len(),
            distances,
            neighbors,
            locations: HashMap::new(),
        }
    }

    /// Attach 2-D locations to places. Places without one sit at `(0, 0)`.
    #[must_use]
    pub fn with_locations(mut self, locations: &[(&str, Point)]) -> Self {
        for &(name, point) in locations {
            self.locations.insert(name.to_string(), point);
        }
        self
    }

    /// Places reachable in one step from `place`, in link order.
    #[must_use]
    pub fn neighbors(&self, place: &str) -> &[String] {
        self.neighbors
            .get(place)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Length of the link `from → to`, if there is one.
    #[must_use]
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        self.distances
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }

    /// Location of `place`, defaulting to the origin.
    #[must_use]
    pub fn location(&self, place: &str) -> Point {
        self.locations.get(place).copied().unwrap_or((0, 0))
    }

    /// Whether `place` appears in any link or location.
    #[must_use]
    pub fn contains(&self, place: &str) -> bool {
        self.neighbors.contains_key(place)
            || self.locations.contains_key(place)
            || self.distances.keys().any(|(_, to)| to == place)
    }

    /// Number of directed links (mirrored links count twice).
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// All places, sorted by name.
    #[must_use]
    pub fn places(&self) -> Vec<&str> {
        let mut places: Vec<&str> = self
            .distances
            .keys()
            .flat_map(|(from, to)| [from.as_str(), to.as_str()])
            .chain(self.locations.keys().map(String::as_str))
            .collect();
        places.sort_unstable();
        places.dedup();
        places
    }
}

/// Find a route from one place to another on a [`RouteMap`].
#[derive(Debug, Clone)]
pub struct RouteProblem {
    map: RouteMap,
    initial: String,
    goal: String,
}

impl RouteProblem {
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownLocation`] if either endpoint is not on
    /// the map.
    pub fn new(map: RouteMap, initial: &str, goal: &str) -> Result<Self, WorldError> {
        for name in [initial, goal] {
            if !map.contains(name) {
                return Err(WorldError::UnknownLocation {
                    name: name.to_string(),
                });
            }
        }
        Ok(Self {
            map,
            initial: initial.to_string(),
            goal: goal.to_string(),
        })
    }

    #[must_use]
    pub fn map(&self) -> &RouteMap {
        &self.map
    }
}

impl Problem for RouteProblem {
    type State = String;
    type Action = String;

    fn initial(&self) -> String {
        self.initial.clone()
    }

    fn actions(&self, state: &String) -> Vec<String> {
        self.map.neighbors(state).to_vec()
    }

    fn result(&self, state: &String, action: &String) -> String {
        if self.map.neighbors(state).contains(action) {
            action.clone()
        } else {
            state.clone()
        }
    }

    fn goal(&self) -> Option<&String> {
        Some(&self.goal)
    }

    fn action_cost(&self, state: &String, _action: &String, next: &String) -> f64 {
        if state == next {
            return 0.0;
        }
        self.map.distance(state, next).unwrap_or(f64::INFINITY)
    }

    fn heuristic(&self, node: &Node<String, String>) -> f64 {
        straight_line(
            self.map.location(node.state()),
            self.map.location(&self.goal),
        )
    }
}

impl World for RouteProblem {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "route"
    }

    fn state_json(&self, state: &String) -> serde_json::Value {
        serde_json::Value::String(state.clone())
    }

    fn describe(&self) -> serde_json::Value {
        let places: Vec<serde_json::Value> = self
            .map
            .places()
            .into_iter()
            .map(|p| serde_json::json!({"name": p, "location": point_json(self.map.location(p))}))
            .collect();
        serde_json::json!({
            "goal": self.goal,
            "initial": self.initial,
            "link_count": self.map.link_count(),
            "places": places,
        })
    }
}

/// The road map of Romania from the standard textbook route-finding example.
#[must_use]
pub fn romania() -> RouteMap {
    RouteMap::new(
        &[
            ("Oradea", "Zerind", 71.0),
            ("Oradea", "Sibiu", 151.0),
            ("Arad", "Zerind", 75.0),
            ("Arad", "Sibiu", 140.0),
            ("Arad", "Timisoara", 118.0),
            ("Lugoj", "Timisoara", 111.0),
            ("Lugoj", "Mehadia", 70.0),
            ("Drobeta", "Mehadia", 75.0),
            ("Craiova", "Drobeta", 120.0),
            ("Craiova", "Rimnicu", 146.0),
            ("Craiova", "Pitesti", 138.0),
            ("Rimnicu", "Sibiu", 80.0),
            ("Fagaras", "Sibiu", 99.0),
            ("Bucharest", "Fagaras", 211.0),
            ("Bucharest", "Pitesti", 101.0),
            ("Bucharest", "Giurgiu", 90.0),
            ("Bucharest", "Urziceni", 85.0),
            ("Hirsova", "Urziceni", 98.0),
            ("Eforie", "Hirsova", 86.0),
            ("Urziceni", "Vaslui", 142.0),
            ("Iasi", "Vaslui", 92.0),
            ("Iasi", "Neamt", 87.0),
            ("Pitesti", "Rimnicu", 97.0),
        ],
        false,
    )
    .with_locations(&[
        ("Arad", (91, 492)),
        ("Bucharest", (400, 327)),
        ("Craiova", (253, 288)),
        ("Drobeta", (165, 299)),
        ("Eforie", (562, 293)),
        ("Fagaras", (305, 449)),
        ("Giurgiu", (375, 270)),
        ("Hirsova", (534, 350)),
        ("Iasi", (473, 506)),
        ("Lugoj", (165, 379)),
        ("Mehadia", (168, 339)),
        ("Neamt", (406, 537)),
        ("Oradea", (131, 571)),
        ("Pitesti", (320, 368)),
        ("Rimnicu", (233, 410)),
        ("Sibiu", (207, 457)),
        ("Timisoara", (94, 410)),
        ("Urziceni", (456, 350)),
        ("Vaslui", (509, 444)),
        ("Zerind", (108, 531)),
    ])
}

/// A route problem on [`romania`].
///
/// # Errors
///
/// Returns [`WorldError::UnknownLocation`] for a place not on the map.
pub fn romania_problem(initial: &str, goal: &str) -> Result<RouteProblem, WorldError> {
    RouteProblem::new(romania(), initial, goal)
}
