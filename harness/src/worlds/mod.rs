//! World implementations for the harness runner.

pub mod distance;
pub mod grid;
pub mod route;
pub mod terrain;
pub mod wrap_grid;

/// A 2-D integer coordinate `(x, y)`.
pub type Point = (i64, i64);

/// The four axis moves, in the order they are offered: up, right, down, left.
pub const AXIS_DIRECTIONS: [Point; 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// The eight king moves, row by row.
pub const KING_DIRECTIONS: [Point; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub(crate) fn point_json(point: Point) -> serde_json::Value {
    serde_json::json!([point.0, point.1])
}
