//! Distance functions shared by the grid and map worlds.

use super::Point;

/// Euclidean distance between two points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn straight_line(a: Point, b: Point) -> f64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan distance between two points, ignoring any wraparound.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn manhattan(a: Point, b: Point) -> f64 {
    ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f64
}

/// Manhattan distance on a `size × size` torus.
///
/// Each axis contributes the shorter of the direct and the wrapped distance,
/// `min(|d|, size - |d|)`. Both points must already lie in `0..size`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn wrap_manhattan(a: Point, b: Point, size: i64) -> f64 {
    let axis = |p: i64, q: i64| {
        let d = (p - q).abs();
        d.min(size - d)
    };
    (axis(a.0, b.0) + axis(a.1, b.1)) as f64
}

/// Reduce a coordinate pair onto a `size × size` torus.
#[must_use]
pub fn wrap(point: Point, size: i64) -> Point {
    (point.0.rem_euclid(size), point.1.rem_euclid(size))
}
