//! Convex hull reduction.
//!
//! Concave polygons are replaced by their convex hull before the separating
//! axis test, which is only valid for convex shapes.
//!
//! # Example
//!
//! ```
//! use sat2d::hull::convex_hull;
//! use sat2d::Vertex;
//!
//! let points: Vec<Vertex<f64>> = vec![
//!     Vertex::new(0.0, 0.0),
//!     Vertex::new(1.0, 0.0),
//!     Vertex::new(0.5, 0.5), // Interior point
//!     Vertex::new(1.0, 1.0),
//!     Vertex::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points);
//!
//! // Hull should be the 4 corners (interior point excluded)
//! assert_eq!(hull.len(), 4);
//! ```

use crate::primitives::Vertex;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull of a set of vertices using the Graham scan.
///
/// Returns the hull vertices in counter-clockwise order, starting from the
/// lowest vertex (smallest `y`, then smallest `x`). The first and last
/// vertices are NOT the same (the hull is implicitly closed).
///
/// Collinear vertices on the hull boundary are dropped, as are repeated
/// vertices. Fewer than three distinct inputs are returned as they are, and
/// an all-collinear input collapses to its two extreme vertices.
///
/// # Algorithm
///
/// 1. Pick the anchor minimizing `(y, x)`
/// 2. Sort the remaining vertices by polar angle around the anchor, nearer
///    vertices first on ties
/// 3. Scan in that order, popping the stack while the last two stacked
///    vertices and the new one fail to make a strict left turn
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
///
/// # Example
///
/// ```
/// use sat2d::hull::convex_hull;
/// use sat2d::Vertex;
///
/// let concave = vec![
///     Vertex::new(2.0, 2.0),
///     Vertex::new(0.0, 0.0),
///     Vertex::new(-2.0, 2.0),
///     Vertex::new(-2.0, -2.0),
///     Vertex::new(2.0, -2.0),
/// ];
///
/// assert_eq!(
///     convex_hull(&concave),
///     vec![
///         Vertex::new(-2.0, -2.0),
///         Vertex::new(2.0, -2.0),
///         Vertex::new(2.0, 2.0),
///         Vertex::new(-2.0, 2.0),
///     ]
/// );
/// ```
pub fn convex_hull<F: Float>(vertices: &[Vertex<F>]) -> Vec<Vertex<F>> {
    let anchor = match vertices.iter().copied().min_by(|a, b| {
        compare(a.y, b.y).then_with(|| compare(a.x, b.x))
    }) {
        Some(anchor) => anchor,
        None => return Vec::new(),
    };

    let mut rest: Vec<(F, F, Vertex<F>)> = vertices
        .iter()
        .filter(|&&v| v != anchor)
        .map(|&v| ((v.y - anchor.y).atan2(v.x - anchor.x), anchor.distance_squared(v), v))
        .collect();
    rest.sort_by(|(angle_a, dist_a, _), (angle_b, dist_b, _)| {
        compare(*angle_a, *angle_b).then_with(|| compare(*dist_a, *dist_b))
    });
    rest.dedup_by(|(_, _, a), (_, _, b)| a == b);

    if rest.len() < 2 {
        let mut hull = vec![anchor];
        hull.extend(rest.into_iter().map(|(_, _, v)| v));
        return hull;
    }

    let mut hull: Vec<Vertex<F>> = Vec::with_capacity(rest.len() + 1);
    hull.push(anchor);
    for (_, _, p) in rest {
        while hull.len() >= 2 && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p) <= F::zero()
        {
            hull.pop();
        }
        hull.push(p);
    }

    hull
}

/// Orientation determinant of the turn `a -> b -> c`.
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
fn orientation<F: Float>(a: Vertex<F>, b: Vertex<F>, c: Vertex<F>) -> F {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[inline]
fn compare<F: Float>(a: F, b: F) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vertex<f64> {
        Vertex::new(x, y)
    }

    /// Rotates `hull` so that it starts at `first`.
    fn starting_at(hull: &[Vertex<f64>], first: Vertex<f64>) -> Vec<Vertex<f64>> {
        let i = hull.iter().position(|&p| p == first).expect("vertex missing from hull");
        hull[i..].iter().chain(&hull[..i]).copied().collect()
    }

    #[test]
    fn test_convex_hull_empty() {
        let points: Vec<Vertex<f64>> = vec![];
        assert!(convex_hull(&points).is_empty());
    }

    #[test]
    fn test_convex_hull_small_inputs() {
        assert_eq!(convex_hull(&[v(1.0, 2.0)]), vec![v(1.0, 2.0)]);
        assert_eq!(
            convex_hull(&[v(1.0, 1.0), v(0.0, 0.0)]),
            vec![v(0.0, 0.0), v(1.0, 1.0)]
        );
        assert_eq!(convex_hull(&[v(1.0, 1.0), v(1.0, 1.0)]), vec![v(1.0, 1.0)]);
    }

    #[test]
    fn test_concave_pentagon() {
        let points = [v(2.0, 2.0), v(0.0, 0.0), v(-2.0, 2.0), v(-2.0, -2.0), v(2.0, -2.0)];
        assert_eq!(
            convex_hull(&points),
            vec![v(-2.0, -2.0), v(2.0, -2.0), v(2.0, 2.0), v(-2.0, 2.0)]
        );
    }

    #[test]
    fn test_convex_input_keeps_cyclic_order() {
        let pentagon = [
            v(3.0, 1.5),
            v(1.0, 3.0),
            v(-1.0, 1.5),
            v(0.0, 0.0),
            v(2.0, 0.0),
        ];
        let hull = convex_hull(&pentagon);
        assert_eq!(hull.len(), 5);
        assert_eq!(starting_at(&hull, pentagon[0]), pentagon.to_vec());
    }

    #[test]
    fn test_anchor_is_lowest_then_leftmost() {
        let points = [v(1.0, 0.0), v(2.0, 1.0), v(0.0, 1.0), v(-1.0, 0.0)];
        assert_eq!(convex_hull(&points)[0], v(-1.0, 0.0));
    }

    #[test]
    fn test_collinear_boundary_points_dropped() {
        let points = [
            v(0.0, 0.0),
            v(1.0, 0.0),
            v(2.0, 0.0),
            v(2.0, 1.0),
            v(2.0, 2.0),
            v(1.0, 2.0),
            v(0.0, 2.0),
            v(0.0, 1.0),
        ];
        assert_eq!(
            convex_hull(&points),
            vec![v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)]
        );
    }

    #[test]
    fn test_all_collinear() {
        let points = [v(3.0, 0.0), v(1.0, 0.0), v(0.0, 0.0), v(2.0, 0.0)];
        assert_eq!(convex_hull(&points), vec![v(0.0, 0.0), v(3.0, 0.0)]);
    }

    #[test]
    fn test_duplicates_removed() {
        let points = [
            v(0.0, 0.0),
            v(0.0, 0.0),
            v(1.0, 0.0),
            v(1.0, 1.0),
            v(1.0, 1.0),
            v(0.0, 1.0),
        ];
        assert_eq!(
            convex_hull(&points),
            vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)]
        );
    }

    #[test]
    fn test_many_interior_points() {
        let mut points = vec![v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)];
        for i in 1..10 {
            for j in 1..10 {
                points.push(v(i as f64, j as f64));
            }
        }
        assert_eq!(convex_hull(&points).len(), 4);
    }

    #[test]
    fn test_hull_is_strictly_ccw() {
        let points: Vec<Vertex<f64>> = (0..40)
            .map(|i| {
                let t = i as f64 * 0.7;
                v((t * 1.3).cos() * (1.0 + (i % 3) as f64), (t * 0.9).sin() * 2.0)
            })
            .collect();
        let hull = convex_hull(&points);
        assert!(hull.len() >= 3);
        for i in 0..hull.len() {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            let c = hull[(i + 2) % hull.len()];
            assert!(orientation(a, b, c) > 0.0, "not a left turn at {}", i);
        }
        // Every input lies inside or on the hull.
        for &p in &points {
            for i in 0..hull.len() {
                let a = hull[i];
                let b = hull[(i + 1) % hull.len()];
                assert!(orientation(a, b, p) >= -1e-9);
            }
        }
    }

    #[test]
    fn test_convex_hull_f32() {
        let points: Vec<Vertex<f32>> = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(0.5, 0.2),
            Vertex::new(1.0, 1.0),
            Vertex::new(0.0, 1.0),
        ];
        assert_eq!(convex_hull(&points).len(), 4);
    }

    #[test]
    fn test_orientation() {
        let o = v(0.0, 0.0);
        let a = v(1.0, 0.0);
        let b = v(0.0, 1.0);
        assert!(orientation(o, a, b) > 0.0);
        assert!(orientation(o, b, a) < 0.0);
        assert_eq!(orientation(o, a, v(2.0, 0.0)), 0.0);
    }
}
