//! Collision resolution.
//!
//! [`resolve_collision`] pushes the second polygon out of the first along the
//! minimum translation vector. [`Shape`] and [`Collidable`] give regular and
//! general polygons one interface for testing and resolving.
//!
//! # Example
//!
//! ```
//! use sat2d::collision::resolve_collision;
//! use sat2d::sat::minimum_translation_vector;
//! use sat2d::{make_regular_polygon, Vertex};
//!
//! let a = make_regular_polygon(4, 2.0, 0.0, Vertex::new(0.0, 0.0)).unwrap();
//! let b = make_regular_polygon(4, 4.0, 0.0, Vertex::new(4.0, 1.0)).unwrap();
//!
//! let (a2, b2) = resolve_collision(&a, &b);
//! assert_eq!(a2, a);
//! let residual: f64 = minimum_translation_vector(&a2, &b2).map_or(0.0, |(_, m)| m);
//! assert!(residual.abs() < 1e-9);
//! ```

mod shape;

pub use shape::{Collidable, Shape};

use crate::polygon::Polygon;
use crate::sat::{convex_operand, minimum_translation_vector_convex, separation};
use crate::tolerance::is_resolved;
use num_traits::Float;

/// Separates two polygons by moving the second one.
///
/// Returns `p1` unchanged and `p2` translated so that the pair no longer
/// overlaps (they may be left touching). If the polygons do not collide both
/// are returned unchanged. Concave polygons are resolved through their convex
/// hulls, but the returned `p2` keeps its own vertices.
///
/// The push direction is chosen to point from the centroid of `p1` towards
/// the centroid of `p2`. When that leaves an overlap, which can happen when
/// one polygon is nested deep inside the other, the opposite direction is used
/// instead. This is a best-effort choice, not a guaranteed minimal separation.
pub fn resolve_collision<F: Float>(p1: &Polygon<F>, p2: &Polygon<F>) -> (Polygon<F>, Polygon<F>) {
    let a = convex_operand(p1);
    let b = convex_operand(p2);

    let (axis, magnitude) = match minimum_translation_vector_convex(&a, &b) {
        Some(mtv) => mtv,
        None => return (p1.clone(), p2.clone()),
    };

    let push = separation(axis, magnitude);
    let toward_p2 = b.centroid() - a.centroid();
    let mut translation = if axis.dot_product(toward_p2) < F::zero() {
        -push
    } else {
        push
    };

    let moved = b.translate_by(translation);
    if let Some((residual_axis, residual)) = minimum_translation_vector_convex(&a, &moved) {
        let depth = separation(residual_axis, residual).magnitude();
        if !is_resolved(depth) {
            log::trace!("push along centroid direction left an overlap, using the opposite translation");
            translation = -translation;
        }
    }

    (p1.clone(), p2.translate_by(translation))
}
