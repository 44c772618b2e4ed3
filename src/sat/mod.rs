//! Separating axis collision tests.
//!
//! Two convex polygons are disjoint iff some edge normal of either polygon
//! separates their projections. Concave operands are replaced by their convex
//! hull before testing.
//!
//! # Axes and magnitudes
//!
//! Axes are the [left normals](crate::Vector2::left_normal) of the edge
//! direction vectors, at the edge's own length. Overlap magnitudes are
//! measured in the projection units of the axis they were found on, so an
//! `(axis, magnitude)` pair is self-consistent; [`separation`] turns it into the
//! Euclidean translation that removes the overlap. When choosing the minimum,
//! magnitudes are compared per unit of axis length.
//!
//! # Example
//!
//! ```
//! use sat2d::sat::{collides, minimum_translation_vector};
//! use sat2d::{make_regular_polygon, Vector2, Vertex};
//!
//! let small = make_regular_polygon(4, 2.0, 0.0, Vertex::new(0.0, 0.0)).unwrap();
//! let large = make_regular_polygon(4, 4.0, 0.0, Vertex::new(4.0, 1.0)).unwrap();
//!
//! assert!(collides(&small, &large));
//! assert_eq!(
//!     minimum_translation_vector(&small, &large),
//!     Some((Vector2::new(2.0, 2.0), 2.0))
//! );
//! ```

mod projection;

pub use projection::Projection;

use crate::polygon::Polygon;
use crate::primitives::Vector2;
use num_traits::Float;
use std::borrow::Cow;

/// Returns the candidate separating axes of a polygon, one per edge.
pub fn axes<F: Float>(polygon: &Polygon<F>) -> Vec<Vector2<F>> {
    polygon
        .edges()
        .iter()
        .map(|e| e.direction().left_normal())
        .collect()
}

/// Projects a polygon onto `axis`.
#[inline]
pub fn project<F: Float>(polygon: &Polygon<F>, axis: Vector2<F>) -> Projection<F> {
    Projection::of(polygon.vertices(), axis)
}

/// Tests if two polygons intersect. Touching counts as intersecting.
///
/// Concave operands are tested through their convex hulls.
pub fn collides<F: Float>(p1: &Polygon<F>, p2: &Polygon<F>) -> bool {
    let a = convex_operand(p1);
    let b = convex_operand(p2);
    collides_convex(&a, &b)
}

/// Computes the minimum translation vector between two polygons.
///
/// Returns `None` when the polygons do not intersect, otherwise the axis and
/// the non-negative overlap magnitude along it. The axis direction is not
/// oriented from `p1` towards `p2`.
///
/// Concave operands are tested through their convex hulls.
pub fn minimum_translation_vector<F: Float>(
    p1: &Polygon<F>,
    p2: &Polygon<F>,
) -> Option<(Vector2<F>, F)> {
    let a = convex_operand(p1);
    let b = convex_operand(p2);
    minimum_translation_vector_convex(&a, &b)
}

/// Converts an `(axis, magnitude)` pair into the Euclidean translation
/// `axis · magnitude / |axis|²`.
///
/// Returns the zero vector for a zero axis.
///
/// # Example
///
/// ```
/// use sat2d::sat::separation;
/// use sat2d::Vector2;
///
/// assert_eq!(separation(Vector2::new(2.0, 2.0), 2.0), Vector2::new(0.5, 0.5));
/// assert_eq!(separation(Vector2::new(0.0, 1.0), 3.0), Vector2::new(0.0, 3.0));
/// ```
pub fn separation<F: Float>(axis: Vector2<F>, magnitude: F) -> Vector2<F> {
    let len_sq = axis.magnitude_squared();
    if len_sq.is_zero() {
        return Vector2::zero();
    }
    axis * (magnitude / len_sq)
}

/// Returns the polygon itself if it is convex, otherwise its convex hull.
pub(crate) fn convex_operand<F: Float>(polygon: &Polygon<F>) -> Cow<'_, Polygon<F>> {
    if polygon.is_convex() {
        Cow::Borrowed(polygon)
    } else {
        log::debug!(
            "replacing concave polygon ({} vertices) with its convex hull",
            polygon.vertex_count()
        );
        Cow::Owned(polygon.convex_hull())
    }
}

pub(crate) fn collides_convex<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    axes(a).into_iter().chain(axes(b)).all(|axis| {
        let pa = project(a, axis);
        let pb = project(b, axis);
        pa.overlaps(&pb) || pa.contains(&pb)
    })
}

pub(crate) fn minimum_translation_vector_convex<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
) -> Option<(Vector2<F>, F)> {
    let mut tested = Vec::with_capacity(a.vertex_count() + b.vertex_count());
    for axis in axes(a).into_iter().chain(axes(b)) {
        let pa = project(a, axis);
        let pb = project(b, axis);
        if !(pa.overlaps(&pb) || pa.contains(&pb)) {
            return None;
        }
        tested.push((axis, pa, pb));
    }

    // With one shape nested inside the other on every axis, push out past
    // the nearer interval end.
    let total_containment = tested.iter().all(|(_, pa, pb)| pa.contains(pb));

    let mut best: Option<(Vector2<F>, F, F)> = None;
    for (axis, pa, pb) in tested {
        let len = axis.magnitude();
        if len.is_zero() {
            continue;
        }

        let candidates = if total_containment {
            let shared = pa.intersection_length(&pb);
            [
                Some(shared + (pa.min - pb.min).abs()),
                Some(shared + (pa.max - pb.max).abs()),
            ]
        } else {
            [Some(pa.overlap(&pb)), None]
        };

        for magnitude in candidates.into_iter().flatten() {
            let depth = magnitude / len;
            if best.map_or(true, |(_, _, best_depth)| depth < best_depth) {
                best = Some((axis, magnitude, depth));
            }
        }
    }

    best.map(|(axis, magnitude, _)| (axis, magnitude))
}
