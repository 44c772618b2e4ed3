//! Directed polygon edge with a cached length.

use super::{Vector2, Vertex};
use crate::error::GeometryError;
use num_traits::Float;

/// A directed edge from `point` to `next`.
///
/// The Euclidean length is computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<F> {
    point: Vertex<F>,
    next: Vertex<F>,
    length: F,
}

impl<F: Float> Edge<F> {
    /// Creates an edge from `p1` to `p2`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateEdge`] if the two points are identical.
    ///
    /// # Example
    ///
    /// ```
    /// use sat2d::{Edge, Vertex};
    ///
    /// let edge = Edge::from_pair(Vertex::new(0.0, 0.0), Vertex::new(3.0, 4.0)).unwrap();
    /// assert_eq!(edge.length(), 5.0);
    ///
    /// assert!(Edge::from_pair(Vertex::new(1.0, 1.0), Vertex::new(1.0, 1.0)).is_err());
    /// ```
    pub fn from_pair(p1: Vertex<F>, p2: Vertex<F>) -> Result<Self, GeometryError> {
        if p1 == p2 {
            return Err(GeometryError::DegenerateEdge);
        }
        Ok(Self::between(p1, p2))
    }

    /// Builds an edge without the degeneracy check.
    ///
    /// Used when rebuilding a transformed polygon whose vertices were already
    /// validated.
    #[inline]
    pub(crate) fn between(point: Vertex<F>, next: Vertex<F>) -> Self {
        Self {
            point,
            next,
            length: point.distance(next),
        }
    }

    /// Returns the start vertex.
    #[inline]
    pub fn point(&self) -> Vertex<F> {
        self.point
    }

    /// Returns the end vertex.
    #[inline]
    pub fn next(&self) -> Vertex<F> {
        self.next
    }

    /// Returns the cached Euclidean length.
    #[inline]
    pub fn length(&self) -> F {
        self.length
    }

    /// Returns the direction vector `next - point`.
    #[inline]
    pub fn direction(&self) -> Vector2<F> {
        self.next - self.point
    }
}

/// Computes the interior angle at the vertex shared by two consecutive edges.
///
/// `a` must end where `b` starts. The result lies in `[0, 2π)` and, for a
/// counter-clockwise polygon, is the interior angle: at most `π` at a convex
/// corner and greater than `π` at a reflex one.
///
/// # Example
///
/// ```
/// use sat2d::{calculate_angle, Edge, Vertex};
/// use std::f64::consts::FRAC_PI_2;
///
/// let a = Edge::from_pair(Vertex::new(0.0, 0.0), Vertex::new(1.0, 0.0)).unwrap();
/// let b = Edge::from_pair(Vertex::new(1.0, 0.0), Vertex::new(1.0, 1.0)).unwrap();
/// assert!((calculate_angle(&a, &b) - FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn calculate_angle<F: Float>(a: &Edge<F>, b: &Edge<F>) -> F {
    let back = a.point - a.next;
    let forward = b.next - b.point;
    let angle = back.cross(forward).atan2(back.dot_product(forward));

    if angle > F::zero() {
        F::from(2.0 * std::f64::consts::PI).unwrap() - angle
    } else {
        angle.abs()
    }
}
