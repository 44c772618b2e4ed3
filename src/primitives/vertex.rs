//! Polygon vertex (2D point) type.

use super::Vector2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point on a polygon boundary.
///
/// Subtracting two vertices yields the [`Vector2`] between them; adding a
/// vector to a vertex moves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vertex<F> {
    /// Creates a new vertex.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a vertex at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another vertex.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another vertex.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the position of this vertex as a vector from the origin.
    #[inline]
    pub fn to_vector(self) -> Vector2<F> {
        Vector2::new(self.x, self.y)
    }

    /// Returns this vertex rotated by `(sin, cos)` about `pivot`.
    #[inline]
    pub(crate) fn rotated_about(self, pivot: Self, sin: F, cos: F) -> Self {
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self {
            x: pivot.x + dx * cos - dy * sin,
            y: pivot.y + dx * sin + dy * cos,
        }
    }
}

impl<F: Float> From<Vector2<F>> for Vertex<F> {
    #[inline]
    fn from(v: Vector2<F>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl<F: Float> From<Vertex<F>> for Vector2<F> {
    #[inline]
    fn from(p: Vertex<F>) -> Self {
        p.to_vector()
    }
}

impl<F: Float> From<(F, F)> for Vertex<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self { x, y }
    }
}

impl<F: Float> Sub for Vertex<F> {
    type Output = Vector2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vector2<F> {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vector2<F>> for Vertex<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vector2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Sub<Vector2<F>> for Vertex<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vector2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> Default for Vertex<F> {
    fn default() -> Self {
        Self::origin()
    }
}
