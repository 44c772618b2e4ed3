//! Projection of a vertex set onto an axis.

use crate::primitives::{Vector2, Vertex};
use num_traits::Float;

/// The closed interval `[min, max]` covered by a shape projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection<F> {
    pub min: F,
    pub max: F,
}

impl<F: Float> Projection<F> {
    /// Creates a projection interval.
    #[inline]
    pub fn new(min: F, max: F) -> Self {
        Self { min, max }
    }

    /// Projects every vertex onto `axis` and records the extent.
    ///
    /// An empty vertex list yields the empty interval `[+inf, -inf]`, which
    /// overlaps nothing.
    pub fn of(vertices: &[Vertex<F>], axis: Vector2<F>) -> Self {
        vertices.iter().fold(
            Self::new(F::infinity(), F::neg_infinity()),
            |acc, v| {
                let d = v.to_vector().dot_product(axis);
                Self::new(acc.min.min(d), acc.max.max(d))
            },
        )
    }

    /// Tests if the intervals share at least one point. Touching counts.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.min > other.max || other.min > self.max)
    }

    /// Tests if either interval lies strictly inside the other.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        (self.min > other.min && self.max < other.max)
            || (other.min > self.min && other.max < self.max)
    }

    /// The smaller of the two distances that would push the intervals apart:
    /// `min(max1 - min2, max2 - min1)`.
    #[inline]
    pub fn overlap(&self, other: &Self) -> F {
        (self.max - other.min).min(other.max - self.min)
    }

    /// Length of the shared part of the two intervals.
    #[inline]
    pub fn intersection_length(&self, other: &Self) -> F {
        self.max.min(other.max) - self.min.max(other.min)
    }
}
