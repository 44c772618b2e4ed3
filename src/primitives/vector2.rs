//! 2D vector type for directions, offsets and projection axes.

use crate::error::GeometryError;
use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
///
/// Normals follow screen-space naming: [`Vector2::left_normal`] of an edge
/// direction points out of a counter-clockwise polygon in y-up coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vector2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Component-wise sum.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        self + other
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        self - other
    }

    /// Scales both components by `scalar`.
    #[inline]
    pub fn scalar_mult(self, scalar: F) -> Self {
        self * scalar
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot_product(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product.
    ///
    /// Returns the z-component of the 3D cross product if the vectors
    /// were extended to 3D with z=0. Positive means `other` is counter-clockwise
    /// from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared magnitude (length squared).
    ///
    /// Use this instead of [`Vector2::magnitude`] when only comparing lengths.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot_product(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit-length vector pointing in the same direction.
    ///
    /// # Errors
    ///
    /// [`GeometryError::ZeroMagnitude`] if the vector is zero or too small to
    /// normalize reliably.
    #[inline]
    pub fn normalize(self) -> Result<Self, GeometryError> {
        let mag = self.magnitude();
        if mag > F::epsilon() {
            Ok(self / mag)
        } else {
            Err(GeometryError::ZeroMagnitude)
        }
    }

    /// Projects `self` onto `onto`: `dot(self, onto) / |onto|² · onto`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::ZeroMagnitude`] if `onto` is the zero vector.
    #[inline]
    pub fn projection(self, onto: Self) -> Result<Self, GeometryError> {
        let len_sq = onto.magnitude_squared();
        if len_sq.is_zero() {
            return Err(GeometryError::ZeroMagnitude);
        }
        Ok(onto * (self.dot_product(onto) / len_sq))
    }

    /// Returns the right-hand normal `(-y, x)`.
    #[inline]
    pub fn right_normal(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Returns the left-hand normal `(y, -x)`.
    #[inline]
    pub fn left_normal(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }

    /// Perp product: `self` dotted with the right normal of `other`.
    #[inline]
    pub fn per_product(self, other: Self) -> F {
        self.dot_product(other.right_normal())
    }
}

impl<F: Float> Add for Vector2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Vector2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Vector2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<F: Float> Div<F> for Vector2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<F: Float> Neg for Vector2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> Default for Vector2<F> {
    fn default() -> Self {
        Self::zero()
    }
}
