//! 3D vector type.
//!
//! The collision engine itself is planar; the 3D vector exists for callers
//! that need a true cross product (for example to recover a rotation axis).

use crate::error::GeometryError;
use num_traits::Float;
use std::ops::{Add, Mul, Neg, Sub};

/// A 3D vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vector3<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            z: F::zero(),
        }
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        self - other
    }

    #[inline]
    pub fn scalar_mult(self, scalar: F) -> Self {
        self * scalar
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot_product(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    #[inline]
    pub fn cross_product(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the squared magnitude (length squared).
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
    /// Fails with [`GeometryError::ZeroMagnitude`] for the zero vector.
    #[inline]
    pub fn normalize(self) -> Result<Self, GeometryError> {
        let mag = self.magnitude();
        if mag > F::epsilon() {
            Ok(self * mag.recip())
        } else {
            Err(GeometryError::ZeroMagnitude)
        }
    }
}

impl<F: Float> Add for Vector3<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<F: Float> Sub for Vector3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<F: Float> Mul<F> for Vector3<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl<F: Float> Neg for Vector3<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<F: Float> Default for Vector3<F> {
    fn default() -> Self {
        Self::zero()
    }
}
