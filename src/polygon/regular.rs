//! Regular (equilateral, equiangular) polygons described by a handful of
//! parameters.

use super::Polygon;
use crate::error::GeometryError;
use crate::primitives::{Vector2, Vertex};
use crate::tolerance::round_coordinate;
use num_traits::Float;

/// A regular polygon: `sides` vertices evenly spaced on a circle of `radius`
/// around `midpoint`, turned by `rotation` radians.
///
/// The vertex polygon is generated once at construction and cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon<F> {
    sides: usize,
    radius: F,
    rotation: F,
    midpoint: Vertex<F>,
    polygon: Polygon<F>,
}

impl<F: Float> RegularPolygon<F> {
    /// Creates a regular polygon with its rotation given in degrees.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidSideCount`] if `sides < 3`.
    /// - [`GeometryError::InvalidRadius`] if `radius` is not finite and
    ///   strictly positive.
    ///
    /// # Example
    ///
    /// ```
    /// use sat2d::{RegularPolygon, Vertex};
    ///
    /// let diamond = RegularPolygon::new(4, 2.0, 0.0, Vertex::new(0.0, 0.0)).unwrap();
    /// assert_eq!(
    ///     diamond.polygon().vertices(),
    ///     &[
    ///         Vertex::new(2.0, 0.0),
    ///         Vertex::new(0.0, 2.0),
    ///         Vertex::new(-2.0, 0.0),
    ///         Vertex::new(0.0, -2.0),
    ///     ]
    /// );
    /// ```
    pub fn new(
        sides: usize,
        radius: F,
        rotation_degrees: F,
        midpoint: Vertex<F>,
    ) -> Result<Self, GeometryError> {
        Self::with_radians(sides, radius, rotation_degrees.to_radians(), midpoint)
    }

    /// Creates a regular polygon with its rotation given in radians.
    pub fn with_radians(
        sides: usize,
        radius: F,
        rotation: F,
        midpoint: Vertex<F>,
    ) -> Result<Self, GeometryError> {
        if sides < 3 {
            return Err(GeometryError::InvalidSideCount { sides });
        }
        if !radius.is_finite() || radius <= F::zero() {
            return Err(GeometryError::InvalidRadius);
        }

        let polygon = Polygon::from_vertices(generate_vertices(sides, radius, rotation, midpoint))?;
        Ok(Self {
            sides,
            radius,
            rotation,
            midpoint,
            polygon,
        })
    }

    /// Returns the number of sides.
    #[inline]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Returns the circumradius.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// Returns the rotation in radians.
    #[inline]
    pub fn rotation(&self) -> F {
        self.rotation
    }

    /// Returns the center.
    #[inline]
    pub fn midpoint(&self) -> Vertex<F> {
        self.midpoint
    }

    /// Returns the generated vertex polygon.
    #[inline]
    pub fn polygon(&self) -> &Polygon<F> {
        &self.polygon
    }

    /// Consumes the regular polygon, keeping only its vertex polygon.
    #[inline]
    pub fn into_polygon(self) -> Polygon<F> {
        self.polygon
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn translate(&self, dx: F, dy: F) -> Self {
        let offset = Vector2::new(dx, dy);
        Self {
            midpoint: self.midpoint + offset,
            polygon: self.polygon.translate_by(offset),
            ..*self
        }
    }

    /// Returns a copy turned by a further `radians` about its own center.
    pub fn rotate(&self, radians: F) -> Self {
        Self {
            rotation: self.rotation + radians,
            polygon: self.polygon.rotate(radians, self.midpoint),
            ..*self
        }
    }

    /// Returns a copy turned by a further `degrees` about its own center.
    pub fn rotate_degrees(&self, degrees: F) -> Self {
        self.rotate(degrees.to_radians())
    }
}

/// Creates the polygon of a regular polygon; the rotation is in degrees.
///
/// # Example
///
/// ```
/// use sat2d::{make_regular_polygon, GeometryError, Vertex};
///
/// let hexagon = make_regular_polygon(6, 1.0, 30.0, Vertex::new(0.0, 0.0)).unwrap();
/// assert_eq!(hexagon.vertex_count(), 6);
/// assert!(hexagon.is_convex());
///
/// assert_eq!(
///     make_regular_polygon(2, 1.0, 0.0, Vertex::new(0.0, 0.0)),
///     Err(GeometryError::InvalidSideCount { sides: 2 })
/// );
/// ```
pub fn make_regular_polygon<F: Float>(
    sides: usize,
    radius: F,
    rotation_degrees: F,
    center: Vertex<F>,
) -> Result<Polygon<F>, GeometryError> {
    RegularPolygon::new(sides, radius, rotation_degrees, center).map(RegularPolygon::into_polygon)
}

/// Places vertex `i` at angle `i · 2π/n` on the circle, then turns the whole
/// set by `rotation` about the center.
fn generate_vertices<F: Float>(
    sides: usize,
    radius: F,
    rotation: F,
    center: Vertex<F>,
) -> Vec<Vertex<F>> {
    let step = F::from(2.0 * std::f64::consts::PI).unwrap() / F::from(sides).unwrap();
    let (sin, cos) = rotation.sin_cos();

    (0..sides)
        .map(|i| {
            let theta = step * F::from(i).unwrap();
            let placed = Vertex::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            );
            let turned = placed.rotated_about(center, sin, cos);
            Vertex::new(round_coordinate(turned.x), round_coordinate(turned.y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_vertices() {
        let p = RegularPolygon::new(4, 2.0_f64, 0.0, Vertex::new(4.0, 1.0)).unwrap();
        assert_eq!(
            p.polygon().vertices(),
            &[
                Vertex::new(6.0, 1.0),
                Vertex::new(4.0, 3.0),
                Vertex::new(2.0, 1.0),
                Vertex::new(4.0, -1.0),
            ]
        );
        assert!(p.polygon().is_convex());
        assert!(p.polygon().signed_area() > 0.0);
    }

    #[test]
    fn test_rotation_in_degrees() {
        let p = RegularPolygon::new(4, 1.0_f64, 45.0, Vertex::origin()).unwrap();
        let h = round_coordinate(std::f64::consts::FRAC_1_SQRT_2);
        assert_eq!(p.polygon().vertices()[0], Vertex::new(h, h));
        assert_relative_eq!(p.rotation(), std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_with_radians_matches_degrees() {
        let a = RegularPolygon::new(5, 3.0_f64, 30.0, Vertex::new(1.0, -1.0)).unwrap();
        let b = RegularPolygon::with_radians(
            5,
            3.0_f64,
            std::f64::consts::FRAC_PI_6,
            Vertex::new(1.0, -1.0),
        )
        .unwrap();
        assert_eq!(a.polygon().vertices(), b.polygon().vertices());
    }

    #[test]
    fn test_vertices_on_circumcircle() {
        let center = Vertex::new(-2.0_f64, 5.0);
        let p = RegularPolygon::new(7, 3.0, 10.0, center).unwrap();
        assert_eq!(p.sides(), 7);
        assert_eq!(p.polygon().vertex_count(), 7);
        for v in p.polygon().vertices() {
            assert_relative_eq!(v.distance(center), 3.0, epsilon = 1e-4);
        }
        let lengths: Vec<f64> = p.polygon().edges().iter().map(|e| e.length()).collect();
        for l in &lengths {
            assert_relative_eq!(*l, lengths[0], epsilon = 1e-4);
        }
        assert!(p.polygon().is_convex());
    }

    #[test]
    fn test_invalid_side_count() {
        for sides in 0..3 {
            assert_eq!(
                RegularPolygon::new(sides, 1.0_f64, 0.0, Vertex::origin()),
                Err(GeometryError::InvalidSideCount { sides })
            );
        }
    }

    #[test]
    fn test_invalid_radius() {
        for radius in [0.0_f64, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                RegularPolygon::new(3, radius, 0.0, Vertex::origin()),
                Err(GeometryError::InvalidRadius)
            );
        }
    }

    #[test]
    fn test_translate_keeps_parameters() {
        let p = RegularPolygon::new(6, 2.0_f64, 0.0, Vertex::origin()).unwrap();
        let moved = p.translate(3.0, -1.0);
        assert_eq!(moved.midpoint(), Vertex::new(3.0, -1.0));
        assert_eq!(moved.sides(), 6);
        let expected = RegularPolygon::new(6, 2.0_f64, 0.0, Vertex::new(3.0, -1.0)).unwrap();
        for (a, b) in moved.polygon().vertices().iter().zip(expected.polygon().vertices()) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rotate_full_turn() {
        let p = RegularPolygon::new(5, 2.0_f64, 12.0, Vertex::new(1.0, 1.0)).unwrap();
        let turned = p.rotate_degrees(360.0);
        assert_eq!(turned.polygon().vertices(), p.polygon().vertices());
        assert_relative_eq!(
            turned.rotation(),
            p.rotation() + 2.0 * std::f64::consts::PI,
            epsilon = 1e-12
        );
    }
}
