//! The closed set of collidable shapes and their shared capability interface.

use super::resolve_collision;
use crate::polygon::{Polygon, RegularPolygon};
use crate::primitives::Vector2;
use crate::sat::{collides, minimum_translation_vector};
use num_traits::Float;

/// Anything that can take part in a separating axis test.
///
/// Implementors only supply their vertex polygon; testing and resolution are
/// shared. Concave polygons are handled through their convex hull.
pub trait Collidable<F: Float> {
    /// Returns the polygon that represents this shape.
    fn as_polygon(&self) -> &Polygon<F>;

    /// Tests if this shape intersects `other`.
    fn collides<C: Collidable<F> + ?Sized>(&self, other: &C) -> bool {
        collides(self.as_polygon(), other.as_polygon())
    }

    /// Returns the minimum translation vector between this shape and `other`,
    /// or `None` if they do not intersect.
    fn resolution<C: Collidable<F> + ?Sized>(&self, other: &C) -> Option<(Vector2<F>, F)> {
        minimum_translation_vector(self.as_polygon(), other.as_polygon())
    }

    /// Returns this shape's polygon and `other`'s polygon moved out of it.
    fn resolve<C: Collidable<F> + ?Sized>(&self, other: &C) -> (Polygon<F>, Polygon<F>) {
        resolve_collision(self.as_polygon(), other.as_polygon())
    }
}

impl<F: Float> Collidable<F> for Polygon<F> {
    #[inline]
    fn as_polygon(&self) -> &Polygon<F> {
        self
    }
}

impl<F: Float> Collidable<F> for RegularPolygon<F> {
    #[inline]
    fn as_polygon(&self) -> &Polygon<F> {
        self.polygon()
    }
}

/// A regular or a general polygon.
///
/// # Example
///
/// ```
/// use sat2d::{make_polygon, Collidable, RegularPolygon, Shape, Vertex};
///
/// let shapes: Vec<Shape<f64>> = vec![
///     RegularPolygon::new(6, 1.0, 0.0, Vertex::new(0.0, 0.0)).unwrap().into(),
///     make_polygon(vec![
///         Vertex::new(0.5, 0.0),
///         Vertex::new(3.0, 0.0),
///         Vertex::new(3.0, 1.0),
///     ])
///     .unwrap()
///     .into(),
/// ];
///
/// assert!(shapes[0].collides(&shapes[1]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<F> {
    /// A polygon generated from regular-polygon parameters.
    Regular(RegularPolygon<F>),
    /// A polygon given by its vertices, convex or not.
    General(Polygon<F>),
}

impl<F: Float> Shape<F> {
    /// Tests if the shape is convex.
    pub fn is_convex(&self) -> bool {
        match self {
            // Regular polygons are always convex.
            Shape::Regular(_) => true,
            Shape::General(p) => p.is_convex(),
        }
    }

    /// Returns a copy moved by `(dx, dy)`, keeping the variant.
    pub fn translate(&self, dx: F, dy: F) -> Self {
        match self {
            Shape::Regular(r) => Shape::Regular(r.translate(dx, dy)),
            Shape::General(p) => Shape::General(p.translate(dx, dy)),
        }
    }
}

impl<F: Float> Collidable<F> for Shape<F> {
    fn as_polygon(&self) -> &Polygon<F> {
        match self {
            Shape::Regular(r) => r.polygon(),
            Shape::General(p) => p,
        }
    }
}

impl<F: Float> From<RegularPolygon<F>> for Shape<F> {
    fn from(r: RegularPolygon<F>) -> Self {
        Shape::Regular(r)
    }
}

impl<F: Float> From<Polygon<F>> for Shape<F> {
    fn from(p: Polygon<F>) -> Self {
        Shape::General(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::make_polygon;
    use crate::primitives::Vertex;

    fn concave() -> Polygon<f64> {
        make_polygon(vec![
            Vertex::new(2.0, 2.0),
            Vertex::new(0.0, 0.0),
            Vertex::new(-2.0, 2.0),
            Vertex::new(-2.0, -2.0),
            Vertex::new(2.0, -2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_dispatch_matches_free_functions() {
        let regular = RegularPolygon::new(4, 2.0_f64, 0.0, Vertex::new(0.0, 0.0)).unwrap();
        let other = RegularPolygon::new(4, 4.0_f64, 0.0, Vertex::new(4.0, 1.0)).unwrap();

        let a: Shape<f64> = regular.clone().into();
        let b: Shape<f64> = other.polygon().clone().into();

        assert!(a.collides(&b));
        assert_eq!(a.resolution(&b), Some((Vector2::new(2.0, 2.0), 2.0)));
        assert_eq!(a.resolution(&b), regular.resolution(&other));
        assert_eq!(a.resolve(&b), resolve_collision(regular.polygon(), other.polygon()));
    }

    #[test]
    fn test_mixed_receivers() {
        let regular = RegularPolygon::new(3, 1.0_f64, 90.0, Vertex::new(0.0, 1.5)).unwrap();
        let general = concave();
        // Regular against concave, concave against regular.
        assert_eq!(regular.collides(&general), general.collides(&regular));
        assert!(general.collides(&regular));
    }

    #[test]
    fn test_concave_resolution_matches_hull() {
        let shape: Shape<f64> = concave().into();
        assert!(!shape.is_convex());
        let probe: Shape<f64> = RegularPolygon::new(4, 1.0, 0.0, Vertex::new(0.0, 1.5))
            .unwrap()
            .into();
        let hull = concave().convex_hull();
        assert_eq!(shape.resolution(&probe), hull.resolution(&probe));
        assert!(shape.resolution(&probe).is_some());
    }

    #[test]
    fn test_translate_keeps_variant() {
        let r: Shape<f64> = RegularPolygon::new(5, 1.0, 0.0, Vertex::origin()).unwrap().into();
        let g: Shape<f64> = concave().into();
        assert!(matches!(r.translate(1.0, 2.0), Shape::Regular(_)));
        assert!(matches!(g.translate(1.0, 2.0), Shape::General(_)));
        assert_eq!(
            g.translate(1.0, 2.0).as_polygon().vertices()[0],
            Vertex::new(3.0, 4.0)
        );
        assert!(r.is_convex());
    }

    #[test]
    fn test_shapes_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Shape<f64>>();
        assert_send_sync::<Polygon<f32>>();
        assert_send_sync::<RegularPolygon<f64>>();
    }
}
