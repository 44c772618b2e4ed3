//! Core polygon type and its immutable transforms.

use crate::error::GeometryError;
use crate::hull::convex_hull;
use crate::primitives::{calculate_angle, Edge, Vector2, Vertex};
use crate::tolerance::round_coordinate;
use num_traits::Float;

/// A simple polygon with a cached, cyclic edge list.
///
/// Vertices are expected in counter-clockwise order. The polygon is implicitly
/// closed: `edges[i]` runs from `vertices[i]` to `vertices[(i + 1) % n]`.
///
/// The convexity flag is computed once at construction. Transforms never
/// mutate a polygon; they return a new one with a freshly computed flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    vertices: Vec<Vertex<F>>,
    edges: Vec<Edge<F>>,
    convex: bool,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from vertices in counter-clockwise order.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::TooFewVertices`] for fewer than three vertices.
    /// - [`GeometryError::DegenerateEdge`] if two consecutive vertices
    ///   (including the last and the first) coincide.
    ///
    /// # Example
    ///
    /// ```
    /// use sat2d::{Polygon, Vertex};
    ///
    /// let square = Polygon::from_vertices(vec![
    ///     Vertex::new(0.0, 0.0),
    ///     Vertex::new(1.0, 0.0),
    ///     Vertex::new(1.0, 1.0),
    ///     Vertex::new(0.0, 1.0),
    /// ])
    /// .unwrap();
    ///
    /// assert!(square.is_convex());
    /// assert_eq!(square.edges().len(), 4);
    /// ```
    pub fn from_vertices(vertices: Vec<Vertex<F>>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }

        let n = vertices.len();
        let edges = (0..n)
            .map(|i| Edge::from_pair(vertices[i], vertices[(i + 1) % n]))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::assemble(vertices, edges))
    }

    /// Rebuilds a polygon from vertices obtained by transforming an already
    /// valid polygon.
    fn rebuild(vertices: Vec<Vertex<F>>) -> Self {
        let n = vertices.len();
        let edges = (0..n)
            .map(|i| Edge::between(vertices[i], vertices[(i + 1) % n]))
            .collect();
        Self::assemble(vertices, edges)
    }

    fn assemble(vertices: Vec<Vertex<F>>, edges: Vec<Edge<F>>) -> Self {
        let convex = edges_are_convex(&edges);
        Self {
            vertices,
            edges,
            convex,
        }
    }

    /// Returns the vertices in order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex<F>] {
        &self.vertices
    }

    /// Returns the edges; `edges()[i]` starts at `vertices()[i]`.
    #[inline]
    pub fn edges(&self) -> &[Edge<F>] {
        &self.edges
    }

    /// Returns the number of vertices (always at least three).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Tests if the polygon is convex.
    ///
    /// A polygon is convex when every interior angle is at most `π`, so
    /// collinear runs of vertices still count as convex.
    #[inline]
    pub fn is_convex(&self) -> bool {
        self.convex
    }

    /// Returns the centroid, taken as the arithmetic mean of the vertices.
    pub fn centroid(&self) -> Vertex<F> {
        let n = F::from(self.vertices.len()).unwrap();
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((F::zero(), F::zero()), |(sx, sy), v| (sx + v.x, sy + v.y));
        Vertex::new(sx / n, sy / n)
    }

    /// Returns the signed area using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        let twice = self.edges.iter().fold(F::zero(), |acc, e| {
            acc + e.point().x * e.next().y - e.next().x * e.point().y
        });
        twice / F::from(2.0).unwrap()
    }

    /// Returns the absolute area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the perimeter, the sum of the cached edge lengths.
    pub fn perimeter(&self) -> F {
        self.edges
            .iter()
            .fold(F::zero(), |acc, e| acc + e.length())
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn translate(&self, dx: F, dy: F) -> Self {
        self.translate_by(Vector2::new(dx, dy))
    }

    /// Returns a copy moved by `offset`.
    pub fn translate_by(&self, offset: Vector2<F>) -> Self {
        Self::rebuild(self.vertices.iter().map(|&v| v + offset).collect())
    }

    /// Returns a copy rotated counter-clockwise by `radians` about `pivot`.
    ///
    /// Coordinates are rounded to [`VERTEX_DECIMALS`](crate::tolerance::VERTEX_DECIMALS)
    /// places so that a full turn reproduces the original vertices.
    pub fn rotate(&self, radians: F, pivot: Vertex<F>) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::rebuild(
            self.vertices
                .iter()
                .map(|v| {
                    let r = v.rotated_about(pivot, sin, cos);
                    Vertex::new(round_coordinate(r.x), round_coordinate(r.y))
                })
                .collect(),
        )
    }

    /// Returns a copy rotated by `degrees` about `pivot`.
    pub fn rotate_degrees(&self, degrees: F, pivot: Vertex<F>) -> Self {
        self.rotate(degrees.to_radians(), pivot)
    }

    /// Returns a copy rotated by `radians` about the origin.
    pub fn rotate_about_origin(&self, radians: F) -> Self {
        self.rotate(radians, Vertex::origin())
    }

    /// Returns the convex hull of this polygon's vertices as a new polygon.
    ///
    /// Collinear inputs have no area and therefore no hull polygon; in that
    /// case an unchanged copy is returned.
    pub fn convex_hull(&self) -> Self {
        let hull = convex_hull(&self.vertices);
        if hull.len() < 3 {
            return self.clone();
        }
        Self::rebuild(hull)
    }
}

/// Creates a polygon from vertices in counter-clockwise order.
///
/// Shorthand for [`Polygon::from_vertices`].
pub fn make_polygon<F: Float>(vertices: Vec<Vertex<F>>) -> Result<Polygon<F>, GeometryError> {
    Polygon::from_vertices(vertices)
}

fn edges_are_convex<F: Float>(edges: &[Edge<F>]) -> bool {
    let pi = F::from(std::f64::consts::PI).unwrap();
    let n = edges.len();
    (0..n).all(|i| calculate_angle(&edges[i], &edges[(i + 1) % n]) <= pi)
}
