//! sat2d - Separating Axis Theorem collision for 2D polygons
//!
//! Detects and resolves intersections between regular and arbitrary
//! (possibly concave) polygons. Every operation is a pure function over
//! immutable values, so pairs can be tested from as many threads as needed.
//!
//! # Example
//!
//! ```
//! use sat2d::{collides, make_regular_polygon, minimum_translation_vector, Vector2, Vertex};
//!
//! let a = make_regular_polygon(4, 2.0, 0.0, Vertex::new(0.0, 0.0)).unwrap();
//! let far = make_regular_polygon(4, 2.0, 0.0, Vertex::new(4.0, 4.0)).unwrap();
//! let near = make_regular_polygon(4, 4.0, 0.0, Vertex::new(4.0, 1.0)).unwrap();
//!
//! assert!(!collides(&a, &far));
//! assert_eq!(
//!     minimum_translation_vector(&a, &near),
//!     Some((Vector2::new(2.0, 2.0), 2.0))
//! );
//! ```

pub mod collision;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod primitives;
pub mod sat;
pub mod tolerance;

pub use collision::{resolve_collision, Collidable, Shape};
pub use error::GeometryError;
pub use hull::convex_hull;
pub use polygon::{make_polygon, make_regular_polygon, Polygon, RegularPolygon};
pub use primitives::{calculate_angle, Edge, Vector2, Vector3, Vertex};
pub use sat::{collides, minimum_translation_vector};
pub use tolerance::{RESOLUTION_DECIMALS, VERTEX_DECIMALS};
