//! Polygon representation.
//!
//! This module provides:
//! - [`Polygon`], an ordered vertex cycle with cached edges and convexity
//! - [`RegularPolygon`], a parametric description that generates a `Polygon`
//! - Immutable translate and rotate transforms
//!
//! # Example
//!
//! ```
//! use sat2d::polygon::{make_polygon, make_regular_polygon};
//! use sat2d::Vertex;
//!
//! let triangle = make_polygon(vec![
//!     Vertex::new(0.0, 0.0),
//!     Vertex::new(4.0, 0.0),
//!     Vertex::new(0.0, 3.0),
//! ])
//! .unwrap();
//! assert!(triangle.is_convex());
//!
//! let square = make_regular_polygon(4, 2.0, 0.0, Vertex::new(0.0, 0.0)).unwrap();
//! let moved = square.translate(1.0, 1.0);
//! assert_eq!(moved.vertices()[0], Vertex::new(3.0, 1.0));
//! ```

mod core;
mod regular;

pub use self::core::{make_polygon, Polygon};
pub use regular::{make_regular_polygon, RegularPolygon};
