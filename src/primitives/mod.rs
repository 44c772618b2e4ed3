//! Vector algebra and the point/edge primitives polygons are built from.

mod edge;
mod vector2;
mod vector3;
mod vertex;

pub use edge::{calculate_angle, Edge};
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vertex::Vertex;
