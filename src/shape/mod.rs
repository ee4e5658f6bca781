//! Shapes and shape capabilities consumed by the queries.

pub use self::convex_polygon::ConvexPolygon;
pub use self::error::{InvalidShape, ShapeRole};
pub use self::plane::Plane;
pub use self::point_set::PointSet;

mod convex_polygon;
mod error;
mod plane;
mod point_set;
