//! The GJK algorithm for intersection tests between coplanar convex shapes.

pub use self::cso_point::CSOPoint;
pub use self::gjk::{intersect, GJKResult, GjkOptions};
pub use self::simplex::{Simplex, SimplexShape};

mod cso_point;
mod gjk;
mod simplex;
