/*!
coplanar-gjk
============

**coplanar-gjk** detects overlaps between convex polygons lying in a shared
plane of 3D space and computes their penetration depth and direction, using
the Gilbert-Johnson-Keerthi algorithm followed by the Expanding Polytope
Algorithm.

```
# #[cfg(feature = "f32")] {
use coplanar_gjk::math::Point;
use coplanar_gjk::query;

let a = [
    Point::new(0.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 0.0),
    Point::new(1.0, 1.0, 0.0),
    Point::new(0.0, 1.0, 0.0),
];
let b: Vec<_> = a.iter().map(|p| Point::new(p.x + 0.5, p.y, p.z)).collect();

let penetration = query::intersect(&a[..], &b).unwrap().expect("the squares overlap");
assert!((penetration.depth - 0.5).abs() < 1.0e-5);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
///
/// Shapes are 3D point sets constrained to a common plane, so every type here
/// is three-dimensional even though the algorithms reason in two dimensions.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the ambient space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
