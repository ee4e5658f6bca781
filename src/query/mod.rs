//! Intersection queries between convex coplanar shapes.
//!
//! The most general methods provided by this module are:
//!
//! * [`query::intersect()`] to compute the penetration depth and direction of two shapes.
//! * [`query::intersection_test()`] to determine if two shapes are intersecting or not.
//!
//! Both have a `_with_options` variant taking an [`IntersectOptions`] to choose the
//! shared plane and the convergence criteria.
//!
//! The two stages of these queries are also exposed separately: [`gjk::intersect`]
//! decides whether the shapes overlap, and [`epa::EPA`] computes the penetration
//! from the simplex found by the GJK.
//!
//! [`query::intersect()`]: crate::query::intersect
//! [`query::intersection_test()`]: crate::query::intersection_test

pub use self::error::{IntersectError, Stage};
pub use self::penetration::{
    intersect, intersect_with_options, intersection_test, intersection_test_with_options,
    shared_plane, IntersectOptions, Penetration,
};

pub mod epa;
mod error;
pub mod gjk;
mod penetration;
