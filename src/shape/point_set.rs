//! Traits for shapes described by a finite set of vertices.

use crate::math::{Point, Real, Vector};
use crate::shape::ConvexPolygon;
use crate::utils;

/// A shape represented by the vertices of its convex hull.
///
/// The queries of this crate only need to scan the vertices of a shape, so any
/// container able to expose them as a slice can take part in a query. The
/// vertices are expected to lie on a common plane; their order does not matter
/// to the support function.
pub trait PointSet {
    /// The vertices of this shape.
    fn points(&self) -> &[Point<Real>];

    /// The index of the vertex maximizing its dot product with `dir`.
    ///
    /// Ties are resolved in favor of the first vertex. Panics if the shape has no vertex.
    #[inline]
    fn support_point_id(&self, dir: &Vector<Real>) -> usize {
        utils::point_cloud_support_point_id(dir, self.points())
    }

    /// The vertex maximizing its dot product with `dir`.
    ///
    /// Panics if the shape has no vertex.
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.points()[self.support_point_id(dir)]
    }
}

impl PointSet for [Point<Real>] {
    #[inline]
    fn points(&self) -> &[Point<Real>] {
        self
    }
}

impl PointSet for Vec<Point<Real>> {
    #[inline]
    fn points(&self) -> &[Point<Real>] {
        self
    }
}

impl<const N: usize> PointSet for [Point<Real>; N] {
    #[inline]
    fn points(&self) -> &[Point<Real>] {
        self
    }
}

impl PointSet for ConvexPolygon {
    #[inline]
    fn points(&self) -> &[Point<Real>] {
        ConvexPolygon::points(self)
    }
}
