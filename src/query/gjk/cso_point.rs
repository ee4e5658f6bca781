use crate::math::{Point, Real, Vector};
use crate::shape::PointSet;
use core::ops::Sub;

/// A vertex of the Minkowski difference of two shapes, also called their
/// Configuration-Space Obstacle (CSO).
///
/// Both shapes lie on the same plane, so their CSO lies on the parallel plane
/// through the origin. The two vertices it was computed from are kept to report
/// witness points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point on the CSO. This is equal to `self.orig1 - self.orig2`.
    pub point: Point<Real>,
    /// The original point on the first shape used to compute `self.point`.
    pub orig1: Point<Real>,
    /// The original point on the second shape used to compute `self.point`.
    pub orig2: Point<Real>,
}

impl CSOPoint {
    /// Initializes a CSO point with `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, orig2: Point<Real>) -> Self {
        CSOPoint {
            point: Point::from(orig1 - orig2),
            orig1,
            orig2,
        }
    }

    /// CSO point where all components are set to zero.
    pub fn origin() -> Self {
        CSOPoint::new(Point::origin(), Point::origin())
    }

    /// Computes the support point of the CSO of `g1` and `g2` toward the direction `dir`.
    ///
    /// This is the vertex of `g1` furthest along `dir` minus the vertex of `g2`
    /// furthest along `-dir`, each found by scanning its own shape.
    ///
    /// # Panics
    ///
    /// Panics if one of the shapes has no vertex.
    pub fn from_shapes<G1, G2>(g1: &G1, g2: &G2, dir: &Vector<Real>) -> Self
    where
        G1: ?Sized + PointSet,
        G2: ?Sized + PointSet,
    {
        let sp1 = g1.support_point(dir);
        let sp2 = g2.support_point(&-dir);

        CSOPoint::new(sp1, sp2)
    }
}

impl Sub<CSOPoint> for CSOPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: CSOPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
