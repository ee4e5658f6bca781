use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// Rotates `v` by a quarter turn counter-clockwise around `plane_normal`.
///
/// For a `v` lying in the plane, the result lies in the same plane.
#[inline]
pub fn in_plane_perp(plane_normal: &UnitVector<Real>, v: &Vector<Real>) -> Vector<Real> {
    plane_normal.cross(v)
}

/// Computes the direction pointing toward the right-hand-side of an oriented segment
/// lying in the plane with normal `plane_normal`.
///
/// For the edges of a polygon wound counter-clockwise around `plane_normal`, this
/// is the outward normal. Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_edge_normal(
    pts: [&Point<Real>; 2],
    plane_normal: &UnitVector<Real>,
) -> Option<UnitVector<Real>> {
    let ab = *pts[1] - *pts[0];
    let res = ab.cross(plane_normal.as_ref());

    UnitVector::try_new(res, DEFAULT_EPSILON)
}
