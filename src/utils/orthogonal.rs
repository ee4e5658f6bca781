use crate::math::{Real, UnitVector, Vector};

/// Computes a unit vector orthogonal to `v`.
///
/// The basis axis least aligned with `v` is crossed with it, so the result is
/// well-conditioned for any non-zero input.
pub fn orthogonal_vector(v: &UnitVector<Real>) -> UnitVector<Real> {
    let axis = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vector::x()
    } else if v.y.abs() <= v.z.abs() {
        Vector::y()
    } else {
        Vector::z()
    };

    UnitVector::new_normalize(v.cross(&axis))
}

/// Removes from `v` its component along `plane_normal`.
#[inline]
pub fn project_on_plane(v: &Vector<Real>, plane_normal: &UnitVector<Real>) -> Vector<Real> {
    v - plane_normal.as_ref() * plane_normal.dot(v)
}
