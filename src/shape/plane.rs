use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::utils;

/// The plane shared by the vertices of the shapes given to a query.
///
/// The plane is the set of points `p` such that `normal.dot(&p.coords) == bias`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    /// The unit normal of the plane.
    ///
    /// Polygons are said to be counter-clockwise when they wind counter-clockwise
    /// around this normal.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub bias: Real,
}

impl Plane {
    /// Builds the plane with the given normal and passing through `point`.
    pub fn new(normal: UnitVector<Real>, point: &Point<Real>) -> Self {
        Plane {
            bias: normal.dot(&point.coords),
            normal,
        }
    }

    /// Computes the plane through a set of points.
    ///
    /// The normal is derived from the widest triangle formed by the first point,
    /// the point furthest from it, and the point furthest from the line through
    /// those two. Its sign is chosen so that its largest component is positive;
    /// points in the `xy` plane therefore get the `+z` normal.
    ///
    /// Returns `None` if there are fewer than three non-collinear points. This does
    /// not check that the points are actually coplanar.
    pub fn fit<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<Real>>,
        I::IntoIter: Clone,
    {
        let points = points.into_iter();
        let (p0, dir) = principal_direction(points.clone())?;
        let len = dir.norm();

        let mut best_normal = Vector::zeros();
        let mut best_norm = 0.0;

        for p in points {
            let normal = dir.cross(&(p - p0));
            let norm = normal.norm();

            if norm > best_norm {
                best_norm = norm;
                best_normal = normal;
            }
        }

        // The widest triangle must be taller than a fraction of its base.
        if best_norm <= DEFAULT_EPSILON.sqrt() * len * len {
            return None;
        }

        let normal = canonical_sign(UnitVector::new_normalize(best_normal));
        Some(Self::new(normal, &p0))
    }

    /// Computes the plane through a set of points, even if they are collinear.
    ///
    /// If [`Plane::fit`] fails, the returned plane contains the line through the points
    /// and its normal is the closest possible to `preferred_normal`. If all the points
    /// coincide (or there are none), the plane has the normal `preferred_normal`.
    pub fn fit_or_closest<'a, I>(points: I, preferred_normal: &UnitVector<Real>) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
        I::IntoIter: Clone,
    {
        let points = points.into_iter();

        if let Some(plane) = Self::fit(points.clone()) {
            return plane;
        }

        match principal_direction(points) {
            Some((p0, dir)) => {
                let dir = UnitVector::new_normalize(dir);
                let projected = utils::project_on_plane(preferred_normal.as_ref(), &dir);
                let normal = UnitVector::try_new(projected, 0.1)
                    .unwrap_or_else(|| utils::orthogonal_vector(&dir));
                Self::new(normal, &p0)
            }
            None => Self::new(*preferred_normal, &Point::origin()),
        }
    }

    /// The signed distance between `point` and this plane.
    #[inline]
    pub fn signed_distance(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) - self.bias
    }

    /// Index of the first point further than `tolerance` from this plane.
    pub fn first_point_off_plane(&self, points: &[Point<Real>], tolerance: Real) -> Option<usize> {
        points
            .iter()
            .position(|p| self.signed_distance(p).abs() > tolerance)
    }
}

/// The first point, and the vector from it to the point furthest from it.
///
/// Returns `None` if the points are empty or all coincide.
fn principal_direction<'a>(
    points: impl Iterator<Item = &'a Point<Real>> + Clone,
) -> Option<(Point<Real>, Vector<Real>)> {
    let p0 = *points.clone().next()?;
    let mut far = p0;
    let mut far_dist = 0.0;

    for p in points {
        let dist = (p - p0).norm_squared();

        if dist > far_dist {
            far_dist = dist;
            far = *p;
        }
    }

    if far_dist <= DEFAULT_EPSILON * DEFAULT_EPSILON {
        None
    } else {
        Some((p0, far - p0))
    }
}

fn canonical_sign(normal: UnitVector<Real>) -> UnitVector<Real> {
    if normal[normal.iamax()] < 0.0 {
        -normal
    } else {
        normal
    }
}
