use crate::math::{Point, Real, UnitVector, DEFAULT_EPSILON};
use crate::shape::{InvalidShape, Plane};
use crate::utils;

/// A convex polygon lying on a plane of the 3D space.
///
/// The vertices are stored counter-clockwise around the normal of [`ConvexPolygon::plane`],
/// without duplicated or collinear consecutive vertices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ConvexPolygon {
    points: Vec<Point<Real>>,
    normals: Vec<UnitVector<Real>>,
    plane: Plane,
}

impl ConvexPolygon {
    /// Creates a convex polygon from the ordered vertices of its boundary.
    ///
    /// The vertices may be given clockwise or counter-clockwise. Consecutive duplicates
    /// and vertices lying on the segment joining their neighbors are removed.
    ///
    /// Fails if `points` is empty, contains a non-finite coordinate, does not span a
    /// plane, or describes a non-convex or self-intersecting boundary.
    pub fn try_new(points: Vec<Point<Real>>) -> Result<Self, InvalidShape> {
        if points.is_empty() {
            return Err(InvalidShape::Empty);
        }

        if let Some(id) = points.iter().position(|p| !p.coords.iter().all(|e| e.is_finite())) {
            return Err(InvalidShape::NonFinite(id));
        }

        let plane = Plane::fit(&points).ok_or(InvalidShape::Flat)?;
        let extent = points
            .iter()
            .map(|p| (p - points[0]).norm())
            .fold(0.0, Real::max);
        let tolerance = DEFAULT_EPSILON.sqrt() * extent.max(1.0);

        if let Some(id) = plane.first_point_off_plane(&points, tolerance) {
            return Err(InvalidShape::NotCoplanar(id));
        }

        let mut points = points;
        points.dedup_by(|a, b| (*a - *b).norm() <= tolerance);
        while points.len() > 1 && (points[points.len() - 1] - points[0]).norm() <= tolerance {
            let _ = points.pop();
        }

        if signed_area(&points, &plane) < 0.0 {
            points.reverse();
        }

        let points = remove_collinear_vertices(points, &plane)?;
        let normals = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| {
                utils::ccw_edge_normal([a, b], &plane.normal).ok_or(InvalidShape::Flat)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ConvexPolygon {
            points,
            normals,
            plane,
        })
    }

    /// The vertices of this convex polygon, counter-clockwise around the plane normal.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The outward normals of the edges of this convex polygon.
    ///
    /// The `i`-th normal belongs to the edge starting at the `i`-th vertex.
    #[inline]
    pub fn normals(&self) -> &[UnitVector<Real>] {
        &self.normals
    }

    /// The plane containing this polygon.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// The area of this polygon.
    pub fn area(&self) -> Real {
        signed_area(&self.points, &self.plane)
    }
}

/// The signed area of a polygon, positive if it winds counter-clockwise around the plane normal.
fn signed_area(points: &[Point<Real>], plane: &Plane) -> Real {
    let origin = points[0];
    let mut area = 0.0;

    for (a, b) in points.iter().zip(points.iter().skip(1)) {
        area += (a - origin).cross(&(b - origin)).dot(plane.normal.as_ref());
    }

    area * 0.5
}

/// Removes the vertices where the boundary goes straight on, and checks every other
/// vertex turns left.
fn remove_collinear_vertices(
    points: Vec<Point<Real>>,
    plane: &Plane,
) -> Result<Vec<Point<Real>>, InvalidShape> {
    use na::RealField;

    let eps = DEFAULT_EPSILON.sqrt();
    let len = points.len();
    let mut result = Vec::with_capacity(len);
    let mut total_turn = 0.0;

    for i in 0..len {
        let prev = points[(i + len - 1) % len];
        let next = points[(i + 1) % len];
        let e1 = points[i] - prev;
        let e2 = next - points[i];
        let norms = e1.norm() * e2.norm();
        let sin = e1.cross(&e2).dot(plane.normal.as_ref()) / norms;
        let cos = e1.dot(&e2) / norms;

        if sin.abs() <= eps {
            if cos < 0.0 {
                // The boundary folds back onto itself.
                return Err(InvalidShape::NotConvex(i));
            }
        } else if sin < 0.0 {
            return Err(InvalidShape::NotConvex(i));
        } else {
            total_turn += sin.atan2(cos);
            result.push(points[i]);
        }
    }

    if result.len() < 3 {
        return Err(InvalidShape::Flat);
    }

    if !relative_eq!(total_turn, Real::two_pi(), epsilon = 0.1) {
        return Err(InvalidShape::SelfIntersecting);
    }

    Ok(result)
}
