//! The Gilbert-Johnson-Keerthi intersection test, restricted to a plane.
//!
//! The shapes overlap if and only if their Minkowski difference (the CSO)
//! contains the origin. GJK builds simplices (points, segments, then triangles)
//! out of support points of the CSO, each time searching toward the origin,
//! until either a triangle encloses the origin or a support point fails to
//! pass it.
//!
//! Because the shapes share a plane, the CSO lies in the parallel plane through
//! the origin and every search direction is kept in that plane.

use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::error::{self, IntersectError, Stage};
use crate::query::gjk::{CSOPoint, Simplex, SimplexShape};
use crate::shape::{PointSet, Plane};
use crate::utils;

/// Results of the GJK algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum GJKResult {
    /// The shapes are intersecting.
    ///
    /// The simplex is a triangle of CSO points enclosing the origin, ready to be
    /// expanded by the EPA.
    Intersection(Simplex),
    /// The shapes are disjoint or only touching.
    ///
    /// The direction is an axis along which the CSO does not extend past the origin,
    /// i.e., the first shape does not extend past the second one.
    NoIntersection(UnitVector<Real>),
}

/// Configuration of the GJK iteration limit.
///
/// The algorithm is stopped after
/// `max_iterations_per_vertex * (n1 + n2) + min_iterations` iterations, where `n1`
/// and `n2` are the numbers of vertices of the shapes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GjkOptions {
    /// Number of iterations allowed per vertex of the input shapes.
    pub max_iterations_per_vertex: usize,
    /// Number of iterations allowed regardless of the shapes' sizes.
    pub min_iterations: usize,
}

impl GjkOptions {
    /// The maximum number of iterations for shapes with `num_vertices` vertices in total.
    pub fn max_iterations(&self, num_vertices: usize) -> usize {
        self.max_iterations_per_vertex
            .saturating_mul(num_vertices)
            .saturating_add(self.min_iterations)
    }
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self {
            max_iterations_per_vertex: 4,
            min_iterations: 16,
        }
    }
}

/// How the simplex relates to the origin after a containment test.
enum Evolution {
    /// The simplex is a triangle enclosing the origin.
    ContainsOrigin,
    /// Keep searching along the given direction.
    Search(UnitVector<Real>),
    /// The origin lies on the line supporting the segment simplex. The CSO must
    /// extend on both sides of that line for the origin to be inside of it.
    OnSegmentLine(UnitVector<Real>),
}

/// Tests whether the shapes `g1` and `g2`, lying on `plane`, are intersecting.
///
/// Shapes that are only touching (the origin is on the boundary of their CSO) are
/// not considered intersecting.
pub fn intersect<G1, G2>(
    g1: &G1,
    g2: &G2,
    plane: &Plane,
    options: &GjkOptions,
) -> Result<GJKResult, IntersectError>
where
    G1: ?Sized + PointSet,
    G2: ?Sized + PointSet,
{
    error::check_vertices(g1.points(), g2.points())?;

    let normal = &plane.normal;
    let max_iters = options.max_iterations(g1.points().len() + g2.points().len());
    let mut simplex = Simplex::new();
    let mut dir = initial_direction(normal);

    let w0 = CSOPoint::from_shapes(g1, g2, &dir);
    if dir.dot(&w0.point.coords) <= 0.0 {
        log::trace!("GJK: the first support point does not pass the origin.");
        return Ok(GJKResult::NoIntersection(dir));
    }

    let _ = simplex.add_point(w0);
    dir = -dir;

    for niter in 0..max_iters {
        let w = CSOPoint::from_shapes(g1, g2, &dir);

        if dir.dot(&w.point.coords) <= 0.0 {
            log::trace!("GJK: no intersection found after {} iterations.", niter + 1);
            return Ok(GJKResult::NoIntersection(dir));
        }

        if !simplex.add_point(w) {
            return Err(IntersectError::DegenerateGeometry(Stage::Gjk));
        }

        match evolve(&mut simplex, normal)? {
            Evolution::ContainsOrigin => {
                log::trace!("GJK: intersection found after {} iterations.", niter + 1);
                return Ok(GJKResult::Intersection(simplex));
            }
            Evolution::Search(new_dir) => dir = new_dir,
            Evolution::OnSegmentLine(perp) => {
                let probe = CSOPoint::from_shapes(g1, g2, &-*perp);

                if probe.point.coords.dot(&-*perp) <= 0.0 {
                    log::trace!("GJK: the origin lies on the boundary of the CSO.");
                    return Ok(GJKResult::NoIntersection(-perp));
                }

                dir = perp;
            }
        }
    }

    log::debug!("GJK: no convergence after {} iterations.", max_iters);
    Err(IntersectError::NonConvergence {
        stage: Stage::Gjk,
        iterations: max_iters,
    })
}

/// The first basis axis not (almost) orthogonal to the plane, projected on it.
fn initial_direction(normal: &UnitVector<Real>) -> UnitVector<Real> {
    let axis = if normal.x * normal.x < 0.5 {
        Vector::x()
    } else {
        Vector::y()
    };

    UnitVector::new_normalize(utils::project_on_plane(&axis, normal))
}

/// Checks if the simplex encloses the origin, and otherwise reduces it and computes
/// the next search direction.
fn evolve(simplex: &mut Simplex, normal: &UnitVector<Real>) -> Result<Evolution, IntersectError> {
    match simplex.shape() {
        SimplexShape::Empty | SimplexShape::Point { .. } => {
            Err(IntersectError::DegenerateGeometry(Stage::Gjk))
        }
        SimplexShape::Segment { b, a } => {
            let ab = b.point - a.point;
            let ao = -a.point.coords;
            let perp = utils::in_plane_perp(normal, &ab);
            let perp = UnitVector::try_new(perp, DEFAULT_EPSILON)
                .ok_or(IntersectError::DegenerateGeometry(Stage::Gjk))?;
            let side = perp.dot(&ao);

            if side > 0.0 {
                Ok(Evolution::Search(perp))
            } else if side < 0.0 {
                Ok(Evolution::Search(-perp))
            } else {
                Ok(Evolution::OnSegmentLine(perp))
            }
        }
        SimplexShape::Triangle { b, c, a } => {
            let ab = b.point - a.point;
            let ac = c.point - a.point;
            let ao = -a.point.coords;
            let ab_perp = edge_normal_away_from(normal, &ab, &ac)?;
            let ac_perp = edge_normal_away_from(normal, &ac, &ab)?;

            if ab_perp.dot(&ao) >= 0.0 {
                // The origin is outside of the edge AB: C is useless.
                let _ = simplex.remove(1);
                Ok(Evolution::Search(ab_perp))
            } else if ac_perp.dot(&ao) >= 0.0 {
                // The origin is outside of the edge AC: B is useless.
                let _ = simplex.remove(0);
                Ok(Evolution::Search(ac_perp))
            } else {
                Ok(Evolution::ContainsOrigin)
            }
        }
    }
}

/// The unit in-plane normal of `edge` pointing away from `opposite`.
fn edge_normal_away_from(
    normal: &UnitVector<Real>,
    edge: &Vector<Real>,
    opposite: &Vector<Real>,
) -> Result<UnitVector<Real>, IntersectError> {
    let perp = UnitVector::try_new(utils::in_plane_perp(normal, edge), DEFAULT_EPSILON)
        .ok_or(IntersectError::DegenerateGeometry(Stage::Gjk))?;
    let side = perp.dot(opposite);

    if side < 0.0 {
        Ok(perp)
    } else if side > 0.0 {
        Ok(-perp)
    } else {
        // The three vertices are collinear.
        Err(IntersectError::DegenerateGeometry(Stage::Gjk))
    }
}
