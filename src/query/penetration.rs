use core::mem;

use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::epa::{EpaOptions, EPA};
use crate::query::error::{self, IntersectError};
use crate::query::gjk::{self, GJKResult, GjkOptions};
use crate::shape::{InvalidShape, Plane, PointSet, ShapeRole};

/// The overlap between two intersecting shapes.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Penetration {
    /// How far the shapes overlap. Never negative.
    pub depth: Real,
    /// The direction along which the first shape must move to stop overlapping
    /// the second one. It points from the second shape into the first one.
    pub direction: UnitVector<Real>,
    /// The deepest point of the first shape inside of the second one.
    pub point1: Point<Real>,
    /// The deepest point of the second shape inside of the first one.
    ///
    /// `point1 - point2` is equal to `-depth * direction`.
    pub point2: Point<Real>,
}

impl Penetration {
    /// The translation to apply to the first shape for the shapes to be just touching.
    #[inline]
    pub fn translation(&self) -> Vector<Real> {
        *self.direction * self.depth
    }

    /// Swaps the roles of the two shapes.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.point1, &mut self.point2);
        self.direction = -self.direction;
    }

    /// Returns the penetration obtained by swapping the roles of the two shapes.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}

/// Configuration of the intersection queries.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectOptions {
    /// The normal of the plane shared by the shapes.
    ///
    /// If `None`, the plane is fitted to the vertices of both shapes, preferring the
    /// `+z` axis when they are all collinear.
    pub plane_normal: Option<UnitVector<Real>>,
    /// Maximum distance between a vertex and the shared plane, relative to the size
    /// of the shapes (or absolute for shapes smaller than one unit).
    pub coplanarity_tolerance: Real,
    /// Options of the GJK intersection test.
    pub gjk: GjkOptions,
    /// Options of the EPA penetration computation.
    pub epa: EpaOptions,
}

impl Default for IntersectOptions {
    fn default() -> Self {
        Self {
            plane_normal: None,
            coplanarity_tolerance: 1.0e-4,
            gjk: GjkOptions::default(),
            epa: EpaOptions::default(),
        }
    }
}

/// Computes the penetration between two convex coplanar shapes.
///
/// Returns `Ok(None)` if the shapes are disjoint or only touching. Each shape is
/// the set of vertices of a convex polygon; the vertex order does not matter.
pub fn intersect<G1, G2>(g1: &G1, g2: &G2) -> Result<Option<Penetration>, IntersectError>
where
    G1: ?Sized + PointSet,
    G2: ?Sized + PointSet,
{
    intersect_with_options(g1, g2, &IntersectOptions::default())
}

/// Computes the penetration between two convex coplanar shapes.
///
/// This allows a more fine grained control over the underlying GJK and EPA algorithms.
pub fn intersect_with_options<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &IntersectOptions,
) -> Result<Option<Penetration>, IntersectError>
where
    G1: ?Sized + PointSet,
    G2: ?Sized + PointSet,
{
    let plane = shared_plane(g1.points(), g2.points(), options)?;

    match gjk::intersect(g1, g2, &plane, &options.gjk)? {
        GJKResult::NoIntersection(_) => Ok(None),
        GJKResult::Intersection(simplex) => EPA::new()
            .refine(g1, g2, &plane, simplex, &options.epa)
            .map(Some),
    }
}

/// Tests whether two convex coplanar shapes are intersecting, without computing
/// the penetration.
pub fn intersection_test<G1, G2>(g1: &G1, g2: &G2) -> Result<bool, IntersectError>
where
    G1: ?Sized + PointSet,
    G2: ?Sized + PointSet,
{
    intersection_test_with_options(g1, g2, &IntersectOptions::default())
}

/// Tests whether two convex coplanar shapes are intersecting, without computing
/// the penetration.
///
/// The EPA options are ignored.
pub fn intersection_test_with_options<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &IntersectOptions,
) -> Result<bool, IntersectError>
where
    G1: ?Sized + PointSet,
    G2: ?Sized + PointSet,
{
    let plane = shared_plane(g1.points(), g2.points(), options)?;
    let res = gjk::intersect(g1, g2, &plane, &options.gjk)?;
    Ok(matches!(res, GJKResult::Intersection(_)))
}

/// Computes the plane containing the vertices of both shapes.
///
/// Fails if a shape is empty, has a non-finite vertex, or has a vertex further than
/// the coplanarity tolerance from the plane.
pub fn shared_plane(
    points1: &[Point<Real>],
    points2: &[Point<Real>],
    options: &IntersectOptions,
) -> Result<Plane, IntersectError> {
    error::check_vertices(points1, points2)?;

    let all_points = points1.iter().chain(points2.iter());
    let plane = match options.plane_normal {
        Some(normal) => Plane::new(normal, &points1[0]),
        None => Plane::fit_or_closest(all_points.clone(), &Vector::z_axis()),
    };

    let extent = all_points
        .map(|p| (p - points1[0]).norm())
        .fold(0.0, Real::max);
    let tolerance = options.coplanarity_tolerance * extent.max(1.0);

    for (role, points) in [(ShapeRole::First, points1), (ShapeRole::Second, points2)] {
        if let Some(id) = plane.first_point_off_plane(points, tolerance) {
            log::debug!("Vertex {} of the {} shape is off the shared plane.", id, role);
            return Err(IntersectError::invalid(role, InvalidShape::NotCoplanar(id)));
        }
    }

    Ok(plane)
}
