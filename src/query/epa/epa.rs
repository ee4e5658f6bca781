//! Penetration depth between coplanar shapes using the Expanding Polytope Algorithm.
//!
//! Starting from the triangle found by GJK, the polygon enclosing the origin is
//! repeatedly grown toward the boundary of the CSO, along the normal of its edge
//! closest to the origin, until that edge is part of the CSO boundary.

use ordered_float::OrderedFloat;

use crate::math::{Point, Real, UnitVector, DEFAULT_EPSILON};
use crate::query::error::{self, IntersectError, Stage};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::query::Penetration;
use crate::shape::{Plane, PointSet};
use crate::utils;

/// Configuration of the EPA convergence criteria.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpaOptions {
    /// The expansion stops once the support point along the normal of the closest
    /// edge is no further than this distance from that edge.
    ///
    /// The tolerance is scaled by the distance of the support point to the origin
    /// when that distance exceeds one.
    pub tolerance: Real,
    /// Number of iterations allowed per vertex of the input shapes.
    pub max_iterations_per_vertex: usize,
    /// Number of iterations allowed regardless of the shapes' sizes.
    pub min_iterations: usize,
}

impl EpaOptions {
    /// The maximum number of iterations for shapes with `num_vertices` vertices in total.
    pub fn max_iterations(&self, num_vertices: usize) -> usize {
        self.max_iterations_per_vertex
            .saturating_mul(num_vertices)
            .saturating_add(self.min_iterations)
    }
}

impl Default for EpaOptions {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-4,
            max_iterations_per_vertex: 4,
            min_iterations: 16,
        }
    }
}

/// An edge of the polytope, with the projection of the origin on its supporting line.
#[derive(Copy, Clone, Debug)]
struct Edge {
    /// Index of the second endpoint. The first one precedes it in the polytope.
    end: usize,
    normal: UnitVector<Real>,
    dist: Real,
    bcoords: [Real; 2],
}

impl Edge {
    fn new(vertices: &[CSOPoint], end: usize, plane_normal: &UnitVector<Real>) -> Option<Self> {
        let start = (end + vertices.len() - 1) % vertices.len();
        let a = &vertices[start].point;
        let b = &vertices[end].point;
        let normal = utils::ccw_edge_normal([a, b], plane_normal)?;
        let dist = normal.dot(&a.coords);

        Some(Edge {
            end,
            normal,
            dist,
            bcoords: project_origin(a, b),
        })
    }

    fn start(&self, vertices: &[CSOPoint]) -> usize {
        (self.end + vertices.len() - 1) % vertices.len()
    }

    fn closest_points(&self, vertices: &[CSOPoint]) -> (Point<Real>, Point<Real>) {
        let a = &vertices[self.start(vertices)];
        let b = &vertices[self.end];

        (
            a.orig1 * self.bcoords[0] + b.orig1.coords * self.bcoords[1],
            a.orig2 * self.bcoords[0] + b.orig2.coords * self.bcoords[1],
        )
    }
}

/// The Expanding Polytope Algorithm restricted to a plane.
///
/// The polytope buffer is kept between calls to [`EPA::refine`] so that the same
/// instance can be reused for many queries without reallocating.
#[derive(Default)]
pub struct EPA {
    vertices: Vec<CSOPoint>,
}

impl EPA {
    /// Creates a new instance of the Expanding Polytope Algorithm.
    pub fn new() -> Self {
        EPA::default()
    }

    /// The current polytope, counter-clockwise around the plane normal.
    ///
    /// After a successful call to [`EPA::refine`], this approximates the boundary
    /// of the CSO near the origin.
    pub fn polytope(&self) -> &[CSOPoint] {
        &self.vertices
    }

    /// Computes the penetration between `g1` and `g2`, lying on `plane`.
    ///
    /// The `simplex` must be the triangle enclosing the origin returned by
    /// [`crate::query::gjk::intersect`] for the same shapes.
    pub fn refine<G1, G2>(
        &mut self,
        g1: &G1,
        g2: &G2,
        plane: &Plane,
        simplex: Simplex,
        options: &EpaOptions,
    ) -> Result<Penetration, IntersectError>
    where
        G1: ?Sized + PointSet,
        G2: ?Sized + PointSet,
    {
        error::check_vertices(g1.points(), g2.points())?;

        let normal = &plane.normal;
        self.vertices.clear();
        self.vertices.extend(simplex.into_polytope());

        if self.vertices.len() < 3 {
            log::debug!("EPA: the initial simplex is not a triangle.");
            return Err(IntersectError::DegenerateGeometry(Stage::Epa));
        }

        let area = signed_area(&self.vertices, normal);
        if area.abs() <= DEFAULT_EPSILON {
            log::debug!("EPA: the initial simplex is flat.");
            return Err(IntersectError::DegenerateGeometry(Stage::Epa));
        } else if area < 0.0 {
            self.vertices.reverse();
        }

        let max_iters = options.max_iterations(g1.points().len() + g2.points().len());
        self.expand(g1, g2, normal, max_iters, options)
    }

    /// Grows the current polytope toward the CSO boundary until its closest edge
    /// lies on that boundary.
    fn expand<G1, G2>(
        &mut self,
        g1: &G1,
        g2: &G2,
        normal: &UnitVector<Real>,
        max_iters: usize,
        options: &EpaOptions,
    ) -> Result<Penetration, IntersectError>
    where
        G1: ?Sized + PointSet,
        G2: ?Sized + PointSet,
    {
        for niter in 0..max_iters {
            let edge = self.closest_edge(normal).ok_or_else(|| {
                log::debug!("EPA: the polytope has no valid edge.");
                IntersectError::DegenerateGeometry(Stage::Epa)
            })?;

            let support = CSOPoint::from_shapes(g1, g2, &edge.normal);
            let support_dist = edge.normal.dot(&support.point.coords);
            let tolerance = options.tolerance * support_dist.abs().max(1.0);

            log::trace!(
                "EPA iteration {}: edge distance {}, support distance {}.",
                niter,
                edge.dist,
                support_dist
            );

            // A support point already in the polytope cannot expand it any further.
            if support_dist - edge.dist <= tolerance || self.vertices.contains(&support) {
                let (point1, point2) = edge.closest_points(&self.vertices);

                return Ok(Penetration {
                    depth: edge.dist.max(0.0),
                    direction: -edge.normal,
                    point1,
                    point2,
                });
            }

            self.vertices.insert(edge.end, support);
        }

        log::debug!("EPA: no convergence after {} iterations.", max_iters);
        Err(IntersectError::NonConvergence {
            stage: Stage::Epa,
            iterations: max_iters,
        })
    }

    /// The edge of the polytope closest to the origin, ignoring zero-length edges.
    ///
    /// Ties are resolved in favor of the first edge found.
    fn closest_edge(&self, plane_normal: &UnitVector<Real>) -> Option<Edge> {
        (0..self.vertices.len())
            .filter_map(|end| Edge::new(&self.vertices, end, plane_normal))
            .min_by_key(|edge| OrderedFloat(edge.dist))
    }
}

/// Twice the signed area of a polygon of CSO points, positive if it winds
/// counter-clockwise around `normal`.
fn signed_area(vertices: &[CSOPoint], normal: &UnitVector<Real>) -> Real {
    let origin = vertices[0].point;

    vertices
        .iter()
        .zip(vertices.iter().skip(1))
        .map(|(a, b)| (a.point - origin).cross(&(b.point - origin)).dot(normal.as_ref()))
        .sum()
}

/// Barycentric coordinates of the projection of the origin on the segment `[a, b]`.
fn project_origin(a: &Point<Real>, b: &Point<Real>) -> [Real; 2] {
    let ab = *b - *a;
    let sqnab = ab.norm_squared();
    let t = if sqnab > 0.0 {
        (-a.coords.dot(&ab) / sqnab).clamp(0.0, 1.0)
    } else {
        0.0
    };

    [1.0 - t, t]
}
