use core::fmt;

use crate::math::{Point, Real};
use crate::shape::{InvalidShape, ShapeRole};

/// The stage of the intersection query that failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The Gilbert-Johnson-Keerthi intersection test.
    Gjk,
    /// The Expanding Polytope Algorithm computing the penetration.
    Epa,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Gjk => f.pad("GJK"),
            Stage::Epa => f.pad("EPA"),
        }
    }
}

/// Errors that can occur while testing two shapes for intersection.
///
/// A query never reports an error as "no intersection": when the shapes are
/// overlapping but the penetration could not be computed reliably, an error is
/// returned instead.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum IntersectError {
    /// One of the shapes violates the preconditions of the query.
    #[error("the {shape} shape is invalid: {error}")]
    InvalidInput {
        /// The shape that was rejected.
        shape: ShapeRole,
        /// Why it was rejected.
        #[source]
        error: InvalidShape,
    },
    /// A direction or an edge normal could not be computed because the points
    /// involved (almost) coincide.
    #[error("degenerate geometry encountered during {0}.")]
    DegenerateGeometry(Stage),
    /// The iteration limit was reached before the algorithm converged.
    #[error("{stage} did not converge after {iterations} iterations.")]
    NonConvergence {
        /// The algorithm that did not converge.
        stage: Stage,
        /// The number of iterations performed.
        iterations: usize,
    },
}

impl IntersectError {
    pub(crate) fn invalid(shape: ShapeRole, error: InvalidShape) -> Self {
        IntersectError::InvalidInput { shape, error }
    }
}

/// Checks that both shapes have at least one vertex, all of them finite.
pub(crate) fn check_vertices(
    points1: &[Point<Real>],
    points2: &[Point<Real>],
) -> Result<(), IntersectError> {
    for (role, points) in [(ShapeRole::First, points1), (ShapeRole::Second, points2)] {
        if points.is_empty() {
            return Err(IntersectError::invalid(role, InvalidShape::Empty));
        }

        if let Some(id) = points
            .iter()
            .position(|p| !p.coords.iter().all(|e| e.is_finite()))
        {
            return Err(IntersectError::invalid(role, InvalidShape::NonFinite(id)));
        }
    }

    Ok(())
}
