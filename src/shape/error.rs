use core::fmt;

/// Reasons for a vertex set to be rejected as a convex polygon.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidShape {
    /// The shape has no vertex.
    #[error("a shape must contain at least one vertex.")]
    Empty,
    /// A vertex has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite coordinate.")]
    NonFinite(usize),
    /// A vertex lies too far from the plane shared by the shapes.
    #[error("the vertex {0} does not lie on the shared plane.")]
    NotCoplanar(usize),
    /// All the vertices are collinear or coincident, so they do not enclose any area.
    #[error("the vertices do not enclose any area.")]
    Flat,
    /// The boundary turns the wrong way at a vertex.
    #[error("the polygon is not convex at vertex {0}.")]
    NotConvex(usize),
    /// The boundary winds around its interior more than once.
    #[error("the polygon boundary intersects itself.")]
    SelfIntersecting,
}

/// Identifies one of the two shapes given to a query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeRole {
    /// The first shape, `A` in the Minkowski difference `A - B`.
    First,
    /// The second shape, `B` in the Minkowski difference `A - B`.
    Second,
}

impl fmt::Display for ShapeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeRole::First => f.pad("first"),
            ShapeRole::Second => f.pad("second"),
        }
    }
}
