use arrayvec::ArrayVec;

use crate::query::gjk::CSOPoint;

/// The simplex evolved by the GJK algorithm: a point, a segment or a triangle.
///
/// Vertices are kept in insertion order, so the last vertex is always the most
/// recent support point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Simplex {
    vertices: ArrayVec<CSOPoint, 3>,
}

/// A view of a [`Simplex`] tagged by its number of vertices.
///
/// Vertex names follow the usual GJK convention: `a` is the most recent support
/// point, `b` the oldest one, and `c` the one in between.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimplexShape<'a> {
    /// The simplex has no vertex yet.
    Empty,
    /// A single support point.
    Point {
        /// The only vertex.
        a: &'a CSOPoint,
    },
    /// A segment.
    Segment {
        /// The oldest vertex.
        b: &'a CSOPoint,
        /// The most recent vertex.
        a: &'a CSOPoint,
    },
    /// A triangle.
    Triangle {
        /// The oldest vertex.
        b: &'a CSOPoint,
        /// The middle vertex.
        c: &'a CSOPoint,
        /// The most recent vertex.
        a: &'a CSOPoint,
    },
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Self {
        Simplex::default()
    }

    /// Adds a point to this simplex.
    ///
    /// Returns `false`, leaving the simplex unchanged, if it is already a triangle.
    pub fn add_point(&mut self, pt: CSOPoint) -> bool {
        self.vertices.try_push(pt).is_ok()
    }

    /// Removes the `i`-th vertex, keeping the order of the others.
    pub fn remove(&mut self, i: usize) -> CSOPoint {
        self.vertices.remove(i)
    }

    /// The vertices of this simplex, in insertion order.
    pub fn points(&self) -> &[CSOPoint] {
        &self.vertices
    }

    /// The number of vertices of this simplex.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Is this simplex empty?
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// This simplex, tagged by its number of vertices.
    pub fn shape(&self) -> SimplexShape<'_> {
        match self.vertices.as_slice() {
            [] => SimplexShape::Empty,
            [a] => SimplexShape::Point { a },
            [b, a] => SimplexShape::Segment { b, a },
            [b, c, a] => SimplexShape::Triangle { b, c, a },
            // The capacity of the vertex buffer is 3.
            _ => unreachable!(),
        }
    }

    /// Converts this simplex into a growable polygon, as expected by the EPA.
    pub fn into_polytope(self) -> Vec<CSOPoint> {
        self.vertices.into_iter().collect()
    }
}
