use approx::assert_relative_eq;
use coplanar_gjk::math::{Point, Real, Vector};
use coplanar_gjk::query;
use coplanar_gjk::shape::{ConvexPolygon, InvalidShape, PointSet};

fn hexagon(x: Real, y: Real) -> ConvexPolygon {
    let pts = (0..6)
        .map(|i| {
            let angle = i as Real * core::f32::consts::FRAC_PI_3 as Real;
            Point::new(x + angle.cos(), y + angle.sin(), 0.0)
        })
        .collect();
    ConvexPolygon::try_new(pts).unwrap()
}

#[test]
fn hexagons_sharing_an_edge_direction() {
    let a = hexagon(0.0, 0.0);
    let b = hexagon(0.0, 1.5);

    // The hexagons face each other through horizontal edges at height ±sqrt(3)/2.
    let res = query::intersect(&a, &b).unwrap().expect("Penetration not found.");
    assert_relative_eq!(res.depth, Real::sqrt(3.0) - 1.5, epsilon = 1.0e-3);
    assert_relative_eq!(*res.direction, -Vector::y(), epsilon = 1.0e-3);

    assert_eq!(query::intersect(&a, &hexagon(0.0, 2.0)), Ok(None));
}

#[test]
fn polygons_and_raw_vertices_give_the_same_result() {
    let a = hexagon(0.0, 0.0);
    let b = hexagon(0.7, 0.3);

    let with_polygons = query::intersect(&a, &b);
    let with_vertices = query::intersect(a.points(), b.points());
    assert_eq!(with_polygons, with_vertices);
}

#[test]
fn support_point_of_a_polygon() {
    let a = hexagon(0.0, 0.0);

    assert_eq!(a.support_point_id(&Vector::x()), 0);
    assert_relative_eq!(a.support_point(&-Vector::x()), Point::new(-1.0, 0.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(a.area(), 1.5 * Real::sqrt(3.0), epsilon = 1.0e-4);
}

#[test]
fn non_convex_polygons_are_rejected() {
    let arrow = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(1.0, 3.0, 0.0),
    ];
    assert_eq!(
        ConvexPolygon::try_new(arrow).unwrap_err(),
        InvalidShape::NotConvex(1)
    );
}
