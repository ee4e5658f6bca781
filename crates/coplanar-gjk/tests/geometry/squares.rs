use approx::assert_relative_eq;
use coplanar_gjk::math::{Point, Real, Vector};
use coplanar_gjk::query::{self, IntersectError};

fn unit_square(x: Real, y: Real) -> Vec<Point<Real>> {
    vec![
        Point::new(x, y, 0.0),
        Point::new(x + 1.0, y, 0.0),
        Point::new(x + 1.0, y + 1.0, 0.0),
        Point::new(x, y + 1.0, 0.0),
    ]
}

#[test]
fn half_overlapping_squares() {
    let a = unit_square(0.0, 0.0);
    let b = unit_square(0.5, 0.0);

    let res = query::intersect(&a, &b)
        .unwrap()
        .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(*res.direction, -Vector::x(), epsilon = 1.0e-3);
    assert_relative_eq!(res.point1 - res.point2, res.translation() * -1.0, epsilon = 1.0e-3);
    assert_eq!(query::intersection_test(&a, &b), Ok(true));
}

#[test]
fn separated_squares() {
    let a = unit_square(0.0, 0.0);
    let b = unit_square(2.0, 0.0);

    assert_eq!(query::intersect(&a, &b), Ok(None));
    assert_eq!(query::intersection_test(&a, &b), Ok(false));
}

#[test]
fn touching_squares_do_not_intersect() {
    let a = unit_square(0.0, 0.0);

    for b in [
        unit_square(1.0, 0.0),
        unit_square(1.0, 1.0),
        unit_square(0.3, 1.0),
    ] {
        assert_eq!(query::intersect(&a, &b), Ok(None));
        assert_eq!(query::intersection_test(&a, &b), Ok(false));
    }
}

#[test]
fn swapping_the_shapes_negates_the_direction() {
    let a = unit_square(0.0, 0.0);

    for (x, y, depth) in [(0.5, 0.0, 0.5), (-0.2, 0.1, 0.8), (0.1, -0.7, 0.3)] {
        let b = unit_square(x, y);
        let ab = query::intersect(&a, &b).unwrap().expect("Penetration not found.");
        let ba = query::intersect(&b, &a).unwrap().expect("Penetration not found.");

        assert_relative_eq!(ab.depth, depth, epsilon = 1.0e-3);
        assert_relative_eq!(ab.depth, ba.depth, epsilon = 1.0e-3);
        assert_relative_eq!(*ab.direction, -*ba.direction, epsilon = 1.0e-3);
    }
}

#[test]
fn identical_queries_give_identical_results() {
    let a = unit_square(0.0, 0.0);
    let b = unit_square(0.25, 0.6);

    let first = query::intersect(&a, &b);
    let second = query::intersect(&a, &b);
    assert!(first.as_ref().is_ok_and(|res| res.is_some()));
    assert_eq!(first, second);
}

#[test]
fn translating_by_the_penetration_separates_the_squares() {
    let a = unit_square(0.0, 0.0);
    let b = unit_square(0.35, 0.2);
    let res = query::intersect(&a, &b).unwrap().expect("Penetration not found.");

    let shift = |dist: Real| -> Vec<Point<Real>> {
        a.iter().map(|p| p + *res.direction * dist).collect()
    };

    assert_eq!(query::intersection_test(&shift(res.depth + 1.0e-2), &b), Ok(false));
    assert_eq!(query::intersection_test(&shift(res.depth - 1.0e-2), &b), Ok(true));
}

#[test]
fn identical_squares() {
    let a = unit_square(0.0, 0.0);

    let res = query::intersect(&a, &a).unwrap().expect("Penetration not found.");
    assert_relative_eq!(res.depth, 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(res.direction.norm(), 1.0, epsilon = 1.0e-5);
}

#[test]
fn point_inside_square() {
    let a = unit_square(0.0, 0.0);
    let b = [Point::new(0.5, 0.25, 0.0)];

    let res = query::intersect(&a, &b[..]).unwrap().expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.25, epsilon = 1.0e-3);
    assert_relative_eq!(*res.direction, Vector::y(), epsilon = 1.0e-3);

    let res: Result<_, IntersectError> = query::intersect(&a, &[Point::new(2.0, 0.5, 0.0)][..]);
    assert_eq!(res, Ok(None));
}
