use approx::assert_relative_eq;
use coplanar_gjk::math::{Point, Real, Vector};
use coplanar_gjk::na::{Rotation3, Translation3};
use coplanar_gjk::query::{self, IntersectOptions};

fn unit_square_xy(x: Real) -> Vec<Point<Real>> {
    vec![
        Point::new(x, 0.0, 0.0),
        Point::new(x + 1.0, 0.0, 0.0),
        Point::new(x + 1.0, 1.0, 0.0),
        Point::new(x, 1.0, 0.0),
    ]
}

#[test]
fn squares_in_the_xz_plane() {
    let to_xz = |pts: Vec<Point<Real>>| -> Vec<Point<Real>> {
        pts.iter().map(|p| Point::new(p.x, 0.0, p.y)).collect()
    };
    let a = to_xz(unit_square_xy(0.0));

    let res = query::intersect(&a, &to_xz(unit_square_xy(0.5)))
        .unwrap()
        .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(*res.direction, -Vector::x(), epsilon = 1.0e-3);

    assert_eq!(query::intersect(&a, &to_xz(unit_square_xy(2.0))), Ok(None));
    assert_eq!(query::intersect(&a, &to_xz(unit_square_xy(1.0))), Ok(None));
}

#[test]
fn squares_in_an_offset_plane() {
    let offset = |pts: Vec<Point<Real>>| -> Vec<Point<Real>> {
        pts.iter().map(|p| p + Vector::new(0.0, 0.0, 5.0)).collect()
    };
    let a = offset(unit_square_xy(0.0));

    let res = query::intersect(&a, &offset(unit_square_xy(0.5)))
        .unwrap()
        .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(*res.direction, -Vector::x(), epsilon = 1.0e-3);
    assert_relative_eq!(res.point1.z, 5.0, epsilon = 1.0e-3);
    assert_relative_eq!(res.point2.z, 5.0, epsilon = 1.0e-3);

    assert_eq!(query::intersect(&a, &offset(unit_square_xy(2.0))), Ok(None));
}

#[test]
fn squares_in_a_tilted_plane() {
    let rot = Rotation3::from_euler_angles(0.3, -0.8, 1.2);
    let shift = Translation3::new(1.0, -2.0, 3.0);
    let transform = |pts: Vec<Point<Real>>| -> Vec<Point<Real>> {
        pts.iter().map(|p| shift * (rot * p)).collect()
    };
    let a = transform(unit_square_xy(0.0));

    let res = query::intersect(&a, &transform(unit_square_xy(0.5)))
        .unwrap()
        .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(*res.direction, rot * -Vector::x(), epsilon = 1.0e-3);

    assert_eq!(query::intersect(&a, &transform(unit_square_xy(2.0))), Ok(None));
}

#[test]
fn explicit_plane_normal() {
    let options = IntersectOptions {
        plane_normal: Some(Vector::z_axis()),
        ..IntersectOptions::default()
    };

    let seg = [Point::new(0.0, 0.5, 0.0), Point::new(2.0, 0.5, 0.0)];
    let res = query::intersect_with_options(&unit_square_xy(0.0), &seg[..], &options)
        .unwrap()
        .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(res.direction.z, 0.0, epsilon = 1.0e-5);
}
