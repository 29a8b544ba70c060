//! Closest pairs and hulls over the same point sets.

use algokit_geometry::{Point, closest_pair, convex_hull};

fn circle(n: usize, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[test]
fn test_every_point_of_a_circle_is_on_its_hull() {
    let points = circle(24, 10.0);
    assert_eq!(convex_hull(&points).len(), 24);
}

#[test]
fn test_center_point_is_inside_the_hull() {
    let mut points = circle(12, 5.0);
    points.push(Point::new(0.0, 0.0));
    let hull = convex_hull(&points);
    assert_eq!(hull.len(), 12);
    assert!(!hull.contains(&Point::new(0.0, 0.0)));
}

#[test]
fn test_closest_pair_on_a_grid_with_a_perturbed_point() {
    let mut points: Vec<Point> = (0..10)
        .flat_map(|x| (0..10).map(move |y| Point::new(f64::from(x) * 3.0, f64::from(y) * 3.0)))
        .collect();
    points.push(Point::new(12.5, 13.0));

    let (a, b) = closest_pair(&points).unwrap();
    assert_eq!(b, Point::new(12.5, 13.0));
    assert_eq!(a, Point::new(12.0, 12.0));
}

#[test]
fn test_hull_of_points_loaded_from_json() {
    let json = r#"[{"x": 0, "y": 0}, {"x": 5, "y": 0}, {"x": 5, "y": 5}, {"x": 2, "y": 2}]"#;
    let points: Vec<Point> = serde_json::from_str(json).unwrap();
    assert_eq!(convex_hull(&points).len(), 3);
}
