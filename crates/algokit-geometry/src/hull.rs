//! Convex hulls by Andrew's monotone chain.

use crate::point::{Point, cross};

/// The convex hull of `points`, counter-clockwise.
///
/// Starts at the leftmost point (the lowest one on ties). Points on the
/// hull's edges and repeated points are dropped, so only corners remain.
/// Fewer than three distinct points give those points; collinear input
/// gives its two endpoints. Non-finite points are ignored.
///
/// ```
/// use algokit_geometry::{Point, convex_hull};
///
/// let square = [
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
///     Point::new(1.0, 0.0),
/// ];
/// assert_eq!(
///     convex_hull(&square),
///     vec![
///         Point::new(0.0, 0.0),
///         Point::new(2.0, 0.0),
///         Point::new(2.0, 2.0),
///         Point::new(0.0, 2.0),
///     ]
/// );
/// ```
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted: Vec<Point> = points.iter().filter(|p| p.is_finite()).copied().collect();
    sorted.sort_by(Point::cmp_xy);
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower = chain(sorted.iter());
    let mut upper = chain(sorted.iter().rev());

    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    lower.append(&mut upper);
    lower
}

/// One half of the hull: keeps only left turns while sweeping `points`.
fn chain<'a>(points: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut hull: Vec<Point> = Vec::new();
    for p in points {
        while hull.len() >= 2 {
            let (a, b) = (hull[hull.len() - 2], hull[hull.len() - 1]);
            if cross(&a, &b, p) > 0.0 {
                break;
            }
            hull.pop();
        }
        hull.push(*p);
    }
    hull
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_hull_of_triangle_with_interior_points() {
        let points = pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 4.0), (2.0, 1.0), (1.0, 1.0), (3.0, 1.0)]);
        assert_eq!(
            convex_hull(&points),
            pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)])
        );
    }

    #[test]
    fn test_hull_is_counter_clockwise() {
        let points = pts(&[(0.0, 3.0), (1.0, 1.0), (2.0, 2.0), (4.0, 4.0), (0.0, 0.0), (1.0, 2.0), (3.0, 1.0), (3.0, 3.0)]);
        let hull = convex_hull(&points);
        assert_eq!(hull, pts(&[(0.0, 0.0), (3.0, 1.0), (4.0, 4.0), (0.0, 3.0)]));
        for i in 0..hull.len() {
            let (a, b, c) = (hull[i], hull[(i + 1) % hull.len()], hull[(i + 2) % hull.len()]);
            assert!(cross(&a, &b, &c) > 0.0);
        }
    }

    #[test]
    fn test_hull_collinear_points() {
        let points = pts(&[(2.0, 2.0), (0.0, 0.0), (1.0, 1.0), (3.0, 3.0)]);
        assert_eq!(convex_hull(&points), pts(&[(0.0, 0.0), (3.0, 3.0)]));
    }

    #[test]
    fn test_hull_small_inputs() {
        assert!(convex_hull(&[]).is_empty());
        assert_eq!(convex_hull(&pts(&[(1.0, 1.0)])), pts(&[(1.0, 1.0)]));
        assert_eq!(
            convex_hull(&pts(&[(1.0, 1.0), (1.0, 1.0), (0.0, 5.0)])),
            pts(&[(0.0, 5.0), (1.0, 1.0)])
        );
    }

    #[test]
    fn test_hull_ignores_non_finite_points() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (f64::NAN, 9.0)]);
        assert_eq!(convex_hull(&points).len(), 3);
    }
}
