//! Closest pairs on the line and in the plane.

use crate::point::Point;
use algokit_core::{Error, Result, validate};

// ============================================================================
// On the line
// ============================================================================

/// Values on a line whose differences can be taken without panicking.
///
/// Implemented for every primitive integer type.
pub trait LineValue: Ord + Copy {
    /// `self - other`, or `None` if it does not fit in `Self`.
    fn checked_gap(self, other: Self) -> Option<Self>;
}

macro_rules! impl_line_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl LineValue for $t {
                fn checked_gap(self, other: Self) -> Option<Self> {
                    self.checked_sub(other)
                }
            }
        )*
    };
}

impl_line_value!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// The two values with the smallest difference, as `(smaller, larger)`.
///
/// Sorts, then scans adjacent differences. Among equal gaps the pair with
/// the smallest values wins. A gap too wide for `T` is larger than every
/// gap that fits, so it only matters when no gap fits.
///
/// # Errors
///
/// - `InvalidInput` for fewer than two values.
/// - `Overflow` when every adjacent gap is too wide for `T`, as for
///   `[i64::MIN, i64::MAX]`.
///
/// # Examples
///
/// ```
/// use algokit_geometry::closest_pair_line;
///
/// assert_eq!(closest_pair_line(&[0, 25, 50, 22, 75, 100]).unwrap(), (22, 25));
/// assert_eq!(closest_pair_line(&[100, 0, -100, 50, -50, -98]).unwrap(), (-100, -98));
/// assert!(closest_pair_line(&[i64::MIN, i64::MAX]).is_err());
/// ```
pub fn closest_pair_line<T: LineValue>(values: &[T]) -> Result<(T, T)> {
    validate::min_len("values", values.len(), 2)?;

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    sorted
        .windows(2)
        .filter_map(|pair| {
            let gap = pair[1].checked_gap(pair[0])?;
            Some((gap, pair[0], pair[1]))
        })
        .min_by_key(|&(gap, _, _)| gap)
        .map(|(_, low, high)| (low, high))
        .ok_or_else(|| Error::overflow("closest pair gap"))
}

// ============================================================================
// In the plane
// ============================================================================

/// Best pair found so far: distance and the two points.
type Best = (f64, Point, Point);

/// The two closest points, in O(n log n) by divide and conquer.
///
/// The pair is returned ordered by `x`, then `y`. Duplicate points are a
/// valid closest pair at distance zero.
///
/// # Errors
///
/// `InvalidInput` for fewer than two points or a non-finite coordinate.
///
/// # Example
///
/// ```
/// use algokit_geometry::{Point, closest_pair};
///
/// let points = [
///     Point::new(2.0, 3.0),
///     Point::new(12.0, 30.0),
///     Point::new(40.0, 50.0),
///     Point::new(5.0, 1.0),
///     Point::new(12.0, 10.0),
///     Point::new(3.0, 4.0),
/// ];
/// let (a, b) = closest_pair(&points).unwrap();
/// assert_eq!((a, b), (Point::new(2.0, 3.0), Point::new(3.0, 4.0)));
/// ```
pub fn closest_pair(points: &[Point]) -> Result<(Point, Point)> {
    validate::min_len("points", points.len(), 2)?;
    if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
        return Err(Error::invalid_input(format!("non-finite point {bad:?}")));
    }

    let mut work = points.to_vec();
    work.sort_by(Point::cmp_xy);
    let (distance, a, b) = closest_sorted(&mut work);
    log::trace!("closest pair of {} points at distance {}", points.len(), distance);

    if a.cmp_xy(&b).is_le() {
        Ok((a, b))
    } else {
        Ok((b, a))
    }
}

/// `points` is sorted by x on entry and by y on return; it holds at least
/// two points.
fn closest_sorted(points: &mut [Point]) -> Best {
    if points.len() <= 3 {
        let best = brute_force(points);
        points.sort_by(Point::cmp_yx);
        return best;
    }

    let mid = points.len() / 2;
    let split_x = points[mid].x;
    let left = closest_sorted(&mut points[..mid]);
    let right = closest_sorted(&mut points[mid..]);
    let mut best = if left.0 <= right.0 { left } else { right };

    merge_by_y(points, mid);

    let strip: Vec<Point> = points
        .iter()
        .filter(|p| (p.x - split_x).abs() < best.0)
        .copied()
        .collect();
    for (i, p) in strip.iter().enumerate() {
        for q in &strip[i + 1..] {
            if q.y - p.y >= best.0 {
                break;
            }
            let d = p.distance(q);
            if d < best.0 {
                best = (d, *p, *q);
            }
        }
    }
    best
}

fn brute_force(points: &[Point]) -> Best {
    let mut best = (f64::INFINITY, points[0], points[0]);
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            let d = p.distance(q);
            if d < best.0 {
                best = (d, *p, *q);
            }
        }
    }
    best
}

/// Merge the y-sorted halves `points[..mid]` and `points[mid..]`.
fn merge_by_y(points: &mut [Point], mid: usize) {
    let left = points[..mid].to_vec();
    let right = points[mid..].to_vec();
    let (mut i, mut j) = (0, 0);

    for slot in points.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && left[i].cmp_yx(&right[j]).is_le());
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
