use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Returns `None` if `pts` is empty.
#[inline]
pub fn center<'a>(pts: impl IntoIterator<Item = &'a Point<Real>>) -> Option<Point<Real>> {
    let mut count = 0usize;
    let mut sum = Point::origin();

    for pt in pts {
        sum.coords += pt.coords;
        count += 1;
    }

    if count == 0 {
        None
    } else {
        Some(sum / (count as Real))
    }
}
