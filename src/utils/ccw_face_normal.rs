use crate::math::*;

/// Computes the (unnormalized) normal of a counter-clock-wise triangle.
///
/// This is `(b - a) × (c - a)`. Its norm is twice the area of the triangle.
#[inline]
pub fn face_cross(pts: [&Point<Real>; 3]) -> Vector<Real> {
    let ab = *pts[1] - *pts[0];
    let ac = *pts[2] - *pts[0];
    ab.cross(&ac)
}

/// Computes the normal of a counter-clock-wise triangle.
///
/// Returns `None` if the triangle is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 3]) -> Option<UnitVector<Real>> {
    UnitVector::try_new(face_cross(pts), DEFAULT_EPSILON)
}
