use crate::math::{Point, Real};

/// A point snapped onto a regular grid, usable as a hash-map key.
///
/// Two points closer than the grid `tolerance` along every axis usually map to
/// the same key. Points straddling a grid-cell boundary do not, which is
/// acceptable for welding intersection points computed from the same edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeldKey([i64; 3]);

impl WeldKey {
    /// Quantizes `pt` on a grid with cells of size `tolerance`.
    pub fn new(pt: &Point<Real>, tolerance: Real) -> Self {
        let scale = 1.0 / tolerance.max(Real::EPSILON);
        WeldKey([
            (pt.x * scale).round() as i64,
            (pt.y * scale).round() as i64,
            (pt.z * scale).round() as i64,
        ])
    }
}
