//! The plane a mesh is cut with.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// The side of a [`CutPlane`] a point lies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Side {
    /// The half-space the plane normal points toward (points on the plane included).
    ///
    /// During a slice, this is the side kept by the original object.
    Left,
    /// The other half-space.
    Right,
}

/// A cutting plane, expressed in the local-space of the mesh it cuts.
///
/// The plane is the set of points `p` such that `normal · p = bias`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CutPlane {
    /// The plane normal. Points toward the [`Side::Left`] half-space.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane along `normal`.
    pub bias: Real,
}

impl CutPlane {
    /// Builds a plane from its unit normal and its signed distance to the origin.
    #[inline]
    pub fn new(normal: UnitVector<Real>, bias: Real) -> Self {
        CutPlane { normal, bias }
    }

    /// Builds the plane passing through `point` with the given (not necessarily unit) `normal`.
    ///
    /// Returns `None` if `normal` is too small to be normalized.
    pub fn from_point_and_normal(point: &Point<Real>, normal: &Vector<Real>) -> Option<Self> {
        let normal = UnitVector::try_new(*normal, DEFAULT_EPSILON)?;
        let bias = normal.dot(&point.coords);
        Some(CutPlane { normal, bias })
    }

    /// The signed distance from `pt` to this plane, positive on the [`Side::Left`].
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.bias
    }

    /// The half-space test: `normal · pt - bias >= 0` is [`Side::Left`].
    #[inline]
    pub fn side(&self, pt: &Point<Real>) -> Side {
        if self.signed_distance(pt) >= 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// The same plane with its normal, and therefore its sides, reversed.
    #[inline]
    pub fn flipped(&self) -> Self {
        CutPlane {
            normal: -self.normal,
            bias: -self.bias,
        }
    }

    /// The orthogonal projection of `pt` on this plane.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - *self.normal * self.signed_distance(pt)
    }

    /// Intersects the segment `[a, b]` with this plane.
    ///
    /// Returns the parameter `t` of the intersection point `a + (b - a) * t`, clamped to
    /// `[0, 1]`. Returns `None` if the segment is parallel (or nearly parallel, up to
    /// `parallel_epsilon`) to the plane.
    pub fn intersect_segment(
        &self,
        a: &Point<Real>,
        b: &Point<Real>,
        parallel_epsilon: Real,
    ) -> Option<Real> {
        let dir = b - a;
        let denom = self.normal.dot(&dir);

        if denom.abs() <= parallel_epsilon {
            return None;
        }

        let t = -self.signed_distance(a) / denom;

        if t.is_finite() {
            Some(t.clamp(0.0, 1.0))
        } else {
            None
        }
    }
}
