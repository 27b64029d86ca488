use crate::math::{Real, UnitVector, Vector};

/// Computes two vectors which, when combined with `normal`, form an orthonormal basis.
///
/// Branchless construction from Pixar:
/// <https://graphics.pixar.com/library/OrthonormalB/paper.pdf>
pub fn orthonormal_basis(normal: &UnitVector<Real>) -> [Vector<Real>; 2] {
    let n = normal.as_ref();
    let sign = (1.0 as Real).copysign(n.z);
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;

    [
        Vector::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x),
        Vector::new(b, sign + n.y * n.y * a, -n.y),
    ]
}
