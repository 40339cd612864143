use crate::math::{Real, Vector};

/// Computes the two vectors which, when combined with the unit vector `n`, form a
/// right-handed orthonormal basis `(b1, b2, n)`.
// Robust and branchless implementation from Pixar:
// https://graphics.pixar.com/library/OrthonormalB/paper.pdf
pub fn orthonormal_basis(n: &Vector<Real>) -> [Vector<Real>; 2] {
    let sign = (1.0 as Real).copysign(n.z);
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;

    [
        Vector::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x),
        Vector::new(b, sign + n.y * n.y * a, -n.y),
    ]
}
