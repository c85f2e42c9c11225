use std::fmt;

use crate::{EPSILON, Geometry};

/// Affine transformation matrix.
///
/// Represented as six values `[a, b, c, d, e, f]` of the row-major matrix:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
/// Points are row vectors, so `p * m1 * m2` applies `m1` first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Returned by [`Matrix::invert`] for singular matrices.
    pub const ZERO: Matrix = Matrix::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn to_array(self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    pub const fn from_array([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub const fn shear(h: f64, v: f64) -> Self {
        Self::new(1.0, v, h, 1.0, 0.0, 0.0)
    }

    /// Counter-clockwise rotation by `degrees`.
    ///
    /// Multiples of 90° produce exact matrices, without the rounding noise of
    /// `sin`/`cos`.
    pub fn rotation(degrees: f64) -> Self {
        let degrees = degrees.rem_euclid(360.0);
        let (s, c) = if degrees == 0.0 {
            (0.0, 1.0)
        } else if degrees == 90.0 {
            (1.0, 0.0)
        } else if degrees == 180.0 {
            (0.0, -1.0)
        } else if degrees == 270.0 {
            (-1.0, 0.0)
        } else {
            degrees.to_radians().sin_cos()
        };

        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Matrix product `self × other`: the result applies `self` first.
    pub fn concat(&self, other: &Matrix) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// The inverse matrix, or `None` if `self` is singular (`ad - bc == 0`).
    pub fn checked_invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }

        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;

        Some(Self {
            a,
            b,
            c,
            d,
            e: -self.e * a - self.f * c,
            f: -self.e * b - self.f * d,
        })
    }

    /// The inverse matrix.
    ///
    /// A singular matrix has no inverse; [`Matrix::ZERO`] is returned instead
    /// of an error. Use [`Matrix::checked_invert`] to tell the cases apart.
    pub fn invert(&self) -> Self {
        self.checked_invert().unwrap_or_else(|| {
            tracing::debug!(matrix = %self, "inverting singular matrix, returning zero matrix");
            Self::ZERO
        })
    }

    /// Returns `true` if the matrix maps axis-parallel rectangles onto
    /// axis-parallel rectangles (only multiples of 90° rotation).
    pub fn is_rectilinear(&self) -> bool {
        (self.b.abs() < EPSILON && self.c.abs() < EPSILON)
            || (self.a.abs() < EPSILON && self.d.abs() < EPSILON)
    }

    /// A rotation applied before `self`.
    pub fn prerotate(&self, degrees: f64) -> Self {
        Self::rotation(degrees).concat(self)
    }

    /// A scaling applied before `self`.
    pub fn prescale(&self, sx: f64, sy: f64) -> Self {
        Self::scaling(sx, sy).concat(self)
    }

    /// A translation applied before `self`.
    pub fn pretranslate(&self, tx: f64, ty: f64) -> Self {
        Self::translation(tx, ty).concat(self)
    }

    /// A shear applied before `self`.
    pub fn preshear(&self, h: f64, v: f64) -> Self {
        Self::shear(h, v).concat(self)
    }
}

componentwise!(Matrix, 6, "matrix");

impl From<(f64, f64, f64, f64, f64, f64)> for Matrix {
    fn from((a, b, c, d, e, f): (f64, f64, f64, f64, f64, f64)) -> Self {
        Self { a, b, c, d, e, f }
    }
}

impl std::ops::Mul<Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self.concat(&rhs)
    }
}

impl std::ops::Mul<[f64; 6]> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: [f64; 6]) -> Matrix {
        self.concat(&Matrix::from(rhs))
    }
}

impl std::ops::MulAssign<Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: Matrix) {
        *self = self.concat(&rhs);
    }
}

impl std::ops::MulAssign<[f64; 6]> for Matrix {
    fn mul_assign(&mut self, rhs: [f64; 6]) {
        *self = self.concat(&Matrix::from(rhs));
    }
}

impl std::ops::Div<[f64; 6]> for Matrix {
    type Output = crate::Result<Matrix>;

    fn div(self, rhs: [f64; 6]) -> crate::Result<Matrix> {
        self / Matrix::from(rhs)
    }
}

impl std::ops::Div<Matrix> for Matrix {
    type Output = crate::Result<Matrix>;

    fn div(self, rhs: Matrix) -> crate::Result<Matrix> {
        let inverse = rhs.checked_invert().ok_or_else(|| {
            tracing::debug!(matrix = %rhs, "division by singular matrix");
            crate::error::SingularMatrix {
                operand: "matrix",
                matrix: rhs,
            }
            .build()
        })?;

        Ok(self.concat(&inverse))
    }
}

impl Geometry for Matrix {
    type Components = [f64; 6];

    fn components(&self) -> [f64; 6] {
        self.to_array()
    }

    fn abs(&self) -> f64 {
        self.norm()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix({:?}, {:?}, {:?}, {:?}, {:?}, {:?})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}
