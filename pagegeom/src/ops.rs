//! Operator plumbing shared by the floating-point geometry types.
//!
//! Each type provides `to_array`/`from_array`; these macros derive the
//! component-wise arithmetic, like-sequence conversions and hashing from them.

/// Component-wise `+ - * /`, negation, scalar broadcast and like-sequence
/// conversions for a type stored as `$n` floats.
macro_rules! componentwise {
    ($ty:ident, $n:literal, $kind:literal) => {
        impl From<[f64; $n]> for $ty {
            fn from(values: [f64; $n]) -> Self {
                Self::from_array(values)
            }
        }

        /// Broadcasts a scalar to every component.
        impl From<f64> for $ty {
            fn from(value: f64) -> Self {
                Self::from_array([value; $n])
            }
        }

        impl TryFrom<&[f64]> for $ty {
            type Error = crate::Error;

            fn try_from(values: &[f64]) -> crate::Result<Self> {
                if values.len() != $n {
                    tracing::debug!(kind = $kind, got = values.len(), "rejecting like-sequence");
                    return Err(crate::error::Arity {
                        kind: $kind,
                        expected: $n as usize,
                        got: values.len(),
                    }
                    .build()
                    .into());
                }

                let mut array = [0.0; $n];
                array.copy_from_slice(values);
                Ok(Self::from_array(array))
            }
        }

        impl PartialEq<[f64; $n]> for $ty {
            fn eq(&self, other: &[f64; $n]) -> bool {
                self.to_array() == *other
            }
        }

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                crate::hash_components(&self.to_array(), state);
            }
        }

        impl<T: Into<$ty>> std::ops::Add<T> for $ty {
            type Output = $ty;

            fn add(self, rhs: T) -> $ty {
                let (lhs, rhs) = (self.to_array(), rhs.into().to_array());
                Self::from_array(std::array::from_fn(|i| lhs[i] + rhs[i]))
            }
        }

        impl<T: Into<$ty>> std::ops::Sub<T> for $ty {
            type Output = $ty;

            fn sub(self, rhs: T) -> $ty {
                let (lhs, rhs) = (self.to_array(), rhs.into().to_array());
                Self::from_array(std::array::from_fn(|i| lhs[i] - rhs[i]))
            }
        }

        impl<T: Into<$ty>> std::ops::AddAssign<T> for $ty {
            fn add_assign(&mut self, rhs: T) {
                *self = *self + rhs;
            }
        }

        impl<T: Into<$ty>> std::ops::SubAssign<T> for $ty {
            fn sub_assign(&mut self, rhs: T) {
                *self = *self - rhs;
            }
        }

        impl std::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                Self::from_array(self.to_array().map(|value| -value))
            }
        }

        impl std::ops::Mul<f64> for $ty {
            type Output = $ty;

            fn mul(self, rhs: f64) -> $ty {
                Self::from_array(self.to_array().map(|value| value * rhs))
            }
        }

        impl std::ops::MulAssign<f64> for $ty {
            fn mul_assign(&mut self, rhs: f64) {
                *self = *self * rhs;
            }
        }

        impl std::ops::Div<f64> for $ty {
            type Output = crate::Result<$ty>;

            fn div(self, rhs: f64) -> crate::Result<$ty> {
                if rhs == 0.0 {
                    tracing::debug!(operand = $kind, "division by zero");
                    return Err(crate::error::ZeroDivisor { operand: $kind }.build().into());
                }

                Ok(Self::from_array(self.to_array().map(|value| value / rhs)))
            }
        }
    };
}

/// Multiplication and division by a matrix for types that have a
/// `transform(&self, &Matrix) -> Self`.
macro_rules! transformable {
    ($ty:ident, $kind:literal) => {
        impl std::ops::Mul<crate::Matrix> for $ty {
            type Output = $ty;

            fn mul(self, rhs: crate::Matrix) -> $ty {
                self.transform(&rhs)
            }
        }

        impl std::ops::Mul<[f64; 6]> for $ty {
            type Output = $ty;

            fn mul(self, rhs: [f64; 6]) -> $ty {
                self.transform(&crate::Matrix::from(rhs))
            }
        }

        impl std::ops::MulAssign<crate::Matrix> for $ty {
            fn mul_assign(&mut self, rhs: crate::Matrix) {
                *self = self.transform(&rhs);
            }
        }

        impl std::ops::MulAssign<[f64; 6]> for $ty {
            fn mul_assign(&mut self, rhs: [f64; 6]) {
                *self = self.transform(&crate::Matrix::from(rhs));
            }
        }

        impl std::ops::Div<[f64; 6]> for $ty {
            type Output = crate::Result<$ty>;

            fn div(self, rhs: [f64; 6]) -> crate::Result<$ty> {
                self / crate::Matrix::from(rhs)
            }
        }

        impl std::ops::Div<crate::Matrix> for $ty {
            type Output = crate::Result<$ty>;

            fn div(self, rhs: crate::Matrix) -> crate::Result<$ty> {
                let inverse = rhs.checked_invert().ok_or_else(|| {
                    tracing::debug!(operand = $kind, matrix = %rhs, "division by singular matrix");
                    crate::error::SingularMatrix {
                        operand: $kind,
                        matrix: rhs,
                    }
                    .build()
                })?;

                Ok(self.transform(&inverse))
            }
        }
    };
}
