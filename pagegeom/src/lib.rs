#[macro_use]
mod ops;

mod irect;
mod matrix;
pub mod paper;
pub mod parser;
mod point;
mod quad;
mod rect;
mod region;

use std::hash::{Hash, Hasher};

use snafu::Snafu;

pub use irect::IRect;
pub use matrix::Matrix;
pub use point::Point;
pub use quad::Quad;
pub use rect::Rect;
pub use region::Region;

/// Tolerance used by the fuzzy predicates (`is_rectilinear`, `Quad::is_empty`, ...).
pub const EPSILON: f64 = 1e-5;

#[derive(Debug, Snafu)]
pub struct Error(error::Error);

pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
///
/// Division failures and coercion failures are separate policies; callers
/// usually only care which one they hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Division by the number zero or by a non-invertible matrix.
    DivisionByZero,
    /// A numeric sequence of the wrong length was used in place of a geometry value.
    TypeMismatch,
    /// A geometry literal could not be read.
    Parse,
    /// The operation needs a finite, non-empty rectangle.
    InvalidRect,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match &self.0 {
            error::Error::ZeroDivisor { .. } | error::Error::SingularMatrix { .. } => {
                ErrorKind::DivisionByZero
            }
            error::Error::Arity { .. }
            | error::Error::RegionArity { .. }
            | error::Error::UnexpectedTag { .. } => ErrorKind::TypeMismatch,
            error::Error::Syntax { .. } => ErrorKind::Parse,
            error::Error::DegenerateRect { .. } => ErrorKind::InvalidRect,
        }
    }
}

/// Behaviour shared by all geometry values.
///
/// Every value is a fixed-size tuple of numbers; the unary operations are
/// defined over that tuple.
pub trait Geometry: Copy {
    type Components: AsRef<[f64]>;

    /// The value as a flat list of numbers, in constructor order.
    fn components(&self) -> Self::Components;

    /// Euclidean norm for points and matrices, signed area for rectangles
    /// and bounding-box area for quads.
    fn abs(&self) -> f64;

    /// Euclidean norm over all components.
    fn norm(&self) -> f64 {
        self.components()
            .as_ref()
            .iter()
            .map(|value| value * value)
            .sum::<f64>()
            .sqrt()
    }

    /// Returns `true` if every component is exactly zero.
    fn is_zero(&self) -> bool {
        self.components().as_ref().iter().all(|value| *value == 0.0)
    }
}

pub(crate) fn hash_components<H: Hasher>(components: &[f64], state: &mut H) {
    for value in components {
        // 0.0 == -0.0, so both must hash alike
        let value = if *value == 0.0 { 0.0 } else { *value };
        value.to_bits().hash(state);
    }
}

mod error {
    use snafu::Snafu;

    use crate::{Matrix, Rect};

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(crate)), context(suffix(false)))]
    pub(crate) enum Error {
        #[snafu(display("Division of {operand} by zero"))]
        ZeroDivisor { operand: &'static str },

        #[snafu(display("Division of {operand} by singular matrix {matrix}"))]
        SingularMatrix {
            operand: &'static str,
            matrix: Matrix,
        },

        #[snafu(display("Bad {kind}-like sequence. Expected = {expected} values, got = {got}"))]
        Arity {
            kind: &'static str,
            expected: usize,
            got: usize,
        },

        #[snafu(display("Bad point-, rect- or quad-like sequence of {got} values"))]
        RegionArity { got: usize },

        #[snafu(display("Unexpected literal. Expected = {expected}, got = {got}"))]
        UnexpectedTag { expected: &'static str, got: String },

        #[snafu(display("Can't parse geometry literal: {message}"))]
        Syntax { message: String },

        #[snafu(display("Rectangle must be finite and not empty. Got = {rect}"))]
        DegenerateRect { rect: Rect },
    }
}
