use std::fmt;

use pagegeom::{IRect, Matrix, Point, Quad, Rect, Region, parser};
use snafu::ResultExt;

use crate::error::{self, Result};

/// Result of evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Point(Point),
    Rect(Rect),
    IRect(IRect),
    Quad(Quad),
    Matrix(Matrix),
}

/// Same-typed operands, or a geometry value and a number broadcast to it.
macro_rules! componentwise {
    ($lhs:expr, $rhs:expr, $op:tt) => {
        match ($lhs, $rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a $op b)),
            (Value::Point(a), Value::Point(b)) => Ok(Value::Point(a $op b)),
            (Value::Point(a), Value::Number(b)) => Ok(Value::Point(a $op b)),
            (Value::Rect(a), Value::Rect(b)) => Ok(Value::Rect(a $op b)),
            (Value::Rect(a), Value::Number(b)) => Ok(Value::Rect(a $op b)),
            (Value::IRect(a), Value::IRect(b)) => Ok(Value::IRect(a $op b)),
            (Value::IRect(a), Value::Number(b)) => Ok(Value::IRect(a $op b)),
            (Value::Quad(a), Value::Quad(b)) => Ok(Value::Quad(a $op b)),
            (Value::Quad(a), Value::Number(b)) => Ok(Value::Quad(a $op b)),
            (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::Matrix(a $op b)),
            (Value::Matrix(a), Value::Number(b)) => Ok(Value::Matrix(a $op b)),
            (lhs, rhs) => unsupported(stringify!($op), lhs, rhs),
        }
    };
}

impl Value {
    /// Builds a value from a tagged literal or a bracketed array. Untagged
    /// arrays are typed by their length.
    pub fn from_literal(source: &str) -> Result<Self> {
        let literal = parser::parse_literal(source).context(error::Geometry)?;
        let values = literal.values.as_slice();

        let value = match (literal.tag, values.len()) {
            (Some("Point"), _) | (None, 2) => Value::Point(Point::try_from(values).context(error::Geometry)?),
            (Some("Rect"), _) | (None, 4) => Value::Rect(Rect::try_from(values).context(error::Geometry)?),
            (Some("IRect"), _) => Value::IRect(IRect::try_from(values).context(error::Geometry)?),
            (Some("Quad"), _) | (None, 8) => Value::Quad(Quad::try_from(values).context(error::Geometry)?),
            (Some("Matrix"), _) | (None, 6) => {
                Value::Matrix(Matrix::try_from(values).context(error::Geometry)?)
            }
            (Some(tag), _) => {
                return Err(error::Syntax {
                    message: format!("Unknown literal type {tag}"),
                }
                .build()
                .into());
            }
            (None, got) => return Err(error::Arity { got }.build().into()),
        };

        Ok(value)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Point(_) => "Point",
            Value::Rect(_) => "Rect",
            Value::IRect(_) => "IRect",
            Value::Quad(_) => "Quad",
            Value::Matrix(_) => "Matrix",
        }
    }

    fn region(self) -> Option<Region> {
        match self {
            Value::Point(p) => Some(p.into()),
            Value::Rect(r) => Some(r.into()),
            Value::IRect(r) => Some(r.into()),
            Value::Quad(q) => Some(q.into()),
            _ => None,
        }
    }

    pub fn add(self, rhs: Value) -> Result<Value> {
        componentwise!(self, rhs, +)
    }

    pub fn sub(self, rhs: Value) -> Result<Value> {
        componentwise!(self, rhs, -)
    }

    pub fn mul(self, rhs: Value) -> Result<Value> {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
            (Value::Number(n), geometry) => geometry.mul(Value::Number(n)),
            (Value::Point(p), Value::Number(n)) => Ok(Value::Point(p * n)),
            (Value::Rect(r), Value::Number(n)) => Ok(Value::Rect(r * n)),
            (Value::IRect(r), Value::Number(n)) => Ok(Value::IRect(r * n)),
            (Value::Quad(q), Value::Number(n)) => Ok(Value::Quad(q * n)),
            (Value::Matrix(m), Value::Number(n)) => Ok(Value::Matrix(m * n)),
            (Value::Point(p), Value::Matrix(m)) => Ok(Value::Point(p * m)),
            (Value::Rect(r), Value::Matrix(m)) => Ok(Value::Rect(r * m)),
            (Value::IRect(r), Value::Matrix(m)) => Ok(Value::IRect(r * m)),
            (Value::Quad(q), Value::Matrix(m)) => Ok(Value::Quad(q * m)),
            (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::Matrix(a * b)),
            (lhs, rhs) => unsupported("*", lhs, rhs),
        }
    }

    pub fn div(self, rhs: Value) -> Result<Value> {
        let value = match (self, rhs) {
            (Value::Number(_), Value::Number(b)) if b == 0.0 => return Err(error::ZeroDivisor.build().into()),
            (Value::Number(a), Value::Number(b)) => Value::Number(a / b),
            (Value::Point(p), Value::Number(n)) => Value::Point((p / n).context(error::Geometry)?),
            (Value::Rect(r), Value::Number(n)) => Value::Rect((r / n).context(error::Geometry)?),
            (Value::IRect(r), Value::Number(n)) => Value::IRect((r / n).context(error::Geometry)?),
            (Value::Quad(q), Value::Number(n)) => Value::Quad((q / n).context(error::Geometry)?),
            (Value::Matrix(m), Value::Number(n)) => {
                Value::Matrix((m / n).context(error::Geometry)?)
            }
            (Value::Point(p), Value::Matrix(m)) => Value::Point((p / m).context(error::Geometry)?),
            (Value::Rect(r), Value::Matrix(m)) => Value::Rect((r / m).context(error::Geometry)?),
            (Value::IRect(r), Value::Matrix(m)) => {
                Value::IRect((r / m).context(error::Geometry)?)
            }
            (Value::Quad(q), Value::Matrix(m)) => Value::Quad((q / m).context(error::Geometry)?),
            (Value::Matrix(a), Value::Matrix(b)) => {
                Value::Matrix((a / b).context(error::Geometry)?)
            }
            (lhs, rhs) => return unsupported("/", lhs, rhs),
        };

        Ok(value)
    }

    pub fn union(self, rhs: Value) -> Result<Value> {
        match (self, rhs.region()) {
            (Value::Rect(r), Some(region)) => Ok(Value::Rect(r | region)),
            (Value::IRect(r), Some(region)) => Ok(Value::IRect(r | region)),
            (lhs, _) => unsupported("|", lhs, rhs),
        }
    }

    pub fn intersect(self, rhs: Value) -> Result<Value> {
        match (self, rhs) {
            (Value::Rect(a), Value::Rect(b)) => Ok(Value::Rect(a & b)),
            (Value::Rect(a), Value::IRect(b)) => Ok(Value::Rect(a & b)),
            (Value::IRect(a), Value::IRect(b)) => Ok(Value::IRect(a & b)),
            (Value::IRect(a), Value::Rect(b)) => Ok(Value::IRect(a & b)),
            (lhs, rhs) => unsupported("&", lhs, rhs),
        }
    }

    pub fn contains(self, rhs: Value) -> Result<Value> {
        let contained = match (self, rhs.region()) {
            (Value::Rect(r), Some(region)) => r.contains(region),
            (Value::IRect(r), Some(region)) => r.contains(region),
            (Value::Quad(q), Some(region)) => q.contains(region),
            (lhs, _) => return unsupported("contains", lhs, rhs),
        };

        Ok(Value::Bool(contained))
    }

    pub fn equals(self, rhs: Value) -> Value {
        Value::Bool(self == rhs)
    }

    pub fn neg(self) -> Result<Value> {
        match self {
            Value::Number(n) => Ok(Value::Number(-n)),
            Value::Point(p) => Ok(Value::Point(-p)),
            Value::Rect(r) => Ok(Value::Rect(-r)),
            Value::IRect(r) => Ok(Value::IRect(-r)),
            Value::Quad(q) => Ok(Value::Quad(-q)),
            Value::Matrix(m) => Ok(Value::Matrix(-m)),
            operand => Err(error::UnsupportedUnary {
                op: "-",
                operand: operand.kind(),
            }
            .build()
            .into()),
        }
    }

    pub fn invert(self) -> Result<Value> {
        match self {
            Value::Matrix(m) => Ok(Value::Matrix(m.invert())),
            operand => Err(error::UnsupportedUnary {
                op: "~",
                operand: operand.kind(),
            }
            .build()
            .into()),
        }
    }
}

fn unsupported(op: &'static str, lhs: Value, rhs: Value) -> Result<Value> {
    Err(error::Unsupported {
        op,
        lhs: lhs.kind(),
        rhs: rhs.kind(),
    }
    .build()
    .into())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Point(p) => p.fmt(f),
            Value::Rect(r) => r.fmt(f),
            Value::IRect(r) => r.fmt(f),
            Value::Quad(q) => q.fmt(f),
            Value::Matrix(m) => m.fmt(f),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_literal() {
        struct TestCase {
            name: &'static str,
            input: &'static str,
            expected: Option<Value>,
        }

        let test_cases = [
            TestCase {
                name: "tagged point",
                input: "Point(1, 2)",
                expected: Some(Value::Point(Point::new(1.0, 2.0))),
            },
            TestCase {
                name: "array of four is a rect",
                input: "[0 0 612 792]",
                expected: Some(Value::Rect(Rect::new(0.0, 0.0, 612.0, 792.0))),
            },
            TestCase {
                name: "array of six is a matrix",
                input: "[1 0 0 1 5 5]",
                expected: Some(Value::Matrix(Matrix::translation(5.0, 5.0))),
            },
            TestCase {
                name: "array of eight is a quad",
                input: "[0 0 1 0 0 1 1 1]",
                expected: Some(Value::Quad(Rect::new(0.0, 0.0, 1.0, 1.0).quad())),
            },
            TestCase {
                name: "irect",
                input: "IRect(0, 0, 3, 4)",
                expected: Some(Value::IRect(IRect::new(0, 0, 3, 4))),
            },
            TestCase {
                name: "array of three",
                input: "[1 2 3]",
                expected: None,
            },
            TestCase {
                name: "tag with wrong arity",
                input: "Matrix(1, 2)",
                expected: None,
            },
        ];

        for case in &test_cases {
            let result = Value::from_literal(case.input).ok();
            assert_eq!(
                result, case.expected,
                "Test '{}' failed: expected: {:?}, got: {:?}",
                case.name, case.expected, result
            );
        }
    }

    #[test]
    fn test_unsupported_operands_are_errors() {
        let point = Value::Point(Point::new(1.0, 2.0));
        let rect = Value::Rect(Rect::new(0.0, 0.0, 1.0, 1.0));

        assert!(point.add(rect).is_err());
        assert!(point.union(rect).is_err());
        assert!(point.contains(rect).is_err());
        assert!(rect.mul(rect).is_err());
        assert!(rect.invert().is_err());
        assert!(Value::Bool(true).neg().is_err());
        assert!(Value::Number(1.0).div(Value::Number(0.0)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Point(Point::new(1.0, 2.0)).to_string(), "Point(1.0, 2.0)");
        assert_eq!(Value::IRect(IRect::new(1, 2, 3, 4)).to_string(), "IRect(1, 2, 3, 4)");
    }
}
