//! Text form of geometry values.
//!
//! Accepts PDF arrays (`[0 0 612 792]`), tuples (`(1, 2)`), tagged literals
//! (`Rect(0, 0, 4, 2)`) and bare number lists (`1 2`). Every geometry type
//! implements [`FromStr`] on top of these.

use std::str::FromStr;

use nom::{Parser, combinator::all_consuming};

use crate::{IRect, Matrix, Point, Quad, Rect, Result};

mod literal;
mod numeric;

pub use literal::Literal;
pub use numeric::number;

/// Parses a complete literal, tagged or bracketed. Leftover input is an error.
pub fn parse_literal(source: &str) -> Result<Literal<'_>> {
    match all_consuming(literal::literal).parse(source) {
        Ok((_, literal)) => Ok(literal),
        Err(err) => Err(syntax_error(source, err)),
    }
}

/// Reads the numbers of a literal meant to be a `tag` value.
///
/// A literal tagged with another type name is rejected; untagged literals
/// and bare number lists are accepted as is.
pub fn parse_values(source: &str, tag: &'static str) -> Result<Vec<f64>> {
    let literal = match all_consuming(literal::literal).parse(source) {
        Ok((_, literal)) => literal,
        Err(_) => match all_consuming(literal::bare_values).parse(source) {
            Ok((_, values)) => Literal { tag: None, values },
            Err(err) => return Err(syntax_error(source, err)),
        },
    };

    match literal.tag {
        Some(got) if got != tag => Err(crate::error::UnexpectedTag {
            expected: tag,
            got: got.to_string(),
        }
        .build()
        .into()),
        _ => Ok(literal.values),
    }
}

fn syntax_error(source: &str, err: nom::Err<nom::error::Error<&str>>) -> crate::Error {
    let message = match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let offset = source.len() - e.input.len();
            format!("unexpected input at offset {offset} in {source:?}")
        }
        nom::Err::Incomplete(_) => format!("incomplete literal {source:?}"),
    };
    tracing::debug!(%message, "geometry literal rejected");

    crate::error::Syntax { message }.build().into()
}

impl FromStr for Point {
    type Err = crate::Error;

    fn from_str(source: &str) -> Result<Self> {
        Point::try_from(parse_values(source, "Point")?.as_slice())
    }
}

impl FromStr for Rect {
    type Err = crate::Error;

    fn from_str(source: &str) -> Result<Self> {
        Rect::try_from(parse_values(source, "Rect")?.as_slice())
    }
}

impl FromStr for IRect {
    type Err = crate::Error;

    fn from_str(source: &str) -> Result<Self> {
        IRect::try_from(parse_values(source, "IRect")?.as_slice())
    }
}

impl FromStr for Quad {
    type Err = crate::Error;

    fn from_str(source: &str) -> Result<Self> {
        Quad::try_from(parse_values(source, "Quad")?.as_slice())
    }
}

impl FromStr for Matrix {
    type Err = crate::Error;

    fn from_str(source: &str) -> Result<Self> {
        Matrix::try_from(parse_values(source, "Matrix")?.as_slice())
    }
}
