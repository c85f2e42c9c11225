use std::sync::LazyLock;

use pagegeom::{Matrix, Rect};
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;
use snafu::OptionExt;

use crate::error::{self, Result};
use crate::value::Value;

#[derive(Parser)]
#[grammar = "expr.pest"]
struct ExprParser {}

/// Operator table, loosest binding first.
static PRATT: LazyLock<PrattParser<Rule>> = LazyLock::new(|| {
    PrattParser::new()
        .op(Op::infix(Rule::equals, Assoc::Left) | Op::infix(Rule::contains, Assoc::Left))
        .op(Op::infix(Rule::union, Assoc::Left))
        .op(Op::infix(Rule::intersection, Assoc::Left))
        .op(Op::infix(Rule::add, Assoc::Left) | Op::infix(Rule::subtract, Assoc::Left))
        .op(Op::infix(Rule::multiply, Assoc::Left) | Op::infix(Rule::divide, Assoc::Left))
        .op(Op::prefix(Rule::neg) | Op::prefix(Rule::invert))
});

/// Parses and evaluates a single expression.
pub fn evaluate(source: &str) -> Result<Value> {
    let expr = ExprParser::parse(Rule::line, source)
        .map_err(|err| {
            tracing::error!("{}", err);
            error::Error::Syntax {
                message: err.to_string(),
            }
        })?
        .next()
        .context(error::Syntax {
            message: "No expression parsed",
        })?;

    tracing::debug!(expression = expr.as_str(), "evaluating");

    eval(expr.into_inner())
}

fn eval(pairs: Pairs<'_, Rule>) -> Result<Value> {
    PRATT
        .map_primary(primary)
        .map_prefix(|op, rhs| {
            let rhs = rhs?;
            match op.as_rule() {
                Rule::neg => rhs.neg(),
                Rule::invert => rhs.invert(),
                _ => Err(unexpected(&op)),
            }
        })
        .map_infix(|lhs, op, rhs| {
            let (lhs, rhs) = (lhs?, rhs?);
            match op.as_rule() {
                Rule::equals => Ok(lhs.equals(rhs)),
                Rule::contains => lhs.contains(rhs),
                Rule::union => lhs.union(rhs),
                Rule::intersection => lhs.intersect(rhs),
                Rule::add => lhs.add(rhs),
                Rule::subtract => lhs.sub(rhs),
                Rule::multiply => lhs.mul(rhs),
                Rule::divide => lhs.div(rhs),
                _ => Err(unexpected(&op)),
            }
        })
        .parse(pairs)
}

fn primary(pair: Pair<'_, Rule>) -> Result<Value> {
    match pair.as_rule() {
        Rule::number => {
            let number = pair.as_str().parse::<f64>().ok().context(error::Syntax {
                message: format!("Bad number {}", pair.as_str()),
            })?;

            Ok(Value::Number(number))
        }
        Rule::literal | Rule::array => Value::from_literal(pair.as_str()),
        Rule::constant => match pair.as_str() {
            "IDENTITY" => Ok(Value::Matrix(Matrix::IDENTITY)),
            "EMPTY" => Ok(Value::Rect(Rect::EMPTY)),
            "INFINITE" => Ok(Value::Rect(Rect::INFINITE)),
            _ => Err(unexpected(&pair)),
        },
        Rule::expr => eval(pair.into_inner()),
        _ => Err(unexpected(&pair)),
    }
}

fn unexpected(pair: &Pair<'_, Rule>) -> Box<error::Error> {
    Box::new(error::Error::Syntax {
        message: format!("Unexpected token {:?}", pair.as_str()),
    })
}
