use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{alpha1, char, multispace0, multispace1},
    combinator::recognize,
    multi::separated_list0,
    sequence::{delimited, terminated},
};

use crate::parser::numeric::number;

/// A geometry literal as written: an optional type tag and its numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal<'a> {
    pub tag: Option<&'a str>,
    pub values: Vec<f64>,
}

/// Numbers separated by whitespace and/or a single comma.
fn values(input: &str) -> IResult<&str, Vec<f64>> {
    separated_list0(
        alt((
            recognize((multispace0, char(','), multispace0)),
            multispace1,
        )),
        number,
    )
    .parse(input)
}

fn enclosed(input: &str, open: char, close: char) -> IResult<&str, Vec<f64>> {
    delimited((char(open), multispace0), values, (multispace0, char(close))).parse(input)
}

fn parens(input: &str) -> IResult<&str, Vec<f64>> {
    enclosed(input, '(', ')')
}

fn brackets(input: &str) -> IResult<&str, Vec<f64>> {
    enclosed(input, '[', ']')
}

/// Parses `[1 2 3 4]`, `(1, 2)` or `Rect(1, 2, 3, 4)`, with surrounding
/// whitespace.
pub fn literal(input: &str) -> IResult<&str, Literal<'_>> {
    let tagged = (terminated(alpha1, multispace0), parens).map(|(tag, values)| Literal {
        tag: Some(tag),
        values,
    });
    let bare = alt((brackets, parens)).map(|values| Literal { tag: None, values });

    delimited(multispace0, alt((tagged, bare)), multispace0).parse(input)
}

/// Parses a bare list of numbers without brackets: `1 2 3 4` or `1, 2`.
pub fn bare_values(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(multispace0, values, multispace0).parse(input)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_literal_parser() {
        struct TestCase {
            name: &'static str,
            input: &'static str,
            expected: Option<(Option<&'static str>, Vec<f64>)>,
            expected_remainder: &'static str,
        }

        let test_cases = [
            TestCase {
                name: "pdf array",
                input: "[0 0 612 792]",
                expected: Some((None, vec![0.0, 0.0, 612.0, 792.0])),
                expected_remainder: "",
            },
            TestCase {
                name: "pdf array with padding",
                input: "  [ 1.5   -2 ]  ",
                expected: Some((None, vec![1.5, -2.0])),
                expected_remainder: "",
            },
            TestCase {
                name: "tuple",
                input: "(1, 2)",
                expected: Some((None, vec![1.0, 2.0])),
                expected_remainder: "",
            },
            TestCase {
                name: "tagged with commas",
                input: "Rect(0, 0, 4, 2)",
                expected: Some((Some("Rect"), vec![0.0, 0.0, 4.0, 2.0])),
                expected_remainder: "",
            },
            TestCase {
                name: "tagged with space before parenthesis",
                input: "Point (1 ,2)",
                expected: Some((Some("Point"), vec![1.0, 2.0])),
                expected_remainder: "",
            },
            TestCase {
                name: "empty list",
                input: "[]",
                expected: Some((None, vec![])),
                expected_remainder: "",
            },
            TestCase {
                name: "trailing input is left",
                input: "[1 2] * 3",
                expected: Some((None, vec![1.0, 2.0])),
                expected_remainder: "* 3",
            },
            TestCase {
                name: "unclosed bracket",
                input: "[1 2",
                expected: None,
                expected_remainder: "",
            },
            TestCase {
                name: "mismatched brackets",
                input: "[1 2)",
                expected: None,
                expected_remainder: "",
            },
            TestCase {
                name: "double comma",
                input: "(1,,2)",
                expected: None,
                expected_remainder: "",
            },
        ];

        for case in &test_cases {
            let result = literal(case.input);
            match (&case.expected, result) {
                (Some((tag, values)), Ok((remainder, literal))) => {
                    assert_eq!(literal.tag, *tag, "Test '{}' failed: tag", case.name);
                    assert_eq!(literal.values, *values, "Test '{}' failed: values", case.name);
                    assert_eq!(
                        remainder, case.expected_remainder,
                        "Test '{}' failed: remainder",
                        case.name
                    );
                }
                (None, Err(_)) => {}
                (expected, result) => panic!(
                    "Test '{}' failed: expected: {:?}, got: {:?}",
                    case.name, expected, result
                ),
            }
        }
    }
}
