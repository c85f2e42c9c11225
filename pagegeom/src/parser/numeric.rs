use nom::{IResult, Parser, combinator::map_res, number::complete::recognize_float};

/// Parses a number: PDF numeric syntax (`12`, `-.5`, `+3.`) plus an
/// optional exponent (`2.5e-3`). `inf` and `nan` are not numbers here.
pub fn number(input: &str) -> IResult<&str, f64> {
    map_res(recognize_float, str::parse::<f64>).parse(input)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_number_parser() {
        #[derive(Debug, PartialEq)]
        struct TestCase {
            name: &'static str,
            input: &'static str,
            expected: bool,
            expected_result: Option<f64>,
            expected_remainder: Option<&'static str>,
        }

        let test_cases = [
            TestCase {
                name: "valid integer '123'",
                input: "123",
                expected: true,
                expected_result: Some(123.0),
                expected_remainder: Some(""),
            },
            TestCase {
                name: "valid negative integer '-456'",
                input: "-456",
                expected: true,
                expected_result: Some(-456.0),
                expected_remainder: Some(""),
            },
            TestCase {
                name: "valid positive real '+12.34'",
                input: "+12.34",
                expected: true,
                expected_result: Some(12.34),
                expected_remainder: Some(""),
            },
            TestCase {
                name: "valid real without integer part '-.5'",
                input: "-.5",
                expected: true,
                expected_result: Some(-0.5),
                expected_remainder: Some(""),
            },
            TestCase {
                name: "valid real without fraction '3.'",
                input: "3.",
                expected: true,
                expected_result: Some(3.0),
                expected_remainder: Some(""),
            },
            TestCase {
                name: "valid exponent '2.5e-3'",
                input: "2.5e-3",
                expected: true,
                expected_result: Some(0.0025),
                expected_remainder: Some(""),
            },
            TestCase {
                name: "number followed by separator '7, 8'",
                input: "7, 8",
                expected: true,
                expected_result: Some(7.0),
                expected_remainder: Some(", 8"),
            },
            TestCase {
                name: "fraction at end of input '12.34'",
                input: "12.34",
                expected: true,
                expected_result: Some(12.34),
                expected_remainder: Some(""),
            },
            TestCase {
                name: "fraction at end of input '792.5'",
                input: "792.5",
                expected: true,
                expected_result: Some(792.5),
                expected_remainder: Some(""),
            },
            TestCase {
                name: "fraction followed by space '12.34 '",
                input: "12.34 ",
                expected: true,
                expected_result: Some(12.34),
                expected_remainder: Some(" "),
            },
            TestCase {
                name: "invalid dangling exponent '4e'",
                input: "4e",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "invalid 'inf'",
                input: "inf",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "invalid 'abc'",
                input: "abc",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "invalid lone sign '-'",
                input: "-",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "invalid lone dot '.'",
                input: ".",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
        ];

        for case in &test_cases {
            let result = number(case.input);
            let success = result.is_ok();
            assert_eq!(
                success, case.expected,
                "Test '{}' failed: expected success: {}, got: {}",
                case.name, case.expected, success
            );

            if case.expected {
                let (actual_remainder, result) = match result {
                    Ok((rem, res)) => (rem, res),
                    Err(e) => panic!(
                        "Parsing failed for test '{}', input: {:?}, error: {e:?}",
                        case.name, case.input
                    ),
                };
                assert_eq!(
                    Some(result),
                    case.expected_result,
                    "Test '{}' failed: expected result: {:?}, got: {:?}",
                    case.name,
                    case.expected_result,
                    result
                );
                assert_eq!(
                    Some(actual_remainder),
                    case.expected_remainder,
                    "Test '{}' failed: expected remainder: {:?}, got: {:?}",
                    case.name,
                    case.expected_remainder,
                    actual_remainder
                );
            }
        }
    }
}
