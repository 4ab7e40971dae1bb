//! Parsing of textual integer sequences.
//!
//! Accepted forms:
//!
//! - integers separated by commas and/or whitespace: `3, 5 2`
//! - optionally wrapped in one pair of brackets: `[3, 5, 2]`
//! - empty input or `[]` for the empty sequence
//!
//! The `{:?}` rendering of a `Vec<i32>` is always accepted.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned by [`parse_sequence`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SequenceParseError {
    /// A token is not a valid `i32`.
    #[error("invalid integer {token:?} at position {position}")]
    InvalidInteger {
        /// 1-based position of the token in the sequence.
        position: usize,
        /// The offending token, trimmed. Empty for an empty field such as `1,,2`.
        token: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A bracket is missing its counterpart, or `]` comes before `[`.
    #[error("unbalanced brackets in {input:?}")]
    UnbalancedBrackets {
        /// The whole input, trimmed.
        input: String,
    },

    /// More than one pair of brackets, nested or side by side.
    #[error("more than one bracket pair in {input:?}")]
    NestedBrackets {
        /// The whole input, trimmed.
        input: String,
    },

    /// Non-blank text before `[` or after `]`.
    #[error("unexpected text {text:?} outside brackets")]
    TextOutsideBrackets {
        /// The stray text, trimmed.
        text: String,
    },
}

/// Parses a sequence of `i32` values.
///
/// # Errors
///
/// Returns [`SequenceParseError::InvalidInteger`] for the first token that is
/// not an `i32`. Brackets that do not form a single enclosing pair give
/// [`SequenceParseError::UnbalancedBrackets`],
/// [`SequenceParseError::NestedBrackets`] or
/// [`SequenceParseError::TextOutsideBrackets`].
///
/// # Examples
///
/// ```rust
/// use second_largest::selection::{SequenceParseError, parse_sequence};
///
/// assert_eq!(parse_sequence("[3, 5, 2]"), Ok(vec![3, 5, 2]));
/// assert_eq!(parse_sequence("9 9 8"), Ok(vec![9, 9, 8]));
/// assert_eq!(parse_sequence(""), Ok(vec![]));
///
/// assert!(matches!(
///     parse_sequence("1, two"),
///     Err(SequenceParseError::InvalidInteger { position: 2, .. })
/// ));
/// ```
pub fn parse_sequence(input: &str) -> Result<Vec<i32>, SequenceParseError> {
    let trimmed = input.trim();
    let body = strip_brackets(trimmed)?;

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    body.split(',')
        .flat_map(split_field)
        .enumerate()
        .map(|(index, token)| parse_token(index + 1, token))
        .collect()
}

fn strip_brackets(input: &str) -> Result<&str, SequenceParseError> {
    let opening = input.matches('[').count();
    let closing = input.matches(']').count();
    let unbalanced = || SequenceParseError::UnbalancedBrackets {
        input: input.to_string(),
    };

    if opening != closing {
        return Err(unbalanced());
    }
    let (Some(open), Some(close)) = (input.find('['), input.find(']')) else {
        return Ok(input);
    };
    if close < open {
        return Err(unbalanced());
    }
    if opening > 1 {
        return Err(SequenceParseError::NestedBrackets {
            input: input.to_string(),
        });
    }

    let stray = [&input[..open], &input[close + 1..]]
        .into_iter()
        .map(str::trim)
        .find(|text| !text.is_empty());
    match stray {
        Some(text) => {
            tracing::debug!(text, "rejected text outside brackets");
            Err(SequenceParseError::TextOutsideBrackets {
                text: text.to_string(),
            })
        }
        None => Ok(&input[open + 1..close]),
    }
}

/// Splits one comma-separated field on whitespace, keeping an empty field as
/// a single empty token so that `1,,2` is rejected.
fn split_field(field: &str) -> Vec<&str> {
    let tokens: Vec<&str> = field.split_whitespace().collect();
    if tokens.is_empty() { vec![""] } else { tokens }
}

fn parse_token(position: usize, token: &str) -> Result<i32, SequenceParseError> {
    token.parse::<i32>().map_err(|source| {
        tracing::debug!(position, token, "rejected sequence token");
        SequenceParseError::InvalidInteger {
            position,
            token: token.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[3, 5, 2, 5, 6, 6, 1]", vec![3, 5, 2, 5, 6, 6, 1])]
    #[case("7,7,7", vec![7, 7, 7])]
    #[case("  9 9\t8\n", vec![9, 9, 8])]
    #[case("1, 2 3", vec![1, 2, 3])]
    #[case("[-1, -2, -3]", vec![-1, -2, -3])]
    #[case("+4", vec![4])]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("[]", vec![])]
    #[case("[  ]", vec![])]
    fn test_parse_sequence_accepts(#[case] input: &str, #[case] expected: Vec<i32>) {
        assert_eq!(parse_sequence(input), Ok(expected));
    }

    #[rstest]
    #[case("1, x, 3", 2, "x")]
    #[case("1,,2", 2, "")]
    #[case("1, 2,", 3, "")]
    #[case("2147483648", 1, "2147483648")]
    #[case("[4 5.5]", 2, "5.5")]
    fn test_parse_sequence_rejects_invalid_integer(
        #[case] input: &str,
        #[case] expected_position: usize,
        #[case] expected_token: &str,
    ) {
        match parse_sequence(input) {
            Err(SequenceParseError::InvalidInteger {
                position, token, ..
            }) => {
                assert_eq!(position, expected_position);
                assert_eq!(token, expected_token);
            }
            other => panic!("expected InvalidInteger, got {other:?}"),
        }
    }

    #[rstest]
    #[case("[1, 2")]
    #[case("1, 2]")]
    #[case("[1, [2]")]
    #[case("]1, 2[")]
    fn test_parse_sequence_rejects_unbalanced_brackets(#[case] input: &str) {
        assert!(matches!(
            parse_sequence(input),
            Err(SequenceParseError::UnbalancedBrackets { .. })
        ));
    }

    #[rstest]
    #[case("[[1, 2]]")]
    #[case("[1][2]")]
    fn test_parse_sequence_rejects_nested_brackets(#[case] input: &str) {
        assert_eq!(
            parse_sequence(input),
            Err(SequenceParseError::NestedBrackets {
                input: input.to_string(),
            })
        );
    }

    #[rstest]
    #[case("[1, 2]x", "x")]
    #[case("x[1]", "x")]
    #[case("1 [2]", "1")]
    #[case("[3] 4, 5", "4, 5")]
    fn test_parse_sequence_reports_text_outside_brackets(
        #[case] input: &str,
        #[case] expected_text: &str,
    ) {
        assert_eq!(
            parse_sequence(input),
            Err(SequenceParseError::TextOutsideBrackets {
                text: expected_text.to_string(),
            })
        );
    }

    #[rstest]
    fn test_error_display() {
        let error = parse_sequence("1, x").unwrap_err();
        assert_eq!(error.to_string(), "invalid integer \"x\" at position 2");

        let error = parse_sequence("[1").unwrap_err();
        assert_eq!(error.to_string(), "unbalanced brackets in \"[1\"");

        let error = parse_sequence("[1, 2]x").unwrap_err();
        assert_eq!(error.to_string(), "unexpected text \"x\" outside brackets");

        let error = parse_sequence("[[1]]").unwrap_err();
        assert_eq!(error.to_string(), "more than one bracket pair in \"[[1]]\"");
    }

    #[rstest]
    fn test_error_exposes_source() {
        let error = parse_sequence("x").unwrap_err();
        assert!(std::error::Error::source(&error).is_some());
    }
}
