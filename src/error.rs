use std::fmt;

use crate::token::Operator;

/// Errors raised while processing a single expression.
///
/// None of these are fatal: a caller reports the error and moves on to the
/// next line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The tokenizer met a character that is not whitespace, an operator,
    /// a parenthesis or a letter. `position` is a char index into the input.
    InvalidCharacter { ch: char, position: usize },
    /// A closing parenthesis without a matching open one.
    MismatchedParentheses,
    /// Operand stack underflow, or not exactly one root left after building.
    InvalidExpression,
    /// A variable is absent from the supplied name list.
    VariableNotFound(char),
    /// An operator with no evaluation rule reached the evaluator.
    UnsupportedOperator(Operator),
    /// The truth table would have more rows than fit in `usize`.
    TooManyVariables(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { ch, position } => {
                write!(f, "invalid character in input: {:?} at position {}", ch, position)
            }
            Error::MismatchedParentheses => write!(f, "mismatched parentheses"),
            Error::InvalidExpression => write!(f, "invalid expression"),
            Error::VariableNotFound(name) => write!(f, "variable not found: {}", name),
            Error::UnsupportedOperator(op) => write!(f, "unsupported operator: {}", op),
            Error::TooManyVariables(count) => write!(f, "too many variables for a truth table: {}", count),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_messages() {
        let err = Error::InvalidCharacter { ch: '?', position: 1 };
        assert_eq!(err.to_string(), "invalid character in input: '?' at position 1");
        assert_eq!(Error::MismatchedParentheses.to_string(), "mismatched parentheses");
        assert_eq!(Error::InvalidExpression.to_string(), "invalid expression");
        assert_eq!(Error::VariableNotFound('C').to_string(), "variable not found: C");
        assert_eq!(Error::UnsupportedOperator(Operator::Or).to_string(), "unsupported operator: |");
    }
}
