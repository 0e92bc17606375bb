use log::debug;

use crate::error::{Error, Result};
use crate::token::{Operator, Token};

/// Splits the input into tokens.
///
/// Keyword operators (`NAND`, `NOR`, `XOR`) are matched before the generic
/// letter rule, so the `N` of `NAND` never becomes a variable. Every other
/// letter is a one-letter variable: `AB` is two variables.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    debug!("tokenize(input = {:?})", input);

    let mut tokens = Vec::new();
    let mut offset = 0;
    let mut position = 0;

    while let Some(c) = input[offset..].chars().next() {
        let rest = &input[offset..];
        let mut width = c.len_utf8();

        if c.is_whitespace() {
            // skip
        } else if let Some(op) = Operator::from_char(c) {
            tokens.push(Token::Operator(op));
        } else if let Some(op) = Operator::KEYWORDS.into_iter().find(|op| rest.starts_with(op.symbol())) {
            tokens.push(Token::Operator(op));
            width = op.symbol().len();
        } else if c.is_alphabetic() && !c.is_numeric() {
            tokens.push(Token::Variable(c));
        } else {
            return Err(Error::InvalidCharacter { ch: c, position });
        }

        position += rest[..width].chars().count();
        offset += width;
    }

    debug!("tokenize: {} tokens", tokens.len());
    Ok(tokens)
}
