//! Operator-precedence parsing (shunting-yard) and the `parse` entry point.
//!
//! `!` goes through the same precedence comparison as the binary operators,
//! without special-casing arity. One consequence: in `!!A` the second `!`
//! pops the first before any operand has been output, and the tree builder
//! then rejects the expression.

use log::debug;

use crate::error::{Error, Result};
use crate::lexer::tokenize;
use crate::node::{build_tree, Node};
use crate::token::{Operator, Precedence, Token};

/// Reorders infix tokens into postfix order.
///
/// Open parentheses left on the stack at the end are emitted like any other
/// operator; the tree builder rejects them if they cannot form a node.
pub fn to_postfix(tokens: &[Token], precedence: &Precedence) -> Result<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Operator> = Vec::new();

    for &token in tokens {
        match token {
            Token::Variable(_) => output.push(token),
            Token::Operator(Operator::LParen) => operators.push(Operator::LParen),
            Token::Operator(Operator::RParen) => loop {
                match operators.pop() {
                    Some(Operator::LParen) => break,
                    Some(op) => output.push(Token::Operator(op)),
                    None => return Err(Error::MismatchedParentheses),
                }
            },
            Token::Operator(op) => {
                while let Some(&top) = operators.last() {
                    if precedence.of(top) < precedence.of(op) {
                        break;
                    }
                    output.push(Token::Operator(top));
                    operators.pop();
                }
                operators.push(op);
            }
        }
    }

    while let Some(op) = operators.pop() {
        output.push(Token::Operator(op));
    }

    debug!(
        "to_postfix: {}",
        output.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ")
    );
    Ok(output)
}

/// Parses a line of text into an expression tree.
///
/// Runs the tokenizer, the shunting-yard pass with the default precedence
/// table and the tree builder, stopping at the first error.
///
/// ```
/// use goolean::{parse, Node};
///
/// let tree = parse("A & B").unwrap();
/// assert_eq!(tree, Node::and(Node::variable('A'), Node::variable('B')));
/// ```
pub fn parse(input: &str) -> Result<Node> {
    let tokens = tokenize(input)?;
    let postfix = to_postfix(&tokens, &Precedence::default())?;
    build_tree(&postfix)
}
