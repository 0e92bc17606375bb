use log::debug;

use crate::error::{Error, Result};
use crate::token::{Operator, Token};

/// A node of a binary expression tree.
///
/// Each node exclusively owns its children:
///
/// - variable nodes have no children,
/// - `!` nodes have only a left child,
/// - binary nodes have both.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Node {
    pub token: Token,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn leaf(token: Token) -> Self {
        Self {
            token,
            left: None,
            right: None,
        }
    }

    pub fn variable(name: char) -> Self {
        Self::leaf(Token::Variable(name))
    }

    pub fn unary(op: Operator, child: Node) -> Self {
        Self {
            token: Token::Operator(op),
            left: Some(Box::new(child)),
            right: None,
        }
    }

    pub fn binary(op: Operator, left: Node, right: Node) -> Self {
        Self {
            token: Token::Operator(op),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn not(child: Node) -> Self {
        Self::unary(Operator::Not, child)
    }

    pub fn and(left: Node, right: Node) -> Self {
        Self::binary(Operator::And, left, right)
    }

    pub fn or(left: Node, right: Node) -> Self {
        Self::binary(Operator::Or, left, right)
    }

    pub fn xor(left: Node, right: Node) -> Self {
        Self::binary(Operator::Xor, left, right)
    }

    pub fn nand(left: Node, right: Node) -> Self {
        Self::binary(Operator::Nand, left, right)
    }

    pub fn nor(left: Node, right: Node) -> Self {
        Self::binary(Operator::Nor, left, right)
    }

    /// Returns the operator tag, or `None` for a variable.
    pub fn operator(&self) -> Option<Operator> {
        match self.token {
            Token::Operator(op) => Some(op),
            Token::Variable(_) => None,
        }
    }

    /// Checks whether `op` occurs anywhere in this tree.
    pub fn contains(&self, op: Operator) -> bool {
        self.operator() == Some(op)
            || self.left.as_deref().is_some_and(|n| n.contains(op))
            || self.right.as_deref().is_some_and(|n| n.contains(op))
    }
}

/// Builds a tree from a postfix token sequence.
///
/// `!` pops one operand; every other operator (parentheses included, should
/// one survive in the postfix) pops two, the first pop becoming the right
/// child. Exactly one node must remain at the end.
pub fn build_tree(postfix: &[Token]) -> Result<Node> {
    debug!("build_tree(postfix of {} tokens)", postfix.len());

    let mut stack: Vec<Node> = Vec::with_capacity(postfix.len());

    for &token in postfix {
        let node = match token {
            Token::Variable(_) => Node::leaf(token),
            Token::Operator(op) if op.is_unary() => {
                let child = stack.pop().ok_or(Error::InvalidExpression)?;
                Node::unary(op, child)
            }
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(Error::InvalidExpression);
                };
                Node::binary(op, left, right)
            }
        };
        stack.push(node);
    }

    if stack.len() != 1 {
        debug!("build_tree: {} roots left", stack.len());
        return Err(Error::InvalidExpression);
    }
    stack.pop().ok_or(Error::InvalidExpression)
}
