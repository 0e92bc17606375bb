use std::fmt;

use crate::node::Node;
use crate::token::{Operator, Token};

/// Renders a tree as canonical infix text.
///
/// Every binary subexpression is parenthesized and `!` is written directly
/// before its operand, so the output can be fed back to [`parse`][crate::parse].
/// An empty tree renders as the empty string.
pub fn print<'a>(tree: impl Into<Option<&'a Node>>) -> String {
    let mut out = String::new();
    if let Some(node) = tree.into() {
        // Writing into a `String` does not fail.
        let _ = write_node(&mut out, node);
    }
    out
}

fn write_node<W: fmt::Write>(f: &mut W, node: &Node) -> fmt::Result {
    match node.token {
        Token::Variable(name) => write!(f, "{}", name),
        Token::Operator(Operator::Not) => {
            write!(f, "{}", Operator::Not)?;
            write_child(f, node.left.as_deref())
        }
        Token::Operator(op) => {
            write!(f, "(")?;
            write_child(f, node.left.as_deref())?;
            write!(f, "{}", op)?;
            write_child(f, node.right.as_deref())?;
            write!(f, ")")
        }
    }
}

fn write_child<W: fmt::Write>(f: &mut W, child: Option<&Node>) -> fmt::Result {
    match child {
        Some(node) => write_node(f, node),
        None => Ok(()),
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_print_variable() {
        assert_eq!(print(&Node::variable('x')), "x");
    }

    #[test]
    fn test_print_binary() {
        let tree = Node::and(Node::variable('A'), Node::variable('B'));
        assert_eq!(print(&tree), "(A&B)");
        let tree = Node::xor(tree, Node::variable('C'));
        assert_eq!(print(&tree), "((A&B)XORC)");
    }

    #[test]
    fn test_print_not() {
        let tree = Node::not(Node::or(Node::variable('A'), Node::not(Node::variable('B'))));
        assert_eq!(print(&tree), "!(A|!B)");
    }

    #[test]
    fn test_print_empty() {
        assert_eq!(print(None::<&Node>), "");
    }

    #[test]
    fn test_display_matches_print() {
        let tree = Node::nand(Node::variable('A'), Node::variable('B'));
        assert_eq!(tree.to_string(), print(&tree));
        assert_eq!(tree.to_string(), "(ANANDB)");
    }
}
