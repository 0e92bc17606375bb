use log::trace;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::token::{Operator, Token};

/// Collects the distinct variables of a tree.
///
/// Order is first occurrence in a node-left-right traversal.
pub fn variables(node: &Node) -> Vec<char> {
    let mut names = Vec::new();
    collect_variables(node, &mut names);
    names
}

fn collect_variables(node: &Node, names: &mut Vec<char>) {
    if let Token::Variable(name) = node.token {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    if let Some(left) = node.left.as_deref() {
        collect_variables(left, names);
    }
    if let Some(right) = node.right.as_deref() {
        collect_variables(right, names);
    }
}

/// Evaluates a tree under an assignment.
///
/// `values[i]` is the value of `names[i]`. Only `!`, `&` and `XOR` have an
/// evaluation rule; any other operator, `|` included, fails with
/// [`Error::UnsupportedOperator`]. Run [`simplify`][fn@crate::simplify] first to
/// get rid of `NAND`/`NOR`.
pub fn evaluate(node: &Node, names: &[char], values: &[bool]) -> Result<bool> {
    match node.token {
        Token::Variable(name) => names
            .iter()
            .position(|&n| n == name)
            .and_then(|i| values.get(i).copied())
            .ok_or(Error::VariableNotFound(name)),
        Token::Operator(Operator::Not) => {
            let value = evaluate_child(node.left.as_deref(), names, values)?;
            Ok(!value)
        }
        Token::Operator(Operator::And) => {
            let lhs = evaluate_child(node.left.as_deref(), names, values)?;
            let rhs = evaluate_child(node.right.as_deref(), names, values)?;
            Ok(lhs && rhs)
        }
        Token::Operator(Operator::Xor) => {
            let lhs = evaluate_child(node.left.as_deref(), names, values)?;
            let rhs = evaluate_child(node.right.as_deref(), names, values)?;
            Ok(lhs != rhs)
        }
        Token::Operator(op) => {
            trace!("evaluate: no rule for {}", op);
            Err(Error::UnsupportedOperator(op))
        }
    }
}

fn evaluate_child(child: Option<&Node>, names: &[char], values: &[bool]) -> Result<bool> {
    let node = child.ok_or(Error::InvalidExpression)?;
    evaluate(node, names, values)
}
