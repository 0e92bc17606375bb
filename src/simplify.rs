use log::debug;

use crate::node::Node;
use crate::token::{Operator, Token};

/// Rewrites `NAND` and `NOR` with De Morgan's law.
///
/// Children are simplified first; then `L NAND R` becomes `!(L & R)` and
/// `L NOR R` becomes `!(L | R)`. The original children move into the new
/// `&`/`|` node. Every other operator is kept as is, `XOR` included.
///
/// ```
/// use goolean::{parse, print, simplify};
///
/// let tree = simplify(parse("A NOR B").unwrap());
/// assert_eq!(print(&tree), "!(A|B)");
/// ```
pub fn simplify(node: Node) -> Node {
    let Node { token, left, right } = node;
    let left = left.map(|n| Box::new(simplify(*n)));
    let right = right.map(|n| Box::new(simplify(*n)));

    let inner = match token {
        Token::Operator(Operator::Nand) => Operator::And,
        Token::Operator(Operator::Nor) => Operator::Or,
        _ => return Node { token, left, right },
    };

    debug!("simplify: {} => !({})", token, inner);
    Node {
        token: Token::Operator(Operator::Not),
        left: Some(Box::new(Node {
            token: Token::Operator(inner),
            left,
            right,
        })),
        right: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn a() -> Node {
        Node::variable('A')
    }

    fn b() -> Node {
        Node::variable('B')
    }

    #[test]
    fn test_simplify_nand() {
        let tree = simplify(Node::nand(a(), b()));
        assert_eq!(tree, Node::not(Node::and(a(), b())));
    }

    #[test]
    fn test_simplify_nor() {
        let tree = simplify(Node::nor(a(), b()));
        assert_eq!(tree, Node::not(Node::or(a(), b())));
    }

    #[test]
    fn test_simplify_nested() {
        let tree = simplify(Node::nor(Node::nand(a(), b()), Node::not(b())));
        assert_eq!(tree, Node::not(Node::or(Node::not(Node::and(a(), b())), Node::not(b()))));
    }

    #[test]
    fn test_simplify_keeps_other_operators() {
        let tree = Node::or(Node::xor(a(), b()), Node::not(Node::and(a(), b())));
        assert_eq!(simplify(tree.clone()), tree);
    }

    #[test]
    fn test_simplify_idempotent() {
        let once = simplify(Node::xor(Node::nand(a(), b()), Node::nor(b(), a())));
        let twice = simplify(once.clone());
        assert_eq!(once, twice);
    }
}
