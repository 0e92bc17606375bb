use std::fmt;
use std::ops::Index;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::eval::{evaluate, variables};
use crate::node::Node;

/// Truth table of an expression over all assignments of its variables.
///
/// Each row holds one value per variable followed by the result. Row `i`
/// assigns bit `j` of `i` to the `j`-th variable, so the first variable
/// alternates fastest.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<char>,
    expression: String,
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Variables in column order.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Canonical text of the tabulated expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Result column.
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().filter_map(|row| row.last().copied())
    }

    pub fn into_rows(self) -> Vec<Vec<bool>> {
        self.rows
    }
}

impl Index<usize> for TruthTable {
    type Output = [bool];

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header: Vec<String> = self.variables.iter().map(|v| v.to_string()).collect();
        header.push(self.expression.clone());
        writeln!(f, "{}", header.join(" | "))?;

        for row in self.rows.iter() {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// Enumerates the truth table of a tree.
///
/// Fails on the first evaluation error; no partial table is returned.
///
/// ```
/// use goolean::{generate_truth_table, parse};
///
/// let table = generate_truth_table(&parse("A & B").unwrap()).unwrap();
/// assert_eq!(table.variables(), ['A', 'B']);
/// assert_eq!(table.results().collect::<Vec<_>>(), [false, false, false, true]);
/// ```
pub fn generate_truth_table(node: &Node) -> Result<TruthTable> {
    let variables = variables(node);
    let n = variables.len();
    let count = u32::try_from(n)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or(Error::TooManyVariables(n))?;
    debug!("generate_truth_table(variables = {:?}) -> {} rows", variables, count);

    // No up-front reservation: a failure on row 0 must not allocate 2^n rows.
    let mut rows = Vec::new();
    for i in 0..count {
        let mut row: Vec<bool> = (0..n).map(|j| (i >> j) & 1 == 1).collect();
        let result = evaluate(node, &variables, &row)?;
        trace!("row {}: {:?} -> {}", i, row, result);
        row.push(result);
        rows.push(row);
    }

    Ok(TruthTable {
        variables,
        expression: node.to_string(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::token::Operator;

    const F: bool = false;
    const T: bool = true;

    #[test]
    fn test_table_and() {
        let tree = Node::and(Node::variable('A'), Node::variable('B'));
        let table = generate_truth_table(&tree).unwrap();
        assert_eq!(table.variables(), ['A', 'B']);
        assert_eq!(table.expression(), "(A&B)");
        assert_eq!(table.rows(), [vec![F, F, F], vec![T, F, F], vec![F, T, F], vec![T, T, T]]);
        assert_eq!(&table[3], [T, T, T]);
    }

    #[test]
    fn test_table_single_variable() {
        let tree = Node::not(Node::variable('x'));
        let table = generate_truth_table(&tree).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.into_rows(), vec![vec![F, T], vec![T, F]]);
    }

    #[test]
    fn test_table_row_shape() {
        let tree = Node::xor(
            Node::and(Node::variable('A'), Node::variable('B')),
            Node::not(Node::variable('C')),
        );
        let table = generate_truth_table(&tree).unwrap();
        assert_eq!(table.len(), 8);
        assert!(table.rows().iter().all(|row| row.len() == 4));
        for row in table.rows() {
            assert_eq!(row[3], (row[0] && row[1]) != !row[2]);
        }
    }

    #[test]
    fn test_table_fails_whole() {
        let tree = Node::and(Node::variable('A'), Node::or(Node::variable('B'), Node::variable('C')));
        assert_eq!(generate_truth_table(&tree), Err(Error::UnsupportedOperator(Operator::Or)));
    }

    #[test]
    fn test_display() {
        let tree = Node::xor(Node::variable('A'), Node::variable('B'));
        let table = generate_truth_table(&tree).unwrap();
        let expected = "\
A | B | (AXORB)
false | false | false
true | false | true
false | true | true
true | true | false
";
        assert_eq!(table.to_string(), expected);
    }
}
