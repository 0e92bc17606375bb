//! Lexical units of a boolean expression and the operator precedence table.

use std::fmt;

/// An operator tag, including the two parentheses.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Nand,
    Nor,
    Xor,
    LParen,
    RParen,
}

impl Operator {
    /// Keyword operators, longest first so that `NAND` is tried before `NOR`.
    pub const KEYWORDS: [Operator; 3] = [Operator::Nand, Operator::Nor, Operator::Xor];

    /// Returns the literal text of the operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Nand => "NAND",
            Operator::Nor => "NOR",
            Operator::Xor => "XOR",
            Operator::LParen => "(",
            Operator::RParen => ")",
        }
    }

    /// Maps a single-character operator or parenthesis to its tag.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '!' => Some(Operator::Not),
            '&' => Some(Operator::And),
            '|' => Some(Operator::Or),
            '(' => Some(Operator::LParen),
            ')' => Some(Operator::RParen),
            _ => None,
        }
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Operator::Not)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A classified lexical unit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Operator(Operator),
    /// A single-letter variable name.
    Variable(char),
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operator(op) => write!(f, "{}", op),
            Token::Variable(name) => write!(f, "{}", name),
        }
    }
}

/// Operator precedence table used by the shunting-yard pass.
///
/// Higher values bind tighter. Parentheses are matched structurally by the
/// parser; their entry only has to stay below every real operator so that an
/// open parenthesis is never popped by a precedence comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Precedence {
    pub not: u8,
    /// `NAND`, `NOR` and `XOR`.
    pub gate: u8,
    pub and: u8,
    pub or: u8,
    pub paren: u8,
}

impl Default for Precedence {
    fn default() -> Self {
        Self {
            not: 4,
            gate: 3,
            and: 2,
            or: 1,
            paren: 0,
        }
    }
}

impl Precedence {
    pub fn of(&self, op: Operator) -> u8 {
        match op {
            Operator::Not => self.not,
            Operator::Nand | Operator::Nor | Operator::Xor => self.gate,
            Operator::And => self.and,
            Operator::Or => self.or,
            Operator::LParen | Operator::RParen => self.paren,
        }
    }
}
