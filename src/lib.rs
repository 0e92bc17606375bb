//! # goolean: boolean algebra from the terminal
//!
//! **`goolean`** parses textual boolean expressions, rewrites `NAND`/`NOR`
//! with De Morgan's law, prints the result in a canonical fully parenthesized
//! form and enumerates its truth table.
//!
//! ## Syntax
//!
//! - Variables are single letters: `AB` is two variables, not one.
//! - Operators, from tightest to loosest: `!`, then `NAND`/`NOR`/`XOR`, then
//!   `&`, then `|`. Binary operators are left-associative.
//! - Parentheses group as usual.
//!
//! ## Basic Usage
//!
//! ```rust
//! use goolean::{generate_truth_table, parse, print, simplify};
//!
//! // 1. Parse: tokenizer -> shunting-yard -> tree builder
//! let tree = parse("A NAND B").unwrap();
//!
//! // 2. Rewrite NAND/NOR
//! let tree = simplify(tree);
//! assert_eq!(print(&tree), "!(A&B)");
//!
//! // 3. Tabulate (first variable alternates fastest)
//! let table = generate_truth_table(&tree).unwrap();
//! assert_eq!(table.results().collect::<Vec<_>>(), [true, true, true, false]);
//! ```
//!
//! The evaluator only knows `!`, `&` and `XOR`. Any expression still holding
//! `|` after simplification fails to tabulate with
//! [`Error::UnsupportedOperator`].
//!
//! ## Core Components
//!
//! - **[`lexer`]** and **[`parser`]**: text to postfix tokens.
//! - **[`node`]**: the expression tree and its builder.
//! - **[`simplify`][mod@simplify]**, **[`print`][mod@print]**, **[`eval`]**, **[`table`]**: the operations on trees.
//! - **[`repl`]**: the line-oriented loop driven by the `goolean` binary.

pub mod error;
pub mod eval;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod print;
pub mod repl;
pub mod simplify;
pub mod table;
pub mod token;

pub use error::{Error, Result};
pub use node::Node;
pub use parser::parse;
pub use print::print;
pub use simplify::simplify;
pub use table::{generate_truth_table, TruthTable};
pub use token::{Operator, Precedence, Token};
