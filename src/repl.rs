//! Interactive read-eval-print loop.
//!
//! The loop reads from any iterator of lines and writes to any sink, so it can
//! be driven by stdin or by a canned list of lines.

use std::io::{self, Write};

use log::{debug, info};

use crate::parser::parse;
use crate::simplify::simplify;
use crate::table::generate_truth_table;

/// Default prompt printed before each line is read.
pub const PROMPT: &str = "goolean> ";

/// Line that ends the loop.
pub const EXIT: &str = "exit";

/// Runs the loop until `exit` or end of input.
///
/// Expression errors are written to `out` and the loop continues. Only I/O
/// errors (reading a line, writing output) are returned.
pub fn run<I, W>(lines: I, out: &mut W, prompt: &str) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut lines = lines.into_iter();
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            info!("end of input");
            return Ok(());
        };
        let line = line?;
        if line == EXIT {
            info!("exit");
            return Ok(());
        }

        process_line(&line, out)?;
    }
}

/// Processes every expression in turn, with no prompt and no `exit` handling.
pub fn process_all<I, W>(expressions: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    W: Write,
{
    for expression in expressions {
        process_line(expression.as_ref(), out)?;
    }
    Ok(())
}

/// Parses, simplifies and tabulates one line, writing everything to `out`.
pub fn process_line<W: Write>(line: &str, out: &mut W) -> io::Result<()> {
    debug!("process_line({:?})", line);

    let tree = match parse(line) {
        Ok(tree) => tree,
        Err(e) => return writeln!(out, "{}", e),
    };

    let tree = simplify(tree);
    writeln!(out, "{}", tree)?;

    match generate_truth_table(&tree) {
        Ok(table) => write!(out, "{}", table),
        Err(e) => writeln!(out, "{}", e),
    }
}
