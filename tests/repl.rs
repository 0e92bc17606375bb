//! The read loop fed with canned lines.

use std::io;

use goolean::repl::{process_all, run, PROMPT};

fn session(lines: &[&str]) -> String {
    let lines = lines.iter().map(|l| Ok(l.to_string())).collect::<Vec<io::Result<String>>>();
    let mut out = Vec::new();
    run(lines, &mut out, PROMPT).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn exit_stops_the_loop() {
    let out = session(&["exit", "A&B"]);
    assert_eq!(out, "goolean> ");
}

#[test]
fn end_of_input_stops_the_loop() {
    let out = session(&[]);
    assert_eq!(out, "goolean> ");
}

#[test]
fn expression_then_exit() {
    let out = session(&["A NAND B", "exit"]);
    let expected = "\
goolean> !(A&B)
A | B | !(A&B)
false | false | true
true | false | true
false | true | true
true | true | false
goolean> ";
    assert_eq!(out, expected);
}

#[test]
fn errors_do_not_stop_the_loop() {
    let out = session(&[")A", "A ? B", "A|B", "!x"]);
    let expected = "\
goolean> mismatched parentheses
goolean> invalid character in input: '?' at position 2
goolean> (A|B)
unsupported operator: |
goolean> !x
x | !x
false | true
true | false
goolean> ";
    assert_eq!(out, expected);
}

#[test]
fn exit_must_match_exactly() {
    let out = session(&[" exit", "exit"]);
    assert_eq!(out, "goolean> invalid expression\ngoolean> ");
}

#[test]
fn read_error_is_returned() {
    let lines: Vec<io::Result<String>> = vec![
        Ok("A".to_string()),
        Err(io::Error::new(io::ErrorKind::Other, "broken pipe")),
        Ok("B".to_string()),
    ];
    let mut out = Vec::new();
    let err = run(lines, &mut out, "> ").unwrap_err();
    assert_eq!(err.to_string(), "broken pipe");
    assert_eq!(String::from_utf8(out).unwrap(), "> A\nA | A\nfalse | false\ntrue | true\n> ");
}

#[test]
fn batch_processes_every_expression() {
    let mut out = Vec::new();
    process_all(["A", "exit", "!B"], &mut out).unwrap();
    let expected = "\
A
A | A
false | false
true | true
invalid expression
!B
B | !B
false | true
true | false
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
