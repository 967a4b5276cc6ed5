//! Integration tests for the driver loop.
//!
//! These tests feed whole sessions through the scanner, parser and driver and
//! check the sequence of outcomes, including recovery after malformed input.

use std::io::{self, Read};

use toy::{
    ast::{
        expressions::Expr,
        statements::{Function, Prototype, TopLevel},
    },
    driver::{Driver, DriverOptions, Outcome, Summary},
    lexer::lexer::Lexer,
    parser::{lookups::PrecedenceTable, parser::Parser},
};

fn driver(source: &str) -> Driver<&[u8]> {
    let lexer = Lexer::from_source(source, Some("session.toy".to_string()));
    Driver::new(Parser::new(lexer).unwrap())
}

fn outcomes(source: &str) -> Vec<Outcome> {
    let mut driver = driver(source);
    let mut outcomes = vec![];

    while let Some(outcome) = driver.step().unwrap() {
        outcomes.push(outcome);
    }

    outcomes
}

fn run(source: &str, show_ast: bool) -> (Summary, String) {
    let mut out = Vec::new();
    let options = DriverOptions {
        prompt: false,
        show_ast,
        source: Some(source),
    };

    let summary = driver(source).run(&mut out, options).unwrap();

    (summary, String::from_utf8(out).unwrap())
}

/// Yields its bytes one at a time, then fails every read.
struct FailingReader {
    data: &'static [u8],
    pos: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.get(self.pos) {
            Some(byte) if !buf.is_empty() => {
                buf[0] = *byte;
                self.pos += 1;
                Ok(1)
            }
            Some(_) => Ok(0),
            None => Err(io::Error::new(io::ErrorKind::Other, "device unplugged")),
        }
    }
}

fn failing_lexer(data: &'static [u8]) -> Lexer<FailingReader> {
    Lexer::new(FailingReader { data, pos: 0 }, Some("device".to_string()))
}

#[test]
fn test_session_of_each_kind() {
    let outcomes = outcomes("def id(x) x;\nextern sin(a);\nid(sin(2));\n");

    assert_eq!(outcomes.len(), 3);
    assert_eq!(
        outcomes[0],
        Outcome::Parsed(TopLevel::Definition(Function {
            proto: Prototype::new("id", vec!["x".to_string()]),
            body: Expr::variable("x"),
        }))
    );
    assert_eq!(
        outcomes[1],
        Outcome::Parsed(TopLevel::Extern(Prototype::new("sin", vec!["a".to_string()])))
    );
    assert_eq!(
        outcomes[2],
        Outcome::Parsed(TopLevel::Expression(Function {
            proto: Prototype::anonymous(),
            body: Expr::call("id", vec![Expr::call("sin", vec![Expr::Number(2.0)])]),
        }))
    );
}

#[test]
fn test_empty_and_separator_only_sessions() {
    assert!(outcomes("").is_empty());
    assert!(outcomes(";;;\n  ; # nothing here\n").is_empty());
}

#[test]
fn test_items_without_separators() {
    let outcomes = outcomes("def f(x) x extern g() 1 + 2");

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[0], Outcome::Parsed(TopLevel::Definition(_))));
    assert!(matches!(outcomes[1], Outcome::Parsed(TopLevel::Extern(_))));
    assert!(matches!(outcomes[2], Outcome::Parsed(TopLevel::Expression(_))));
}

#[test]
fn test_unclosed_prototype_then_eof() {
    let mut driver = driver("def foo(");

    match driver.step().unwrap() {
        Some(Outcome::Failed(error)) => {
            assert_eq!(error.get_error_name(), "ExpectedPrototypeCloseParen")
        }
        other => panic!("Expected failure, got {:?}", other),
    }

    assert_eq!(driver.step().unwrap(), None);
    assert_eq!(driver.step().unwrap(), None);
}

#[test]
fn test_recovery_after_failure() {
    // The failing `def` leaves `(` as the lookahead; the driver skips it and
    // the remainder `x) x` surfaces as further constructs.
    let outcomes = outcomes("def (x) x;\ndef ok(y) y;");

    assert!(matches!(&outcomes[0], Outcome::Failed(error) if error.get_error_name() == "ExpectedFunctionName"));
    assert!(matches!(outcomes.last(), Some(Outcome::Parsed(TopLevel::Definition(f))) if f.proto.name == "ok"));
}

#[test]
fn test_recovery_skips_one_token() {
    let outcomes = outcomes(") 1 + 2");

    assert_eq!(outcomes.len(), 2);
    assert!(matches!(&outcomes[0], Outcome::Failed(error) if error.get_error_name() == "UnexpectedToken"));
    assert_eq!(
        outcomes[1],
        Outcome::Parsed(TopLevel::Expression(Function {
            proto: Prototype::anonymous(),
            body: Expr::binary('+', Expr::Number(1.0), Expr::Number(2.0)),
        }))
    );
}

#[test]
fn test_bad_argument_list_recovers() {
    let outcomes = outcomes("foo(1 2);\nbar(3);");

    assert!(matches!(&outcomes[0], Outcome::Failed(error) if error.get_error_name() == "ExpectedArgumentSeparator"));
    assert_eq!(
        outcomes.last(),
        Some(&Outcome::Parsed(TopLevel::Expression(Function {
            proto: Prototype::anonymous(),
            body: Expr::call("bar", vec![Expr::Number(3.0)]),
        })))
    );
}

#[test]
fn test_custom_precedence_through_driver() {
    let mut table = PrecedenceTable::default();
    table.insert('/', 40).unwrap();

    let lexer = Lexer::from_source("8 - 4 / 2", None);
    let mut driver = Driver::new(Parser::with_precedence(lexer, table).unwrap());

    assert_eq!(
        driver.step().unwrap(),
        Some(Outcome::Parsed(TopLevel::Expression(Function {
            proto: Prototype::anonymous(),
            body: Expr::binary(
                '-',
                Expr::Number(8.0),
                Expr::binary('/', Expr::Number(4.0), Expr::Number(2.0))
            ),
        })))
    );
    assert_eq!(driver.get_parser().get_precedence_table().get('/'), 40);
}

#[test]
fn test_run_reports_status_lines() {
    let (summary, output) = run("def f(x) x; extern g(); 1 + 2;", false);

    assert_eq!(summary, Summary { parsed: 3, failed: 0 });
    assert_eq!(
        output,
        "Parsed a function definition.\nParsed an extern.\nParsed a top-level expression.\n"
    );
}

#[test]
fn test_run_reports_errors_with_source_line() {
    // `(` fails the prototype, then the skipped-to `)` fails as an expression
    let (summary, output) = run("extern ();\n", false);

    assert_eq!(summary, Summary { parsed: 0, failed: 2 });
    assert!(output.starts_with("Failed to parse.\nError: ExpectedFunctionName"));
    assert!(output.contains("-> session.toy:1:8"));
    assert!(output.contains("1 | extern ();"));
}

#[test]
fn test_run_prints_trees() {
    let (_, output) = run("x", true);

    assert!(output.contains("Expression("));
    assert!(output.contains("Variable(\n"));
}

#[test]
fn test_read_failure_while_priming() {
    let error = match Parser::new(failing_lexer(b"x")) {
        Ok(_) => panic!("Expected a read failure"),
        Err(error) => error,
    };

    assert_eq!(error.get_error_name(), "Io");
    assert!(error.is_fatal());
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_read_failure_is_not_recovered_by_driver() {
    // `x ` loads the first token, the next read fails mid-expression
    let mut driver = Driver::new(Parser::new(failing_lexer(b"x ")).unwrap());

    let error = driver.step().unwrap_err();
    assert_eq!(error.get_error_name(), "Io");
    assert_eq!(
        error.get_tip().to_string(),
        ""
    );
    assert!(error.to_string().starts_with("failed to read source: device unplugged"));
}

#[test]
fn test_read_failure_aborts_run() {
    let mut driver = Driver::new(Parser::new(failing_lexer(b"1 + ")).unwrap());
    let mut out = Vec::new();

    let error = driver.run(&mut out, DriverOptions::default()).unwrap_err();

    assert!(error.is_fatal());
    assert!(out.is_empty());
}
