//! Interactive session scenarios driven from in-memory input.

use std::io::Cursor;

use pricelist_cli::session::{BoundKind, Session, SessionEnd, SessionError};
use pricelist_model::{Record, ValueError};

fn catalog() -> Vec<Record> {
    vec![
        Record::new("b.csv")
            .with_name("Milk Powder")
            .with_price("300")
            .with_weight("0.5"),
        Record::new("a.csv")
            .with_name("Milk")
            .with_price("80")
            .with_weight("1"),
        Record::new("c.csv")
            .with_name("Green Tea")
            .with_price("150")
            .with_weight("0.1"),
    ]
}

fn run(records: &[Record], input: &str) -> (Result<SessionEnd, SessionError>, String) {
    let mut output = Vec::new();
    let result = Session::new(records, Cursor::new(input.as_bytes()), &mut output).run();
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn search_prints_ranked_matches_then_exits() {
    let records = catalog();
    let (result, output) = run(&records, "milk\n\n\n\n\nexit\n");

    assert_eq!(result.unwrap(), SessionEnd::ExitWord);
    let cheap = output.find("a.csv").unwrap();
    let dear = output.find("b.csv").unwrap();
    assert!(cheap < dear);
    assert!(output.contains("80.0"));
    assert!(output.contains("600.0"));
    assert!(!output.contains("c.csv"));
}

#[test]
fn min_price_filters_results() {
    let records = catalog();
    let (result, output) = run(&records, "milk\n100\n\n\n\nexit\n");

    assert_eq!(result.unwrap(), SessionEnd::ExitWord);
    assert!(output.contains("b.csv"));
    assert!(!output.contains("a.csv"));
}

#[test]
fn whitespace_bounds_are_unbounded() {
    let records = catalog();
    let (result, output) = run(&records, "tea\n  \n\t\n \n \nexit\n");

    assert_eq!(result.unwrap(), SessionEnd::ExitWord);
    assert!(output.contains("c.csv"));
    assert!(output.contains("1500.0"));
}

#[test]
fn no_results_echoes_the_query() {
    let records = catalog();
    let (result, output) = run(&records, "coffee\n\n\n\n\nexit\n");

    assert_eq!(result.unwrap(), SessionEnd::ExitWord);
    assert!(output.contains("No products match your query."));
    assert!(output.contains("You searched for: coffee"));
}

#[test]
fn exit_word_is_case_insensitive() {
    let records = catalog();
    let (result, output) = run(&records, "ExIt\n");

    assert_eq!(result.unwrap(), SessionEnd::ExitWord);
    assert!(output.contains("(or 'exit' to finish)"));
}

#[test]
fn custom_exit_word() {
    let records = catalog();
    let mut output = Vec::new();
    let mut session = Session::new(&records, Cursor::new(&b"exit\n\n\n\n\nQUIT\n"[..]), &mut output)
        .with_exit_word("quit");

    assert_eq!(session.run().unwrap(), SessionEnd::ExitWord);
    assert_eq!(session.queries(), 1);
}

#[test]
fn end_of_input_at_name_prompt_ends_session() {
    let records = catalog();
    let (result, _) = run(&records, "");
    assert_eq!(result.unwrap(), SessionEnd::EndOfInput);

    let (result, _) = run(&records, "milk\n\n\n\n\n");
    assert_eq!(result.unwrap(), SessionEnd::EndOfInput);
}

#[test]
fn end_of_input_mid_query_is_an_error() {
    let records = catalog();
    let (result, _) = run(&records, "milk\n10\n");

    assert!(matches!(
        result,
        Err(SessionError::UnexpectedEof {
            bound: BoundKind::MaxPrice
        })
    ));
}

#[test]
fn non_numeric_bound_ends_session() {
    let records = catalog();
    let (result, _) = run(&records, "milk\n\n\nheavy\n\nexit\n");

    let err = result.unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid minimum weight: 'heavy' is not a number");
}

#[test]
fn zero_weight_match_ends_session() {
    let records = vec![Record::new("z.csv").with_name("Air").with_weight("0")];
    let (result, _) = run(&records, "air\n\n\n\n\nexit\n");

    assert!(matches!(
        result,
        Err(SessionError::Value(ValueError::DivisionByZero { .. }))
    ));
}

#[test]
fn crlf_input_is_accepted() {
    let records = catalog();
    let (result, output) = run(&records, "milk\r\n\r\n\r\n\r\n\r\nexit\r\n");

    assert_eq!(result.unwrap(), SessionEnd::ExitWord);
    assert!(output.contains("a.csv"));
}
