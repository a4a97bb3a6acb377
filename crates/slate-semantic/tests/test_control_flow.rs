//! Tests for conditions, loops, break and continue.

mod common;
use common::{analysis_error, should_fail, should_pass};
use slate_core::Error;

#[test]
fn test_valid_conditions() {
    let source = r#"
        let limit: int = 10;
        let name: string = getString();
        if (getInt() < limit && getBool()) {
            putInt(1);
        } else if (name == "root" || !(limit != 10)) {
            putInt(2);
        }
        while (limit >= 0) {
            putInt(limit);
        }
    "#;
    assert!(should_pass(source));
}

#[test]
fn test_if_condition_must_be_boolean() {
    let err = analysis_error("let x: int = 1;\nif (x) { }");

    assert!(matches!(err, Error::TypeMismatch(..)));
    assert_eq!(
        err.to_string(),
        "Invalid boolean expression in condition for if statement."
    );
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_else_if_condition_reports_its_line() {
    let source = "if (true) {\n} else if (1) {\n}";
    let err = analysis_error(source);

    assert_eq!(
        err.to_string(),
        "Invalid boolean expression in condition for else if statement."
    );
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_while_condition_must_be_boolean() {
    let err = analysis_error("while (\"forever\") { }");
    assert!(err.to_string().contains("while statement"));
}

#[test]
fn test_mixed_equality_is_rejected() {
    assert!(should_fail("if (1 == \"a\") { }"));
    assert!(should_fail("if (true < false) { }"));
}

#[test]
fn test_condition_identifiers_are_resolved() {
    assert!(matches!(
        analysis_error("if (missing) { }"),
        Error::UnresolvedIdentifier(..)
    ));
}

#[test]
fn test_break_and_continue_inside_loop() {
    let source = r#"
        let i: int = 0;
        while (i < 10) {
            if (i == 5) {
                break;
            }
            i = i + 1;
            continue;
        }
    "#;
    assert!(should_pass(source));
}

#[test]
fn test_nested_loops() {
    let source = r#"
        while (true) {
            while (false) {
                continue;
            }
            break;
        }
    "#;
    assert!(should_pass(source));
}

#[test]
fn test_break_outside_loop() {
    let err = analysis_error("break;");

    assert!(matches!(err, Error::IllegalConstruct(..)));
    assert_eq!(err.to_string(), "Break statement must be within a loop.");
}

#[test]
fn test_continue_outside_loop() {
    let err = analysis_error("if (true) {\n    continue;\n}");

    assert!(matches!(err, Error::IllegalConstruct(..)));
    assert_eq!(err.to_string(), "Continue statement must be within a loop.");
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_break_after_loop_ends() {
    assert!(should_fail("while (true) { }\nbreak;"));
    assert!(should_fail("fn f() { break; }"));
}
