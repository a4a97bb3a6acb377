//! End-to-end semantic analysis tests over whole programs.

mod common;
use common::{analysis_error, compile_and_analyze};
use slate_core::{Error, Type, Value};
use slate_parser::parse;
use slate_semantic::{Symbol, TypeChecker};

const PROGRAM: &str = r#"
needs io;

let greeting: string = "hello";
let limit: int = 3 * 4;

fn describe(n: int) -> string {
    if (n > limit) {
        return "big";
    } else {
        return "small";
    }
}

fn report(n: int) {
    put(greeting + ", " + describe(n));
}

let i: int = 0;
while (i < limit) {
    report(i);
    i = i + 1;
}
"#;

#[test]
fn test_full_program() {
    let symbols = compile_and_analyze(PROGRAM).unwrap();

    let globals: Vec<&str> = symbols
        .global_scope()
        .symbols()
        .iter()
        .map(Symbol::name)
        .collect();
    assert_eq!(globals, vec!["greeting", "limit", "describe", "report", "i"]);

    assert_eq!(
        symbols.lookup("limit").unwrap().known_value(),
        Some(Value::Int(12))
    );
    let Some(Symbol::Function(report)) = symbols.lookup("report") else {
        panic!("Expected function symbol");
    };
    assert_eq!(report.return_type, Type::Void);
}

#[test]
fn test_symbol_table_dump() {
    let symbols = compile_and_analyze(PROGRAM).unwrap();
    let dump = symbols.to_string();

    assert!(dump.starts_with("scope 0 (global)"));
    assert!(dump.contains("string greeting = \"hello\" [static, initialized] (line 4)"));
    assert!(dump.contains("int limit = 12 [static, initialized] (line 5)"));
    assert!(dump.contains("fn describe(n: int) -> string (line 7)"));
    assert!(dump.contains("int n = 0 [dynamic] (line 7)"));
}

#[test]
fn test_checker_can_be_driven_directly() {
    let tokens = slate_lexer::tokenize("let a: bool = !true;").unwrap();
    let program = parse(&tokens).unwrap();

    let mut checker = TypeChecker::new();
    checker.check_program(&program).unwrap();
    assert_eq!(
        checker.symbols().lookup("a").unwrap().known_value(),
        Some(Value::Bool(false))
    );

    let symbols = checker.into_symbols();
    assert_eq!(symbols.global_scope().len(), 1);
}

#[test]
fn test_first_error_stops_analysis() {
    let source = "let a: int = \"x\";\nlet b = missing;";
    let err = analysis_error(source);

    assert!(matches!(err, Error::TypeMismatch(..)));
    assert_eq!(err.line(), Some(1));
}

#[test]
fn test_lexer_errors_surface() {
    let err = analysis_error("let a = 1 @ 2;");
    assert!(matches!(err, Error::Lexer(..)));
}
