//! Tests for the Slate lexer.

use slate_lexer::{TokenKind, tokenize};

#[test]
fn test_keywords() {
    let source = "let fn if else while return break continue needs";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 9);
    assert!(matches!(tokens[0].0.kind, TokenKind::Let));
    assert!(matches!(tokens[1].0.kind, TokenKind::Fn));
    assert!(matches!(tokens[2].0.kind, TokenKind::If));
    assert!(matches!(tokens[3].0.kind, TokenKind::Else));
    assert!(matches!(tokens[4].0.kind, TokenKind::While));
    assert!(matches!(tokens[5].0.kind, TokenKind::Return));
    assert!(matches!(tokens[6].0.kind, TokenKind::Break));
    assert!(matches!(tokens[7].0.kind, TokenKind::Continue));
    assert!(matches!(tokens[8].0.kind, TokenKind::Needs));
}

#[test]
fn test_type_names() {
    let tokens = tokenize("int string bool void integer").unwrap();

    assert_eq!(tokens.len(), 5);
    assert!(matches!(tokens[0].0.kind, TokenKind::IntType));
    assert!(matches!(tokens[1].0.kind, TokenKind::StringType));
    assert!(matches!(tokens[2].0.kind, TokenKind::BoolType));
    assert!(matches!(tokens[3].0.kind, TokenKind::VoidType));
    // Longest match wins over the keyword prefix
    assert!(matches!(tokens[4].0.kind, TokenKind::Identifier));
}

#[test]
fn test_literals() {
    let source = r#"42 "hello" "say \"hi\"" true false"#;
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 5);
    assert!(matches!(tokens[0].0.kind, TokenKind::Integer));
    assert_eq!(tokens[0].0.text, "42");

    assert!(matches!(tokens[1].0.kind, TokenKind::String));
    assert_eq!(tokens[1].0.text, r#""hello""#);

    assert!(matches!(tokens[2].0.kind, TokenKind::String));
    assert_eq!(tokens[2].0.text, r#""say \"hi\"""#);

    assert!(matches!(tokens[3].0.kind, TokenKind::True));
    assert!(matches!(tokens[4].0.kind, TokenKind::False));
}

#[test]
fn test_operators() {
    let source = "+ - * / % = == != < <= > >= && || ! ->";
    let tokens = tokenize(source).unwrap();

    let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::BangEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::AmpersandAmpersand,
            TokenKind::PipePipe,
            TokenKind::Bang,
            TokenKind::Arrow,
        ]
    );
}

#[test]
fn test_punctuation() {
    let tokens = tokenize("( ) { } , : ;").unwrap();

    assert_eq!(tokens.len(), 7);
    assert!(matches!(tokens[0].0.kind, TokenKind::LeftParen));
    assert!(matches!(tokens[3].0.kind, TokenKind::RightBrace));
    assert!(matches!(tokens[6].0.kind, TokenKind::Semicolon));
}

#[test]
fn test_comments_are_skipped() {
    let source = "let x = 1; // trailing comment\n// full line\nx = 2;";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 9);
    assert_eq!(tokens[5].0.text, "x");
}

#[test]
fn test_spans_track_lines_and_columns() {
    let source = "let a = 1;\n  let b = 2;";
    let tokens = tokenize(source).unwrap();

    let (first, first_span) = &tokens[0];
    assert_eq!(first.text, "let");
    assert_eq!(first_span.start.line, 1);
    assert_eq!(first_span.start.column, 1);

    let (second_let, span) = &tokens[5];
    assert_eq!(second_let.text, "let");
    assert_eq!(span.start.line, 2);
    assert_eq!(span.start.column, 3);
    assert_eq!(span.start.offset, 13);
    assert_eq!(span.end.offset, 16);
}

#[test]
fn test_invalid_token() {
    let result = tokenize("let x = 1 @ 2;");
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert_eq!(err.line(), Some(1));
}
