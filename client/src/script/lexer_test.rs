use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn tokenize_declaration() {
    assert_eq!(
        kinds("let x = 42;"),
        vec![
            TokenKind::Keyword(Keyword::Let),
            TokenKind::Ident("x".to_owned()),
            TokenKind::Punct(Punct::Assign),
            TokenKind::Number(42.0),
            TokenKind::Punct(Punct::Semicolon),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_prefers_longest_operator() {
    assert_eq!(
        kinds("a === b !== c => d++"),
        vec![
            TokenKind::Ident("a".to_owned()),
            TokenKind::Punct(Punct::StrictEq),
            TokenKind::Ident("b".to_owned()),
            TokenKind::Punct(Punct::StrictNotEq),
            TokenKind::Ident("c".to_owned()),
            TokenKind::Punct(Punct::Arrow),
            TokenKind::Ident("d".to_owned()),
            TokenKind::Punct(Punct::PlusPlus),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_skips_line_and_block_comments() {
    assert_eq!(
        kinds("// hello\n1 /* inner\ncomment */ + 2"),
        vec![
            TokenKind::Number(1.0),
            TokenKind::Punct(Punct::Plus),
            TokenKind::Number(2.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_tracks_line_and_column() {
    let tokens = tokenize("let a;\n  a").unwrap();
    let last_ident = &tokens[3];
    assert_eq!(last_ident.kind, TokenKind::Ident("a".to_owned()));
    assert_eq!((last_ident.line, last_ident.column), (2, 3));
}

#[test]
fn tokenize_string_escapes() {
    assert_eq!(kinds(r#"'it\'s' "a\nb""#)[..2], [
        TokenKind::Str("it's".to_owned()),
        TokenKind::Str("a\nb".to_owned()),
    ]);
}

#[test]
fn tokenize_decimal_and_exponent_numbers() {
    assert_eq!(kinds("2.5 .5 1e3 2E-2")[..4], [
        TokenKind::Number(2.5),
        TokenKind::Number(0.5),
        TokenKind::Number(1000.0),
        TokenKind::Number(0.02),
    ]);
}

#[test]
fn tokenize_template_splits_text_and_expressions() {
    let tokens = tokenize("`Hello, ${name}!`").unwrap();
    assert_eq!(
        tokens[0].kind,
        TokenKind::Template(vec![
            TemplatePart::Text("Hello, ".to_owned()),
            TemplatePart::Expr { source: "name".to_owned(), line: 1, column: 11 },
            TemplatePart::Text("!".to_owned()),
        ])
    );
}

#[test]
fn tokenize_template_keeps_nested_braces_in_expression() {
    let tokens = tokenize("`${ [1].map(x => { return x; }) }`").unwrap();
    let TokenKind::Template(parts) = &tokens[0].kind else {
        panic!("expected template");
    };
    assert_eq!(parts.len(), 1);
    assert!(matches!(&parts[0], TemplatePart::Expr { source, .. } if source.contains("return x;")));
}

#[test]
fn tokenize_rejects_unterminated_string() {
    let err = tokenize("let s = 'oops").unwrap_err();
    assert!(matches!(err, EvalError::Syntax { line: 1, column: 9, .. }));
}

#[test]
fn tokenize_rejects_unterminated_block_comment() {
    assert!(tokenize("/* never closed").is_err());
}

#[test]
fn tokenize_rejects_unknown_character() {
    let err = tokenize("a # b").unwrap_err();
    assert_eq!(err.to_string(), "SyntaxError: Unexpected character '#' (line 1, column 3)");
}

#[test]
fn tokenize_rejects_identifier_glued_to_number() {
    assert!(tokenize("let x = 3abc;").is_err());
}

#[test]
fn tokenize_template_ignores_braces_inside_quoted_strings() {
    let tokens = tokenize(r#"`a${"}"}b`"#).unwrap();
    assert_eq!(
        tokens[0].kind,
        TokenKind::Template(vec![
            TemplatePart::Text("a".to_owned()),
            TemplatePart::Expr { source: r#""}""#.to_owned(), line: 1, column: 5 },
            TemplatePart::Text("b".to_owned()),
        ])
    );
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn tokenize_template_copies_nested_template_whole() {
    let tokens = tokenize("`x${ `{${'}'}` }y`").unwrap();
    let TokenKind::Template(parts) = &tokens[0].kind else {
        panic!("expected template");
    };
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[1], TemplatePart::Expr { source: " `{${'}'}` ".to_owned(), line: 1, column: 5 });
    assert_eq!(parts[2], TemplatePart::Text("y".to_owned()));
}
