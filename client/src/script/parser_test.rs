use super::*;

fn single_expr(source: &str) -> Expr {
    let mut stmts = parse_program(source).unwrap();
    assert_eq!(stmts.len(), 1, "expected one statement in {source:?}");
    match stmts.remove(0) {
        Stmt::Expr(expr) => expr,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expr = single_expr("1 + 2 * 3");
    let Expr::Binary { op: BinaryOp::Add, right, .. } = expr else {
        panic!("expected addition at the root");
    };
    assert!(matches!(*right, Expr::Binary { op: BinaryOp::Mul, .. }));
}

#[test]
fn assignment_is_right_associative() {
    let expr = single_expr("a = b = 1");
    let Expr::Assign { value, .. } = expr else {
        panic!("expected assignment");
    };
    assert!(matches!(*value, Expr::Assign { .. }));
}

#[test]
fn compound_assignment_records_operator() {
    let expr = single_expr("total += 5");
    assert!(matches!(expr, Expr::Assign { op: AssignOp::Compound(BinaryOp::Add), .. }));
}

#[test]
fn semicolons_are_optional_between_lines() {
    let stmts = parse_program("let a = 1\nlet b = 2\na + b").unwrap();
    assert_eq!(stmts.len(), 3);
}

#[test]
fn declaration_accepts_multiple_bindings() {
    let stmts = parse_program("let a = 1, b;").unwrap();
    let Stmt::Decl { kind: DeclKind::Let, bindings } = &stmts[0] else {
        panic!("expected let declaration");
    };
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[1], ("b".to_owned(), None));
}

#[test]
fn const_requires_initializer() {
    let err = parse_program("const x;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "SyntaxError: Missing initializer in const declaration (line 1, column 7)"
    );
}

#[test]
fn function_declaration_captures_name_and_params() {
    let stmts = parse_program("function area(w, h) { return w * h; }").unwrap();
    let Stmt::Function(def) = &stmts[0] else {
        panic!("expected function declaration");
    };
    assert_eq!(def.name.as_deref(), Some("area"));
    assert_eq!(def.params, vec!["w".to_owned(), "h".to_owned()]);
    assert!(matches!(&def.body, FunctionBody::Block(body) if body.len() == 1));
}

#[test]
fn arrow_functions_parse_in_all_forms() {
    for source in ["x => x * 2", "(a, b) => a + b", "() => { return 1; }"] {
        assert!(matches!(single_expr(source), Expr::Function(_)), "{source}");
    }
}

#[test]
fn parenthesized_expression_is_not_mistaken_for_arrow() {
    assert!(matches!(single_expr("(a + b) * 2"), Expr::Binary { op: BinaryOp::Mul, .. }));
}

#[test]
fn member_index_and_call_chain() {
    let expr = single_expr("items[0].name.toUpperCase()");
    let Expr::Call { callee, args } = expr else {
        panic!("expected call");
    };
    assert!(args.is_empty());
    assert_eq!(callee.describe(), "items[...].name.toUpperCase");
}

#[test]
fn for_loop_with_all_clauses() {
    let stmts = parse_program("for (let i = 0; i < 3; i++) { }").unwrap();
    assert!(matches!(
        &stmts[0],
        Stmt::For { init: Some(_), cond: Some(_), update: Some(_), .. }
    ));
}

#[test]
fn for_of_loop() {
    let stmts = parse_program("for (const fruit of fruits) console.log(fruit)").unwrap();
    assert!(matches!(&stmts[0], Stmt::ForOf { kind: DeclKind::Const, name, .. } if name == "fruit"));
}

#[test]
fn if_else_chain() {
    let stmts = parse_program("if (a) { b } else if (c) { d } else { e }").unwrap();
    let Stmt::If { otherwise: Some(otherwise), .. } = &stmts[0] else {
        panic!("expected if with else");
    };
    assert!(matches!(otherwise.as_ref(), Stmt::If { otherwise: Some(_), .. }));
}

#[test]
fn template_literal_parses_embedded_expression() {
    let expr = single_expr("`sum: ${a + b}`");
    let Expr::Template(segments) = expr else {
        panic!("expected template");
    };
    assert_eq!(segments.len(), 2);
    assert!(matches!(&segments[1], TemplateSegment::Expr(Expr::Binary { op: BinaryOp::Add, .. })));
}

#[test]
fn template_error_reports_source_position() {
    let err = parse_program("let s = `${ ) }`;").unwrap_err();
    assert!(matches!(err, EvalError::Syntax { line: 1, column: 13, .. }), "{err}");
}

#[test]
fn invalid_assignment_target_is_rejected() {
    let err = parse_program("1 = 2").unwrap_err();
    assert!(err.to_string().contains("Invalid left-hand side in assignment"));
}

#[test]
fn unexpected_token_is_reported_with_position() {
    let err = parse_program("let x = ;").unwrap_err();
    assert_eq!(err.to_string(), "SyntaxError: Unexpected token ';' (line 1, column 9)");
}

#[test]
fn unclosed_block_reports_end_of_input() {
    let err = parse_program("function f() {\n  return 1;\n").unwrap_err();
    assert!(err.to_string().starts_with("SyntaxError: Unexpected end of input"));
}

#[test]
fn object_literals_are_not_supported() {
    assert!(parse_program("let o = { a: 1 };").is_err());
}

#[test]
fn deeply_nested_parentheses_are_a_syntax_error() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = parse_program(&source).unwrap_err();
    assert!(matches!(err, EvalError::Syntax { line: 1, .. }), "{err}");
    assert!(err.to_string().contains("nested too deeply"));
}

#[test]
fn deeply_nested_arrays_blocks_and_prefix_operators_are_rejected() {
    let arrays = format!("{}{}", "[".repeat(5_000), "]".repeat(5_000));
    let blocks = format!("{}{}", "{".repeat(5_000), "}".repeat(5_000));
    let negations = format!("{}x", "!".repeat(5_000));
    let templates = format!("{}1{}", "`${".repeat(500), "}`".repeat(500));
    for source in [arrays, blocks, negations, templates] {
        assert!(matches!(parse_program(&source), Err(EvalError::Syntax { .. })));
    }
}

#[test]
fn moderate_nesting_still_parses() {
    let source = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    assert_eq!(single_expr(&source), Expr::Number(1.0));
}
