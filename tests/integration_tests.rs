//! Integration tests for the complete front end.
//!
//! These tests drive source text through tokenization and parsing using only
//! the public API, and check the resulting tree and diagnostics.

use foxc::{
    ast::{Decl, Expr, Stmt, Type},
    compile_source,
    errors::errors::ErrorCategory,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    render_error,
};

#[test]
fn test_compile_simple_program() {
    let source = r#"
        // Adds two numbers.
        fn add(a int, b int) int {
            return a + b;
        }

        fn main() int {
            let mut total int = add(1, 2) * 3;
            let limit int;
            print(total);
            return total;
        }
    "#
    .to_string();

    let (file, errors) = compile_source(source, Some("main.fox".to_string()));
    assert!(errors.is_empty(), "unexpected diagnostics: {:?}", errors);

    let names: Vec<&str> = file
        .functions()
        .map(|function| function.prototype.name.as_str())
        .collect();
    assert_eq!(names, vec!["add", "main"]);

    let main = file.functions().nth(1).unwrap();
    assert_eq!(main.prototype.return_type, Type::symbol("int"));
    assert_eq!(
        main.body.to_string(),
        "(block (let mut total int (* (call add 1 2) 3)) (let limit int) (expr (call print total)) (return total))"
    );
}

#[test]
fn test_compile_nested_expressions() {
    let source = "fn f(x int) int { return (x + 1) * (x - 1) / 2 == x % 3 || x < 0 && x >= 10; }";
    let (file, errors) = compile_source(source.to_string(), None);
    assert!(errors.is_empty());

    let Decl::Function(function) = &file.declarations[0];
    let Stmt::Return(ret) = &function.body.body[0] else {
        panic!("expected return statement");
    };
    assert_eq!(
        ret.value.to_string(),
        "(|| (== (/ (* (+ x 1) (- x 1)) 2) (% x 3)) (&& (< x 0) (>= x 10)))"
    );
}

#[test]
fn test_compile_empty_source() {
    let (file, errors) = compile_source(String::new(), None);

    assert!(errors.is_empty());
    assert!(file.declarations.is_empty());
    assert_eq!(file.to_string(), "");
}

#[test]
fn test_comments_only() {
    let (file, errors) = compile_source("// nothing\n// here\n".to_string(), None);

    assert!(errors.is_empty());
    assert!(file.declarations.is_empty());
}

#[test]
fn test_tokens_then_parse() {
    let (tokens, errors) = tokenize("fn id(x int) int { return x; }".to_string(), None);
    assert!(errors.is_empty());
    assert_eq!(tokens.first().map(|token| token.kind), Some(TokenKind::Fn));
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));

    let (file, errors) = parse(tokens);
    assert!(errors.is_empty());
    assert_eq!(
        file.to_string(),
        "(fn id ((x int)) int (block (return x)))\n"
    );
}

#[test]
fn test_lex_error_invalid_token() {
    let (file, errors) = compile_source("fn f() int { return 1 # 2; }".to_string(), None);

    // `#` is skipped, which leaves `1 2` for the parser to reject. The `2`
    // and the closing `}` are then reported at the top level.
    let names: Vec<&str> = errors.iter().map(|error| error.get_error_name()).collect();
    assert_eq!(
        names,
        vec![
            "UnrecognisedToken",
            "UnexpectedTokenDetailed",
            "UnexpectedToken",
            "UnexpectedToken"
        ]
    );
    assert_eq!(errors[0].category(), ErrorCategory::Lex);
    assert_eq!(errors[1].category(), ErrorCategory::Syntax);
    assert!(file.declarations.is_empty());
}

#[test]
fn test_unterminated_string() {
    let (_, errors) = compile_source("fn f() int { return \"oops; }".to_string(), None);

    assert_eq!(errors[0].get_error_name(), "UnterminatedString");
    assert_eq!(errors[0].category(), ErrorCategory::Lex);
}

#[test]
fn test_parse_error_missing_semicolon() {
    let (file, errors) = compile_source("fn f() int { let x int = 42 }".to_string(), None);

    assert!(file.declarations.is_empty());
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(errors[1].get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_error_missing_type() {
    let (file, errors) = compile_source("fn f() int { let y = 5; return y; }".to_string(), None);

    assert!(file.declarations.is_empty());
    // `= 5`, `return y` and `}` are left over; both `;` are skipped.
    assert_eq!(errors.len(), 6);
    assert_eq!(errors[0].category(), ErrorCategory::UnsupportedFeature);
    assert!(errors[0].to_string().starts_with("shell:1: unsupported feature:"));
}

#[test]
fn test_error_lines_across_functions() {
    let source = "fn a() int {\n  return (1 + 2;\n}\n\nfn b() int {\n  foo(1, );\n}\n\nfn c() int { return 0; }\n";
    let (file, errors) = compile_source(source.to_string(), Some("lines.fox".to_string()));

    let summary: Vec<(&str, u32)> = errors
        .iter()
        .map(|error| (error.get_error_name(), error.line()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("UnclosedDelimiter", 2),
            ("UnexpectedToken", 3),
            ("TrailingComma", 6),
            ("UnexpectedToken", 6),
            ("UnexpectedToken", 7),
        ]
    );
    assert_eq!(file.declarations.len(), 1);
    assert_eq!(file.functions().next().unwrap().prototype.name, "c");
}

#[test]
fn test_render_error_for_each_diagnostic() {
    let source = "fn f() int {\n\treturn foo(1, );\n}\n";
    let (_, errors) = compile_source(source.to_string(), Some("render.fox".to_string()));
    assert_eq!(errors.len(), 3);

    let rendered = render_error(&errors[0], source);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Error: TrailingComma (Remove the trailing `,` at the end of the argument list)",
            "-> render.fox:2",
            "  |",
            "2 | return foo(1, );",
            "  | --------------^",
        ]
    );
}

#[test]
fn test_render_error_at_end_of_input() {
    let source = "fn f() int {\n  return 1;";
    let (_, errors) = compile_source(source.to_string(), Some("eof.fox".to_string()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnclosedDelimiter");

    let rendered = render_error(&errors[0], source);
    assert!(rendered.contains("-> eof.fox:2"));
    assert!(rendered.contains("2 | return 1;"));
}

#[test]
fn test_call_arguments_keep_order() {
    let (file, errors) = compile_source(
        "fn f() int { return g(a, 2, h(), i(b)); }".to_string(),
        None,
    );
    assert!(errors.is_empty());

    let Decl::Function(function) = &file.declarations[0];
    let Stmt::Return(ret) = &function.body.body[0] else {
        panic!("expected return statement");
    };
    assert_eq!(
        ret.value,
        Expr::call(
            "g",
            vec![
                Expr::symbol("a"),
                Expr::number("2"),
                Expr::call("h", vec![]),
                Expr::call("i", vec![Expr::symbol("b")]),
            ]
        )
    );
}
