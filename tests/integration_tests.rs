//! Integration tests for the end-to-end frontend pipeline.
//!
//! These tests verify that complete programs flow correctly from source
//! text through tokenization and parsing to a printable tree, and that
//! failures surface as positioned errors rather than partial trees.

use arlang::{
    ast::{ast::Node, printer::AstPrinter},
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn parse_program(source: &str) -> Result<Vec<Node>, Error> {
    let tokens = tokenize(source.to_string(), Some("test.ar".to_string())).unwrap();
    parse(tokens)
}

fn print_program(source: &str) -> Vec<String> {
    parse_program(source)
        .unwrap()
        .iter()
        .map(|node| AstPrinter.print_node(node))
        .collect()
}

#[test]
fn test_parse_simple_program() {
    let printed = print_program("let x = 42");

    assert_eq!(printed, vec!["(let x 42)"]);
}

#[test]
fn test_parse_function_program() {
    let source = r#"
        func max(a, b) {
            if (a > b) {
                return a
            } else {
                return b
            }
        }
    "#;

    let printed = print_program(source);

    assert_eq!(
        printed,
        vec!["(func max (a b) (block (if (> a b) (block (return a)) (block (return b)))))"]
    );
}

#[test]
fn test_parse_countdown_program() {
    let source = r#"
        let n = 10
        while (n > 0) {
            n = n - 1
        }
    "#;

    let printed = print_program(source);

    assert_eq!(
        printed,
        vec!["(let n 10)", "(while (> n 0) (block (= n (- n 1))))"]
    );
}

#[test]
fn test_parse_program_with_comments() {
    let source = r#"
        // running total
        let total = 0
        total = total + price(3) // unit price times quantity
    "#;

    let printed = print_program(source);

    assert_eq!(
        printed,
        vec!["(let total 0)", "(= total (+ total (call price 3)))"]
    );
}

#[test]
fn test_parse_operator_precedence_program() {
    let printed = print_program("let r = 1 + 2 * 3 - 4 / 2");

    assert_eq!(printed, vec!["(let r (- (+ 1 (* 2 3)) (/ 4 2)))"]);
}

#[test]
fn test_parse_logical_condition_program() {
    let printed = print_program("if (a > 0 and b > 0 or c == 1) done()");

    assert_eq!(
        printed,
        vec!["(if (or (and (> a 0) (> b 0)) (== c 1)) (call done))"]
    );
}

#[test]
fn test_parse_nested_call_program() {
    let printed = print_program("apply(compose(f, g))(x)");

    assert_eq!(printed, vec!["(call (call apply (call compose f g)) x)"]);
}

#[test]
fn test_lexer_error_aborts_pipeline() {
    let tokens = tokenize("let x = $".to_string(), Some("test.ar".to_string()));

    let error = tokens.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_parse_error_has_no_partial_tree() {
    let result = parse_program("let a = 1 func broken( { }");

    assert!(result.is_err());
}

#[test]
fn test_parse_error_position_points_at_offender() {
    let error = parse_program("let a (").unwrap_err();

    // `let a` parses, then the unclosed `(` fails at the end marker.
    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_position().0, 7);
}

#[test]
fn test_parse_unterminated_function_body() {
    let error = parse_program("func f() { return 1").unwrap_err();

    assert_eq!(error.get_tip().to_string(), "Expected '}' after block.");
}

#[test]
fn test_parse_deeply_nested_groups() {
    let printed = print_program("((((1))))");

    assert_eq!(printed, vec!["(group (group (group (group 1))))"]);
}
