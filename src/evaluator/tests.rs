//! Unit tests for the evaluator module.

use std::{io::Cursor, rc::Rc};

use pretty_assertions::assert_eq;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    parser::{parser::Parser, stmt::parse_fn_decl_stmt},
    run, Position,
};

use super::{
    environment::Environment,
    evaluator::Evaluator,
    value::{Value, ValueKind},
};

type TestEvaluator = Evaluator<Cursor<Vec<u8>>, Vec<u8>>;

fn evaluator_with_input(input: &str) -> TestEvaluator {
    Evaluator::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Runs `source` with `input` on stdin; returns the result and everything printed.
fn run_with_input(source: &str, input: &str) -> (Result<Option<Value>, Error>, String) {
    let mut evaluator = evaluator_with_input(input);
    let result = run(source, None, &mut evaluator);
    let output = String::from_utf8(evaluator.into_output()).unwrap();

    (result, output)
}

fn evaluate(source: &str) -> Result<Option<Value>, Error> {
    run_with_input(source, "").0
}

fn evaluate_error(source: &str) -> ErrorImpl {
    evaluate(source).unwrap_err().get_internal_error().clone()
}

fn output_of(source: &str) -> String {
    let (result, output) = run_with_input(source, "");
    result.unwrap();
    output
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(evaluate("10 - 3 - 2;"), Ok(Some(Value::Float(5.0))));
    assert_eq!(evaluate("1 + 2 * 3;"), Ok(Some(Value::Float(7.0))));
    assert_eq!(evaluate("(1 + 2) * 3;"), Ok(Some(Value::Float(9.0))));
}

#[test]
fn test_division() {
    assert_eq!(evaluate("7 / 2;"), Ok(Some(Value::Float(3.5))));
    assert_eq!(evaluate_error("1 / 0;"), ErrorImpl::DivisionByZero);
}

#[test]
fn test_remainder() {
    assert_eq!(evaluate("7 % 4;"), Ok(Some(Value::Float(3.0))));
    assert_eq!(evaluate("5.5 % 2;"), Ok(Some(Value::Float(1.5))));
    assert_eq!(evaluate_error("5 % 0;"), ErrorImpl::DivisionByZero);
}

#[test]
fn test_string_concatenation() {
    assert_eq!(evaluate("\"a\" + \"b\";"), Ok(Some(Value::String("ab".to_string()))));
    assert_eq!(
        evaluate_error("\"a\" - \"b\";"),
        ErrorImpl::InvalidStringOperation { operator: "-".to_string() }
    );
    assert_eq!(
        evaluate_error("\"a\" == \"a\";"),
        ErrorImpl::InvalidStringOperation { operator: "==".to_string() }
    );
}

#[test]
fn test_mixed_operands_need_numbers() {
    assert_eq!(evaluate_error("\"a\" + 1;"), ErrorImpl::TypeCoercion { value: "a".to_string() });
    assert_eq!(evaluate_error("true + 1;"), ErrorImpl::TypeCoercion { value: "true".to_string() });
}

#[test]
fn test_comparisons() {
    assert_eq!(evaluate("1 < 2;"), Ok(Some(Value::Bool(true))));
    assert_eq!(evaluate("2 <= 1;"), Ok(Some(Value::Bool(false))));
    assert_eq!(evaluate("3 > 2;"), Ok(Some(Value::Bool(true))));
    assert_eq!(evaluate("2 >= 2;"), Ok(Some(Value::Bool(true))));
    assert_eq!(evaluate("2 == 2.0;"), Ok(Some(Value::Bool(true))));
    assert_eq!(evaluate("1 != 1;"), Ok(Some(Value::Bool(false))));
}

#[test]
fn test_logical_operators_use_truthiness() {
    assert_eq!(evaluate("true && 0;"), Ok(Some(Value::Bool(false))));
    assert_eq!(evaluate("\"\" || 1;"), Ok(Some(Value::Bool(true))));
    assert_eq!(evaluate("\"a\" && \"b\";"), Ok(Some(Value::Bool(true))));
    assert_eq!(evaluate("1 < 2 && 2 < 1;"), Ok(Some(Value::Bool(false))));
}

#[test]
fn test_range_is_not_evaluated() {
    assert_eq!(
        evaluate_error("1..3;"),
        ErrorImpl::UnsupportedOperator { operator: "..".to_string() }
    );
}

#[test]
fn test_unary_minus() {
    assert_eq!(evaluate("-2 + 3;"), Ok(Some(Value::Float(1.0))));
    assert_eq!(evaluate_error("-\"a\";"), ErrorImpl::TypeCoercion { value: "a".to_string() });
    assert_eq!(evaluate_error("-true;"), ErrorImpl::TypeCoercion { value: "true".to_string() });

    let (result, _) = run_with_input("let n: int; read(n); -n;", "4\n");
    assert_eq!(result, Ok(Some(Value::Int(-4))));
}

#[test]
fn test_negating_smallest_int_widens_to_float() {
    let (result, _) = run_with_input("let n: int; read(n); -n;", "-9223372036854775808\n");
    assert_eq!(result, Ok(Some(Value::Float(9223372036854775808.0))));
}

#[test]
fn test_declare_assign_and_print() {
    assert_eq!(output_of("let x: int; x = 5; print(x);"), "5\n");
}

#[test]
fn test_zero_values() {
    assert_eq!(output_of("let i: int; print(i);"), "0\n");
    assert_eq!(output_of("let f: float; print(f);"), "0\n");
    assert_eq!(output_of("let s: string; print(s);"), "\n");
    assert_eq!(output_of("let b: bool; print(b);"), "false\n");
}

#[test]
fn test_declaration_defaults_to_float() {
    let mut evaluator = evaluator_with_input("");
    run("let x = 3;", None, &mut evaluator).unwrap();

    let variable = evaluator.environment.get("x", &position()).unwrap();
    assert_eq!(variable.kind, ValueKind::Float);
    assert_eq!(variable.value, Value::Float(3.0));
}

#[test]
fn test_number_literals_stay_float_in_int_variables() {
    let mut evaluator = evaluator_with_input("");
    run("let x: int = 5;", None, &mut evaluator).unwrap();

    let variable = evaluator.environment.get("x", &position()).unwrap();
    assert_eq!(variable.kind, ValueKind::Int);
    assert_eq!(variable.value, Value::Float(5.0));
}

#[test]
fn test_redeclaration_replaces_kind_and_value() {
    let mut evaluator = evaluator_with_input("");
    run("let x: int = 1; let x: bool = true;", None, &mut evaluator).unwrap();

    let variable = evaluator.environment.get("x", &position()).unwrap();
    assert_eq!(variable.kind, ValueKind::Bool);
    assert_eq!(variable.value, Value::Bool(true));
}

#[test]
fn test_unknown_types() {
    assert_eq!(evaluate_error("let x: number;"), ErrorImpl::UnknownType { type_: "number".to_string() });
}

#[test]
fn test_array_declarations_default_to_float() {
    assert_eq!(evaluate("let xs: []int; xs;"), Ok(Some(Value::Float(0.0))));

    let mut evaluator = evaluator_with_input("");
    run("let grid: [][]string = 2;", None, &mut evaluator).unwrap();

    let variable = evaluator.environment.get("grid", &position()).unwrap();
    assert_eq!(variable.kind, ValueKind::Float);
    assert_eq!(variable.value, Value::Float(2.0));
}

#[test]
fn test_while_runs_until_condition_fails() {
    let (result, output) = run_with_input(
        "let i: int = 0; while (i < 3) { print(i); i = i + 1; }",
        "",
    );

    assert_eq!(output, "0\n1\n2\n");
    // The loop's value is its body's last value from the final iteration.
    assert_eq!(result, Ok(Some(Value::Float(3.0))));
}

#[test]
fn test_while_that_never_runs() {
    assert_eq!(evaluate("let i = 5; while (i < 3) { i = i + 1; }"), Ok(None));
}

#[test]
fn test_if_without_else() {
    let (result, output) = run_with_input("if (1 > 2) { print(1); };", "");

    assert_eq!(result, Ok(None));
    assert_eq!(output, "");
}

#[test]
fn test_if_else() {
    assert_eq!(output_of("if (0) { print(1); } else { print(2); };"), "2\n");
    assert_eq!(output_of("if (\"yes\") { print(1); } else { print(2); };"), "1\n");
    assert_eq!(evaluate("let x = 0; if (true) { x = 7; };"), Ok(Some(Value::Float(7.0))));
}

#[test]
fn test_undefined_variables() {
    let undefined = ErrorImpl::VariableNotDeclared { variable: "y".to_string() };

    assert_eq!(evaluate_error("y;"), undefined);
    assert_eq!(evaluate_error("y = 1;"), undefined);
    assert_eq!(evaluate_error("read(y);"), undefined);
}

#[test]
fn test_runtime_error_position() {
    let error = evaluate("let a = 1;\nprint(b);").unwrap_err();

    assert_eq!(error.get_position().0, 17);
    assert_eq!(error.get_position().1.as_str(), "shell");
}

#[test]
fn test_compound_assignment_overwrites() {
    assert_eq!(evaluate("let x = 10; x += 5; x;"), Ok(Some(Value::Float(5.0))));
    assert_eq!(evaluate("let x = 10; x -= 1; x;"), Ok(Some(Value::Float(1.0))));
}

#[test]
fn test_assignment_returns_assigned_value() {
    assert_eq!(evaluate("let a = 0; a = 3;"), Ok(Some(Value::Float(3.0))));
}

#[test]
fn test_chained_assignment_target_is_not_a_symbol() {
    // `a = b = 1` groups as `(a = b) = 1`.
    assert_eq!(
        evaluate_error("let a = 0; let b = 0; a = b = 1;"),
        ErrorImpl::InvalidAssignmentTarget
    );
    assert_eq!(evaluate_error("1 = 2;"), ErrorImpl::InvalidAssignmentTarget);
}

#[test]
fn test_side_effects_survive_errors() {
    let (result, output) = run_with_input("print(1); print(y); print(2);", "");

    assert!(result.is_err());
    assert_eq!(output, "1\n");
}

#[test]
fn test_read_converts_to_declared_kind() {
    let (result, output) = run_with_input("let n: int; read(n); print(n + 1);", "41\n");
    assert_eq!(result, Ok(None));
    assert_eq!(output, "42\n");

    let (result, _) = run_with_input("let f: float; read(f);", "2.5\n");
    assert_eq!(result, Ok(Some(Value::Float(2.5))));

    let (result, _) = run_with_input("let s: string; read(s);", "  hello world\n");
    assert_eq!(result, Ok(Some(Value::String("  hello world".to_string()))));

    let (result, _) = run_with_input("let n: int; read(n);", "7\r\n");
    assert_eq!(result, Ok(Some(Value::Int(7))));
}

#[test]
fn test_read_booleans() {
    for (input, expected) in [("true", true), ("T", true), ("1", true), ("False", false), ("f", false), ("0", false)] {
        let (result, _) = run_with_input("let b: bool; read(b);", &format!("{}\n", input));
        assert_eq!(result, Ok(Some(Value::Bool(expected))), "input {:?}", input);
    }
}

#[test]
fn test_read_stores_value() {
    let mut evaluator = evaluator_with_input("3\n4\n");
    run("let a: int; let b: int; read(a); read(b);", None, &mut evaluator).unwrap();

    assert_eq!(evaluator.environment.get("a", &position()).unwrap().value, Value::Int(3));
    assert_eq!(evaluator.environment.get("b", &position()).unwrap().value, Value::Int(4));
}

#[test]
fn test_read_rejects_bad_input() {
    let (result, _) = run_with_input("let n: int; read(n);", "abc\n");
    assert_eq!(
        result.unwrap_err().get_internal_error(),
        &ErrorImpl::InvalidInput { input: "abc".to_string(), expected: "int".to_string() }
    );

    for input in ["maybe", "tRuE", "fALSE", "yes"] {
        let (result, _) = run_with_input("let b: bool; read(b);", &format!("{}\n", input));
        assert!(
            matches!(result.as_ref().unwrap_err().get_internal_error(), ErrorImpl::InvalidInput { .. }),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_read_consumes_line_before_checking_target() {
    let mut evaluator = evaluator_with_input("first\nsecond\nthird\n");

    let error = run("read(missing);", None, &mut evaluator).unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::VariableNotDeclared { variable: "missing".to_string() }
    );

    let error = run("read(1);", None, &mut evaluator).unwrap_err();
    assert_eq!(error.get_internal_error(), &ErrorImpl::InvalidReadTarget);

    assert_eq!(
        run("let s: string; read(s);", None, &mut evaluator),
        Ok(Some(Value::String("third".to_string())))
    );
}

#[test]
fn test_read_at_end_of_input() {
    let (result, _) = run_with_input("let n: int; read(n);", "");
    assert_eq!(
        result.unwrap_err().get_internal_error(),
        &ErrorImpl::InvalidInput { input: String::new(), expected: "int".to_string() }
    );
}

#[test]
fn test_read_target_must_be_symbol() {
    assert_eq!(evaluate_error("read(1);"), ErrorImpl::InvalidReadTarget);
}

#[test]
fn test_function_declarations_are_not_executed() {
    let file = Rc::new("test.lang".to_string());
    let tokens = tokenize("fn f() { print(1); }".to_string(), Some(file.to_string())).unwrap();
    let mut parser = Parser::new(tokens, Rc::clone(&file));
    let declaration = parse_fn_decl_stmt(&mut parser).unwrap();

    let mut evaluator = evaluator_with_input("");
    assert_eq!(
        evaluator.execute(&declaration).unwrap_err().get_internal_error(),
        &ErrorImpl::UnsupportedStatement { statement: "function declaration".to_string() }
    );
    assert!(evaluator.output().is_empty());
}

#[test]
fn test_truthiness() {
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Int(-1).is_truthy());
    assert!(!Value::Int(0).is_truthy());
    assert!(Value::Float(0.5).is_truthy());
    assert!(!Value::Float(0.0).is_truthy());
    assert!(Value::String(" ".to_string()).is_truthy());
    assert!(!Value::String(String::new()).is_truthy());
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Float(5.0).to_string(), "5");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::String("hi".to_string()).to_string(), "hi");
    assert_eq!(Value::Bool(false).to_string(), "false");
}

#[test]
fn test_environment() {
    let mut environment = Environment::new();
    assert!(environment.get("x", &position()).is_err());

    environment.declare("x", ValueKind::Int, Value::Int(1));
    environment.assign("x", Value::String("s".to_string()), &position()).unwrap();

    let variable = environment.get("x", &position()).unwrap();
    assert_eq!(variable.kind, ValueKind::Int);
    assert_eq!(variable.value, Value::String("s".to_string()));

    assert!(environment.assign("y", Value::Int(0), &position()).is_err());
    assert!(environment.get("y", &position()).is_err());

    environment.declare("x", ValueKind::Bool, Value::Bool(true));
    assert_eq!(environment.get("x", &position()).unwrap().kind, ValueKind::Bool);
}

fn position() -> Position {
    Position(0, Rc::new("test.lang".to_string()))
}
