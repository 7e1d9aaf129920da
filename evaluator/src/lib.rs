pub mod error;
pub mod value;

use parser::expr::{Expr, LiteralValue};
use scanner::token::{types::TokenType, Token};

pub use error::RuntimeError;
pub use value::Value;

use value::values_equal;

/// Post-order tree-walking evaluator. Aborts on the first runtime error —
/// unlike the scanner, there is no "keep going and report everything" mode
/// here, since a single bad operand makes every value computed above it
/// meaningless.
pub fn evaluate(expr: &Expr) -> Result<Value, RuntimeError> {
  tracing::debug!("evaluate started");
  let result = eval_expr(expr);

  match &result {
    Ok(value) => tracing::debug!(%value, "evaluate finished"),
    Err(err) => tracing::debug!(error = %err.message, line = err.token.line, "evaluate failed"),
  }
  result
}

fn eval_expr(expr: &Expr) -> Result<Value, RuntimeError> {
  match expr {
    Expr::Literal { value } => Ok(eval_literal(value)),
    Expr::Grouping { inner } => eval_expr(inner),
    Expr::Unary { op, right } => eval_unary(op, right),
    Expr::Binary { left, op, right } => eval_binary(left, op, right),
  }
}

fn eval_literal(value: &LiteralValue) -> Value {
  match value {
    LiteralValue::Nil => Value::Nil,
    LiteralValue::Bool(b) => Value::Bool(*b),
    LiteralValue::Number(n) => Value::Number(*n),
    LiteralValue::String(s) => Value::String(s.clone()),
  }
}

fn eval_unary(op: &Token, right: &Expr) -> Result<Value, RuntimeError> {
  let right = eval_expr(right)?;

  match op.kind {
    TokenType::Minus => match right {
      Value::Number(n) => Ok(Value::Number(-n)),
      _ => Err(RuntimeError::new(op.clone(), "Operand must be a number.")),
    },
    TokenType::Bang => Ok(Value::Bool(!right.is_truthy())),
    _ => unreachable!("the parser never produces a Unary node with any other operator"),
  }
}

fn eval_binary(left: &Expr, op: &Token, right: &Expr) -> Result<Value, RuntimeError> {
  let left = eval_expr(left)?;
  let right = eval_expr(right)?;

  match op.kind {
    TokenType::Plus => match (left, right) {
      (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
      (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
      _ => Err(RuntimeError::new(
        op.clone(),
        "Operands must be two numbers or two strings.",
      )),
    },
    TokenType::Minus => numeric(op, left, right, |a, b| a - b),
    TokenType::Star => numeric(op, left, right, |a, b| a * b),
    TokenType::Slash => numeric(op, left, right, |a, b| a / b),
    TokenType::Greater => comparison(op, left, right, |a, b| a > b),
    TokenType::GreaterEqual => comparison(op, left, right, |a, b| a >= b),
    TokenType::Less => comparison(op, left, right, |a, b| a < b),
    TokenType::LessEqual => comparison(op, left, right, |a, b| a <= b),
    TokenType::EqualEqual => Ok(Value::Bool(values_equal(&left, &right))),
    TokenType::BangEqual => Ok(Value::Bool(!values_equal(&left, &right))),
    _ => unreachable!("the parser never produces a Binary node with any other operator"),
  }
}

/// Division by zero is not special-cased: it yields the platform's IEEE-754
/// `inf`/`nan` like any other floating point division, not a runtime error.
fn numeric(op: &Token, left: Value, right: Value, f: impl Fn(f64, f64) -> f64) -> Result<Value, RuntimeError> {
  match (left, right) {
    (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(a, b))),
    _ => Err(RuntimeError::new(op.clone(), "Operands must be numbers.")),
  }
}

fn comparison(op: &Token, left: Value, right: Value, f: impl Fn(f64, f64) -> bool) -> Result<Value, RuntimeError> {
  match (left, right) {
    (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(f(a, b))),
    _ => Err(RuntimeError::new(op.clone(), "Operands must be numbers.")),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use diagnostic::DiagnosticEngine;

  fn eval(source: &str) -> Result<Value, RuntimeError> {
    let mut engine = DiagnosticEngine::new();
    let tokens = scanner::Scanner::new(source).scan_tokens(&mut engine);
    let mut parse_engine = DiagnosticEngine::new();
    let expr = parser::Parser::new(tokens)
      .parse(&mut parse_engine)
      .expect("expected a valid parse");
    evaluate(&expr)
  }

  #[test]
  fn arithmetic_on_numbers() {
    assert_eq!(eval("1 + 2 * 3").unwrap(), Value::Number(7.0));
  }

  #[test]
  fn string_concatenation() {
    assert_eq!(eval(r#""foo" + "bar""#).unwrap(), Value::String("foobar".to_string()));
  }

  #[test]
  fn mixed_plus_operands_is_a_runtime_error() {
    let err = eval(r#""foo" + 1"#).unwrap_err();
    assert_eq!(err.message, "Operands must be two numbers or two strings.");
  }

  #[test]
  fn unary_minus_requires_a_number() {
    let err = eval(r#"-"a""#).unwrap_err();
    assert_eq!(err.to_string(), "Operand must be a number.\n[line 1]");
  }

  #[test]
  fn division_by_zero_yields_infinity_not_an_error() {
    assert_eq!(eval("1 / 0").unwrap(), Value::Number(f64::INFINITY));
  }

  #[test]
  fn zero_and_empty_string_are_truthy() {
    assert_eq!(eval("!0").unwrap(), Value::Bool(false));
    assert_eq!(eval(r#"!"""#).unwrap(), Value::Bool(false));
  }

  #[test]
  fn nil_and_false_are_falsy() {
    assert_eq!(eval("!nil").unwrap(), Value::Bool(true));
    assert_eq!(eval("!false").unwrap(), Value::Bool(true));
  }

  #[test]
  fn nan_is_never_equal_to_itself() {
    assert_eq!(eval("(0 / 0) == (0 / 0)").unwrap(), Value::Bool(false));
  }

  #[test]
  fn cross_type_equality_is_always_false() {
    assert_eq!(eval(r#"1 == "1""#).unwrap(), Value::Bool(false));
  }

  #[test]
  fn comparison_requires_numbers() {
    let err = eval(r#""a" < "b""#).unwrap_err();
    assert_eq!(err.message, "Operands must be numbers.");
  }
}
