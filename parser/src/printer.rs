use crate::expr::{Expr, LiteralValue};

/// Render an expression in parenthesized prefix form, the format the
/// `parse` command prints. `Grouping` is rendered as `(group <inner>)`
/// specifically so that explicit parentheses stay visually distinct from
/// parentheses introduced by operator precedence.
pub fn print(expr: &Expr) -> String {
  match expr {
    Expr::Binary { left, op, right } => parenthesize(&op.lexeme, &[left.as_ref(), right.as_ref()]),
    Expr::Grouping { inner } => parenthesize("group", &[inner.as_ref()]),
    Expr::Literal { value } => print_literal(value),
    Expr::Unary { op, right } => parenthesize(&op.lexeme, &[right.as_ref()]),
  }
}

fn print_literal(value: &LiteralValue) -> String {
  match value {
    LiteralValue::Nil => "nil".to_string(),
    LiteralValue::Bool(b) => b.to_string(),
    LiteralValue::Number(n) => scanner::format_number(*n),
    LiteralValue::String(s) => s.clone(),
  }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
  let mut out = String::from("(");
  out.push_str(name);
  for expr in exprs {
    out.push(' ');
    out.push_str(&print(expr));
  }
  out.push(')');
  out
}
