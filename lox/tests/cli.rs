use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn lox_with_source(command: &str, source: &str) -> assert_cmd::assert::Assert {
  let mut file = tempfile::NamedTempFile::new().expect("tempfile");
  write!(file, "{source}").expect("write source");

  Command::cargo_bin("lox")
    .expect("bin exists")
    .arg(command)
    .arg(file.path())
    .assert()
}

#[test]
fn tokenize_nested_parens() {
  lox_with_source("tokenize", "(()")
    .code(0)
    .stdout(
      "LEFT_PAREN ( null\nLEFT_PAREN ( null\nRIGHT_PAREN ) null\nEOF  null\n",
    );
}

#[test]
fn tokenize_unterminated_string() {
  lox_with_source("tokenize", "\"foo")
    .code(65)
    .stderr(predicate::str::contains("[line 1] Error: Unterminated string."))
    .stdout(predicate::str::ends_with("EOF  null\n"));
}

#[test]
fn parse_precedence() {
  lox_with_source("parse", "1 + 2 * 3")
    .code(0)
    .stdout("(+ 1 (* 2 3))\n");
}

#[test]
fn parse_missing_closing_paren() {
  lox_with_source("parse", "(1 + 2")
    .code(65)
    .stderr("[line 1] Error at end: Expect ')' after expression.\n")
    .stdout("");
}

#[test]
fn evaluate_string_concatenation() {
  lox_with_source("evaluate", "\"hello\" + \" world\"")
    .code(0)
    .stdout("hello world\n");
}

#[test]
fn evaluate_unary_minus_on_string_is_a_runtime_error() {
  lox_with_source("evaluate", "-\"a\"")
    .code(70)
    .stderr("Operand must be a number.\n[line 1]\n")
    .stdout("");
}

#[test]
fn evaluate_truthiness_of_zero_and_nil_negation() {
  lox_with_source("evaluate", "!nil").code(0).stdout("true\n");
  lox_with_source("evaluate", "!0").code(0).stdout("false\n");
}

#[test]
fn unknown_command_exits_one_with_no_output() {
  lox_with_source("frobnicate", "1 + 2")
    .code(1)
    .stdout("")
    .stderr("");
}

#[test]
fn missing_arguments_exits_one() {
  Command::cargo_bin("lox").expect("bin exists").assert().code(1);
}
