use std::{fs, path::Path};

use diagnostic::{diagnostic::Diagnostic, DiagnosticEngine};
use parser::{printer, Parser};
use scanner::Scanner;

use crate::error::DriverError;

/// Exit code contract: `0` success, `65` a scan or parse error occurred,
/// `70` a runtime error occurred, `1` an unrecognized command. Never mixed
/// in one run; 65 is checked before a later stage gets to run at all.
pub const EXIT_SCAN_OR_PARSE_ERROR: i32 = 65;
pub const EXIT_RUNTIME_ERROR: i32 = 70;
pub const EXIT_UNKNOWN_COMMAND: i32 = 1;

/// Run one command against a source file and return the process exit code.
/// `tokenize`/`parse`/`evaluate` each imply every earlier stage; an earlier
/// stage's error halts the pipeline before the next stage starts.
pub fn run(command: &str, path: &Path, engine: &mut DiagnosticEngine) -> Result<i32, DriverError> {
  if !matches!(command, "tokenize" | "parse" | "evaluate") {
    return Ok(EXIT_UNKNOWN_COMMAND);
  }

  let source = fs::read_to_string(path).map_err(|source| DriverError::Io {
    path: path.to_path_buf(),
    source,
  })?;

  tracing::debug!(command, path = %path.display(), "driver started");

  let tokens = Scanner::new(&source).scan_tokens(engine);

  if command == "tokenize" {
    for token in &tokens {
      println!("{token}");
    }
    return Ok(if engine.had_error() { EXIT_SCAN_OR_PARSE_ERROR } else { 0 });
  }

  if engine.had_error() {
    return Ok(EXIT_SCAN_OR_PARSE_ERROR);
  }

  let expr = match Parser::new(tokens).parse(engine) {
    Ok(expr) => expr,
    Err(_) => return Ok(EXIT_SCAN_OR_PARSE_ERROR),
  };

  if command == "parse" {
    println!("{}", printer::print(&expr));
    return Ok(0);
  }

  debug_assert_eq!(command, "evaluate");
  match evaluator::evaluate(&expr) {
    Ok(value) => {
      println!("{value}");
      Ok(0)
    },
    Err(err) => {
      engine.emit(Diagnostic::runtime(err.token.line, err.message.clone()));
      Ok(EXIT_RUNTIME_ERROR)
    },
  }
}
