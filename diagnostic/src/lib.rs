pub mod diagnostic;

use diagnostic::Diagnostic;

/// Collector for diagnostics raised while running the scan/parse/evaluate pipeline.
///
/// The engine is the single place that owns the had-error / had-runtime-error
/// flags described by the driver contract: scan and parse diagnostics set
/// `had_error`, a runtime diagnostic sets `had_runtime_error`, and the two are
/// never conflated so the driver can apply the fixed 65-over-70 exit-code
/// precedence after each stage.
#[derive(Debug, Default)]
pub struct DiagnosticEngine {
  diagnostics: Vec<Diagnostic>,
  had_error: bool,
  had_runtime_error: bool,
}

impl DiagnosticEngine {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a diagnostic and write it to the diagnostic stream immediately.
  ///
  /// Lox's scanner keeps producing tokens after a lexical error so a single
  /// run can surface many mistakes; emitting eagerly (rather than buffering
  /// until the end of the pipeline) preserves that behavior without the
  /// driver needing to know the emission order of each stage.
  pub fn emit(&mut self, diagnostic: Diagnostic) {
    tracing::debug!(diagnostic = %diagnostic, "diagnostic emitted");
    eprintln!("{diagnostic}");

    if diagnostic.is_static() {
      self.had_error = true;
    } else {
      self.had_runtime_error = true;
    }

    self.diagnostics.push(diagnostic);
  }

  pub fn had_error(&self) -> bool {
    self.had_error
  }

  pub fn had_runtime_error(&self) -> bool {
    self.had_runtime_error
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lex_error_sets_had_error_not_runtime() {
    let mut engine = DiagnosticEngine::new();
    engine.emit(Diagnostic::lex(3, "Unexpected character: $"));
    assert!(engine.had_error());
    assert!(!engine.had_runtime_error());
  }

  #[test]
  fn runtime_error_sets_had_runtime_error_only() {
    let mut engine = DiagnosticEngine::new();
    engine.emit(Diagnostic::runtime(1, "Operand must be a number."));
    assert!(!engine.had_error());
    assert!(engine.had_runtime_error());
  }

  #[test]
  fn parse_error_at_end_formats_without_lexeme() {
    let d = Diagnostic::parse_at_end(1, "Expect ')' after expression.");
    assert_eq!(
      d.to_string(),
      "[line 1] Error at end: Expect ')' after expression."
    );
  }

  #[test]
  fn parse_error_at_token_formats_with_lexeme() {
    let d = Diagnostic::parse_at(2, "+", "Expect expression.");
    assert_eq!(d.to_string(), "[line 2] Error at '+': Expect expression.");
  }

  #[test]
  fn runtime_error_is_two_lines() {
    let d = Diagnostic::runtime(4, "Operand must be a number.");
    assert_eq!(d.to_string(), "Operand must be a number.\n[line 4]");
  }
}
