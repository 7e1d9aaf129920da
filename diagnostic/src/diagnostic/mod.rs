use std::fmt;

/// A single reportable condition raised by the scanner, parser, or evaluator.
///
/// Each variant renders to the exact textual form the driver writes to the
/// diagnostic stream; the `Display` impl below is the one and only place
/// that format is produced, so the three stages never hand-format a message
/// themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
  /// A lexical error: an unterminated string or an unrecognized character.
  Lex { line: usize, message: String },
  /// A syntactic error, attributed to the token the parser was looking at.
  Parse {
    line: usize,
    /// `true` when the offending token was `EOF` ("at end" instead of the lexeme).
    at_end: bool,
    lexeme: String,
    message: String,
  },
  /// A runtime type error raised during evaluation.
  Runtime { line: usize, message: String },
}

impl Diagnostic {
  pub fn lex(line: usize, message: impl Into<String>) -> Self {
    Self::Lex {
      line,
      message: message.into(),
    }
  }

  pub fn parse_at_end(line: usize, message: impl Into<String>) -> Self {
    Self::Parse {
      line,
      at_end: true,
      lexeme: String::new(),
      message: message.into(),
    }
  }

  pub fn parse_at(line: usize, lexeme: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Parse {
      line,
      at_end: false,
      lexeme: lexeme.into(),
      message: message.into(),
    }
  }

  pub fn runtime(line: usize, message: impl Into<String>) -> Self {
    Self::Runtime {
      line,
      message: message.into(),
    }
  }

  /// `true` for the two categories that set the had-error flag (lex, parse);
  /// `false` for runtime errors, which set a separate flag (see `DiagnosticEngine`).
  pub fn is_static(&self) -> bool {
    !matches!(self, Self::Runtime { .. })
  }
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Lex { line, message } => write!(f, "[line {line}] Error: {message}"),
      Self::Parse {
        line,
        at_end,
        lexeme,
        message,
      } => {
        let location = if *at_end {
          "at end".to_string()
        } else {
          format!("at '{lexeme}'")
        };
        write!(f, "[line {line}] Error {location}: {message}")
      },
      Self::Runtime { line, message } => write!(f, "{message}\n[line {line}]"),
    }
  }
}
