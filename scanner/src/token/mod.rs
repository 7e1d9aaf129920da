pub mod types;

use std::fmt;

use types::{Literal, TokenType};

/// A single lexical unit: the kind, the exact source slice, the interpreted
/// literal (if any), and the 1-based line the lexeme started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
  pub kind: TokenType,
  pub lexeme: String,
  pub literal: Option<Literal>,
  pub line: usize,
}

impl Token {
  pub fn new(kind: TokenType, lexeme: impl Into<String>, literal: Option<Literal>, line: usize) -> Self {
    Self {
      kind,
      lexeme: lexeme.into(),
      literal,
      line,
    }
  }

  pub fn eof(line: usize) -> Self {
    Self::new(TokenType::Eof, "", None, line)
  }

  pub fn is_eof(&self) -> bool {
    self.kind == TokenType::Eof
  }
}

/// `<KIND> <lexeme> <literal-or-"null">`, the exact line format `tokenize` prints.
impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.literal {
      Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
      None => write!(f, "{} {} null", self.kind, self.lexeme),
    }
  }
}
