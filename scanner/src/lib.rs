pub mod token;

use diagnostic::{diagnostic::Diagnostic, DiagnosticEngine};
use token::{
  types::{Literal, TokenType},
  Token,
};

/// Render a number the way every user-visible surface in this crate family
/// needs it: whole numbers without a fractional part, everything else with
/// its full decimal expansion. `42.0_f64` must print `42`, not `42.0`.
pub fn format_number(value: f64) -> String {
  if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
    format!("{value:.0}")
  } else {
    format!("{value}")
  }
}

/// Converts a source string into an ordered sequence of tokens.
///
/// Keeps three cursors over the source: `start` (the beginning of the
/// lexeme currently being scanned), `current` (the next character to
/// consume), and `line` (a 1-based line counter). A lexical error does not
/// abort scanning — it is reported to the `DiagnosticEngine` and the loop
/// continues, so a single run can surface every bad character or
/// unterminated string in the file.
pub struct Scanner<'a> {
  source: &'a [u8],
  tokens: Vec<Token>,
  start: usize,
  current: usize,
  line: usize,
}

impl<'a> Scanner<'a> {
  pub fn new(source: &'a str) -> Self {
    Self {
      source: source.as_bytes(),
      tokens: Vec::new(),
      start: 0,
      current: 0,
      line: 1,
    }
  }

  /// Scan the whole source and return its tokens, terminated by `EOF`.
  pub fn scan_tokens(mut self, engine: &mut DiagnosticEngine) -> Vec<Token> {
    tracing::debug!(len = self.source.len(), "scan started");

    while !self.is_at_end() {
      self.start = self.current;
      self.scan_token(engine);
    }

    self.tokens.push(Token::eof(self.line));
    tracing::debug!(tokens = self.tokens.len(), line = self.line, "scan finished");
    self.tokens
  }

  fn scan_token(&mut self, engine: &mut DiagnosticEngine) {
    let c = self.advance();
    match c {
      b'(' => self.add_token(TokenType::LeftParen),
      b')' => self.add_token(TokenType::RightParen),
      b'{' => self.add_token(TokenType::LeftBrace),
      b'}' => self.add_token(TokenType::RightBrace),
      b',' => self.add_token(TokenType::Comma),
      b'.' => self.add_token(TokenType::Dot),
      b'-' => self.add_token(TokenType::Minus),
      b'+' => self.add_token(TokenType::Plus),
      b';' => self.add_token(TokenType::Semicolon),
      b'*' => self.add_token(TokenType::Star),

      b'!' => {
        let kind = if self.match_char(b'=') {
          TokenType::BangEqual
        } else {
          TokenType::Bang
        };
        self.add_token(kind);
      },
      b'=' => {
        let kind = if self.match_char(b'=') {
          TokenType::EqualEqual
        } else {
          TokenType::Equal
        };
        self.add_token(kind);
      },
      b'<' => {
        let kind = if self.match_char(b'=') {
          TokenType::LessEqual
        } else {
          TokenType::Less
        };
        self.add_token(kind);
      },
      b'>' => {
        let kind = if self.match_char(b'=') {
          TokenType::GreaterEqual
        } else {
          TokenType::Greater
        };
        self.add_token(kind);
      },

      b'/' => {
        if self.match_char(b'/') {
          while self.peek() != Some(b'\n') && !self.is_at_end() {
            self.advance();
          }
        } else {
          self.add_token(TokenType::Slash);
        }
      },

      b' ' | b'\t' | b'\r' => {},
      b'\n' => self.line += 1,

      b'"' => self.string(engine),

      b'0'..=b'9' => self.number(),
      c if c.is_ascii_alphabetic() || c == b'_' => self.identifier(),

      other => {
        engine.emit(Diagnostic::lex(
          self.line,
          format!("Unexpected character: {}", other as char),
        ));
      },
    }
  }

  fn string(&mut self, engine: &mut DiagnosticEngine) {
    while self.peek() != Some(b'"') && !self.is_at_end() {
      if self.peek() == Some(b'\n') {
        self.line += 1;
      }
      self.advance();
    }

    if self.is_at_end() {
      engine.emit(Diagnostic::lex(self.line, "Unterminated string."));
      return;
    }

    self.advance(); // the closing quote
    let contents = self.slice(self.start + 1, self.current - 1).to_string();
    self.push_token(TokenType::String, Some(Literal::String(contents)));
  }

  fn number(&mut self) {
    while self.peek().is_some_and(|c| c.is_ascii_digit()) {
      self.advance();
    }

    if self.peek() == Some(b'.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
      self.advance(); // consume the '.'
      while self.peek().is_some_and(|c| c.is_ascii_digit()) {
        self.advance();
      }
    }

    let lexeme = self.current_lexeme();
    let value: f64 = lexeme
      .parse()
      .expect("number lexeme is always a valid decimal literal");
    self.push_token(TokenType::Number, Some(Literal::Number(value)));
  }

  fn identifier(&mut self) {
    while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_') {
      self.advance();
    }

    let kind = TokenType::keyword(self.current_lexeme()).unwrap_or(TokenType::Identifier);
    self.add_token(kind);
  }

  fn add_token(&mut self, kind: TokenType) {
    self.push_token(kind, None);
  }

  fn push_token(&mut self, kind: TokenType, literal: Option<Literal>) {
    let lexeme = self.current_lexeme().to_string();
    self.tokens.push(Token::new(kind, lexeme, literal, self.line));
  }

  fn current_lexeme(&self) -> &str {
    self.slice(self.start, self.current)
  }

  fn slice(&self, start: usize, end: usize) -> &str {
    std::str::from_utf8(&self.source[start..end]).expect("scanner only slices on ASCII boundaries")
  }

  fn is_at_end(&self) -> bool {
    self.current >= self.source.len()
  }

  fn advance(&mut self) -> u8 {
    let c = self.source[self.current];
    self.current += 1;
    c
  }

  fn peek(&self) -> Option<u8> {
    self.source.get(self.current).copied()
  }

  fn peek_next(&self) -> Option<u8> {
    self.source.get(self.current + 1).copied()
  }

  fn match_char(&mut self, expected: u8) -> bool {
    if self.peek() != Some(expected) {
      return false;
    }
    self.current += 1;
    true
  }
}
