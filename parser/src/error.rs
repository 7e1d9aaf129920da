use thiserror::Error;

/// Signals "a syntax error was already reported to the diagnostic engine,
/// unwind to the top of the parser." Carries no message of its own — the
/// message was already formatted and emitted at the point of failure — so
/// this is just a control-flow marker propagated with `?`.
#[derive(Debug, Error)]
#[error("parse aborted after a syntax error")]
pub struct ParseError;
