use std::path::PathBuf;

use clap::Parser;

/// `lox <command> <filename>`. `command` stays a bare `String` rather than a
/// clap subcommand enum: an unrecognized command must exit 1 with no
/// output, not clap's own "unrecognized subcommand" usage text.
#[derive(Parser, Debug)]
#[command(name = "lox", about = "A front-end and evaluator for an expression subset of Lox")]
pub struct Cli {
  pub command: String,
  pub path: PathBuf,
}
