mod cli;
mod driver;
mod error;

use clap::Parser as _;
use diagnostic::DiagnosticEngine;

use cli::Cli;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) => {
      use clap::error::ErrorKind;
      match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
          print!("{err}");
          std::process::exit(0);
        },
        _ => std::process::exit(1),
      }
    },
  };

  let mut engine = DiagnosticEngine::new();

  let exit_code = match driver::run(&cli.command, &cli.path, &mut engine) {
    Ok(code) => code,
    Err(err) => {
      eprintln!("{err}");
      1
    },
  };

  std::process::exit(exit_code);
}
