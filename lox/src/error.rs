use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the driver before any pipeline stage runs.
#[derive(Debug, Error)]
pub enum DriverError {
  #[error("could not read file '{path}': {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
