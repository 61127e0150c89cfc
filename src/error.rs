//! Errors raised by the scan-line optimizer.
//!
//! `InvalidInput` and `InvalidConfig` fail fast; nothing in this crate retries.
//! [`Error::QualityNotReached`] is only produced on request, see
//! [`Outcome::require_quality`](crate::solver::Outcome::require_quality).

use {
  crate::solver::Outcome,
  thiserror::Error
};

#[derive(Error, Debug)]
pub enum Error {
  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("genome invariant violated: expected {expected} lines, got {actual}")]
  GenomeInvariantViolation { expected: usize, actual: usize },

  #[error(
    "scan-line {} stopped at fitness {:.3} after {} iterations",
    .0.genome.scan_index, .0.fitness, .0.iterations
  )]
  QualityNotReached(Box<Outcome>),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn invalid_input(msg: impl Into<String>) -> Error {
  Error::InvalidInput(msg.into())
}

pub(crate) fn invalid_config(msg: impl Into<String>) -> Error {
  Error::InvalidConfig(msg.into())
}
