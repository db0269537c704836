use std::num::ParseIntError;
use thiserror::Error;

/// An interval whose start is greater than its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid interval at index {index}: start {start} is greater than end {end}")]
pub struct InvalidIntervalError {
  pub index: usize,
  pub start: i64,
  pub end: i64,
}

#[derive(Debug, Error)]
pub enum ParseError {
  #[error("line {line}: expected a `start-end` range, found {entry:?}")]
  MissingSeparator { line: usize, entry: String },

  #[error("line {line}: invalid integer {value:?}: {source}")]
  InvalidNumber {
    line: usize,
    value: String,
    #[source]
    source: ParseIntError,
  },

  #[error("failed to read database: {0}")]
  Io(#[from] std::io::Error),
}
