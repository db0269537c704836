//! Puzzle database: a list of fresh ID ranges, a blank line, then a list of available IDs.
//!
//! ```text
//! 3-5
//! 10-14
//! 16-20
//! 12-18
//!
//! 1
//! 5
//! 8
//! ```
//!
//! Ranges may also be separated by commas (`3-5,10-14`).

use crate::coverage::RangeCoverage;
use crate::error::{InvalidIntervalError, ParseError};
use crate::interval::Interval;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Eq, PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
  pub intervals: Vec<Interval>,
  pub points: Vec<i64>,
}

impl Database {
  pub fn parse(text: &str) -> Result<Database, ParseError> {
    let mut intervals: Vec<Interval> = Vec::new();
    let mut points: Vec<i64> = Vec::new();
    let mut in_points = false;

    for (idx, line) in text.lines().enumerate() {
      let line_no = idx + 1;
      let line = line.trim();
      if line.is_empty() {
        // Only the first blank line after some ranges separates the sections.
        if !intervals.is_empty() {
          in_points = true;
        }
        continue;
      }
      if in_points {
        points.push(parse_int(line, line_no)?);
      } else {
        for entry in line.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
          intervals.push(parse_interval(entry, line_no)?);
        }
      }
    }

    tracing::debug!(intervals = intervals.len(), points = points.len(), "parsed database");
    Ok(Database { intervals, points })
  }

  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Database, ParseError> {
    let text = fs::read_to_string(path)?;
    Self::parse(&text)
  }

  pub fn coverage(&self) -> Result<RangeCoverage, InvalidIntervalError> {
    RangeCoverage::new(self.intervals.iter().copied())
  }

  /// Number of available IDs that fall in at least one fresh range.
  pub fn fresh_count(&self) -> Result<usize, InvalidIntervalError> {
    Ok(self.coverage()?.count_covered(self.points.iter().copied()))
  }

  /// Number of distinct IDs considered fresh by the ranges.
  pub fn fresh_id_total(&self) -> Result<u128, InvalidIntervalError> {
    Ok(self.coverage()?.total_covered_size())
  }
}

impl FromStr for Database {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

fn parse_interval(entry: &str, line: usize) -> Result<Interval, ParseError> {
  // Skip the first character so that a leading minus sign is not taken as the separator.
  let sep = entry
    .char_indices()
    .skip(1)
    .find(|&(_, c)| c == '-')
    .map(|(idx, _)| idx)
    .ok_or_else(|| ParseError::MissingSeparator {
      line,
      entry: entry.to_string(),
    })?;
  let start = parse_int(entry[..sep].trim(), line)?;
  let end = parse_int(entry[sep + 1..].trim(), line)?;
  Ok(Interval::new(start, end))
}

fn parse_int(value: &str, line: usize) -> Result<i64, ParseError> {
  value.parse().map_err(|source| ParseError::InvalidNumber {
    line,
    value: value.to_string(),
    source,
  })
}
