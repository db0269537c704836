use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Inclusive integer range `[start, end]`.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
  pub start: i64,
  pub end: i64,
}

impl Interval {
  pub fn new(start: i64, end: i64) -> Interval {
    Self { start, end }
  }

  /// Returns `true` if `start <= end`.
  pub fn is_valid(&self) -> bool {
    self.start <= self.end
  }

  pub fn contains(&self, point: i64) -> bool {
    self.start <= point && point <= self.end
  }

  /// Number of integers in the range, `0` for a malformed one.
  ///
  /// The result is a `u128` so that `[i64::MIN, i64::MAX]` (2^64 integers) stays exact.
  pub fn len(&self) -> u128 {
    if self.is_valid() {
      u128::from(self.end.abs_diff(self.start)) + 1
    } else {
      0
    }
  }

  pub fn is_empty(&self) -> bool {
    !self.is_valid()
  }

  /// Returns `true` if `next` overlaps this interval or starts right after its end.
  ///
  /// Assumes `self.start <= next.start`.
  pub fn touches(&self, next: &Interval) -> bool {
    match self.end.checked_add(1) {
      Some(after_end) => next.start <= after_end,
      None => true,
    }
  }
}

impl Ord for Interval {
  fn cmp(&self, other: &Self) -> Ordering {
    Ord::cmp(&self.start, &other.start).then(Ord::cmp(&self.end, &other.end))
  }
}

impl PartialOrd for Interval {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl From<(i64, i64)> for Interval {
  fn from((start, end): (i64, i64)) -> Self {
    Self::new(start, end)
  }
}

impl fmt::Display for Interval {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.start, self.end)
  }
}
