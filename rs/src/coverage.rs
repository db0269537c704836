use crate::error::InvalidIntervalError;
use crate::interval::Interval;
use crate::merge::{covered_size, merge_intervals};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Membership and union-size queries over a set of inclusive intervals.
///
/// The merged representation is computed once at construction: the interval set cannot change
/// afterwards, so it always matches a fresh recomputation.
#[derive(Eq, PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Interval>", into = "Vec<Interval>")]
pub struct RangeCoverage {
  intervals: Vec<Interval>,
  merged: Vec<Interval>,
}

impl RangeCoverage {
  /// Builds a coverage from an unordered collection of intervals.
  ///
  /// Fails on the first interval with `start > end`.
  pub fn new<I>(intervals: I) -> Result<RangeCoverage, InvalidIntervalError>
  where
    I: IntoIterator<Item = Interval>,
  {
    let intervals: Vec<Interval> = intervals.into_iter().collect();
    if let Some((index, bad)) = intervals.iter().enumerate().find(|(_, interval)| !interval.is_valid()) {
      return Err(InvalidIntervalError {
        index,
        start: bad.start,
        end: bad.end,
      });
    }
    Ok(Self::from_validated(intervals))
  }

  pub fn empty() -> RangeCoverage {
    Self::default()
  }

  pub(crate) fn from_validated(intervals: Vec<Interval>) -> RangeCoverage {
    debug_assert!(intervals.iter().all(Interval::is_valid));
    let merged = merge_intervals(&intervals);
    Self { intervals, merged }
  }

  /// Input intervals, in the order they were given.
  pub fn intervals(&self) -> &[Interval] {
    &self.intervals
  }

  /// Sorted, disjoint and non-adjacent intervals with the same union as the input.
  pub fn merged(&self) -> &[Interval] {
    &self.merged
  }

  pub fn len(&self) -> usize {
    self.intervals.len()
  }

  pub fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }

  pub fn is_covered(&self, point: i64) -> bool {
    // First merged interval ending at or after `point`.
    let idx = self.merged.partition_point(|interval| interval.end < point);
    match self.merged.get(idx) {
      Some(interval) => interval.start <= point,
      None => false,
    }
  }

  pub fn count_covered<P>(&self, points: P) -> usize
  where
    P: IntoIterator<Item = i64>,
  {
    points.into_iter().filter(|&point| self.is_covered(point)).count()
  }

  /// Covered points, in input order. Duplicates are kept.
  pub fn covered_points<'a, P>(&'a self, points: P) -> impl Iterator<Item = i64> + 'a
  where
    P: IntoIterator<Item = i64>,
    P::IntoIter: 'a,
  {
    points.into_iter().filter(move |&point| self.is_covered(point))
  }

  /// Number of distinct integers covered by at least one interval.
  pub fn total_covered_size(&self) -> u128 {
    covered_size(&self.merged)
  }
}

impl TryFrom<Vec<Interval>> for RangeCoverage {
  type Error = InvalidIntervalError;

  fn try_from(intervals: Vec<Interval>) -> Result<Self, Self::Error> {
    Self::new(intervals)
  }
}

impl From<RangeCoverage> for Vec<Interval> {
  fn from(coverage: RangeCoverage) -> Self {
    coverage.intervals
  }
}
