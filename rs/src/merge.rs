use crate::coverage::RangeCoverage;
use crate::interval::Interval;
use rayon::prelude::*;

/// Interval count above which the initial sort runs on the rayon pool.
pub const PARALLEL_SORT_THRESHOLD: usize = 1 << 14;

/// Merges overlapping or adjacent intervals.
///
/// The result is sorted by start, and consecutive intervals are separated by at least one
/// uncovered integer. Malformed intervals (`start > end`) are not checked here.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
  let mut sorted: Vec<Interval> = intervals.to_vec();
  if sorted.len() >= PARALLEL_SORT_THRESHOLD {
    sorted.par_sort_unstable();
  } else {
    sorted.sort_unstable();
  }
  let merged = merge_sorted_intervals(sorted);
  tracing::debug!(input = intervals.len(), merged = merged.len(), "merged intervals");
  merged
}

/// Sweep over intervals already sorted by start.
fn merge_sorted_intervals(sorted: Vec<Interval>) -> Vec<Interval> {
  let mut merged: Vec<Interval> = Vec::new();
  let mut sorted = sorted.into_iter();
  let mut current: Interval = match sorted.next() {
    None => return merged,
    Some(first) => first,
  };
  for next in sorted {
    if current.touches(&next) {
      current.end = current.end.max(next.end);
    } else {
      merged.push(current);
      current = next;
    }
  }
  merged.push(current);
  merged
}

/// Sum of the lengths of already merged intervals.
pub fn covered_size(merged: &[Interval]) -> u128 {
  merged.iter().map(Interval::len).sum()
}

/// Union of several coverages.
pub fn merge_coverages(coverages: Vec<RangeCoverage>) -> Option<RangeCoverage> {
  match coverages.len() {
    0 => return None,
    1 => return coverages.into_iter().next(),
    _ => {}
  }
  let intervals: Vec<Interval> = coverages
    .par_iter()
    .flat_map_iter(|coverage| coverage.intervals().iter().copied())
    .collect();

  Some(RangeCoverage::from_validated(intervals))
}
