use crate::interval::Interval;
use crate::merge::merge_intervals;

pub fn normalize_intervals(intervals: &mut Vec<Interval>) {
  let merged = merge_intervals(intervals);
  *intervals = merged;
}

/// Checks that `intervals` is well-formed, sorted by start, and that consecutive intervals
/// neither overlap nor touch.
pub fn is_normalized(intervals: &[Interval]) -> bool {
  intervals.iter().all(Interval::is_valid) && intervals.windows(2).all(|pair| !pair[0].touches(&pair[1]))
}
