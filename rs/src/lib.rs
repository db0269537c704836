//! Membership and union-size queries over inclusive integer ranges.
//!
//! Overlapping and adjacent ranges are merged with a single sort-and-sweep pass, so ranges
//! spanning billions of integers cost the same as small ones.

pub use coverage::*;
pub use database::*;
pub use error::*;
pub use interval::*;
pub use merge::*;
pub use normalize::*;

mod coverage;
mod database;
mod error;
mod interval;
mod merge;
mod normalize;
