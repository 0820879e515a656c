//! Local Binary Pattern descriptor extraction.
//!
//! The operator thresholds a circle of `points` neighbors against the center
//! pixel and packs the comparison bits into a code in `[0, 2^points)`. A
//! histogram of those codes over a subsampled scan, L1-normalized, is the
//! texture descriptor the classifier works with.
//!
//! Pipeline
//! - `lbp_code`: one code for one pixel, neighbors rounded to the pixel grid.
//! - `LbpHistogram::scan`: accumulate codes over the image interior, keeping
//!   a `radius.ceil()` margin so every neighbor lookup stays in-bounds.
//! - `normalized`: divide by the accumulated count, yielding a distribution
//!   that sums to one whenever at least one pixel was sampled.

pub mod code;
pub mod histogram;
pub mod options;

pub use code::lbp_code;
pub use histogram::{compute_descriptor, Descriptor, LbpHistogram};
pub use options::LbpOptions;
